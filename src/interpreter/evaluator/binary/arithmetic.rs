use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::value::{core::Value, number::Number},
};

/// Evaluates `+ - * / %` on two numbers.
///
/// Division always produces a float. The other operators keep integer
/// results when both operands are integers and promote to float otherwise.
/// Remainder is truncated: its sign follows the dividend.
///
/// # Parameters
/// - `op`: One of `Add`, `Sub`, `Mul`, `Div` or `Mod`.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// - `Ok(Value)`: The result.
/// - `Err(RuntimeError::DivisionByZero)`: For `/` or `%` by zero.
/// - `Err(RuntimeError::Overflow)`: When integer arithmetic overflows.
///
/// # Example
/// ```
/// use aslang::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::arithmetic::eval_arithmetic,
///         value::{core::Value, number::Number},
///     },
/// };
///
/// let quotient = eval_arithmetic(BinaryOperator::Div, Number::Int(7), Number::Int(2));
/// assert_eq!(quotient, Ok(Value::from(3.5)));
///
/// let remainder = eval_arithmetic(BinaryOperator::Mod, Number::Int(-7), Number::Int(3));
/// assert_eq!(remainder, Ok(Value::from(-1)));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: Number,
                       right: Number)
                       -> Result<Value, RuntimeError> {
    if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && right.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    if op == BinaryOperator::Div {
        return Ok(Value::from(left.as_f64() / right.as_f64()));
    }

    match (left, right) {
        (Number::Int(a), Number::Int(b)) => eval_integer(op, a, b),
        _ => Ok(Value::from(eval_float(op, left.as_f64(), right.as_f64()))),
    }
}

fn eval_integer(op: BinaryOperator, a: i64, b: i64) -> Result<Value, RuntimeError> {
    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Mod => a.checked_rem(b),
        _ => unreachable!("eval_integer used with non arithmetic operator"),
    };

    result.map(Value::from)
          .ok_or(RuntimeError::Overflow { op: op.symbol() })
}

fn eval_float(op: BinaryOperator, a: f64, b: f64) -> f64 {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Mod => a % b,
        _ => unreachable!("eval_float used with non arithmetic operator"),
    }
}
