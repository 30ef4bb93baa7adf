use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates a logical operation between two already evaluated values.
///
/// Both operands are always evaluated before this is called; the result only
/// depends on their truthiness and is `1` or `0`.
///
/// # Example
/// ```
/// use aslang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// assert_eq!(eval_logic(BinaryOperator::And, &Value::from("x"), &Value::from(0)), Value::from(0));
/// assert_eq!(eval_logic(BinaryOperator::Or, &Value::from(""), &Value::from(2.5)), Value::from(1));
/// ```
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOperator::And => Value::from(left.is_truthy() && right.is_truthy()),
        BinaryOperator::Or => Value::from(left.is_truthy() || right.is_truthy()),
        _ => unreachable!("eval_logic used with non logical operator"),
    }
}
