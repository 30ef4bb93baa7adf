use std::io::{BufRead, Write};

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic,
                power::eval_pow, sequence::eval_sequence,
            },
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

/// Builds the diagnostic for an operator applied to unsupported operand types.
#[must_use]
pub fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::TypeMismatch { op:    op.symbol(),
                                 left:  left.type_name(),
                                 right: right.type_name(), }
}

/// Evaluates a binary operation between two values.
///
/// Arithmetic on two numbers goes to `eval_arithmetic`, arithmetic involving
/// text or arrays to `eval_sequence`. Power calls `eval_pow`. Comparisons and
/// logical connectives never fail.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// The computed value, or the `RuntimeError` to report.
///
/// # Example
/// ```
/// use aslang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::from(5), &Value::from(3));
/// assert_eq!(sum, Ok(Value::from(8)));
///
/// let greeting = eval_binary(BinaryOperator::Add, &Value::from("ab"), &Value::from("cd"));
/// assert_eq!(greeting, Ok(Value::from("abcd")));
///
/// let mismatch = eval_binary(BinaryOperator::Sub, &Value::from("ab"), &Value::from(1));
/// assert_eq!(mismatch.unwrap_err().to_string(),
///            "You can't use '-' with types 'text' and 'int'!");
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Pow,
        Sub,
    };

    match op {
        Add | Sub | Mul | Div | Mod => match (left, right) {
            (Value::Number(a), Value::Number(b)) => eval_arithmetic(op, *a, *b),
            _ => eval_sequence(op, left, right),
        },

        Pow => match (left, right) {
            (Value::Number(base), Value::Number(exponent)) => eval_pow(*base, *exponent),
            _ => Err(type_mismatch(op, left, right)),
        },

        Equal | NotEqual | Greater | GreaterEqual | Less | LessEqual => {
            Ok(eval_comparison(op, left, right))
        },

        And | Or => Ok(eval_logic(op, left, right)),
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates a binary node: both operands left to right, then the
    /// operator.
    pub(crate) fn eval_binary_op(&mut self, node: &Node, op: BinaryOperator) -> EvalResult<Value> {
        node.expect_arity(2)?;
        let left = self.eval_operand(node.child(0)?)?;
        let right = self.eval_operand(node.child(1)?)?;

        Ok(eval_binary(op, &left, &right)?)
    }
}
