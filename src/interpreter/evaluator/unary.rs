use std::io::{BufRead, Write};

use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::eval_binary,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

/// Negates a number.
///
/// # Returns
/// - `Ok(Value)`: The negated number.
/// - `Err(RuntimeError::UnaryTypeMismatch)`: For any other value.
/// - `Err(RuntimeError::Overflow)`: When negating the smallest integer.
///
/// # Example
/// ```
/// use aslang::interpreter::{evaluator::unary::eval_negate, value::core::Value};
///
/// assert_eq!(eval_negate(&Value::from(5)), Ok(Value::from(-5)));
/// assert_eq!(eval_negate(&Value::from("5")).unwrap_err().to_string(),
///            "You can't use '-' with type 'text'!");
/// ```
pub fn eval_negate(value: &Value) -> Result<Value, RuntimeError> {
    let op = UnaryOperator::Negate.symbol();

    match value {
        Value::Number(n) => n.checked_neg()
                             .map(Value::from)
                             .ok_or(RuntimeError::Overflow { op }),
        other => Err(RuntimeError::UnaryTypeMismatch { op,
                                                       operand: other.type_name() }),
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates a unary node.
    ///
    /// `uminus` negates its evaluated operand. `inc` and `dec` take a name,
    /// step the bound value by one, store it and return it.
    pub(crate) fn eval_unary_op(&mut self, node: &Node, op: UnaryOperator) -> EvalResult<Value> {
        node.expect_arity(1)?;

        match op {
            UnaryOperator::Negate => {
                let value = self.eval_operand(node.child(0)?)?;
                Ok(eval_negate(&value)?)
            },
            UnaryOperator::Increment => self.eval_step(node.token(0)?, BinaryOperator::Add),
            UnaryOperator::Decrement => self.eval_step(node.token(0)?, BinaryOperator::Sub),
        }
    }

    fn eval_step(&mut self, name: &str, op: BinaryOperator) -> EvalResult<Value> {
        let current = self.store
                          .get(name)
                          .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string() })?;
        let stepped = eval_binary(op, current, &Value::from(1))?;

        self.store.set(name, stepped.clone());
        Ok(stepped)
    }
}
