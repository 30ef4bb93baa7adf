use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Collapses the results of a statement list into a single value.
///
/// A list that produced a break yields [`Value::Break`] so that a `break`
/// nested in a conditional still reaches its loop. Otherwise the last result
/// wins, and an empty list yields [`Value::Absent`].
///
/// # Example
/// ```
/// use aslang::interpreter::{evaluator::control::fold_results, value::core::Value};
///
/// assert_eq!(fold_results(vec![Value::from(1), Value::from(2)]), Value::from(2));
/// assert_eq!(fold_results(vec![Value::Break, Value::from(2)]), Value::Break);
/// assert_eq!(fold_results(Vec::new()), Value::Absent);
/// ```
#[must_use]
pub fn fold_results(mut results: Vec<Value>) -> Value {
    if results.iter().any(Value::is_break) {
        return Value::Break;
    }
    results.pop().unwrap_or_default()
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates the program root. Its statement results are discarded.
    pub(crate) fn eval_main(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;
        self.eval(node.child(0)?)?;
        Ok(Value::Absent)
    }

    /// Evaluates every statement of a `statements` node in order and returns
    /// their individual results.
    ///
    /// Each statement is a reporting boundary: a statement that fails writes
    /// its diagnostic, yields [`Value::Absent`], and the following statements
    /// still run.
    ///
    /// # Errors
    /// Returns an error if the tree is malformed or a stream fails.
    pub fn eval_statement_results(&mut self, node: &Node) -> EvalResult<Vec<Value>> {
        node.expect_arity(1)?;

        let statements = node.child_nodes(0)?;
        let mut results = Vec::with_capacity(statements.len());
        for statement in statements {
            results.push(self.eval_guarded(statement)?);
        }
        Ok(results)
    }

    /// Evaluates a `statements` node used as a value.
    pub(crate) fn eval_statements(&mut self, node: &Node) -> EvalResult<Value> {
        let results = self.eval_statement_results(node)?;
        Ok(fold_results(results))
    }

    /// Evaluates `if-elif-else cond then elif_cond elif_branch else_branch`.
    ///
    /// Conditions are evaluated lazily, in order; the elif condition only runs
    /// when the first condition is false. The elif pair and the else branch may
    /// be `nil`. The first branch whose condition holds is evaluated and
    /// returned; if none does and there is no else branch, there is no value.
    pub(crate) fn eval_if_elif_else(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(5)?;

        if self.eval_condition(node.child(0)?)? {
            return self.eval(node.child(1)?);
        }

        if let Some(elif_condition) = node.optional_child(2)?
           && self.eval_condition(elif_condition)?
        {
            return self.eval(node.child(3)?);
        }

        match node.optional_child(4)? {
            Some(else_branch) => self.eval(else_branch),
            None => Ok(Value::Absent),
        }
    }

    /// Evaluates `while cond body`.
    ///
    /// The body runs while the condition is truthy. An iteration whose body
    /// produced a break is completed and then ends the loop. A loop never
    /// yields a value.
    pub(crate) fn eval_while(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(2)?;
        let condition = node.child(0)?;
        let body = node.child(1)?;

        let mut iterations: u64 = 0;
        while self.eval_condition(condition)? {
            iterations += 1;
            if self.eval_guarded(body)?.is_break() {
                trace!(iterations, "loop left through break");
                return Ok(Value::Absent);
            }
        }

        trace!(iterations, "loop condition became false");
        Ok(Value::Absent)
    }
}
