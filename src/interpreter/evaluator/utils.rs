use std::io::{BufRead, Write};

use crate::{
    ast::Node,
    error::{RuntimeError, TreeError},
    interpreter::{
        evaluator::{
            array::check_depth,
            core::{Context, EvalResult},
        },
        value::{array::Array, core::Value},
    },
    util::num::{i64_to_usize_checked, usize_to_i64_saturating},
};

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates a child node and ensures that it produces a value.
    ///
    /// Assignments, list elements and array writes all need a concrete value;
    /// a child that yields nothing, or only the break marker, is reported as
    /// [`RuntimeError::MissingValue`]. The marker never reaches the store.
    pub(crate) fn eval_present(&mut self, node: &Node) -> EvalResult<Value> {
        let value = self.eval_operand(node)?;
        if value.is_absent() {
            return Err(RuntimeError::MissingValue.into());
        }
        Ok(value)
    }

    /// Evaluates an operand of an operator or of `print`.
    ///
    /// A missing value is passed on, so operators can name it in their type
    /// errors. The break marker is rejected.
    pub(crate) fn eval_operand(&mut self, node: &Node) -> EvalResult<Value> {
        let value = self.eval(node)?;
        if value.is_break() {
            return Err(RuntimeError::MissingValue.into());
        }
        Ok(value)
    }

    /// Evaluates `statement-expr` and `paren` nodes, which yield their only
    /// operand.
    pub(crate) fn eval_wrapped(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;
        self.eval(node.child(0)?)
    }

    /// Evaluates `assign name expr`.
    ///
    /// The value is stored whatever the type of the previous binding and is
    /// also the result of the node. Arrays are stored by reference.
    pub(crate) fn eval_assign(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(2)?;
        let name = node.token(0)?;
        let value = self.eval_present(node.child(1)?)?;

        self.store.set(name, value.clone());
        Ok(value)
    }

    /// Looks up a variable by name.
    pub(crate) fn eval_name(&self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;
        let name = node.token(0)?;

        self.store
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string() }.into())
    }

    /// Evaluates a numeric literal: an integer if the token parses as one,
    /// otherwise a float.
    pub(crate) fn eval_number(node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;
        let token = node.token(0)?;

        if let Ok(n) = token.parse::<i64>() {
            return Ok(Value::from(n));
        }
        token.parse::<f64>()
             .map(Value::from)
             .map_err(|_| {
                 TreeError::InvalidLiteral { kind:  node.kind.clone(),
                                             token: token.to_string(), }.into()
             })
    }

    /// Evaluates a text literal.
    pub(crate) fn eval_text(node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;
        Ok(Value::from(node.token(0)?))
    }

    /// Evaluates a list literal into a new array, element by element.
    pub(crate) fn eval_list(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;

        let elements = node.child_nodes(0)?;
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.eval_present(element)?);
        }

        let array = Array::new(values);
        check_depth(array.depth())?;
        Ok(Value::Array(array))
    }

    /// Evaluates `index base idx`.
    pub(crate) fn eval_index(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(2)?;
        let base = self.eval_operand(node.child(0)?)?;
        let index = self.eval_operand(node.child(1)?)?;

        Ok(index_value(&base, &index)?)
    }
}

/// Indexes an array or a text value.
///
/// Negative indices count from the end. Indexing text yields a
/// one-character text.
///
/// # Errors
/// - [`RuntimeError::NotIndexable`] if `base` is neither an array nor text.
/// - [`RuntimeError::InvalidSequenceIndex`] if `index` is not integral.
/// - [`RuntimeError::IndexOutOfRange`] if `index` is past either end.
///
/// # Example
/// ```
/// use aslang::interpreter::{evaluator::utils::index_value, value::core::Value};
///
/// let word = Value::from("rust");
///
/// assert_eq!(index_value(&word, &Value::from(0)), Ok(Value::from("r")));
/// assert_eq!(index_value(&word, &Value::from(-1)), Ok(Value::from("t")));
/// assert_eq!(index_value(&word, &Value::from(4)).unwrap_err().to_string(),
///            "Index 4 is out of range!");
/// ```
pub fn index_value(base: &Value, index: &Value) -> Result<Value, RuntimeError> {
    let len = match base {
        Value::Array(array) => array.len(),
        Value::Text(text) => text.chars().count(),
        other => return Err(RuntimeError::NotIndexable { found: other.type_name() }),
    };

    let requested = index.as_number()
                         .and_then(|n| n.to_integral())
                         .ok_or_else(|| RuntimeError::InvalidSequenceIndex { index: index.to_string() })?;
    let out_of_range = RuntimeError::IndexOutOfRange { index: requested };

    let wrapped = if requested < 0 {
        requested.checked_add(usize_to_i64_saturating(len))
                 .ok_or_else(|| out_of_range.clone())?
    } else {
        requested
    };
    let position = i64_to_usize_checked(wrapped, out_of_range.clone())?;

    let element = match base {
        Value::Array(array) => array.get(position),
        Value::Text(text) => text.chars().nth(position).map(|c| Value::from(c.to_string())),
        _ => None,
    };
    element.ok_or(out_of_range)
}
