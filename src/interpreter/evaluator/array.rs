use std::io::{BufRead, Write};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::sequence::{MAX_ELEMENTS, check_size},
            core::{Context, EvalResult},
        },
        value::{array::Array, core::Value},
    },
    util::num::{i64_to_usize_checked, saturating_product, usize_to_i64_saturating},
};

/// Deepest nesting of arrays a program may build.
pub const MAX_ARRAY_DEPTH: usize = 64;

/// Rejects arrays nested deeper than [`MAX_ARRAY_DEPTH`].
///
/// # Example
/// ```
/// use aslang::interpreter::evaluator::array::{MAX_ARRAY_DEPTH, check_depth};
///
/// assert!(check_depth(MAX_ARRAY_DEPTH).is_ok());
/// assert!(check_depth(MAX_ARRAY_DEPTH + 1).is_err());
/// ```
pub const fn check_depth(depth: usize) -> Result<(), RuntimeError> {
    if depth > MAX_ARRAY_DEPTH {
        return Err(RuntimeError::TooDeep { max: MAX_ARRAY_DEPTH });
    }
    Ok(())
}

/// Validates array dimensions and converts them to sizes.
///
/// Every dimension must be a non-negative, integral number. The total number
/// of arrays and leaves the shape would allocate must stay within
/// [`MAX_ELEMENTS`], and the rank within [`MAX_ARRAY_DEPTH`].
///
/// # Errors
/// - [`RuntimeError::TooDeep`] when there are too many dimensions.
/// - [`RuntimeError::DimensionNotPositive`] for negative or non-numeric
///   dimensions.
/// - [`RuntimeError::FractionalDimension`] for fractional or non-finite
///   dimensions.
/// - [`RuntimeError::TooLarge`] when the shape is too big to build.
///
/// # Example
/// ```
/// use aslang::interpreter::{evaluator::array::validate_dimensions, value::core::Value};
///
/// assert_eq!(validate_dimensions(&[Value::from(2), Value::from(3.0)]), Ok(vec![2, 3]));
/// assert_eq!(validate_dimensions(&[Value::from(-1)]).unwrap_err().to_string(),
///            "Array dimension must be a positive number, got -1");
/// assert_eq!(validate_dimensions(&[Value::from(2.5)]).unwrap_err().to_string(),
///            "Array dimension must be an integer, got 2.5");
/// ```
pub fn validate_dimensions(dims: &[Value]) -> Result<Vec<usize>, RuntimeError> {
    check_depth(dims.len())?;

    let mut sizes = Vec::with_capacity(dims.len());

    for dim in dims {
        let Some(n) = dim.as_number().filter(|n| !n.is_negative()) else {
            return Err(RuntimeError::DimensionNotPositive { dim: dim.to_string() });
        };
        let whole = n.to_integral()
                     .ok_or_else(|| RuntimeError::FractionalDimension { dim: dim.to_string() })?;
        let size = i64_to_usize_checked(whole,
                                        RuntimeError::TooLarge { requested: usize::MAX,
                                                                 limit:     MAX_ELEMENTS, })?;
        sizes.push(size);
    }

    let allocated = (1..=sizes.len()).map(|depth| saturating_product(&sizes[..depth]))
                                     .fold(0_usize, usize::saturating_add);
    check_size(allocated)?;

    Ok(sizes)
}

/// Validates array coordinates against the actual structure of `array`.
///
/// Coordinates are checked dimension by dimension, descending into the array
/// as they go, so the check reflects the real depth and length at every level.
///
/// # Errors
/// - [`RuntimeError::TooManyIndices`] when a coordinate addresses below a
///   leaf.
/// - [`RuntimeError::NonIntegerIndex`] for fractional or non-numeric
///   coordinates.
/// - [`RuntimeError::IndexOutOfBounds`] for negative or too large
///   coordinates.
///
/// # Example
/// ```
/// use aslang::interpreter::{
///     evaluator::array::validate_indices,
///     value::{array::Array, core::Value},
/// };
///
/// let grid = Array::zeroed(&[2, 3]);
///
/// assert_eq!(validate_indices(&grid, &[Value::from(1), Value::from(2)]), Ok(vec![1, 2]));
/// assert_eq!(validate_indices(&grid, &[Value::from(1), Value::from(3)]).unwrap_err().to_string(),
///            "Index 3 is out of range for dimension 1");
///
/// let too_deep = validate_indices(&grid, &[Value::from(0), Value::from(0), Value::from(0)]);
/// assert_eq!(too_deep.unwrap_err().to_string(), "Too many indices for array dimension 2");
/// ```
pub fn validate_indices(array: &Array, indices: &[Value]) -> Result<Vec<usize>, RuntimeError> {
    let mut positions = Vec::with_capacity(indices.len());
    let mut current = Value::Array(array.clone());

    for (dimension, index) in indices.iter().enumerate() {
        let Value::Array(level) = current else {
            return Err(RuntimeError::TooManyIndices { dimension });
        };
        let whole = index.as_number()
                         .and_then(|n| n.to_integral())
                         .ok_or_else(|| RuntimeError::NonIntegerIndex { index: index.to_string() })?;
        let out_of_bounds = RuntimeError::IndexOutOfBounds { index: whole,
                                                             dimension };
        let position = i64_to_usize_checked(whole, out_of_bounds.clone())?;

        current = level.get(position).ok_or(out_of_bounds)?;
        positions.push(position);
    }

    Ok(positions)
}

/// Returns the value at validated `positions`. Stopping above the leaves
/// yields the shared sub-array.
#[must_use]
pub fn element_at(array: &Array, positions: &[usize]) -> Option<Value> {
    positions.iter()
             .try_fold(Value::Array(array.clone()), |current, &position| match current {
                 Value::Array(level) => level.get(position),
                 _ => None,
             })
}

/// Writes `value` at validated `positions` of the array bound to `name`.
///
/// The positions must address a leaf, and the value must not be an array, so
/// that arrays never contain themselves.
///
/// # Errors
/// - [`RuntimeError::TooFewIndices`] when the positions stop above the
///   leaves.
/// - [`RuntimeError::NestedArrayElement`] when `value` is an array.
pub fn assign_element(array: &Array,
                      positions: &[usize],
                      value: Value,
                      name: &str)
                      -> Result<(), RuntimeError> {
    let Some((&last, path)) = positions.split_last() else {
        return Err(RuntimeError::TooFewIndices { dimension: 0 });
    };
    let Some(Value::Array(parent)) = element_at(array, path) else {
        return Err(RuntimeError::TooManyIndices { dimension: path.len() });
    };

    if matches!(parent.get(last), Some(Value::Array(_))) {
        return Err(RuntimeError::TooFewIndices { dimension: positions.len() });
    }
    if matches!(value, Value::Array(_)) {
        return Err(RuntimeError::NestedArrayElement { name: name.to_string() });
    }

    parent.set(last, value)
          .map(|_| ())
          .ok_or(RuntimeError::IndexOutOfBounds { index:     usize_to_i64_saturating(last),
                                                  dimension: path.len(), })
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates `arrayKd d1 .. dK`: a new zero-filled array of that shape.
    pub(crate) fn eval_array_new(&mut self, node: &Node, rank: usize) -> EvalResult<Value> {
        node.expect_arity(rank)?;

        let dims = self.eval_children(node, 0, rank)?;
        let sizes = validate_dimensions(&dims)?;
        Ok(Value::Array(Array::zeroed(&sizes)))
    }

    /// Evaluates `array_accessKd name i1 .. iK`.
    pub(crate) fn eval_array_access(&mut self, node: &Node, rank: usize) -> EvalResult<Value> {
        node.expect_arity(rank + 1)?;
        let array = self.resolve_array(node.token(0)?)?;

        let indices = self.eval_children(node, 1, rank)?;
        let positions = validate_indices(&array, &indices)?;
        Ok(element_at(&array, &positions).unwrap_or_default())
    }

    /// Evaluates `array_assignKd name i1 .. iK value`.
    ///
    /// The array, the coordinates and the value are all resolved before
    /// anything is checked, and nothing is written unless every check passes.
    pub(crate) fn eval_array_assign(&mut self, node: &Node, rank: usize) -> EvalResult<Value> {
        node.expect_arity(rank + 2)?;
        let name = node.token(0)?;
        let array = self.resolve_array(name)?;

        let indices = self.eval_children(node, 1, rank)?;
        let value = self.eval_present(node.child(rank + 1)?)?;

        let positions = validate_indices(&array, &indices)?;
        assign_element(&array, &positions, value.clone(), name)?;
        Ok(value)
    }

    fn resolve_array(&self, name: &str) -> Result<Array, RuntimeError> {
        match self.store.get(name) {
            Some(Value::Array(array)) => Ok(array.clone()),
            Some(other) => Err(RuntimeError::NotAnArray { name:  name.to_string(),
                                                          found: other.type_name(), }),
            None => Err(RuntimeError::UndefinedArray { name: name.to_string() }),
        }
    }

    fn eval_children(&mut self, node: &Node, start: usize, count: usize) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(count);
        for index in start..start + count {
            values.push(self.eval(node.child(index)?)?);
        }
        Ok(values)
    }
}
