use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::core::type_mismatch,
        value::{array::Array, core::Value, number::Number},
    },
};

/// Largest number of elements (or text bytes) a single operation may build.
pub const MAX_ELEMENTS: usize = 1 << 24;

/// Rejects sizes above [`MAX_ELEMENTS`].
///
/// # Example
/// ```
/// use aslang::interpreter::evaluator::binary::sequence::{MAX_ELEMENTS, check_size};
///
/// assert!(check_size(MAX_ELEMENTS).is_ok());
/// assert!(check_size(MAX_ELEMENTS + 1).is_err());
/// ```
pub const fn check_size(requested: usize) -> Result<(), RuntimeError> {
    if requested > MAX_ELEMENTS {
        return Err(RuntimeError::TooLarge { requested,
                                            limit: MAX_ELEMENTS });
    }
    Ok(())
}

/// Evaluates an arithmetic operator where at least one side is text or an
/// array.
///
/// Supported combinations:
/// - `text + text`: concatenation.
/// - `text * int` and `int * text`: repetition.
/// - `array + array`: a new array holding the elements of both.
/// - `array * int` and `int * array`: a new array repeating the elements.
///
/// Negative repetition counts produce an empty result. Nested arrays are
/// shared with the operands, not copied. Everything else is a type mismatch.
///
/// # Example
/// ```
/// use aslang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::sequence::eval_sequence, value::core::Value},
/// };
///
/// let line = eval_sequence(BinaryOperator::Mul, &Value::from(3), &Value::from("-"));
/// assert_eq!(line, Ok(Value::from("---")));
///
/// let joined = eval_sequence(BinaryOperator::Add,
///                            &Value::from(vec![Value::from(1)]),
///                            &Value::from(vec![Value::from("two")]));
/// assert_eq!(joined.map(|v| v.to_string()), Ok("[1, 'two']".to_string()));
/// ```
pub fn eval_sequence(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match (op, left, right) {
        (BinaryOperator::Add, Value::Text(a), Value::Text(b)) => {
            check_size(a.len().saturating_add(b.len()))?;
            Ok(Value::from(format!("{a}{b}")))
        },
        (BinaryOperator::Mul, Value::Text(text), Value::Number(Number::Int(count)))
        | (BinaryOperator::Mul, Value::Number(Number::Int(count)), Value::Text(text)) => {
            let count = repeat_count(*count);
            check_size(text.len().saturating_mul(count))?;
            Ok(Value::from(text.repeat(count)))
        },
        (BinaryOperator::Add, Value::Array(a), Value::Array(b)) => {
            check_size(a.len().saturating_add(b.len()))?;
            let mut items = a.to_vec();
            items.extend(b.to_vec());
            Ok(Value::Array(Array::new(items)))
        },
        (BinaryOperator::Mul, Value::Array(array), Value::Number(Number::Int(count)))
        | (BinaryOperator::Mul, Value::Number(Number::Int(count)), Value::Array(array)) => {
            let count = repeat_count(*count);
            let total = array.len().saturating_mul(count);
            check_size(total)?;

            let items = array.to_vec();
            let mut repeated = Vec::with_capacity(total);
            while repeated.len() < total {
                repeated.extend_from_slice(&items);
            }
            Ok(Value::Array(Array::new(repeated)))
        },
        _ => Err(type_mismatch(op, left, right)),
    }
}

fn repeat_count(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}
