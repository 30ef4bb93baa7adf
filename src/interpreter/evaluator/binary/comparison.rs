use std::cmp::Ordering;

use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Comparisons never fail. Equality is structural; ordering follows
/// [`Value::compare`]. Values of unrelated types are unordered, so every
/// ordering operator yields `0` for them, `==` yields `0` and `!=` yields
/// `1`.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
///
/// # Returns
/// `1` if the comparison holds, `0` otherwise.
///
/// # Example
/// ```
/// use aslang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let less = eval_comparison(BinaryOperator::Less, &Value::from(3), &Value::from(5.5));
/// assert_eq!(less, Value::from(1));
///
/// let unordered = eval_comparison(BinaryOperator::GreaterEqual, &Value::from("a"), &Value::from(1));
/// assert_eq!(unordered, Value::from(0));
/// ```
#[must_use]
pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    let ordering = left.compare(right);

    Value::from(match op {
                    BinaryOperator::Equal => left == right,
                    BinaryOperator::NotEqual => left != right,
                    BinaryOperator::Greater => ordering == Some(Ordering::Greater),
                    BinaryOperator::GreaterEqual => {
                        matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
                    },
                    BinaryOperator::Less => ordering == Some(Ordering::Less),
                    BinaryOperator::LessEqual => {
                        matches!(ordering, Some(Ordering::Less | Ordering::Equal))
                    },
                    _ => unreachable!("eval_comparison used with non comparison operator"),
                })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_kinds() {
        assert_eq!(eval_comparison(BinaryOperator::Equal, &Value::from(2), &Value::from(2.0)),
                   Value::from(1));
        assert_eq!(eval_comparison(BinaryOperator::LessEqual, &Value::from(2.5), &Value::from(2)),
                   Value::from(0));
    }

    #[test]
    fn unrelated_types_are_unequal_and_unordered() {
        let text = Value::from("5");
        let number = Value::from(5);

        for op in [BinaryOperator::Greater,
                   BinaryOperator::GreaterEqual,
                   BinaryOperator::Less,
                   BinaryOperator::LessEqual,
                   BinaryOperator::Equal]
        {
            assert_eq!(eval_comparison(op, &text, &number), Value::from(0), "{op}");
        }
        assert_eq!(eval_comparison(BinaryOperator::NotEqual, &text, &number), Value::from(1));
    }

    #[test]
    fn nan_is_never_equal() {
        let nan = Value::from(f64::NAN);

        assert_eq!(eval_comparison(BinaryOperator::Equal, &nan, &nan), Value::from(0));
        assert_eq!(eval_comparison(BinaryOperator::NotEqual, &nan, &nan), Value::from(1));
    }

    #[test]
    fn text_compares_lexicographically() {
        assert_eq!(eval_comparison(BinaryOperator::Less, &Value::from("apple"), &Value::from("b")),
                   Value::from(1));
    }
}
