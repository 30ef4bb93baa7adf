use crate::{
    error::RuntimeError,
    interpreter::value::{core::Value, number::Number},
};

/// Evaluates an exponentiation operation.
///
/// Integer to integer exponentiation with a non-negative exponent uses checked
/// arithmetic and stays an integer. A negative integer exponent or any float
/// operand is computed with `powf`. Raising zero to a negative power is a
/// division by zero.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
///
/// # Returns
/// The result of `base ^ exponent`, or the `RuntimeError` to report.
///
/// # Example
/// ```
/// use aslang::interpreter::{
///     evaluator::binary::power::eval_pow,
///     value::{core::Value, number::Number},
/// };
///
/// assert_eq!(eval_pow(Number::Int(2), Number::Int(10)), Ok(Value::from(1024)));
/// assert_eq!(eval_pow(Number::Int(2), Number::Int(-1)), Ok(Value::from(0.5)));
/// assert_eq!(eval_pow(Number::Float(2.0), Number::Int(3)), Ok(Value::from(8.0)));
/// ```
pub fn eval_pow(base: Number, exponent: Number) -> Result<Value, RuntimeError> {
    if base.is_zero() && exponent.is_negative() {
        return Err(RuntimeError::DivisionByZero);
    }

    match (base, exponent) {
        (Number::Int(b), Number::Int(e)) if e >= 0 => integer_pow(b, e),
        _ => Ok(Value::from(base.as_f64().powf(exponent.as_f64()))),
    }
}

fn integer_pow(base: i64, exponent: i64) -> Result<Value, RuntimeError> {
    let overflow = RuntimeError::Overflow { op: "^" };

    let result = match base {
        0 => i64::from(exponent == 0),
        1 => 1,
        -1 => {
            if exponent % 2 == 0 {
                1
            } else {
                -1
            }
        },
        _ => {
            let exponent = u32::try_from(exponent).map_err(|_| overflow.clone())?;
            base.checked_pow(exponent).ok_or(overflow)?
        },
    };
    Ok(Value::from(result))
}
