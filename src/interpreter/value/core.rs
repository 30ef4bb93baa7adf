use std::{cmp::Ordering, fmt, rc::Rc};

use crate::interpreter::value::{array::Array, number::Number};

/// Represents a runtime value in the interpreter.
///
/// This enum models everything an evaluated node can produce: the operands of
/// expressions, the contents of bindings, and the results collected from
/// statement lists.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// An integer or floating-point number.
    Number(Number),
    /// An immutable text value.
    Text(Rc<str>),
    /// A reference-shared array.
    Array(Array),
    /// The marker produced by `break`.
    ///
    /// It travels up through statement-list results until the nearest
    /// enclosing loop consumes it.
    Break,
    /// The result of nodes that produce no value.
    #[default]
    Absent,
}

impl Value {
    /// Name of the value's type as shown in diagnostics.
    ///
    /// # Example
    /// ```
    /// use aslang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1).type_name(), "int");
    /// assert_eq!(Value::from(1.5).type_name(), "float");
    /// assert_eq!(Value::from("hi").type_name(), "text");
    /// assert_eq!(Value::Absent.type_name(), "none");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(n) => n.type_name(),
            Self::Text(_) => "text",
            Self::Array(_) => "array",
            Self::Break => "break",
            Self::Absent => "none",
        }
    }

    /// Truthiness used by conditions and logical operators.
    ///
    /// Numbers are truthy when non-zero, text and arrays when non-empty.
    /// `Absent` is falsy and `Break` is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => !n.is_zero(),
            Self::Text(text) => !text.is_empty(),
            Self::Array(array) => !array.is_empty(),
            Self::Break => true,
            Self::Absent => false,
        }
    }

    /// Returns `true` for the break marker.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }

    /// Returns `true` for the no-value result.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The numeric payload, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Orders two values.
    ///
    /// Numbers compare numerically across int and float, text
    /// lexicographically, arrays element-wise. Values of unrelated types are
    /// unordered and yield `None`.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use aslang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(2).compare(&Value::from(2.0)), Some(Ordering::Equal));
    /// assert_eq!(Value::from("abc").compare(&Value::from("abd")), Some(Ordering::Less));
    /// assert_eq!(Value::from(1).compare(&Value::from("1")), None);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Array(a), Self::Array(b)) => a.compare(b),
            (Self::Break, Self::Break) | (Self::Absent, Self::Absent) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Break, Self::Break) | (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(Number::Int(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Number(Number::Float(f))
    }
}

/// Booleans become the integers `1` and `0`.
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::from(i64::from(b))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Self::Array(array)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Array(Array::new(items))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Array(array) => write!(f, "{array}"),
            Self::Break => write!(f, "break"),
            Self::Absent => write!(f, "None"),
        }
    }
}
