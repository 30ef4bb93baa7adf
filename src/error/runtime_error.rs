use thiserror::Error;

/// Prefix written in front of every language-level diagnostic.
pub const DIAGNOSTIC_BANNER: &str = "as says:";

/// Represents all language-level errors that can occur during evaluation.
///
/// A `RuntimeError` never aborts a program. The evaluator writes it to the
/// output stream behind [`DIAGNOSTIC_BANNER`] and the failing statement
/// evaluates to no value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A `name`, `inc` or `dec` referred to an unbound name.
    #[error("{name} hasn't been defined!")]
    UndefinedName {
        /// The name that was looked up.
        name: String,
    },
    /// An array access or assignment named an unbound array.
    #[error("Array '{name}' hasn't been defined!")]
    UndefinedArray {
        /// The name of the array.
        name: String,
    },
    /// An array access or assignment named a binding that holds no array.
    #[error("'{name}' is not an array, it holds a value of type '{found}'!")]
    NotAnArray {
        /// The name of the binding.
        name:  String,
        /// Type name of the bound value.
        found: &'static str,
    },
    /// A binary operator is undefined for the operand types.
    #[error("You can't use '{op}' with types '{left}' and '{right}'!")]
    TypeMismatch {
        /// Operator symbol.
        op:    &'static str,
        /// Type name of the left operand.
        left:  &'static str,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A unary operator is undefined for the operand type.
    #[error("You can't use '{op}' with type '{operand}'!")]
    UnaryTypeMismatch {
        /// Operator symbol.
        op:      &'static str,
        /// Type name of the operand.
        operand: &'static str,
    },
    /// A generic `index` went past the end of an array or text.
    #[error("Index {index} is out of range!")]
    IndexOutOfRange {
        /// The requested index.
        index: i64,
    },
    /// A generic `index` was applied to a value that is neither array nor
    /// text.
    #[error("Only arrays and text can be indexed, not '{found}'!")]
    NotIndexable {
        /// Type name of the indexed value.
        found: &'static str,
    },
    /// A generic `index` was given something other than an integer.
    #[error("Sequence index must be an integer, got {index}")]
    InvalidSequenceIndex {
        /// Text form of the offending index.
        index: String,
    },
    /// An array dimension was negative or not a number.
    #[error("Array dimension must be a positive number, got {dim}")]
    DimensionNotPositive {
        /// Text form of the offending dimension.
        dim: String,
    },
    /// An array dimension was a fractional or non-finite number.
    #[error("Array dimension must be an integer, got {dim}")]
    FractionalDimension {
        /// Text form of the offending dimension.
        dim: String,
    },
    /// An array coordinate was not an integer.
    #[error("Array index must be an integer, got {index}")]
    NonIntegerIndex {
        /// Text form of the offending coordinate.
        index: String,
    },
    /// An array coordinate was negative or past the end of its dimension.
    #[error("Index {index} is out of range for dimension {dimension}")]
    IndexOutOfBounds {
        /// The requested coordinate.
        index:     i64,
        /// Zero-based dimension the coordinate applies to.
        dimension: usize,
    },
    /// More coordinates were given than the array has dimensions.
    #[error("Too many indices for array dimension {dimension}")]
    TooManyIndices {
        /// First dimension that does not exist.
        dimension: usize,
    },
    /// An array assignment stopped above the leaves.
    #[error("Too few indices: dimension {dimension} is an array")]
    TooFewIndices {
        /// First dimension that was not indexed.
        dimension: usize,
    },
    /// An array assignment tried to store an array inside an element.
    #[error("Array elements can't hold arrays, assign numbers or text to '{name}'")]
    NestedArrayElement {
        /// The name of the array being written.
        name: String,
    },
    /// A value would exceed the element limit.
    #[error("Can't build a value with {requested} elements, the limit is {limit}!")]
    TooLarge {
        /// Number of elements requested (saturated at `usize::MAX`).
        requested: usize,
        /// Maximum number of elements.
        limit:     usize,
    },
    /// An array would nest deeper than the depth limit.
    #[error("Arrays can't be nested more than {max} levels deep!")]
    TooDeep {
        /// Maximum nesting depth of arrays.
        max: usize,
    },
    /// Division or remainder by zero.
    #[error("Division by zero!")]
    DivisionByZero,
    /// Integer arithmetic overflowed.
    #[error("Integer overflow in '{op}'!")]
    Overflow {
        /// Operator symbol.
        op: &'static str,
    },
    /// An expression that must produce a value produced none.
    #[error("Expression produced no value!")]
    MissingValue,
    /// `input` reached the end of the input stream.
    #[error("Input stream closed!")]
    InputClosed,
    /// The evaluator nested deeper than its configured limit.
    #[error("Maximum nesting depth of {max} exceeded!")]
    DepthExceeded {
        /// The configured limit.
        max: usize,
    },
}
