/// Arithmetic on numbers.
///
/// Implements `+ - * / %` for integer and float operands, with checked
/// integer arithmetic and promotion to float when either side is a float.
pub mod arithmetic;
/// Comparison operators.
///
/// Implements `== != > >= < <=`, which never fail and yield `1` or `0`.
pub mod comparison;
/// Binary operator dispatch.
///
/// Routes each operator to its handler depending on the operand types and
/// evaluates binary nodes.
pub mod core;
/// Eager logical connectives.
pub mod logic;
/// Exponentiation.
pub mod power;
/// Operators on text and arrays.
///
/// Concatenation and repetition of text and arrays, bounded by
/// [`sequence::MAX_ELEMENTS`].
pub mod sequence;
