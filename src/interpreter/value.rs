/// Shared array representation.
///
/// Defines the `Array` type: a fixed-length, mutable sequence of values
/// that is shared by reference. Multi-dimensional arrays are nested arrays
/// whose shape and rank are derived structurally.
pub mod array;
/// The runtime value enum.
///
/// Defines `Value`, the sum of every kind of result a node can produce, with
/// truthiness, cross-type ordering and the formatting used by `print`.
pub mod core;
/// Numeric values.
///
/// Defines `Number`, an integer or float with numeric equality and ordering
/// across both kinds, and the float formatting used for output.
pub mod number;
