/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss. Array dimensions and
/// coordinates arrive as language numbers and pass through these helpers before
/// they are used as `usize` positions.
///
/// All fallible functions return a `Result` carrying the caller's error value
/// when the conversion is not exact.
pub mod num;
