/// N-dimensional array construction, access and assignment.
///
/// One generic handler per operation serves every rank. Dimensions and
/// coordinates are validated level by level before anything is read or
/// written.
pub mod array;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic, text and
/// array concatenation and repetition, comparisons and logical connectives.
pub mod binary;

/// Control flow.
///
/// Program roots, statement lists, conditionals and loops, including the
/// propagation of `break` through statement-list results.
pub mod control;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the node dispatch, the nesting limit and
/// the reporting of language errors at statement boundaries.
pub mod core;

/// The `print` and `input` primitives.
pub mod io;

/// The variable store.
pub mod store;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and the in-place `inc` and `dec` steps.
pub mod unary;

/// Utility functions for evaluation.
///
/// Literals, names, assignment and generic indexing of arrays and text.
pub mod utils;
