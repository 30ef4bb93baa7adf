/// Tree text errors.
///
/// Defines the errors raised while tokenizing or reading the textual encoding
/// of a syntax tree: unexpected tokens, unterminated strings, missing closing
/// delimiters and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every language-level error the evaluator reports through the
/// diagnostic channel: undefined names, type mismatches, bounds violations,
/// malformed array dimensions or coordinates, and arithmetic failures.
pub mod runtime_error;
/// Tree shape errors.
///
/// Describes nodes whose operands do not fit their kind. These are contract
/// violations of the front end rather than errors in the evaluated program.
pub mod tree_error;

use thiserror::Error;

pub use parse_error::ParseError;
pub use runtime_error::{DIAGNOSTIC_BANNER, RuntimeError};
pub use tree_error::TreeError;

/// Any failure produced while evaluating a node.
///
/// Only [`EvalError::Tree`] and [`EvalError::Io`] ever reach callers of the
/// public evaluation entry points; runtime errors are reported and absorbed at
/// statement boundaries.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A language-level error that still has to be reported.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The tree handed to the evaluator is malformed.
    #[error("malformed tree: {0}")]
    Tree(#[from] TreeError),
    /// Reading input or writing output failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
