use thiserror::Error;

/// Represents all errors that can occur while reading tree text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while reading.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `(` was not followed by a node kind.
    #[error("Error on line {line}: Expected a node kind after '(', found {token}.")]
    ExpectedKind {
        /// The token found instead of a kind.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal was not closed on its line.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Nodes and sequences were nested deeper than the reader allows.
    #[error("Error on line {line}: Nesting deeper than {max} levels.")]
    NestingTooDeep {
        /// The nesting limit.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a complete tree.
    #[error("Error on line {line}: Extra tokens after the tree: {token}.")]
    UnexpectedTrailingTokens {
        /// The extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
