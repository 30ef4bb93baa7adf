use thiserror::Error;

/// A syntax node whose shape does not match its kind.
///
/// These errors are contract violations between the front end that built the
/// tree and the evaluator. They are not language errors: evaluation of the
/// current unit stops and the error is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node has the wrong number of operands.
    #[error("node '{kind}' expects {expected} operands, found {found}")]
    Arity {
        /// Tag of the node.
        kind:     String,
        /// Operand count required by the kind.
        expected: usize,
        /// Operand count present.
        found:    usize,
    },
    /// The node is missing an operand.
    #[error("node '{kind}' is missing operand {index}")]
    MissingOperand {
        /// Tag of the node.
        kind:  String,
        /// Zero-based operand position.
        index: usize,
    },
    /// An operand has the wrong shape.
    #[error("node '{kind}' expects a {expected} at operand {index}, found a {found}")]
    UnexpectedOperand {
        /// Tag of the node.
        kind:     String,
        /// Zero-based operand position.
        index:    usize,
        /// Description of the required shape.
        expected: &'static str,
        /// Description of the shape found.
        found:    &'static str,
    },
    /// A literal token could not be interpreted.
    #[error("node '{kind}' carries an invalid literal '{token}'")]
    InvalidLiteral {
        /// Tag of the node.
        kind:  String,
        /// The offending token.
        token: String,
    },
}
