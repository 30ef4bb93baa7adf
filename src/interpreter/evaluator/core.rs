use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::{debug, trace, warn};

use crate::{
    ast::{Node, NodeKind},
    error::{DIAGNOSTIC_BANNER, EvalError, RuntimeError},
    interpreter::{evaluator::store::Store, value::core::Value},
};

/// Result type used by the evaluator.
///
/// Runtime errors travel inside [`EvalError::Runtime`] until the nearest
/// statement boundary reports them; tree and I/O errors reach the caller.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default limit on how deeply nodes may nest during evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunable limits of the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested node evaluations before the evaluator reports
    /// [`RuntimeError::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable store, the streams
/// `print` and `input` talk to, and the configured limits. Diagnostics are
/// written to the same output stream as program output.
///
/// ## Usage
///
/// A `Context` is created once per program run or interactive session and
/// reused for every tree evaluated in it, so bindings persist between trees.
///
/// # Example
/// ```
/// use aslang::{
///     ast::Node,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut context = Context::new("".as_bytes(), Vec::new());
/// let tree = Node::new("print", vec![Node::new("string", vec!["hi".into()]).into()]);
///
/// assert_eq!(context.evaluate(&tree).unwrap(), Value::from("hi"));
/// assert_eq!(context.into_output(), b"hi\n");
/// ```
pub struct Context<R, W> {
    /// Variable bindings, shared by every tree evaluated in this context.
    pub store: Store,
    input:     R,
    output:    W,
    config:    EvalConfig,
    depth:     usize,
}

impl Context<StdinLock<'static>, Stdout> {
    /// Creates a context reading from standard input and writing to standard
    /// output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Creates a new evaluation context with an empty store and the default
    /// configuration.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, EvalConfig::default())
    }

    /// Creates a new evaluation context with an explicit configuration.
    #[must_use]
    pub fn with_config(input: R, output: W, config: EvalConfig) -> Self {
        Self { store: Store::new(),
               input,
               output,
               config,
               depth: 0 }
    }

    /// Mutable access to the output stream.
    pub const fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the context and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs a program root against this context's store.
    ///
    /// The root is normally a `main` node; its result is discarded.
    ///
    /// # Errors
    /// Returns an error if the tree is malformed or a stream fails.
    /// Language errors are written as diagnostics and never returned.
    pub fn run(&mut self, root: &Node) -> Result<(), EvalError> {
        debug!(kind = %root.kind, "running program");
        self.evaluate(root)?;
        self.output.flush()?;
        Ok(())
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the public entry point for evaluation. A language error that
    /// escapes every inner statement boundary is reported here and the node
    /// evaluates to [`Value::Absent`].
    ///
    /// # Errors
    /// Returns [`EvalError::Tree`] for malformed nodes and [`EvalError::Io`]
    /// when a stream fails.
    pub fn evaluate(&mut self, node: &Node) -> Result<Value, EvalError> {
        self.eval_guarded(node)
    }

    /// Evaluates a child node, enforcing the nesting limit.
    pub(crate) fn eval(&mut self, node: &Node) -> EvalResult<Value> {
        if self.depth >= self.config.max_depth {
            return Err(RuntimeError::DepthExceeded { max: self.config.max_depth }.into());
        }

        self.depth += 1;
        let result = self.dispatch(node);
        self.depth -= 1;
        result
    }

    /// Evaluates a node at a statement boundary.
    ///
    /// Runtime errors are written to the output stream and turned into
    /// [`Value::Absent`]; anything else propagates.
    pub(crate) fn eval_guarded(&mut self, node: &Node) -> EvalResult<Value> {
        match self.eval(node) {
            Err(EvalError::Runtime(error)) => {
                self.report(&error)?;
                Ok(Value::Absent)
            },
            other => other,
        }
    }

    /// Evaluates a condition. A condition that fails is reported and counts
    /// as false.
    pub(crate) fn eval_condition(&mut self, node: &Node) -> EvalResult<bool> {
        Ok(self.eval_guarded(node)?.is_truthy())
    }

    /// Writes a language-level diagnostic to the output stream.
    pub(crate) fn report(&mut self, error: &RuntimeError) -> io::Result<()> {
        debug!(%error, "reporting diagnostic");
        writeln!(self.output, "{DIAGNOSTIC_BANNER} {error}")
    }

    pub(crate) fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Routes a node to its handler.
    ///
    /// Unknown kinds are skipped: they produce no value and no diagnostic.
    fn dispatch(&mut self, node: &Node) -> EvalResult<Value> {
        let Some(kind) = NodeKind::from_tag(&node.kind) else {
            warn!(kind = %node.kind, "unhandled node kind");
            return Ok(Value::Absent);
        };
        trace!(?kind, depth = self.depth, "evaluating node");

        match kind {
            NodeKind::Main => self.eval_main(node),
            NodeKind::Statements => self.eval_statements(node),
            NodeKind::StatementExpr | NodeKind::Paren => self.eval_wrapped(node),
            NodeKind::Assign => self.eval_assign(node),
            NodeKind::Name => self.eval_name(node),
            NodeKind::Number => Self::eval_number(node),
            NodeKind::Text => Self::eval_text(node),
            NodeKind::List => self.eval_list(node),
            NodeKind::Index => self.eval_index(node),
            NodeKind::Binary(op) => self.eval_binary_op(node, op),
            NodeKind::Unary(op) => self.eval_unary_op(node, op),
            NodeKind::Pass => {
                node.expect_arity(0)?;
                Ok(Value::Absent)
            },
            NodeKind::Break => {
                node.expect_arity(0)?;
                Ok(Value::Break)
            },
            NodeKind::Print => self.eval_print(node),
            NodeKind::Input => self.eval_input(node),
            NodeKind::IfElifElse => self.eval_if_elif_else(node),
            NodeKind::While => self.eval_while(node),
            NodeKind::ArrayNew { rank } => self.eval_array_new(node, rank),
            NodeKind::ArrayAccess { rank } => self.eval_array_access(node, rank),
            NodeKind::ArrayAssign { rank } => self.eval_array_assign(node, rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn number(token: &str) -> Node {
        Node::new("number", vec![token.into()])
    }

    fn output_of(context: Context<&[u8], Vec<u8>>) -> String {
        String::from_utf8(context.into_output()).unwrap_or_default()
    }

    #[test]
    fn unknown_kinds_evaluate_to_nothing_silently() {
        let mut context = Context::new("".as_bytes(), Vec::new());

        let value = context.evaluate(&Node::new("lambda", vec![number("1").into()]));

        assert_eq!(value.ok(), Some(Value::Absent));
        assert_eq!(output_of(context), "");
    }

    #[test]
    fn nesting_past_the_limit_is_reported() {
        let mut tree = number("1");
        for _ in 0..10 {
            tree = Node::new("paren", vec![tree.into()]);
        }
        let config = EvalConfig { max_depth: 5 };
        let mut context = Context::with_config("".as_bytes(), Vec::new(), config);

        let value = context.evaluate(&tree);

        assert_eq!(value.ok(), Some(Value::Absent));
        assert_eq!(output_of(context), "as says: Maximum nesting depth of 5 exceeded!\n");
    }

    #[test]
    fn depth_unwinds_after_errors() {
        let mut context = Context::new("".as_bytes(), Vec::new());
        let failing = Node::new("name", vec!["missing".into()]);

        for _ in 0..3 {
            let _ = context.evaluate(&failing);
        }

        assert_eq!(context.depth, 0);
    }

    #[test]
    fn malformed_nodes_reach_the_caller() {
        let mut context = Context::new("".as_bytes(), Vec::new());

        let result = context.evaluate(&Node::new("assign", vec![number("1").into()]));

        assert!(matches!(result, Err(EvalError::Tree(_))));
    }
}
