/// Reading tree text into syntax nodes.
///
/// Implements a recursive reader over the lexer's tokens that builds
/// [`Node`](crate::ast::Node) values, with line numbers on every error and a
/// bound on nesting depth.
pub mod core;
