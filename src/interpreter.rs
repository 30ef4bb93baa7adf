/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks a tree node by node, evaluates expressions and
/// statements, performs arithmetic and logical operations, manages the
/// variable store, and produces results. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates every supported node kind through a single dispatch.
/// - Handles variables, arrays and control flow (conditionals, loops and
///   `break`).
/// - Reports language errors such as undefined names or out-of-range indices
///   at statement boundaries, so later statements still run.
pub mod evaluator;
/// The lexer module tokenizes tree text for further reading.
///
/// The lexer reads the raw tree text and produces a stream of tokens:
/// delimiters, the nil marker, atoms and quoted strings, each paired with its
/// source line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Resolves escapes in quoted strings.
/// - Skips whitespace and comments.
pub mod lexer;
/// The parser module builds syntax trees from tokens.
///
/// The reader processes the token stream produced by the lexer and
/// constructs the [`Node`](crate::ast::Node) values the evaluator consumes.
///
/// # Responsibilities
/// - Converts tokens into nodes, operands and sequences.
/// - Validates the structure of the text, reporting errors with line info.
/// - Bounds nesting depth.
pub mod parser;
/// The interactive session.
///
/// Prompts for one tree per line and evaluates each against a single,
/// persistent store.
pub mod repl;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values produced during evaluation: integers,
/// floats, text, shared arrays, the break marker and the absence of a value.
/// It also provides truthiness, cross-type comparison and the formatting used
/// by `print`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements numeric promotion and comparison between integers and floats.
/// - Keeps arrays shared by reference, with structurally derived shape.
pub mod value;
