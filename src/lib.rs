//! # aslang
//!
//! aslang is the runtime core of a small imperative scripting language,
//! written in Rust. It evaluates tagged syntax trees against a mutable
//! variable store, with support for integers, floats, text, n-dimensional
//! arrays, conditionals, loops and prompted input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    error::Error,
    io::{BufRead, Write},
};

use tracing::debug;

use crate::interpreter::{evaluator::core::Context, parser::core::read_trees};

/// Defines the structure of syntax trees.
///
/// This module declares the `Node` and `Operand` types that carry a program
/// as a tree of tagged tuples, and `NodeKind`, the typed view of a tag that
/// the evaluator dispatches on.
///
/// # Responsibilities
/// - Defines nodes, operands and the operators they name.
/// - Provides checked accessors so malformed nodes surface as errors.
/// - Serializes trees back to tree text.
pub mod ast;
/// Provides unified error types for reading and evaluation.
///
/// This module defines all errors that can be raised while reading tree text
/// or evaluating trees. It separates language errors, which are reported to
/// the running program's output, from malformed input and stream failures,
/// which are returned to the caller.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (reader, tree shape,
///   evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tree reading, evaluation, value representations
/// and the interactive session to provide a complete runtime.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, reader, evaluator, and value
///   types.
/// - Provides entry points for reading and evaluating trees.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines used throughout the evaluator,
/// such as turning language numbers into array sizes and positions without
/// silent data loss.
pub mod util;

/// Version of the interpreter, shown in the interactive banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reads tree text and runs every tree in it, using standard input and
/// output.
///
/// Each top-level tree is evaluated in order against one shared store.
/// Language errors are printed as diagnostics and do not stop the run.
///
/// # Errors
/// Returns an error if the text is malformed, a tree is malformed, or a
/// stream fails.
///
/// # Examples
/// ```
/// use aslang::run_source;
///
/// let source = "(main (statements [(assign x (number 5))]))";
/// assert!(run_source(source).is_ok());
///
/// // Malformed tree text.
/// assert!(run_source("(main (statements [").is_err());
/// ```
pub fn run_source(source: &str) -> Result<(), Box<dyn Error>> {
    run_source_with(&mut Context::stdio(), source)
}

/// Reads tree text and runs every tree in it against `context`.
///
/// # Errors
/// Returns an error if the text is malformed, a tree is malformed, or a
/// stream fails.
///
/// # Examples
/// ```
/// use aslang::{interpreter::evaluator::core::Context, run_source_with};
///
/// let source = r#"
///     (main (statements [
///       (assign x (number 5))
///       (assign x (plus (name x) (number 3)))
///       (print (name x))
///     ]))
/// "#;
/// let mut context = Context::new("".as_bytes(), Vec::new());
///
/// run_source_with(&mut context, source).unwrap();
/// assert_eq!(context.into_output(), b"8\n");
/// ```
pub fn run_source_with<R: BufRead, W: Write>(context: &mut Context<R, W>,
                                             source: &str)
                                             -> Result<(), Box<dyn Error>> {
    let trees = read_trees(source)?;
    debug!(trees = trees.len(), "read tree text");

    for tree in &trees {
        context.run(tree)?;
    }
    Ok(())
}
