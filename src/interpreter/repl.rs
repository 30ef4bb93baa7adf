use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    VERSION,
    error::{DIAGNOSTIC_BANNER, EvalError},
    interpreter::{evaluator::core::Context, parser::core::read_tree},
};

/// Prompt written before every line of an interactive session.
pub const PROMPT: &str = "as > ";

/// Runs an interactive session against `context`.
///
/// Prints the banner, then repeatedly prompts, reads one line from the
/// context's input, reads it as a single tree and evaluates it against the
/// context's store. Blank lines are skipped. Malformed tree text and
/// malformed trees are reported as diagnostics and the session continues.
/// The session ends when the input is exhausted.
///
/// # Errors
/// Returns an error only if reading input or writing output fails.
///
/// # Example
/// ```
/// use aslang::interpreter::{evaluator::core::Context, repl::repl};
///
/// let input = "(assign x (number 2))\n(print (times (name x) (number 21)))\n";
/// let mut context = Context::new(input.as_bytes(), Vec::new());
///
/// repl(&mut context).unwrap();
///
/// let output = String::from_utf8(context.into_output()).unwrap();
/// assert!(output.ends_with("as > as > 42\nas > "));
/// ```
pub fn repl<R: BufRead, W: Write>(context: &mut Context<R, W>) -> io::Result<()> {
    writeln!(context.output_mut(), "aslang {VERSION}")?;
    debug!("interactive session started");

    loop {
        write!(context.output_mut(), "{PROMPT}")?;
        context.output_mut().flush()?;

        let Some(line) = context.read_line()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match read_tree(&line) {
            Ok(tree) => context.evaluate(&tree).map(|_| ()),
            Err(error) => {
                writeln!(context.output_mut(), "{DIAGNOSTIC_BANNER} {error}")?;
                continue;
            },
        };

        match outcome {
            Ok(()) => {},
            Err(EvalError::Io(error)) => return Err(error),
            Err(error) => writeln!(context.output_mut(), "{DIAGNOSTIC_BANNER} {error}")?,
        }
    }

    debug!("interactive session ended");
    context.output_mut().flush()
}
