use std::io::{BufRead, Write};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Converts a line read by `input` into a value.
///
/// The line terminator is removed. If the trimmed line parses as a float the
/// result is that float, otherwise it is the text of the line. Single
/// underscores between digits are accepted as separators.
///
/// # Example
/// ```
/// use aslang::interpreter::{evaluator::io::parse_input_line, value::core::Value};
///
/// assert_eq!(parse_input_line(" 42 \n"), Value::from(42.0));
/// assert_eq!(parse_input_line("1_000\n"), Value::from(1000.0));
/// assert_eq!(parse_input_line("forty two\r\n"), Value::from("forty two"));
/// assert_eq!(parse_input_line(""), Value::from(""));
/// ```
#[must_use]
pub fn parse_input_line(line: &str) -> Value {
    let line = line.strip_suffix('\n')
                   .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest));

    parse_float(line.trim()).map_or_else(|| Value::from(line), Value::from)
}

fn parse_float(word: &str) -> Option<f64> {
    if !word.contains('_') {
        return word.parse().ok();
    }

    let bytes = word.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, &b)| {
                                                  b != b'_'
                                                  || (i > 0
                                                      && bytes[i - 1].is_ascii_digit()
                                                      && bytes.get(i + 1)
                                                              .is_some_and(u8::is_ascii_digit))
                                              });
    if !separated {
        return None;
    }
    word.replace('_', "").parse().ok()
}

impl<R: BufRead, W: Write> Context<R, W> {
    /// Evaluates `print expr`: writes the value and a newline, then returns
    /// the value.
    pub(crate) fn eval_print(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;
        let value = self.eval_operand(node.child(0)?)?;

        writeln!(self.output_mut(), "{value}")?;
        Ok(value)
    }

    /// Evaluates `input prompt`.
    ///
    /// The prompt is written without a newline and the output is flushed
    /// before reading, so interactive users see it. A `nil` prompt writes
    /// nothing.
    pub(crate) fn eval_input(&mut self, node: &Node) -> EvalResult<Value> {
        node.expect_arity(1)?;
        if let Some(prompt) = node.optional_child(0)? {
            let prompt = self.eval_operand(prompt)?;
            write!(self.output_mut(), "{prompt}")?;
        }
        self.output_mut().flush()?;

        let line = self.read_line()?.ok_or(RuntimeError::InputClosed)?;
        Ok(parse_input_line(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_words_become_floats() {
        assert_eq!(parse_input_line("-3.5\n"), Value::from(-3.5));
        assert_eq!(parse_input_line("1e3"), Value::from(1000.0));
    }

    #[test]
    fn underscores_must_sit_between_digits() {
        assert_eq!(parse_input_line("1_000.000_5"), Value::from(1000.0005));
        assert_eq!(parse_input_line("-2_5e1_0"), Value::from(-2.5e11));
        assert_eq!(parse_input_line("_1"), Value::from("_1"));
        assert_eq!(parse_input_line("1__0"), Value::from("1__0"));
        assert_eq!(parse_input_line("1_"), Value::from("1_"));
        assert_eq!(parse_input_line("1_.5"), Value::from("1_.5"));
    }

    #[test]
    fn inner_whitespace_is_kept_for_text() {
        assert_eq!(parse_input_line("  two words \n"), Value::from("  two words "));
    }
}
