use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::{Node, Operand},
    error::ParseError,
    interpreter::lexer::{LexerExtras, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of nodes and sequences the reader accepts.
pub const MAX_NESTING: usize = 256;

/// Splits tree text into tokens paired with their line numbers.
///
/// # Errors
/// - `UnterminatedString` if a string runs to the end of its line.
/// - `UnexpectedToken` for text that is not a token, such as an unknown
///   escape inside a string.
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(Token::UnterminatedString) => return Err(ParseError::UnterminatedString { line }),
            Ok(token) => tokens.push((token, line)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line });
            },
        }
    }

    Ok(tokens)
}

/// Reads exactly one tree from `source`.
///
/// # Errors
/// Returns a `ParseError` if the text is not a single well-formed node.
///
/// # Example
/// ```
/// use aslang::interpreter::parser::core::read_tree;
///
/// let tree = read_tree("(assign x (number 5)) ; five").unwrap();
///
/// assert_eq!(tree.kind, "assign");
/// assert_eq!(tree.to_string(), "(assign x (number 5))");
/// assert!(read_tree("(pass) (pass)").is_err());
/// ```
pub fn read_tree(source: &str) -> ParseResult<Node> {
    let tokens = tokenize(source)?;
    let end_line = end_line(&tokens);
    let mut iter = tokens.iter().peekable();

    let node = parse_node(&mut iter, 0, end_line)?;
    if let Some((token, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          line:  *line, });
    }
    Ok(node)
}

/// Reads every top-level tree from `source`, in order.
///
/// # Errors
/// Returns a `ParseError` at the first malformed tree.
///
/// # Example
/// ```
/// use aslang::interpreter::parser::core::read_trees;
///
/// let trees = read_trees("(pass)\n(break)").unwrap();
///
/// assert_eq!(trees.len(), 2);
/// assert_eq!(trees[1].kind, "break");
/// ```
pub fn read_trees(source: &str) -> ParseResult<Vec<Node>> {
    let tokens = tokenize(source)?;
    let end_line = end_line(&tokens);
    let mut iter = tokens.iter().peekable();

    let mut trees = Vec::new();
    while iter.peek().is_some() {
        trees.push(parse_node(&mut iter, 0, end_line)?);
    }
    Ok(trees)
}

fn end_line(tokens: &[(Token, usize)]) -> usize {
    tokens.last().map_or(1, |(_, line)| *line)
}

/// Parses `( kind operand* )`.
///
/// Grammar: `node := "(" (atom | string) operand* ")"`
fn parse_node<'a, I>(tokens: &mut Peekable<I>, depth: usize, end_line: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: end_line })?;
    if *token != Token::LParen {
        return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                 line:  *line, });
    }
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { max:  MAX_NESTING,
                                                line: *line, });
    }

    let kind = match tokens.next() {
        Some((Token::Atom(kind) | Token::Str(kind), _)) => kind.clone(),
        Some((other, line)) => {
            return Err(ParseError::ExpectedKind { token: other.to_string(),
                                                  line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    };

    let mut operands = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some(_) => operands.push(parse_operand(tokens, depth + 1, end_line)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: end_line }),
        }
    }

    Ok(Node::new(kind, operands))
}

/// Parses a single operand.
///
/// Grammar: `operand := node | "[" operand* "]" | "~" | atom | string`
fn parse_operand<'a, I>(tokens: &mut Peekable<I>,
                        depth: usize,
                        end_line: usize)
                        -> ParseResult<Operand>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::LParen, _)) => Ok(Operand::Node(parse_node(tokens, depth, end_line)?)),
        Some((Token::LBracket, line)) => {
            let line = *line;
            tokens.next();
            if depth >= MAX_NESTING {
                return Err(ParseError::NestingTooDeep { max: MAX_NESTING,
                                                        line });
            }

            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some((Token::RBracket, _)) => {
                        tokens.next();
                        break;
                    },
                    Some(_) => items.push(parse_operand(tokens, depth + 1, end_line)?),
                    None => return Err(ParseError::UnexpectedEndOfInput { line: end_line }),
                }
            }
            Ok(Operand::Seq(items))
        },
        Some((Token::Nil, _)) => {
            tokens.next();
            Ok(Operand::Nil)
        },
        Some((Token::Atom(token) | Token::Str(token), _)) => {
            let token = token.clone();
            tokens.next();
            Ok(Operand::Token(token))
        },
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: end_line }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reads_nested_sequences_and_nil() {
        let tree = read_tree("(if-elif-else (number 1) (statements [(pass)]) ~ ~ ~)").unwrap();

        assert_eq!(tree.operands.len(), 5);
        assert_eq!(tree.operands[2], Operand::Nil);
        assert_eq!(tree.operands[1],
                   Operand::Node(Node::new("statements", vec![vec![Node::new("pass", vec![])].into()])));
    }

    #[test]
    fn display_output_reads_back() {
        let source = r#"(main (statements [(print (string "a \"quoted\" word")) (assign x ~)]))"#;
        let tree = read_tree(source).unwrap();

        assert_eq!(read_tree(&tree.to_string()), Ok(tree));
    }

    #[test]
    fn errors_carry_line_numbers() {
        assert_eq!(read_tree("(main\n(statements [\n)"),
                   Err(ParseError::UnexpectedToken { token: ")".into(),
                                                     line:  3, }));
        assert_eq!(read_tree("(main\n  (pass)"),
                   Err(ParseError::UnexpectedEndOfInput { line: 2 }));
        assert_eq!(read_tree("\n\n(print \"oops)"),
                   Err(ParseError::UnterminatedString { line: 3 }));
        assert_eq!(read_tree("(~)"),
                   Err(ParseError::ExpectedKind { token: "~".into(),
                                                  line:  1, }));
        assert_eq!(read_tree(""), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    }

    #[test]
    fn stray_closers_are_rejected() {
        assert_eq!(read_tree(")"),
                   Err(ParseError::UnexpectedToken { token: ")".into(),
                                                     line:  1, }));
        assert_eq!(read_tree("(pass) x"),
                   Err(ParseError::UnexpectedTrailingTokens { token: "x".into(),
                                                              line:  1, }));
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}{}", "(paren ".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        let shallow = format!("{}{}", "(paren ".repeat(10), ")".repeat(10));

        assert!(matches!(read_tree(&deep), Err(ParseError::NestingTooDeep { .. })));
        assert!(read_tree(&shallow).is_ok());
    }
}
