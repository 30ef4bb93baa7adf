use std::fmt;

use logos::Logos;

/// Represents a lexical token of tree text.
///
/// Tree text is an s-expression: parentheses delimit nodes, brackets delimit
/// sequences, `~` marks an empty slot and everything else is a literal token,
/// either a bare atom or a double-quoted string.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `~`, an empty optional operand.
    #[token("~")]
    Nil,
    /// A double-quoted string such as `"hello world"`, with its escapes
    /// resolved.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// A string that reaches the end of its line without a closing quote.
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,
    /// A bare literal such as `x`, `3.5`, `-2` or `array_access2d`.
    #[regex(r#"[^\s()\[\]~;"]+"#, |lex| lex.slice().to_string())]
    Atom(String),
    /// `; Comments.`
    #[regex(r";[^\n]*", logos::skip)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Resolves the escapes of a quoted string token.
///
/// Supported escapes are `\"`, `\\`, `\n`, `\t` and `\r`; any other escape
/// makes the token invalid.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        text.push(match chars.next()? {
                      '"' => '"',
                      '\\' => '\\',
                      'n' => '\n',
                      't' => '\t',
                      'r' => '\r',
                      _ => return None,
                  });
    }
    Some(text)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Nil => write!(f, "~"),
            Self::Str(text) => write!(f, "{text:?}"),
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::UnterminatedString => write!(f, "unterminated string"),
            Self::Comment => write!(f, "comment"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}
