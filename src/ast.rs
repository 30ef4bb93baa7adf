use std::fmt;

use crate::error::TreeError;

/// An operand of a syntax [`Node`].
///
/// Operands mirror the tuple slots produced by the front end: a nested node,
/// a literal token (a name, a numeric literal or a text literal), an ordered
/// sequence (statement lists and list elements), or `Nil` for an optional slot
/// that is empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A nested syntax node.
    Node(Node),
    /// A literal token.
    Token(String),
    /// An ordered sequence of operands.
    Seq(Vec<Self>),
    /// An empty optional slot.
    Nil,
}

impl Operand {
    /// Short description of the operand shape, used in error messages.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Node(_) => "node",
            Self::Token(_) => "token",
            Self::Seq(_) => "sequence",
            Self::Nil => "nil",
        }
    }
}

impl From<Node> for Operand {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Operand {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

impl From<String> for Operand {
    fn from(token: String) -> Self {
        Self::Token(token)
    }
}

impl From<Vec<Node>> for Operand {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Seq(nodes.into_iter().map(Self::Node).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

/// A syntax tree node: a kind tag followed by its operands.
///
/// Nodes are produced once by the front end and never mutated by the
/// evaluator. The `kind` is kept as the raw tag so that unknown kinds survive
/// until dispatch, where [`NodeKind::from_tag`] decides how to handle them.
///
/// # Example
/// ```
/// use aslang::ast::Node;
///
/// let node = Node::new("assign", vec!["x".into(), Node::new("number", vec!["5".into()]).into()]);
///
/// assert_eq!(node.to_string(), "(assign x (number 5))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The tag naming the node kind, such as `assign` or `array_access2d`.
    pub kind:     String,
    /// Operands in tuple order.
    pub operands: Vec<Operand>,
}

impl Node {
    /// Creates a node from a tag and its operands.
    #[must_use]
    pub fn new(kind: impl Into<String>, operands: Vec<Operand>) -> Self {
        Self { kind: kind.into(),
               operands }
    }

    /// Ensures the node has exactly `expected` operands.
    pub fn expect_arity(&self, expected: usize) -> Result<(), TreeError> {
        if self.operands.len() == expected {
            Ok(())
        } else {
            Err(TreeError::Arity { kind: self.kind.clone(),
                                   expected,
                                   found: self.operands.len() })
        }
    }

    /// Returns the operand at `index`.
    pub fn operand(&self, index: usize) -> Result<&Operand, TreeError> {
        self.operands
            .get(index)
            .ok_or_else(|| TreeError::MissingOperand { kind: self.kind.clone(),
                                                       index })
    }

    /// Returns the operand at `index`, which must be a nested node.
    pub fn child(&self, index: usize) -> Result<&Self, TreeError> {
        match self.operand(index)? {
            Operand::Node(node) => Ok(node),
            other => Err(self.unexpected(index, "node", other)),
        }
    }

    /// Returns the operand at `index` as a node, or `None` if the slot is
    /// `Nil` or absent.
    pub fn optional_child(&self, index: usize) -> Result<Option<&Self>, TreeError> {
        match self.operands.get(index) {
            None | Some(Operand::Nil) => Ok(None),
            Some(Operand::Node(node)) => Ok(Some(node)),
            Some(other) => Err(self.unexpected(index, "node or nil", other)),
        }
    }

    /// Returns the operand at `index`, which must be a literal token.
    pub fn token(&self, index: usize) -> Result<&str, TreeError> {
        match self.operand(index)? {
            Operand::Token(token) => Ok(token),
            other => Err(self.unexpected(index, "token", other)),
        }
    }

    /// Returns the operand at `index` as a sequence of nodes.
    pub fn child_nodes(&self, index: usize) -> Result<Vec<&Self>, TreeError> {
        match self.operand(index)? {
            Operand::Seq(items) => items.iter()
                                        .map(|item| match item {
                                            Operand::Node(node) => Ok(node),
                                            other => {
                                                Err(self.unexpected(index,
                                                                    "sequence of nodes",
                                                                    other))
                                            },
                                        })
                                        .collect(),
            other => Err(self.unexpected(index, "sequence", other)),
        }
    }

    fn unexpected(&self, index: usize, expected: &'static str, found: &Operand) -> TreeError {
        TreeError::UnexpectedOperand { kind: self.kind.clone(),
                                       index,
                                       expected,
                                       found: found.shape() }
    }
}

/// The typed view of a node tag.
///
/// Every recognised tag maps to exactly one variant, so the evaluator has a
/// single dispatch point. Array tags carry their rank, parsed from the tag
/// suffix (`array3d`, `array_access3d`, `array_assign3d`), which lets one
/// handler serve every rank.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `main`: program root wrapping a statement list.
    Main,
    /// `statements`: ordered statement list.
    Statements,
    /// `statement-expr`: an expression used as a statement.
    StatementExpr,
    /// `paren`: a parenthesised expression.
    Paren,
    /// `assign`: binds a name to a value.
    Assign,
    /// `name`: variable lookup.
    Name,
    /// `number`: numeric literal.
    Number,
    /// `string`: text literal.
    Text,
    /// `list`: list literal.
    List,
    /// `index`: generic sequence or text indexing.
    Index,
    /// Binary operators such as `plus` or `lte`.
    Binary(BinaryOperator),
    /// Unary operators: `uminus`, `inc` and `dec`.
    Unary(UnaryOperator),
    /// `pass`: no-op.
    Pass,
    /// `break`: early loop exit.
    Break,
    /// `print`: writes a value.
    Print,
    /// `input`: prompts for a line.
    Input,
    /// `if-elif-else`: conditional.
    IfElifElse,
    /// `while`: loop.
    While,
    /// `arrayNd`: zero-filled array constructor.
    ArrayNew {
        /// Number of dimensions.
        rank: usize,
    },
    /// `array_accessNd`: indexed read.
    ArrayAccess {
        /// Number of coordinates.
        rank: usize,
    },
    /// `array_assignNd`: indexed write.
    ArrayAssign {
        /// Number of coordinates.
        rank: usize,
    },
}

impl NodeKind {
    /// Maps a node tag to its kind, or `None` for tags the evaluator does not
    /// handle.
    ///
    /// # Example
    /// ```
    /// use aslang::ast::NodeKind;
    ///
    /// assert_eq!(NodeKind::from_tag("array_access3d"), Some(NodeKind::ArrayAccess { rank: 3 }));
    /// assert_eq!(NodeKind::from_tag("array7d"), Some(NodeKind::ArrayNew { rank: 7 }));
    /// assert_eq!(NodeKind::from_tag("array0d"), None);
    /// assert_eq!(NodeKind::from_tag("lambda"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if let Some(op) = BinaryOperator::from_tag(tag) {
            return Some(Self::Binary(op));
        }
        if let Some(op) = UnaryOperator::from_tag(tag) {
            return Some(Self::Unary(op));
        }

        let kind = match tag {
            "main" => Self::Main,
            "statements" => Self::Statements,
            "statement-expr" => Self::StatementExpr,
            "paren" => Self::Paren,
            "assign" => Self::Assign,
            "name" => Self::Name,
            "number" => Self::Number,
            "string" => Self::Text,
            "list" => Self::List,
            "index" => Self::Index,
            "pass" => Self::Pass,
            "break" => Self::Break,
            "print" => Self::Print,
            "input" => Self::Input,
            "if-elif-else" => Self::IfElifElse,
            "while" => Self::While,
            _ => return Self::array_kind(tag),
        };
        Some(kind)
    }

    fn array_kind(tag: &str) -> Option<Self> {
        if let Some(rest) = tag.strip_prefix("array_access") {
            return parse_rank(rest).map(|rank| Self::ArrayAccess { rank });
        }
        if let Some(rest) = tag.strip_prefix("array_assign") {
            return parse_rank(rest).map(|rank| Self::ArrayAssign { rank });
        }
        tag.strip_prefix("array")
           .and_then(parse_rank)
           .map(|rank| Self::ArrayNew { rank })
    }
}

/// Parses a rank suffix such as `2d`. Ranks start at 1.
fn parse_rank(suffix: &str) -> Option<usize> {
    let digits = suffix.strip_suffix('d')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|rank| *rank > 0)
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the eager logical
/// connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`plus`, `+`)
    Add,
    /// Subtraction (`minus`, `-`)
    Sub,
    /// Multiplication (`times`, `*`)
    Mul,
    /// Division (`divide`, `/`)
    Div,
    /// Remainder (`mod`, `%`)
    Mod,
    /// Exponentiation (`pow`, `^`)
    Pow,
    /// Equal to (`equals`, `==`)
    Equal,
    /// Not equal to (`ne`, `!=`)
    NotEqual,
    /// Greater than (`gt`, `>`)
    Greater,
    /// Greater than or equal (`gte`, `>=`)
    GreaterEqual,
    /// Less than (`lt`, `<`)
    Less,
    /// Less than or equal (`lte`, `<=`)
    LessEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// Maps a node tag to its operator.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let op = match tag {
            "plus" => Self::Add,
            "minus" => Self::Sub,
            "times" => Self::Mul,
            "divide" => Self::Div,
            "mod" => Self::Mod,
            "pow" => Self::Pow,
            "equals" => Self::Equal,
            "ne" => Self::NotEqual,
            "gt" => Self::Greater,
            "gte" => Self::GreaterEqual,
            "lt" => Self::Less,
            "lte" => Self::LessEqual,
            "and" => Self::And,
            "or" => Self::Or,
            _ => return None,
        };
        Some(op)
    }

    /// The operator as written in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`uminus`).
    Negate,
    /// In-place increment of a named binding (`inc`).
    Increment,
    /// In-place decrement of a named binding (`dec`).
    Decrement,
}

impl UnaryOperator {
    /// Maps a node tag to its operator.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "uminus" => Some(Self::Negate),
            "inc" => Some(Self::Increment),
            "dec" => Some(Self::Decrement),
            _ => None,
        }
    }

    /// The operator as written in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Writes `token` bare when it reads back as a single atom, quoted otherwise.
fn write_token(f: &mut fmt::Formatter<'_>, token: &str) -> fmt::Result {
    let bare = !token.is_empty()
               && !token.chars()
                        .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | '~' | ';' | '"'));
    if bare {
        return write!(f, "{token}");
    }

    write!(f, "\"")?;
    for c in token.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            _ => write!(f, "{c}")?,
        }
    }
    write!(f, "\"")
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "{node}"),
            Self::Token(token) => write_token(f, token),
            Self::Seq(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Nil => write!(f, "~"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_token(f, &self.kind)?;
        for operand in &self.operands {
            write!(f, " {operand}")?;
        }
        write!(f, ")")
    }
}
