use std::fmt;

use bucket_common::source::Span;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Symbol(Symbol::EndOfFile)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TokenKind {
    Identifier(String),
    Keyword(Keyword),
    Symbol(Symbol),
    Integer(u64),
    Real(f64),
    String(String),
    Character(char),
    Boolean(bool),

    /// The token before the lexer has produced anything.
    #[default]
    Empty,
}

impl TokenKind {
    /// How the token is referred to in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Keyword(keyword) => format!("keyword '{keyword}'"),
            Self::Symbol(Symbol::Newline) => "newline".into(),
            Self::Symbol(Symbol::EndOfFile) => "end of file".into(),
            Self::Symbol(symbol) => format!("symbol '{symbol}'"),
            Self::Integer(value) => format!("integer {value}"),
            Self::Real(value) => format!("real {value:?}"),
            Self::String(_) => "string literal".into(),
            Self::Character(_) => "character literal".into(),
            Self::Boolean(value) => format!("boolean {value}"),
            Self::Empty => "nothing".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    End,
    If,
    Elif,
    Else,
    Do,
    For,
    Break,
    Cycle,
    Ret,
    And,
    Or,
    Not,
    Class,
    Method,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::End => "end",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::Do => "do",
            Self::For => "for",
            Self::Break => "break",
            Self::Cycle => "cycle",
            Self::Ret => "ret",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Class => "class",
            Self::Method => "method",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symbol {
    OpenParenthesis,
    CloseParenthesis,
    OpenSquareBracket,
    CloseSquareBracket,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,
    PercentSign,
    Ampersand,
    SingleEquals,
    DoubleEquals,
    BangEquals,
    Greater,
    GreaterOrEqual,
    Lesser,
    LesserOrEqual,
    Period,
    Comma,
    Colon,
    Newline,
    EndOfFile,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenParenthesis => "(",
            Self::CloseParenthesis => ")",
            Self::OpenSquareBracket => "[",
            Self::CloseSquareBracket => "]",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::PercentSign => "%",
            Self::Ampersand => "&",
            Self::SingleEquals => "=",
            Self::DoubleEquals => "==",
            Self::BangEquals => "!=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Lesser => "<",
            Self::LesserOrEqual => "<=",
            Self::Period => ".",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Newline => "newline",
            Self::EndOfFile => "end-of-file",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The debug rendering used when dumping a token stream.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "<{name}>"),
            Self::Keyword(keyword) => write!(f, "<{keyword}>"),
            Self::Symbol(symbol) => write!(f, "<{symbol}>"),
            Self::Integer(value) => write!(f, "<int: {value}>"),
            Self::Real(value) => write!(f, "<real: {value:?}>"),
            Self::String(value) => write!(f, "<\"{}\">", value.escape_default()),
            Self::Character(value) => write!(f, "<'{}'>", value.escape_default()),
            Self::Boolean(value) => write!(f, "<{value}>"),
            Self::Empty => write!(f, "<empty>"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
