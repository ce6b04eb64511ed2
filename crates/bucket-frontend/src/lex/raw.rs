use logos::{Lexer, Logos};

use super::token::{Keyword, Symbol};

/// Raw tokens are the "raw" output of the lexer, with comments as separate
/// tokens and scanning failures carried inside the token rather than reported.
/// A second pass turns these into proper [`Token`](super::Token)s with
/// line/column spans, dropping comments and converting faults into errors.
#[derive(Logos, Debug)]
pub enum RawToken {
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", |lexer| lexer.slice().to_string())]
    Name(String),

    #[token("end", |_| Keyword::End)]
    #[token("if", |_| Keyword::If)]
    #[token("elif", |_| Keyword::Elif)]
    #[token("else", |_| Keyword::Else)]
    #[token("do", |_| Keyword::Do)]
    #[token("for", |_| Keyword::For)]
    #[token("break", |_| Keyword::Break)]
    #[token("cycle", |_| Keyword::Cycle)]
    #[token("ret", |_| Keyword::Ret)]
    #[token("and", |_| Keyword::And)]
    #[token("or", |_| Keyword::Or)]
    #[token("not", |_| Keyword::Not)]
    #[token("class", |_| Keyword::Class)]
    #[token("method", |_| Keyword::Method)]
    Keyword(Keyword),

    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Boolean(bool),

    #[regex(r"[0-9]", lex_number)]
    #[regex(r"\.[0-9]", lex_number)]
    Number(Scan<Number>),

    #[token("\"", lex_string)]
    String(Scan<String>),

    #[token("'", lex_character)]
    Character(Scan<char>),

    #[token("(", |_| Symbol::OpenParenthesis)]
    #[token(")", |_| Symbol::CloseParenthesis)]
    #[token("[", |_| Symbol::OpenSquareBracket)]
    #[token("]", |_| Symbol::CloseSquareBracket)]
    #[token("+", |_| Symbol::Plus)]
    #[token("-", |_| Symbol::Minus)]
    #[token("*", |_| Symbol::Asterisk)]
    #[token("/", |_| Symbol::Slash)]
    #[token("^", |_| Symbol::Caret)]
    #[token("%", |_| Symbol::PercentSign)]
    #[token("&", |_| Symbol::Ampersand)]
    #[token("=", |_| Symbol::SingleEquals)]
    #[token("==", |_| Symbol::DoubleEquals)]
    #[token("!=", |_| Symbol::BangEquals)]
    #[token(">", |_| Symbol::Greater)]
    #[token(">=", |_| Symbol::GreaterOrEqual)]
    #[token("<", |_| Symbol::Lesser)]
    #[token("<=", |_| Symbol::LesserOrEqual)]
    #[token(".", |_| Symbol::Period)]
    #[token(",", |_| Symbol::Comma)]
    #[token(":", |_| Symbol::Colon)]
    #[token("\n", |_| Symbol::Newline)]
    Symbol(Symbol),

    /// A `!` not followed by `=`.
    #[token("!")]
    Bang,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", lex_block_comment)]
    BlockComment(Scan<()>),

    #[error]
    #[regex(r"[ \t\v\f]+", logos::skip)]
    Error,
}

/// The outcome of scanning a literal or comment by hand.
#[derive(Debug)]
pub enum Scan<T> {
    Done(T),
    Failed(Fault),
}

/// Something wrong found while scanning, at the given byte offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fault {
    pub kind: FaultKind,
    pub offset: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FaultKind {
    UnclosedString,
    InvalidEscape,
    EmptyCharacter,
    LongCharacter,
    UnclosedCharacter,
    UnclosedComment,
    MissingExponent,
    LetterInNumber,
    IntegerTooLarge,
    RealTooLarge,
}

impl<T> Scan<T> {
    fn fail(kind: FaultKind, offset: usize) -> Self {
        Self::Failed(Fault { kind, offset })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(u64),
    Real(f64),
}

/// Lex a numeric literal, starting after its first digit (or after `.` and
/// its first digit).
fn lex_number(lexer: &mut Lexer<RawToken>) -> Scan<Number> {
    // A number consists of (up to) three parts:
    //
    // - The integer part `[0-9]+`
    // - The decimal part `\.[0-9]*`
    // - The exponent part `[eE][+\-]?[0-9]+`
    //
    // Either of the last two makes the number real. A literal starting with a
    // dot has no integer part, and so cannot get a second decimal part.

    let start = lexer.span().start;
    let base = lexer.span().end;
    let rest = lexer.remainder();

    let mut text = lexer.slice().to_string();
    let mut real = text.starts_with('.');
    let mut n = take_digits(rest, &mut text);

    if !real && rest[n..].starts_with('.') {
        real = true;
        text.push('.');
        n += 1;
        n += take_digits(&rest[n..], &mut text);
    }

    if rest[n..].starts_with(&['e', 'E'][..]) {
        real = true;
        text.push('e');
        n += 1;

        if let Some(sign) = rest[n..].chars().next().filter(|&c| matches!(c, '+' | '-')) {
            text.push(sign);
            n += 1;
        }

        let digits = take_digits(&rest[n..], &mut text);
        if digits == 0 {
            lexer.bump(n);
            return Scan::fail(FaultKind::MissingExponent, base + n);
        }

        n += digits;
    }

    lexer.bump(n);

    if rest[n..].starts_with(|c: char| c.is_alphabetic() || c == '_') {
        return Scan::fail(FaultKind::LetterInNumber, base + n);
    }

    if real {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Scan::Done(Number::Real(value)),
            Ok(_) => Scan::fail(FaultKind::RealTooLarge, start),
            Err(_) => Scan::fail(FaultKind::MissingExponent, start),
        }
    } else {
        match text.parse() {
            Ok(value) => Scan::Done(Number::Integer(value)),
            Err(_) => Scan::fail(FaultKind::IntegerTooLarge, start),
        }
    }
}

/// Append the ASCII digits at the start of `text` to `into`, returning how many
/// there were.
fn take_digits(text: &str, into: &mut String) -> usize {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    into.push_str(&text[..digits]);
    digits
}

/// Lex a string literal, starting after the opening quote.
fn lex_string(lexer: &mut Lexer<RawToken>) -> Scan<String> {
    let start = lexer.span().start;
    let base = lexer.span().end;
    let rest = lexer.remainder();

    let mut value = String::new();
    let mut chars = rest.char_indices();

    loop {
        match chars.next() {
            Some((i, '"')) => {
                lexer.bump(i + 1);
                return Scan::Done(value);
            }

            Some((i, '\\')) => match chars.next().and_then(|(_, c)| unescape(c)) {
                Some(c) => value.push(c),
                None => {
                    lexer.bump(rest.len());
                    return Scan::fail(FaultKind::InvalidEscape, base + i);
                }
            },

            Some((_, c)) => value.push(c),

            None => {
                lexer.bump(rest.len());
                return Scan::fail(FaultKind::UnclosedString, start);
            }
        }
    }
}

/// Lex a character literal, starting after the opening quote.
fn lex_character(lexer: &mut Lexer<RawToken>) -> Scan<char> {
    let start = lexer.span().start;
    let base = lexer.span().end;
    let rest = lexer.remainder();

    let mut chars = rest.char_indices();

    let value = match chars.next() {
        Some((i, '\'')) => return Scan::fail(FaultKind::EmptyCharacter, base + i),
        Some((i, '\\')) => match chars.next().and_then(|(_, c)| unescape(c)) {
            Some(c) => c,
            None => return Scan::fail(FaultKind::InvalidEscape, base + i),
        },
        Some((_, c)) => c,
        None => return Scan::fail(FaultKind::UnclosedCharacter, start),
    };

    match chars.next() {
        Some((i, '\'')) => {
            lexer.bump(i + 1);
            Scan::Done(value)
        }
        Some((i, _)) => Scan::fail(FaultKind::LongCharacter, base + i),
        None => Scan::fail(FaultKind::UnclosedCharacter, start),
    }
}

/// The character denoted by the escape sequence `\c`, if it is one.
fn unescape(c: char) -> Option<char> {
    Some(match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        _ => return None,
    })
}

/// Lex a block comment delimited by `/* ... */`. Block comments nest.
fn lex_block_comment(lexer: &mut Lexer<RawToken>) -> Scan<()> {
    let start = lexer.span().start;
    let rest = lexer.remainder();

    let mut depth = 1usize;
    let mut chars = rest.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        match (c, chars.peek()) {
            ('*', Some(&(i, '/'))) => {
                chars.next();
                depth -= 1;

                if depth == 0 {
                    lexer.bump(i + 1);
                    return Scan::Done(());
                }
            }

            ('/', Some(&(_, '*'))) => {
                chars.next();
                depth += 1;
            }

            _ => {}
        }
    }

    lexer.bump(rest.len());
    Scan::fail(FaultKind::UnclosedComment, start)
}
