//! Tokenization is the process of converting a string of characters into a
//! string of tokens (which are like the "words" of the programming language).
//! It happens in two steps. The first produces [raw tokens](raw) straight from
//! the source text, including comments and any problems found while scanning
//! literals. The second drops comments, turns byte ranges into line/column
//! spans and turns problems into errors.
//!
//! Newlines are significant in bucket, since they terminate statements, so
//! they are produced as tokens like any other symbol. Other whitespace is
//! skipped.
//!
//! The lexer keeps one token of lookahead: [`Lexer::current`] is the most
//! recently produced token, and [`Lexer::next`] replaces it with the following
//! one. After the end of the file, the lexer keeps producing `EndOfFile`.

mod raw;
mod token;


pub use token::{Keyword, Symbol, Token, TokenKind};

use bucket_common::message::{Error, Result};
use bucket_common::source::{SourceFile, Span};
use log::{debug, trace};
use logos::Logos;

use self::raw::{Fault, FaultKind, Number, RawToken, Scan};

/// Lex an entire source file, not including the final `EndOfFile` token.
pub fn lex(source: &SourceFile) -> Result<Vec<Token>> {
    debug!("lexing '{}'", source.name());

    let mut lexer = Lexer::new(source)?;
    let mut tokens = Vec::new();

    while !lexer.current().is_eof() {
        tokens.push(lexer.advance()?);
    }

    Ok(tokens)
}

pub struct Lexer<'src> {
    source: &'src SourceFile,
    raw: logos::SpannedIter<'src, RawToken>,
    current: Token,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned at the first token of the source.
    pub fn new(source: &'src SourceFile) -> Result<Self> {
        let mut lexer = Self {
            source,
            raw: RawToken::lexer(source.text()).spanned(),
            current: Token::default(),
        };

        lexer.next()?;
        Ok(lexer)
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Replace the current token with the next one.
    pub fn next(&mut self) -> Result<()> {
        self.current = self.lex()?;
        trace!("lexed {} at {}", self.current, self.current.span.begin);
        Ok(())
    }

    /// Move to the next token, returning the one that was current.
    pub fn advance(&mut self) -> Result<Token> {
        let next = self.lex()?;
        trace!("lexed {} at {}", next, next.span.begin);
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn lex(&mut self) -> Result<Token> {
        loop {
            let Some((token, range)) = self.raw.next() else {
                let end = self.source.end_position();
                return Ok(Token::new(
                    TokenKind::Symbol(Symbol::EndOfFile),
                    Span::new(end, end),
                ));
            };

            let span = self.source.span(range.start, range.end);

            let kind = match token {
                RawToken::LineComment | RawToken::BlockComment(Scan::Done(())) => continue,

                RawToken::Name(name) => TokenKind::Identifier(name),
                RawToken::Keyword(keyword) => TokenKind::Keyword(keyword),
                RawToken::Boolean(value) => TokenKind::Boolean(value),
                RawToken::Symbol(symbol) => TokenKind::Symbol(symbol),

                RawToken::Number(Scan::Done(Number::Integer(value))) => TokenKind::Integer(value),
                RawToken::Number(Scan::Done(Number::Real(value))) => TokenKind::Real(value),
                RawToken::String(Scan::Done(value)) => TokenKind::String(value),
                RawToken::Character(Scan::Done(value)) => TokenKind::Character(value),

                RawToken::Number(Scan::Failed(fault))
                | RawToken::String(Scan::Failed(fault))
                | RawToken::Character(Scan::Failed(fault))
                | RawToken::BlockComment(Scan::Failed(fault)) => return Err(self.fault(fault)),

                RawToken::Bang => return Err(Error::lex_lone_bang(span.end)),

                RawToken::Error => {
                    let character = self.source.text()[range.start..]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(Error::lex_unexpected_character(span.begin, character));
                }
            };

            return Ok(Token::new(kind, span));
        }
    }

    fn fault(&self, fault: Fault) -> Error {
        let at = self.source.position_at(fault.offset);
        match fault.kind {
            FaultKind::UnclosedString => Error::lex_unclosed_string(at),
            FaultKind::InvalidEscape => Error::lex_invalid_escape(at),
            FaultKind::EmptyCharacter => Error::lex_empty_character(at),
            FaultKind::LongCharacter => Error::lex_long_character(at),
            FaultKind::UnclosedCharacter => Error::lex_unclosed_character(at),
            FaultKind::UnclosedComment => Error::lex_unclosed_comment(at),
            FaultKind::MissingExponent => Error::lex_missing_exponent(at),
            FaultKind::LetterInNumber => Error::lex_letter_in_number(at),
            FaultKind::IntegerTooLarge => Error::lex_integer_too_large(at),
            FaultKind::RealTooLarge => Error::lex_real_too_large(at),
        }
    }
}
