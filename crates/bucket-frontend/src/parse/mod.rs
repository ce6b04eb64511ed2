//! The parser is a plain recursive descent parser with a single token of
//! lookahead, taken straight from the [`Lexer`]. Each parsing function is
//! documented with the bit of grammar it handles. There is no error recovery:
//! the first unexpected token ends the parse.
//!
//! Operators never reach the tree as such. Every operator application is
//! turned into a [`Call`](crate::ast::Call) of a specially named method on the
//! left (or only) operand, so `a + b` parses exactly like `a.__add__(b)`.

mod decl;
mod expr;
mod matcher;
mod stmt;

#[cfg(test)]
mod tests;

use bucket_common::message::{Error, Result};
use bucket_common::source::{SourceFile, Span};
use log::{info, trace};

use crate::ast::{self, Name};
use crate::lex::{Lexer, Symbol, Token, TokenKind};
use matcher::Matcher;

/// Parse a whole source file into the module class.
pub fn parse(source: &SourceFile) -> Result<ast::Class> {
    info!("parsing '{}'", source.name());

    let mut parser = Parser::new(source)?;
    let program = parser.parse_program()?;

    trace!(
        "done parsing '{}' ({} top-level declarations)",
        source.name(),
        program.body.len()
    );

    Ok(program)
}

struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src SourceFile) -> Result<Self> {
        Ok(Self {
            lexer: Lexer::new(source)?,
        })
    }

    fn current(&self) -> &Token {
        self.lexer.current()
    }

    fn is_done(&self) -> bool {
        self.current().is_eof()
    }

    fn peek(&self, matcher: impl Matcher) -> bool {
        matcher.matches(&self.current().kind)
    }

    /// Consume the current token if it matches, returning its span.
    fn accept(&mut self, matcher: impl Matcher) -> Result<Option<Span>> {
        if self.peek(matcher) {
            let span = self.current().span;
            self.lexer.next()?;
            Ok(Some(span))
        } else {
            Ok(None)
        }
    }

    /// Consume the current token, failing if it doesn't match.
    fn expect(&mut self, matcher: impl Matcher) -> Result<Span> {
        match self.accept(matcher)? {
            Some(span) => Ok(span),
            None => Err(self.expected(matcher.describe())),
        }
    }

    /// Consume the newline ending a block, or accept the end of the file in
    /// its place.
    fn expect_end_of_line(&mut self) -> Result<Span> {
        self.expect(&[Symbol::Newline, Symbol::EndOfFile][..])
    }

    fn identifier(&mut self) -> Result<Option<(Name, Span)>> {
        let TokenKind::Identifier(name) = &self.current().kind else {
            return Ok(None);
        };

        let name = name.clone();
        let span = self.current().span;
        self.lexer.next()?;

        Ok(Some((name, span)))
    }

    fn expect_identifier(&mut self, what: &str) -> Result<(Name, Span)> {
        match self.identifier()? {
            Some(identifier) => Ok(identifier),
            None => Err(self.expected(what)),
        }
    }

    /// An error saying that `what` was expected at the current token.
    fn expected(&self, what: impl AsRef<str>) -> Error {
        let current = self.current();
        Error::parse_expected(current.span.begin, what, current.kind.describe())
    }
}
