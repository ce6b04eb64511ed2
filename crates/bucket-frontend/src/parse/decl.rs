use bucket_common::message::Result;
use bucket_common::source::{Position, Span};
use log::trace;

use super::Parser;
use crate::ast::{Argument, Class, Field, GlobalStatement, Method, MODULE_NAME};
use crate::lex::{Keyword, Symbol};

impl Parser<'_> {
    /// ```abnf
    /// program = *(global-statement / NL) EOF
    /// ```
    pub fn parse_program(&mut self) -> Result<Class> {
        let mut body = vec![];

        while !self.is_done() {
            if self.accept(Symbol::Newline)?.is_some() {
                continue;
            }

            match self.parse_global_statement()? {
                Some(statement) => body.push(statement),
                None => return Err(self.expected("global statement, newline or end of file")),
            }
        }

        Ok(Class {
            name: MODULE_NAME.into(),
            body,
            span: Span::new(Position::default(), self.current().span.end),
        })
    }

    /// ```abnf
    /// global-statement = class-def / method-def / field-decl
    /// ```
    fn parse_global_statement(&mut self) -> Result<Option<GlobalStatement>> {
        if let Some(class) = self.parse_class()? {
            Ok(Some(GlobalStatement::Class(class)))
        } else if let Some(method) = self.parse_method()? {
            Ok(Some(GlobalStatement::Method(method)))
        } else if let Some(field) = self.parse_field()? {
            Ok(Some(GlobalStatement::Field(field)))
        } else {
            Ok(None)
        }
    }

    /// ```abnf
    /// class-def = "class" name NL *(global-statement / NL) "end" (NL / EOF)
    /// ```
    fn parse_class(&mut self) -> Result<Option<Class>> {
        let Some(opener) = self.accept(Keyword::Class)? else {
            return Ok(None);
        };

        let (name, _) = self.expect_identifier("class name")?;
        self.expect(Symbol::Newline)?;

        trace!("parsing class '{name}'");

        let mut body = vec![];
        let end = loop {
            if let Some(end) = self.accept(Keyword::End)? {
                break end;
            }

            if self.accept(Symbol::Newline)?.is_some() {
                continue;
            }

            match self.parse_global_statement()? {
                Some(statement) => body.push(statement),
                None => return Err(self.expected("global statement or 'end'")),
            }
        };

        self.expect_end_of_line()?;

        Ok(Some(Class {
            name,
            body,
            span: opener + end,
        }))
    }

    /// ```abnf
    /// method-def = "method" name [arguments] [":" postfix-expr] NL block "end" (NL / EOF)
    /// arguments  = "(" [argument *("," argument)] ")"
    /// ```
    fn parse_method(&mut self) -> Result<Option<Method>> {
        let Some(opener) = self.accept(Keyword::Method)? else {
            return Ok(None);
        };

        let (name, _) = self.expect_identifier("method name")?;

        trace!("parsing method '{name}'");

        let mut arguments = vec![];
        if self.accept(Symbol::OpenParenthesis)?.is_some()
            && self.accept(Symbol::CloseParenthesis)?.is_none()
        {
            loop {
                arguments.push(self.parse_argument()?);

                if self.accept(Symbol::Comma)?.is_none() {
                    break;
                }
            }

            self.expect(Symbol::CloseParenthesis)?;
        }

        let return_class = match self.accept(Symbol::Colon)? {
            Some(_) => Some(self.postfix_expression()?),
            None => None,
        };

        self.expect(Symbol::Newline)?;

        let body = self.parse_block()?;
        let end = self.expect(Keyword::End)?;
        self.expect_end_of_line()?;

        Ok(Some(Method {
            name,
            arguments,
            return_class,
            body,
            span: opener + end,
        }))
    }

    /// ```abnf
    /// argument = name ":" postfix-expr
    /// ```
    fn parse_argument(&mut self) -> Result<Argument> {
        let (name, span) = self.expect_identifier("argument name")?;
        self.expect(Symbol::Colon)?;
        let class = self.postfix_expression()?;

        Ok(Argument {
            name,
            span: span + class.span,
            class,
        })
    }

    /// ```abnf
    /// field-decl = name ":" expr NL
    /// ```
    fn parse_field(&mut self) -> Result<Option<Field>> {
        let Some((name, span)) = self.identifier()? else {
            return Ok(None);
        };

        self.expect(Symbol::Colon)?;
        let class = self.parse_expression()?;
        self.expect(Symbol::Newline)?;

        Ok(Some(Field {
            name,
            span: span + class.span,
            class,
        }))
    }
}
