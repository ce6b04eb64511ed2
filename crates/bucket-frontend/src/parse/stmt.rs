use bucket_common::message::Result;

use super::Parser;
use crate::ast::{If, Loop, Statement, StatementNode};
use crate::lex::{Keyword, Symbol};

impl Parser<'_> {
    /// Tokens that end a block of statements.
    const BLOCK_ENDS: &'static [Keyword] = &[Keyword::End, Keyword::Elif, Keyword::Else];

    /// Parse statements up to (but not including) `end`, `elif`, `else` or the
    /// end of the file.
    ///
    /// ```abnf
    /// block = *(statement / NL)
    /// ```
    pub fn parse_block(&mut self) -> Result<Vec<Statement>> {
        let mut body = vec![];

        while !self.is_done() && !self.peek(Self::BLOCK_ENDS) {
            if self.accept(Symbol::Newline)?.is_some() {
                continue;
            }

            body.push(self.parse_statement()?);
        }

        Ok(body)
    }

    /// ```abnf
    /// statement  = if-stmt / loop-stmt
    /// statement =/ "break" NL / "cycle" NL / "ret" [expr] NL
    /// statement =/ expr NL
    /// ```
    fn parse_statement(&mut self) -> Result<Statement> {
        if let Some(statement) = self.parse_if()? {
            return Ok(statement);
        }

        if let Some(statement) = self.parse_loop()? {
            return Ok(statement);
        }

        let statement = if let Some(span) = self.accept(Keyword::Break)? {
            Statement {
                node: StatementNode::Break,
                span,
            }
        } else if let Some(span) = self.accept(Keyword::Cycle)? {
            Statement {
                node: StatementNode::Cycle,
                span,
            }
        } else if let Some(span) = self.accept(Keyword::Ret)? {
            if self.peek(Symbol::Newline) {
                Statement {
                    node: StatementNode::Ret(None),
                    span,
                }
            } else {
                let value = self.parse_expression()?;
                Statement {
                    span: span + value.span,
                    node: StatementNode::Ret(Some(value)),
                }
            }
        } else {
            let expression = self.parse_expression()?;
            Statement {
                span: expression.span,
                node: StatementNode::Expression(expression),
            }
        };

        self.expect(Symbol::Newline)?;
        Ok(statement)
    }

    /// ```abnf
    /// if-stmt = "if" expr NL block *("elif" expr NL block) ["else" NL block] "end"
    /// ```
    fn parse_if(&mut self) -> Result<Option<Statement>> {
        let Some(opener) = self.accept(Keyword::If)? else {
            return Ok(None);
        };

        let condition = self.parse_expression()?;
        self.expect(Symbol::Newline)?;
        let if_body = self.parse_block()?;

        let mut elif_bodies = vec![];
        while self.accept(Keyword::Elif)?.is_some() {
            let condition = self.parse_expression()?;
            self.expect(Symbol::Newline)?;
            elif_bodies.push((condition, self.parse_block()?));
        }

        let else_body = match self.accept(Keyword::Else)? {
            Some(_) => {
                self.expect(Symbol::Newline)?;
                self.parse_block()?
            }
            None => vec![],
        };

        let end = self.expect(Keyword::End)?;

        Ok(Some(Statement {
            node: StatementNode::If(If {
                condition,
                if_body,
                elif_bodies,
                else_body,
            }),
            span: opener + end,
        }))
    }

    /// ```abnf
    /// loop-stmt = "do" NL block "end" NL
    /// ```
    fn parse_loop(&mut self) -> Result<Option<Statement>> {
        let Some(opener) = self.accept(Keyword::Do)? else {
            return Ok(None);
        };

        self.expect(Symbol::Newline)?;
        let body = self.parse_block()?;
        let end = self.expect(Keyword::End)?;
        self.expect(Symbol::Newline)?;

        Ok(Some(Statement {
            node: StatementNode::Loop(Loop { body }),
            span: opener + end,
        }))
    }
}
