use bucket_common::message::Result;
use bucket_common::source::Span;

use super::Parser;
use crate::ast::{Assignment, Call, Expression, ExpressionNode, SELF_NAME};
use crate::lex::{Keyword, Symbol, TokenKind};

impl Parser<'_> {
    /// ```abnf
    /// expr = or-expr ["=" expr]
    /// ```
    pub fn parse_expression(&mut self) -> Result<Expression> {
        let left = self.or_expression()?;

        if self.accept(Symbol::SingleEquals)?.is_none() {
            return Ok(left);
        }

        let right = self.parse_expression()?;
        let span = left.span + right.span;

        Ok(Expression::new(
            ExpressionNode::Assignment(Assignment {
                left: Box::new(left),
                right: Box::new(right),
            }),
            span,
        ))
    }

    /// ```abnf
    /// or-expr = and-expr ["or" or-expr]
    /// ```
    fn or_expression(&mut self) -> Result<Expression> {
        let left = self.and_expression()?;

        if self.accept(Keyword::Or)?.is_some() {
            let right = self.or_expression()?;
            Ok(binary(left, "__or__", right))
        } else {
            Ok(left)
        }
    }

    /// ```abnf
    /// and-expr = eq-expr ["and" and-expr]
    /// ```
    fn and_expression(&mut self) -> Result<Expression> {
        let left = self.equality_expression()?;

        if self.accept(Keyword::And)?.is_some() {
            let right = self.and_expression()?;
            Ok(binary(left, "__and__", right))
        } else {
            Ok(left)
        }
    }

    /// ```abnf
    /// eq-expr = cmp-expr [("==" / "!=") cmp-expr]
    /// ```
    fn equality_expression(&mut self) -> Result<Expression> {
        const OPERATORS: &[(Symbol, &str)] = &[
            (Symbol::DoubleEquals, "__eq__"),
            (Symbol::BangEquals, "__ne__"),
        ];

        let left = self.comparison_expression()?;

        match self.operator(OPERATORS)? {
            Some(name) => {
                let right = self.comparison_expression()?;
                Ok(binary(left, name, right))
            }
            None => Ok(left),
        }
    }

    /// ```abnf
    /// cmp-expr = add-expr [(">" / ">=" / "<" / "<=") add-expr]
    /// ```
    fn comparison_expression(&mut self) -> Result<Expression> {
        const OPERATORS: &[(Symbol, &str)] = &[
            (Symbol::Greater, "__gt__"),
            (Symbol::GreaterOrEqual, "__ge__"),
            (Symbol::Lesser, "__lt__"),
            (Symbol::LesserOrEqual, "__le__"),
        ];

        let left = self.additive_expression()?;

        match self.operator(OPERATORS)? {
            Some(name) => {
                let right = self.additive_expression()?;
                Ok(binary(left, name, right))
            }
            None => Ok(left),
        }
    }

    /// ```abnf
    /// add-expr = mul-expr *(("+" / "-") mul-expr)
    /// ```
    fn additive_expression(&mut self) -> Result<Expression> {
        const OPERATORS: &[(Symbol, &str)] =
            &[(Symbol::Plus, "__add__"), (Symbol::Minus, "__sub__")];

        let mut expression = self.multiplicative_expression()?;

        while let Some(name) = self.operator(OPERATORS)? {
            let right = self.multiplicative_expression()?;
            expression = binary(expression, name, right);
        }

        Ok(expression)
    }

    /// ```abnf
    /// mul-expr = unary-expr *(("*" / "/" / "%") unary-expr)
    /// ```
    fn multiplicative_expression(&mut self) -> Result<Expression> {
        const OPERATORS: &[(Symbol, &str)] = &[
            (Symbol::Asterisk, "__mul__"),
            (Symbol::Slash, "__div__"),
            (Symbol::PercentSign, "__mod__"),
        ];

        let mut expression = self.unary_expression()?;

        while let Some(name) = self.operator(OPERATORS)? {
            let right = self.unary_expression()?;
            expression = binary(expression, name, right);
        }

        Ok(expression)
    }

    /// ```abnf
    /// unary-expr  = ("+" / "-" / "*" / "&") unary-expr
    /// unary-expr =/ "not" unary-expr
    /// unary-expr =/ pow-expr
    /// ```
    fn unary_expression(&mut self) -> Result<Expression> {
        const OPERATORS: &[(Symbol, &str)] = &[
            (Symbol::Plus, "__pos__"),
            (Symbol::Minus, "__neg__"),
            (Symbol::Asterisk, "__dereference__"),
            (Symbol::Ampersand, "__addressof__"),
        ];

        let opener = self.current().span;
        let name = match self.accept(Keyword::Not)? {
            Some(_) => Some("__not__"),
            None => self.operator(OPERATORS)?,
        };

        match name {
            Some(name) => {
                let operand = self.unary_expression()?;
                let span = opener + operand.span;
                Ok(call(operand, name, vec![], span))
            }
            None => self.power_expression(),
        }
    }

    /// ```abnf
    /// pow-expr = postfix-expr ["^" unary-expr]
    /// ```
    fn power_expression(&mut self) -> Result<Expression> {
        let base = self.postfix_expression()?;

        if self.accept(Symbol::Caret)?.is_some() {
            let exponent = self.unary_expression()?;
            Ok(binary(base, "__pow__", exponent))
        } else {
            Ok(base)
        }
    }

    /// ```abnf
    /// postfix-expr = primary-expr *postfix
    /// postfix      = "." name [call-args]
    /// postfix     =/ call-args
    /// postfix     =/ "[" expr *("," expr) "]"
    /// call-args    = "(" [expr *("," expr)] ")"
    /// ```
    pub(super) fn postfix_expression(&mut self) -> Result<Expression> {
        let mut expression = self.primary_expression()?;

        loop {
            if self.accept(Symbol::Period)?.is_some() {
                let (name, name_span) = self.expect_identifier("method name")?;
                let (args, end) = match self.accept(Symbol::OpenParenthesis)? {
                    Some(_) => self.arguments(Symbol::CloseParenthesis, true)?,
                    None => (vec![], name_span),
                };

                let span = expression.span + end;
                expression = call(expression, name, args, span);
            } else if self.accept(Symbol::OpenParenthesis)?.is_some() {
                let (args, end) = self.arguments(Symbol::CloseParenthesis, true)?;
                let span = expression.span + end;
                expression = call(expression, "__call__", args, span);
            } else if self.accept(Symbol::OpenSquareBracket)?.is_some() {
                let (args, end) = self.arguments(Symbol::CloseSquareBracket, false)?;
                let span = expression.span + end;
                expression = call(expression, "__index__", args, span);
            } else {
                break;
            }
        }

        Ok(expression)
    }

    /// ```abnf
    /// primary-expr = name [call-args] / integer / real / string / character / boolean
    /// primary-expr =/ "(" expr ")"
    /// ```
    ///
    /// A name directly followed by `(` is a call on `__self__`.
    fn primary_expression(&mut self) -> Result<Expression> {
        if let Some(opener) = self.accept(Symbol::OpenParenthesis)? {
            let inner = self.parse_expression()?;
            let closer = self.expect(Symbol::CloseParenthesis)?;
            return Ok(Expression::new(inner.node, opener + closer));
        }

        let span = self.current().span;
        let node = match &self.current().kind {
            TokenKind::Identifier(name) => ExpressionNode::Identifier(name.clone()),
            TokenKind::Integer(value) => ExpressionNode::Integer(*value),
            TokenKind::Real(value) => ExpressionNode::Real(*value),
            TokenKind::String(value) => ExpressionNode::String(value.clone()),
            TokenKind::Character(value) => ExpressionNode::Character(*value),
            TokenKind::Boolean(value) => ExpressionNode::Bool(*value),
            _ => return Err(self.expected("expression")),
        };

        self.lexer.next()?;

        if let ExpressionNode::Identifier(name) = node {
            if self.accept(Symbol::OpenParenthesis)?.is_none() {
                return Ok(Expression::new(ExpressionNode::Identifier(name), span));
            }

            let (args, end) = self.arguments(Symbol::CloseParenthesis, true)?;
            let this = Expression::new(ExpressionNode::Identifier(SELF_NAME.into()), span);
            return Ok(call(this, name, args, span + end));
        }

        Ok(Expression::new(node, span))
    }

    /// Parse the comma separated expressions of an argument list whose
    /// opening delimiter has been consumed, up to and including `closer`.
    fn arguments(&mut self, closer: Symbol, allow_empty: bool) -> Result<(Vec<Expression>, Span)> {
        let mut args = vec![];

        if allow_empty {
            if let Some(end) = self.accept(closer)? {
                return Ok((args, end));
            }
        }

        loop {
            args.push(self.parse_expression()?);

            if self.accept(Symbol::Comma)?.is_none() {
                break;
            }
        }

        let end = self.expect(closer)?;
        Ok((args, end))
    }

    /// Consume one of the given operator symbols, returning the name of the
    /// method it stands for.
    fn operator(&mut self, operators: &[(Symbol, &'static str)]) -> Result<Option<&'static str>> {
        for (symbol, name) in operators {
            if self.accept(*symbol)?.is_some() {
                return Ok(Some(*name));
            }
        }

        Ok(None)
    }
}

fn call(object: Expression, name: impl Into<String>, args: Vec<Expression>, span: Span) -> Expression {
    Expression::new(
        ExpressionNode::Call(Call {
            object: Box::new(object),
            name: name.into(),
            args,
        }),
        span,
    )
}

fn binary(left: Expression, name: &str, right: Expression) -> Expression {
    let span = left.span + right.span;
    call(left, name, vec![right], span)
}
