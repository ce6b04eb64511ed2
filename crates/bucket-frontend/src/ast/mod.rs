//! The abstract syntax tree. A whole source file parses into a single
//! [`Class`] named [`MODULE_NAME`], whose body holds the top-level
//! declarations. Every operator has already been desugared into a [`Call`] by
//! the time it reaches the tree, so expressions only come in a handful of
//! shapes.

mod cast;
mod pretty;


pub use self::cast::{cast, Cast, Node};
pub use self::pretty::Prettier;

use bucket_common::source::Span;

pub type Name = String;

/// The name of the synthetic class holding the contents of a source file.
pub const MODULE_NAME: &str = "__module__";

/// The receiver of a bare call such as `f(x)`.
pub const SELF_NAME: &str = "__self__";

#[derive(Clone, Debug, PartialEq)]
pub struct Class {
    pub name: Name,
    pub body: Vec<GlobalStatement>,
    pub span: Span,
}

impl Class {
    pub fn is_module(&self) -> bool {
        self.name == MODULE_NAME
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GlobalStatement {
    Class(Class),
    Method(Method),
    Field(Field),
}

impl GlobalStatement {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => &class.name,
            Self::Method(method) => &method.name,
            Self::Field(field) => &field.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Class(class) => class.span,
            Self::Method(method) => method.span,
            Self::Field(field) => field.span,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub return_class: Option<Expression>,
    pub body: Vec<Statement>,
    pub span: Span,
}

/// A method parameter such as `x: Int`.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub class: Expression,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: Name,
    pub class: Expression,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub node: StatementNode,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatementNode {
    If(If),
    Loop(Loop),
    Break,
    Cycle,
    Ret(Option<Expression>),
    Expression(Expression),
}

#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub condition: Expression,
    pub if_body: Vec<Statement>,
    pub elif_bodies: Vec<(Expression, Vec<Statement>)>,
    pub else_body: Vec<Statement>,
}

/// An unconditional loop, left only through `break` or `ret`.
#[derive(Clone, Debug, PartialEq)]
pub struct Loop {
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub node: ExpressionNode,
    pub span: Span,
}

impl Expression {
    pub fn new(node: ExpressionNode, span: Span) -> Self {
        Self { node, span }
    }

    /// The name of this expression if it is a plain identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.node {
            ExpressionNode::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionNode {
    Assignment(Assignment),
    Call(Call),
    Identifier(Name),
    Integer(u64),
    Real(f64),
    String(String),
    Character(char),
    Bool(bool),
}

/// `left = right`. The left side is not checked to be assignable.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// A method call `object.name(args)`. Operators become calls too, so `a + b`
/// is `a.__add__(b)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub object: Box<Expression>,
    pub name: Name,
    pub args: Vec<Expression>,
}
