//! Checked narrowing of tree nodes. Code that only holds "some node" wraps it
//! in a [`Node`] and asks for the shape it wants with [`cast`], getting `None`
//! back when the node is something else.

use super::{
    Assignment, Call, Class, Expression, ExpressionNode, Field, GlobalStatement, If, Loop,
    Method, Statement, StatementNode,
};

/// A borrowed reference to any node of the tree.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Class(&'a Class),
    Method(&'a Method),
    Field(&'a Field),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

pub trait Cast<'a>: Sized {
    fn cast(node: Node<'a>) -> Option<Self>;
}

/// Narrow `node` to `T`, if it is one.
///
/// ```
/// # use bucket_frontend::ast::{cast, Field, Method, Node};
/// # fn check(method: &Method) {
/// assert!(cast::<&Field>(Node::Method(method)).is_none());
/// assert!(cast::<&Method>(Node::Method(method)).is_some());
/// # }
/// ```
pub fn cast<'a, T: Cast<'a>>(node: Node<'a>) -> Option<T> {
    T::cast(node)
}

impl<'a> Cast<'a> for &'a Class {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Class(class) => Some(class),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a Method {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Method(method) => Some(method),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a Field {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a Statement {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Statement(statement) => Some(statement),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a Expression {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a If {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Statement(Statement {
                node: StatementNode::If(conditional),
                ..
            }) => Some(conditional),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a Loop {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Statement(Statement {
                node: StatementNode::Loop(repeat),
                ..
            }) => Some(repeat),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a Call {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Expression(Expression {
                node: ExpressionNode::Call(call),
                ..
            }) => Some(call),
            _ => None,
        }
    }
}

impl<'a> Cast<'a> for &'a Assignment {
    fn cast(node: Node<'a>) -> Option<Self> {
        match node {
            Node::Expression(Expression {
                node: ExpressionNode::Assignment(assignment),
                ..
            }) => Some(assignment),
            _ => None,
        }
    }
}

impl<'a> From<&'a GlobalStatement> for Node<'a> {
    fn from(statement: &'a GlobalStatement) -> Self {
        match statement {
            GlobalStatement::Class(class) => Self::Class(class),
            GlobalStatement::Method(method) => Self::Method(method),
            GlobalStatement::Field(field) => Self::Field(field),
        }
    }
}

impl<'a> From<&'a Class> for Node<'a> {
    fn from(class: &'a Class) -> Self {
        Self::Class(class)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}
