use std::io;

use pretty::{Arena, DocAllocator, DocBuilder};

use super::{
    Argument, Class, Expression, ExpressionNode, Field, GlobalStatement, If, Method, Statement,
    StatementNode,
};

/// Prints a tree back out as source text that parses to the same tree.
/// Operators come out in their desugared call form.
pub struct Prettier<'a> {
    allocator: Arena<'a>,
    width: usize,
}

impl<'a> Prettier<'a> {
    pub fn new() -> Self {
        Self {
            allocator: Arena::new(),
            width: 80,
        }
    }

    /// Write `class` to `out`. The module class is written as its body alone.
    pub fn render<W: io::Write>(&'a self, class: &Class, out: &mut W) -> io::Result<()> {
        let doc = if class.is_module() {
            self.allocator.concat(
                class
                    .body
                    .iter()
                    .map(|statement| self.doc_global(statement).append(self.allocator.hardline())),
            )
        } else {
            self.doc_class(class).append(self.allocator.hardline())
        };

        doc.render(self.width, out)
    }

    fn doc_global(&'a self, statement: &GlobalStatement) -> DocBuilder<'a, Arena<'a>> {
        match statement {
            GlobalStatement::Class(class) => self.doc_class(class),
            GlobalStatement::Method(method) => self.doc_method(method),
            GlobalStatement::Field(field) => self.doc_field(field),
        }
    }

    fn doc_class(&'a self, class: &Class) -> DocBuilder<'a, Arena<'a>> {
        let body = class.body.iter().map(|statement| self.doc_global(statement));

        self.allocator
            .text(format!("class {}", class.name))
            .append(self.doc_body(body))
            .append(self.doc_end())
    }

    fn doc_method(&'a self, method: &Method) -> DocBuilder<'a, Arena<'a>> {
        let mut header = self.allocator.text(format!("method {}", method.name));

        if !method.arguments.is_empty() {
            header = header.append(
                self.allocator
                    .intersperse(
                        method.arguments.iter().map(|arg| self.doc_argument(arg)),
                        self.allocator.text(", "),
                    )
                    .parens(),
            );
        }

        if let Some(class) = &method.return_class {
            header = header
                .append(self.allocator.text(": "))
                .append(self.doc_expression(class));
        }

        header
            .append(self.doc_statements(&method.body))
            .append(self.doc_end())
    }

    fn doc_argument(&'a self, arg: &Argument) -> DocBuilder<'a, Arena<'a>> {
        self.allocator
            .text(format!("{}: ", arg.name))
            .append(self.doc_expression(&arg.class))
    }

    fn doc_field(&'a self, field: &Field) -> DocBuilder<'a, Arena<'a>> {
        self.allocator
            .text(format!("{}: ", field.name))
            .append(self.doc_expression(&field.class))
    }

    /// Each item on its own line, indented one level.
    fn doc_body(
        &'a self,
        items: impl Iterator<Item = DocBuilder<'a, Arena<'a>>>,
    ) -> DocBuilder<'a, Arena<'a>> {
        self.allocator
            .concat(items.map(|item| self.allocator.hardline().append(item)))
            .nest(2)
    }

    fn doc_statements(&'a self, statements: &[Statement]) -> DocBuilder<'a, Arena<'a>> {
        self.doc_body(statements.iter().map(|statement| self.doc_statement(statement)))
    }

    fn doc_end(&'a self) -> DocBuilder<'a, Arena<'a>> {
        self.allocator.hardline().append(self.allocator.text("end"))
    }

    fn doc_statement(&'a self, statement: &Statement) -> DocBuilder<'a, Arena<'a>> {
        match &statement.node {
            StatementNode::If(conditional) => self.doc_if(conditional),
            StatementNode::Loop(repeat) => self
                .allocator
                .text("do")
                .append(self.doc_statements(&repeat.body))
                .append(self.doc_end()),
            StatementNode::Break => self.allocator.text("break"),
            StatementNode::Cycle => self.allocator.text("cycle"),
            StatementNode::Ret(None) => self.allocator.text("ret"),
            StatementNode::Ret(Some(value)) => self
                .allocator
                .text("ret ")
                .append(self.doc_expression(value)),
            StatementNode::Expression(expression) => self.doc_expression(expression),
        }
    }

    fn doc_if(&'a self, conditional: &If) -> DocBuilder<'a, Arena<'a>> {
        let mut doc = self
            .allocator
            .text("if ")
            .append(self.doc_expression(&conditional.condition))
            .append(self.doc_statements(&conditional.if_body));

        for (condition, body) in conditional.elif_bodies.iter() {
            doc = doc
                .append(self.allocator.hardline())
                .append(self.allocator.text("elif "))
                .append(self.doc_expression(condition))
                .append(self.doc_statements(body));
        }

        if !conditional.else_body.is_empty() {
            doc = doc
                .append(self.allocator.hardline())
                .append(self.allocator.text("else"))
                .append(self.doc_statements(&conditional.else_body));
        }

        doc.append(self.doc_end())
    }

    fn doc_expression(&'a self, expression: &Expression) -> DocBuilder<'a, Arena<'a>> {
        match &expression.node {
            ExpressionNode::Assignment(assignment) => {
                let left = self.doc_expression(&assignment.left);
                let left = match assignment.left.node {
                    ExpressionNode::Assignment(_) => left.parens(),
                    _ => left,
                };

                left.append(self.allocator.text(" = "))
                    .append(self.doc_expression(&assignment.right))
            }

            ExpressionNode::Call(call) => {
                let object = self.doc_expression(&call.object);
                let object = match call.object.node {
                    ExpressionNode::Assignment(_)
                    | ExpressionNode::Integer(_)
                    | ExpressionNode::Real(_) => object.parens(),
                    _ => object,
                };

                let args = self.allocator.intersperse(
                    call.args.iter().map(|arg| self.doc_expression(arg)),
                    self.allocator.text(", "),
                );

                object
                    .append(self.allocator.text(format!(".{}", call.name)))
                    .append(args.parens())
            }

            ExpressionNode::Identifier(name) => self.allocator.text(name.clone()),
            ExpressionNode::Integer(value) => self.allocator.text(value.to_string()),
            ExpressionNode::Real(value) => self.allocator.text(format!("{value:?}")),
            ExpressionNode::String(value) => {
                self.allocator
                    .text(format!("\"{}\"", escape(value.chars(), '"')))
            }
            ExpressionNode::Character(value) => self
                .allocator
                .text(format!("'{}'", escape(Some(*value), '\''))),
            ExpressionNode::Bool(value) => self.allocator.text(value.to_string()),
        }
    }
}

impl Default for Prettier<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write out `text` using the escapes the lexer understands.
fn escape(text: impl IntoIterator<Item = char>, quote: char) -> String {
    let mut escaped = String::new();

    for c in text {
        match c {
            '\x07' => escaped.push_str("\\a"),
            '\x08' => escaped.push_str("\\b"),
            '\x0c' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x0b' => escaped.push_str("\\v"),
            '\\' => escaped.push_str("\\\\"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }

    escaped
}
