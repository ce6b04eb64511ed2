use bucket_common::message::{Error, ErrorKind};
use bucket_common::source::{Position, SourceFile, Span};

use super::parse;
use crate::ast::{
    Class, Expression, ExpressionNode, GlobalStatement, Method, StatementNode, MODULE_NAME,
};

fn parse_source(source: &str) -> Result<Class, Error> {
    parse(&SourceFile::new("test", source))
}

/// Render an expression as an s-expression, with calls written as
/// `(name receiver args...)`.
fn shape(expression: &Expression) -> String {
    match &expression.node {
        ExpressionNode::Assignment(assignment) => {
            format!("(= {} {})", shape(&assignment.left), shape(&assignment.right))
        }
        ExpressionNode::Call(call) => {
            let mut result = format!("({} {}", call.name, shape(&call.object));
            for arg in call.args.iter() {
                result.push(' ');
                result.push_str(&shape(arg));
            }
            result.push(')');
            result
        }
        ExpressionNode::Identifier(name) => name.clone(),
        ExpressionNode::Integer(value) => value.to_string(),
        ExpressionNode::Real(value) => format!("{value:?}"),
        ExpressionNode::String(value) => format!("{value:?}"),
        ExpressionNode::Character(value) => format!("{value:?}"),
        ExpressionNode::Bool(value) => value.to_string(),
    }
}

fn only_method(program: &Class) -> &Method {
    match &program.body[..] {
        [GlobalStatement::Method(method)] => method,
        other => panic!("expected a single method, got {other:?}"),
    }
}

/// Check that `source`, as the only statement of a method, parses to an
/// expression of the given shape.
fn check(source: &str, expected: &str) {
    let program = parse_source(&format!("method test\n  {source}\nend\n")).unwrap();
    let method = only_method(&program);

    match &method.body[..] {
        [statement] => match &statement.node {
            StatementNode::Expression(expression) => assert_eq!(expected, shape(expression)),
            other => panic!("expected an expression statement, got {other:?}"),
        },
        other => panic!("expected a single statement, got {other:?}"),
    }
}

/// Check that parsing fails with a syntax error with the given message at the
/// given position.
fn check_error(source: &str, message: &str, at: Position) {
    let error = parse_source(source).unwrap_err();

    assert_eq!(ErrorKind::Syntax, error.kind());
    assert_eq!("EP00", error.code());
    assert_eq!(message, error.message());
    assert_eq!(Some(at), error.position());
}

#[test]
fn parse_addition() {
    check("a + b", "(__add__ a b)");
}

#[test]
fn parse_additive_is_left_associative() {
    check("a - b - c", "(__sub__ (__sub__ a b) c)");
    check("a + b - c + d", "(__add__ (__sub__ (__add__ a b) c) d)");
}

#[test]
fn parse_multiplicative_is_left_associative() {
    check("a * b / c % d", "(__mod__ (__div__ (__mul__ a b) c) d)");
}

#[test]
fn parse_precedence() {
    check("1 + 2 * 3", "(__add__ 1 (__mul__ 2 3))");
    check("(1 + 2) * 3", "(__mul__ (__add__ 1 2) 3)");
    check(
        "a < b + 1 == c and d or e",
        "(__or__ (__and__ (__eq__ (__lt__ a (__add__ b 1)) c) d) e)",
    );
}

#[test]
fn parse_exponent_is_right_associative() {
    check("2 ^ 3 ^ 2", "(__pow__ 2 (__pow__ 3 2))");
    check("a * b ^ c", "(__mul__ a (__pow__ b c))");
}

#[test]
fn parse_logic_is_right_associative() {
    check("a or b or c", "(__or__ a (__or__ b c))");
    check("a and b and c", "(__and__ a (__and__ b c))");
    check("a and b or c and d", "(__or__ (__and__ a b) (__and__ c d))");
}

#[test]
fn parse_comparisons() {
    check("a != b", "(__ne__ a b)");
    check("a >= b", "(__ge__ a b)");
    check("a > b", "(__gt__ a b)");
    check("a <= b", "(__le__ a b)");
    check("a < b == c > d", "(__eq__ (__lt__ a b) (__gt__ c d))");
}

#[test]
fn parse_comparisons_do_not_chain() {
    check_error(
        "method m\n  a == b == c\nend\n",
        "expected newline, found symbol '=='",
        Position::new(2, 10),
    );
    check_error(
        "method m\n  a < b < c\nend\n",
        "expected newline, found symbol '<'",
        Position::new(2, 9),
    );
}

#[test]
fn parse_unary_operators() {
    check("-a", "(__neg__ a)");
    check("+a * b", "(__mul__ (__pos__ a) b)");
    check("not not a", "(__not__ (__not__ a))");
    check("*&a", "(__dereference__ (__addressof__ a))");
    check("a * *b", "(__mul__ a (__dereference__ b))");
    check("-a ^ b", "(__neg__ (__pow__ a b))");
    check("a ^ -b", "(__pow__ a (__neg__ b))");
}

#[test]
fn parse_assignment_is_right_associative() {
    check("a = b = c + 1", "(= a (= b (__add__ c 1)))");
    check("a.x = f(1)", "(= (x a) (f __self__ 1))");
}

#[test]
fn parse_bare_calls_go_through_self() {
    check("f(x, y)", "(f __self__ x y)");
    check("f()", "(f __self__)");
}

#[test]
fn parse_parenthesized_callee_is_called() {
    check("(f)(x)", "(__call__ f x)");
    check("(f)()", "(__call__ f)");
    check("(f(x))(y)", "(__call__ (f __self__ x) y)");
}

#[test]
fn parse_postfix_chains() {
    check("a.b", "(b a)");
    check("a.b()", "(b a)");
    check("x.y.z(1, 2)", "(z (y x) 1 2)");
    check("a.b(1)(2)[3, 4]", "(__index__ (__call__ (b a 1) 2) 3 4)");
    check("(a + b)(c)", "(__call__ (__add__ a b) c)");
    check("f(x)()", "(__call__ (f __self__ x))");
    check("-a.b[0]", "(__neg__ (__index__ (b a) 0))");
}

#[test]
fn parse_index_needs_an_argument() {
    check_error(
        "method m\n  a[]\nend\n",
        "expected expression, found symbol ']'",
        Position::new(2, 5),
    );
}

#[test]
fn parse_literals() {
    check("1.5", "1.5");
    check("\"hi\\n\"", "\"hi\\n\"");
    check("'c'", "'c'");
    check("true", "true");
    check("f(false, 12)", "(f __self__ false 12)");
}

#[test]
fn parse_empty_program() {
    let program = parse_source("").unwrap();
    assert_eq!(MODULE_NAME, program.name);
    assert!(program.body.is_empty());

    let program = parse_source("\n\n\n").unwrap();
    assert!(program.body.is_empty());
}

#[test]
fn parse_class_with_field() {
    let program = parse_source("class Foo\n  x : Int\nend\n").unwrap();

    let [GlobalStatement::Class(class)] = &program.body[..] else {
        panic!("expected a single class");
    };

    assert_eq!("Foo", class.name);
    assert_eq!(Span::new(Position::new(1, 1), Position::new(3, 4)), class.span);

    let [GlobalStatement::Field(field)] = &class.body[..] else {
        panic!("expected a single field");
    };

    assert_eq!("x", field.name);
    assert_eq!(Some("Int"), field.class.as_identifier());
    assert_eq!(Span::new(Position::new(2, 3), Position::new(2, 10)), field.span);
}

#[test]
fn parse_nested_classes_and_blank_lines() {
    let source = "\nclass A\n\n  class B\n    y: A\n  end\n\n  z: B\nend\nw: A\n";
    let program = parse_source(source).unwrap();

    let names: Vec<_> = program.body.iter().map(GlobalStatement::name).collect();
    assert_eq!(vec!["A", "w"], names);

    let GlobalStatement::Class(a) = &program.body[0] else {
        panic!("expected a class");
    };

    let names: Vec<_> = a.body.iter().map(GlobalStatement::name).collect();
    assert_eq!(vec!["B", "z"], names);
}

#[test]
fn parse_block_end_at_end_of_file() {
    assert!(parse_source("class A\nend").is_ok());
    assert!(parse_source("method m\nend").is_ok());
}

#[test]
fn parse_method_header() {
    let program = parse_source("method add(a: Int, b: Int): Int\n  ret a + b\nend\n").unwrap();
    let method = only_method(&program);

    assert_eq!("add", method.name);

    let arguments: Vec<_> = method
        .arguments
        .iter()
        .map(|arg| (arg.name.as_str(), arg.class.as_identifier()))
        .collect();
    assert_eq!(vec![("a", Some("Int")), ("b", Some("Int"))], arguments);

    assert_eq!(
        Some("Int"),
        method.return_class.as_ref().and_then(Expression::as_identifier)
    );

    match &method.body[..] {
        [statement] => match &statement.node {
            StatementNode::Ret(Some(value)) => assert_eq!("(__add__ a b)", shape(value)),
            other => panic!("expected a return, got {other:?}"),
        },
        other => panic!("expected a single statement, got {other:?}"),
    }
}

#[test]
fn parse_method_without_arguments() {
    for source in ["method m\nend\n", "method m()\nend\n"] {
        let program = parse_source(source).unwrap();
        let method = only_method(&program);

        assert!(method.arguments.is_empty());
        assert!(method.return_class.is_none());
        assert!(method.body.is_empty());
    }
}

#[test]
fn parse_method_header_types_are_postfix_expressions() {
    let program = parse_source("method f(a: x.y): z[1]
end
").unwrap();
    let method = only_method(&program);
    assert_eq!("(y x)", shape(&method.arguments[0].class));
    assert_eq!(Some("(__index__ z 1)".to_string()), method.return_class.as_ref().map(shape));

    check_error(
        "method f(a: x = y)\nend\n",
        "expected symbol ')', found symbol '='",
        Position::new(1, 15),
    );
    check_error(
        "method f(): a + b\nend\n",
        "expected newline, found symbol '+'",
        Position::new(1, 15),
    );
}

#[test]
fn parse_statements() {
    let source = "method m\n  do\n    break\n\n    cycle\n  end\n  ret\n  ret 1\nend\n";
    let program = parse_source(source).unwrap();
    let method = only_method(&program);

    let [loop_statement, ret, ret_value] = &method.body[..] else {
        panic!("expected three statements");
    };

    let StatementNode::Loop(repeat) = &loop_statement.node else {
        panic!("expected a loop");
    };

    assert_eq!(StatementNode::Break, repeat.body[0].node);
    assert_eq!(StatementNode::Cycle, repeat.body[1].node);
    assert_eq!(StatementNode::Ret(None), ret.node);
    assert!(matches!(ret_value.node, StatementNode::Ret(Some(_))));
}

#[test]
fn parse_if_chain() {
    let source = "method m\n  if a\n    b\n  elif c\n    d\n  elif e\n  else\n    f\n  end\nend\n";
    let program = parse_source(source).unwrap();
    let method = only_method(&program);

    let StatementNode::If(conditional) = &method.body[0].node else {
        panic!("expected an if");
    };

    assert_eq!("a", shape(&conditional.condition));
    assert_eq!(1, conditional.if_body.len());

    let elifs: Vec<_> = conditional
        .elif_bodies
        .iter()
        .map(|(condition, body)| (shape(condition), body.len()))
        .collect();
    assert_eq!(vec![("c".to_string(), 1), ("e".to_string(), 0)], elifs);

    assert_eq!(1, conditional.else_body.len());
    assert_eq!(
        Span::new(Position::new(2, 3), Position::new(9, 6)),
        method.body[0].span
    );
}

#[test]
fn parse_if_without_else() {
    let program = parse_source("method m\n  if a\n  end\nend\n").unwrap();
    let method = only_method(&program);

    let StatementNode::If(conditional) = &method.body[0].node else {
        panic!("expected an if");
    };

    assert!(conditional.if_body.is_empty());
    assert!(conditional.elif_bodies.is_empty());
    assert!(conditional.else_body.is_empty());
}

#[test]
fn parse_loop_end_needs_newline() {
    check_error(
        "method m\n  do\n  end",
        "expected newline, found end of file",
        Position::new(3, 6),
    );
}

#[test]
fn parse_errors() {
    check_error(
        "1\n",
        "expected global statement, newline or end of file, found integer 1",
        Position::new(1, 1),
    );
    check_error(
        "class Foo\n  x: Int\n",
        "expected global statement or 'end', found end of file",
        Position::new(3, 1),
    );
    check_error(
        "method m\n  a\n",
        "expected keyword 'end', found end of file",
        Position::new(3, 1),
    );
    check_error(
        "class 12\nend\n",
        "expected class name, found integer 12",
        Position::new(1, 7),
    );
    check_error("x Int\n", "expected symbol ':', found identifier 'Int'", Position::new(1, 3));
    check_error(
        "method m(a: Int\nend\n",
        "expected symbol ')', found newline",
        Position::new(1, 16),
    );
    check_error(
        "method m\n  else\nend\n",
        "expected keyword 'end', found keyword 'else'",
        Position::new(2, 3),
    );
    check_error(
        "x: Int end\n",
        "expected newline, found keyword 'end'",
        Position::new(1, 8),
    );
}

#[test]
fn parse_passes_on_lexical_errors() {
    let error = parse_source("x: \"Int\n").unwrap_err();
    assert_eq!(ErrorKind::Lexical, error.kind());
}
