use bucket_common::message::{Error, ErrorKind};
use bucket_common::source::{Position, SourceFile};

use super::{Module, Object, ObjectId};
use crate::parse::parse;

fn analyze(source: &str) -> Result<Module, Error> {
    let program = parse(&SourceFile::new("test", source)).unwrap();
    Module::analyze(&program)
}

/// Check that analysis fails with the given semantic error.
fn check_error(source: &str, code: &str, message: &str, at: Position) {
    let error = analyze(source).unwrap_err();

    assert_eq!(ErrorKind::Semantic, error.kind());
    assert_eq!(code, error.code());
    assert_eq!(message, error.message());
    assert_eq!(Some(at), error.position());
}

fn class_named(module: &Module, scope: ObjectId, name: &str) -> ObjectId {
    let id = module.lookup(scope, name).unwrap();
    assert!(module.get(id).as_class().is_some(), "'{name}' is not a class");
    id
}

#[test]
fn analyze_empty_program() {
    let module = analyze("").unwrap();

    assert_eq!(1, module.len());
    assert_eq!(Module::ROOT, module.root());
    assert_eq!(None, module.get(module.root()).parent());
    assert_eq!("__module__", module.get(module.root()).name());
}

#[test]
fn analyze_declarations() {
    let module = analyze("class Int\nend\nclass Foo\n  x : Int\nend\n").unwrap();

    let int = class_named(&module, module.root(), "Int");
    let foo = class_named(&module, module.root(), "Foo");
    let x = module.lookup(foo, "x").unwrap();

    let Object::Field(field) = module.get(x) else {
        panic!("expected a field");
    };

    assert_eq!(int, field.class);
    assert_eq!(foo, field.parent);
    assert_eq!(Some(module.root()), module.get(foo).parent());

    let root = module.get(module.root()).as_class().unwrap();
    assert_eq!(2, root.scope.len());
    assert!(module.get(int).as_class().unwrap().scope.is_empty());
    let mut names: Vec<_> = root.scope.iter().map(|(name, _)| name).collect();
    names.sort_unstable();
    assert_eq!(vec!["Foo", "Int"], names);
}

#[test]
fn analyze_methods() {
    let source = "class Int\nend\nmethod add(a: Int, b: Int): Int\nend\nmethod run()\nend\n";
    let module = analyze(source).unwrap();

    let int = class_named(&module, module.root(), "Int");

    let Object::Method(add) = module.get(module.lookup(module.root(), "add").unwrap()) else {
        panic!("expected a method");
    };

    let arguments: Vec<_> = add
        .arguments
        .iter()
        .map(|arg| (arg.name.as_str(), arg.class))
        .collect();
    assert_eq!(vec![("a", int), ("b", int)], arguments);
    assert_eq!(Some(int), add.return_type);

    let Object::Method(run) = module.get(module.lookup(module.root(), "run").unwrap()) else {
        panic!("expected a method");
    };

    assert!(run.arguments.is_empty());
    assert_eq!(None, run.return_type);
}

#[test]
fn analyze_redefinition() {
    check_error(
        "class Int\nend\nclass Foo\n  x : Int\n  x : Int\nend\n",
        "ES00",
        "redefining name 'x'",
        Position::new(5, 3),
    );
    check_error(
        "class A\nend\nmethod A\nend\n",
        "ES00",
        "redefining name 'A'",
        Position::new(3, 1),
    );
}

#[test]
fn analyze_same_name_in_different_scopes() {
    let module = analyze("class A\nend\nclass B\n  A: A\nend\n").unwrap();

    let a = class_named(&module, module.root(), "A");
    let b = class_named(&module, module.root(), "B");

    let field = module.lookup(b, "A").unwrap();
    assert_ne!(a, field);

    let Object::Field(field) = module.get(field) else {
        panic!("expected a field");
    };
    assert_eq!(a, field.class);
}

#[test]
fn analyze_inner_names_shadow_outer_ones() {
    let source = "class T\nend\nclass Outer\n  class T\n  end\n  x: T\nend\ny: T\n";
    let module = analyze(source).unwrap();

    let outer_t = class_named(&module, module.root(), "T");
    let outer = class_named(&module, module.root(), "Outer");
    let inner_t = class_named(&module, outer, "T");
    assert_ne!(outer_t, inner_t);

    let Object::Field(x) = module.get(module.lookup(outer, "x").unwrap()) else {
        panic!("expected a field");
    };
    assert_eq!(inner_t, x.class);

    let Object::Field(y) = module.get(module.lookup(module.root(), "y").unwrap()) else {
        panic!("expected a field");
    };
    assert_eq!(outer_t, y.class);
}

#[test]
fn analyze_sees_earlier_siblings_of_outer_classes() {
    let module = analyze("class A\nend\nclass B\n  class C\n    a: A\n  end\nend\n").unwrap();

    let a = class_named(&module, module.root(), "A");
    let b = class_named(&module, module.root(), "B");
    let c = class_named(&module, b, "C");

    let Object::Field(field) = module.get(module.lookup(c, "a").unwrap()) else {
        panic!("expected a field");
    };
    assert_eq!(a, field.class);
}

#[test]
fn analyze_is_order_sensitive() {
    check_error(
        "class B\n  class C\n    a: A\n  end\nend\nclass A\nend\n",
        "ES01",
        "undefined identifier 'A'",
        Position::new(3, 8),
    );
    check_error(
        "x: Int\nclass Int\nend\n",
        "ES01",
        "undefined identifier 'Int'",
        Position::new(1, 4),
    );
}

#[test]
fn analyze_class_cannot_name_itself() {
    check_error(
        "class Node\n  next: Node\nend\n",
        "ES01",
        "undefined identifier 'Node'",
        Position::new(2, 9),
    );
}

#[test]
fn analyze_not_a_class() {
    check_error(
        "class Int\nend\nx: Int\ny: x\n",
        "ES02",
        "'x' does not name a class",
        Position::new(4, 4),
    );
    check_error(
        "method m\nend\nmethod n(a: m)\nend\n",
        "ES02",
        "'m' does not name a class",
        Position::new(3, 13),
    );
}

#[test]
fn analyze_unsupported_type() {
    check_error(
        "class A\nend\nx: A.b\n",
        "ES03",
        "unsupported type expression",
        Position::new(3, 4),
    );
    check_error(
        "method m: 12\nend\n",
        "ES03",
        "unsupported type expression",
        Position::new(1, 11),
    );
}

#[test]
fn lookup_misses() {
    let module = analyze("class A\n  b: A.c\nend\n");
    assert!(module.is_err());

    let module = analyze("class A\nend\n").unwrap();
    let a = class_named(&module, module.root(), "A");

    assert_eq!(None, module.lookup(a, "missing"));
    assert_eq!(Some(a), module.lookup(a, "A"));
}

#[test]
fn iterate_objects() {
    let module = analyze("class A\n  class B\n  end\nend\nm: A\n").unwrap();

    let names: Vec<_> = module.iter().map(|(_, object)| object.name()).collect();
    assert_eq!(vec!["__module__", "A", "B", "m"], names);
}
