use c0_frontend::ast::{Fun, Local, Node, Op};
use c0_frontend::fmt::{render_node, render_type, AstPrinter, Buf, FmtConfig};
use c0_frontend::types::{StructType, Type};
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn render(node: &Node, depth: u32) -> String {
    let mut buf = Buf::new();
    render_node(&mut buf, node, depth).unwrap();
    buf.into_string()
}

fn render_with(config: FmtConfig, node: &Node, depth: u32) -> String {
    let mut buf = Buf::new();
    AstPrinter::new(config).render(&mut buf, node, depth).unwrap();
    buf.into_string()
}

fn ab_struct() -> Type {
    Type::Struct(StructType {
        name: None,
        fields: vec![Local::new("a", Rc::new(Type::I32)), Local::new("b", Rc::new(Type::Bool))],
    })
}

fn sample_fun() -> Node {
    let int = Rc::new(Type::Int);
    let body = Node::Block(vec![
        Node::Var(Local::new("total", Rc::clone(&int)).with_init(Node::int(0, None))),
        Node::For {
            start: Some(Box::new(Node::Var(Local::new("i", Rc::clone(&int)).with_init(Node::int(0, None))))),
            cond: Some(Box::new(Node::binop(Op::Lt, Node::id("i"), Node::id("n")))),
            end: Some(Box::new(Node::PostfixOp { op: Op::Inc, expr: Box::new(Node::id("i")) })),
            body: Box::new(Node::Block(vec![Node::assign(Op::AddAssign, Node::id("total"), Node::id("i"))])),
        },
        Node::Return(Some(Box::new(Node::id("total")))),
    ]);
    Node::Fun(Rc::new(Fun::new("sum", vec![Local::new("n", Rc::clone(&int))], int).with_body(body)))
}

#[test]
fn test_let_binding_scenario() {
    let node = Node::Let(Local::new("x", Rc::new(Type::I32)).with_init(Node::int(3, None)));
    for depth in 2..6 {
        assert_eq!(render(&node, depth), "let x i32 = 3");
    }
}

#[test]
fn test_anonymous_struct_scenario() {
    let mut buf = Buf::new();
    render_type(&mut buf, &ab_struct(), 2).unwrap();
    assert_eq!(buf.as_str(), "{\n  a i32\n  b bool\n}");

    let mut buf = Buf::new();
    render_type(&mut buf, &ab_struct(), 1).unwrap();
    assert_eq!(buf.as_str(), "struct");
}

#[test]
fn test_if_else_scenario() {
    let node = Node::If {
        cond: Box::new(Node::binop(Op::Lt, Node::id("x"), Node::int(3, None))),
        then: Box::new(Node::Block(vec![Node::Return(Some(Box::new(Node::id("a"))))])),
        els: Some(Box::new(Node::Block(vec![Node::Return(Some(Box::new(Node::id("b"))))]))),
    };
    assert_eq!(render(&node, 2), "if x < 3 {\n  return a\n} else {\n  return b\n}");
    assert_eq!(render(&node, 1), "if x < 3 {...} else {...}");
}

#[test]
fn test_rendering_is_idempotent() {
    let node = sample_fun();
    for depth in 1..6 {
        assert_eq!(render(&node, depth), render(&node, depth));
    }
}

#[test]
fn test_deeper_renders_only_expand_placeholders() {
    let node = sample_fun();
    let d1 = render(&node, 1);
    let d2 = render(&node, 2);
    let d3 = render(&node, 3);
    let d4 = render(&node, 4);

    assert_eq!(d1, "fun sum(n int) int {...}");
    assert_eq!(d2, "fun sum(n int) int {\n  var total int\n  for\n  return total\n}");
    assert_eq!(
        d3,
        "fun sum(n int) int {\n  var total int = 0\n  for var i int; i < n; var i int {...}\n  return total\n}"
    );
    assert_eq!(
        d4,
        "fun sum(n int) int {\n  var total int = 0\n  for var i int = 0; i < n; var i int = 0 {\n    total += i\n  }\n  return total\n}"
    );

    // Past the tree height the output no longer changes
    assert_eq!(render(&node, 5), d4);
    assert_eq!(render(&node, 50), d4);

    // Collapsing the loop body and initializers of d4 gives back d3
    let collapsed = d4
        .replace(" = 0", "")
        .replacen("var total int", "var total int = 0", 1)
        .replace("{\n    total += i\n  }", "{...}");
    assert_eq!(collapsed, d3);
}

#[test]
fn test_output_independent_of_initial_guess() {
    let node = sample_fun();
    let expected = render(&node, 4);
    for guess in [1, 2, 7, 16, 63, 64, 65, 128, 4096] {
        let config = FmtConfig::default().with_initial_guess(guess);
        assert_eq!(render_with(config, &node, 4), expected, "initial guess {guess}");
    }
}

#[test]
fn test_small_guess_keeps_existing_prefix() {
    let mut buf = Buf::new();
    buf.push_str("prefix|").unwrap();
    AstPrinter::new(FmtConfig::default().with_initial_guess(1))
        .render(&mut buf, &sample_fun(), 2)
        .unwrap();
    assert_eq!(
        buf.as_str(),
        "prefix|fun sum(n int) int {\n  var total int\n  for\n  return total\n}"
    );
}

#[test]
fn test_integer_literals_round_trip() {
    let u64_t = Rc::new(Type::U64);
    let i64_t = Rc::new(Type::I64);
    for value in [0u64, 1, 9, 10, 15, 16, 255, 256, 0xdead_beef, u32::MAX as u64, u64::MAX] {
        let hex = render(&Node::int(value, Some(Rc::clone(&u64_t))), 1);
        let digits = hex.strip_prefix("0x").unwrap();
        assert_eq!(u64::from_str_radix(digits, 16).unwrap(), value);

        let dec = render(&Node::int(value, Some(Rc::clone(&i64_t))), 1);
        assert_eq!(dec.parse::<u64>().unwrap(), value);
    }
}

#[test]
fn test_float_literals_round_trip() {
    let values = [
        0.0,
        -0.0,
        0.1,
        0.1 + 0.2,
        1.0 / 3.0,
        -2.5,
        1e300,
        1e-300,
        f64::MAX,
        f64::MIN_POSITIVE,
        5e-324,
        123456789.0,
    ];
    for value in values {
        let text = render(&Node::FloatLit(value), 1);
        let back: f64 = text.parse().unwrap();
        assert_eq!(back.to_bits(), value.to_bits(), "{text}");
    }
}

#[test]
fn test_shared_type_rendered_at_every_site() {
    let point = Rc::new(Type::Struct(StructType {
        name: Some("Point".to_string()),
        fields: vec![Local::new("x", Rc::new(Type::F32)), Local::new("y", Rc::new(Type::F32))],
    }));
    let node = Node::Block(vec![
        Node::Let(Local::new("a", Rc::clone(&point))),
        Node::Let(Local::new("b", Rc::clone(&point))),
    ]);
    assert_eq!(render(&node, 2), "{\n  let a Point\n  let b Point\n}");
    assert_eq!(
        render(&node, 3),
        "{\n  let a Point {\n    x f32\n    y f32\n  }\n  let b Point {\n    x f32\n    y f32\n  }\n}"
    );
    assert_eq!(Rc::strong_count(&point), 3);
}

#[test]
fn test_missing_children_render_null() {
    let node = Node::Return(None);
    assert_eq!(render(&node, 2), "return");

    let untyped = Node::Param(Local::untyped("p"));
    assert_eq!(render(&untyped, 2), "p (NULL)");
}
