use c0_common::{Input, SourceLocation};
use c0_frontend::ast::{Fun, Local, Op};
use c0_frontend::fmt::{render_unit, Buf};
use c0_frontend::ir::{Block, BlockExit, BlockKind, Function, Unit, Value};
use c0_frontend::types::Type;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn dump(unit: &Unit) -> String {
    let mut buf = Buf::new();
    render_unit(&mut buf, unit).unwrap();
    buf.into_string()
}

fn max_function() -> Function {
    let i32_t = Rc::new(Type::I32);
    let ast = Rc::new(Fun::new(
        "max",
        vec![Local::new("a", Rc::clone(&i32_t)), Local::new("b", Rc::clone(&i32_t))],
        Rc::clone(&i32_t),
    ));
    let mut f = Function::from_ast(ast);

    let mut entry = Block::new(0, BlockExit::If { control: 3, then: 1, els: 2 });
    entry.add_value(Value::arg(1, Rc::clone(&i32_t), 0).with_uses(1));
    entry.add_value(Value::arg(2, Rc::clone(&i32_t), 1).with_uses(1));
    entry.add_value(Value::new(3, Op::Gt, Rc::new(Type::Bool)).with_args(&[1, 2]).with_uses(1));
    f.add_block(entry);

    let mut then = Block::new(1, BlockExit::Ret(Some(1)));
    then.add_pred(0).unwrap();
    f.add_block(then);

    let mut els = Block::new(2, BlockExit::Ret(Some(2)));
    els.add_pred(0).unwrap();
    f.add_block(els);
    f
}

#[test]
fn test_full_function_dump() {
    let mut unit = Unit::new();
    unit.add_function(max_function());
    let expected = [
        "",
        "fun max(a i32, b i32) i32 {",
        "  b0:",
        "    v1  i32  = arg    0         # [1]",
        "    v2  i32  = arg    1         # [1]",
        "    v3  bool = gt     v1  v2    # [1]",
        "  if v3 -> b1 b2",
        "  b1: <- b0",
        "  ret v1",
        "  b2: <- b0",
        "  ret v2",
        "}",
    ]
    .join("\n");
    assert_eq!(dump(&unit), expected);
}

#[test]
fn test_dump_is_idempotent_and_appends() {
    let mut unit = Unit::new();
    unit.add_function(max_function());
    unit.add_function(Function::new("noop"));

    let first = dump(&unit);
    assert_eq!(dump(&unit), first);

    let mut buf = Buf::new();
    buf.push_str("; unit").unwrap();
    render_unit(&mut buf, &unit).unwrap();
    assert_eq!(buf.as_str(), format!("; unit{first}"));
    assert!(first.ends_with("\nfun noop() {\n}"));
}

#[test]
fn test_footer_shapes() {
    let exits = [
        (BlockExit::Cont(Some(9)), BlockKind::Cont, "  cont -> b9"),
        (BlockExit::Cont(None), BlockKind::Cont, "  cont -> ?"),
        (BlockExit::First { control: 1, then: 2, els: 3 }, BlockKind::First, "  first v1 -> b2 b3"),
        (BlockExit::If { control: 4, then: 5, els: 6 }, BlockKind::If, "  if v4 -> b5 b6"),
        (BlockExit::Ret(Some(3)), BlockKind::Ret, "  ret v3"),
        (BlockExit::Ret(None), BlockKind::Ret, "  ret"),
    ];
    for (exit, kind, footer) in exits {
        let block = Block::new(0, exit);
        assert_eq!(block.kind(), kind);

        let mut f = Function::new("f");
        f.add_block(block);
        let mut unit = Unit::new();
        unit.add_function(f);

        let out = dump(&unit);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, ["", "fun f() {", "  b0:", footer, "}"]);
    }
}

#[test]
fn test_payloads_comments_and_locations() {
    let input = Rc::new(Input::create("lib.co"));
    let mut block = Block::new(0, BlockExit::Ret(Some(12)));
    block.add_value(Value::fconst(4, Rc::new(Type::F32), 1e6).with_uses(2).with_comment("big"));
    block.add_value(
        Value::new(5, Op::Call, Rc::new(Type::Ptr(Rc::new(Type::I8))))
            .with_args(&[10, 11, 12])
            .with_comment("long call comment")
            .with_loc(SourceLocation::new(Rc::clone(&input), 12, 3)),
    );
    block.add_value(
        Value::iconst(12, Rc::new(Type::U64), 0xdead_beef)
            .with_uses(3)
            .with_loc(SourceLocation::new_simple(7, 2)),
    );
    block.add_value(Value::iconst(13, Rc::new(Type::U8), 255).with_loc(SourceLocation::new_simple(0, 0)));

    let mut f = Function::new("consts");
    f.add_block(block);
    let mut unit = Unit::new();
    unit.add_function(f);

    let out = dump(&unit);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[3], "    v4  f32  = fconst 1e+06     # [2] big");
    assert_eq!(lines[4], "    v5  *i8  = call   v10 v11 v12 # [0] long call comment  lib.co:12:3");
    assert_eq!(lines[5], "    v12 u64  = iconst 0xdeadbeef # [3]     7:2");
    assert_eq!(lines[6], "    v13 u8   = iconst 0xff      # [0]");
    assert!(!input.is_open());
}

#[test]
fn test_unit_from_json_dump() {
    let json = r#"{
        "functions": [{
            "name": "id",
            "blocks": [{
                "id": 0,
                "exit": {"Ret": 1},
                "values": [{"id": 1, "op": "Arg", "ty": "U16", "aux": {"Index": 0}, "nuse": 1}]
            }]
        }]
    }"#;
    let unit: Unit = serde_json::from_str(json).unwrap();
    assert_eq!(
        dump(&unit),
        "\nfun id() {\n  b0:\n    v1  u16  = arg    0         # [1]\n  ret v1\n}"
    );
}
