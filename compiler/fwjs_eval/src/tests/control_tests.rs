//! Tests for literals, variables, sequencing, branches, loops and `print`.

use fwjs_ir::{BinaryOp, StringInterner};
use pretty_assertions::assert_eq;

use super::run;
use crate::{EvalErrorKind, Interpreter, Value};

#[test]
fn test_var_decl_then_read() {
    // var x = 5; x;
    let interner = StringInterner::new();
    let (interp, result) = run(&interner, |b| {
        let five = b.int(5);
        let decl = b.var_decl("x", five);
        let read = b.ident("x");
        b.seq(decl, read)
    });
    assert_eq!(result.unwrap(), Value::int(5));
    assert_eq!(interp.env_dump(), "{ {x=5} }");
}

#[test]
fn test_unbound_read_is_null() {
    let interner = StringInterner::new();
    let (_, result) = run(&interner, |b| b.ident("nowhere"));
    assert!(result.unwrap().is_null());
}

#[test]
fn test_while_counts_up() {
    // var x = 1; while (x < 5) { x = x + 1; } x;
    let interner = StringInterner::new();
    let (_, result) = run(&interner, |b| {
        let one = b.int(1);
        let decl = b.var_decl("x", one);

        let x = b.ident("x");
        let five = b.int(5);
        let cond = b.binary(BinaryOp::Lt, x, five);
        let x = b.ident("x");
        let one = b.int(1);
        let inc = b.binary(BinaryOp::Add, x, one);
        let body = b.assign("x", inc);
        let lp = b.while_loop(cond, body);

        let read = b.ident("x");
        b.seq_all([decl, lp, read]).unwrap()
    });
    assert_eq!(result.unwrap(), Value::int(5));
}

#[test]
fn test_while_returns_null_and_skips_false_body() {
    let interner = StringInterner::new();
    let (interp, result) = run(&interner, |b| {
        let cond = b.bool(false);
        let one = b.int(1);
        let body = b.print(one);
        b.while_loop(cond, body)
    });
    assert!(result.unwrap().is_null());
    assert_eq!(interp.output(), "");
}

#[test]
fn test_while_condition_must_be_bool() {
    let interner = StringInterner::new();
    let (_, result) = run(&interner, |b| {
        let cond = b.int(1);
        let body = b.null();
        b.while_loop(cond, body)
    });
    let err = result.unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NonBooleanCondition {
            construct: "while",
            got: "int",
        }
    );
    assert_eq!(err.kind.category(), "ConditionTypeError");
}

#[test]
fn test_while_condition_checked_every_iteration() {
    // var flag = true; while (flag) { flag = 7; }
    let interner = StringInterner::new();
    let (_, result) = run(&interner, |b| {
        let t = b.bool(true);
        let decl = b.var_decl("flag", t);
        let cond = b.ident("flag");
        let seven = b.int(7);
        let body = b.assign("flag", seven);
        let lp = b.while_loop(cond, body);
        b.seq(decl, lp)
    });
    let err = result.unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::NonBooleanCondition {
            construct: "while",
            got: "int",
        }
    );
}

#[test]
fn test_if_evaluates_one_branch() {
    let interner = StringInterner::new();
    let (interp, result) = run(&interner, |b| {
        let cond = b.bool(true);
        let one = b.int(1);
        let then_branch = b.print(one);
        let two = b.int(2);
        let else_branch = b.print(two);
        b.if_else(cond, then_branch, else_branch)
    });
    assert_eq!(result.unwrap(), Value::int(1));
    assert_eq!(interp.output(), "1\n");
}

#[test]
fn test_if_without_else_is_null() {
    let interner = StringInterner::new();
    let (_, result) = run(&interner, |b| {
        let cond = b.bool(false);
        let one = b.int(1);
        b.if_then(cond, one)
    });
    assert!(result.unwrap().is_null());
}

#[test]
fn test_if_condition_must_be_bool() {
    let interner = StringInterner::new();
    let (_, result) = run(&interner, |b| {
        let cond = b.null();
        let one = b.int(1);
        b.if_then(cond, one)
    });
    assert_eq!(
        result.unwrap_err().kind,
        EvalErrorKind::NonBooleanCondition {
            construct: "if",
            got: "null",
        }
    );
}

#[test]
fn test_seq_prefers_second_unless_null() {
    let interner = StringInterner::new();
    let (_, result) = run(&interner, |b| {
        let one = b.int(1);
        let two = b.int(2);
        b.seq(one, two)
    });
    assert_eq!(result.unwrap(), Value::int(2));

    let (_, result) = run(&interner, |b| {
        let one = b.int(1);
        let null = b.null();
        b.seq(one, null)
    });
    assert_eq!(result.unwrap(), Value::int(1));
}

#[test]
fn test_print_returns_operand_and_writes_line() {
    let interner = StringInterner::new();
    let (interp, result) = run(&interner, |b| {
        let one = b.int(1);
        let p1 = b.print(one);
        let t = b.bool(true);
        let p2 = b.print(t);
        let null = b.null();
        let p3 = b.print(null);
        b.seq_all([p1, p2, p3]).unwrap()
    });
    // The last print yields null, so the sequence falls back to `true`
    assert_eq!(result.unwrap(), Value::bool(true));
    assert_eq!(interp.output(), "1\ntrue\nnull\n");
}

#[test]
fn test_redeclaration_in_same_scope_fails() {
    let interner = StringInterner::new();
    let (interp, result) = run(&interner, |b| {
        let one = b.int(1);
        let first = b.var_decl("x", one);
        let two = b.int(2);
        let second = b.var_decl("x", two);
        b.seq(first, second)
    });
    let err = result.unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::Redeclaration {
            name: "x".to_owned()
        }
    );
    assert_eq!(err.kind.category(), "RedeclarationError");
    assert_eq!(interp.env_dump(), "{ {x=1} }");
}

#[test]
fn test_assign_returns_value_and_creates_global() {
    let interner = StringInterner::new();
    let (interp, result) = run(&interner, |b| {
        let nine = b.int(9);
        b.assign("g", nine)
    });
    assert_eq!(result.unwrap(), Value::int(9));
    assert_eq!(interp.env_dump(), "{ {g=9} }");
}

#[test]
fn test_eval_program_empty_is_null() {
    let interner = StringInterner::new();
    let mut b = fwjs_ir::AstBuilder::new(&interner);
    let root = b.seq_all([]);
    let mut interp = Interpreter::new(&interner, b.finish());
    assert!(interp.eval_program(root).unwrap().is_null());
    assert_eq!(interp.env_dump(), "{ {} }");
}

#[test]
fn test_env_carries_over_between_programs() {
    let interner = StringInterner::new();

    let mut first = fwjs_ir::AstBuilder::new(&interner);
    let seven = first.int(7);
    let decl = first.var_decl("kept", seven);
    let mut interp = Interpreter::new(&interner, first.finish());
    interp.eval_program(Some(decl)).unwrap();

    let mut second = fwjs_ir::AstBuilder::new(&interner);
    let read = second.ident("kept");
    let mut next = Interpreter::builder(&interner, second.finish())
        .env(interp.env().clone())
        .print_handler(crate::silent_handler())
        .build();
    assert_eq!(next.eval_program(Some(read)).unwrap(), Value::int(7));
}
