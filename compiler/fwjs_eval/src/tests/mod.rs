//! Test suites kept out of the implementation files.
//!
//! `run` builds a program with an `AstBuilder`, evaluates it with output
//! captured in a buffer, and hands back the interpreter for inspection.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod control_tests;

use fwjs_ir::{AstBuilder, ExprId, StringInterner};

use crate::{buffer_handler, EvalResult, Interpreter};

pub(crate) fn run<'a>(
    interner: &'a StringInterner,
    build: impl FnOnce(&mut AstBuilder<'a>) -> ExprId,
) -> (Interpreter<'a>, EvalResult) {
    let mut builder = AstBuilder::new(interner);
    let root = build(&mut builder);
    let mut interpreter = Interpreter::builder(interner, builder.finish())
        .print_handler(buffer_handler())
        .build();
    let result = interpreter.eval(root);
    (interpreter, result)
}
