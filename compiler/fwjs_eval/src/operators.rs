//! Binary operator implementations for the evaluator.
//!
//! The operator set is fixed, so dispatch is a direct match on `BinaryOp`.
//! Only `==` accepts operands of any type; everything else needs two ints.

use fwjs_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, division_by_zero, modulo_by_zero};
use crate::{EvalError, EvalResult, Value};

/// Integer division-like operation with a zero guard.
///
/// `on_zero` builds the error when the divisor is zero; otherwise `op` runs.
#[inline]
fn guarded_div(divisor: i64, on_zero: fn() -> EvalError, op: impl FnOnce() -> i64) -> EvalResult {
    if divisor == 0 {
        Err(on_zero())
    } else {
        Ok(Value::Int(op()))
    }
}

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    if op == BinaryOp::Eq {
        return Ok(Value::bool(left.equals(right)));
    }
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        _ => Err(binary_type_mismatch(op, left.type_name(), right.type_name())),
    }
}

/// Binary operations on integers.
///
/// Add, subtract and multiply wrap on overflow. Division and remainder
/// truncate toward zero; `i64::MIN / -1` wraps to `i64::MIN` (remainder 0).
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::Int(a.wrapping_add(b))),
        BinaryOp::Sub => Ok(Value::Int(a.wrapping_sub(b))),
        BinaryOp::Mul => Ok(Value::Int(a.wrapping_mul(b))),
        BinaryOp::Div => guarded_div(b, division_by_zero, || a.wrapping_div(b)),
        BinaryOp::Mod => guarded_div(b, modulo_by_zero, || a.wrapping_rem(b)),
        BinaryOp::Gt => Ok(Value::bool(a > b)),
        BinaryOp::GtEq => Ok(Value::bool(a >= b)),
        BinaryOp::Lt => Ok(Value::bool(a < b)),
        BinaryOp::LtEq => Ok(Value::bool(a <= b)),
        BinaryOp::Eq => Ok(Value::bool(a == b)),
    }
}
