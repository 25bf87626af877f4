//! Error types and constructors for the evaluator.
//!
//! `EvalErrorKind` provides typed error categories; the factory functions
//! below are the only way the evaluator builds errors, and they populate
//! both `kind` and `message`.
//!
//! Every error is fatal: it aborts the current evaluation and propagates to
//! the caller of `Interpreter::eval`. Reading an unbound variable is not an
//! error (it yields `null`), so there is no "undefined variable" kind.

use std::fmt;

use fwjs_ir::BinaryOp;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,

    // Type
    #[error("operator `{op}` cannot be applied to `{left}` and `{right}`")]
    TypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("{construct} condition must be bool, got {got}")]
    NonBooleanCondition {
        construct: &'static str,
        got: &'static str,
    },

    // Scope
    #[error("variable `{name}` is already declared in this scope")]
    Redeclaration { name: String },

    // Function
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },
    #[error("expected {expected} {}, got {got}", arguments(.expected))]
    ArityMismatch { expected: usize, got: usize },
}

fn arguments(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl EvalErrorKind {
    /// Failure class a host reports to the user.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::DivisionByZero | Self::ModuloByZero => "ArithmeticError",
            Self::TypeMismatch { .. } => "TypeError",
            Self::NonBooleanCondition { .. } => "ConditionTypeError",
            Self::Redeclaration { .. } => "RedeclarationError",
            Self::NotCallable { .. } => "NotCallableError",
            Self::ArityMismatch { .. } => "ArityError",
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.category(), self.message)
    }
}

impl std::error::Error for EvalError {}

// Binary operation errors

pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

pub fn binary_type_mismatch(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { op, left, right })
}

// Control flow errors

pub fn non_boolean_condition(construct: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition { construct, got })
}

// Variable errors

pub fn redeclaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Redeclaration {
        name: name.to_owned(),
    })
}

// Function errors

pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}
