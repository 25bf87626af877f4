//! Runtime values for the FWJS interpreter.
//!
//! The variant set is closed: integers, booleans, `null`, and closures.
//! Closures are reference-counted so that copying a function value shares
//! the same instantiation; `==` on functions compares that identity.

use std::fmt;
use std::rc::Rc;

use fwjs_ir::{ExprId, Literal, Name, ParamRange, SharedArena};

use crate::Environment;

/// Display text of the `null` value.
const NULL_TEXT: &str = "null";

/// Opaque display marker for closures; the body is never rendered.
const FUNCTION_TEXT: &str = "function";

/// Runtime value in the FWJS interpreter.
#[derive(Clone)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// Absent value; also the result of reading an unbound variable.
    Null,
    /// Function value (closure).
    Function(Rc<FunctionValue>),
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a boolean value.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Wrap a closure as a value.
    #[inline]
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(Rc::new(func))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Function(_) => "function",
        }
    }

    /// Text written by `print`.
    pub fn display_value(&self) -> String {
        self.to_string()
    }

    /// Equality as seen by the `==` operator.
    ///
    /// Structural for scalars, identity for closures, and never true across
    /// variants (`true == 1` is `false`).
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        match lit {
            Literal::Int(n) => Value::Int(n),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Null => Value::Null,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str(NULL_TEXT),
            Value::Function(_) => f.write_str(FUNCTION_TEXT),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => f.write_str("Null"),
            Value::Function(func) => write!(f, "{func:?}"),
        }
    }
}

/// Function value (closure).
///
/// # Shared Captures
/// The captured environment is the frame that was current when the function
/// expression was evaluated, held by reference. Writes to that frame after
/// the closure was created are visible when it runs.
///
/// # Arena Threading
/// `body` indexes into `arena`, which the closure keeps alive; a call
/// evaluates the body against the closure's arena, not the caller's.
pub struct FunctionValue {
    params: ParamRange,
    body: ExprId,
    arena: SharedArena,
    env: Environment,
}

impl FunctionValue {
    /// Create a closure over `env`.
    pub fn new(params: ParamRange, body: ExprId, arena: SharedArena, env: Environment) -> Self {
        FunctionValue {
            params,
            body,
            arena,
            env,
        }
    }

    /// Parameter names, in declaration order.
    pub fn params(&self) -> &[Name] {
        self.arena.get_params(self.params)
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The unevaluated body expression.
    pub fn body(&self) -> ExprId {
        self.body
    }

    /// Arena that `body` indexes into.
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    /// Frame captured at declaration time.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

// Captured frames can contain this closure, so Debug stays shallow.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("arity", &self.arity())
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
