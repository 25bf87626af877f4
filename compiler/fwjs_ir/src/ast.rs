//! Expression nodes.
//!
//! Every FWJS construct is an expression, including the control-flow forms
//! that JavaScript treats as statements. Children are referenced by
//! [`ExprId`], lists by [`ExprRange`] / [`ParamRange`].

use std::fmt;

use crate::{ExprId, ExprRange, Name};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Gt,
    GtEq,
    Lt,
    LtEq,
    Eq,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Eq => "==",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Literal constants that can appear in source.
///
/// Function values are never literals; they only arise from evaluating a
/// [`ExprKind::Function`] node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Null,
}

/// Range of parameter names in the arena's parameter storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParamRange {
    pub start: u32,
    pub len: u32,
}

impl ParamRange {
    /// Empty parameter list.
    pub const EMPTY: ParamRange = ParamRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ParamRange { start, len }
    }

    /// Get the number of parameters.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Check if the function takes no parameters.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Constant value: `42`, `true`, `null`.
    Literal(Literal),

    /// Variable reference: `x`.
    Ident(Name),

    /// `print(expr)`: writes the value's display text and yields the value.
    Print(ExprId),

    /// Binary operation: `left op right`.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `if (cond) then_branch else else_branch`, with an optional else.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: Option<ExprId>,
    },

    /// `while (cond) body`.
    While { cond: ExprId, body: ExprId },

    /// Two back-to-back expressions: `first; second`.
    Seq { first: ExprId, second: ExprId },

    /// `var name = init`, binding in the current scope.
    VarDecl { name: Name, init: ExprId },

    /// `name = value`, updating the nearest binding.
    Assign { name: Name, value: ExprId },

    /// `function(params) { body }`, evaluating to a closure.
    Function { params: ParamRange, body: ExprId },

    /// `func(args)`.
    Call { func: ExprId, args: ExprRange },
}
