//! Expression tree construction.
//!
//! `AstBuilder` is the output contract of a parse-tree walker: one
//! constructor per node kind, with identifiers given as text and interned
//! on the way in. Once the tree is complete, [`AstBuilder::finish`] freezes
//! the arena for evaluation.

use crate::{
    BinaryOp, ExprArena, ExprId, ExprKind, Literal, SharedArena, StringInterner,
};

/// Builds expression trees into an [`ExprArena`].
pub struct AstBuilder<'a> {
    interner: &'a StringInterner,
    arena: ExprArena,
}

impl<'a> AstBuilder<'a> {
    /// Create a builder that interns names into `interner`.
    pub fn new(interner: &'a StringInterner) -> Self {
        AstBuilder {
            interner,
            arena: ExprArena::new(),
        }
    }

    /// The arena built so far.
    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// Freeze the arena for evaluation.
    pub fn finish(self) -> SharedArena {
        SharedArena::new(self.arena)
    }

    // Literals

    pub fn int(&mut self, value: i64) -> ExprId {
        self.arena.alloc_expr(ExprKind::Literal(Literal::Int(value)))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.arena.alloc_expr(ExprKind::Literal(Literal::Bool(value)))
    }

    pub fn null(&mut self) -> ExprId {
        self.arena.alloc_expr(ExprKind::Literal(Literal::Null))
    }

    // Variables

    pub fn ident(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.alloc_expr(ExprKind::Ident(name))
    }

    pub fn var_decl(&mut self, name: &str, init: ExprId) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.alloc_expr(ExprKind::VarDecl { name, init })
    }

    pub fn assign(&mut self, name: &str, value: ExprId) -> ExprId {
        let name = self.interner.intern(name);
        self.arena.alloc_expr(ExprKind::Assign { name, value })
    }

    // Operators and control flow

    pub fn print(&mut self, operand: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Print(operand))
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Binary { op, left, right })
    }

    pub fn if_then(&mut self, cond: ExprId, then_branch: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::If {
            cond,
            then_branch,
            else_branch: None,
        })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::If {
            cond,
            then_branch,
            else_branch: Some(else_branch),
        })
    }

    pub fn while_loop(&mut self, cond: ExprId, body: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::While { cond, body })
    }

    pub fn seq(&mut self, first: ExprId, second: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Seq { first, second })
    }

    /// Fold a statement list into left-nested sequence nodes.
    ///
    /// `[a, b, c]` becomes `Seq(Seq(a, b), c)`; a single statement is returned
    /// as-is, and an empty list (an empty program or block) yields `None`.
    pub fn seq_all(&mut self, stmts: impl IntoIterator<Item = ExprId>) -> Option<ExprId> {
        let mut stmts = stmts.into_iter();
        let first = stmts.next()?;
        Some(stmts.fold(first, |acc, next| self.seq(acc, next)))
    }

    // Functions

    /// `function(params) { body }`. Parameter names must be distinct.
    pub fn function(&mut self, params: &[&str], body: ExprId) -> ExprId {
        let names: Vec<_> = params.iter().map(|p| self.interner.intern(p)).collect();
        let params = self.arena.alloc_params(names);
        self.arena.alloc_expr(ExprKind::Function { params, body })
    }

    pub fn call(&mut self, func: ExprId, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        self.arena.alloc_expr(ExprKind::Call { func, args })
    }
}
