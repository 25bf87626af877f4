//! Arena allocation for the flat expression tree.
//!
//! - Contiguous storage for all expressions
//! - Child references use `ExprId` indices
//! - Argument and parameter lists are flattened into side tables

use std::fmt;
use std::rc::Rc;

use crate::{ExprId, ExprKind, ExprRange, Name, ParamRange};

/// Contiguous storage for all expressions of a program.
#[derive(Clone, Default)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<ExprKind>,

    /// Flattened expression lists (call arguments).
    expr_lists: Vec<ExprId>,

    /// Flattened parameter lists (function declarations).
    params: Vec<Name>,
}

/// Convert a table length into a `u32` index.
///
/// # Panics
/// Panics if a table grows past `u32::MAX` entries.
#[inline]
fn to_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("expression arena exceeded {} entries", u32::MAX))
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // Expression allocation

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len()));
        self.exprs.push(kind);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// Number of allocated expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // Expression lists

    /// Allocate a list of expressions, return its range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_index(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        let len = to_index(self.expr_lists.len()) - start;
        ExprRange::new(start, len)
    }

    /// Get expression list by range.
    ///
    /// # Panics
    /// Panics if the range lies outside the list storage.
    #[inline]
    #[track_caller]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    // Parameter lists

    /// Allocate a parameter list, return its range.
    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = to_index(self.params.len());
        self.params.extend(params);
        let len = to_index(self.params.len()) - start;
        ParamRange::new(start, len)
    }

    /// Get parameter names by range.
    ///
    /// # Panics
    /// Panics if the range lies outside the parameter storage.
    #[inline]
    #[track_caller]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        let start = range.start as usize;
        &self.params[start..start + range.len()]
    }
}

impl fmt::Debug for ExprArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprArena")
            .field("exprs", &self.exprs.len())
            .field("expr_lists", &self.expr_lists.len())
            .field("params", &self.params.len())
            .finish()
    }
}

/// Frozen, shared expression arena.
///
/// The interpreter and every closure it creates hold a `SharedArena`, so a
/// closure's body id stays valid for as long as the closure is alive.
/// Evaluation is single-threaded, so the handle is reference-counted with `Rc`.
#[derive(Clone)]
pub struct SharedArena(Rc<ExprArena>);

impl SharedArena {
    /// Freeze an arena for sharing.
    pub fn new(arena: ExprArena) -> Self {
        SharedArena(Rc::new(arena))
    }

    /// Whether two handles refer to the same arena.
    pub fn ptr_eq(&self, other: &SharedArena) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SharedArena {
    type Target = ExprArena;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedArena({:?})", &*self.0)
    }
}
