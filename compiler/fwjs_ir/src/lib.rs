//! FWJS IR - expression trees for the FWJS evaluator.
//!
//! This crate contains the data structures the evaluator consumes:
//! - Names for interned identifiers
//! - Binary operator tags
//! - A flat expression arena (`ExprArena`) addressed by `ExprId`
//! - `AstBuilder`, the construction API a parse-tree walker targets
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`, compared in O(1)
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId` indices
//! - **Immutable Once Built**: an arena is frozen into a `SharedArena` before
//!   evaluation, so the same node can be evaluated any number of times

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod name;

pub use arena::{ExprArena, SharedArena};
pub use ast::{BinaryOp, ExprKind, Literal, ParamRange};
pub use builder::AstBuilder;
pub use expr_id::{ExprId, ExprRange};
pub use interner::{StringInterner, StringLookup};
pub use name::Name;
