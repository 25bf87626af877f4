#![deny(clippy::arithmetic_side_effects)]
//! FWJS Eval - tree-walking evaluator for FWJS expression trees.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: a handle to the current frame of a reference-counted
//!   scope chain; closures share frames instead of copying them
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `Interpreter`: the recursive evaluator over an `fwjs_ir` arena
//! - `PrintHandler`: where `print` output goes (stdout, buffer, or nowhere)
//!
//! Every failure is an `EvalError` propagated to the caller of
//! `Interpreter::eval`; nothing is caught or recovered internally.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod value;

pub use environment::{EnvDisplay, Environment, LocalScope, RedeclarationError, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::{FunctionValue, Value};

#[cfg(test)]
mod tests;
