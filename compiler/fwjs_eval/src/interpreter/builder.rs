//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use fwjs_ir::{SharedArena, StringInterner};

use super::Interpreter;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Without further configuration the interpreter starts from a fresh global
/// environment and prints to stdout.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: SharedArena,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            print_handler: None,
        }
    }

    /// Set the initial environment.
    ///
    /// Passing an environment from an earlier run continues with its
    /// bindings, as a REPL would.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` output goes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
