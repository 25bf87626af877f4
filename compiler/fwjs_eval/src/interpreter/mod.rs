//! Tree-walking interpreter for FWJS expression arenas.
//!
//! One `Interpreter` evaluates against one arena and one current frame.
//! Function calls run in a child interpreter that borrows the same interner
//! and print sink but carries the closure's arena and a fresh call frame, so
//! the caller's frame is untouched when the call returns or fails.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use fwjs_ir::{ExprId, ExprKind, SharedArena, StringInterner};
use smallvec::SmallVec;

use crate::errors::{non_boolean_condition, not_callable, redeclaration};
use crate::{
    ensure_sufficient_stack, evaluate_binary, Environment, EvalError, EvalResult, FunctionValue,
    SharedPrintHandler, Value,
};

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    /// String interner for name lookup.
    pub(crate) interner: &'a StringInterner,
    /// Arena that expression ids index into.
    pub(crate) arena: SharedArena,
    /// Current frame.
    pub(crate) env: Environment,
    /// Sink for `print`.
    pub(crate) print_handler: SharedPrintHandler,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with a fresh global environment printing to stdout.
    pub fn new(interner: &'a StringInterner, arena: SharedArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Create an interpreter builder for more configuration options.
    pub fn builder(interner: &'a StringInterner, arena: SharedArena) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner, arena)
    }

    /// Evaluate a whole program.
    ///
    /// `None` is a program with no statements and evaluates to `null`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_program(&mut self, root: Option<ExprId>) -> EvalResult {
        let Some(root) = root else {
            return Ok(Value::Null);
        };
        self.eval(root).inspect_err(|err| {
            tracing::debug!(%err, "program evaluation failed");
        })
    }

    /// Evaluate an expression.
    pub fn eval(&mut self, expr_id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr_id))
    }

    /// Environment the interpreter evaluates in; the global one for a
    /// top-level interpreter.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Debug rendering of the environment chain.
    pub fn env_dump(&self) -> String {
        self.env.display(self.interner).to_string()
    }

    /// Captured `print` output; empty unless a buffer handler is installed.
    pub fn output(&self) -> String {
        self.print_handler.output()
    }

    fn eval_inner(&mut self, expr_id: ExprId) -> EvalResult {
        let kind = *self.arena.get_expr(expr_id);
        match kind {
            ExprKind::Literal(lit) => Ok(Value::from(lit)),
            ExprKind::Ident(name) => Ok(self.env.resolve_var(name)),
            ExprKind::Print(operand) => {
                let value = self.eval(operand)?;
                self.print_handler.print_value(&value);
                Ok(value)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(&left, &right, op)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond, "if")? {
                    self.eval(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval(else_branch)
                } else {
                    Ok(Value::Null)
                }
            }
            ExprKind::While { cond, body } => {
                while self.eval_condition(cond, "while")? {
                    self.eval(body)?;
                }
                Ok(Value::Null)
            }
            ExprKind::Seq { first, second } => {
                let first = self.eval(first)?;
                let second = self.eval(second)?;
                Ok(if second.is_null() { first } else { second })
            }
            ExprKind::VarDecl { name, init } => {
                let value = self.eval(init)?;
                self.env
                    .create_var(name, value.clone())
                    .map_err(|err| redeclaration(self.interner.lookup(err.name)))?;
                Ok(value)
            }
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env.update_var(name, value.clone());
                Ok(value)
            }
            ExprKind::Function { params, body } => Ok(Value::function(FunctionValue::new(
                params,
                body,
                self.arena.clone(),
                self.env.clone(),
            ))),
            ExprKind::Call { func, args } => {
                let callee = self.eval(func)?;
                let f = match callee {
                    Value::Function(f) => f,
                    other => return Err(not_callable(other.type_name())),
                };
                let arena = self.arena.clone();
                let args = arena
                    .get_expr_list(args)
                    .iter()
                    .map(|&arg| self.eval(arg))
                    .collect::<Result<SmallVec<[Value; 4]>, EvalError>>()?;
                self.eval_call(&f, args)
            }
        }
    }

    /// Evaluate a loop or branch condition, which must be a bool.
    fn eval_condition(
        &mut self,
        cond: ExprId,
        construct: &'static str,
    ) -> Result<bool, EvalError> {
        let value = self.eval(cond)?;
        value
            .as_bool()
            .ok_or_else(|| non_boolean_condition(construct, value.type_name()))
    }

    /// Interpreter for one function activation.
    fn create_function_interpreter(&self, arena: SharedArena, call_env: Environment) -> Self {
        Interpreter {
            interner: self.interner,
            arena,
            env: call_env,
            print_handler: self.print_handler.clone(),
        }
    }
}
