//! Function call evaluation methods for the Interpreter.

use smallvec::SmallVec;

use super::Interpreter;
use crate::errors::{redeclaration, wrong_arg_count};
use crate::{EvalResult, FunctionValue, Value};

impl Interpreter<'_> {
    /// Call a closure with already-evaluated arguments.
    ///
    /// The activation frame is a child of the frame the closure captured,
    /// not of the caller's frame.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = func.arity()))]
    pub(super) fn eval_call(
        &mut self,
        func: &FunctionValue,
        args: SmallVec<[Value; 4]>,
    ) -> EvalResult {
        if args.len() != func.arity() {
            return Err(wrong_arg_count(func.arity(), args.len()));
        }

        let call_env = func.env().child();
        for (&param, arg) in func.params().iter().zip(args) {
            call_env
                .create_var(param, arg)
                .map_err(|err| redeclaration(self.interner.lookup(err.name)))?;
        }

        let mut call_interpreter =
            self.create_function_interpreter(func.arena().clone(), call_env);
        call_interpreter.eval(func.body()).inspect_err(|err| {
            tracing::debug!(%err, "call failed");
        })
    }
}
