//! User calls and letrec.

use std::rc::Rc;

use expr_ir::{BindingRange, ExprId, ExprKind, ExprRange, LetrecBinding, Name, Span};
use smallvec::SmallVec;

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable};
use crate::{CallFrame, Environment, EvalResult, Location, Value};

impl Interpreter<'_> {
    /// `letrec (x = init ...) { body }`.
    ///
    /// Every name gets a void cell before any initializer runs, so
    /// initializers can build closures over each other. Each result is then
    /// written back into its cell.
    pub(super) fn eval_letrec(
        &mut self,
        bindings: BindingRange,
        body: ExprId,
        span: Span,
        env: &Environment,
    ) -> EvalResult {
        let arena = self.arena;
        let bindings = arena.get_bindings(bindings);

        let mut locations: SmallVec<[Location; 4]> = SmallVec::with_capacity(bindings.len());
        for _ in bindings {
            let loc = self
                .store
                .allocate(Value::Void)
                .map_err(|e| self.fail(e, span))?;
            locations.push(loc);
        }
        let extended = env.extend_many(
            bindings
                .iter()
                .zip(&locations)
                .map(|(binding, &loc)| (binding.name, loc)),
        );

        let saved = self.stack.replace_current_env(extended.clone());
        let result = self.eval_letrec_body(bindings, &locations, body, &extended);
        self.stack.replace_current_env(saved);
        result
    }

    fn eval_letrec_body(
        &mut self,
        bindings: &[LetrecBinding],
        locations: &[Location],
        body: ExprId,
        env: &Environment,
    ) -> EvalResult {
        for (binding, &loc) in bindings.iter().zip(locations) {
            let value = self.evaluate(binding.init, env)?;
            self.store
                .write(loc, value)
                .map_err(|e| self.fail(e, binding.name_span))?;
        }
        self.evaluate(body, env)
    }

    /// `(callee args...)`.
    pub(super) fn eval_call(
        &mut self,
        callee: ExprId,
        args: ExprRange,
        span: Span,
        env: &Environment,
    ) -> EvalResult {
        let arena = self.arena;
        let closure = match self.evaluate(callee, env)? {
            Value::Closure(closure) => closure,
            other => {
                let err = not_callable(other.type_name());
                return Err(self.fail(err, arena.span(callee)));
            }
        };

        let mark = self.stack.temporaries_len();
        self.stack.push_temporary(Value::Closure(Rc::clone(&closure)));
        let args_mark = self.stack.temporaries_len();
        if let Err(err) = self.eval_args(args, env) {
            self.stack.truncate_temporaries(mark);
            return Err(err);
        }
        let arg_values = self.stack.pop_temporaries(args_mark);
        self.stack.truncate_temporaries(mark);

        let callee_name = match *arena.kind(callee) {
            ExprKind::Var(name) => Some(name),
            _ => None,
        };

        let params = arena.get_names(closure.params);
        if params.len() != arg_values.len() {
            let name = callee_name.map_or_else(
                || "closure".to_string(),
                |name| format!("`{}`", self.interner.lookup(name)),
            );
            let err = arity_mismatch(&name, params.len(), arg_values.len());
            return Err(self.fail(err, span));
        }

        let mut bound: SmallVec<[(Name, Location); 4]> = SmallVec::with_capacity(params.len());
        for (&param, value) in params.iter().zip(arg_values) {
            let loc = self.store.allocate(value).map_err(|e| self.fail(e, span))?;
            bound.push((param, loc));
        }
        let frame_env = closure.env.extend_many(bound);
        let frame = CallFrame {
            env: frame_env.clone(),
            callee: callee_name,
            call_span: Some(span),
        };
        self.stack.push(frame).map_err(|e| self.fail(e, span))?;
        tracing::trace!(depth = self.stack.depth(), "enter call");

        let result = self.evaluate(closure.body, &frame_env);

        self.stack.pop();
        tracing::trace!(depth = self.stack.depth(), "leave call");
        result
    }
}
