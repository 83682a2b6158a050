//! Tree-walking interpreter for Expr.
//!
//! `evaluate` dispatches on the node kind. All runtime state (store, call
//! stack, I/O handlers) lives in the `Interpreter`, never in globals.
//!
//! # Rooting
//!
//! The collector only sees the call stack, so every live value must be
//! reachable from it whenever `gc` can run:
//!
//! - each call pushes a frame holding the callee's environment;
//! - a letrec swaps the current frame's environment for the extended one
//!   while its initializers and body run;
//! - a pending callee and already-evaluated arguments sit on the
//!   temporaries stack until they are bound.
//!
//! Helpers:
//! - `function_call.rs`: user calls and letrec
//! - `intrinsics.rs`: intrinsic dispatch

mod builder;
mod function_call;
mod intrinsics;

pub use builder::InterpreterBuilder;

use expr_ir::{ExprArena, ExprId, ExprKind, ExprRange, Name, Span, StringInterner};
use expr_stack::ensure_sufficient_stack;

use crate::errors::{type_mismatch, unbound_variable};
use crate::gc::{self, GcStats};
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;
use crate::{CallStack, Environment, EvalError, EvalResult, RuntimeConfig, Store, Value};

/// Evaluates one parsed program.
pub struct Interpreter<'a> {
    pub(crate) arena: &'a ExprArena,
    pub(crate) interner: &'a StringInterner,
    store: Store,
    stack: CallStack,
    print: SharedPrintHandler,
    input: SharedInputHandler,
    config: RuntimeConfig,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with stdout/stdin handlers and the default configuration.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    /// Evaluate `root` in the main frame.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, root: ExprId) -> EvalResult {
        let env = self.stack.current_env().clone();
        let result = self.evaluate(root, &env);
        self.stack.truncate_temporaries(0);
        match &result {
            Ok(value) => tracing::debug!(%value, store = self.store.len(), "program finished"),
            Err(err) => tracing::debug!(error = %err, "program failed"),
        }
        result
    }

    /// Evaluate one node in `env`.
    ///
    /// `env` must be reachable from the call stack (it is, for every
    /// environment the interpreter builds itself); otherwise a `gc` inside
    /// the node may reclaim its bindings.
    pub fn evaluate(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: &Environment) -> EvalResult {
        let arena = self.arena;
        let span = arena.span(id);
        match *arena.kind(id) {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Var(name) => self.eval_var(name, env).map_err(|e| self.fail(e, span)),
            ExprKind::Lambda { params, body } => Ok(Value::closure(env.clone(), params, body)),
            ExprKind::Letrec { bindings, body } => self.eval_letrec(bindings, body, span, env),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.evaluate(cond, env)? {
                Value::Int(0) => self.evaluate(else_branch, env),
                Value::Int(_) => self.evaluate(then_branch, env),
                other => {
                    let err = type_mismatch("`if` condition", "integer", other.type_name());
                    Err(self.fail(err, arena.span(cond)))
                }
            },
            ExprKind::Intrinsic { op, args } => self.eval_intrinsic(op, args, span, env),
            ExprKind::Call { callee, args } => self.eval_call(callee, args, span, env),
            ExprKind::Seq { exprs } => self.eval_seq(exprs, env),
        }
    }

    fn eval_var(&self, name: Name, env: &Environment) -> EvalResult {
        let loc = env
            .lookup(name)
            .ok_or_else(|| unbound_variable(self.interner.lookup(name)))?;
        self.store.read(loc)
    }

    /// Every element in order; the last one's value. Empty is void.
    fn eval_seq(&mut self, exprs: ExprRange, env: &Environment) -> EvalResult {
        let arena = self.arena;
        let mut last = Value::Void;
        for &expr in arena.get_expr_list(exprs) {
            last = self.evaluate(expr, env)?;
        }
        Ok(last)
    }

    /// Evaluate `args` left to right onto the temporaries stack.
    ///
    /// On error the caller truncates back to its mark.
    fn eval_args(&mut self, args: ExprRange, env: &Environment) -> Result<(), EvalError> {
        let arena = self.arena;
        for &arg in arena.get_expr_list(args) {
            let value = self.evaluate(arg, env)?;
            self.stack.push_temporary(value);
        }
        Ok(())
    }

    /// Give `err` a location and a backtrace, keeping any it already has.
    #[cold]
    fn fail(&self, err: EvalError, span: Span) -> EvalError {
        let err = if err.span.is_none() {
            err.with_span(span)
        } else {
            err
        };
        self.stack.attach_backtrace(err, self.interner)
    }

    /// Run the collector now, as the `gc` intrinsic does.
    pub fn collect_garbage(&mut self) -> Result<GcStats, EvalError> {
        gc::collect(&mut self.store, &self.stack)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Number of live store cells.
    pub fn store_len(&self) -> usize {
        self.store.len()
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.stack
    }

    /// Number of closure calls currently active.
    pub fn call_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }
}
