//! `InterpreterBuilder` for creating `Interpreter` instances.

use expr_ir::{ExprArena, StringInterner};

use super::Interpreter;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{CallStack, RuntimeConfig, Store};

/// Builder for `Interpreter`.
///
/// Defaults: output to stdout, input from stdin, `RuntimeConfig::default()`.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    config: RuntimeConfig,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            print_handler: None,
            input_handler: None,
            config: RuntimeConfig::default(),
        }
    }

    /// Where `put` output and runtime diagnostics go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Where `get` reads from.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Shorthand for setting `RuntimeConfig::max_call_depth`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.config.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            arena: self.arena,
            interner: self.interner,
            store: Store::new(),
            stack: CallStack::new(self.config.max_call_depth),
            print: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input_handler.unwrap_or_else(stdin_handler),
            config: self.config,
        }
    }
}
