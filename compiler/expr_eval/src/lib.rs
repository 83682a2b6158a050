#![deny(clippy::arithmetic_side_effects)]
//! Expr Eval - the runtime for Expr programs.
//!
//! # Architecture
//!
//! - `Store`: the heap, a table from `Location` to `Value`
//! - `Environment`: persistent name-to-location lists, shared by closures
//! - `CallStack`: active call frames plus pending temporaries, the
//!   collector's root set
//! - `gc::collect`: on-demand mark and sweep over the store
//! - `Interpreter`: the tree-walking evaluator over an `ExprArena`
//!
//! Output and input go through `PrintHandlerImpl` and `InputHandlerImpl`,
//! so tests can capture `put` output and script `get` input.

mod call_stack;
mod config;
mod environment;
pub mod errors;
pub mod gc;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod store;
mod value;

pub use call_stack::{CallFrame, CallStack, BACKTRACE_FRAME_LIMIT};
pub use config::RuntimeConfig;
pub use environment::Environment;
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use gc::GcStats;
pub use input_handler::{
    buffer_input, stdin_handler, BufferInputHandler, InputHandlerImpl, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::{evaluate_binary, evaluate_not};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use store::{Location, Store};
pub use value::{Closure, Value};
