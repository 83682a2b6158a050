//! The call stack: the collector's root set.
//!
//! The bottom frame is the main frame for the top-level program; every
//! closure call pushes one more. Each frame holds the environment in effect
//! for the code running in it. Values that have been computed but not yet
//! bound anywhere (a callee waiting for its arguments, arguments evaluated
//! so far) sit on the temporaries stack, which the collector also marks.

use expr_ir::{Name, Span, StringInterner};
use smallvec::SmallVec;

use crate::errors::{stack_overflow, BacktraceFrame, EvalBacktrace};
use crate::{Environment, EvalError, Value};

/// Calls kept by a backtrace capture; deeper ones are only counted.
pub const BACKTRACE_FRAME_LIMIT: usize = 16;

/// One active call.
#[derive(Clone, Debug)]
pub struct CallFrame {
    pub env: Environment,
    /// The callee's name when it was called through a variable.
    pub callee: Option<Name>,
    /// Where the call was made.
    pub call_span: Option<Span>,
}

impl CallFrame {
    pub fn main(env: Environment) -> Self {
        CallFrame {
            env,
            callee: None,
            call_span: None,
        }
    }
}

#[derive(Debug)]
pub struct CallStack {
    /// Never empty: `frames[0]` is the main frame.
    frames: Vec<CallFrame>,
    temporaries: Vec<Value>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// A stack holding only the main frame.
    ///
    /// `max_depth` bounds the number of closure calls active at once;
    /// `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: vec![CallFrame::main(Environment::new())],
            temporaries: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame. The frame is not pushed if the depth limit is hit.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.depth() >= max {
                return Err(stack_overflow(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(self.frames.len() > 1, "popped the main frame");
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of active closure calls (the main frame is not counted).
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn frames(&self) -> &[CallFrame] {
        &self.frames
    }

    pub fn current_env(&self) -> &Environment {
        &self.current_frame().env
    }

    /// Swap the innermost frame's environment, returning the old one.
    pub fn replace_current_env(&mut self, env: Environment) -> Environment {
        let frame = self.current_frame_mut();
        std::mem::replace(&mut frame.env, env)
    }

    fn current_frame(&self) -> &CallFrame {
        match self.frames.last() {
            Some(frame) => frame,
            None => unreachable!("call stack lost its main frame"),
        }
    }

    fn current_frame_mut(&mut self) -> &mut CallFrame {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => unreachable!("call stack lost its main frame"),
        }
    }

    // ===== Temporaries =====

    #[inline]
    pub fn push_temporary(&mut self, value: Value) {
        self.temporaries.push(value);
    }

    /// Marker for `pop_temporaries`/`truncate_temporaries`.
    #[inline]
    pub fn temporaries_len(&self) -> usize {
        self.temporaries.len()
    }

    /// Remove and return every temporary pushed since `mark`.
    pub fn pop_temporaries(&mut self, mark: usize) -> SmallVec<[Value; 4]> {
        let start = mark.min(self.temporaries.len());
        self.temporaries.drain(start..).collect()
    }

    /// Drop every temporary pushed since `mark`.
    pub fn truncate_temporaries(&mut self, mark: usize) {
        self.temporaries.truncate(mark);
    }

    pub fn temporaries(&self) -> &[Value] {
        &self.temporaries
    }

    // ===== Backtraces =====

    /// Snapshot of the innermost `BACKTRACE_FRAME_LIMIT` calls, most recent
    /// first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .skip(1)
            .rev()
            .take(BACKTRACE_FRAME_LIMIT)
            .map(|f| BacktraceFrame {
                name: f
                    .callee
                    .map_or_else(|| "<anonymous>".to_string(), |n| interner.lookup(n).to_string()),
                span: f.call_span,
            })
            .collect();
        EvalBacktrace::truncated(frames, self.depth())
    }

    /// Attach a backtrace to `err` unless it already has one or no call is active.
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if err.backtrace.is_some() || self.depth() == 0 {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}
