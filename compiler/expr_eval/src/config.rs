//! Runtime configuration.

/// Knobs for one interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Maximum number of closure calls active at once. `None` means the
    /// limit is memory: the evaluator grows its stack on demand.
    pub max_call_depth: Option<usize>,
    /// Write a line to the diagnostic stream after every `gc`.
    pub report_gc: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            max_call_depth: None,
            report_gc: true,
        }
    }
}
