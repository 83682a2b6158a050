//! The `run` command: lex, parse, and evaluate an Expr source file.

use expr_eval::RuntimeConfig;

use super::{read_file, report_diagnostics};
use crate::{run_source, RunOptions};

/// Options accepted by `expr run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// `--max-depth=N`
    pub max_depth: Option<usize>,
    /// `--quiet-gc`
    pub quiet_gc: bool,
    /// `--verbose`
    pub verbose: bool,
}

impl RunFlags {
    /// Parse flags after the file path. Unknown flags are an error message.
    pub fn parse<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let mut flags = RunFlags::default();
        for arg in args {
            if let Some(depth) = arg.strip_prefix("--max-depth=") {
                let depth = depth
                    .parse::<usize>()
                    .map_err(|_| format!("invalid value for --max-depth: '{depth}'"))?;
                flags.max_depth = Some(depth);
            } else if arg == "--quiet-gc" {
                flags.quiet_gc = true;
            } else if arg == "--verbose" || arg == "-v" {
                flags.verbose = true;
            } else {
                return Err(format!("unknown option '{arg}'"));
            }
        }
        Ok(flags)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            max_call_depth: self.max_depth,
            report_gc: !self.quiet_gc,
        }
    }
}

/// Run an Expr source file, printing the program's value on success.
///
/// Exits with status 1 on any front-end or runtime error.
pub fn run_file(path: &str, flags: &RunFlags) {
    let content = read_file(path);
    let options = RunOptions {
        config: flags.runtime_config(),
        ..RunOptions::default()
    };

    match run_source(&content, options) {
        Ok(value) => println!("{value}"),
        Err(diagnostics) => {
            report_diagnostics(&diagnostics, path, &content);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
