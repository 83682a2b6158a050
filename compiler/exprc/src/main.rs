//! Expr interpreter CLI.

use exprc::commands::{lex_file, parse_file, run_file, RunFlags};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: expr run <file.expr> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --max-depth=<n>   Limit active calls (default: unlimited)");
                eprintln!("  --quiet-gc        Do not report collections on stderr");
                eprintln!("  -v, --verbose     Debug logging on stderr");
                std::process::exit(1);
            }
            run_with_flags(&args[2], &args[3..]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: expr parse <file.expr>");
                std::process::exit(1);
            }
            init_tracing(false);
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: expr lex <file.expr>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Expr {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("expr"))
            {
                run_with_flags(command, &args[2..]);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn run_with_flags(path: &str, rest: &[String]) {
    let flags = match RunFlags::parse(rest.iter().map(String::as_str)) {
        Ok(flags) => flags,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };
    init_tracing(flags.verbose);
    run_file(path, &flags);
}

/// Install a hierarchical tracing subscriber on stderr.
///
/// `RUST_LOG` selects what is logged; `--verbose` forces `debug`. With
/// neither, nothing is installed.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_indent_lines(true),
        )
        .try_init();
}

fn print_usage() {
    println!("Expr interpreter");
    println!();
    println!("Usage: expr <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.expr>      Evaluate a program and print its value");
    println!("  parse <file.expr>    Parse and display the syntax tree");
    println!("  lex <file.expr>      Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-depth=<n>      Limit active calls (default: unlimited)");
    println!("  --quiet-gc           Do not report collections on stderr");
    println!("  --verbose, -v        Debug logging on stderr");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter, e.g. RUST_LOG=expr_eval=trace");
    println!();
    println!("Examples:");
    println!("  expr run fact.expr");
    println!("  expr fact.expr --max-depth=10000");
    println!("  echo 5 | expr run fact.expr --quiet-gc");
}
