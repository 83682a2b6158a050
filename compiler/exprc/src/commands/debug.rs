//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write;

use expr_ir::{ExprArena, ExprId, ExprKind, StringInterner, TokenKind};

use super::{read_file, report_diagnostics};
use crate::check_source;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let interner = StringInterner::new();
    let tokens = expr_lexer::lex(&content, &interner);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in tokens.iter() {
        match tok.kind {
            TokenKind::Ident(name) => {
                println!("  Ident({}) @ {}", interner.lookup(name), tok.span);
            }
            kind => println!("  {kind:?} @ {}", tok.span),
        }
    }
}

/// Parse a file and display its syntax tree.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let frontend = check_source(&content);

    println!("Parse result for '{path}':");
    println!("  Expressions: {}", frontend.parsed.arena.expr_count());
    println!("  Errors: {}", frontend.diagnostics.len());

    if let Some(root) = frontend.parsed.root {
        println!();
        print!(
            "{}",
            format_ast(&frontend.parsed.arena, &frontend.interner, root)
        );
    }

    if frontend.has_errors() {
        println!();
        report_diagnostics(&frontend.diagnostics, path, &content);
        std::process::exit(1);
    }
}

/// Indented outline of the tree under `root`, one node per line.
pub fn format_ast(arena: &ExprArena, interner: &StringInterner, root: ExprId) -> String {
    let mut out = String::new();
    write_node(arena, interner, root, 0, &mut out);
    out
}

fn write_node(
    arena: &ExprArena,
    interner: &StringInterner,
    id: ExprId,
    depth: usize,
    out: &mut String,
) {
    let indent = "  ".repeat(depth);
    let child = depth.saturating_add(1);
    match *arena.kind(id) {
        ExprKind::Int(n) => {
            let _ = writeln!(out, "{indent}Int {n}");
        }
        ExprKind::Var(name) => {
            let _ = writeln!(out, "{indent}Var {}", interner.lookup(name));
        }
        ExprKind::Lambda { params, body } => {
            let names: Vec<&str> = arena
                .get_names(params)
                .iter()
                .map(|&n| interner.lookup(n))
                .collect();
            let _ = writeln!(out, "{indent}Lambda ({})", names.join(" "));
            write_node(arena, interner, body, child, out);
        }
        ExprKind::Letrec { bindings, body } => {
            let _ = writeln!(out, "{indent}Letrec");
            for binding in arena.get_bindings(bindings) {
                let _ = writeln!(out, "{indent}  {} =", interner.lookup(binding.name));
                write_node(arena, interner, binding.init, child.saturating_add(1), out);
            }
            write_node(arena, interner, body, child, out);
        }
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let _ = writeln!(out, "{indent}If");
            for branch in [cond, then_branch, else_branch] {
                write_node(arena, interner, branch, child, out);
            }
        }
        ExprKind::Intrinsic { op, args } => {
            let _ = writeln!(out, "{indent}Intrinsic {op}");
            for &arg in arena.get_expr_list(args) {
                write_node(arena, interner, arg, child, out);
            }
        }
        ExprKind::Call { callee, args } => {
            let _ = writeln!(out, "{indent}Call");
            write_node(arena, interner, callee, child, out);
            for &arg in arena.get_expr_list(args) {
                write_node(arena, interner, arg, child, out);
            }
        }
        ExprKind::Seq { exprs } => {
            let _ = writeln!(out, "{indent}Seq");
            for &expr in arena.get_expr_list(exprs) {
                write_node(arena, interner, expr, child, out);
            }
        }
    }
}
