//! Recursive descent parser for Expr.
//!
//! Produces a flat AST in an `ExprArena`. The whole program is one
//! expression; anything after it is an error. Besides grammar, the parser
//! rejects lambdas and letrecs that bind the same name twice.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use expr_diagnostic::Diagnostic;
use expr_ir::{ExprArena, ExprId, StringInterner, TokenList};

/// Parse result: the arena, the root expression, and any errors.
///
/// `root` is `None` when the program could not be parsed at all. A program
/// with only binding errors still has a root, but must not be run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: Option<ExprId>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }
}

/// Parser state: a cursor over the tokens plus the arena being filled.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    /// Errors that do not stop parsing (duplicate bindings).
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len() * 4),
            errors: Vec::new(),
        }
    }

    fn parse_program(mut self) -> ParseOutput {
        let root = match self.parse_expr() {
            Ok(root) => {
                if !self.cursor.is_at_end() {
                    let err = ParseError::trailing_input(
                        self.cursor.current_span(),
                        self.cursor.current_kind(),
                    );
                    self.errors.push(err);
                }
                Some(root)
            }
            Err(err) => {
                self.errors.push(err);
                None
            }
        };

        ParseOutput {
            arena: self.arena,
            root,
            errors: self.errors,
        }
    }
}

/// Parse a token list into an expression tree.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let output = Parser::new(tokens, interner).parse_program();
    tracing::debug!(
        nodes = output.arena.expr_count(),
        errors = output.errors.len(),
        "parsed"
    );
    output
}
