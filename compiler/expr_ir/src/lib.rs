//! Expr IR - shared data structures for the Expr front end and runtime.
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The flat AST (`ExprArena`, `ExprId`, `ExprKind`)
//! - The fixed `Intrinsic` table
//!
//! # Design
//!
//! - **Intern everything**: identifiers become `Name(u32)`, so environment
//!   lookups compare integers rather than strings.
//! - **Flatten everything**: no `Box<Expr>`; children are `ExprId` indices and
//!   lists are ranges into side tables of the arena.

mod arena;
mod ast;
mod interner;
mod intrinsic;
mod name;
mod span;
mod token;

pub use arena::{BindingRange, ExprArena, ExprRange, NameRange};
pub use ast::{Expr, ExprId, ExprKind, LetrecBinding};
pub use interner::StringInterner;
pub use intrinsic::Intrinsic;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
