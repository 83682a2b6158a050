//! AST node types.
//!
//! Nodes live in an [`ExprArena`](crate::ExprArena) and refer to each other by
//! [`ExprId`]. The runtime treats the tree as read-only: closures keep the
//! `ExprId` of their lambda rather than a copy of the body.

use std::fmt;

use super::{BindingRange, ExprRange, Intrinsic, Name, NameRange, Span};

/// Index into an [`ExprArena`](crate::ExprArena).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// An expression node with its source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),
    /// Variable reference.
    Var(Name),
    /// `lambda (params) { body }`
    Lambda { params: NameRange, body: ExprId },
    /// `letrec (name = init ...) { body }`
    Letrec {
        bindings: BindingRange,
        body: ExprId,
    },
    /// `if cond then a else b`
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// `(op args...)`
    Intrinsic { op: Intrinsic, args: ExprRange },
    /// `(callee args...)`
    Call { callee: ExprId, args: ExprRange },
    /// `[ exprs... ]`
    Seq { exprs: ExprRange },
}

/// One `name = init` pair of a letrec.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LetrecBinding {
    pub name: Name,
    pub init: ExprId,
    /// Span of the name, for diagnostics.
    pub name_span: Span,
}
