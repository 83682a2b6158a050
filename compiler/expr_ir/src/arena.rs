//! Arena allocation for the flat AST.
//!
//! All nodes of a program live in one `ExprArena`:
//! - children are `ExprId` indices into `exprs`
//! - argument and sequence lists are `ExprRange`s into `expr_lists`
//! - lambda parameter lists are `NameRange`s into `names`
//! - letrec binding lists are `BindingRange`s into `bindings`

use super::{Expr, ExprId, ExprKind, LetrecBinding, Name, Span};

/// Defines a compact `start..start+len` range into one of the arena's side tables.
macro_rules! define_range {
    ($($name:ident),* $(,)?) => { $(
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            fn bounds(self) -> ::std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    )* };
}

define_range!(ExprRange, NameRange, BindingRange);

/// Index of the next element of a side table, as a `u32`.
fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST arena exceeded {} entries", u32::MAX))
}

/// Contiguous storage for every node of one program.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    names: Vec<Name>,
    bindings: Vec<LetrecBinding>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a source of `source_len` bytes (~1 node per 4 bytes).
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 4;
        ExprArena {
            exprs: Vec::with_capacity(estimated),
            expr_lists: Vec::with_capacity(estimated / 2),
            names: Vec::with_capacity(estimated / 8),
            bindings: Vec::with_capacity(estimated / 16),
        }
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(Expr::new(kind, span));
        id
    }

    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get_expr(id).kind
    }

    #[inline]
    #[track_caller]
    pub fn span(&self, id: ExprId) -> Span {
        self.get_expr(id).span
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Side tables =====

    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        ExprRange::new(start, next_index(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.bounds()]
    }

    pub fn alloc_names(&mut self, names: impl IntoIterator<Item = Name>) -> NameRange {
        let start = next_index(self.names.len());
        self.names.extend(names);
        NameRange::new(start, next_index(self.names.len()) - start)
    }

    #[inline]
    pub fn get_names(&self, range: NameRange) -> &[Name] {
        &self.names[range.bounds()]
    }

    pub fn alloc_bindings(
        &mut self,
        bindings: impl IntoIterator<Item = LetrecBinding>,
    ) -> BindingRange {
        let start = next_index(self.bindings.len());
        self.bindings.extend(bindings);
        BindingRange::new(start, next_index(self.bindings.len()) - start)
    }

    #[inline]
    pub fn get_bindings(&self, range: BindingRange) -> &[LetrecBinding] {
        &self.bindings[range.bounds()]
    }
}
