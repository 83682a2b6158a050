//! The fixed set of intrinsic operations.
//!
//! Intrinsics are invoked with call syntax whose head is an operator token or
//! one of the reserved intrinsic names, e.g. `(+ a b)` or `(put x)`. They
//! cannot be rebound: `(put x)` is always the intrinsic even when a variable
//! named `put` is in scope.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Intrinsic {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
    Not,
    /// Produces Void.
    Void,
    /// Reads one integer from the input stream.
    Get,
    /// Prints one value.
    Put,
    /// Runs the garbage collector.
    Gc,
    /// Aborts the program.
    Error,
}

impl Intrinsic {
    /// Every intrinsic, in declaration order.
    pub const ALL: [Intrinsic; 19] = [
        Intrinsic::Add,
        Intrinsic::Sub,
        Intrinsic::Mul,
        Intrinsic::Div,
        Intrinsic::Rem,
        Intrinsic::Lt,
        Intrinsic::Le,
        Intrinsic::Gt,
        Intrinsic::Ge,
        Intrinsic::Eq,
        Intrinsic::Ne,
        Intrinsic::And,
        Intrinsic::Or,
        Intrinsic::Not,
        Intrinsic::Void,
        Intrinsic::Get,
        Intrinsic::Put,
        Intrinsic::Gc,
        Intrinsic::Error,
    ];

    /// Source spelling of the intrinsic.
    pub const fn name(self) -> &'static str {
        match self {
            Intrinsic::Add => "+",
            Intrinsic::Sub => "-",
            Intrinsic::Mul => "*",
            Intrinsic::Div => "/",
            Intrinsic::Rem => "%",
            Intrinsic::Lt => "<",
            Intrinsic::Le => "<=",
            Intrinsic::Gt => ">",
            Intrinsic::Ge => ">=",
            Intrinsic::Eq => "==",
            Intrinsic::Ne => "!=",
            Intrinsic::And => "and",
            Intrinsic::Or => "or",
            Intrinsic::Not => "not",
            Intrinsic::Void => "void",
            Intrinsic::Get => "get",
            Intrinsic::Put => "put",
            Intrinsic::Gc => "gc",
            Intrinsic::Error => "error",
        }
    }

    /// Look up an intrinsic by its source spelling.
    pub fn from_name(name: &str) -> Option<Intrinsic> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Number of arguments the intrinsic takes.
    pub const fn arity(self) -> usize {
        match self {
            Intrinsic::Add
            | Intrinsic::Sub
            | Intrinsic::Mul
            | Intrinsic::Div
            | Intrinsic::Rem
            | Intrinsic::Lt
            | Intrinsic::Le
            | Intrinsic::Gt
            | Intrinsic::Ge
            | Intrinsic::Eq
            | Intrinsic::Ne
            | Intrinsic::And
            | Intrinsic::Or => 2,
            Intrinsic::Not | Intrinsic::Put => 1,
            Intrinsic::Void | Intrinsic::Get | Intrinsic::Gc | Intrinsic::Error => 0,
        }
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
