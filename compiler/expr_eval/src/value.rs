//! Runtime values.

use std::fmt;
use std::rc::Rc;

use expr_ir::{ExprId, NameRange};

use crate::Environment;

/// The result of evaluating any expression.
///
/// Cloning is cheap: a closure is shared behind an `Rc`.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Closure(Rc<Closure>),
    /// The unit value. Also the placeholder held by a letrec binding until
    /// its initializer finishes.
    Void,
}

/// A lambda paired with the environment it was created in.
pub struct Closure {
    /// Snapshot of the defining environment.
    pub env: Environment,
    pub params: NameRange,
    pub body: ExprId,
}

impl Value {
    pub fn closure(env: Environment, params: NameRange, body: ExprId) -> Self {
        Value::Closure(Rc::new(Closure { env, params, body }))
    }

    /// 1 for true, 0 for false.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        Value::Int(i64::from(b))
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Closure(_) => "closure",
            Value::Void => "void",
        }
    }
}

/// Integers compare by value, closures by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// External rendering, as printed by `put` and for a program's result.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Closure(_) => f.write_str("<closure>"),
            Value::Void => f.write_str("<void>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Closure(c) => fmt::Debug::fmt(c, f),
            Value::Void => f.write_str("Void"),
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("captured", &self.env.len())
            .finish()
    }
}
