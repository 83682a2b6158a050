//! Pure integer intrinsics.
//!
//! Operands must be integers. Comparisons and logical operators produce
//! 1 or 0; there is no boolean type.

use expr_ir::Intrinsic;

use crate::errors::{
    division_by_zero, integer_overflow, internal_fault, modulo_by_zero, type_mismatch,
};
use crate::{EvalError, EvalResult, Value};

/// Checked arithmetic where overflow is the only failure.
#[inline]
fn checked_arith(result: Option<i64>, op: Intrinsic) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op))
}

fn int_operand(value: &Value, op: Intrinsic, position: &str) -> Result<i64, EvalError> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(type_mismatch(
            format!("{position} operand of `{op}`"),
            "integer",
            other.type_name(),
        )),
    }
}

/// Apply a binary intrinsic.
pub fn evaluate_binary(op: Intrinsic, left: &Value, right: &Value) -> EvalResult {
    let a = int_operand(left, op, "left")?;
    let b = int_operand(right, op, "right")?;
    eval_int_binary(op, a, b)
}

fn eval_int_binary(op: Intrinsic, a: i64, b: i64) -> EvalResult {
    match op {
        Intrinsic::Add => checked_arith(a.checked_add(b), op),
        Intrinsic::Sub => checked_arith(a.checked_sub(b), op),
        Intrinsic::Mul => checked_arith(a.checked_mul(b), op),
        // Zero is checked first; `checked_div` then only fails for MIN / -1.
        Intrinsic::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), op)
            }
        }
        Intrinsic::Rem => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), op)
            }
        }
        Intrinsic::Lt => Ok(Value::from_bool(a < b)),
        Intrinsic::Le => Ok(Value::from_bool(a <= b)),
        Intrinsic::Gt => Ok(Value::from_bool(a > b)),
        Intrinsic::Ge => Ok(Value::from_bool(a >= b)),
        Intrinsic::Eq => Ok(Value::from_bool(a == b)),
        Intrinsic::Ne => Ok(Value::from_bool(a != b)),
        Intrinsic::And => Ok(Value::from_bool(a != 0 && b != 0)),
        Intrinsic::Or => Ok(Value::from_bool(a != 0 || b != 0)),
        Intrinsic::Not
        | Intrinsic::Void
        | Intrinsic::Get
        | Intrinsic::Put
        | Intrinsic::Gc
        | Intrinsic::Error => Err(internal_fault(format!("`{op}` is not a binary intrinsic"))),
    }
}

/// `not`: 1 for 0, 0 for anything else.
pub fn evaluate_not(operand: &Value) -> EvalResult {
    let n = int_operand(operand, Intrinsic::Not, "the")?;
    Ok(Value::from_bool(n == 0))
}
