//! Intrinsic dispatch.

use expr_ir::{ExprRange, Intrinsic, Span};

use super::Interpreter;
use crate::errors::{intrinsic_arity, io_error, user_error};
use crate::operators::{evaluate_binary, evaluate_not};
use crate::{Environment, EvalResult, Value};

impl Interpreter<'_> {
    /// `(op args...)`: all arguments first, left to right, then the operation.
    pub(super) fn eval_intrinsic(
        &mut self,
        op: Intrinsic,
        args: ExprRange,
        span: Span,
        env: &Environment,
    ) -> EvalResult {
        let mark = self.stack.temporaries_len();
        if let Err(err) = self.eval_args(args, env) {
            self.stack.truncate_temporaries(mark);
            return Err(err);
        }
        let values = self.stack.pop_temporaries(mark);

        if values.len() != op.arity() {
            return Err(self.fail(intrinsic_arity(op, values.len()), span));
        }
        self.apply_intrinsic(op, &values)
            .map_err(|e| self.fail(e, span))
    }

    fn apply_intrinsic(&mut self, op: Intrinsic, args: &[Value]) -> EvalResult {
        match (op, args) {
            (Intrinsic::Void, []) => Ok(Value::Void),
            (Intrinsic::Get, []) => self.read_input(),
            (Intrinsic::Put, [value]) => {
                self.print.println(&value.to_string());
                Ok(value.clone())
            }
            (Intrinsic::Gc, []) => {
                let stats = self.collect_garbage()?;
                if self.config.report_gc {
                    self.print.diagnostic(&format!(
                        "[Expr Runtime] GC collected {} locations",
                        stats.reclaimed
                    ));
                }
                Ok(Value::Void)
            }
            (Intrinsic::Error, []) => Err(user_error()),
            (Intrinsic::Not, [operand]) => evaluate_not(operand),
            (
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
                | Intrinsic::Or,
                [left, right],
            ) => evaluate_binary(op, left, right),
            _ => Err(intrinsic_arity(op, args.len())),
        }
    }

    /// `get`: next integer, or void at end of input.
    fn read_input(&self) -> EvalResult {
        match self.input.read_int() {
            Ok(Some(n)) => Ok(Value::Int(n)),
            Ok(None) => Ok(Value::Void),
            Err(err) => Err(io_error(&err)),
        }
    }
}
