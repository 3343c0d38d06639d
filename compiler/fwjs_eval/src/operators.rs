//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. The type
//! set is fixed (not user-extensible), so pattern matching is preferred
//! over trait objects for exhaustiveness checking of new operators.
//!
//! FWJS operators are integer-only: arithmetic produces integers,
//! comparisons produce booleans, and any non-integer operand is a type
//! error. There is no short-circuit evaluation; both operands are
//! always reduced before dispatch reaches this module.

use fwjs_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, modulo_by_zero, EvalResult,
};
use crate::value::Value;

/// Checked arithmetic operation with overflow handling.
///
/// Used for Add, Sub, Mul where the only error case is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation using direct pattern matching.
///
/// `i64` division truncates toward zero and `%` is the matching
/// remainder (`-7 / 2 == -3`, `-7 % 2 == -1`), which is exactly the
/// language's convention.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(binary_type_mismatch(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        ));
    };
    eval_int_binary(*a, *b, op)
}

/// Binary operations on integers.
///
/// All arithmetic goes through checked methods; `i64::MIN / -1` and
/// `i64::MIN % -1` are overflow, not zero-divisor, errors.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), "remainder")
            }
        }
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
    }
}
