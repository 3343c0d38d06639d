//! Tests for binary operator semantics.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use fwjs_ir::BinaryOp;
use pretty_assertions::assert_eq;

use crate::errors::EvalErrorKind;
use crate::operators::evaluate_binary;
use crate::value::Value;

fn int_op(a: i64, b: i64, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    evaluate_binary(&Value::Int(a), &Value::Int(b), op).map_err(|e| e.kind)
}

#[test]
fn arithmetic_basics() {
    assert_eq!(int_op(2, 3, BinaryOp::Add), Ok(Value::Int(5)));
    assert_eq!(int_op(2, 3, BinaryOp::Sub), Ok(Value::Int(-1)));
    assert_eq!(int_op(2, 3, BinaryOp::Mul), Ok(Value::Int(6)));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(int_op(7, 2, BinaryOp::Div), Ok(Value::Int(3)));
    assert_eq!(int_op(-7, 2, BinaryOp::Div), Ok(Value::Int(-3)));
    assert_eq!(int_op(7, -2, BinaryOp::Div), Ok(Value::Int(-3)));
    assert_eq!(int_op(-7, -2, BinaryOp::Div), Ok(Value::Int(3)));
}

#[test]
fn modulo_matches_truncated_division() {
    // Remainder takes the sign of the dividend.
    assert_eq!(int_op(7, 2, BinaryOp::Mod), Ok(Value::Int(1)));
    assert_eq!(int_op(-7, 2, BinaryOp::Mod), Ok(Value::Int(-1)));
    assert_eq!(int_op(7, -2, BinaryOp::Mod), Ok(Value::Int(1)));
    assert_eq!(int_op(-7, -2, BinaryOp::Mod), Ok(Value::Int(-1)));
}

#[test]
fn division_by_zero_errors() {
    assert_eq!(int_op(1, 0, BinaryOp::Div), Err(EvalErrorKind::DivisionByZero));
    assert_eq!(int_op(0, 0, BinaryOp::Div), Err(EvalErrorKind::DivisionByZero));
}

#[test]
fn modulo_by_zero_errors() {
    assert_eq!(int_op(1, 0, BinaryOp::Mod), Err(EvalErrorKind::ModuloByZero));
}

#[test]
fn overflow_is_reported_not_wrapped() {
    assert_eq!(
        int_op(i64::MAX, 1, BinaryOp::Add),
        Err(EvalErrorKind::IntegerOverflow {
            operation: "addition"
        })
    );
    assert_eq!(
        int_op(i64::MIN, -1, BinaryOp::Div),
        Err(EvalErrorKind::IntegerOverflow {
            operation: "division"
        })
    );
    assert_eq!(
        int_op(i64::MIN, -1, BinaryOp::Mod),
        Err(EvalErrorKind::IntegerOverflow {
            operation: "remainder"
        })
    );
}

#[test]
fn comparisons_produce_booleans() {
    assert_eq!(int_op(2, 3, BinaryOp::Lt), Ok(Value::Bool(true)));
    assert_eq!(int_op(3, 3, BinaryOp::Lt), Ok(Value::Bool(false)));
    assert_eq!(int_op(3, 3, BinaryOp::LtEq), Ok(Value::Bool(true)));
    assert_eq!(int_op(3, 2, BinaryOp::Gt), Ok(Value::Bool(true)));
    assert_eq!(int_op(2, 2, BinaryOp::GtEq), Ok(Value::Bool(true)));
    assert_eq!(int_op(2, 2, BinaryOp::Eq), Ok(Value::Bool(true)));
    assert_eq!(int_op(2, 3, BinaryOp::Eq), Ok(Value::Bool(false)));
}

#[test]
fn non_integer_operands_are_type_errors() {
    let err = evaluate_binary(&Value::Bool(true), &Value::Int(1), BinaryOp::Add)
        .map_err(|e| e.kind)
        .unwrap_err();
    assert_eq!(
        err,
        EvalErrorKind::BinaryTypeMismatch {
            op: "+",
            left: "bool",
            right: "int"
        }
    );
}

#[test]
fn equality_is_integer_only() {
    // Even `==` requires integer operands; booleans do not compare.
    let err = evaluate_binary(&Value::Bool(true), &Value::Bool(true), BinaryOp::Eq)
        .map_err(|e| e.kind)
        .unwrap_err();
    assert!(matches!(err, EvalErrorKind::BinaryTypeMismatch { .. }));
}

#[test]
fn null_and_undefined_do_not_participate() {
    assert!(evaluate_binary(&Value::Null, &Value::Int(1), BinaryOp::Add).is_err());
    assert!(evaluate_binary(&Value::Int(1), &Value::Undefined, BinaryOp::Eq).is_err());
}
