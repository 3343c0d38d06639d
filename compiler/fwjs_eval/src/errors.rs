//! Error types for the evaluator.
//!
//! FWJS defines no exception-handling construct, so every error here is
//! fatal: it propagates up the `evaluate` recursion and aborts the run.
//! An unresolved variable reference is deliberately *not* an error; it
//! resolves to [`Value::Undefined`](crate::Value::Undefined).
//!
//! Factory functions (e.g. `division_by_zero()`) are the public API;
//! they populate both `kind` and `message`.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// Each variant carries structured data for the error condition,
/// enabling programmatic matching instead of string parsing. The
/// `Display` impl produces the human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow {
        operation: &'static str,
    },

    // Type
    /// An operand of a binary operator was not an integer.
    BinaryTypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    /// A condition evaluated to something other than a boolean.
    /// Integers are never truthy in FWJS.
    NonBooleanCondition {
        got: &'static str,
    },
    /// A non-closure value was applied as a function.
    NotCallable {
        type_name: &'static str,
    },

    // Scoping
    /// A name was re-declared in the scope that already defines it.
    DuplicateDeclaration {
        name: String,
    },

    // Function
    /// A closure was called with the wrong number of arguments.
    ArityMismatch {
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::BinaryTypeMismatch { op, left, right } => {
                write!(f, "operator `{op}` cannot be applied to {left} and {right}")
            }
            Self::NonBooleanCondition { got } => {
                write!(f, "condition must be a boolean, got {got}")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::DuplicateDeclaration { name } => {
                write!(f, "variable `{name}` is already declared in this scope")
            }
            Self::ArityMismatch { expected, got } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "function expects {expected} {arg_word}, got {got}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// Used internally by the factory functions.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

/// Non-integer operand in a binary operation.
#[cold]
pub fn binary_type_mismatch(
    op: &'static str,
    left: &'static str,
    right: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

/// Non-boolean condition in `if` or `while`.
#[cold]
pub fn non_boolean_condition(got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonBooleanCondition { got })
}

/// A non-closure value applied as a function.
#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

/// Redeclaration of a name in its own scope.
#[cold]
pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
}

/// Wrong number of arguments in a function call.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}
