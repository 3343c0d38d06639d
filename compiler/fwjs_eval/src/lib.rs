#![deny(clippy::arithmetic_side_effects)]
//! FWJS Eval - Tree-walking evaluator for FWJS.
//!
//! FWJS (Featherweight JavaScript) is a small dynamically-typed
//! expression language. This crate defines its evaluation semantics:
//!
//! - [`Value`]: the closed runtime value model (int, bool, null,
//!   undefined, closure)
//! - [`Environment`]: the parent-linked scope chain with lexical
//!   lookup, nearest-frame update, and local-only declaration
//! - [`Interpreter`] / [`evaluate`]: recursive evaluation of an
//!   expression tree from `fwjs_ir`
//! - [`evaluate_binary`]: enum-based binary operator dispatch
//! - Print handlers for directing `print` output
//!
//! # Notable language property
//!
//! Assigning to a name no scope declares creates that name in the
//! *global* scope (JS loose-mode semantics). This is specified
//! behavior, preserved deliberately; see
//! [`Environment::update`].

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod value;

#[cfg(test)]
mod tests;

pub use environment::{DeclareError, Environment, LocalScope, Scope};
pub use errors::{
    arity_mismatch, binary_type_mismatch, division_by_zero, duplicate_declaration,
    integer_overflow, modulo_by_zero, non_boolean_condition, not_callable, EvalError,
    EvalErrorKind, EvalResult,
};
pub use interpreter::{evaluate, Interpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use value::{ClosureValue, Value};
