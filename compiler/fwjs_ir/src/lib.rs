//! FWJS IR - Expression AST and interned names for the FWJS evaluator.
//!
//! FWJS (Featherweight JavaScript) is a small dynamically-typed
//! expression language: integers, booleans, null, variables,
//! arithmetic and comparison operators, conditionals, loops,
//! sequencing, declaration/assignment, and first-class functions with
//! lexical closures.
//!
//! This crate holds what the front-end produces and the evaluator
//! consumes:
//! - [`Name`] / [`StringInterner`]: compact interned identifiers
//! - [`Expr`] / [`ExprArena`]: arena-allocated expression trees
//! - [`BinaryOp`]: the operator set

mod arena;
mod ast;
mod interner;
mod name;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprId, ExprRange, ParamRange};
pub use interner::{InternError, StringInterner};
pub use name::Name;
