//! Arena storage for expression trees.
//!
//! The parser allocates every node into one [`ExprArena`] per program;
//! the evaluator reads it immutably. Side tables hold variable-length
//! children (call arguments, parameter names) as flat ranges.

use crate::{Expr, ExprId, ExprRange, Name, ParamRange};

/// Arena of expression nodes for one program.
#[derive(Default, Debug)]
pub struct ExprArena {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (for `Call` arguments).
    expr_lists: Vec<ExprId>,

    /// Flattened parameter-name lists (for `Function` declarations).
    params: Vec<Name>,
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    ///
    /// # Panics
    /// Panics if the arena holds more than `u32::MAX` expressions.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let raw = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32 capacity"));
        self.exprs.push(expr);
        ExprId::new(raw)
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of expressions in the arena.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Returns `true` if no expressions have been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Allocate an expression list (call arguments), returning its range.
    ///
    /// # Panics
    /// Panics if a single list exceeds `u16::MAX` entries.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = u32::try_from(self.expr_lists.len())
            .unwrap_or_else(|_| panic!("expression-list table exceeded u32 capacity"));
        self.expr_lists.extend(exprs);
        let len = u16::try_from(self.expr_lists.len() - start as usize)
            .unwrap_or_else(|_| panic!("expression list exceeded u16 capacity"));
        ExprRange::new(start, len)
    }

    /// Get an expression list by range.
    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        let end = start + range.len as usize;
        &self.expr_lists[start..end]
    }

    /// Allocate a parameter-name list, returning its range.
    ///
    /// # Panics
    /// Panics if a single parameter list exceeds `u16::MAX` entries.
    pub fn alloc_params(&mut self, params: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = u32::try_from(self.params.len())
            .unwrap_or_else(|_| panic!("parameter table exceeded u32 capacity"));
        self.params.extend(params);
        let len = u16::try_from(self.params.len() - start as usize)
            .unwrap_or_else(|_| panic!("parameter list exceeded u16 capacity"));
        ParamRange::new(start, len)
    }

    /// Get a parameter-name list by range.
    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        let start = range.start as usize;
        let end = start + range.len as usize;
        &self.params[start..end]
    }
}
