//! Tree-walking interpreter for FWJS.
//!
//! Every node kind satisfies one contract: evaluate against an
//! environment, produce a value or a fatal error. Evaluation is
//! synchronous and single-threaded; each `eval` call runs to
//! completion before its parent resumes.
//!
//! # Environment policy
//!
//! The environment-creation rules differ by construct, and the
//! differences are the language's scoping semantics:
//!
//! - `if`/`else`: each branch runs in a fresh child scope, so
//!   declarations inside a branch don't leak out.
//! - `while`: the body runs in the *loop's* scope, reused across
//!   iterations, so loop-local accumulation works and a `var` in the
//!   body collides with itself on the second iteration.
//! - Function calls: the call scope's parent is the closure's
//!   *captured* environment, never the caller's. This is what makes
//!   closures lexically rather than dynamically scoped.

use fwjs_ir::{BinaryOp, Expr, ExprArena, ExprId, ExprRange, Name, StringInterner};

use crate::environment::{DeclareError, Environment};
use crate::errors::{
    arity_mismatch, duplicate_declaration, non_boolean_condition, not_callable, EvalError,
    EvalResult,
};
use crate::operators::evaluate_binary;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::{ClosureValue, Value};

/// Tree-walking evaluator for one program.
///
/// Borrows the arena and interner the front-end produced; owns the
/// current environment handle and the print sink.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    print_handler: SharedPrintHandler,
    /// Current environment. Swapped, not pushed/popped, when a
    /// construct requires a different scope for a sub-tree.
    pub env: Environment,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with a fresh global environment and
    /// stdout printing.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Interpreter {
            interner,
            arena,
            print_handler: stdout_handler(),
            env: Environment::global(),
        }
    }

    /// Redirect `print` output.
    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    /// Evaluate an expression in the current environment.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        // Expr is Copy; taking it by value frees the arena borrow for
        // the recursive calls below.
        let expr = *self.arena.get_expr(id);
        match expr {
            Expr::Int(n) => Ok(Value::Int(n)),
            Expr::Bool(b) => Ok(Value::Bool(b)),
            Expr::Null => Ok(Value::Null),

            // An unresolved name is not an error; it reads as the
            // `undefined` sentinel, the way JS treats missing globals.
            Expr::Var(name) => Ok(self.env.resolve(name).unwrap_or(Value::Undefined)),

            Expr::Print(operand) => self.eval_print(operand),
            Expr::Binary { op, left, right } => self.eval_binary(op, left, right),
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => self.eval_if(cond, then_branch, else_branch),
            Expr::While { cond, body } => self.eval_while(cond, body),
            Expr::Seq { first, second } => self.eval_seq(first, second),
            Expr::VarDecl { name, init } => self.eval_var_decl(name, init),
            Expr::Assign { name, expr } => self.eval_assign(name, expr),
            Expr::Function { params, body } => {
                // Capture the current environment by reference, not by
                // copy: the closure shares its defining scope.
                let params = self.arena.get_params(params).to_vec();
                Ok(Value::closure(params, body, self.env.clone()))
            }
            Expr::Call { callee, args } => self.eval_call(callee, args),
        }
    }

    /// Evaluate `id` with `env` as the current environment, restoring
    /// the previous environment afterwards.
    fn eval_in(&mut self, id: ExprId, env: Environment) -> EvalResult {
        let saved = std::mem::replace(&mut self.env, env);
        let result = self.eval(id);
        self.env = saved;
        result
    }

    fn eval_print(&mut self, operand: ExprId) -> EvalResult {
        let value = self.eval(operand)?;
        self.print_handler.println(&value.display(self.interner));
        // print passes its value through.
        Ok(value)
    }

    fn eval_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        // Left first, then right; no short-circuit, even for
        // comparisons. Type checking happens after both reduce.
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;
        evaluate_binary(&lhs, &rhs, op)
    }

    fn eval_if(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> EvalResult {
        let cond = self.eval(cond)?;
        match cond {
            // Integer zero is rejected outright: FWJS does not coerce
            // integers to booleans, and `if (0)` is the canonical way
            // a program would rely on that coercion.
            Value::Int(0) => Err(non_boolean_condition(cond.type_name())),
            Value::Bool(true) => {
                let branch_env = self.env.child();
                self.eval_in(then_branch, branch_env)
            }
            // Bool(false) and every remaining non-boolean (nonzero
            // int, null, undefined, closure) select the else branch.
            _ => {
                let branch_env = self.env.child();
                self.eval_in(else_branch, branch_env)
            }
        }
    }

    fn eval_while(&mut self, cond: ExprId, body: ExprId) -> EvalResult {
        loop {
            match self.eval(cond)? {
                Value::Bool(true) => {
                    // Same environment every iteration: no fresh scope
                    // per pass, so body-local declarations persist.
                    self.eval(body)?;
                }
                Value::Bool(false) => return Ok(Value::Null),
                other => return Err(non_boolean_condition(other.type_name())),
            }
        }
    }

    fn eval_seq(&mut self, first: Option<ExprId>, second: Option<ExprId>) -> EvalResult {
        // A missing first slot ends the sequence: the second is never
        // evaluated, so its side effects do not happen.
        let Some(first) = first else {
            return Ok(Value::Null);
        };
        self.eval(first)?;
        match second {
            Some(second) => self.eval(second),
            None => Ok(Value::Null),
        }
    }

    fn eval_var_decl(&mut self, name: Name, init: Option<ExprId>) -> EvalResult {
        let value = match init {
            Some(init) => self.eval(init)?,
            None => Value::Null,
        };
        self.declare(name, value.clone())?;
        Ok(value)
    }

    fn eval_assign(&mut self, name: Name, expr: Option<ExprId>) -> EvalResult {
        // A missing right-hand side yields null without touching the
        // environment.
        let Some(expr) = expr else {
            return Ok(Value::Null);
        };
        let value = self.eval(expr)?;
        self.env.update(name, value.clone());
        Ok(value)
    }

    fn eval_call(&mut self, callee: ExprId, args: ExprRange) -> EvalResult {
        let closure = match self.eval(callee)? {
            Value::Closure(closure) => closure,
            other => return Err(not_callable(other.type_name())),
        };

        // Arguments evaluate left-to-right in the caller's environment.
        let arg_ids = self.arena.get_expr_list(args).to_vec();
        let mut arg_values = Vec::with_capacity(arg_ids.len());
        for arg in arg_ids {
            arg_values.push(self.eval(arg)?);
        }

        self.apply(&closure, arg_values)
    }

    /// Apply a closure to already-evaluated arguments.
    ///
    /// Arity is strict: any mismatch between declared parameters and
    /// supplied arguments is an error. Parameters are declared into
    /// one call frame, so a repeated parameter name is a
    /// `DuplicateDeclaration` error at call time.
    #[tracing::instrument(level = "debug", skip_all, fields(arity = closure.arity()))]
    fn apply(&mut self, closure: &ClosureValue, args: Vec<Value>) -> EvalResult {
        if closure.arity() != args.len() {
            return Err(arity_mismatch(closure.arity(), args.len()));
        }

        // The call scope chains to the closure's captured environment,
        // never the caller's.
        let call_env = closure.env.child();
        for (&param, arg) in closure.params.iter().zip(args) {
            call_env
                .declare(param, arg)
                .map_err(|DeclareError::Duplicate| {
                    duplicate_declaration(self.interner.lookup(param))
                })?;
        }

        self.eval_in(closure.body, call_env)
    }

    fn declare(&mut self, name: Name, value: Value) -> Result<(), EvalError> {
        self.env
            .declare(name, value)
            .map_err(|DeclareError::Duplicate| duplicate_declaration(self.interner.lookup(name)))
    }
}

/// Evaluate a program rooted at `root` with a fresh global environment,
/// printing to stdout.
///
/// This is the host entry point: the front-end hands over the arena,
/// the interner, and the root of the top-level sequence.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(interner: &StringInterner, arena: &ExprArena, root: ExprId) -> EvalResult {
    Interpreter::new(interner, arena).eval(root)
}
