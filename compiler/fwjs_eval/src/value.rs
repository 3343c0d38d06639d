//! Runtime values for the FWJS evaluator.
//!
//! Values are a closed variant type and are immutable once constructed.
//! The mutable thing in FWJS is the environment a name is bound in, not
//! the value itself.

use std::fmt;
use std::rc::Rc;

use fwjs_ir::{ExprId, Name, StringInterner};

use crate::environment::Environment;

/// A function value: parameter names, body, and the environment that
/// was active at declaration time.
///
/// The environment is captured **by reference**: the closure and its
/// defining scope share one set of bindings, so mutations to captured
/// variables after the closure is created are visible at call time.
#[derive(Clone, Debug)]
pub struct ClosureValue {
    /// Ordered parameter names, resolved out of the arena at
    /// declaration time.
    pub params: Rc<[Name]>,
    /// Body expression in the defining arena.
    pub body: ExprId,
    /// Captured environment (shared, not snapshotted).
    pub env: Environment,
}

impl ClosureValue {
    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Closures compare by identity: same captured scope, same body.
impl PartialEq for ClosureValue {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body && Environment::ptr_eq(&self.env, &other.env)
    }
}

/// Runtime value in the FWJS evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// The language's `null`.
    Null,
    /// Result of resolving a variable no scope defines.
    ///
    /// Distinct from [`Value::Null`]: `null` is a value a program can
    /// write; `undefined` only arises from a failed lookup.
    Undefined,
    /// Function value paired with its captured environment.
    Closure(Rc<ClosureValue>),
}

impl Value {
    /// Create a closure value.
    #[inline]
    pub fn closure(params: impl Into<Rc<[Name]>>, body: ExprId, env: Environment) -> Self {
        Value::Closure(Rc::new(ClosureValue {
            params: params.into(),
            body,
            env,
        }))
    }

    /// The value's type name, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Closure(_) => "function",
        }
    }

    /// Render the value as program output.
    ///
    /// Closures need the interner to render their parameter names, so
    /// this is a method rather than a `Display` impl.
    pub fn display(&self, interner: &StringInterner) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Undefined => "undefined".to_string(),
            Value::Closure(c) => {
                let params: Vec<&str> =
                    c.params.iter().map(|&name| interner.lookup(name)).collect();
                format!("function({})", params.join(", "))
            }
        }
    }
}

impl fmt::Display for Value {
    /// Interner-free rendering; closures show arity only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::Closure(c) => write!(f, "function/{}", c.arity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Bool(false).type_name(), "bool");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Undefined.type_name(), "undefined");
    }

    #[test]
    fn null_and_undefined_are_distinct() {
        assert_ne!(Value::Null, Value::Undefined);
    }

    #[test]
    fn display_renders_primitives() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Undefined.to_string(), "undefined");
    }

    #[test]
    fn closure_display_renders_params() {
        let interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let env = Environment::global();
        let f = Value::closure(vec![a, b], ExprId::new(0), env);
        assert_eq!(f.display(&interner), "function(a, b)");
        assert_eq!(f.to_string(), "function/2");
    }

    #[test]
    fn closures_compare_by_identity() {
        let env = Environment::global();
        let f = Value::closure(Vec::new(), ExprId::new(0), env.clone());
        let g = f.clone();
        let h = Value::closure(Vec::new(), ExprId::new(0), env.child());
        assert_eq!(f, g);
        assert_ne!(f, h);
    }
}
