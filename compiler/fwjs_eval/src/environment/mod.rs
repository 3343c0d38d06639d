//! Environment for variable scoping in the evaluator.
//!
//! Environments form a parent-linked chain of frames, shared by
//! reference rather than cloned, so closures observe later mutations
//! to the scopes they capture.
//!
//! Scoping rules:
//! - **Lookup** climbs the chain (lexical scoping).
//! - **Update** mutates the nearest frame that defines the name; if no
//!   frame does, the binding is created in the *global* frame. This
//!   implicit-global behavior mirrors JS loose-mode assignment and is
//!   part of the language, not an accident.
//! - **Declare** always targets the current frame only, so inner scopes
//!   can shadow outer ones; redeclaring within one frame is an error.

// Rc is the intentional implementation detail of LocalScope<T>
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of LocalScope<T>"
)]

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fwjs_ir::Name;

use crate::value::Value;

/// Error returned by [`Environment::declare`] when declaration fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclareError {
    /// The name is already bound in the current frame.
    Duplicate,
}

/// A single-threaded scope wrapper for reference-counted interior
/// mutability.
///
/// Wraps `Rc<RefCell<T>>` and enforces that all scope allocations go
/// through the `LocalScope::new()` factory. Cloning shares the
/// allocation; this is what makes capture-by-reference work.
///
/// # Thread Safety
/// `LocalScope<T>` is NOT thread-safe. Evaluation is single-threaded,
/// so `Rc` is used instead of `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both wrappers point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single frame containing variable bindings.
#[derive(Debug, Default)]
pub struct Scope {
    /// Bindings in this frame (`FxHashMap` for faster hashing with
    /// `Name` keys). Names are unique per frame.
    bindings: FxHashMap<Name, Value>,
    /// Enclosing frame; `None` only for the global frame.
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new empty frame with no parent (a global frame).
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new frame with a parent.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Look up a name, delegating to the parent chain.
    fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().lookup(name))
    }

    /// Assign to the nearest frame that defines `name`.
    ///
    /// If no frame in the chain defines it, the binding is created in
    /// the global frame (the end of the chain).
    fn assign(&mut self, name: Name, value: Value) {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return;
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            // Global frame reached without finding the name: implicit
            // global creation.
            None => {
                self.bindings.insert(name, value);
            }
        }
    }

    /// Bind `name` in this frame only.
    fn declare(&mut self, name: Name, value: Value) -> Result<(), DeclareError> {
        if self.bindings.contains_key(&name) {
            return Err(DeclareError::Duplicate);
        }
        self.bindings.insert(name, value);
        Ok(())
    }
}

/// Handle on a frame in the scope chain.
///
/// Cloning an `Environment` shares the underlying frame; this is the
/// mechanism behind closure capture. A fresh chain starts with
/// [`Environment::global`]; [`Environment::child`] pushes a frame for a
/// branch body or function call.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create a fresh global environment.
    pub fn global() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// Create a child environment whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    /// Resolve a name against this frame and its ancestors.
    ///
    /// `None` means no frame defines the name. That is not an error at
    /// this layer; the evaluator maps it to `undefined`.
    #[inline]
    pub fn resolve(&self, name: Name) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Update the nearest binding of `name`, or create it in the global
    /// frame if the chain does not define it.
    #[inline]
    pub fn update(&self, name: Name, value: Value) {
        self.scope.borrow_mut().assign(name, value);
    }

    /// Declare `name` in the current frame.
    ///
    /// Shadowing an outer frame's binding is allowed; redeclaring
    /// within the current frame is not.
    #[inline]
    pub fn declare(&self, name: Name, value: Value) -> Result<(), DeclareError> {
        self.scope.borrow_mut().declare(name, value)
    }

    /// Returns `true` if both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        LocalScope::ptr_eq(&a.scope, &b.scope)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::global()
    }
}
