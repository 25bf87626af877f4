//! Environment for variable scoping in the interpreter.
//!
//! The environment is a chain of frames linked by parent pointers. Frames
//! are reference-counted and interior-mutable: a closure keeps its defining
//! frame alive, and a write through any holder is seen by all of them.
//!
//! `resolve_var`, `update_var` and `create_var` are the whole scoping
//! contract; nothing else reads or writes bindings.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fwjs_ir::{Name, StringLookup};

use crate::{ensure_sufficient_stack, Value};

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so that every frame allocation goes through
/// `LocalScope::new()`. Not thread-safe: the interpreter runs on one thread,
/// and a concurrent host must add its own synchronization around frames.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &LocalScope<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
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
    /// Variable bindings in this frame.
    bindings: FxHashMap<Name, Value>,
    /// Enclosing frame; `None` for the global frame.
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new empty frame with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new frame nested in `parent`.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Look up a variable, walking outward through enclosing frames.
    ///
    /// A miss in this frame returns the enclosing frame's answer.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Check if a variable is bound in this frame (not enclosing ones).
    #[inline]
    pub fn has_local(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Number of bindings in this frame.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind or overwrite a name in this frame.
    fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }
}

// Frames hold closures that hold frames, and frames hold their parents, so
// releasing the last handle can cascade through an arbitrarily long chain.
impl Drop for Scope {
    fn drop(&mut self) {
        let bindings = std::mem::take(&mut self.bindings);
        let parent = self.parent.take();
        ensure_sufficient_stack(move || {
            drop(bindings);
            drop(parent);
        });
    }
}

/// Error returned by [`Environment::create_var`] when the current frame
/// already binds the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedeclarationError {
    pub name: Name,
}

/// Handle to the current frame of a scope chain.
///
/// Cloning an `Environment` shares the frame; it does not copy bindings.
#[derive(Clone, Debug)]
pub struct Environment {
    frame: LocalScope<Scope>,
}

impl Environment {
    /// Create a fresh global environment with no enclosing frame.
    pub fn new() -> Self {
        Environment {
            frame: LocalScope::new(Scope::new()),
        }
    }

    /// Create a new frame whose enclosing frame is this one.
    ///
    /// Used once per function activation, with the closure's captured
    /// environment as `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment {
            frame: LocalScope::new(Scope::with_parent(self.frame.clone())),
        }
    }

    /// Whether this is the global frame.
    pub fn is_global(&self) -> bool {
        self.frame.borrow().parent.is_none()
    }

    /// Number of frames from here to the global frame, inclusive.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Whether two environments share the same current frame.
    pub fn same_frame(&self, other: &Environment) -> bool {
        self.frame.ptr_eq(&other.frame)
    }

    /// Read a variable.
    ///
    /// The innermost binding wins; a name bound nowhere in the chain reads
    /// as `Null`, never as an error.
    pub fn resolve_var(&self, name: Name) -> Value {
        self.frame.borrow().lookup(name).unwrap_or(Value::Null)
    }

    /// Write a variable.
    ///
    /// Overwrites the nearest frame that binds `name`. If no frame does, the
    /// binding is created in the global frame (an implicit global).
    pub fn update_var(&self, name: Name, value: Value) {
        let target = match self.binding_frame(name) {
            Some(frame) => frame,
            None => {
                tracing::trace!(?name, "assignment creates implicit global");
                self.global_frame()
            }
        };
        target.borrow_mut().define(name, value);
    }

    /// Declare a variable in the current frame only.
    ///
    /// Fails if the current frame already binds `name`. Enclosing frames are
    /// not consulted, so shadowing is always allowed.
    pub fn create_var(&self, name: Name, value: Value) -> Result<(), RedeclarationError> {
        let mut frame = self.frame.borrow_mut();
        if frame.has_local(name) {
            return Err(RedeclarationError { name });
        }
        tracing::trace!(?name, "declare");
        frame.define(name, value);
        Ok(())
    }

    /// Render the chain for debugging, global frame first.
    pub fn display<'a, I: StringLookup>(&'a self, interner: &'a I) -> EnvDisplay<'a, I> {
        EnvDisplay {
            env: self,
            interner,
        }
    }

    /// Frames from the current one outward.
    fn frames(&self) -> impl Iterator<Item = LocalScope<Scope>> {
        std::iter::successors(Some(self.frame.clone()), |frame| {
            frame.borrow().parent.clone()
        })
    }

    /// Nearest frame that binds `name`.
    fn binding_frame(&self, name: Name) -> Option<LocalScope<Scope>> {
        self.frames().find(|frame| frame.borrow().has_local(name))
    }

    fn global_frame(&self) -> LocalScope<Scope> {
        self.frames().last().unwrap_or_else(|| self.frame.clone())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug rendering of an [`Environment`].
///
/// Each frame prints as `{ {name=value, ...} }`, outermost first, separated
/// by spaces. Bindings within a frame are ordered by name.
pub struct EnvDisplay<'a, I> {
    env: &'a Environment,
    interner: &'a I,
}

impl<I: StringLookup> fmt::Display for EnvDisplay<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frames: Vec<_> = self.env.frames().collect();
        frames.reverse();
        for (i, frame) in frames.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let scope = frame.borrow();
            let mut bindings: Vec<(&str, &Value)> = scope
                .bindings
                .iter()
                .map(|(name, value)| (self.interner.lookup(*name), value))
                .collect();
            bindings.sort_by(|a, b| a.0.cmp(b.0));

            f.write_str("{ {")?;
            for (j, (name, value)) in bindings.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}={value}")?;
            }
            f.write_str("} }")?;
        }
        Ok(())
    }
}
