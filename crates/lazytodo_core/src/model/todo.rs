//! Todo entry domain model.
//!
//! # Responsibility
//! - Define the single-entry record (title + completion flag).
//! - Provide the shared handle used by lists, filtered views and callers.
//!
//! # Invariants
//! - `title` is fixed at construction and never mutated afterwards.
//! - `done` changes only through the mark operations.
//! - All clones of a `TodoHandle` observe the same underlying entry.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Marker rendered for a completed entry.
pub const DONE_MARKER: char = 'X';

/// Marker rendered for a pending entry.
pub const UNDONE_MARKER: char = ' ';

/// A single todo entry.
///
/// Entries start pending. Title well-formedness (non-empty, meaningful
/// text) is a caller responsibility and is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    title: String,
    done: bool,
}

impl Todo {
    /// Creates a pending entry with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// Wraps this entry in a shared handle.
    pub fn into_handle(self) -> TodoHandle {
        TodoHandle::new(self)
    }

    /// Marks the entry completed. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the entry pending again. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Returns the current completion flag.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the entry title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.done { DONE_MARKER } else { UNDONE_MARKER };
        write!(f, "[{marker}] {}", self.title)
    }
}

/// Shared, interior-mutable handle to a [`Todo`] entry.
///
/// A list stores handles, not entries, so the source list, any filtered
/// view, and any external clone a caller keeps all observe the same
/// mutable state. Cloning a handle is cheap and never copies the entry.
///
/// # Invariants
/// - Single-threaded: the handle is deliberately `Rc`-based and not `Send`.
/// - Deserialization allocates a fresh entry; handle sharing is a
///   live-object property, not a wire property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoHandle(Rc<RefCell<Todo>>);

impl TodoHandle {
    /// Wraps an entry in a new shared handle.
    pub fn new(todo: Todo) -> Self {
        Self(Rc::new(RefCell::new(todo)))
    }

    /// Marks the entry completed.
    pub fn mark_done(&self) {
        self.0.borrow_mut().mark_done();
    }

    /// Marks the entry pending again.
    pub fn mark_undone(&self) {
        self.0.borrow_mut().mark_undone();
    }

    /// Returns the entry's current completion flag.
    pub fn is_done(&self) -> bool {
        self.0.borrow().is_done()
    }

    /// Returns an owned copy of the entry title.
    pub fn title(&self) -> String {
        self.0.borrow().title().to_owned()
    }

    /// Lends the entry out read-only for the duration of `f`.
    ///
    /// # Contract
    /// - `f` must not re-enter mutation on the same handle.
    pub fn with<R>(&self, f: impl FnOnce(&Todo) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Lends the entry out mutably for the duration of `f`.
    ///
    /// # Contract
    /// - `f` must not re-enter this handle through another clone.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Todo) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Returns whether two handles point at the same underlying entry.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Todo> for TodoHandle {
    fn from(todo: Todo) -> Self {
        Self::new(todo)
    }
}

impl Display for TodoHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&*self.0.borrow(), f)
    }
}
