//! Ordered todo list collection.
//!
//! # Responsibility
//! - Aggregate shared todo entries under one display title.
//! - Provide indexed access, bulk queries, filtering and removal.
//!
//! # Invariants
//! - Insertion order is significant and preserved by every operation
//!   except explicit removal.
//! - Indexed operations fail with [`ListError::IndexOutOfRange`] and leave
//!   the sequence untouched.
//! - Filtered views and snapshots alias the same entries as their source.

use crate::model::todo::{Todo, TodoHandle};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Collection error for indexed list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The requested index does not address an occupied position.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
        }
    }
}

impl Error for ListError {}

/// Ordered, mutable collection of shared todo entries.
///
/// The list owns its sequence of handles; the entries behind those handles
/// stay shared with filtered views, snapshots and caller-held clones, so a
/// flag flip is visible everywhere at once. Cloning a list clones the
/// handle sequence, not the entries.
///
/// Absent-result policy: lookups that can legitimately find nothing
/// (`first`, `last`, `shift`, `pop`, `find_by_title`) return `Option`;
/// only indexed access with an invalid index is a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    title: String,
    todos: Vec<TodoHandle>,
}

impl TodoList {
    /// Creates an empty list with the given display title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Returns the list display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends an entry at the end of the list.
    ///
    /// Accepts either a bare [`Todo`] (wrapped into a fresh handle) or an
    /// existing [`TodoHandle`] a caller wants to keep aliasing.
    pub fn add(&mut self, todo: impl Into<TodoHandle>) {
        self.todos.push(todo.into());
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the front entry, or `None` when the list is empty.
    pub fn first(&self) -> Option<TodoHandle> {
        self.todos.first().cloned()
    }

    /// Returns the back entry, or `None` when the list is empty.
    pub fn last(&self) -> Option<TodoHandle> {
        self.todos.last().cloned()
    }

    /// Returns the entry at `index`.
    ///
    /// # Errors
    /// - [`ListError::IndexOutOfRange`] when `index >= len`.
    pub fn item_at(&self, index: usize) -> ListResult<TodoHandle> {
        self.check_index(index)?;
        Ok(self.todos[index].clone())
    }

    /// Marks the entry at `index` completed.
    ///
    /// # Errors
    /// - [`ListError::IndexOutOfRange`] when `index >= len`.
    pub fn mark_done_at(&mut self, index: usize) -> ListResult<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the entry at `index` pending again.
    ///
    /// # Errors
    /// - [`ListError::IndexOutOfRange`] when `index >= len`.
    pub fn mark_undone_at(&mut self, index: usize) -> ListResult<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// Returns whether every entry is completed.
    ///
    /// Vacuously true for an empty list.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(TodoHandle::is_done)
    }

    /// Removes and returns the front entry, shifting the rest down.
    ///
    /// Returns `None` when the list is empty.
    pub fn shift(&mut self) -> Option<TodoHandle> {
        if self.todos.is_empty() {
            return None;
        }
        Some(self.todos.remove(0))
    }

    /// Removes and returns the back entry.
    ///
    /// Returns `None` when the list is empty.
    pub fn pop(&mut self) -> Option<TodoHandle> {
        self.todos.pop()
    }

    /// Removes and returns the entry at `index`, closing the gap.
    ///
    /// # Errors
    /// - [`ListError::IndexOutOfRange`] when `index >= len`; the sequence
    ///   is left unmodified.
    pub fn remove_at(&mut self, index: usize) -> ListResult<TodoHandle> {
        self.check_index(index)?;
        Ok(self.todos.remove(index))
    }

    /// Visits every entry in order, lending each out mutably.
    ///
    /// The `&mut self` receiver guarantees the visitor cannot add or
    /// remove entries of this list while iteration is in progress.
    pub fn for_each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Todo),
    {
        for todo in &self.todos {
            todo.with_mut(&mut visitor);
        }
    }

    /// Produces a new list, under the same title, holding the entries
    /// that satisfy `predicate`.
    ///
    /// Relative order is preserved and the source list is unmodified.
    /// The new list aliases the same entries, so mutations propagate
    /// between source and view.
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        let mut filtered = TodoList::new(self.title.clone());
        for todo in &self.todos {
            if todo.with(|entry| predicate(entry)) {
                filtered.add(todo.clone());
            }
        }
        filtered
    }

    /// Returns the first entry whose title matches exactly, or `None`.
    pub fn find_by_title(&self, title: &str) -> Option<TodoHandle> {
        self.todos
            .iter()
            .find(|todo| todo.with(|entry| entry.title() == title))
            .cloned()
    }

    /// Filtered view of the completed entries.
    pub fn all_done(&self) -> TodoList {
        self.filter(Todo::is_done)
    }

    /// Filtered view of the pending entries.
    pub fn all_not_done(&self) -> TodoList {
        self.filter(|todo| !todo.is_done())
    }

    /// Marks the first entry with a matching title completed.
    ///
    /// A missing title is a normal outcome, not a failure: the list is
    /// left untouched.
    pub fn mark_done(&mut self, title: &str) {
        if let Some(todo) = self.find_by_title(title) {
            todo.mark_done();
        }
    }

    /// Marks every entry completed.
    pub fn mark_all_done(&mut self) {
        self.for_each(Todo::mark_done);
    }

    /// Marks every entry pending again.
    pub fn mark_all_undone(&mut self) {
        self.for_each(Todo::mark_undone);
    }

    /// Returns an ordered snapshot of the current entries.
    ///
    /// The returned vector is structurally independent (growing or
    /// shrinking it never touches this list), while the entries inside
    /// remain shared handles.
    pub fn to_vec(&self) -> Vec<TodoHandle> {
        self.todos.clone()
    }

    fn check_index(&self, index: usize) -> ListResult<()> {
        if index >= self.todos.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.todos.len(),
            });
        }
        Ok(())
    }
}

impl Display for TodoList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            write!(f, "\n{todo}")?;
        }
        Ok(())
    }
}
