//! Core domain logic for LazyTodo.
//! This crate is the single source of truth for list-ordering invariants.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListError, ListResult, TodoList};
pub use model::todo::{Todo, TodoHandle, DONE_MARKER, UNDONE_MARKER};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
