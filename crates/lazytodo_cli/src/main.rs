//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lazytodo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use lazytodo_core::{Todo, TodoList};

fn main() {
    println!("lazytodo_core ping={}", lazytodo_core::ping());
    println!("lazytodo_core version={}", lazytodo_core::core_version());

    let mut list = TodoList::new("Today's Todos");
    list.add(Todo::new("Buy milk"));
    list.add(Todo::new("Clean room"));
    list.add(Todo::new("Go to the gym"));
    list.add(Todo::new("Go shopping"));

    list.mark_done("Clean room");
    list.mark_done("Buy milk");

    println!("{list}");
    println!("all_done={}", list.is_done());

    if let Some(front) = list.shift() {
        println!("shifted={front}");
    }
    println!("pending={}", list.all_not_done().len());
}
