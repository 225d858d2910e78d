//! Core automaton types.
//!
//! This module contains the domain-free engine:
//! - The alphabet abstraction via the `Symbol` trait
//! - The deterministic automaton with its reset/step/run cursor
//! - Append-only traversal paths for diagnostics
//!
//! Nothing in here knows about words, categories or roles.

mod automaton;
mod path;
mod symbol;

pub use automaton::{Automaton, StateId, StateNode};
pub use path::{Path, TraversalStep};
pub use symbol::Symbol;
