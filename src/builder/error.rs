//! Build errors for automaton construction.

use thiserror::Error;

/// Errors that can occur while an automaton is being built.
///
/// These only arise from authoring mistakes in a transition table. An
/// automaton that built successfully never produces them during analysis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("State '{state}' already exists in automaton '{automaton}'")]
    DuplicateState { automaton: String, state: String },

    #[error("State '{state}' does not exist in automaton '{automaton}'")]
    UnknownState { automaton: String, state: String },

    #[error("Automaton '{automaton}' already starts at '{existing}', cannot set '{requested}'")]
    InitialStateRedefined {
        automaton: String,
        existing: String,
        requested: String,
    },

    #[error("Automaton '{automaton}' has no initial state, call .initial(name) before .build()")]
    MissingInitialState { automaton: String },
}
