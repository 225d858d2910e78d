//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, Symbol};

/// Builder for constructing automata with a fluent API.
///
/// Declarations are collected as-is and only checked in [`build`], which
/// reports the first authoring mistake it finds.
///
/// [`build`]: AutomatonBuilder::build
pub struct AutomatonBuilder<S: Symbol> {
    name: String,
    states: Vec<(String, bool)>,
    initial: Option<String>,
    transitions: Vec<(String, S, String)>,
}

impl<S: Symbol> AutomatonBuilder<S> {
    /// Create a new builder for an automaton called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>, is_final: bool) -> Self {
        self.states.push((name.into(), is_final));
        self
    }

    /// Declare several states at once.
    pub fn states<I, N>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (N, bool)>,
        N: Into<String>,
    {
        self.states
            .extend(states.into_iter().map(|(name, is_final)| (name.into(), is_final)));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare `from --symbol--> to`.
    pub fn transition(mut self, from: impl Into<String>, symbol: S, to: impl Into<String>) -> Self {
        self.transitions.push((from.into(), symbol, to.into()));
        self
    }

    /// Declare the same target for several symbols leaving one state.
    pub fn transitions<I>(mut self, from: &str, symbols: I, to: &str) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for symbol in symbols {
            self.transitions.push((from.to_string(), symbol, to.to_string()));
        }
        self
    }

    /// Build the automaton with its cursor on the initial state.
    pub fn build(self) -> Result<Automaton<S>, BuildError> {
        let mut automaton = Automaton::new(self.name);

        for (name, is_final) in self.states {
            automaton.add_state(name, is_final)?;
        }

        let initial = self.initial.ok_or_else(|| BuildError::MissingInitialState {
            automaton: automaton.name().to_string(),
        })?;
        automaton.set_initial_state(&initial)?;

        for (from, symbol, to) in self.transitions {
            automaton.add_transition(&from, symbol, &to)?;
        }

        log::debug!(
            "built automaton '{}' with {} states and {} transitions",
            automaton.name(),
            automaton.states().len(),
            automaton.transition_count()
        );
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = AutomatonBuilder::<String>::new("no-initial")
            .state("q0", true)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::MissingInitialState { ref automaton }) if automaton == "no-initial"
        ));
    }

    #[test]
    fn builder_reports_duplicate_states() {
        let result = AutomatonBuilder::<String>::new("dup")
            .state("q0", false)
            .state("q0", true)
            .initial("q0")
            .build();

        assert!(matches!(result, Err(BuildError::DuplicateState { .. })));
    }

    #[test]
    fn builder_reports_unknown_transition_target() {
        let result = AutomatonBuilder::new("edges")
            .state("q0", false)
            .initial("q0")
            .transition("q0", sym("a"), "q1")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownState {
                automaton: "edges".to_string(),
                state: "q1".to_string(),
            }
        );
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let mut automaton = AutomatonBuilder::new("fluent")
            .states([("q0", false), ("q1", true)])
            .initial("q0")
            .transitions("q0", [sym("x"), sym("y")], "q1")
            .build()
            .unwrap();

        assert_eq!(automaton.transition_count(), 2);
        assert!(automaton.run([sym("x")]));
        assert!(automaton.run([sym("y")]));
        assert!(!automaton.run([sym("z")]));
    }

    #[test]
    fn built_automaton_starts_at_initial_state() {
        let automaton = AutomatonBuilder::<String>::new("start")
            .state("a", false)
            .state("b", true)
            .initial("b")
            .build()
            .unwrap();

        assert_eq!(automaton.current_state().map(|s| s.name()), Some("b"));
        assert!(automaton.is_accepting());
    }
}
