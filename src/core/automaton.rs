//! Deterministic finite automaton with a movable cursor.
//!
//! States live in a table owned by the automaton and refer to their peers by
//! [`StateId`] index, so transitions never own the states they point at.

use super::symbol::Symbol;
use crate::builder::BuildError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Index of a state inside the automaton that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(usize);

impl StateId {
    /// Position of the state in its automaton's state table.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single automaton state and its outgoing transitions.
///
/// A state holds at most one target per symbol. A missing entry means there
/// is no transition, which is a normal outcome and not an error.
#[derive(Clone, Debug)]
pub struct StateNode<S: Symbol> {
    name: String,
    is_final: bool,
    transitions: HashMap<S, StateId>,
}

impl<S: Symbol> StateNode<S> {
    fn new(name: String, is_final: bool) -> Self {
        Self {
            name,
            is_final,
            transitions: HashMap::new(),
        }
    }

    /// Name given to the state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the automaton accepts when its cursor rests here.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Target of the transition on `symbol`, if any.
    pub fn next(&self, symbol: &S) -> Option<StateId> {
        self.transitions.get(symbol).copied()
    }

    /// Outgoing transitions in unspecified order.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, StateId)> {
        self.transitions.iter().map(|(symbol, target)| (symbol, *target))
    }
}

/// Deterministic finite automaton.
///
/// Construction (`add_state`, `set_initial_state`, `add_transition`) happens
/// once; analysis only moves the cursor through `reset`, `step` and `run`.
///
/// # Example
///
/// ```rust
/// use clausula::core::Automaton;
///
/// let mut dfa: Automaton<String> = Automaton::new("ab");
/// dfa.add_state("start", false).unwrap();
/// dfa.add_state("mid", false).unwrap();
/// dfa.add_state("done", true).unwrap();
/// dfa.set_initial_state("start").unwrap();
/// dfa.add_transition("start", "a".to_string(), "mid").unwrap();
/// dfa.add_transition("mid", "b".to_string(), "done").unwrap();
///
/// assert!(dfa.run(&["a".to_string(), "b".to_string()]));
/// assert!(!dfa.run(&["a".to_string()]));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: Symbol> {
    name: String,
    states: Vec<StateNode<S>>,
    index: HashMap<String, StateId>,
    initial: Option<StateId>,
    current: Option<StateId>,
}

impl<S: Symbol> Automaton<S> {
    /// Create an empty automaton with no states and no cursor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            index: HashMap::new(),
            initial: None,
            current: None,
        }
    }

    /// Add a state, failing if the name is already taken.
    pub fn add_state(
        &mut self,
        name: impl Into<String>,
        is_final: bool,
    ) -> Result<StateId, BuildError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(BuildError::DuplicateState {
                automaton: self.name.clone(),
                state: name,
            });
        }

        let id = StateId(self.states.len());
        self.index.insert(name.clone(), id);
        self.states.push(StateNode::new(name, is_final));
        Ok(id)
    }

    /// Designate the initial state and move the cursor onto it.
    ///
    /// The initial state can only be chosen once.
    pub fn set_initial_state(&mut self, name: &str) -> Result<StateId, BuildError> {
        let id = self.resolve(name)?;
        if let Some(existing) = self.initial {
            return Err(BuildError::InitialStateRedefined {
                automaton: self.name.clone(),
                existing: self.states[existing.0].name.clone(),
                requested: name.to_string(),
            });
        }

        self.initial = Some(id);
        self.current = Some(id);
        Ok(id)
    }

    /// Add `from --symbol--> to`. A second transition for the same
    /// `(from, symbol)` pair replaces the first.
    pub fn add_transition(&mut self, from: &str, symbol: S, to: &str) -> Result<(), BuildError> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        if let Some(previous) = self.states[source.0].transitions.insert(symbol.clone(), target) {
            log::debug!(
                "{}: transition {} --{}--> {} replaced by --{}--> {}",
                self.name,
                from,
                symbol.name(),
                self.states[previous.0].name,
                symbol.name(),
                to
            );
        }
        Ok(())
    }

    /// Move the cursor back to the initial state.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Consume one symbol.
    ///
    /// Returns `false` and leaves the cursor where it was when there is no
    /// cursor or no transition on `symbol`.
    pub fn step(&mut self, symbol: &S) -> bool {
        let Some(current) = self.current else {
            return false;
        };

        match self.states[current.0].next(symbol) {
            Some(next) => {
                log::trace!(
                    "{}: {} --{}--> {}",
                    self.name,
                    self.states[current.0].name,
                    symbol.name(),
                    self.states[next.0].name
                );
                self.current = Some(next);
                true
            }
            None => {
                log::trace!(
                    "{}: no transition from {} on {}",
                    self.name,
                    self.states[current.0].name,
                    symbol.name()
                );
                false
            }
        }
    }

    /// Whether the cursor rests on a final state.
    pub fn is_accepting(&self) -> bool {
        self.current.is_some_and(|current| self.states[current.0].is_final)
    }

    /// Reset, then consume the whole sequence.
    ///
    /// Stops at the first symbol without a transition and reports rejection;
    /// otherwise reports whether the last state reached is final.
    pub fn run<I>(&mut self, symbols: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        self.reset();
        for symbol in symbols {
            if !self.step(symbol.borrow()) {
                return false;
            }
        }
        self.is_accepting()
    }

    /// Name given at construction, used in logs and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a state by id.
    pub fn state(&self, id: StateId) -> Option<&StateNode<S>> {
        self.states.get(id.0)
    }

    /// Look up a state id by name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    /// All states in insertion order.
    pub fn states(&self) -> &[StateNode<S>] {
        &self.states
    }

    /// The initial state, once set.
    pub fn initial_state(&self) -> Option<&StateNode<S>> {
        self.initial.map(|id| &self.states[id.0])
    }

    /// State under the cursor.
    pub fn current_state(&self) -> Option<&StateNode<S>> {
        self.current.map(|id| &self.states[id.0])
    }

    /// Id of the state under the cursor.
    pub fn current_id(&self) -> Option<StateId> {
        self.current
    }

    /// Number of edges across all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|state| state.transitions.len()).sum()
    }

    /// Every edge as `(from, symbol, to)` state names, grouped by source
    /// state in insertion order.
    pub fn transitions(&self) -> Vec<(&str, &S, &str)> {
        self.states
            .iter()
            .flat_map(|state| {
                state.transitions().map(move |(symbol, target)| {
                    (
                        state.name.as_str(),
                        symbol,
                        self.states[target.0].name.as_str(),
                    )
                })
            })
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<StateId, BuildError> {
        self.state_id(name).ok_or_else(|| BuildError::UnknownState {
            automaton: self.name.clone(),
            state: name.to_string(),
        })
    }
}

impl<S: Symbol> fmt::Display for Automaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states = self
            .states
            .iter()
            .map(|state| {
                if state.is_final {
                    format!("{}*", state.name)
                } else {
                    state.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        let initial = self
            .initial_state()
            .map(StateNode::name)
            .unwrap_or("None");
        write!(
            f,
            "Automaton({}, states=[{}], initial={})",
            self.name, states, initial
        )
    }
}
