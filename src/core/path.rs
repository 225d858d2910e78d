//! Traversal path tracking.
//!
//! A path records the states an automaton visited during one run together
//! with the symbol that caused each entry. It is append-only and exists for
//! diagnostics and rendering.

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// One visited state and the symbol that led into it.
///
/// The first step of a path is the initial state and carries no symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TraversalStep<S: Symbol> {
    /// Name of the state entered
    pub state: String,
    /// Symbol consumed to enter the state, `None` for the initial state
    pub symbol: Option<S>,
}

/// Ordered sequence of traversal steps.
///
/// # Example
///
/// ```rust
/// use clausula::core::{Path, TraversalStep};
///
/// let path: Path<String> = Path::starting_at("q0")
///     .record(TraversalStep { state: "q1".into(), symbol: Some("a".into()) })
///     .record(TraversalStep { state: "q2".into(), symbol: Some("b".into()) });
///
/// assert_eq!(path.states(), vec!["q0", "q1", "q2"]);
/// assert_eq!(path.final_state(), Some("q2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Path<S: Symbol> {
    steps: Vec<TraversalStep<S>>,
}

impl<S: Symbol> Default for Path<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> Path<S> {
    /// Create an empty path.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Create a path whose first step is the initial state `state`.
    pub fn starting_at(state: impl Into<String>) -> Self {
        Self {
            steps: vec![TraversalStep {
                state: state.into(),
                symbol: None,
            }],
        }
    }

    /// Append a step, returning the extended path.
    pub fn record(mut self, step: TraversalStep<S>) -> Self {
        self.steps.push(step);
        self
    }

    pub(crate) fn push(&mut self, state: impl Into<String>, symbol: S) {
        self.steps.push(TraversalStep {
            state: state.into(),
            symbol: Some(symbol),
        });
    }

    /// All steps in order.
    pub fn steps(&self) -> &[TraversalStep<S>] {
        &self.steps
    }

    /// Names of the visited states in order.
    pub fn states(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.state.as_str()).collect()
    }

    /// Edges walked as `(from, symbol, to)`.
    ///
    /// Steps without a symbol (only the initial one in a well-formed path)
    /// do not produce an edge.
    pub fn transitions(&self) -> Vec<(&str, &S, &str)> {
        self.steps
            .windows(2)
            .filter_map(|pair| {
                pair[1]
                    .symbol
                    .as_ref()
                    .map(|symbol| (pair[0].state.as_str(), symbol, pair[1].state.as_str()))
            })
            .collect()
    }

    /// Name of the last state reached.
    pub fn final_state(&self) -> Option<&str> {
        self.steps.last().map(|step| step.state.as_str())
    }

    /// Number of steps, the initial state included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no state has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
