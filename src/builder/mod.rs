//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and macros for declaring automata
//! and their alphabets, plus helpers for common machine shapes.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::AutomatonBuilder;

use crate::core::{Automaton, Symbol};

/// Build a linear chain that accepts exactly `sequence`.
///
/// A sequence of length `k` becomes states `q0..qk` where only `qk` is
/// final and `qj --sequence[j]--> q(j+1)`.
///
/// # Example
///
/// ```
/// use clausula::builder::linear_chain;
///
/// let word: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
/// let mut chain = linear_chain("ab", &word).unwrap();
///
/// assert_eq!(chain.states().len(), 3);
/// assert!(chain.run(&word));
/// assert!(!chain.run(&word[..1]));
/// ```
pub fn linear_chain<S: Symbol>(
    name: impl Into<String>,
    sequence: &[S],
) -> Result<Automaton<S>, BuildError> {
    let length = sequence.len();
    let builder = (0..=length).fold(AutomatonBuilder::new(name), |builder, j| {
        builder.state(format!("q{j}"), j == length)
    });

    sequence
        .iter()
        .enumerate()
        .fold(builder.initial("q0"), |builder, (j, symbol)| {
            builder.transition(format!("q{j}"), symbol.clone(), format!("q{}", j + 1))
        })
        .build()
}
