//! Pattern bank matching over category sequences.
//!
//! Each bank entry is compiled into its own linear-chain automaton. A
//! category sequence is tried against the chains in bank order and the first
//! chain that accepts wins.

mod bank;

pub use bank::STANDARD_PATTERNS;

use crate::builder::{linear_chain, BuildError};
use crate::core::Automaton;
use crate::lexicon::Category;
use serde::{Deserialize, Serialize};

/// A bank entry that accepted the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Position of the entry in the bank
    pub index: usize,
    /// The accepted category sequence
    pub pattern: Vec<Category>,
}

#[derive(Clone, Debug)]
struct BankEntry {
    pattern: Vec<Category>,
    automaton: Automaton<Category>,
}

/// Ordered collection of pattern automata.
///
/// # Example
///
/// ```rust
/// use clausula::lexicon::Category::*;
/// use clausula::patterns::PatternBank;
///
/// let mut bank = PatternBank::standard().unwrap();
/// let found = bank.find(&[Noun, Verb, Article, Noun, Punctuation]).unwrap();
///
/// assert_eq!(found.index, 1);
/// assert!(bank.find(&[Verb, Noun]).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PatternBank {
    entries: Vec<BankEntry>,
}

impl PatternBank {
    /// Compile one chain per pattern, keeping the given order.
    pub fn new<I, P>(patterns: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[Category]>,
    {
        let entries = patterns
            .into_iter()
            .enumerate()
            .map(|(index, pattern)| {
                let pattern = pattern.as_ref().to_vec();
                let automaton = linear_chain(format!("pattern-{index}"), &pattern)?;
                Ok(BankEntry { pattern, automaton })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        log::debug!("compiled pattern bank with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Compile [`STANDARD_PATTERNS`].
    pub fn standard() -> Result<Self, BuildError> {
        Self::new(STANDARD_PATTERNS.iter().copied())
    }

    /// Number of entries, repeats included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bank has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patterns in bank order.
    pub fn patterns(&self) -> impl Iterator<Item = &[Category]> {
        self.entries.iter().map(|entry| entry.pattern.as_slice())
    }

    /// Automaton compiled for the entry at `index`.
    pub fn automaton(&self, index: usize) -> Option<&Automaton<Category>> {
        self.entries.get(index).map(|entry| &entry.automaton)
    }

    /// First entry, in bank order, whose automaton accepts `categories`.
    pub fn find(&mut self, categories: &[Category]) -> Option<PatternMatch> {
        let found = self
            .entries
            .iter_mut()
            .enumerate()
            .find_map(|(index, entry)| {
                entry.automaton.run(categories).then(|| PatternMatch {
                    index,
                    pattern: entry.pattern.clone(),
                })
            });

        match &found {
            Some(found) => log::debug!("categories matched pattern {}", found.index),
            None => log::debug!("categories matched no pattern"),
        }
        found
    }
}
