//! Sentence analyzers.
//!
//! Two independent front-ends share the lexicon:
//!
//! - [`SyntaxAnalyzer`] tags roles and validates them against the role
//!   automaton.
//! - [`StructureAnalyzer`] matches the raw category sequence against the
//!   pattern bank.

mod clause;
mod structure;
mod syntax;

pub use clause::ClauseParts;
pub use structure::{PatternAnalysis, StructureAnalyzer};
pub use syntax::{RoleAnalysis, SyntaxAnalyzer};
