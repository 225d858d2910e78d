//! Clausula: deterministic-automaton sentence analysis
//!
//! Clausula checks the syntactic shape of short Portuguese sentences with
//! finite automata. All analysis is synchronous and deterministic; a sentence
//! that does not fit is a normal `accepted = false` result, never an error.
//!
//! # Core Concepts
//!
//! - **Automaton**: A DFA over any [`Symbol`](crate::core::Symbol) alphabet, with a
//!   cursor that only moves on successful steps
//! - **Lexicon**: Word-to-category lookup behind the
//!   [`Classifier`](lexicon::Classifier) trait
//! - **Role mode**: Tokens are tagged with syntactic roles and the role
//!   sequence is validated by a fixed ten-state automaton
//! - **Pattern mode**: The category sequence is matched against an ordered
//!   bank of linear-chain automata
//! - **Records**: JSON and binary snapshots of analysis results
//!
//! # Example
//!
//! ```rust
//! use clausula::analysis::{StructureAnalyzer, SyntaxAnalyzer};
//!
//! let mut roles = SyntaxAnalyzer::new().unwrap();
//! let analysis = roles.analyze("O professor explicou a matéria aos alunos.");
//! assert!(analysis.accepted);
//!
//! let mut patterns = StructureAnalyzer::new().unwrap();
//! let analysis = patterns.analyze("A professora explicou a matéria aos alunos.");
//! assert_eq!(analysis.matched.map(|found| found.index), Some(23));
//! ```

pub mod analysis;
pub mod builder;
pub mod config;
pub mod core;
pub mod lexicon;
pub mod patterns;
pub mod record;
pub mod tagger;
pub mod validator;

// Re-export commonly used types
pub use analysis::{ClauseParts, PatternAnalysis, RoleAnalysis, StructureAnalyzer, SyntaxAnalyzer};
pub use builder::{AutomatonBuilder, BuildError};
pub use config::{AnalyzerConfig, UnrecognizedPolicy};
pub use crate::core::{Automaton, Path, Symbol, TraversalStep};
pub use lexicon::{Category, ClassifiedToken, Classifier, Lexicon};
pub use patterns::{PatternBank, PatternMatch};
pub use record::{AnalysisRecord, RecordError};
pub use tagger::{Role, RoleTagger, TaggedToken};
pub use validator::RoleValidator;
