//! Pattern mode: match the category sequence of a sentence against the
//! pattern bank.

use crate::builder::BuildError;
use crate::lexicon::{Category, ClassifiedToken, Classifier, Lexicon, Scanner};
use crate::patterns::{PatternBank, PatternMatch};
use serde::{Deserialize, Serialize};

/// Result of analysing one sentence in pattern mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub accepted: bool,
    /// First bank entry that accepted the categories
    pub matched: Option<PatternMatch>,
    /// Classified tokens, echoed back in sentence order
    pub tokens: Vec<ClassifiedToken>,
}

impl PatternAnalysis {
    /// Category sequence that was matched against the bank.
    pub fn categories(&self) -> Vec<Category> {
        self.tokens.iter().map(|token| token.category).collect()
    }

    /// Each token paired with the pattern slot it filled.
    ///
    /// Empty when no pattern matched.
    pub fn alignment(&self) -> Vec<(&ClassifiedToken, Category)> {
        match &self.matched {
            Some(found) => self
                .tokens
                .iter()
                .zip(found.pattern.iter().copied())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Sentence analyzer for pattern mode.
///
/// Pipeline: [`Scanner::Whitespace`], the classifier and a [`PatternBank`].
///
/// # Example
///
/// ```rust
/// use clausula::analysis::StructureAnalyzer;
///
/// let mut analyzer = StructureAnalyzer::new().unwrap();
///
/// let analysis = analyzer.analyze("Maria estuda matemática.");
/// assert_eq!(analysis.matched.map(|found| found.index), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct StructureAnalyzer<C: Classifier = &'static Lexicon> {
    classifier: C,
    bank: PatternBank,
}

impl StructureAnalyzer {
    /// Analyzer over the built-in lexicon and the standard bank.
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self::with_bank(Lexicon::standard(), PatternBank::standard()?))
    }
}

impl<C: Classifier> StructureAnalyzer<C> {
    /// Analyzer over a caller-supplied classifier and bank.
    pub fn with_bank(classifier: C, bank: PatternBank) -> Self {
        Self { classifier, bank }
    }

    /// Classifier used for scanning.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Pattern bank matched against.
    pub fn bank(&self) -> &PatternBank {
        &self.bank
    }

    /// Scan, classify and match `sentence`.
    pub fn analyze(&mut self, sentence: &str) -> PatternAnalysis {
        let tokens = Scanner::Whitespace.tokenize(sentence, &self.classifier);
        self.analyze_tokens(tokens)
    }

    /// Match already classified tokens.
    pub fn analyze_tokens(&mut self, tokens: Vec<ClassifiedToken>) -> PatternAnalysis {
        let categories: Vec<Category> = tokens.iter().map(|token| token.category).collect();
        let matched = self.bank.find(&categories);

        PatternAnalysis {
            accepted: matched.is_some(),
            matched,
            tokens,
        }
    }
}
