//! Role mode: tag each token with a syntactic role, then validate the role
//! sequence against the role automaton.

use super::ClauseParts;
use crate::builder::BuildError;
use crate::config::AnalyzerConfig;
use crate::core::{Automaton, Path};
use crate::lexicon::{ClassifiedToken, Classifier, Lexicon, Scanner};
use crate::tagger::{Role, RoleTagger, TaggedToken};
use crate::validator::RoleValidator;
use serde::{Deserialize, Serialize};

/// Result of analysing one sentence in role mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAnalysis {
    pub accepted: bool,
    /// Every token in sentence order, `unrecognized` ones included
    pub tokens: Vec<TaggedToken>,
    /// States the validator entered
    pub path: Path<Role>,
}

impl RoleAnalysis {
    /// Tokens that did not fit the clause structure.
    pub fn unrecognized(&self) -> impl Iterator<Item = &TaggedToken> {
        self.tokens
            .iter()
            .filter(|token| token.role == Role::Unrecognized)
    }
}

/// Sentence analyzer for role mode.
///
/// Pipeline: [`Scanner::Characters`], the classifier, [`RoleTagger`] and
/// [`RoleValidator`]. The validator automaton is built once and reused, so
/// analysis takes `&mut self`.
///
/// # Example
///
/// ```rust
/// use clausula::analysis::SyntaxAnalyzer;
///
/// let mut analyzer = SyntaxAnalyzer::new().unwrap();
///
/// let analysis = analyzer.analyze("O gato come o peixe.");
/// assert!(analysis.accepted);
/// assert_eq!(analysis.path.final_state(), Some("q9"));
///
/// assert!(!analyzer.analyze("O gato come o peixe").accepted);
/// ```
#[derive(Clone, Debug)]
pub struct SyntaxAnalyzer<C: Classifier = &'static Lexicon> {
    classifier: C,
    tagger: RoleTagger,
    validator: RoleValidator,
}

impl SyntaxAnalyzer {
    /// Analyzer over the built-in lexicon with default settings.
    pub fn new() -> Result<Self, BuildError> {
        Self::with_config(&AnalyzerConfig::default())
    }

    /// Analyzer over the built-in lexicon with the given settings.
    pub fn with_config(config: &AnalyzerConfig) -> Result<Self, BuildError> {
        Self::with_classifier(Lexicon::standard(), config)
    }
}

impl<C: Classifier> SyntaxAnalyzer<C> {
    /// Analyzer over a caller-supplied classifier.
    pub fn with_classifier(classifier: C, config: &AnalyzerConfig) -> Result<Self, BuildError> {
        Ok(Self {
            classifier,
            tagger: RoleTagger::from_config(config),
            validator: RoleValidator::from_config(config)?,
        })
    }

    /// Classifier used for scanning and copula checks.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// The role automaton, for description and rendering.
    pub fn automaton(&self) -> &Automaton<Role> {
        self.validator.automaton()
    }

    /// Scan, classify, tag and validate `sentence`.
    pub fn analyze(&mut self, sentence: &str) -> RoleAnalysis {
        let tokens = Scanner::Characters.tokenize(sentence, &self.classifier);
        self.analyze_tokens(&tokens)
    }

    /// Tag and validate already classified tokens.
    pub fn analyze_tokens(&mut self, tokens: &[ClassifiedToken]) -> RoleAnalysis {
        let tagged = self.tagger.tag(tokens, &self.classifier);
        let validation = self.validator.validate(&tagged);

        RoleAnalysis {
            accepted: validation.accepted,
            tokens: tagged,
            path: validation.path,
        }
    }

    /// Group the tokens of `analysis` into clause parts.
    pub fn clause_parts(&self, analysis: &RoleAnalysis) -> ClauseParts {
        ClauseParts::from_tokens(&analysis.tokens, &self.classifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnrecognizedPolicy;
    use crate::lexicon::Category;

    fn roles(analysis: &RoleAnalysis) -> Vec<Role> {
        analysis.tokens.iter().map(|token| token.role).collect()
    }

    #[test]
    fn accepts_simple_transitive_clause() {
        let mut analyzer = SyntaxAnalyzer::new().unwrap();

        let analysis = analyzer.analyze("O gato come o peixe.");

        assert!(analysis.accepted);
        assert_eq!(
            roles(&analysis),
            vec![
                Role::SubjectDeterminer,
                Role::Subject,
                Role::Verb,
                Role::DirectObjectDeterminer,
                Role::DirectObject,
                Role::Punctuation,
            ]
        );
        assert_eq!(
            analysis.path.states(),
            vec!["q0", "q1", "q2", "q3", "q4", "q5", "q9"]
        );
    }

    #[test]
    fn scanner_lowercases_surfaces() {
        let mut analyzer = SyntaxAnalyzer::new().unwrap();

        let analysis = analyzer.analyze("Maria estuda.");

        assert_eq!(analysis.tokens[0].surface, "maria");
        assert!(analysis.accepted);
    }

    #[test]
    fn unknown_words_are_reported_and_skipped() {
        let mut analyzer = SyntaxAnalyzer::new().unwrap();

        let analysis = analyzer.analyze("Ela xyzzy estuda.");

        assert!(analysis.accepted);
        let unknown: Vec<&str> = analysis
            .unrecognized()
            .map(|token| token.surface.as_str())
            .collect();
        assert_eq!(unknown, vec!["xyzzy"]);
    }

    #[test]
    fn reject_policy_fails_on_unknown_words() {
        let config = AnalyzerConfig::default().with_unrecognized(UnrecognizedPolicy::Reject);
        let mut analyzer = SyntaxAnalyzer::with_config(&config).unwrap();

        assert!(!analyzer.analyze("Ela xyzzy estuda.").accepted);
        assert!(analyzer.analyze("Ela estuda.").accepted);
    }

    #[test]
    fn analyze_tokens_skips_scanning() {
        let mut analyzer = SyntaxAnalyzer::new().unwrap();
        let tokens = vec![
            ClassifiedToken::new("Ela", Category::Pronoun),
            ClassifiedToken::new("dorme", Category::Verb),
            ClassifiedToken::new("!", Category::Punctuation),
        ];

        let analysis = analyzer.analyze_tokens(&tokens);

        assert!(analysis.accepted);
        assert_eq!(analysis.tokens[0].surface, "Ela");
    }

    #[test]
    fn custom_classifier_is_used() {
        struct Everything;

        impl Classifier for Everything {
            fn classify(&self, word: &str) -> Category {
                match word {
                    "." => Category::Punctuation,
                    "acts" => Category::Verb,
                    _ => Category::Noun,
                }
            }

            fn is_linking_verb(&self, _word: &str) -> bool {
                false
            }
        }

        let mut analyzer =
            SyntaxAnalyzer::with_classifier(Everything, &AnalyzerConfig::default()).unwrap();

        assert!(analyzer.analyze("Everyone acts.").accepted);
    }

    #[test]
    fn clause_parts_use_analyzer_classifier() {
        let mut analyzer = SyntaxAnalyzer::new().unwrap();

        let analysis = analyzer.analyze("Ela é bonita.");
        let parts = analyzer.clause_parts(&analysis);

        assert!(analysis.accepted);
        assert_eq!(parts.subject, vec!["ela"]);
        assert_eq!(parts.verbs, vec!["é"]);
        assert_eq!(parts.predicate_complement, vec!["bonita"]);
    }

    #[test]
    fn exposes_validator_automaton() {
        let analyzer = SyntaxAnalyzer::new().unwrap();

        assert_eq!(analyzer.automaton().name(), "role-validator");
    }
}
