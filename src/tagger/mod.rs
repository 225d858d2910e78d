//! Role tagging.
//!
//! The tagger walks classified tokens through a fixed sequence of clause
//! phases and assigns each token a syntactic [`Role`]. A token whose
//! category does not fit the current phase is tagged
//! [`Role::Unrecognized`] and leaves the phase unchanged, so one stray word
//! never derails the rest of the sentence.

mod phase;
mod role;

pub use phase::Phase;
pub use role::{Role, TaggedToken};

use crate::config::AnalyzerConfig;
use crate::lexicon::{Category, ClassifiedToken, Classifier};

/// Phase-driven role tagger.
#[derive(Clone, Debug)]
pub struct RoleTagger {
    infinitive_suffix: String,
}

impl Default for RoleTagger {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

impl RoleTagger {
    /// Create a tagger that treats verbs ending in `infinitive_suffix` as
    /// infinitives when they follow the main verb.
    ///
    /// The suffix is matched case-insensitively. An empty suffix disables
    /// infinitive tagging.
    pub fn new(infinitive_suffix: impl Into<String>) -> Self {
        Self {
            infinitive_suffix: infinitive_suffix.into().to_lowercase(),
        }
    }

    /// Create a tagger using the configured infinitive suffix.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.infinitive_suffix.clone())
    }

    /// Tag every token, in order.
    ///
    /// The classifier is consulted only to decide whether an already tagged
    /// verb is a copula.
    pub fn tag<C: Classifier + ?Sized>(
        &self,
        tokens: &[ClassifiedToken],
        classifier: &C,
    ) -> Vec<TaggedToken> {
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut phase = Phase::AwaitingSubject;

        for token in tokens {
            let (next, role) = self.advance(phase, token, &tagged, classifier);
            log::trace!(
                "tagger: '{}' ({}) in {} -> {} as {}",
                token.surface,
                token.category,
                phase.name(),
                next.name(),
                role
            );
            tagged.push(TaggedToken::from_classified(token, role));
            phase = next;
        }

        tagged
    }

    /// Transition function `(phase, category, prior roles) -> (phase', role)`.
    pub fn advance<D: Classifier + ?Sized>(
        &self,
        phase: Phase,
        token: &ClassifiedToken,
        prior: &[TaggedToken],
        classifier: &D,
    ) -> (Phase, Role) {
        use Category as C;
        use Phase as P;

        let unrecognized = (phase, Role::Unrecognized);

        match (phase, token.category) {
            (P::AwaitingSubject, C::Article) => (P::AwaitingSubjectNoun, Role::SubjectDeterminer),
            (P::AwaitingSubject, C::Noun | C::Pronoun) => (P::AwaitingVerb, Role::Subject),
            (P::AwaitingSubject, _) => unrecognized,

            (P::AwaitingSubjectNoun, C::Noun) => (P::AwaitingVerb, Role::Subject),
            (P::AwaitingSubjectNoun, C::Adjective) => (phase, Role::SubjectModifier),
            (P::AwaitingSubjectNoun, _) => unrecognized,

            (P::AwaitingVerb, C::Verb) => (P::AwaitingComplement, Role::Verb),
            (P::AwaitingVerb, _) => unrecognized,

            (P::AwaitingComplement, C::Article) => {
                (P::AwaitingObjectNoun, Role::DirectObjectDeterminer)
            }
            (P::AwaitingComplement, C::Noun) => (P::AwaitingPostObject, Role::DirectObject),
            (P::AwaitingComplement, C::Adjective) if copula_governs(prior, classifier) => {
                (P::AwaitingPostObject, Role::PredicateComplement)
            }
            (P::AwaitingComplement, C::Verb) if self.is_infinitive(&token.surface) => {
                (P::AwaitingPostObject, Role::InfinitiveVerb)
            }
            (P::AwaitingComplement, C::Preposition) => (P::AwaitingIndirect, Role::Preposition),
            (P::AwaitingComplement, C::Adverb) => (P::AwaitingPostObject, Role::Adverb),
            (P::AwaitingComplement, C::Punctuation) => (P::Closed, Role::Punctuation),
            (P::AwaitingComplement, _) => unrecognized,

            (P::AwaitingObjectNoun, C::Noun) => (P::AwaitingPostObject, Role::DirectObject),
            (P::AwaitingObjectNoun, C::Adjective) => (phase, Role::DirectObjectModifier),
            (P::AwaitingObjectNoun, _) => unrecognized,

            (P::AwaitingPostObject, C::Preposition) => (P::AwaitingIndirect, Role::Preposition),
            (P::AwaitingPostObject, C::Adverb) => (phase, Role::Adverb),
            (P::AwaitingPostObject, C::Punctuation) => (P::Closed, Role::Punctuation),
            (P::AwaitingPostObject, _) => unrecognized,

            (P::AwaitingIndirect, C::Article) => {
                (P::AwaitingIndirectNoun, Role::IndirectObjectDeterminer)
            }
            (P::AwaitingIndirect, C::Noun) => (P::AwaitingPostIndirect, Role::IndirectObject),
            (P::AwaitingIndirect, _) => unrecognized,

            (P::AwaitingIndirectNoun, C::Noun) => (P::AwaitingPostIndirect, Role::IndirectObject),
            (P::AwaitingIndirectNoun, C::Adjective) => (phase, Role::IndirectObjectModifier),
            (P::AwaitingIndirectNoun, _) => unrecognized,

            (P::AwaitingPostIndirect, C::Adverb) => (phase, Role::Adverb),
            (P::AwaitingPostIndirect, C::Punctuation) => (P::Closed, Role::Punctuation),
            (P::AwaitingPostIndirect, _) => unrecognized,

            (P::Closed, _) => unrecognized,
        }
    }

    fn is_infinitive(&self, surface: &str) -> bool {
        !self.infinitive_suffix.is_empty()
            && surface.to_lowercase().ends_with(&self.infinitive_suffix)
    }
}

/// Whether some verb tagged so far is a copula.
fn copula_governs<C: Classifier + ?Sized>(prior: &[TaggedToken], classifier: &C) -> bool {
    prior
        .iter()
        .any(|token| token.role == Role::Verb && classifier.is_linking_verb(&token.surface))
}
