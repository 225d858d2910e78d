//! Clause breakdown of a tagged sentence.

use crate::lexicon::Classifier;
use crate::tagger::{Role, TaggedToken};
use serde::{Deserialize, Serialize};

/// Surface forms grouped by the clause part they belong to.
///
/// Every group keeps sentence order. A group with no tokens is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseParts {
    /// Subject noun phrase, determiner and modifiers included
    pub subject: Vec<String>,
    /// Verbs, complements and objects
    pub predicate: Vec<String>,
    /// Main verbs followed by infinitives
    pub verbs: Vec<String>,
    pub predicate_complement: Vec<String>,
    /// Direct object noun phrase; always empty when a copula is present
    pub direct_object: Vec<String>,
    /// Indirect object noun phrase, preposition included
    pub indirect_object: Vec<String>,
    pub adverbs: Vec<String>,
}

impl ClauseParts {
    /// Group `tokens` by role. The classifier decides which verbs are copulas.
    pub fn from_tokens<C: Classifier + ?Sized>(tokens: &[TaggedToken], classifier: &C) -> Self {
        let copula = tokens
            .iter()
            .any(|token| token.role == Role::Verb && classifier.is_linking_verb(&token.surface));

        let mut verbs = surfaces(tokens, |role| role == Role::Verb);
        verbs.extend(surfaces(tokens, |role| role == Role::InfinitiveVerb));

        Self {
            subject: surfaces(tokens, Role::is_subject_part),
            predicate: surfaces(tokens, |role| {
                role == Role::Verb
                    || role == Role::InfinitiveVerb
                    || role == Role::PredicateComplement
                    || role.is_direct_object_part()
                    || role.is_indirect_object_part()
            }),
            verbs,
            predicate_complement: surfaces(tokens, |role| role == Role::PredicateComplement),
            direct_object: if copula {
                Vec::new()
            } else {
                surfaces(tokens, Role::is_direct_object_part)
            },
            indirect_object: surfaces(tokens, Role::is_indirect_object_part),
            adverbs: surfaces(tokens, |role| role == Role::Adverb),
        }
    }
}

fn surfaces(tokens: &[TaggedToken], keep: impl Fn(Role) -> bool) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| keep(token.role))
        .map(|token| token.surface.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Category, Lexicon};

    fn tagged(parts: &[(&str, Role)]) -> Vec<TaggedToken> {
        parts
            .iter()
            .map(|(surface, role)| TaggedToken::new(*surface, Category::Unknown, *role))
            .collect()
    }

    #[test]
    fn groups_full_clause() {
        let tokens = tagged(&[
            ("a", Role::SubjectDeterminer),
            ("professora", Role::Subject),
            ("explicou", Role::Verb),
            ("a", Role::DirectObjectDeterminer),
            ("matéria", Role::DirectObject),
            ("aos", Role::Preposition),
            ("alunos", Role::IndirectObject),
            ("hoje", Role::Adverb),
            (".", Role::Punctuation),
        ]);

        let parts = ClauseParts::from_tokens(&tokens, Lexicon::standard());

        assert_eq!(parts.subject, vec!["a", "professora"]);
        assert_eq!(
            parts.predicate,
            vec!["explicou", "a", "matéria", "aos", "alunos"]
        );
        assert_eq!(parts.verbs, vec!["explicou"]);
        assert_eq!(parts.direct_object, vec!["a", "matéria"]);
        assert_eq!(parts.indirect_object, vec!["aos", "alunos"]);
        assert_eq!(parts.adverbs, vec!["hoje"]);
        assert!(parts.predicate_complement.is_empty());
    }

    #[test]
    fn copula_suppresses_direct_object() {
        let tokens = tagged(&[
            ("ele", Role::Subject),
            ("é", Role::Verb),
            ("o", Role::DirectObjectDeterminer),
            ("professor", Role::DirectObject),
            (".", Role::Punctuation),
        ]);

        let parts = ClauseParts::from_tokens(&tokens, Lexicon::standard());

        assert!(parts.direct_object.is_empty());
        assert_eq!(parts.predicate, vec!["é", "o", "professor"]);
    }

    #[test]
    fn infinitives_follow_main_verbs() {
        let tokens = tagged(&[
            ("ele", Role::Subject),
            ("gosta", Role::Verb),
            ("estudar", Role::InfinitiveVerb),
            (".", Role::Punctuation),
        ]);

        let parts = ClauseParts::from_tokens(&tokens, Lexicon::standard());

        assert_eq!(parts.verbs, vec!["gosta", "estudar"]);
    }

    #[test]
    fn unrecognized_tokens_belong_nowhere() {
        let tokens = tagged(&[("xyzzy", Role::Unrecognized), ("ela", Role::Subject)]);

        let parts = ClauseParts::from_tokens(&tokens, Lexicon::standard());

        assert_eq!(parts.subject, vec!["ela"]);
        assert!(parts.predicate.is_empty());
    }
}
