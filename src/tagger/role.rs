//! Syntactic roles and tagged tokens.

use crate::lexicon::{Category, ClassifiedToken};
use serde::{Deserialize, Serialize};

crate::symbol_enum! {
    /// Syntactic function assigned to a token. Roles are also the alphabet
    /// of the role validator automaton.
    pub enum Role {
        Subject => "subject",
        SubjectDeterminer => "subject-determiner",
        SubjectModifier => "subject-modifier",
        Verb => "verb",
        InfinitiveVerb => "infinitive-verb",
        PredicateComplement => "predicate-complement",
        DirectObject => "direct-object",
        DirectObjectDeterminer => "direct-object-determiner",
        DirectObjectModifier => "direct-object-modifier",
        Preposition => "preposition",
        IndirectObject => "indirect-object",
        IndirectObjectDeterminer => "indirect-object-determiner",
        IndirectObjectModifier => "indirect-object-modifier",
        Adverb => "adverb",
        Punctuation => "punctuation",
        /// Token that did not fit the phase it arrived in
        Unrecognized => "unrecognized",
    }
}

impl Role {
    /// Whether the role belongs to the subject noun phrase.
    pub fn is_subject_part(self) -> bool {
        matches!(
            self,
            Self::Subject | Self::SubjectDeterminer | Self::SubjectModifier
        )
    }

    /// Whether the role belongs to the direct object noun phrase.
    pub fn is_direct_object_part(self) -> bool {
        matches!(
            self,
            Self::DirectObject | Self::DirectObjectDeterminer | Self::DirectObjectModifier
        )
    }

    /// Whether the role belongs to the indirect object, preposition included.
    pub fn is_indirect_object_part(self) -> bool {
        matches!(
            self,
            Self::IndirectObject
                | Self::IndirectObjectDeterminer
                | Self::IndirectObjectModifier
                | Self::Preposition
        )
    }
}

/// A classified token with its assigned role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub surface: String,
    pub category: Category,
    pub role: Role,
}

impl TaggedToken {
    pub fn new(surface: impl Into<String>, category: Category, role: Role) -> Self {
        Self {
            surface: surface.into(),
            category,
            role,
        }
    }

    pub(crate) fn from_classified(token: &ClassifiedToken, role: Role) -> Self {
        Self {
            surface: token.surface.clone(),
            category: token.category,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    #[test]
    fn role_labels_are_kebab_case() {
        assert_eq!(Role::SubjectDeterminer.name(), "subject-determiner");
        assert_eq!(Role::IndirectObjectModifier.name(), "indirect-object-modifier");
        assert_eq!(Role::Unrecognized.to_string(), "unrecognized");
    }

    #[test]
    fn role_enumeration_is_closed() {
        assert_eq!(Role::ALL.len(), 16);
    }

    #[test]
    fn noun_phrase_groups() {
        assert!(Role::SubjectModifier.is_subject_part());
        assert!(!Role::Verb.is_subject_part());
        assert!(Role::DirectObjectDeterminer.is_direct_object_part());
        assert!(Role::Preposition.is_indirect_object_part());
        assert!(!Role::PredicateComplement.is_direct_object_part());
    }
}
