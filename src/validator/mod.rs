//! Sentence validation over role sequences.
//!
//! The validator owns one ten-state automaton whose alphabet is [`Role`].
//! States `q0` to `q8` follow the clause from subject to indirect object;
//! `q9`, reached only through closing punctuation, is the sole final state.
//!
//! ```text
//! q0 --subject-determiner--> q1 --subject--> q2 --verb--> q3
//! q0 --subject--> q2
//! q3 --direct-object-determiner--> q4 --direct-object--> q5
//! q3 --direct-object | predicate-complement | infinitive-verb | adverb--> q5
//! q3 --preposition--> q6        q5 --preposition--> q6
//! q5 --adverb--> q5             q8 --adverb--> q8
//! q6 --indirect-object-determiner--> q7 --indirect-object--> q8
//! q6 --indirect-object--> q8
//! q3 | q5 | q8 --punctuation--> q9*
//! ```

use crate::builder::{AutomatonBuilder, BuildError};
use crate::config::{AnalyzerConfig, UnrecognizedPolicy};
use crate::core::{Automaton, Path};
use crate::tagger::{Role, TaggedToken};
use serde::{Deserialize, Serialize};

/// Name of the role validator automaton.
pub const AUTOMATON_NAME: &str = "role-validator";

/// Name of the only accepting state.
pub const FINAL_STATE: &str = "q9";

/// Build the role validator automaton.
pub fn role_automaton() -> Result<Automaton<Role>, BuildError> {
    AutomatonBuilder::new(AUTOMATON_NAME)
        .states((0..10).map(|i| (format!("q{i}"), i == 9)))
        .initial("q0")
        // subject
        .transition("q0", Role::SubjectDeterminer, "q1")
        .transition("q0", Role::Subject, "q2")
        .transition("q1", Role::Subject, "q2")
        // verb
        .transition("q2", Role::Verb, "q3")
        // verb complement
        .transition("q3", Role::DirectObjectDeterminer, "q4")
        .transitions(
            "q3",
            [
                Role::DirectObject,
                Role::PredicateComplement,
                Role::InfinitiveVerb,
                Role::Adverb,
            ],
            "q5",
        )
        .transition("q3", Role::Preposition, "q6")
        .transition("q4", Role::DirectObject, "q5")
        // indirect object
        .transition("q5", Role::Preposition, "q6")
        .transition("q5", Role::Adverb, "q5")
        .transition("q6", Role::IndirectObjectDeterminer, "q7")
        .transition("q6", Role::IndirectObject, "q8")
        .transition("q7", Role::IndirectObject, "q8")
        .transition("q8", Role::Adverb, "q8")
        // closing punctuation
        .transition("q3", Role::Punctuation, FINAL_STATE)
        .transition("q5", Role::Punctuation, FINAL_STATE)
        .transition("q8", Role::Punctuation, FINAL_STATE)
        .build()
}

/// Outcome of validating one role sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Every consumed role had a transition and the walk ended in `q9`
    pub accepted: bool,
    /// States entered, starting with `q0`
    pub path: Path<Role>,
}

/// Validates tagged sentences against the role automaton.
///
/// Validation moves the automaton cursor, so it needs `&mut self`; one
/// validator serves many sentences in sequence because every call resets
/// the cursor first.
#[derive(Clone, Debug)]
pub struct RoleValidator {
    automaton: Automaton<Role>,
    policy: UnrecognizedPolicy,
}

impl RoleValidator {
    /// Create a validator that skips unrecognized roles.
    pub fn new() -> Result<Self, BuildError> {
        Self::with_policy(UnrecognizedPolicy::Skip)
    }

    /// Create a validator with an explicit unrecognized-role policy.
    pub fn with_policy(policy: UnrecognizedPolicy) -> Result<Self, BuildError> {
        Ok(Self {
            automaton: role_automaton()?,
            policy,
        })
    }

    /// Create a validator using the configured policy.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, BuildError> {
        Self::with_policy(config.unrecognized)
    }

    /// The underlying automaton, for description and rendering.
    pub fn automaton(&self) -> &Automaton<Role> {
        &self.automaton
    }

    /// Current unrecognized-role policy.
    pub fn policy(&self) -> UnrecognizedPolicy {
        self.policy
    }

    /// Validate the roles of a tagged sentence.
    pub fn validate(&mut self, tokens: &[TaggedToken]) -> Validation {
        self.validate_roles(tokens.iter().map(|token| token.role))
    }

    /// Validate a bare role sequence.
    ///
    /// The first role without a transition stops the walk and rejects the
    /// sequence; the path then ends at the last state successfully entered.
    pub fn validate_roles<I>(&mut self, roles: I) -> Validation
    where
        I: IntoIterator<Item = Role>,
    {
        self.automaton.reset();
        let mut path = match self.automaton.current_state() {
            Some(initial) => Path::starting_at(initial.name()),
            None => Path::new(),
        };

        let mut completed = true;
        for role in roles {
            if role == Role::Unrecognized && self.policy == UnrecognizedPolicy::Skip {
                continue;
            }
            if !self.automaton.step(&role) {
                completed = false;
                break;
            }
            if let Some(state) = self.automaton.current_state() {
                path.push(state.name(), role);
            }
        }

        let accepted = completed && self.automaton.is_accepting();
        log::debug!(
            "{}: {} after {}",
            self.automaton.name(),
            if accepted { "accepted" } else { "rejected" },
            path.states().join(" -> ")
        );
        Validation { accepted, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateNode;

    fn validate(roles: &[Role]) -> Validation {
        RoleValidator::new().unwrap().validate_roles(roles.iter().copied())
    }

    #[test]
    fn automaton_has_ten_states_and_one_final() {
        let automaton = role_automaton().unwrap();

        assert_eq!(automaton.states().len(), 10);
        let finals: Vec<&str> = automaton
            .states()
            .iter()
            .filter(|state| state.is_final())
            .map(StateNode::name)
            .collect();
        assert_eq!(finals, vec![FINAL_STATE]);
        assert_eq!(automaton.initial_state().map(StateNode::name), Some("q0"));
    }

    #[test]
    fn automaton_has_documented_transition_count() {
        assert_eq!(role_automaton().unwrap().transition_count(), 20);
    }

    #[test]
    fn accepts_full_clause() {
        let validation = validate(&[
            Role::SubjectDeterminer,
            Role::Subject,
            Role::Verb,
            Role::DirectObjectDeterminer,
            Role::DirectObject,
            Role::Punctuation,
        ]);

        assert!(validation.accepted);
        assert_eq!(
            validation.path.states(),
            vec!["q0", "q1", "q2", "q3", "q4", "q5", "q9"]
        );
    }

    #[test]
    fn records_symbols_along_path() {
        let validation = validate(&[Role::Subject, Role::Verb, Role::Punctuation]);

        let symbols: Vec<Option<Role>> = validation
            .path
            .steps()
            .iter()
            .map(|step| step.symbol)
            .collect();
        assert_eq!(
            symbols,
            vec![None, Some(Role::Subject), Some(Role::Verb), Some(Role::Punctuation)]
        );
    }

    #[test]
    fn rejects_without_closing_punctuation() {
        let validation = validate(&[Role::Subject, Role::Verb, Role::DirectObject]);

        assert!(!validation.accepted);
        assert_eq!(validation.path.final_state(), Some("q5"));
    }

    #[test]
    fn rejects_on_missing_transition() {
        let validation = validate(&[Role::Verb, Role::Punctuation]);

        assert!(!validation.accepted);
        assert_eq!(validation.path.states(), vec!["q0"]);
    }

    #[test]
    fn accepts_indirect_object_with_adverbs() {
        let validation = validate(&[
            Role::Subject,
            Role::Verb,
            Role::DirectObject,
            Role::Adverb,
            Role::Preposition,
            Role::IndirectObjectDeterminer,
            Role::IndirectObject,
            Role::Adverb,
            Role::Adverb,
            Role::Punctuation,
        ]);

        assert!(validation.accepted);
        assert_eq!(
            validation.path.states(),
            vec!["q0", "q2", "q3", "q5", "q5", "q6", "q7", "q8", "q8", "q8", "q9"]
        );
    }

    #[test]
    fn modifiers_have_no_transitions() {
        let validation = validate(&[
            Role::SubjectDeterminer,
            Role::SubjectModifier,
            Role::Subject,
            Role::Verb,
            Role::Punctuation,
        ]);

        assert!(!validation.accepted);
        assert_eq!(validation.path.final_state(), Some("q1"));
    }

    #[test]
    fn unrecognized_roles_are_skipped_by_default() {
        let with = validate(&[
            Role::Subject,
            Role::Unrecognized,
            Role::Verb,
            Role::Unrecognized,
            Role::Punctuation,
        ]);
        let without = validate(&[Role::Subject, Role::Verb, Role::Punctuation]);

        assert_eq!(with, without);
        assert!(with.accepted);
    }

    #[test]
    fn reject_policy_fails_on_unrecognized() {
        let mut validator = RoleValidator::with_policy(UnrecognizedPolicy::Reject).unwrap();

        let validation = validator.validate_roles([
            Role::Subject,
            Role::Unrecognized,
            Role::Verb,
            Role::Punctuation,
        ]);

        assert!(!validation.accepted);
        assert_eq!(validation.path.final_state(), Some("q2"));
    }

    #[test]
    fn validator_is_reusable() {
        let mut validator = RoleValidator::new().unwrap();

        assert!(!validator.validate_roles([Role::Subject, Role::Verb]).accepted);
        assert!(validator
            .validate_roles([Role::Subject, Role::Verb, Role::Punctuation])
            .accepted);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let validation = validate(&[]);

        assert!(!validation.accepted);
        assert_eq!(validation.path.states(), vec!["q0"]);
    }

    #[test]
    fn validate_reads_roles_from_tokens() {
        use crate::lexicon::Category;

        let tokens = vec![
            TaggedToken::new("ela", Category::Pronoun, Role::Subject),
            TaggedToken::new("dorme", Category::Verb, Role::Verb),
            TaggedToken::new(".", Category::Punctuation, Role::Punctuation),
        ];

        assert!(RoleValidator::new().unwrap().validate(&tokens).accepted);
    }
}
