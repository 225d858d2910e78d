//! Tagging phases.

/// Position of the tagger inside the clause.
///
/// The determiner phases loop on adjectives until their noun arrives.
/// `Closed` is entered after sentence-final punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingSubject,
    AwaitingSubjectNoun,
    AwaitingVerb,
    AwaitingComplement,
    AwaitingObjectNoun,
    AwaitingPostObject,
    AwaitingIndirect,
    AwaitingIndirectNoun,
    AwaitingPostIndirect,
    Closed,
}

impl Phase {
    /// Label used in trace logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::AwaitingSubject => "awaiting-subject",
            Self::AwaitingSubjectNoun => "awaiting-subject-noun",
            Self::AwaitingVerb => "awaiting-verb",
            Self::AwaitingComplement => "awaiting-verb-complement",
            Self::AwaitingObjectNoun => "awaiting-object-noun",
            Self::AwaitingPostObject => "awaiting-post-object",
            Self::AwaitingIndirect => "awaiting-indirect-object",
            Self::AwaitingIndirectNoun => "awaiting-indirect-noun",
            Self::AwaitingPostIndirect => "awaiting-post-indirect",
            Self::Closed => "closed",
        }
    }
}
