//! The standard bank of accepted category sequences.
//!
//! Order matters: matching is first-match, so an entry shadows any later
//! identical entry.

use crate::lexicon::Category;
use crate::lexicon::Category::{
    Adjective as ADJ, Adverb as ADV, Article as ART, Conjunction as CONJ, Noun as N,
    Preposition as PREP, Pronoun as PRO, Punctuation as PUNCT, Verb as V,
};

pub const STANDARD_PATTERNS: &[&[Category]] = &[
    // basic
    &[ART, N, V, ART, N, PUNCT],
    &[N, V, ART, N, PUNCT],
    &[ART, N, V, N, PUNCT],
    &[N, V, N, PUNCT],
    // pronoun subjects
    &[PRO, V, ADJ, PUNCT],
    &[PRO, V, ART, N, PUNCT],
    &[PRO, V, N, PUNCT],
    &[PRO, V, PREP, ART, N, PUNCT],
    &[PRO, V, ADJ, PREP, ART, N, PUNCT],
    &[PRO, N, V, ADJ, PUNCT],
    &[PRO, V, PREP, N, PUNCT],
    &[PRO, V, PREP, ART, N, ADV, PUNCT],
    &[PRO, V, PREP, N, ADV, PUNCT],
    &[PRO, V, ADV, PUNCT],
    &[PRO, V, PREP, N, PUNCT, ADV, PUNCT],
    // adjectives
    &[ART, N, ADJ, V, ART, N, PUNCT],
    &[ART, N, V, ART, N, ADJ, PUNCT],
    &[ART, ADJ, N, V, ART, N, PUNCT],
    &[N, ADJ, V, N, PUNCT],
    &[N, V, ADJ, PUNCT],
    &[ART, N, V, ADJ, PUNCT],
    // prepositions
    &[ART, N, V, PREP, ART, N, PUNCT],
    &[ART, N, V, ART, N, PREP, ART, N, PUNCT],
    &[ART, N, V, ART, N, PREP, N, PUNCT],
    &[N, V, PREP, ART, N, PUNCT],
    // repeats index 23; unreachable under first-match
    &[ART, N, V, ART, N, PREP, N, PUNCT],
    // conjunctions
    &[ART, N, V, CONJ, V, PUNCT],
    &[ART, N, V, ART, N, CONJ, ART, N, PUNCT],
    &[PRO, V, ADJ, CONJ, ADJ, PUNCT],
    // longer clauses
    &[ART, N, ADJ, V, ART, N, ADJ, PUNCT],
    &[ART, N, V, ART, N, PREP, ART, N, ADJ, PUNCT],
    &[ART, N, ADJ, V, PREP, ART, N, PUNCT],
];
