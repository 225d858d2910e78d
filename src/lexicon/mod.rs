//! Lexical lookup: grammatical categories for surface words.
//!
//! The analyzers consume classification through the [`Classifier`] trait.
//! [`Lexicon`] is the built-in Portuguese dictionary; callers with their own
//! word lists can implement the trait instead.

mod scanner;
mod words;

pub use scanner::Scanner;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

crate::symbol_enum! {
    /// Grammatical category of a word. `Unknown` marks words absent from
    /// the dictionary; no pattern or phase expects it.
    pub enum Category {
        Article => "article",
        Pronoun => "pronoun",
        Noun => "noun",
        Verb => "verb",
        Adjective => "adjective",
        Preposition => "preposition",
        Punctuation => "punctuation",
        Conjunction => "conjunction",
        Adverb => "adverb",
        Unknown => "unknown",
    }
}

/// A surface form paired with its category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedToken {
    pub surface: String,
    pub category: Category,
}

impl ClassifiedToken {
    pub fn new(surface: impl Into<String>, category: Category) -> Self {
        Self {
            surface: surface.into(),
            category,
        }
    }
}

/// Dictionary capability consumed by the analyzers.
pub trait Classifier {
    /// Category of `word`, `Category::Unknown` when absent.
    fn classify(&self, word: &str) -> Category;

    /// Whether `word` is a copula form.
    fn is_linking_verb(&self, word: &str) -> bool;
}

impl<T: Classifier + ?Sized> Classifier for &T {
    fn classify(&self, word: &str) -> Category {
        (**self).classify(word)
    }

    fn is_linking_verb(&self, word: &str) -> bool {
        (**self).is_linking_verb(word)
    }
}

/// Built-in case-insensitive Portuguese dictionary.
///
/// Lookups lower-case the word first. The contractions `ao` and `aos` are
/// always prepositions; otherwise the first table containing the word
/// decides its category.
#[derive(Clone, Debug)]
pub struct Lexicon {
    categories: HashMap<String, Category>,
    linking_verbs: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Build the dictionary from the built-in word tables.
    pub fn new() -> Self {
        let mut categories = HashMap::new();
        for (category, table) in words::TABLES {
            for word in *table {
                categories.entry(word.to_string()).or_insert(*category);
            }
        }

        let linking_verbs = words::LINKING_VERBS
            .iter()
            .map(|word| word.to_string())
            .collect();

        Self {
            categories,
            linking_verbs,
        }
    }

    /// Shared instance built on first use.
    pub fn standard() -> &'static Lexicon {
        static STANDARD: OnceLock<Lexicon> = OnceLock::new();
        STANDARD.get_or_init(Lexicon::new)
    }

    /// Number of distinct words with a category.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Classifier for Lexicon {
    fn classify(&self, word: &str) -> Category {
        let word = word.to_lowercase();
        if words::PREPOSITION_OVERRIDES.contains(&word.as_str()) {
            return Category::Preposition;
        }
        self.categories
            .get(&word)
            .copied()
            .unwrap_or(Category::Unknown)
    }

    fn is_linking_verb(&self, word: &str) -> bool {
        self.linking_verbs.contains(&word.to_lowercase())
    }
}
