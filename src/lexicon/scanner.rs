//! Sentence scanning into surface tokens.

use super::{ClassifiedToken, Classifier};

const TRAILING_PUNCTUATION: &[char] = &['.', '!', '?', ',', ';', ':'];

/// Splits raw sentences into surface forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scanner {
    /// Words are maximal runs of alphanumeric characters and are lower-cased;
    /// every other non-whitespace character becomes its own token.
    #[default]
    Characters,
    /// Words are whitespace-separated and keep their case; a single trailing
    /// punctuation mark is detached into its own token.
    Whitespace,
}

impl Scanner {
    /// Split `text` into surface forms.
    pub fn split(&self, text: &str) -> Vec<String> {
        match self {
            Self::Characters => split_characters(text),
            Self::Whitespace => split_whitespace(text),
        }
    }

    /// Split `text` and classify every surface form.
    pub fn tokenize<C: Classifier + ?Sized>(
        &self,
        text: &str,
        classifier: &C,
    ) -> Vec<ClassifiedToken> {
        self.split(text)
            .into_iter()
            .map(|surface| {
                let category = classifier.classify(&surface);
                ClassifiedToken { surface, category }
            })
            .collect()
    }
}

fn split_characters(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word.push(ch);
            continue;
        }
        if !word.is_empty() {
            tokens.push(word.to_lowercase());
            word.clear();
        }
        if !ch.is_whitespace() {
            tokens.push(ch.to_string());
        }
    }

    if !word.is_empty() {
        tokens.push(word.to_lowercase());
    }
    tokens
}

fn split_whitespace(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for word in text.split_whitespace() {
        match word.char_indices().last() {
            Some((at, last)) if TRAILING_PUNCTUATION.contains(&last) => {
                if at > 0 {
                    tokens.push(word[..at].to_string());
                }
                tokens.push(last.to_string());
            }
            _ => tokens.push(word.to_string()),
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Category, Lexicon};

    #[test]
    fn characters_split_punctuation_and_lowercase() {
        let tokens = Scanner::Characters.split("O gato come o peixe.");

        assert_eq!(tokens, vec!["o", "gato", "come", "o", "peixe", "."]);
    }

    #[test]
    fn characters_keep_accented_letters() {
        let tokens = Scanner::Characters.split("Ela estuda matemática, física!");

        assert_eq!(
            tokens,
            vec!["ela", "estuda", "matemática", ",", "física", "!"]
        );
    }

    #[test]
    fn characters_emit_every_separator() {
        let tokens = Scanner::Characters.split("sim...  não");

        assert_eq!(tokens, vec!["sim", ".", ".", ".", "não"]);
    }

    #[test]
    fn whitespace_detaches_trailing_punctuation_only() {
        let tokens = Scanner::Whitespace.split("  Maria estuda matemática.  ");

        assert_eq!(tokens, vec!["Maria", "estuda", "matemática", "."]);
    }

    #[test]
    fn whitespace_keeps_lone_punctuation() {
        let tokens = Scanner::Whitespace.split("Ele corre , sempre ?");

        assert_eq!(tokens, vec!["Ele", "corre", ",", "sempre", "?"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(Scanner::Characters.split("   ").is_empty());
        assert!(Scanner::Whitespace.split("").is_empty());
    }

    #[test]
    fn tokenize_classifies_surfaces() {
        let tokens = Scanner::Whitespace.tokenize("O gato dorme.", Lexicon::standard());

        assert_eq!(
            tokens,
            vec![
                ClassifiedToken::new("O", Category::Article),
                ClassifiedToken::new("gato", Category::Noun),
                ClassifiedToken::new("dorme", Category::Verb),
                ClassifiedToken::new(".", Category::Punctuation),
            ]
        );
    }
}
