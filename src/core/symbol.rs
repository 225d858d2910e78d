//! Alphabet trait for automaton symbols.
//!
//! Every automaton in the crate is generic over the symbols it consumes.
//! Grammatical categories drive the pattern bank, syntactic roles drive the
//! role validator, and plain `String` symbols are available for
//! ad-hoc machines.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton input symbols.
///
/// Symbols are small immutable values used as transition keys, so they must
/// be hashable and comparable. They are serializable so traversal paths can be
/// handed to external renderers.
///
/// # Example
///
/// ```rust
/// use clausula::core::Symbol;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Bit {
///     Zero,
///     One,
/// }
///
/// impl Symbol for Bit {
///     fn name(&self) -> &str {
///         match self {
///             Self::Zero => "0",
///             Self::One => "1",
///         }
///     }
/// }
///
/// assert_eq!(Bit::One.name(), "1");
/// ```
pub trait Symbol:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Display label used in logs, descriptions and edge listings.
    fn name(&self) -> &str;
}

impl Symbol for String {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestSymbol {
        Open,
        Close,
    }

    impl Symbol for TestSymbol {
        fn name(&self) -> &str {
            match self {
                Self::Open => "open",
                Self::Close => "close",
            }
        }
    }

    #[test]
    fn symbol_name_returns_label() {
        assert_eq!(TestSymbol::Open.name(), "open");
        assert_eq!(TestSymbol::Close.name(), "close");
    }

    #[test]
    fn string_symbol_is_its_own_name() {
        let symbol = String::from("verb");
        assert_eq!(symbol.name(), "verb");
    }

    #[test]
    fn symbol_serializes_correctly() {
        let json = serde_json::to_string(&TestSymbol::Close).unwrap();
        let back: TestSymbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestSymbol::Close);
    }
}
