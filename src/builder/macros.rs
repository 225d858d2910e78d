//! Macros for ergonomic symbol declaration.

/// Generate a `Copy` symbol enum with a [`Symbol`](crate::core::Symbol)
/// implementation, a `Display` implementation and an `ALL` constant listing
/// the variants in declaration order.
///
/// # Example
///
/// ```
/// use clausula::symbol_enum;
/// use clausula::core::Symbol;
///
/// symbol_enum! {
///     pub enum Light {
///         Red => "red",
///         Green => "green",
///     }
/// }
///
/// assert_eq!(Light::Red.name(), "red");
/// assert_eq!(Light::ALL.len(), 2);
/// assert_eq!(Light::Green.to_string(), "green");
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Symbol for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Symbol::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Symbol;

    symbol_enum! {
        enum TestSymbol {
            Open => "open",
            /// Documented variant
            Close => "close",
        }
    }

    #[test]
    fn symbol_enum_macro_generates_trait() {
        assert_eq!(TestSymbol::Open.name(), "open");
        assert_eq!(TestSymbol::Close.name(), "close");
    }

    #[test]
    fn symbol_enum_lists_variants_in_order() {
        assert_eq!(TestSymbol::ALL, &[TestSymbol::Open, TestSymbol::Close]);
    }

    #[test]
    fn symbol_enum_displays_label() {
        assert_eq!(TestSymbol::Close.to_string(), "close");
    }

    #[test]
    fn symbol_enum_supports_visibility() {
        symbol_enum! {
            pub enum PublicSymbol {
                A => "a",
                B => "b",
            }
        }

        assert_eq!(PublicSymbol::B.name(), "b");
    }
}
