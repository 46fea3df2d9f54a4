//! Macros for implementing IANA types easier.

/// Creates a type for a closed set of mnemonics.
///
/// Each variant is given together with the mnemonic it stands for. This
/// adds the methods `from_mnemonic()`, `to_mnemonic()`, and
/// `eq_ignore_case()` as well as impls for `FromStr` and `Display`.
///
/// Unlike the integer types in the `domain` crate, there is no catch-all
/// variant. Anything not listed is simply not a value of the type.
macro_rules! mnemonic_enum {
    ( $(#[$type_attr:meta])* $ianatype:ident, $error:expr;
        $( $(#[$attr:meta])* ( $variant:ident => $mnemonic:literal ) )* ) => {

        $(#[$type_attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub enum $ianatype {
            $(
                $(#[$attr])*
                #[cfg_attr(feature = "serde", serde(rename = $mnemonic))]
                $variant
            ),*
        }

        impl $ianatype {
            /// All values of the type in the order they were defined.
            pub const ALL: &'static [$ianatype] = &[
                $( $ianatype::$variant ),*
            ];

            /// Returns a value from its mnemonic.
            ///
            /// The mnemonic has to be given exactly, i.e., in upper case.
            pub fn from_mnemonic(m: &str) -> Option<Self> {
                match m {
                    $( $mnemonic => Some($ianatype::$variant), )*
                    _ => None
                }
            }

            /// Returns the mnemonic for this value.
            pub fn to_mnemonic(self) -> &'static str {
                match self {
                    $( $ianatype::$variant => $mnemonic ),*
                }
            }

            /// Returns whether `m` is the mnemonic of this value in any case.
            pub fn eq_ignore_case(self, m: &str) -> bool {
                self.to_mnemonic().eq_ignore_ascii_case(m)
            }
        }

        //--- FromStr and Display

        impl core::str::FromStr for $ianatype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ianatype::from_mnemonic(s).ok_or(FromStrError(()))
            }
        }

        impl core::fmt::Display for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(self.to_mnemonic())
            }
        }

        from_str_error!($error);
    }
}

/// Creates the error type returned by a failed `FromStr` conversion.
macro_rules! from_str_error {
    ($description:expr) => {
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct FromStrError(());

        impl std::error::Error for FromStrError {}

        impl core::fmt::Display for FromStrError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str($description)
            }
        }
    };
}
