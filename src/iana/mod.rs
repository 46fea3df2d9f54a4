//! IANA definitions for DNS.
//!
//! Only the small part of the registries that the zonefile scanner
//! recognizes is defined here. See
//! http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml
//! for the canonical source.
//!
//! All types are enums with one variant per recognized mnemonic. They
//! implement `FromStr` and `Display` for converting from and to their
//! mnemonics. Conversion from a string is case-sensitive since the zonefile
//! grammar accepted by this crate only knows upper case keywords.

pub use self::class::Class;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod rtype;
