//! Splitting text into white space separated tokens.
//!
//! The grammar understood by this crate is simple enough that all its
//! parts can be scanned by looking at one token at a time. The [`Tokens`]
//! type provides this and a handful of helper functions check the shape of
//! individual tokens.

use core::str::FromStr;

//------------ Tokens --------------------------------------------------------

/// An iterator over the white space separated tokens of a string.
///
/// In addition to the tokens themselves, the remainder of the string can be
/// taken at any point via [`remainder`][Self::remainder]. This is used for
/// the trailing free-form parts of entries.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    /// The part of the string not yet consumed.
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Creates a new value for the given string.
    pub fn new(s: &'a str) -> Self {
        Tokens { rest: s }
    }

    /// Returns the unconsumed part of the string as is.
    ///
    /// Unless nothing has been consumed yet, this starts with white space.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// Takes everything left after skipping white space.
    ///
    /// Afterwards, the iterator is exhausted.
    pub fn remainder(&mut self) -> &'a str {
        let res = self.rest.trim_start();
        self.rest = "";
        res
    }

    /// Returns whether there are no more tokens.
    pub fn is_empty(&self) -> bool {
        self.rest.trim_start().is_empty()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.rest.trim_start();
        if s.is_empty() {
            self.rest = s;
            return None;
        }
        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        let (token, rest) = s.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

//------------ Token Shapes --------------------------------------------------

/// Returns whether `token` is a non-empty sequence of ASCII digits.
pub fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|ch| ch.is_ascii_digit())
}

/// Converts a decimal token into an integer.
///
/// Returns `None` if the token isn’t decimal or if the value doesn’t fit.
pub fn parse_decimal<T: FromStr>(token: &str) -> Option<T> {
    if is_decimal(token) {
        token.parse().ok()
    } else {
        None
    }
}

/// Returns whether `token` looks like a domain name.
///
/// These are letters, digits, dots, and hyphens. No escape sequences.
pub fn is_name(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == b'.' || ch == b'-')
}

/// Returns whether `token` is alphanumeric, such as a type mnemonic.
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|ch| ch.is_ascii_alphanumeric())
}

/// Removes all white space from `s`.
///
/// This is used for the base64 and hex blobs at the end of DNSSEC records
/// which may be broken into several parts or lines.
pub fn collapse_space(s: &str) -> String {
    s.split_whitespace().collect()
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tokens() {
        let mut tokens = Tokens::new("  one\ttwo   three ");
        assert_eq!(tokens.next(), Some("one"));
        assert_eq!(tokens.rest(), "\ttwo   three ");
        assert_eq!(tokens.next(), Some("two"));
        assert!(!tokens.is_empty());
        assert_eq!(tokens.remainder(), "three ");
        assert!(tokens.is_empty());
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn shapes() {
        assert!(is_decimal("3600"));
        assert!(!is_decimal("+3600"));
        assert!(!is_decimal(""));
        assert_eq!(parse_decimal::<u8>("255"), Some(255));
        assert_eq!(parse_decimal::<u8>("256"), None);
        assert_eq!(parse_decimal::<u32>("-1"), None);
        assert!(is_name("ns1.example-zone.com."));
        assert!(!is_name("ns1_example"));
        assert!(is_alphanumeric("NSEC3"));
        assert!(!is_alphanumeric("A-B"));
        assert_eq!(collapse_space(" AwEA AaTu\n c+5/ "), "AwEAAaTuc+5/");
    }
}
