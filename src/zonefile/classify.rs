//! Classifying logical lines.
//!
//! A logical line is either a directive starting with a dollar sign or a
//! record. A record has the form
//!
//! ```text
//! <owner> [<TTL>] [<class>] <type> <data>
//! [<class>] [<TTL>] ...
//! ```
//!
//! where the owner is either `@` or a name made of letters, digits, dots,
//! and hyphens, the TTL and class may appear in either order or be absent,
//! and the type is one of the mnemonics of [`Rtype`]. Everything after the
//! type is record data. The owner has to start right at the beginning of the
//! line. Lines not following this shape are not records.

use super::scan::{is_name, parse_decimal, Tokens};
use crate::iana::{Class, Rtype};
use core::fmt;

//------------ Classified ----------------------------------------------------

/// The outcome of classifying a logical line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Classified {
    /// The line is a well-formed directive.
    Directive(Directive),

    /// The line starts with a dollar sign but isn’t a valid directive.
    MalformedDirective,

    /// The line is a record.
    Record(GenericRecord),

    /// The line is neither a directive nor a record.
    Unparsed,
}

impl Classified {
    /// Classifies a logical line.
    ///
    /// The line should already be free of comments and parentheses.
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.starts_with('$') {
            return match Directive::scan(trimmed) {
                Some(directive) => Classified::Directive(directive),
                None => Classified::MalformedDirective,
            };
        }
        match GenericRecord::scan(line) {
            Some(record) => Classified::Record(record),
            None => Classified::Unparsed,
        }
    }
}

//------------ Directive -----------------------------------------------------

/// A control entry such as `$ORIGIN` or `$TTL`.
///
/// Directives are only recognized, not interpreted. The name has to be all
/// upper case letters and must be followed by a non-empty value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Directive {
    /// The name of the directive without the dollar sign.
    pub name: String,

    /// Everything after the name.
    pub value: String,
}

impl Directive {
    /// Scans a directive from a trimmed line.
    ///
    /// Returns `None` if the line doesn’t start with a dollar sign followed
    /// by a name, white space, and a value.
    pub fn scan(line: &str) -> Option<Self> {
        let body = line.strip_prefix('$')?;
        let end = body
            .find(|ch: char| !ch.is_ascii_uppercase())
            .unwrap_or(body.len());
        let (name, rest) = body.split_at(end);
        if name.is_empty() || !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let value = rest.trim();
        if value.is_empty() {
            return None;
        }
        Some(Directive {
            name: name.into(),
            value: value.into(),
        })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${} {}", self.name, self.value)
    }
}

//------------ GenericRecord -------------------------------------------------

/// A record with its data still in textual form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct GenericRecord {
    /// The owner name as given, i.e., `@` or a possibly relative name.
    pub owner: String,

    /// The TTL if one was given.
    pub ttl: Option<u32>,

    /// The class if one was given.
    pub class: Option<Class>,

    /// The record type.
    pub rtype: Rtype,

    /// The record data with trailing white space removed.
    pub data: String,

    /// The record data exactly as it followed the type.
    ///
    /// This includes any trailing white space, such as the spaces left
    /// behind by a closing parenthesis.
    pub raw_data: String,
}

impl GenericRecord {
    /// Scans a record from a logical line.
    ///
    /// Returns `None` if the line doesn’t match the record grammar. This
    /// includes lines starting with white space: there is no last owner to
    /// fall back to.
    pub fn scan(line: &str) -> Option<Self> {
        if line.starts_with(char::is_whitespace) {
            return None;
        }
        let mut tokens = Tokens::new(line);

        let owner = tokens.next().filter(|owner| is_owner(owner))?;

        // Up to two optional slots for TTL and class, then the type.
        let mut slots = Vec::with_capacity(2);
        let rtype = loop {
            let token = tokens.next()?;
            if let Some(rtype) = Rtype::from_mnemonic(token) {
                break rtype;
            }
            if slots.len() == 2 {
                return None;
            }
            slots.push(Slot::scan(token)?);
        };
        if let [first, second] = slots.as_slice() {
            // TTL and class form a pair, so they can’t both be the same.
            if first.is_ttl() == second.is_ttl() {
                return None;
            }
        }
        let (ttl, class) = Slot::resolve(&slots);

        let raw_data = tokens.remainder();
        if raw_data.is_empty() {
            return None;
        }

        Some(GenericRecord {
            owner: owner.into(),
            ttl,
            class,
            rtype,
            data: raw_data.trim_end().into(),
            raw_data: raw_data.into(),
        })
    }
}

impl fmt::Display for GenericRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.owner)?;
        if let Some(ttl) = self.ttl {
            write!(f, " {}", ttl)?;
        }
        if let Some(class) = self.class {
            write!(f, " {}", class)?;
        }
        write!(f, " {} {}", self.rtype, self.data)
    }
}

//------------ Slot ----------------------------------------------------------

/// One of the optional fields between owner and type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    Ttl(u32),
    Class(Class),
}

impl Slot {
    /// Scans a slot from a token.
    ///
    /// Decimal tokens are TTLs, class mnemonics are classes.
    fn scan(token: &str) -> Option<Self> {
        if let Some(ttl) = parse_decimal(token) {
            Some(Slot::Ttl(ttl))
        } else {
            Class::from_mnemonic(token).map(Slot::Class)
        }
    }

    fn is_ttl(self) -> bool {
        matches!(self, Slot::Ttl(_))
    }

    /// Assigns the slots to TTL and class.
    ///
    /// If a kind appears more than once, the last one wins.
    pub(crate) fn resolve(slots: &[Slot]) -> (Option<u32>, Option<Class>) {
        let mut ttl = None;
        let mut class = None;
        for slot in slots {
            match *slot {
                Slot::Ttl(value) => ttl = Some(value),
                Slot::Class(value) => class = Some(value),
            }
        }
        (ttl, class)
    }
}

fn is_owner(token: &str) -> bool {
    token == "@" || is_name(token)
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn record(line: &str) -> GenericRecord {
        match Classified::classify(line) {
            Classified::Record(record) => record,
            other => panic!("{:?} is not a record: {:?}", line, other),
        }
    }

    #[test]
    fn ttl_and_class_in_any_order() {
        for line in ["ns1 3600 IN A 1.2.3.4", "ns1 IN 3600 A 1.2.3.4"] {
            let rec = record(line);
            assert_eq!(rec.owner, "ns1");
            assert_eq!(rec.ttl, Some(3600));
            assert_eq!(rec.class, Some(Class::IN));
            assert_eq!(rec.rtype, Rtype::A);
            assert_eq!(rec.data, "1.2.3.4");
        }
    }

    #[test]
    fn optional_slots() {
        let rec = record("@ NS ns1.example.com.");
        assert_eq!((rec.ttl, rec.class), (None, None));
        assert_eq!(rec.owner, "@");

        let rec = record("www 300 CNAME example.com.");
        assert_eq!((rec.ttl, rec.class), (Some(300), None));

        let rec = record("chaos CH TXT version");
        assert_eq!((rec.ttl, rec.class), (None, Some(Class::CH)));
        assert_eq!(rec.rtype, Rtype::Txt);
    }

    #[test]
    fn raw_data_keeps_trailing_space() {
        let rec = record("a IN A 1.2.3.4   ");
        assert_eq!(rec.owner, "a");
        assert_eq!(rec.data, "1.2.3.4");
        assert_eq!(rec.raw_data, "1.2.3.4   ");
    }

    #[test]
    fn not_records() {
        for line in [
            "!!! not a record",
            "",
            "   ",
            "  IN A 1.2.3.4",
            "a IN A",
            "a IN FOO 1.2.3.4",
            "a in A 1.2.3.4",
            "a 3600 7200 A 1.2.3.4",
            "a IN CH A 1.2.3.4",
            "a IN 3600 IN A 1.2.3.4",
            "a 99999999999 A 1.2.3.4",
            "under_score A 1.2.3.4",
        ] {
            assert_eq!(Classified::classify(line), Classified::Unparsed);
        }
    }

    #[test]
    fn last_slot_wins() {
        assert_eq!(
            Slot::resolve(&[Slot::Ttl(3600), Slot::Ttl(7200)]),
            (Some(7200), None)
        );
        assert_eq!(
            Slot::resolve(&[
                Slot::Class(Class::IN),
                Slot::Ttl(1),
                Slot::Class(Class::HS)
            ]),
            (Some(1), Some(Class::HS))
        );
    }

    #[test]
    fn directives() {
        assert_eq!(
            Classified::classify("  $ORIGIN example.com.  "),
            Classified::Directive(Directive {
                name: "ORIGIN".into(),
                value: "example.com.".into(),
            })
        );
        assert_eq!(
            Classified::classify("$INCLUDE sub.zone sub"),
            Classified::Directive(Directive {
                name: "INCLUDE".into(),
                value: "sub.zone sub".into(),
            })
        );
        for line in ["$TTL", "$ttl 3600", "$ 3600", "$TTL3600", "$1 a"] {
            assert_eq!(
                Classified::classify(line),
                Classified::MalformedDirective
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", record("ns1 IN 3600 A 1.2.3.4 ")),
            "ns1 3600 IN A 1.2.3.4"
        );
        assert_eq!(format!("{}", record("@ MX 10 mx")), "@ MX 10 mx");
    }
}
