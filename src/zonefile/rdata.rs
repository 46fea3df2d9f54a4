//! Record data with structured content.
//!
//! There is one type for each record type that the scanner decodes beyond
//! keeping its data as a string. Each type has a `scan` function that
//! tries to decode the textual record data and returns `None` if the data
//! doesn’t have the expected shape.
//!
//! Decimal fields have to fit the integer types of their wire format, i.e.,
//! `u8` for algorithms, protocol, labels, and digest types and `u16` for
//! flags and key tags. A DNSKEY with algorithm 300 or a DS with key tag
//! 70000 therefore doesn’t decode and ends up as an unknown record.
//!
//! The base64 or hex blobs at the end of DNSKEY, RRSIG, and DS records are
//! kept in their textual form with all white space removed. They must not
//! be empty.

use super::scan::{collapse_space, is_alphanumeric, is_name, parse_decimal, Tokens};
use core::fmt;

//------------ Dnskey --------------------------------------------------------

/// Dnskey record data.
///
/// The DNSKEY record type is defined in RFC 4034, section 2.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Dnskey {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,

    /// The base64 encoded public key.
    pub public_key: String,
}

impl Dnskey {
    /// Scans the data from `flags protocol algorithm public-key…`.
    pub fn scan(data: &str) -> Option<Self> {
        let mut tokens = Tokens::new(data);
        let flags = parse_decimal(tokens.next()?)?;
        let protocol = parse_decimal(tokens.next()?)?;
        let algorithm = parse_decimal(tokens.next()?)?;
        let public_key = scan_blob(&mut tokens)?;
        Some(Dnskey {
            flags,
            protocol,
            algorithm,
            public_key,
        })
    }
}

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags, self.protocol, self.algorithm, self.public_key
        )
    }
}

//------------ Rrsig ---------------------------------------------------------

/// Rrsig record data.
///
/// The RRSIG record type is defined in RFC 4034, section 3.
///
/// The expiration and inception times are kept as the decimal value they
/// were given as. This can either be seconds since the epoch or the
/// `YYYYMMDDHHmmSS` form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Rrsig {
    /// The mnemonic of the record type covered by the signature.
    pub type_covered: String,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub signature_expiration: u64,
    pub signature_inception: u64,
    pub key_tag: u16,
    pub signers_name: String,

    /// The base64 encoded signature.
    pub signature: String,
}

impl Rrsig {
    /// Scans the data from its nine fields, the last of which may contain
    /// white space.
    pub fn scan(data: &str) -> Option<Self> {
        let mut tokens = Tokens::new(data);
        let type_covered = tokens.next().filter(|t| is_alphanumeric(t))?;
        let algorithm = parse_decimal(tokens.next()?)?;
        let labels = parse_decimal(tokens.next()?)?;
        let original_ttl = parse_decimal(tokens.next()?)?;
        let signature_expiration = parse_decimal(tokens.next()?)?;
        let signature_inception = parse_decimal(tokens.next()?)?;
        let key_tag = parse_decimal(tokens.next()?)?;
        let signers_name = tokens.next().filter(|t| is_name(t))?;
        let signature = scan_blob(&mut tokens)?;
        Some(Rrsig {
            type_covered: type_covered.into(),
            algorithm,
            labels,
            original_ttl,
            signature_expiration,
            signature_inception,
            key_tag,
            signers_name: signers_name.into(),
            signature,
        })
    }
}

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.signature_expiration,
            self.signature_inception,
            self.key_tag,
            self.signers_name,
            self.signature
        )
    }
}

//------------ Soa -----------------------------------------------------------

/// Soa record data.
///
/// The SOA record type is defined in RFC 1035, section 3.3.13.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Soa {
    pub name_server: String,
    pub email_address: String,
    pub serial_number: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expiry: u32,

    /// The TTL for negative answers, historically the minimum TTL.
    pub nxdomain: u32,
}

impl Soa {
    /// Scans the data from two names followed by five decimal fields.
    ///
    /// The data has to end in white space after the last field. This is
    /// what is left after a closing parenthesis, so parenthesized SOA
    /// records are fine, but a one-line SOA record without trailing white
    /// space is rejected. Any further token is rejected, too.
    pub fn scan(raw_data: &str) -> Option<Self> {
        if !raw_data.ends_with(char::is_whitespace) {
            return None;
        }
        let mut tokens = Tokens::new(raw_data);
        let name_server = tokens.next().filter(|t| is_name(t))?;
        let email_address = tokens.next().filter(|t| is_name(t))?;
        let res = Soa {
            name_server: name_server.into(),
            email_address: email_address.into(),
            serial_number: parse_decimal(tokens.next()?)?,
            refresh: parse_decimal(tokens.next()?)?,
            retry: parse_decimal(tokens.next()?)?,
            expiry: parse_decimal(tokens.next()?)?,
            nxdomain: parse_decimal(tokens.next()?)?,
        };
        if !tokens.is_empty() {
            return None;
        }
        Some(res)
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.name_server,
            self.email_address,
            self.serial_number,
            self.refresh,
            self.retry,
            self.expiry,
            self.nxdomain
        )
    }
}

//------------ Ds ------------------------------------------------------------

/// Ds record data.
///
/// The DS record type is defined in RFC 4034, section 5.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Ds {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,

    /// The hex encoded digest.
    pub digest: String,
}

impl Ds {
    /// Scans the data from `key-tag algorithm digest-type digest…`.
    pub fn scan(data: &str) -> Option<Self> {
        let mut tokens = Tokens::new(data);
        let key_tag = parse_decimal(tokens.next()?)?;
        let algorithm = parse_decimal(tokens.next()?)?;
        let digest_type = parse_decimal(tokens.next()?)?;
        let digest = scan_blob(&mut tokens)?;
        Some(Ds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        })
    }
}

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.key_tag, self.algorithm, self.digest_type, self.digest
        )
    }
}

//------------ Helper Functions ----------------------------------------------

/// Takes the rest of the tokens as a blob without white space.
///
/// The blob must not be empty.
fn scan_blob(tokens: &mut Tokens) -> Option<String> {
    let res = collapse_space(tokens.remainder());
    if res.is_empty() {
        None
    } else {
        Some(res)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dnskey() {
        let key = Dnskey::scan("257 3 8 AwEAAagAIKlVZrpC6Ia7\n  gEzahOR+9W29 euxh").unwrap();
        assert_eq!(key.flags, 257);
        assert_eq!(key.protocol, 3);
        assert_eq!(key.algorithm, 8);
        assert_eq!(key.public_key, "AwEAAagAIKlVZrpC6Ia7gEzahOR+9W29euxh");
        assert_eq!(
            format!("{}", key),
            "257 3 8 AwEAAagAIKlVZrpC6Ia7gEzahOR+9W29euxh"
        );

        assert_eq!(Dnskey::scan("257 3 8"), None);
        assert_eq!(Dnskey::scan("257 3 8    "), None);
        assert_eq!(Dnskey::scan("257 3 x AwEA"), None);
        assert_eq!(Dnskey::scan("65536 3 8 AwEA"), None);
        assert_eq!(Dnskey::scan("257 3 300 AwEA"), None);
    }

    #[test]
    fn rrsig() {
        let sig = Rrsig::scan(
            "A 8 3 3600 20240101000000 20231201000000 12345 example.com. \
             oJB1W6WNGv+ldvQ3WDG0MQkg5IEhjRip8WTr PYGv07h108dUKGMeDPKijVCH",
        )
        .unwrap();
        assert_eq!(sig.type_covered, "A");
        assert_eq!(sig.algorithm, 8);
        assert_eq!(sig.labels, 3);
        assert_eq!(sig.original_ttl, 3600);
        assert_eq!(sig.signature_expiration, 20240101000000);
        assert_eq!(sig.signature_inception, 20231201000000);
        assert_eq!(sig.key_tag, 12345);
        assert_eq!(sig.signers_name, "example.com.");
        assert_eq!(
            sig.signature,
            "oJB1W6WNGv+ldvQ3WDG0MQkg5IEhjRip8WTrPYGv07h108dUKGMeDPKijVCH"
        );

        assert_eq!(
            Rrsig::scan("A 8 3 3600 1 2 12345 example.com."),
            None
        );
        assert_eq!(
            Rrsig::scan("A 8 3 3600 1 2 12345 exa_mple.com. sig"),
            None
        );
    }

    #[test]
    fn soa() {
        let soa =
            Soa::scan("ns.example.com. host.example.com. 1 7200 3600 1209600 300  ")
                .unwrap();
        assert_eq!(soa.name_server, "ns.example.com.");
        assert_eq!(soa.email_address, "host.example.com.");
        assert_eq!(soa.serial_number, 1);
        assert_eq!(soa.refresh, 7200);
        assert_eq!(soa.retry, 3600);
        assert_eq!(soa.expiry, 1209600);
        assert_eq!(soa.nxdomain, 300);
    }

    #[test]
    fn soa_requires_trailing_space() {
        assert_eq!(Soa::scan("ns. host. 1 2 3 4 5"), None);
        assert!(Soa::scan("ns. host. 1 2 3 4 5 ").is_some());
        assert!(Soa::scan("ns. host. 1 2 3 4 5\t").is_some());
    }

    #[test]
    fn soa_rejects_other_shapes() {
        assert_eq!(Soa::scan("ns. host. 1 2 3 4 "), None);
        assert_eq!(Soa::scan("ns. host. 1 2 3 4 5 6 "), None);
        assert_eq!(Soa::scan("ns. host. 1 2 3 4 1h "), None);
        assert_eq!(Soa::scan("ns. host. 4294967296 2 3 4 5 "), None);
    }

    #[test]
    fn ds() {
        let ds = Ds::scan(
            "60485 5 1 2BB183AF5F22588179A53B0A\n 98631FAD1A292118 ",
        )
        .unwrap();
        assert_eq!(ds.key_tag, 60485);
        assert_eq!(ds.algorithm, 5);
        assert_eq!(ds.digest_type, 1);
        assert_eq!(ds.digest, "2BB183AF5F22588179A53B0A98631FAD1A292118");
        assert_eq!(Ds::scan("60485 5 1"), None);
        assert_eq!(Ds::scan("60485 5 1    "), None);
        assert_eq!(Ds::scan("70000 8 2 ab"), None);
    }
}
