//! Dispatching generic records to typed record data.

use super::classify::GenericRecord;
use super::rdata::{Dnskey, Ds, Rrsig, Soa};
use crate::iana::Rtype;
use core::fmt;

//------------ RecordData ----------------------------------------------------

/// The decoded data of a record of a known type.
///
/// For the name and address types, the data is kept as the string it was
/// given as. The DNSSEC types and SOA are decoded into their fields.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RecordData {
    Ns(String),
    A(String),
    Aaaa(String),
    Cname(String),
    Dname(String),
    Dnskey(Dnskey),
    Rrsig(Rrsig),
    Soa(Soa),
    Ds(Ds),
}

impl RecordData {
    /// Decodes the data of a generic record.
    ///
    /// Returns `None` if the record type has no dedicated handling or if
    /// its data can’t be decoded. Such records are unknown records. This
    /// includes DNSKEY, RRSIG, and DS records with an empty key, signature,
    /// or digest and those with decimal fields too large for their type.
    pub fn dispatch(record: &GenericRecord) -> Option<Self> {
        match record.rtype {
            Rtype::Ns => Some(RecordData::Ns(record.data.clone())),
            Rtype::A => Some(RecordData::A(record.data.clone())),
            Rtype::Aaaa => Some(RecordData::Aaaa(record.data.clone())),
            Rtype::Cname => Some(RecordData::Cname(record.data.clone())),
            Rtype::Dname => Some(RecordData::Dname(record.data.clone())),
            Rtype::Dnskey => Dnskey::scan(&record.data).map(RecordData::Dnskey),
            Rtype::Rrsig => Rrsig::scan(&record.data).map(RecordData::Rrsig),
            Rtype::Soa => Soa::scan(&record.raw_data).map(RecordData::Soa),
            Rtype::Ds => Ds::scan(&record.data).map(RecordData::Ds),
            _ => None,
        }
    }

    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match *self {
            RecordData::Ns(_) => Rtype::Ns,
            RecordData::A(_) => Rtype::A,
            RecordData::Aaaa(_) => Rtype::Aaaa,
            RecordData::Cname(_) => Rtype::Cname,
            RecordData::Dname(_) => Rtype::Dname,
            RecordData::Dnskey(_) => Rtype::Dnskey,
            RecordData::Rrsig(_) => Rtype::Rrsig,
            RecordData::Soa(_) => Rtype::Soa,
            RecordData::Ds(_) => Rtype::Ds,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::Ns(ref data)
            | RecordData::A(ref data)
            | RecordData::Aaaa(ref data)
            | RecordData::Cname(ref data)
            | RecordData::Dname(ref data) => f.write_str(data),
            RecordData::Dnskey(ref data) => fmt::Display::fmt(data, f),
            RecordData::Rrsig(ref data) => fmt::Display::fmt(data, f),
            RecordData::Soa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ds(ref data) => fmt::Display::fmt(data, f),
        }
    }
}

//============ Tests =========================================================
