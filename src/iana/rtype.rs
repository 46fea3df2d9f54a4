//! Resource record types.

mnemonic_enum! {
    /// The record types recognized in the type slot of a record.
    ///
    /// A record with any other type keyword does not match the record
    /// grammar at all. Only some of these have dedicated record data
    /// handling, see [`RecordData`][crate::zonefile::RecordData].
    Rtype, "unknown record type";

    /// A host address.
    (A => "A")

    /// An IPv6 host address.
    (Aaaa => "AAAA")

    /// An authoritative name server.
    (Ns => "NS")

    /// A mail destination (obsolete).
    (Md => "MD")

    /// A mail forwarder (obsolete).
    (Mf => "MF")

    /// The canonical name for an alias.
    (Cname => "CNAME")

    /// Delegation name.
    (Dname => "DNAME")

    /// DNS key.
    (Dnskey => "DNSKEY")

    /// Delegation signer.
    (Ds => "DS")

    /// Security key.
    (Key => "KEY")

    /// Marks the start of a zone of authority.
    (Soa => "SOA")

    /// A mailbox domain name.
    (Mb => "MB")

    /// A mail group member.
    (Mg => "MG")

    /// A mail rename domain name.
    (Mr => "MR")

    /// A null resource record.
    (Null => "NULL")

    /// A well known service description.
    (Wks => "WKS")

    /// A domain name pointer.
    (Ptr => "PTR")

    /// Host information.
    (Hinfo => "HINFO")

    /// Mailbox or mail list information.
    (Minfo => "MINFO")

    /// Mail exchange.
    (Mx => "MX")

    /// Text strings.
    (Txt => "TXT")

    /// Naming authority pointer.
    (Naptr => "NAPTR")

    /// Next secure.
    (Nsec => "NSEC")

    /// Resource record signature.
    (Rrsig => "RRSIG")

    /// Sender policy framework.
    (Spf => "SPF")

    /// Server selection.
    (Srv => "SRV")

    /// Uniform resource identifier.
    (Uri => "URI")
}

//============ Tests =========================================================
