//! DNS CLASSes.

mnemonic_enum! {
    /// The classes recognized in the class slot of a record.
    ///
    /// For all practical purposes, only `IN` is in use today.
    Class, "unknown class";

    /// Internet
    (IN => "IN")

    /// CSNET
    ///
    /// Obsolete and only listed because RFC 1035 still does.
    (CS => "CS")

    /// Chaos
    (CH => "CH")

    /// Hesiod
    (HS => "HS")
}

//============ Tests =========================================================
