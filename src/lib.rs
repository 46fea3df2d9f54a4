//! An incremental scanner for DNS zonefiles.
//!
//! This crate reads zonefiles – the textual representation of DNS data
//! also known as master files – in chunks of arbitrary size and reports
//! comments, directives, and records as they are found. It is meant for
//! tools that need to look at zonefile data without loading it into a
//! complete zone, such as linters, converters, or log processors.
//!
//! # Modules
//!
//! * [iana] contains the record types and classes the scanner knows, and
//! * [zonefile] contains the scanner itself.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `serde`: Enables serde serialization for the events and all the types
//!   they contain, as well as deserialization of the
//!   [configuration][zonefile::Config]. This feature is enabled by default.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod iana;
pub mod zonefile;
