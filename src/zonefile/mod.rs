//! Scanning of zonefiles.
//!
//! This module scans the textual representation of DNS data defined in
//! RFC 1035, section 5 – commonly known as zonefiles or master files –
//! incrementally and reports what it finds as a sequence of [events][Event].
//!
//! Data is handed to a [`Parser`] in chunks of any size. The parser keeps
//! only the state necessary to resume: an unfinished physical line and a
//! parenthesized entry still waiting for its closing parenthesis. Comments
//! are reported as they are found. Each logical line is classified as a
//! [directive][Directive], a [record][GenericRecord], or neither. Records
//! of some types additionally have their data decoded into [`RecordData`];
//! all others are reported as unknown.
//!
//! The scanner is lenient. Lines it doesn’t understand are dropped unless
//! [strict mode][Config::strict] is enabled. Only an entry left open at the
//! end of input and an entry growing too long are reported as
//! [errors][Error].
//!
//! Directives are recognized but not acted upon, names are not made
//! absolute, and the data of unknown record types is not interpreted.
//!
//! # Example
//!
//! ```
//! use zonestream::zonefile::{Event, Parser, RecordData};
//!
//! let mut addrs = Vec::new();
//! let mut parser = Parser::new();
//! let mut sink = |event: Event| {
//!     if let Event::Data { data: RecordData::A(addr), .. } = event {
//!         addrs.push(addr)
//!     }
//! };
//! parser.write(b"www 3600 IN A 192.0.2.1\nmail IN (\n", &mut sink).unwrap();
//! parser.write(b" A 192.0.2.2 )\n", &mut sink).unwrap();
//! parser.finish(&mut sink).unwrap();
//! assert_eq!(addrs, ["192.0.2.1", "192.0.2.2"]);
//! ```

pub use self::classify::{Classified, Directive, GenericRecord};
pub use self::config::Config;
pub use self::dispatch::RecordData;
pub use self::error::Error;
pub use self::event::{Event, EventKind, Sink};
pub use self::io::{load, ZoneWriter};
pub use self::parser::{parse, parse_events, Parser};
pub use self::rdata::{Dnskey, Ds, Rrsig, Soa};
pub use self::segment::{Segment, Segmenter};

pub mod classify;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod io;
pub mod parser;
pub mod rdata;
pub mod scan;
pub mod segment;
