//! Events produced by the scanner and the sink receiving them.

use super::classify::{Directive, GenericRecord};
use super::dispatch::RecordData;
use core::fmt;

//------------ Event ---------------------------------------------------------

/// Something found in zonefile data.
///
/// For every logical line, a [`Line`][Event::Line] event is produced
/// first. It is followed by the outcome of classifying the line: a
/// directive, a malformed directive, or a record. A record results in a
/// [`Record`][Event::Record] event followed by either a
/// [`Data`][Event::Data] or an [`Unknown`][Event::Unknown] event.
///
/// Comment events are produced as soon as the physical line containing the
/// comment has been seen, i.e., before the line event for the logical line
/// the comment is part of.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Event {
    /// A comment.
    Comment {
        /// The comment starting with the semicolon.
        ///
        /// Unlike the raw rest of the line, this excludes the line
        /// terminator.
        text: String,

        /// Everything on the physical line before the semicolon.
        preceding: String,
    },

    /// A logical line.
    Line(String),

    /// A directive.
    Directive(Directive),

    /// A line starting with `$` that isn’t a valid directive.
    MalformedDirective(String),

    /// A record.
    Record {
        record: GenericRecord,

        /// The logical line the record was scanned from.
        line: String,
    },

    /// A record of a known type with decoded data.
    Data {
        data: RecordData,
        record: GenericRecord,

        /// The logical line the record was scanned from.
        line: String,
    },

    /// A record whose data couldn’t be decoded.
    Unknown(GenericRecord),

    /// A line that is neither a record nor a directive.
    ///
    /// This is only produced in strict mode.
    Unparsed(String),
}

impl Event {
    /// Returns the kind of the event.
    pub fn kind(&self) -> EventKind {
        match *self {
            Event::Comment { .. } => EventKind::Comment,
            Event::Line(_) => EventKind::Line,
            Event::Directive(_) => EventKind::Directive,
            Event::MalformedDirective(_) => EventKind::MalformedDirective,
            Event::Record { .. } => EventKind::Rr,
            Event::Data { ref data, .. } => match *data {
                RecordData::Ns(_) => EventKind::Ns,
                RecordData::A(_) => EventKind::A,
                RecordData::Aaaa(_) => EventKind::Aaaa,
                RecordData::Cname(_) => EventKind::Cname,
                RecordData::Dname(_) => EventKind::Dname,
                RecordData::Dnskey(_) => EventKind::Dnskey,
                RecordData::Rrsig(_) => EventKind::Rrsig,
                RecordData::Soa(_) => EventKind::Soa,
                RecordData::Ds(_) => EventKind::Ds,
            },
            Event::Unknown(_) => EventKind::Unknown,
            Event::Unparsed(_) => EventKind::Unparsed,
        }
    }

    /// Returns the generic record if this is a record related event.
    pub fn record(&self) -> Option<&GenericRecord> {
        match *self {
            Event::Record { ref record, .. }
            | Event::Data { ref record, .. }
            | Event::Unknown(ref record) => Some(record),
            _ => None,
        }
    }
}

//------------ EventKind -----------------------------------------------------

/// The kind of an event.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EventKind {
    Comment,
    Directive,
    MalformedDirective,
    Line,
    Rr,
    Ns,
    A,
    Aaaa,
    Cname,
    Dname,
    Dnskey,
    Rrsig,
    Soa,
    Ds,
    Unknown,
    Unparsed,
}

impl EventKind {
    /// Returns the name of the event kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Comment => "comment",
            EventKind::Directive => "directive",
            EventKind::MalformedDirective => "malformed-directive",
            EventKind::Line => "line",
            EventKind::Rr => "rr",
            EventKind::Ns => "ns",
            EventKind::A => "a",
            EventKind::Aaaa => "aaaa",
            EventKind::Cname => "cname",
            EventKind::Dname => "dname",
            EventKind::Dnskey => "dnskey",
            EventKind::Rrsig => "rrsig",
            EventKind::Soa => "soa",
            EventKind::Ds => "ds",
            EventKind::Unknown => "unknown",
            EventKind::Unparsed => "unparsed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//------------ Sink ----------------------------------------------------------

/// A receiver of events.
///
/// Events are delivered in the order they appear in the data. The sink is
/// called synchronously while the data is being scanned, so all events
/// for a chunk of data have been delivered when the write call returns.
///
/// The trait is implemented for all closures taking an event and for a vec
/// of events which simply collects them.
pub trait Sink {
    /// Receives the next event.
    fn emit(&mut self, event: Event);
}

impl<F: FnMut(Event)> Sink for F {
    fn emit(&mut self, event: Event) {
        self(event)
    }
}

impl Sink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event)
    }
}

//============ Tests =========================================================
