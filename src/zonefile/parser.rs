//! The incremental zonefile parser.

use super::classify::Classified;
use super::config::Config;
use super::dispatch::RecordData;
use super::error::Error;
use super::event::{Event, Sink};
use super::segment::{Segment, Segmenter};
use tracing::{debug, trace};

//------------ Parser --------------------------------------------------------

/// A parser turning zonefile data into events.
///
/// Data is given to the parser in chunks of any size via
/// [`write`][Self::write]. Each call processes everything that can be
/// processed with the data seen so far and hands the resulting events to
/// the sink before returning. The only state kept between calls is an
/// unfinished physical line and an open parenthesized entry.
///
/// When all data has been written, [`finish`][Self::finish] has to be
/// called to process a last line lacking a line feed and to learn about
/// an unclosed parenthesized entry.
///
/// The parser does not do any I/O itself. See
/// [`ZoneWriter`][super::ZoneWriter] for an adapter to `std::io`.
#[derive(Clone, Debug)]
pub struct Parser {
    config: Config,
    segmenter: Segmenter,
}

impl Parser {
    /// Creates a new parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new parser with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Parser {
            config,
            segmenter: Segmenter::new(config.max_entry_len),
        }
    }

    /// Returns the configuration of the parser.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the parser is inside a parenthesized entry.
    pub fn in_continuation(&self) -> bool {
        self.segmenter.is_open()
    }

    /// Processes a chunk of data.
    ///
    /// If an entry grows too long, it is dropped while the rest of the
    /// chunk is still processed. The error is returned afterwards and
    /// further data can be written.
    pub fn write<S: Sink>(
        &mut self,
        chunk: &[u8],
        sink: &mut S,
    ) -> Result<(), Error> {
        let strict = self.config.strict;
        self.segmenter
            .push(chunk, |segment| process_segment(strict, segment, sink))
    }

    /// Signals that all data has been written.
    ///
    /// Returns an error if the data ended inside a parenthesized entry. The
    /// parser can be used for new data afterwards.
    pub fn finish<S: Sink>(&mut self, sink: &mut S) -> Result<(), Error> {
        let strict = self.config.strict;
        self.segmenter
            .finish(|segment| process_segment(strict, segment, sink))
    }

    /// Processes a single logical line.
    ///
    /// The line should be free of comments and parentheses. This bypasses
    /// the line handling entirely and doesn’t touch the parser’s state.
    pub fn process_line<S: Sink>(&self, line: &str, sink: &mut S) {
        process_line(self.config.strict, line.into(), sink)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

//------------ Functions -----------------------------------------------------

/// Parses complete zonefile data.
///
/// This is a shortcut for creating a parser with the default
/// configuration, writing `data` to it, and finishing it.
pub fn parse<S: Sink>(data: &[u8], sink: &mut S) -> Result<(), Error> {
    let mut parser = Parser::new();
    parser.write(data, sink)?;
    parser.finish(sink)
}

/// Parses complete zonefile data into a vec of events.
pub fn parse_events(data: &[u8]) -> Result<Vec<Event>, Error> {
    let mut res = Vec::new();
    parse(data, &mut res)?;
    Ok(res)
}

fn process_segment<S: Sink>(strict: bool, segment: Segment, sink: &mut S) {
    match segment {
        Segment::Comment { text, preceding } => {
            sink.emit(Event::Comment { text, preceding })
        }
        Segment::Line(line) => process_line(strict, line, sink),
    }
}

fn process_line<S: Sink>(strict: bool, line: String, sink: &mut S) {
    trace!(line = %line, "logical line");
    let classified = Classified::classify(&line);
    sink.emit(Event::Line(line.clone()));
    match classified {
        Classified::Directive(directive) => {
            sink.emit(Event::Directive(directive))
        }
        Classified::MalformedDirective => {
            debug!(line = %line, "malformed directive");
            sink.emit(Event::MalformedDirective(line))
        }
        Classified::Record(record) => {
            trace!(record = %record, "record");
            sink.emit(Event::Record {
                record: record.clone(),
                line: line.clone(),
            });
            match RecordData::dispatch(&record) {
                Some(data) => sink.emit(Event::Data { data, record, line }),
                None => {
                    debug!(rtype = %record.rtype, "unknown record data");
                    sink.emit(Event::Unknown(record))
                }
            }
        }
        Classified::Unparsed => {
            if strict {
                sink.emit(Event::Unparsed(line))
            } else {
                debug!(line = %line, "dropping unparsed line");
            }
        }
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::iana::{Class, Rtype};
    use crate::zonefile::event::EventKind;

    fn kinds(events: &[Event]) -> Vec<EventKind> {
        events.iter().map(Event::kind).collect()
    }

    #[test]
    fn event_order() {
        let events =
            parse_events(b"a.example. IN A 1.2.3.4 ; note\n").unwrap();
        assert_eq!(
            kinds(&events),
            [EventKind::Comment, EventKind::Line, EventKind::Rr, EventKind::A]
        );
        assert_eq!(
            events[0],
            Event::Comment {
                text: "; note".into(),
                preceding: "a.example. IN A 1.2.3.4 ".into(),
            }
        );
        match events[3] {
            Event::Data {
                data: RecordData::A(ref data),
                ref record,
                ref line,
            } => {
                assert_eq!(data, "1.2.3.4");
                assert_eq!(record.class, Some(Class::IN));
                assert_eq!(line, "a.example. IN A 1.2.3.4 ");
            }
            ref other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn lenient_and_strict() {
        assert_eq!(
            kinds(&parse_events(b"!!! not a record\n").unwrap()),
            [EventKind::Line]
        );

        let mut parser = Parser::with_config(Config::strict());
        let mut events = Vec::new();
        let mut sink = |event: Event| events.push(event);
        parser.write(b"!!! not a record\n", &mut sink).unwrap();
        parser.finish(&mut sink).unwrap();
        assert_eq!(
            events,
            [
                Event::Line("!!! not a record".into()),
                Event::Unparsed("!!! not a record".into()),
            ]
        );
    }

    #[test]
    fn malformed_directive() {
        let events = parse_events(b"$TTL\n$TTL 3600\n").unwrap();
        assert_eq!(
            kinds(&events),
            [
                EventKind::Line,
                EventKind::MalformedDirective,
                EventKind::Line,
                EventKind::Directive
            ]
        );
    }

    #[test]
    fn unknown_fallback() {
        let events = parse_events(b"@ 300 IN TXT \"v=spf1 -all\"\n").unwrap();
        assert_eq!(
            kinds(&events),
            [EventKind::Line, EventKind::Rr, EventKind::Unknown]
        );
        match (&events[1], &events[2]) {
            (Event::Record { record, .. }, Event::Unknown(unknown)) => {
                assert_eq!(record, unknown);
                assert_eq!(unknown.rtype, Rtype::Txt);
                assert_eq!(unknown.data, "\"v=spf1 -all\"");
            }
            other => panic!("unexpected events {:?}", other),
        }
    }

    #[test]
    fn incomplete_record() {
        let mut parser = Parser::new();
        let mut events = Vec::new();
        let mut sink = |event: Event| events.push(event);
        parser.write(b"a IN A 1.2.3.4\nb (\n", &mut sink).unwrap();
        assert!(parser.in_continuation());
        assert_eq!(parser.finish(&mut sink), Err(Error::incomplete_record(2)));
        assert!(!parser.in_continuation());
        assert_eq!(kinds(&events), [EventKind::Line, EventKind::Rr, EventKind::A]);
    }

    #[test]
    fn process_line_directly() {
        let parser = Parser::new();
        let mut events = Vec::new();
        parser.process_line("ns1 NS ns.example.", &mut |event: Event| {
            events.push(event)
        });
        assert_eq!(
            kinds(&events),
            [EventKind::Line, EventKind::Rr, EventKind::Ns]
        );
    }
}
