//! Adapting the parser to `std::io`.

use super::config::Config;
use super::error::Error;
use super::event::Sink;
use super::parser::Parser;
use std::io;

//------------ ZoneWriter ----------------------------------------------------

/// A writer feeding everything written to it into a parser.
///
/// The writer owns both the parser and the sink receiving the events. Once
/// all data has been written, [`finish`][Self::finish] returns the sink.
///
/// Errors of the parser are reported as I/O errors of kind
/// `InvalidData`.
#[derive(Debug)]
pub struct ZoneWriter<S> {
    parser: Parser,
    sink: S,
}

impl<S: Sink> ZoneWriter<S> {
    /// Creates a new writer with the default configuration.
    pub fn new(sink: S) -> Self {
        Self::with_config(Config::default(), sink)
    }

    /// Creates a new writer with the given configuration.
    pub fn with_config(config: Config, sink: S) -> Self {
        ZoneWriter {
            parser: Parser::with_config(config),
            sink,
        }
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Finishes parsing and returns the sink.
    pub fn finish(mut self) -> Result<S, Error> {
        self.parser.finish(&mut self.sink)?;
        Ok(self.sink)
    }
}

impl<S: Sink> io::Write for ZoneWriter<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.parser.write(buf, &mut self.sink)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//------------ load ----------------------------------------------------------

/// Parses all data from a reader.
///
/// Returns the sink once all data has been processed.
pub fn load<R: io::Read + ?Sized, S: Sink>(
    read: &mut R,
    sink: S,
) -> Result<S, io::Error> {
    let mut writer = ZoneWriter::new(sink);
    io::copy(read, &mut writer)?;
    Ok(writer.finish()?)
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::zonefile::event::{Event, EventKind};
    use std::io::Write;

    #[test]
    fn write_in_pieces() {
        let mut kinds = Vec::new();
        let mut writer = ZoneWriter::new(|event: Event| kinds.push(event.kind()));
        writer.write_all(b"ns1 IN A 1.2").unwrap();
        writer.write_all(b".3.4\n@ IN SOA ns1 host (\n 1 2 3 4 5 )").unwrap();
        writer.flush().unwrap();
        let _sink = writer.finish().unwrap();
        assert_eq!(
            kinds,
            [
                EventKind::Line,
                EventKind::Rr,
                EventKind::A,
                EventKind::Line,
                EventKind::Rr,
                EventKind::Soa,
            ]
        );
    }

    #[test]
    fn write_continues_after_overlong_entry() {
        let mut writer = ZoneWriter::with_config(
            Config::default().with_max_entry_len(16),
            Vec::<Event>::new(),
        );
        let err = writer
            .write(b"x (\n0123456789\n0123456789\nb IN A 1.2.3.4\n")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "1: entry longer than 16 octets");
        let kinds: Vec<_> =
            writer.finish().unwrap().iter().map(Event::kind).collect();
        assert_eq!(kinds, [EventKind::Line, EventKind::Rr, EventKind::A]);
    }

    #[test]
    fn load_reports_incomplete_record() {
        let mut data: &[u8] = b"a (\n IN A 1.2.3.4\n";
        let err = load(&mut data, Vec::<Event>::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "1: incomplete record: missing ')'");
    }
}
