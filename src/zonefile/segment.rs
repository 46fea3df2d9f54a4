//! Splitting raw data into logical lines.
//!
//! Zonefile data arrives in chunks of arbitrary size. The [`Segmenter`]
//! collects these chunks, cuts them into physical lines, strips comments,
//! and joins parenthesized entries spanning several physical lines into a
//! single logical line.
//!
//! Parentheses are not nested: the first closing parenthesis ends the
//! entry no matter how many opening ones were seen before.

use super::error::Error;
use bytes::{BufMut, BytesMut};
use core::mem;
use tracing::{trace, warn};

//------------ Segment -------------------------------------------------------

/// An item produced by the segmenter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    /// A comment.
    Comment {
        /// The comment starting with the semicolon.
        ///
        /// The line terminator is not included.
        text: String,

        /// Everything on the physical line before the semicolon.
        preceding: String,
    },

    /// A logical line.
    Line(String),
}

//------------ State ---------------------------------------------------------

/// The state of the segmenter regarding parenthesized entries.
#[derive(Clone, Debug, Default)]
enum State {
    /// No parenthesized entry is open.
    #[default]
    Idle,

    /// A parenthesized entry has been opened but not yet closed.
    Open {
        /// The physical line the entry started on.
        start: usize,

        /// The physical lines collected so far, including line feeds.
        buf: BytesMut,
    },
}

//------------ Segmenter -----------------------------------------------------

/// Cuts a stream of chunks into logical lines.
///
/// Data is added via [`push`][Self::push]. Every segment that can be
/// derived from the data seen so far is handed to the provided closure
/// before the method returns. Once all data has been added,
/// [`finish`][Self::finish] processes a final unterminated line and checks
/// that no parenthesized entry is left open.
#[derive(Clone, Debug)]
pub struct Segmenter {
    /// Data of a physical line that hasn’t been terminated yet.
    pending: BytesMut,

    /// The parenthesized entry state.
    state: State,

    /// The number of the next physical line, starting at 1.
    line_num: usize,

    /// Whether the rest of the current physical line is dropped.
    ///
    /// This is set when an unterminated line grew too long.
    discard: bool,

    /// The maximum length of a pending line or an open entry.
    max_entry_len: usize,
}

impl Segmenter {
    /// Creates a new segmenter.
    pub fn new(max_entry_len: usize) -> Self {
        Segmenter {
            pending: BytesMut::new(),
            state: State::Idle,
            line_num: 1,
            discard: false,
            max_entry_len,
        }
    }

    /// Returns whether a parenthesized entry is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// Returns the number of the physical line processed next.
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Adds a chunk of data.
    ///
    /// All complete physical lines in the data are processed and the
    /// resulting segments passed to `op` in order. An incomplete line at
    /// the end of the chunk is kept until more data arrives.
    ///
    /// If an entry grows too long, it is dropped and the remaining lines of
    /// the chunk are still processed. The first such error is returned
    /// afterwards. An unterminated line growing too long is dropped
    /// including the part of it arriving with later chunks.
    pub fn push<F: FnMut(Segment)>(
        &mut self,
        chunk: &[u8],
        mut op: F,
    ) -> Result<(), Error> {
        self.pending.extend_from_slice(chunk);
        let mut res = Ok(());
        while let Some(pos) = self.pending.iter().position(|ch| *ch == b'\n')
        {
            let line = self.pending.split_to(pos + 1);
            if mem::take(&mut self.discard) {
                trace!(line = self.line_num - 1, "end of dropped line");
                continue;
            }
            if let Err(err) = self.process_line(&line, &mut op) {
                res = res.and(Err(err));
            }
        }
        if self.discard {
            self.pending.clear();
        } else if self.pending.len() > self.max_entry_len {
            warn!(
                line = self.line_num,
                len = self.pending.len(),
                "dropping overlong line"
            );
            res = res.and(Err(Error::entry_too_long(
                self.line_num,
                self.max_entry_len,
            )));
            self.pending.clear();
            self.discard = true;
            self.line_num += 1;
            if let State::Open { start, .. } = mem::take(&mut self.state) {
                warn!(line = start, "dropping entry with overlong line");
            }
        }
        res
    }

    /// Signals the end of data.
    ///
    /// A last physical line without a line terminator is processed like
    /// any other. If a parenthesized entry is still open afterwards, it is
    /// dropped and an error is returned. In any case, the segmenter is
    /// ready for new data afterwards.
    pub fn finish<F: FnMut(Segment)>(&mut self, mut op: F) -> Result<(), Error> {
        let discard = mem::take(&mut self.discard);
        let res = if self.pending.is_empty() || discard {
            self.pending.clear();
            Ok(())
        } else {
            let line = self.pending.split();
            self.process_line(&line, &mut op)
        };
        self.line_num = 1;
        res?;
        match mem::take(&mut self.state) {
            State::Idle => Ok(()),
            State::Open { start, .. } => {
                warn!(line = start, "input ended inside parentheses");
                Err(Error::incomplete_record(start))
            }
        }
    }

    /// Processes a single physical line.
    ///
    /// The line may or may not end in a line feed.
    fn process_line<F: FnMut(Segment)>(
        &mut self,
        line: &[u8],
        op: &mut F,
    ) -> Result<(), Error> {
        let line_num = self.line_num;
        self.line_num += 1;

        let (content, terminated) = match line.split_last() {
            Some((b'\n', content)) => (content, true),
            _ => (line, false),
        };

        // Comments come first, even inside parentheses. A line with nothing
        // before the comment doesn’t contribute to any entry.
        let content = match content.iter().position(|ch| *ch == b';') {
            Some(pos) => {
                let (preceding, text) = content.split_at(pos);
                op(Segment::Comment {
                    text: decode(strip_cr(text)),
                    preceding: decode(preceding),
                });
                if preceding.is_empty() {
                    return Ok(());
                }
                preceding
            }
            None => content,
        };

        if !self.is_open() && !content.contains(&b'(') {
            op(Segment::Line(decode(strip_cr(content))));
            return Ok(());
        }

        let (start, mut buf) = match mem::take(&mut self.state) {
            State::Open { start, buf } => (start, buf),
            State::Idle => {
                trace!(line = line_num, "opening parentheses");
                (line_num, BytesMut::new())
            }
        };
        buf.extend_from_slice(content);
        if terminated {
            buf.put_u8(b'\n');
        }

        if content.contains(&b')') {
            op(Segment::Line(join(&buf)));
            Ok(())
        } else if buf.len() > self.max_entry_len {
            warn!(line = start, len = buf.len(), "dropping overlong entry");
            Err(Error::entry_too_long(start, self.max_entry_len))
        } else {
            self.state = State::Open { start, buf };
            Ok(())
        }
    }
}

//------------ Helper Functions ----------------------------------------------

/// Converts the collected lines of an entry into a single line.
///
/// Parentheses and line terminators each become a single space.
fn join(buf: &[u8]) -> String {
    decode(buf)
        .chars()
        .map(|ch| match ch {
            '(' | ')' | '\r' | '\n' => ' ',
            ch => ch,
        })
        .collect()
}

/// Removes a carriage return left over from a CR LF line terminator.
fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn decode(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

//============ Tests =========================================================
