//! Errors of the zonefile scanner.
//!
//! Most anomalies in zonefile data are not errors for this crate: lines
//! that can’t be understood are dropped and record data that can’t be
//! decoded ends up in an unknown record. The errors defined here are the
//! few conditions that leave an entry in a state that can’t be resolved.

use core::fmt;
use std::io;

//------------ Error ---------------------------------------------------------

/// An error happened while scanning zonefile data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input ended inside a parenthesized entry.
    ///
    /// The entry is dropped.
    IncompleteRecord {
        /// The physical line the entry started on.
        line: usize,
    },

    /// An entry grew beyond the maximum length allowed.
    ///
    /// The entry is dropped. Scanning can continue with more data.
    EntryTooLong {
        /// The physical line the entry started on.
        line: usize,

        /// The maximum length of an entry in octets.
        limit: usize,
    },
}

impl Error {
    pub(crate) fn incomplete_record(line: usize) -> Self {
        Error::IncompleteRecord { line }
    }

    pub(crate) fn entry_too_long(line: usize, limit: usize) -> Self {
        Error::EntryTooLong { line, limit }
    }

    /// Returns the physical line number the offending entry started on.
    pub fn line(&self) -> usize {
        match *self {
            Error::IncompleteRecord { line } => line,
            Error::EntryTooLong { line, .. } => line,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IncompleteRecord { line } => {
                write!(f, "{}: incomplete record: missing ')'", line)
            }
            Error::EntryTooLong { line, limit } => {
                write!(f, "{}: entry longer than {} octets", line, limit)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Error::incomplete_record(12)),
            "12: incomplete record: missing ')'"
        );
        assert_eq!(
            format!("{}", Error::entry_too_long(3, 16)),
            "3: entry longer than 16 octets"
        );
        assert_eq!(Error::entry_too_long(3, 16).line(), 3);
    }

    #[test]
    fn into_io_error() {
        let err = io::Error::from(Error::incomplete_record(1));
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
