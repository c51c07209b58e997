//! Errors reported by the [`PrefixIndex`](crate::PrefixIndex).

use thiserror::Error;

/// The category an [`Error`] belongs to.
///
/// Every failure of this crate is a synchronous rejection of caller input, so there is
/// only one kind. It exists so hosts can match on the category without enumerating
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input supplied by the caller, never retried.
    InvalidArgument,
}

/// Input rejected by [`PrefixIndex::ingest`](crate::PrefixIndex::ingest) or
/// [`PrefixIndex::query`](crate::PrefixIndex::query).
///
/// A missing bucket or a prefix without matches is not an error; those queries return an
/// empty [`Matches`](crate::Matches).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The query prefix was empty or contained only whitespace.
    #[error("invalid argument: prefix is empty or whitespace-only")]
    EmptyPrefix,

    /// The query prefix had more chars than the configured maximum.
    #[error("invalid argument: prefix has {len} chars, maximum is {max}")]
    PrefixTooLong {
        /// Length of the rejected prefix in chars.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// A record had no given name, surname or patronymic after trimming.
    #[error("invalid argument: record {position} has no name fields")]
    EmptyRecord {
        /// Position of the record inside the ingested batch.
        position: usize,
    },
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyPrefix | Error::PrefixTooLong { .. } | Error::EmptyRecord { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}
