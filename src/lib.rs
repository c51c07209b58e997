#![no_std]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::alloc_instead_of_core, clippy::std_instead_of_alloc)]
//! `name_prefix` is an in-memory index for looking up personal names by prefix,
//!  the main feature being exact-prefix search over names built from a surname, given name and patronymic.
//!
//! ## Names
//! A [`NameRecord`] holds up to three optional fields. Each field is trimmed on its own and the
//!  non-empty ones are joined by single spaces, surname first, into the record's canonical form.
//!  The canonical form is what gets stored, sorted and matched.
//!
//! ## Building a PrefixIndex
//! Feed records in batches with [`PrefixIndex::ingest`]. Names are bucketed by their leading char
//!  and every bucket stays in ascending ordinal order across any number of ingests, with a single
//!  `O(n + k log k)` merge per touched bucket. If you ingest many batches, [`PrefixIndex::ingest_with`]
//!  lets you reuse a [`ScratchSpace`] between them.
//!
//! Finish ingesting before sharing the index: queries take `&self`, ingestion takes `&mut self`.
//!
//! ## Basic usage
//! ```rust
//! use name_prefix::{NameRecord, PrefixIndex};
//!
//! let mut index = PrefixIndex::new();
//!
//! index.ingest([
//!     NameRecord::new().with_surname("Ivanov").with_given("Ivan").with_patronymic("Ivanovich"),
//!     NameRecord::new().with_surname("Ivanova").with_given("Maria"),
//!     NameRecord::new().with_surname("Petrov").with_given("Petr"),
//! ])?;
//!
//! // borrow every name with the prefix 'Ivanov'
//! let mut found = index.query("Ivanov")?;
//!
//! assert_eq!(found, ["Ivanov Ivan Ivanovich", "Ivanova Maria"]);
//!
//! // we can refine the result without going back to the index
//! found = found.refine("Ivanova");
//!
//! assert_eq!(found, ["Ivanova Maria"]);
//!
//! // and find when something doesn't exist, which is not an error
//! assert!(index.query("Sidorov")?.is_empty());
//!
//! // while malformed prefixes are
//! assert!(index.query("   ").is_err());
//! # Ok::<(), name_prefix::Error>(())
//! ```

extern crate alloc;

pub mod config;
pub use config::{CaseMode, IndexConfig, DEFAULT_MAX_PREFIX_LEN};

pub mod error;
pub use error::{Error, ErrorKind};

pub mod index;
pub use index::PrefixIndex;

pub mod iter;

pub mod matches;
pub use matches::Matches;

pub mod record;
pub use record::NameRecord;

pub mod scratch;
pub use scratch::ScratchSpace;
