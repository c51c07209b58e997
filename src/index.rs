//! The name index itself, this module contains the [`PrefixIndex`] type.

use alloc::{borrow::Cow, collections::BTreeMap, string::String, vec::Vec};
use core::borrow::Borrow;

use crate::{
    config::{CaseMode, IndexConfig, DEFAULT_MAX_PREFIX_LEN},
    error::Error,
    iter::{Buckets, Iter},
    matches::Matches,
    record::NameRecord,
    scratch::ScratchSpace,
};

pub(crate) mod search;
mod vec_ext;

use search::prefix_range;
use vec_ext::MergeSorted;

/// A prefix search index over canonical personal names.
///
/// Names are partitioned into buckets by their leading char, and every bucket is kept in
/// ascending ordinal order, so a query costs one map lookup and `O(log n)` string
/// comparisons inside a single bucket.
///
/// Ingestion takes `&mut self` and queries take `&self`: finish ingesting before sharing the
/// index across readers. A host that needs to update a live index should wrap it in its own
/// lock, or build a fresh index and swap it in behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    buckets: BTreeMap<char, Vec<String>>,
    len: usize,
    config: IndexConfig,
}

impl PrefixIndex {
    /// Create a new empty [`PrefixIndex`] with the default [`IndexConfig`].
    ///
    /// This function will not allocate anything.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(IndexConfig {
            max_prefix_len: DEFAULT_MAX_PREFIX_LEN,
            case: CaseMode::Sensitive,
        })
    }

    /// Create a new empty [`PrefixIndex`] with the given configuration.
    #[must_use]
    pub const fn with_config(config: IndexConfig) -> Self {
        Self {
            buckets: BTreeMap::new(),
            len: 0,
            config,
        }
    }

    /// Builds an index from `records` in one call.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRecord`] if any record has no name fields after trimming.
    pub fn from_records<I>(config: IndexConfig, records: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Borrow<NameRecord>,
    {
        let mut index = Self::with_config(config);
        index.ingest(records)?;
        Ok(index)
    }

    /// Returns the configuration this index was built with.
    #[must_use]
    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Canonicalizes and stores a batch of records.
    ///
    /// Every bucket stays sorted no matter how many batches were ingested before or what
    /// order this batch is in. Identical names are all kept.
    ///
    /// The whole batch is validated before anything is stored, so a failed ingest leaves
    /// the index as it was.
    ///
    /// This operation is `O(n + k log k)` where k is the number of records and n the size of
    /// the buckets they land in.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRecord`] if any record has no name fields after trimming.
    pub fn ingest<I>(&mut self, records: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Borrow<NameRecord>,
    {
        self.ingest_with(&mut ScratchSpace::new(), records)
    }

    /// Stores a single record.
    ///
    /// Prefer [`ingest`](PrefixIndex::ingest) for many records, inserting one at a time
    /// costs `O(n)` per record.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRecord`] if the record has no name fields after trimming.
    pub fn insert(&mut self, record: &NameRecord) -> Result<(), Error> {
        self.ingest(core::iter::once(record))
    }

    /// Ingests a batch like [`ingest`](PrefixIndex::ingest), this is functionally equivalent
    /// to it, but it allows passing a scratch space to avoid reallocating the staging buffers
    /// when ingesting many batches.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRecord`] if any record has no name fields after trimming.
    pub fn ingest_with<I>(&mut self, scratch: &mut ScratchSpace, records: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Borrow<NameRecord>,
    {
        scratch.clear();

        let records = records.into_iter();
        scratch.pending.reserve(records.size_hint().0);

        for (position, record) in records.enumerate() {
            let Some(mut name) = record.borrow().canonical() else {
                return Err(Error::EmptyRecord { position });
            };

            self.config.case.apply(&mut name);
            scratch.pending.push(name);
        }

        let added = scratch.pending.len();

        // byte order on utf8 is char order, so sorting by name also groups by leading char
        scratch.pending.sort_unstable();

        let mut touched = 0usize;
        let mut pending = scratch.pending.drain(..).peekable();

        while let Some(name) = pending.next() {
            let key = leading_char(&name);
            scratch.run.push(name);

            if pending.peek().and_then(|n| leading_char(n)) == key {
                continue;
            }

            // canonical names are never empty, so there is always a key
            if let Some(key) = key {
                self.buckets
                    .entry(key)
                    .or_default()
                    .merge_sorted(&mut scratch.run);
                touched += 1;
            }
            scratch.run.clear();
        }

        self.len += added;

        log::debug!(
            "ingested {} names into {} buckets, index holds {} names in {} buckets",
            added,
            touched,
            self.len,
            self.buckets.len()
        );

        Ok(())
    }

    /// Returns every stored name that starts with `prefix`, in ascending ordinal order.
    ///
    /// Leading whitespace of `prefix` is ignored, trailing whitespace is significant. The
    /// index's case policy is applied to the prefix before matching. Every returned name
    /// starts with that normalized prefix, and the length limit is checked against it too.
    ///
    /// A prefix whose leading char has no bucket, or that matches nothing, is not an error
    /// and returns empty [`Matches`].
    ///
    /// This operation is `O(log n)`.
    ///
    /// # Examples
    /// ```rust
    /// # use name_prefix::{NameRecord, PrefixIndex};
    /// let mut index = PrefixIndex::new();
    /// index.ingest([
    ///     NameRecord::new().with_surname("Ivanov").with_given("Ivan").with_patronymic("Ivanovich"),
    ///     NameRecord::new().with_surname("Ivanova").with_given("Maria"),
    /// ])?;
    ///
    /// assert_eq!(index.query("Ivanov")?, ["Ivanov Ivan Ivanovich", "Ivanova Maria"]);
    /// assert_eq!(index.query("Ivanov ")?, ["Ivanov Ivan Ivanovich"]);
    /// assert!(index.query("Sidorov")?.is_empty());
    /// assert!(index.query(" ").is_err());
    /// # Ok::<(), name_prefix::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`Error::EmptyPrefix`] if `prefix` is empty or whitespace-only, and
    /// [`Error::PrefixTooLong`] if it has more chars than the configured maximum.
    pub fn query(&self, prefix: &str) -> Result<Matches<'_>, Error> {
        let prefix = self.normalize_prefix(prefix)?;

        let Some(bucket) = leading_char(&prefix).and_then(|c| self.buckets.get(&c)) else {
            log::trace!("query {prefix:?}: no bucket");
            return Ok(Matches::empty(self.config.case));
        };

        let range = prefix_range(bucket, &prefix);
        log::trace!("query {prefix:?}: {} of {} in bucket", range.len(), bucket.len());

        Ok(Matches::new(&bucket[range], self.config.case))
    }

    fn normalize_prefix<'p>(&self, prefix: &'p str) -> Result<Cow<'p, str>, Error> {
        let trimmed = prefix.trim_start();

        if trimmed.is_empty() {
            return Err(Error::EmptyPrefix);
        }

        let len = trimmed.chars().count();
        if len > self.config.max_prefix_len {
            return Err(Error::PrefixTooLong {
                len,
                max: self.config.max_prefix_len,
            });
        }

        Ok(self.normalize(trimmed))
    }

    /// applies the case policy, borrowing when it is a no-op
    fn normalize<'p>(&self, s: &'p str) -> Cow<'p, str> {
        match self.config.case {
            CaseMode::Sensitive => Cow::Borrowed(s),
            case @ CaseMode::Upper => {
                let mut owned = String::from(s);
                case.apply(&mut owned);
                Cow::Owned(owned)
            }
        }
    }

    /// Returns whether `name` is stored in this index, compared as a whole canonical name.
    ///
    /// Surrounding whitespace is ignored and the case policy applied.
    ///
    /// This operation is `O(log n)`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let name = self.normalize(name.trim());

        leading_char(&name)
            .and_then(|c| self.buckets.get(&c))
            .is_some_and(|b| b.binary_search_by(|s| s.as_str().cmp(&*name)).is_ok())
    }

    /// Returns the sorted bucket of names starting with `leading`, if any were stored.
    #[must_use]
    pub fn bucket(&self, leading: char) -> Option<&[String]> {
        self.buckets.get(&leading).map(Vec::as_slice)
    }

    /// An iterator over all buckets in ascending order of their leading char.
    #[must_use]
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets(self.buckets.iter())
    }

    /// Returns the number of buckets, one per distinct leading char.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// An iterator over every stored name in ascending ordinal order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.buckets, self.len)
    }

    /// Returns the number of stored names, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether nothing has been ingested yet
    ///
    /// # Examples
    /// ```rust
    /// # use name_prefix::PrefixIndex;
    /// let index = PrefixIndex::new();
    ///
    /// assert!(index.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        let mut total = 0;

        for (key, bucket) in &self.buckets {
            assert!(!bucket.is_empty(), "empty bucket {key:?}");

            for name in bucket {
                assert_eq!(name.chars().next(), Some(*key));
            }

            for w in bucket.windows(2) {
                assert!(w[0] <= w[1], "{:?} > {:?}", w[0], w[1]);
            }

            total += bucket.len();
        }

        assert_eq!(total, self.len);
    }
}

impl<'a> IntoIterator for &'a PrefixIndex {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn leading_char(s: &str) -> Option<char> {
    s.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    use crate::error::ErrorKind;

    fn surnames(v: &[&str]) -> Vec<NameRecord> {
        v.iter().map(|s| NameRecord::new().with_surname(*s)).collect()
    }

    #[test]
    fn buckets_by_leading_char() {
        let mut index = PrefixIndex::new();
        index
            .ingest(surnames(&["Petrov", "Ivanov", "Pavlov", "Abramov"]))
            .unwrap();

        assert_eq!(index.bucket_count(), 3);
        assert_eq!(index.bucket('P').unwrap(), &["Pavlov", "Petrov"]);
        assert_eq!(index.bucket('Z'), None);
        assert_eq!(
            index.buckets().map(|(c, _)| c).collect::<Vec<_>>(),
            vec!['A', 'I', 'P']
        );

        index.assert_invariants();
    }

    #[test]
    fn sorted_across_ingests() {
        let mut index = PrefixIndex::new();
        let mut scratch = ScratchSpace::new();

        index
            .ingest_with(&mut scratch, &surnames(&["Ivanova", "Petrov", "Izmailov"]))
            .unwrap();
        index
            .ingest_with(&mut scratch, &surnames(&["Ivanov", "Iakovlev", "Ivanova"]))
            .unwrap();
        index.ingest(surnames(&["Ivashkin"])).unwrap();

        index.assert_invariants();

        assert_eq!(
            index.bucket('I').unwrap(),
            &["Iakovlev", "Ivanov", "Ivanova", "Ivanova", "Ivashkin", "Izmailov"]
        );
        assert_eq!(index.len(), 7);
        assert_eq!(
            index.iter().collect::<Vec<_>>(),
            vec!["Iakovlev", "Ivanov", "Ivanova", "Ivanova", "Ivashkin", "Izmailov", "Petrov"]
        );
    }

    #[test]
    fn failed_ingest_changes_nothing() {
        let mut index = PrefixIndex::new();
        index.ingest(surnames(&["Ivanov"])).unwrap();

        let batch = vec![
            NameRecord::new().with_surname("Petrov"),
            NameRecord::new().with_given("   "),
        ];

        let err = index.ingest(&batch).unwrap_err();
        assert_eq!(err, Error::EmptyRecord { position: 1 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        assert_eq!(index.len(), 1);
        assert_eq!(index.bucket('P'), None);
        index.assert_invariants();
    }

    #[test]
    fn scratch_recovers_from_failure() {
        let mut index = PrefixIndex::new();
        let mut scratch = ScratchSpace::with_capacity(4);

        assert!(index
            .ingest_with(
                &mut scratch,
                [NameRecord::new().with_surname("Petrov"), NameRecord::new()]
            )
            .is_err());
        index
            .ingest_with(&mut scratch, surnames(&["Sidorov"]))
            .unwrap();

        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["Sidorov"]);
    }

    #[test]
    fn validates_prefix() {
        let index = PrefixIndex::from_records(IndexConfig::default(), surnames(&["Ivanov"]))
            .unwrap();

        assert_eq!(index.query("").unwrap_err(), Error::EmptyPrefix);
        assert_eq!(index.query(" \t").unwrap_err(), Error::EmptyPrefix);

        let long: String = "I".repeat(101);
        assert_eq!(
            index.query(&long).unwrap_err(),
            Error::PrefixTooLong { len: 101, max: 100 }
        );
        assert!(index.query(&long[..100]).unwrap().is_empty());

        // counted in chars, not bytes
        let cyrillic: String = "Ж".repeat(100);
        assert!(index.query(&cyrillic).is_ok());
    }

    #[test]
    fn leading_whitespace_does_not_count_towards_length() {
        let index = PrefixIndex::from_records(IndexConfig::default(), surnames(&["Ivanov"]))
            .unwrap();

        let padded = alloc::format!("{}I", " ".repeat(100));
        assert_eq!(index.query(&padded).unwrap(), ["Ivanov"]);

        let padded_long = alloc::format!("  {}", "I".repeat(101));
        assert_eq!(
            index.query(&padded_long).unwrap_err(),
            Error::PrefixTooLong { len: 101, max: 100 }
        );
    }

    #[test]
    fn custom_max_prefix_len() {
        let index = PrefixIndex::with_config(IndexConfig::default().with_max_prefix_len(3));

        assert!(index.query("abc").is_ok());
        assert_eq!(
            index.query("abcd").unwrap_err(),
            Error::PrefixTooLong { len: 4, max: 3 }
        );
    }

    #[test]
    fn leading_whitespace_in_query() {
        let mut index = PrefixIndex::new();
        index
            .ingest([NameRecord::new().with_surname("Ivanova").with_given("Maria")])
            .unwrap();

        assert_eq!(index.query("  Ivanova").unwrap(), ["Ivanova Maria"]);
        assert!(index.query("Ivanov ").unwrap().is_empty());
    }

    #[test]
    fn upper_case_mode() {
        let mut index = PrefixIndex::with_config(IndexConfig::default().with_case(CaseMode::Upper));
        index
            .ingest([
                NameRecord::new().with_surname("ivanov").with_given("Ivan"),
                NameRecord::new().with_surname("Ivanova").with_given("maria"),
            ])
            .unwrap();

        assert_eq!(index.query("iVaN").unwrap(), ["IVANOV IVAN", "IVANOVA MARIA"]);
        assert!(index.contains("ivanova maria"));
        assert!(index.bucket('i').is_none());
        index.assert_invariants();
    }

    #[test]
    fn contains_whole_names() {
        let mut index = PrefixIndex::new();
        index
            .insert(&NameRecord::new().with_surname("Petrov").with_given("Petr"))
            .unwrap();

        assert!(index.contains("Petrov Petr"));
        assert!(index.contains(" Petrov Petr "));
        assert!(!index.contains("Petrov"));
        assert!(!index.contains("petrov petr"));
        assert!(!index.contains(""));
    }
}
