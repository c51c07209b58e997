//! Reusable buffers for [`PrefixIndex::ingest_with`](crate::PrefixIndex::ingest_with).
use alloc::{string::String, vec::Vec};

/// Scratch space for [`PrefixIndex::ingest_with`](crate::PrefixIndex::ingest_with).
///
/// Using this scratch space allows you to call ingest multiple times without allocating
/// the staging buffers again, as [`PrefixIndex::ingest`](crate::PrefixIndex::ingest)
/// starts from an empty one every call.
#[derive(Debug, Default)]
pub struct ScratchSpace {
    /// canonical names of the batch being ingested
    pub(crate) pending: Vec<String>,
    /// the slice of `pending` headed for a single bucket
    pub(crate) run: Vec<String>,
}

impl ScratchSpace {
    /// Creates a new empty scratch space
    ///
    /// # Examples
    /// ```rust
    /// # use name_prefix::{NameRecord, PrefixIndex, ScratchSpace};
    /// let mut index = PrefixIndex::new();
    /// let mut scratch = ScratchSpace::new();
    ///
    /// for chunk in [["Ivanov", "Petrov"], ["Sidorov", "Ivanova"]] {
    ///     let records = chunk.map(|s| NameRecord::new().with_surname(s));
    ///     index.ingest_with(&mut scratch, &records)?;
    /// }
    ///
    /// assert_eq!(index.len(), 4);
    /// # Ok::<(), name_prefix::Error>(())
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            run: Vec::new(),
        }
    }

    /// Creates a scratch space with room to stage at least n names before reallocating
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            pending: Vec::with_capacity(n),
            run: Vec::new(),
        }
    }

    /// clear for correctness, both buffers should be empty after an ingest but a failed
    /// one leaves `pending` partially filled
    pub(crate) fn clear(&mut self) {
        self.pending.clear();
        self.run.clear();
    }
}
