//! The result view of a [`PrefixIndex::query`](crate::PrefixIndex::query), this module contains the [`Matches`] type.

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::ops::Deref;

use crate::{config::CaseMode, index::search::prefix_range, iter::MatchIter};

/// A borrowed run of canonical names from one bucket that all start with the queried prefix.
///
/// Names are in ascending ordinal order. The run borrows from the index, so nothing is
/// copied until [`to_vec`](Matches::to_vec) is called.
#[derive(Debug, Clone, Copy)]
pub struct Matches<'a> {
    names: &'a [String],
    case: CaseMode,
}

impl<'a> Matches<'a> {
    pub(crate) const fn new(names: &'a [String], case: CaseMode) -> Self {
        Self { names, case }
    }

    pub(crate) const fn empty(case: CaseMode) -> Self {
        Self::new(&[], case)
    }

    /// Returns the matched names as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [String] {
        self.names
    }

    /// An iterator over the matched names in ascending order.
    #[must_use]
    pub fn iter(&self) -> MatchIter<'a> {
        MatchIter(self.names.iter())
    }

    /// Copies the matched names out of the index.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.names.to_vec()
    }

    /// Narrows these matches to the names that also start with `prefix`.
    ///
    /// Leading whitespace is stripped and the index's case policy is applied, as for a query.
    /// The search only looks inside this run, so it never touches the index again. An empty
    /// prefix returns the matches unchanged, and a prefix that is not an extension of the
    /// original one simply matches nothing.
    ///
    /// # Examples
    /// ```rust
    /// # use name_prefix::{NameRecord, PrefixIndex};
    /// let mut index = PrefixIndex::new();
    /// index.ingest(["Ivanov", "Ivanova", "Ivashkin"].map(|s| NameRecord::new().with_surname(s)))?;
    ///
    /// let iva = index.query("Iva")?;
    /// assert_eq!(iva.len(), 3);
    /// assert_eq!(iva.refine("Ivan").to_vec(), ["Ivanov", "Ivanova"]);
    /// assert!(iva.refine("Petrov").is_empty());
    /// # Ok::<(), name_prefix::Error>(())
    /// ```
    #[must_use]
    pub fn refine(&self, prefix: &str) -> Matches<'a> {
        let prefix = self.normalize(prefix);
        let range = prefix_range(self.names, &prefix);

        Self::new(&self.names[range], self.case)
    }

    fn normalize<'p>(&self, prefix: &'p str) -> Cow<'p, str> {
        let prefix = prefix.trim_start();

        match self.case {
            CaseMode::Sensitive => Cow::Borrowed(prefix),
            CaseMode::Upper => {
                let mut owned = String::from(prefix);
                self.case.apply(&mut owned);
                Cow::Owned(owned)
            }
        }
    }

    /// Compute the common prefix of these matches from the data.
    /// Will return an empty string if there are no matches.
    ///
    /// Note that this may be more specific than what was searched for, i/e:
    /// ```rust
    /// # use name_prefix::{NameRecord, PrefixIndex};
    /// let mut index = PrefixIndex::new();
    /// index.ingest([
    ///     NameRecord::new().with_surname("Ivanov").with_given("Ivan"),
    ///     NameRecord::new().with_surname("Ivanov").with_given("Igor"),
    /// ])?;
    /// // Common prefix is *computed*, so even though we only
    /// //  searched for "I" we got something more specific
    /// assert_eq!(index.query("I")?.common_prefix(), "Ivanov I");
    /// # Ok::<(), name_prefix::Error>(())
    /// ```
    ///
    /// This operation is `O(1)` in the number of matches, but it is not computationally free.
    #[must_use]
    pub fn common_prefix(&self) -> &'a str {
        let (Some(first), Some(last)) = (self.names.first(), self.names.last()) else {
            return "";
        };

        // the run is sorted, so whatever the first and last share every name in between shares
        let end = first
            .char_indices()
            .zip(last.chars())
            .find(|((_, a), b)| a != b)
            .map_or_else(|| first.len().min(last.len()), |((idx, _), _)| idx);

        &first[..end]
    }
}

impl<'a> Deref for Matches<'a> {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        self.names
    }
}

impl<'a> IntoIterator for Matches<'a> {
    type Item = &'a str;
    type IntoIter = MatchIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Matches<'a> {
    type Item = &'a str;
    type IntoIter = MatchIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> PartialEq for Matches<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl<'a> Eq for Matches<'a> {}

impl<'a, S: AsRef<str>> PartialEq<[S]> for Matches<'a> {
    fn eq(&self, other: &[S]) -> bool {
        self.names.len() == other.len()
            && self
                .names
                .iter()
                .zip(other)
                .all(|(a, b)| a.as_str() == b.as_ref())
    }
}

impl<'a, S: AsRef<str>, const N: usize> PartialEq<[S; N]> for Matches<'a> {
    fn eq(&self, other: &[S; N]) -> bool {
        *self == other[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::{string::ToString, vec};

    fn owned(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn common_prefix() {
        let names = owned(&["Ivanov Igor", "Ivanov Ivan", "Ivanova Maria"]);
        let m = Matches::new(&names, CaseMode::Sensitive);
        assert_eq!(m.common_prefix(), "Ivanov");

        let one = owned(&["Petrov"]);
        assert_eq!(Matches::new(&one, CaseMode::Sensitive).common_prefix(), "Petrov");

        let nested = owned(&["Ab", "Abc"]);
        assert_eq!(Matches::new(&nested, CaseMode::Sensitive).common_prefix(), "Ab");

        let multibyte = owned(&["Ёжиков", "Ёжикова"]);
        assert_eq!(
            Matches::new(&multibyte, CaseMode::Sensitive).common_prefix(),
            "Ёжиков"
        );

        assert_eq!(Matches::empty(CaseMode::Sensitive).common_prefix(), "");
    }

    #[test]
    fn refine_applies_case() {
        let names = owned(&["IVANOV", "IVANOVA", "IVASHKIN"]);
        let m = Matches::new(&names, CaseMode::Upper);

        assert_eq!(m.refine("  ivanov"), ["IVANOV", "IVANOVA"]);
        assert_eq!(m.refine(""), m);
        assert!(Matches::new(&names, CaseMode::Sensitive).refine("ivan").is_empty());
    }

    #[test]
    fn iterates_in_order() {
        let names = owned(&["A", "B", "C"]);
        let m = Matches::new(&names, CaseMode::Sensitive);

        assert_eq!(m.iter().rev().collect::<Vec<_>>(), vec!["C", "B", "A"]);
        assert_eq!(m.iter().len(), 3);
        assert_eq!(m.first().map(String::as_str), Some("A"));
    }
}
