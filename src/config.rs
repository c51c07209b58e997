//! Tunables for a [`PrefixIndex`](crate::PrefixIndex).

use alloc::string::String;

/// Default upper bound on the number of chars in a query prefix.
pub const DEFAULT_MAX_PREFIX_LEN: usize = 100;

/// How letter case is treated when storing and matching names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CaseMode {
    /// Names are stored and matched exactly as supplied.
    #[default]
    Sensitive,
    /// Names and prefixes are both uppercased before storing or matching.
    ///
    /// Query results are returned in their uppercased form.
    Upper,
}

impl CaseMode {
    /// Applies this case policy to `s` in place.
    pub(crate) fn apply(self, s: &mut String) {
        match self {
            CaseMode::Sensitive => {}
            CaseMode::Upper => *s = s.to_uppercase(),
        }
    }
}

/// Configuration of a [`PrefixIndex`](crate::PrefixIndex).
///
/// # Examples
/// ```rust
/// # use name_prefix::{CaseMode, IndexConfig};
/// let cfg = IndexConfig::default()
///     .with_max_prefix_len(32)
///     .with_case(CaseMode::Upper);
///
/// assert_eq!(cfg.max_prefix_len, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexConfig {
    /// Queries whose prefix has more chars than this are rejected.
    pub max_prefix_len: usize,
    /// Case policy applied to stored names and query prefixes alike.
    pub case: CaseMode,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_prefix_len: DEFAULT_MAX_PREFIX_LEN,
            case: CaseMode::Sensitive,
        }
    }
}

impl IndexConfig {
    /// Sets the maximum accepted prefix length, in chars.
    #[must_use]
    pub const fn with_max_prefix_len(mut self, max_prefix_len: usize) -> Self {
        self.max_prefix_len = max_prefix_len;
        self
    }

    /// Sets the case policy.
    #[must_use]
    pub const fn with_case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_case() {
        let mut s = String::from("Ivanov");
        CaseMode::Upper.apply(&mut s);
        assert_eq!(s, "IVANOV");

        let mut s = String::from("straße");
        CaseMode::Upper.apply(&mut s);
        assert_eq!(s, "STRASSE");

        let mut s = String::from("Ivanov");
        CaseMode::Sensitive.apply(&mut s);
        assert_eq!(s, "Ivanov");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial() {
        let cfg: IndexConfig = serde_json::from_str(r#"{"case": "upper"}"#).unwrap();
        assert_eq!(cfg.case, CaseMode::Upper);
        assert_eq!(cfg.max_prefix_len, DEFAULT_MAX_PREFIX_LEN);
    }
}
