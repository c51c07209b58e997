//! Structured personal names and their canonical single-string form.

use alloc::string::String;

/// A personal name made of up to three independently optional parts.
///
/// Any field may be `None`, empty, or padded with whitespace; padding is trimmed from each
/// field on its own before the canonical form is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NameRecord {
    /// Given (first) name.
    pub given: Option<String>,
    /// Family name.
    pub surname: Option<String>,
    /// Patronymic (middle name derived from the father's name).
    pub patronymic: Option<String>,
}

impl NameRecord {
    /// Creates an empty record; populate it with the `with_*` methods.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            given: None,
            surname: None,
            patronymic: None,
        }
    }

    /// Sets the given name.
    #[must_use]
    pub fn with_given(mut self, given: impl Into<String>) -> Self {
        self.given = Some(given.into());
        self
    }

    /// Sets the surname.
    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Sets the patronymic.
    #[must_use]
    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }

    /// Returns the canonical form of this record: the trimmed, non-empty fields in
    /// surname, given, patronymic order, joined by single spaces.
    ///
    /// Returns `None` when every field is missing or whitespace-only, since such a record
    /// has no leading char to be indexed under.
    ///
    /// # Examples
    /// ```rust
    /// # use name_prefix::NameRecord;
    /// let rec = NameRecord::new()
    ///     .with_given(" Ivan ")
    ///     .with_surname("Ivanov")
    ///     .with_patronymic("Ivanovich");
    ///
    /// assert_eq!(rec.canonical().as_deref(), Some("Ivanov Ivan Ivanovich"));
    /// assert_eq!(NameRecord::new().with_given("  ").canonical(), None);
    /// ```
    #[must_use]
    pub fn canonical(&self) -> Option<String> {
        let parts = [
            self.surname.as_deref(),
            self.given.as_deref(),
            self.patronymic.as_deref(),
        ];

        let mut out = String::with_capacity(parts.iter().flatten().map(|s| s.len() + 1).sum());

        for part in parts.into_iter().filter_map(field) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(part);
        }

        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

/// trimmed field contents, `None` if nothing is left
fn field(f: Option<&str>) -> Option<&str> {
    f.map(str::trim).filter(|s| !s.is_empty())
}
