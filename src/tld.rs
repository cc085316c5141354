//! Table of recognized top-level domains.

use std::collections::HashSet;

use crate::error::TldError;

/// ISO 3166 country-code top-level domains recognized by default.
pub const DEFAULT_COUNTRY_CODES: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br", "bs",
    "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn",
    "co", "cr", "cu", "cv", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec", "ee", "eg",
    "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb", "gd", "ge", "gf", "gg",
    "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk", "hm", "hn",
    "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir", "is", "it", "je", "jm", "jo",
    "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb", "lc", "li",
    "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm",
    "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne",
    "nf", "ng", "ni", "nl", "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk",
    "pl", "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb",
    "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "st", "su", "sv",
    "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tp", "tr", "tt",
    "tv", "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu",
    "wf", "ws", "ye", "yt", "za", "zm", "zw",
];

/// Generic top-level domains recognized by default.
pub const DEFAULT_GENERIC_TLDS: &[&str] = &[
    "aero", "arpa", "asia", "com", "coop", "info", "int", "jobs", "mobi", "gov", "pro", "tel",
    "travel", "museum", "name", "biz", "cat", "edu", "mil", "net", "org",
];

/// A validated set of top-level domains.
///
/// Entries are stored lower-cased; lookups ignore ASCII case.
///
/// # Examples
///
/// ```
/// use uri_finder::TldTable;
///
/// let table = TldTable::default();
/// assert!(table.contains("com"));
/// assert!(table.contains("FI"));
/// assert!(!table.contains("example"));
///
/// let custom = TldTable::new(["test", "Local"]).unwrap();
/// assert!(custom.contains("local"));
/// assert!(!custom.contains("com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldTable {
    entries: HashSet<String>,
}

impl TldTable {
    /// Builds a table from the given entries.
    ///
    /// # Errors
    ///
    /// Returns `TldError` if an entry is empty or contains a character other
    /// than an ASCII letter, digit, or hyphen.
    pub fn new<I, S>(entries: I) -> Result<Self, TldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::empty();
        for entry in entries {
            table.insert(entry.as_ref())?;
        }
        Ok(table)
    }

    /// Returns a table with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashSet::new(),
        }
    }

    /// Adds one entry to the table.
    ///
    /// # Errors
    ///
    /// Returns `TldError` under the same conditions as [`TldTable::new`].
    pub fn insert(&mut self, tld: &str) -> Result<(), TldError> {
        Self::validate(tld)?;
        self.entries.insert(tld.to_ascii_lowercase());
        Ok(())
    }

    /// Returns true if `label` is a recognized top-level domain.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        if label.bytes().any(|b| b.is_ascii_uppercase()) {
            self.entries.contains(&label.to_ascii_lowercase())
        } else {
            self.entries.contains(label)
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    fn validate(tld: &str) -> Result<(), TldError> {
        if tld.is_empty() {
            return Err(TldError::Empty);
        }

        if let Some((position, c)) = tld
            .char_indices()
            .find(|&(_, c)| !c.is_ascii_alphanumeric() && c != '-')
        {
            return Err(TldError::InvalidChar {
                tld: tld.to_string(),
                char: c,
                position,
            });
        }

        Ok(())
    }
}

impl Default for TldTable {
    fn default() -> Self {
        let entries = DEFAULT_COUNTRY_CODES
            .iter()
            .chain(DEFAULT_GENERIC_TLDS)
            .map(|tld| (*tld).to_string())
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_both_lists() {
        let table = TldTable::default();
        assert_eq!(
            table.len(),
            DEFAULT_COUNTRY_CODES.len() + DEFAULT_GENERIC_TLDS.len()
        );
        assert!(table.contains("fi"));
        assert!(table.contains("museum"));
    }

    #[test]
    fn default_entries_are_valid_lowercase() {
        for tld in DEFAULT_COUNTRY_CODES.iter().chain(DEFAULT_GENERIC_TLDS) {
            assert!(TldTable::validate(tld).is_ok(), "{tld}");
            assert_eq!(*tld, tld.to_ascii_lowercase());
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let table = TldTable::default();
        assert!(table.contains("COM"));
        assert!(table.contains("Org"));
    }

    #[test]
    fn new_normalizes_case() {
        let table = TldTable::new(["DEV"]).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["dev"]);
    }

    #[test]
    fn new_rejects_empty_entry() {
        assert!(matches!(TldTable::new([""]), Err(TldError::Empty)));
    }

    #[test]
    fn new_rejects_dotted_entry() {
        let result = TldTable::new([".com"]);
        assert!(matches!(
            result,
            Err(TldError::InvalidChar {
                char: '.',
                position: 0,
                ..
            })
        ));
    }

    #[test]
    fn empty_table_contains_nothing() {
        let table = TldTable::empty();
        assert!(table.is_empty());
        assert!(!table.contains("com"));
    }
}
