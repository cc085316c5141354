//! The configured URI finder.

use once_cell::sync::Lazy;

use crate::builder::UriFinderBuilder;
use crate::candidate::Candidate;
use crate::error::{GrammarError, SkipReason};
use crate::filter::{CandidateFilter, Filter};
use crate::grammar::HostGrammar;
use crate::scanner::{Outcome, Scanner};
use crate::tld::TldTable;
use crate::uri::FoundUri;

/// Finder with the built-in TLD table, shared by the crate-level functions.
static SHARED: Lazy<UriFinder> =
    Lazy::new(|| UriFinder::new().expect("built-in host grammar must compile"));

/// Finds URIs in free text.
///
/// Holds the compiled host grammar and the TLD table; both are immutable,
/// so one finder can serve any number of threads.
///
/// # Examples
///
/// ```
/// use uri_finder::{Filter, UriFinder};
///
/// let finder = UriFinder::new().unwrap();
/// let text = "docs at http://example.com/guide or mail admin@example.org";
///
/// let links: Vec<_> = finder.find(text).iter().map(|u| u.to_string()).collect();
/// assert_eq!(links, ["http://example.com/guide", "admin@example.org"]);
///
/// let mail = finder.find_with(text, &Filter::Email);
/// assert_eq!(mail[0].as_str(), "admin@example.org");
/// ```
#[derive(Debug, Clone)]
pub struct UriFinder {
    grammar: HostGrammar,
    tlds: TldTable,
    default_filter: Filter,
}

impl UriFinder {
    /// Creates a finder with the built-in TLD table and the `Normal` filter.
    ///
    /// # Errors
    ///
    /// Returns `GrammarError` if the host grammar fails to compile.
    pub fn new() -> Result<Self, GrammarError> {
        Self::with_tlds(TldTable::default())
    }

    /// Creates a finder with the given TLD table and the `Normal` filter.
    ///
    /// # Errors
    ///
    /// Returns `GrammarError` if the host grammar fails to compile.
    pub fn with_tlds(tlds: TldTable) -> Result<Self, GrammarError> {
        Ok(Self::from_parts(HostGrammar::new()?, tlds, Filter::default()))
    }

    /// Returns a builder for a customized finder.
    #[must_use]
    pub fn builder() -> UriFinderBuilder {
        UriFinderBuilder::new()
    }

    /// Returns the process-wide finder with default settings.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in host grammar fails to compile.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    pub(crate) fn from_parts(grammar: HostGrammar, tlds: TldTable, default_filter: Filter) -> Self {
        Self {
            grammar,
            tlds,
            default_filter,
        }
    }

    /// Returns the compiled host grammar.
    #[must_use]
    pub const fn grammar(&self) -> &HostGrammar {
        &self.grammar
    }

    /// Returns the TLD table.
    #[must_use]
    pub const fn tlds(&self) -> &TldTable {
        &self.tlds
    }

    /// Returns the filter used by [`UriFinder::find`].
    #[must_use]
    pub const fn default_filter(&self) -> Filter {
        self.default_filter
    }

    /// Finds URIs accepted by the default filter, in input order.
    #[must_use]
    pub fn find(&self, text: &str) -> Vec<FoundUri> {
        self.find_with(text, &self.default_filter)
    }

    /// Finds URIs accepted by `filter`, in input order.
    ///
    /// Candidates that fail to parse are left out; see [`UriFinder::scan`]
    /// to observe them.
    #[must_use]
    pub fn find_with<F>(&self, text: &str, filter: &F) -> Vec<FoundUri>
    where
        F: CandidateFilter + ?Sized,
    {
        self.scan(text, filter).filter_map(Outcome::into_uri).collect()
    }

    /// Scans `text`, yielding an outcome for every candidate.
    #[must_use]
    pub fn scan<'a, 't, F>(&'a self, text: &'t str, filter: &'a F) -> Scanner<'a, 't, F>
    where
        F: CandidateFilter + ?Sized,
    {
        Scanner::new(self, text, filter)
    }

    /// Returns every candidate that reached a filter decision, in input order.
    ///
    /// Candidates dropped for a trailing character are not included.
    #[must_use]
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<Candidate<'t>> {
        self.scan(text, &Filter::None)
            .filter(|outcome| {
                !matches!(
                    outcome.skip_reason(),
                    Some(SkipReason::TrailingChar { .. })
                )
            })
            .map(|outcome| outcome.candidate().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_normal() {
        let finder = UriFinder::new().unwrap();
        assert_eq!(finder.default_filter(), Filter::Normal);
    }

    #[test]
    fn find_uses_default_filter() {
        let finder = UriFinder::new().unwrap();
        let found = finder.find("words and example.com");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "example.com");
    }

    #[test]
    fn with_tlds_changes_validity() {
        let finder = UriFinder::with_tlds(TldTable::new(["lan"]).unwrap()).unwrap();
        let found = finder.find("nas.lan example.com");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "nas.lan");
    }

    #[test]
    fn candidates_include_filtered_but_not_dropped() {
        let finder = UriFinder::new().unwrap();
        let candidates = finder.candidates("one two, three");
        let texts: Vec<_> = candidates.iter().map(Candidate::as_str).collect();
        assert_eq!(texts, ["one", "three"]);
    }

    #[test]
    fn shared_is_reused() {
        assert!(std::ptr::eq(UriFinder::shared(), UriFinder::shared()));
    }

    #[test]
    fn finder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UriFinder>();
    }
}
