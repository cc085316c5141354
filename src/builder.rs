//! Builder for customized [`UriFinder`] instances.

use crate::error::BuildError;
use crate::filter::Filter;
use crate::finder::UriFinder;
use crate::grammar::HostGrammar;
use crate::tld::TldTable;

/// Builds a [`UriFinder`] with a custom TLD table or default filter.
///
/// Starts from the built-in TLD table and the `Normal` filter. TLD entries
/// are validated when [`build`](UriFinderBuilder::build) runs.
///
/// # Examples
///
/// ```
/// use uri_finder::{Filter, UriFinder};
///
/// let finder = UriFinder::builder()
///     .extra_tld("dev")
///     .default_filter(Filter::Strict)
///     .build()
///     .unwrap();
///
/// let found = finder.find("see https://docs.example.dev and example.dev");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].as_str(), "https://docs.example.dev");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UriFinderBuilder {
    tlds: Option<TldTable>,
    replacement: Option<Vec<String>>,
    extra: Vec<String>,
    default_filter: Filter,
}

impl UriFinderBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `table` instead of the built-in TLD table.
    #[must_use]
    pub fn tld_table(mut self, table: TldTable) -> Self {
        self.tlds = Some(table);
        self.replacement = None;
        self
    }

    /// Replaces the TLD table with `tlds`, validated at build time.
    #[must_use]
    pub fn tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tlds = None;
        self.replacement = Some(tlds.into_iter().map(Into::into).collect());
        self
    }

    /// Adds one TLD on top of the table, validated at build time.
    #[must_use]
    pub fn extra_tld(mut self, tld: impl Into<String>) -> Self {
        self.extra.push(tld.into());
        self
    }

    /// Sets the filter used by [`UriFinder::find`].
    #[must_use]
    pub fn default_filter(mut self, filter: Filter) -> Self {
        self.default_filter = filter;
        self
    }

    /// Compiles the grammar and assembles the finder.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Tld` if a TLD entry is invalid, or
    /// `BuildError::Grammar` if the host grammar fails to compile.
    pub fn build(self) -> Result<UriFinder, BuildError> {
        let mut tlds = match (self.tlds, self.replacement) {
            (Some(table), _) => table,
            (None, Some(entries)) => TldTable::new(entries)?,
            (None, None) => TldTable::default(),
        };
        for tld in &self.extra {
            tlds.insert(tld)?;
        }

        let grammar = HostGrammar::new()?;
        tracing::debug!(
            tlds = tlds.len(),
            default_filter = %self.default_filter,
            "built URI finder"
        );

        Ok(UriFinder::from_parts(grammar, tlds, self.default_filter))
    }
}
