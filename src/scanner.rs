//! Left-to-right scan with boundary extension.
//!
//! Each host grammar match is widened in place:
//!
//! 1. `userinfo@` to the left (only when the `@` is not the first character)
//! 2. `scheme://` to the left of that (only when `://` is not at the start)
//! 3. `/path` to the right
//!
//! A widened span that is directly followed by anything but a space is
//! dropped whole; the scan resumes at its end without trying a shorter span.

use std::iter::FusedIterator;

use crate::candidate::Candidate;
use crate::charclass::{PATH, SCHEME, USERINFO};
use crate::constants::SCHEME_SEPARATOR;
use crate::error::SkipReason;
use crate::filter::CandidateFilter;
use crate::finder::UriFinder;
use crate::uri::FoundUri;

/// What became of one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'t> {
    /// The filter accepted the candidate and it parsed as a URI
    Accepted {
        /// The candidate as classified and extended
        candidate: Candidate<'t>,
        /// The parsed URI
        uri: FoundUri,
    },
    /// The candidate was dropped
    Skipped {
        /// The candidate as classified and extended
        candidate: Candidate<'t>,
        /// Why it was dropped
        reason: SkipReason,
    },
}

impl<'t> Outcome<'t> {
    /// Returns the candidate behind this outcome.
    #[must_use]
    pub const fn candidate(&self) -> &Candidate<'t> {
        match self {
            Self::Accepted { candidate, .. } | Self::Skipped { candidate, .. } => candidate,
        }
    }

    /// Returns the URI if the candidate was accepted.
    #[must_use]
    pub const fn uri(&self) -> Option<&FoundUri> {
        match self {
            Self::Accepted { uri, .. } => Some(uri),
            Self::Skipped { .. } => None,
        }
    }

    /// Consumes the outcome, returning the URI if the candidate was accepted.
    #[must_use]
    pub fn into_uri(self) -> Option<FoundUri> {
        match self {
            Self::Accepted { uri, .. } => Some(uri),
            Self::Skipped { .. } => None,
        }
    }

    /// Returns the skip reason if the candidate was dropped.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Accepted { .. } => None,
            Self::Skipped { reason, .. } => Some(reason),
        }
    }

    /// Returns true if the candidate was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Iterator over the outcomes of one scan, in input order.
///
/// Created by [`UriFinder::scan`]. Every step consumes at least one byte
/// of input, so the scan always terminates.
///
/// # Examples
///
/// ```
/// use uri_finder::{Filter, SkipReason, UriFinder};
///
/// let finder = UriFinder::new().unwrap();
/// let outcomes: Vec<_> = finder.scan("see example.com, or example.org", &Filter::Normal).collect();
///
/// assert_eq!(outcomes.len(), 4);
/// assert_eq!(outcomes[0].skip_reason(), Some(&SkipReason::Filtered));
/// assert!(matches!(outcomes[1].skip_reason(), Some(SkipReason::TrailingChar { found: ',', .. })));
/// assert_eq!(outcomes[3].uri().unwrap().as_str(), "example.org");
/// ```
#[derive(Debug)]
pub struct Scanner<'a, 't, F: ?Sized> {
    finder: &'a UriFinder,
    filter: &'a F,
    text: &'t str,
    pos: usize,
}

impl<'a, 't, F> Scanner<'a, 't, F>
where
    F: CandidateFilter + ?Sized,
{
    pub(crate) const fn new(finder: &'a UriFinder, text: &'t str, filter: &'a F) -> Self {
        Self {
            finder,
            filter,
            text,
            pos: 0,
        }
    }

    /// Returns the byte offset the next search starts from.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    fn decide(&self, candidate: Candidate<'t>) -> Outcome<'t> {
        let end = candidate.span.end;
        if let Some(found) = self.text[end..].chars().next().filter(|&c| c != ' ') {
            tracing::trace!(
                candidate = candidate.as_str(),
                found = %found,
                position = end,
                "dropping candidate followed by non-space"
            );
            return Outcome::Skipped {
                candidate,
                reason: SkipReason::TrailingChar {
                    found,
                    position: end,
                },
            };
        }

        if !self.filter.accepts(&candidate) {
            tracing::trace!(candidate = candidate.as_str(), "candidate rejected by filter");
            return Outcome::Skipped {
                candidate,
                reason: SkipReason::Filtered,
            };
        }

        match FoundUri::parse(candidate.as_str()) {
            Ok(uri) => Outcome::Accepted { candidate, uri },
            Err(e) => {
                tracing::debug!(
                    span = ?candidate.span(),
                    error = %e,
                    "skipping accepted candidate that is not a URI"
                );
                Outcome::Skipped {
                    candidate,
                    reason: SkipReason::Malformed(e),
                }
            }
        }
    }
}

impl<'t, F> Iterator for Scanner<'_, 't, F>
where
    F: CandidateFilter + ?Sized,
{
    type Item = Outcome<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.finder.grammar().find_at(self.text, self.pos)?;
        let mut candidate = Candidate::classify(self.text, &m, self.finder.tlds());

        let bytes = self.text.as_bytes();
        extend_userinfo(bytes, &mut candidate);
        extend_scheme(bytes, &mut candidate);
        extend_path(bytes, &mut candidate);

        self.pos = candidate.span.end;
        Some(self.decide(candidate))
    }
}

impl<F> FusedIterator for Scanner<'_, '_, F> where F: CandidateFilter + ?Sized {}

fn extend_userinfo(bytes: &[u8], candidate: &mut Candidate<'_>) {
    let mut start = candidate.span.start;
    if start > 1 && bytes[start - 1] == b'@' {
        start -= 1;
        while start > 0 && USERINFO.contains(bytes[start - 1]) {
            start -= 1;
            candidate.has_userinfo = true;
        }
        candidate.span.start = start;
    }
}

fn extend_scheme(bytes: &[u8], candidate: &mut Candidate<'_>) {
    let sep = SCHEME_SEPARATOR.as_bytes();
    let mut start = candidate.span.start;
    if start > sep.len() && &bytes[start - sep.len()..start] == sep {
        start -= sep.len();
        while start > 0 && SCHEME.contains(bytes[start - 1]) {
            start -= 1;
            candidate.has_scheme = true;
        }
        candidate.span.start = start;
    }
}

fn extend_path(bytes: &[u8], candidate: &mut Candidate<'_>) {
    let mut end = candidate.span.end;
    if end < bytes.len() && bytes[end] == b'/' {
        end += 1;
        while end < bytes.len() && PATH.contains(bytes[end]) {
            end += 1;
        }
        candidate.has_path = true;
        candidate.span.end = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::HostType;
    use crate::filter::Filter;

    fn outcomes(text: &str) -> Vec<Outcome<'_>> {
        let finder = UriFinder::new().unwrap();
        finder.scan(text, &Filter::None).collect()
    }

    #[test]
    fn plain_host() {
        let all = outcomes("example.com");
        assert_eq!(all.len(), 1);
        let c = all[0].candidate();
        assert_eq!(c.span(), 0..11);
        assert!(!c.has_scheme() && !c.has_userinfo() && !c.has_path());
    }

    #[test]
    fn absorbs_scheme_and_path() {
        let all = outcomes("http://example.com/path?q=1#frag");
        let last = all.last().unwrap();
        assert!(last.is_accepted());
        let c = last.candidate();
        assert_eq!(c.as_str(), "http://example.com/path?q=1#frag");
        assert_eq!(c.host_span(), 7..18);
        assert!(c.has_scheme());
        assert!(c.has_path());
    }

    #[test]
    fn scheme_word_is_dropped_before_host() {
        let all = outcomes("http://example.com");
        assert_eq!(all.len(), 2);
        assert_eq!(
            all[0].skip_reason(),
            Some(&SkipReason::TrailingChar {
                found: ':',
                position: 4
            })
        );
        assert_eq!(all[0].candidate().as_str(), "http");
    }

    #[test]
    fn absorbs_userinfo() {
        let all = outcomes("foo.bar+tag@example.com");
        let c = all.last().unwrap().candidate();
        assert_eq!(c.as_str(), "foo.bar+tag@example.com");
        assert!(c.has_userinfo());
    }

    #[test]
    fn absorbs_userinfo_then_scheme() {
        let all = outcomes("ftp://user:pw@files.example.com/pub");
        let last = all.last().unwrap();
        let c = last.candidate();
        assert_eq!(c.span(), 0..35);
        assert!(c.has_scheme() && c.has_userinfo() && c.has_path());
        let uri = last.uri().unwrap();
        assert_eq!(uri.userinfo(), Some("user:pw"));
        assert_eq!(uri.scheme(), Some("ftp"));
    }

    #[test]
    fn at_sign_at_start_is_not_absorbed() {
        let all = outcomes("@example.com");
        let c = all[0].candidate();
        assert_eq!(c.as_str(), "example.com");
        assert!(!c.has_userinfo());
    }

    #[test]
    fn at_sign_after_space_is_absorbed_without_userinfo() {
        let all = outcomes("hi @example.com");
        let c = all.last().unwrap().candidate();
        assert_eq!(c.as_str(), "@example.com");
        assert!(!c.has_userinfo());
    }

    #[test]
    fn separator_at_start_is_not_absorbed() {
        let all = outcomes("://example.com");
        let c = all[0].candidate();
        assert_eq!(c.as_str(), "example.com");
        assert!(!c.has_scheme());
    }

    #[test]
    fn separator_without_scheme_is_malformed() {
        let finder = UriFinder::new().unwrap();
        let all: Vec<_> = finder.scan("a ://example.com", &Filter::Normal).collect();
        let last = all.last().unwrap();
        assert_eq!(last.candidate().as_str(), "://example.com");
        assert!(!last.candidate().has_scheme());
        assert!(matches!(last.skip_reason(), Some(SkipReason::Malformed(_))));
    }

    #[test]
    fn bare_slash_sets_path() {
        let all = outcomes("example.com/ next");
        let c = all[0].candidate();
        assert_eq!(c.as_str(), "example.com/");
        assert!(c.has_path());
    }

    #[test]
    fn trailing_punctuation_drops_whole_candidate() {
        let all = outcomes("visit http://example.com/page\" now");
        let dropped = all
            .iter()
            .find(|o| o.candidate().host() == "example.com")
            .unwrap();
        assert_eq!(
            dropped.skip_reason(),
            Some(&SkipReason::TrailingChar {
                found: '"',
                position: 29
            })
        );
        assert!(all.iter().all(|o| o.candidate().host() != "page"));
    }

    #[test]
    fn only_space_ends_a_candidate() {
        let all = outcomes("example.com\tnext");
        assert!(matches!(
            all[0].skip_reason(),
            Some(SkipReason::TrailingChar { found: '\t', .. })
        ));
    }

    #[test]
    fn port_above_16_bits_is_accepted() {
        let all = outcomes("localhost:70000");
        let o = &all[0];
        assert_eq!(o.candidate().port(), Some(70_000));
        assert_eq!(o.uri().unwrap().port(), Some(70_000));
    }

    #[test]
    fn port_beyond_max_is_malformed() {
        let all = outcomes("localhost:2147483648");
        let o = &all[0];
        assert!(o.candidate().has_port());
        assert!(matches!(o.skip_reason(), Some(SkipReason::Malformed(_))));
    }

    #[test]
    fn ipv6_with_port() {
        let all = outcomes("[2001:db8::1]:8080");
        assert_eq!(all.len(), 1);
        let c = all[0].candidate();
        assert_eq!(c.host_type(), HostType::Ipv6);
        assert_eq!(c.port(), Some(8080));
    }

    #[test]
    fn multibyte_text_is_handled() {
        let all = outcomes("\u{fc}ber caf\u{e9}.fr \u{1f600} example.com");
        let accepted: Vec<_> = all
            .iter()
            .filter_map(Outcome::uri)
            .map(FoundUri::as_str)
            .collect();
        assert_eq!(accepted, vec!["ber", "fr", "example.com"]);
    }

    #[test]
    fn position_advances() {
        let finder = UriFinder::new().unwrap();
        let mut scanner = finder.scan("a.com b.com", &Filter::None);
        assert_eq!(scanner.position(), 0);
        scanner.next();
        assert_eq!(scanner.position(), 5);
        scanner.next();
        assert_eq!(scanner.position(), 11);
        assert!(scanner.next().is_none());
    }
}
