//! Acceptance policies applied to candidates.
//!
//! | Policy | Accepts |
//! |--------|---------|
//! | `None` | everything |
//! | `Simple` | valid IP, or any of scheme / port / multi-label name |
//! | `Normal` | IP: valid IP. Name: known TLD, unless a scheme or port vouches for it |
//! | `Strict` | IP: valid IP with scheme. Name: known TLD with scheme |
//! | `Web` | with scheme: text starts with `http` and valid IP. Otherwise `Normal` |
//! | `WebStrict` | `Strict` and text starts with `http` |
//! | `Email` | `user@name` with no path |
//! | `EmailStrict` | `Email` with a known TLD |

use std::fmt;
use std::str::FromStr;

use crate::candidate::{Candidate, HostType};
use crate::error::FilterParseError;

/// A predicate deciding which candidates become found URIs.
///
/// Implemented by [`Filter`] and by any `Fn(&Candidate) -> bool`.
///
/// # Examples
///
/// ```
/// use uri_finder::{Candidate, UriFinder};
///
/// let finder = UriFinder::new().unwrap();
/// let with_port = |c: &Candidate<'_>| c.has_port();
/// let found = finder.find_with("a.com b.com:81", &with_port);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].as_str(), "b.com:81");
/// ```
pub trait CandidateFilter {
    /// Returns true if `candidate` should be reported.
    fn accepts(&self, candidate: &Candidate<'_>) -> bool;
}

impl<F> CandidateFilter for F
where
    F: Fn(&Candidate<'_>) -> bool,
{
    fn accepts(&self, candidate: &Candidate<'_>) -> bool {
        self(candidate)
    }
}

/// The built-in acceptance policies, from most to least permissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Filter {
    /// Accept every candidate
    None,
    /// Accept anything with a valid IP, scheme, port, or multi-label name
    Simple,
    /// Accept IPs in range and names with a known TLD, scheme, or port
    #[default]
    Normal,
    /// Require a scheme and a valid IP or known TLD
    Strict,
    /// Require an `http`-prefixed valid IP when a scheme is present
    Web,
    /// Require `Strict` and an `http` prefix
    WebStrict,
    /// Accept `user@name` forms without a path
    Email,
    /// Require `Email` and a known TLD
    EmailStrict,
}

impl Filter {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Simple,
        Self::Normal,
        Self::Strict,
        Self::Web,
        Self::WebStrict,
        Self::Email,
        Self::EmailStrict,
    ];

    /// Returns the kebab-case name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Simple => "simple",
            Self::Normal => "normal",
            Self::Strict => "strict",
            Self::Web => "web",
            Self::WebStrict => "web-strict",
            Self::Email => "email",
            Self::EmailStrict => "email-strict",
        }
    }

    fn simple(c: &Candidate<'_>) -> bool {
        c.valid_ip() || c.has_scheme() || c.has_port() || c.has_tld()
    }

    fn normal(c: &Candidate<'_>) -> bool {
        if c.host_type().is_ip() {
            return c.valid_ip();
        }

        if !c.has_scheme() && !c.has_port() {
            return c.valid_tld();
        }

        c.has_scheme() || c.has_port() || c.has_tld()
    }

    fn strict(c: &Candidate<'_>) -> bool {
        if c.host_type().is_ip() {
            return c.valid_ip() && c.has_scheme();
        }

        c.valid_tld() && c.has_scheme()
    }

    // With a scheme, `valid_ip` is required even for hostnames, so
    // `http://example.com` is rejected while `http://10.0.0.1` passes.
    fn web(c: &Candidate<'_>) -> bool {
        if c.has_scheme() {
            return c.starts_with_http() && c.valid_ip();
        }

        Self::normal(c)
    }

    fn email(c: &Candidate<'_>) -> bool {
        !c.has_path() && c.has_userinfo() && c.host_type() == HostType::Name
    }
}

impl CandidateFilter for Filter {
    fn accepts(&self, c: &Candidate<'_>) -> bool {
        match self {
            Self::None => true,
            Self::Simple => Self::simple(c),
            Self::Normal => Self::normal(c),
            Self::Strict => Self::strict(c),
            Self::Web => Self::web(c),
            Self::WebStrict => Self::strict(c) && c.starts_with_http(),
            Self::Email => Self::email(c),
            Self::EmailStrict => Self::email(c) && c.valid_tld(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str() == normalized)
            .ok_or_else(|| FilterParseError {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UriFinder;

    fn accepted(filter: Filter, text: &str) -> Vec<String> {
        UriFinder::new()
            .unwrap()
            .find_with(text, &filter)
            .into_iter()
            .map(|uri| uri.as_str().to_string())
            .collect()
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Filter::default(), Filter::Normal);
    }

    #[test]
    fn none_accepts_plain_words() {
        assert_eq!(accepted(Filter::None, "hello there"), vec!["hello", "there"]);
    }

    #[test]
    fn simple_needs_some_structure() {
        assert_eq!(
            accepted(Filter::Simple, "word a.b host:1 ftp://x"),
            vec!["a.b", "host:1", "ftp://x"]
        );
    }

    #[test]
    fn normal_names_need_known_tld() {
        assert_eq!(
            accepted(Filter::Normal, "see example.com or example.zzz"),
            vec!["example.com"]
        );
    }

    #[test]
    fn normal_scheme_or_port_vouches_for_name() {
        assert_eq!(
            accepted(Filter::Normal, "http://intranet localhost:3000"),
            vec!["http://intranet", "localhost:3000"]
        );
    }

    #[test]
    fn normal_ip_needs_range() {
        assert_eq!(
            accepted(Filter::Normal, "10.0.0.1 10.0.0.256"),
            vec!["10.0.0.1"]
        );
    }

    #[test]
    fn strict_needs_scheme() {
        assert_eq!(
            accepted(
                Filter::Strict,
                "example.com https://example.com ftp://10.1.1.1 http://intranet"
            ),
            vec!["https://example.com", "ftp://10.1.1.1"]
        );
    }

    #[test]
    fn web_with_scheme_requires_valid_ip() {
        assert_eq!(
            accepted(
                Filter::Web,
                "http://example.com http://10.0.0.1 ftp://10.0.0.2 example.org"
            ),
            vec!["http://10.0.0.1", "example.org"]
        );
    }

    #[test]
    fn web_strict_requires_http() {
        assert_eq!(
            accepted(
                Filter::WebStrict,
                "ftp://example.com https://example.com"
            ),
            vec!["https://example.com"]
        );
    }

    #[test]
    fn email_requires_userinfo_without_path() {
        assert_eq!(
            accepted(
                Filter::Email,
                "foo@example.com bar@example.com/x baz@10.0.0.1 qux@intranet"
            ),
            vec!["foo@example.com", "qux@intranet"]
        );
    }

    #[test]
    fn email_strict_requires_known_tld() {
        assert_eq!(
            accepted(Filter::EmailStrict, "foo@example.com qux@intranet"),
            vec!["foo@example.com"]
        );
    }

    #[test]
    fn closures_are_filters() {
        let ipv6_only = |c: &Candidate<'_>| c.host_type() == HostType::Ipv6;
        let found = UriFinder::new()
            .unwrap()
            .find_with("a.com [::1] 1.2.3.4", &ipv6_only);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "[::1]");
    }

    #[test]
    fn names_roundtrip() {
        for filter in Filter::ALL {
            assert_eq!(filter.as_str().parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_underscore() {
        assert_eq!("WEB_STRICT".parse::<Filter>(), Ok(Filter::WebStrict));
        assert_eq!(" Email ".parse::<Filter>(), Ok(Filter::Email));
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "loose".parse::<Filter>().unwrap_err();
        assert_eq!(err.name, "loose");
    }
}
