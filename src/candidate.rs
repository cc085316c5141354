//! Candidates and host classification.

use std::fmt;
use std::ops::Range;

use crate::constants::MAX_PORT;
use crate::grammar::{GrammarMatch, HostMatch};
use crate::tld::TldTable;

/// The kind of host a candidate was built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HostType {
    /// A hostname such as `example.com` or `localhost`
    Name,
    /// A dotted-quad IPv4 literal
    Ipv4,
    /// A bracketed IPv6 literal
    Ipv6,
}

impl HostType {
    /// Returns true for IPv4 and IPv6 literals.
    #[must_use]
    pub const fn is_ip(self) -> bool {
        matches!(self, Self::Ipv4 | Self::Ipv6)
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        };
        f.write_str(s)
    }
}

/// A possible URI found in text, with everything a filter decides on.
///
/// The host type and validity flags are fixed when the candidate is
/// classified; boundary extension only widens the span and sets the
/// scheme, userinfo, and path flags.
///
/// # Examples
///
/// ```
/// use uri_finder::{HostType, UriFinder};
///
/// let finder = UriFinder::new().unwrap();
/// let candidates = finder.candidates("mail me at foo@mail.example.com");
/// let last = candidates.last().unwrap();
///
/// assert_eq!(last.as_str(), "foo@mail.example.com");
/// assert_eq!(last.host(), "mail.example.com");
/// assert_eq!(last.host_type(), HostType::Name);
/// assert!(last.has_userinfo());
/// assert!(last.valid_tld());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'t> {
    text: &'t str,
    host: &'t str,
    host_span: Range<usize>,
    pub(crate) span: Range<usize>,
    host_type: HostType,
    port: Option<u32>,
    has_port: bool,
    has_tld: bool,
    valid_tld: bool,
    valid_ip: bool,
    pub(crate) has_scheme: bool,
    pub(crate) has_userinfo: bool,
    pub(crate) has_path: bool,
}

impl<'t> Candidate<'t> {
    /// Classifies a grammar match found in `text`.
    pub(crate) fn classify(text: &'t str, m: &GrammarMatch<'t>, tlds: &TldTable) -> Self {
        let mut candidate = Self {
            text,
            host: "",
            host_span: m.span.clone(),
            span: m.span.clone(),
            host_type: HostType::Name,
            port: m
                .port
                .and_then(|p| p.parse::<u32>().ok())
                .filter(|&p| p <= MAX_PORT),
            has_port: m.port.is_some(),
            has_tld: false,
            valid_tld: false,
            valid_ip: false,
            has_scheme: false,
            has_userinfo: false,
            has_path: false,
        };

        match m.host {
            HostMatch::Hostname {
                name,
                top_label,
                domain_labels,
            } => {
                candidate.host = name;
                candidate.has_tld = domain_labels > 0;
                candidate.valid_tld = candidate.has_tld && tlds.contains(top_label);
            }
            HostMatch::Ipv4 { text } => {
                candidate.host = text;
                candidate.host_type = HostType::Ipv4;
                candidate.valid_ip = is_valid_ipv4(text);
            }
            HostMatch::Ipv6 { text } => {
                candidate.host = text;
                candidate.host_type = HostType::Ipv6;
                candidate.valid_ip = true;
            }
        }

        candidate
    }

    /// Returns the candidate text: the host plus any absorbed affixes.
    #[must_use]
    pub fn as_str(&self) -> &'t str {
        &self.text[self.span.clone()]
    }

    /// Returns the host without brackets or port.
    #[must_use]
    pub const fn host(&self) -> &'t str {
        self.host
    }

    /// Returns the byte range of the host match, including brackets and port.
    #[must_use]
    pub fn host_span(&self) -> Range<usize> {
        self.host_span.clone()
    }

    /// Returns the byte range of the candidate after boundary extension.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the kind of host.
    #[must_use]
    pub const fn host_type(&self) -> HostType {
        self.host_type
    }

    /// Returns the port, if one was written and is at most
    /// [`MAX_PORT`](crate::MAX_PORT).
    #[must_use]
    pub const fn port(&self) -> Option<u32> {
        self.port
    }

    /// Returns true if a `:port` followed the host.
    #[must_use]
    pub const fn has_port(&self) -> bool {
        self.has_port
    }

    /// Returns true if a hostname has at least one label before its top label.
    ///
    /// Always false for IP literals.
    #[must_use]
    pub const fn has_tld(&self) -> bool {
        self.has_tld
    }

    /// Returns true if a multi-label hostname ends in a known top-level domain.
    ///
    /// Always false for IP literals and single-label names.
    #[must_use]
    pub const fn valid_tld(&self) -> bool {
        self.valid_tld
    }

    /// Returns true for an IPv4 literal whose segments are all 0-255, and for
    /// every IPv6 literal.
    ///
    /// Always false for hostnames.
    #[must_use]
    pub const fn valid_ip(&self) -> bool {
        self.valid_ip
    }

    /// Returns true if a `scheme://` prefix was absorbed.
    #[must_use]
    pub const fn has_scheme(&self) -> bool {
        self.has_scheme
    }

    /// Returns true if a `userinfo@` prefix was absorbed.
    #[must_use]
    pub const fn has_userinfo(&self) -> bool {
        self.has_userinfo
    }

    /// Returns true if a `/`-rooted path was absorbed.
    #[must_use]
    pub const fn has_path(&self) -> bool {
        self.has_path
    }

    /// Returns true if the candidate text begins with `http`, ignoring case.
    #[must_use]
    pub fn starts_with_http(&self) -> bool {
        self.as_str()
            .as_bytes()
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"http"))
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every dot-separated segment must be an integer in 0-255.
///
/// Leading zeros are accepted; overlong numerals are out of range.
fn is_valid_ipv4(literal: &str) -> bool {
    let mut segments = 0;
    for segment in literal.split('.') {
        if segment.parse::<u8>().is_err() {
            return false;
        }
        segments += 1;
    }
    segments == 4
}
