//! Host grammar: the lexical pattern that anchors every candidate.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host         = ( hostname / ipv4-literal / "[" ipv6-literal "]" ) [ ":" port ]
//! hostname     = *( domainlabel "." ) toplabel
//! domainlabel  = alphanum / alphanum *( alphanum / "-" ) alphanum
//! toplabel     = alpha / alpha *( alphanum / "-" ) alphanum
//! ipv4-literal = 1*DIGIT "." 1*DIGIT "." 1*DIGIT "." 1*DIGIT
//! ipv6-literal = 2*7( 0*4HEXDIG ":" ) 0*4HEXDIG
//! port         = 1*DIGIT
//! ```
//!
//! Matching is ASCII case-insensitive. IPv4 segments are not range checked
//! and IPv6 literals are not checked for group count or `::` placement;
//! both are left to classification.

use std::ops::Range;

use regex::{Captures, Regex};

use crate::error::GrammarError;

const DOMAIN_LABEL: &str = "(?:[a-z0-9][a-z0-9-]*[a-z0-9]|[a-z0-9])";
const TOP_LABEL: &str = "(?P<toplabel>[a-z][a-z0-9-]*[a-z0-9]|[a-z])";
// Greedy digit runs already stop at a non-digit, so no look-ahead is needed
// to keep a longer number from being split.
const IPV4: &str = r"(?P<ipv4>(?:[0-9]+\.){3}[0-9]+)";
const IPV6_GROUP: &str = "[0-9a-f]{0,4}";
const PORT: &str = "(?::(?P<port>[0-9]+))?";

/// Which alternative of the host grammar matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMatch<'t> {
    /// A dot-separated hostname
    Hostname {
        /// The full hostname, e.g. `mail.example.com`
        name: &'t str,
        /// The rightmost label, e.g. `com`
        top_label: &'t str,
        /// Number of labels before the top label
        domain_labels: usize,
    },
    /// A dotted-quad of digit runs
    Ipv4 {
        /// The literal, e.g. `192.168.1.1`
        text: &'t str,
    },
    /// A bracketed IPv6 literal
    Ipv6 {
        /// The literal without brackets, e.g. `2001:db8::1`
        text: &'t str,
    },
}

/// One match of the host grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarMatch<'t> {
    /// The alternative that matched
    pub host: HostMatch<'t>,
    /// Port digits after `:`, if present
    pub port: Option<&'t str>,
    /// Byte range of the host including brackets and port
    pub span: Range<usize>,
}

/// The compiled host grammar.
///
/// # Examples
///
/// ```
/// use uri_finder::{HostGrammar, HostMatch};
///
/// let grammar = HostGrammar::new().unwrap();
/// let text = "see [::1]:8080";
///
/// let first = grammar.find_at(text, 0).unwrap();
/// assert_eq!(&text[first.span.clone()], "see");
///
/// let m = grammar.find_at(text, first.span.end).unwrap();
/// assert_eq!(m.host, HostMatch::Ipv6 { text: "::1" });
/// assert_eq!(m.port, Some("8080"));
/// assert_eq!(m.span, 4..14);
/// ```
#[derive(Debug, Clone)]
pub struct HostGrammar {
    re: Regex,
}

impl HostGrammar {
    /// Compiles the grammar.
    ///
    /// # Errors
    ///
    /// Returns `GrammarError` if the pattern fails to compile. The pattern is
    /// fixed, so this only happens if the grammar source itself is broken.
    pub fn new() -> Result<Self, GrammarError> {
        Regex::new(&Self::pattern())
            .map(|re| Self { re })
            .map_err(GrammarError)
    }

    /// Finds the leftmost match starting at or after byte offset `pos`.
    #[must_use]
    pub fn find_at<'t>(&self, text: &'t str, pos: usize) -> Option<GrammarMatch<'t>> {
        if pos > text.len() {
            return None;
        }
        let caps = self.re.captures_at(text, pos)?;
        Self::to_match(&caps)
    }

    fn to_match<'t>(caps: &Captures<'t>) -> Option<GrammarMatch<'t>> {
        let span = caps.name("host")?.range();
        let port = caps.name("port").map(|m| m.as_str());

        let host = if let Some(name) = caps.name("hostname") {
            let top_label = caps.name("toplabel")?.as_str();
            HostMatch::Hostname {
                name: name.as_str(),
                top_label,
                domain_labels: name.as_str().bytes().filter(|&b| b == b'.').count(),
            }
        } else if let Some(ipv4) = caps.name("ipv4") {
            HostMatch::Ipv4 {
                text: ipv4.as_str(),
            }
        } else {
            HostMatch::Ipv6 {
                text: caps.name("ipv6")?.as_str(),
            }
        };

        Some(GrammarMatch { host, port, span })
    }

    fn pattern() -> String {
        let hostname = format!(r"(?P<hostname>(?:{DOMAIN_LABEL}\.)*{TOP_LABEL})");
        // At least three groups, so `[a:b]` is never an IPv6 literal.
        let ipv6 = format!(r"\[(?P<ipv6>(?:{IPV6_GROUP}:){{2,7}}{IPV6_GROUP})\]");
        // ASCII-only classes keep offsets on char boundaries for any input.
        format!("(?i-u)(?P<host>(?:{hostname}|{IPV4}|{ipv6}){PORT})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> HostGrammar {
        HostGrammar::new().unwrap()
    }

    #[test]
    fn compiles() {
        assert!(HostGrammar::new().is_ok());
    }

    #[test]
    fn matches_hostname() {
        let m = grammar().find_at("mail.example.com", 0).unwrap();
        assert_eq!(
            m.host,
            HostMatch::Hostname {
                name: "mail.example.com",
                top_label: "com",
                domain_labels: 2,
            }
        );
        assert_eq!(m.span, 0..16);
        assert!(m.port.is_none());
    }

    #[test]
    fn matches_single_label() {
        let m = grammar().find_at("localhost:8080", 0).unwrap();
        assert_eq!(
            m.host,
            HostMatch::Hostname {
                name: "localhost",
                top_label: "localhost",
                domain_labels: 0,
            }
        );
        assert_eq!(m.port, Some("8080"));
        assert_eq!(m.span, 0..14);
    }

    #[test]
    fn matches_case_insensitively() {
        let m = grammar().find_at("Example.COM", 0).unwrap();
        assert!(matches!(
            m.host,
            HostMatch::Hostname {
                top_label: "COM",
                ..
            }
        ));
    }

    #[test]
    fn top_label_must_start_with_letter() {
        let m = grammar().find_at("example.1com", 0).unwrap();
        // Only the first label is a hostname on its own.
        assert_eq!(m.span, 0..7);
    }

    #[test]
    fn labels_do_not_end_with_hyphen() {
        let m = grammar().find_at("abc-", 0).unwrap();
        assert_eq!(m.span, 0..3);
    }

    #[test]
    fn matches_ipv4_without_range_check() {
        let m = grammar().find_at("192.168.1.999", 0).unwrap();
        assert_eq!(
            m.host,
            HostMatch::Ipv4 {
                text: "192.168.1.999"
            }
        );
    }

    #[test]
    fn ipv4_takes_whole_digit_run() {
        let m = grammar().find_at("1.2.3.45678", 0).unwrap();
        assert_eq!(m.host, HostMatch::Ipv4 { text: "1.2.3.45678" });
    }

    #[test]
    fn matches_ipv6_with_port() {
        let m = grammar().find_at("[2001:db8::1]:8080", 0).unwrap();
        assert_eq!(m.host, HostMatch::Ipv6 { text: "2001:db8::1" });
        assert_eq!(m.port, Some("8080"));
        assert_eq!(m.span, 0..18);
    }

    #[test]
    fn ipv6_needs_at_least_three_groups() {
        let m = grammar().find_at("[abc:1]", 0).unwrap();
        // Falls back to the hostname inside the brackets.
        assert!(matches!(m.host, HostMatch::Hostname { name: "abc", .. }));

        let m = grammar().find_at("[a:b]", 0).unwrap();
        assert!(matches!(m.host, HostMatch::Hostname { name: "a", .. }));

        let m = grammar().find_at("[a:b:c]", 0).unwrap();
        assert_eq!(m.host, HostMatch::Ipv6 { text: "a:b:c" });
    }

    #[test]
    fn find_at_skips_ahead() {
        let g = grammar();
        let m = g.find_at("foo bar.org", 3).unwrap();
        assert_eq!(m.span, 4..11);
    }

    #[test]
    fn no_match_in_punctuation() {
        assert!(grammar().find_at("... !!! ---", 0).is_none());
        assert!(grammar().find_at("", 0).is_none());
    }

    #[test]
    fn find_at_past_end_is_none() {
        assert!(grammar().find_at("abc", 10).is_none());
    }

    #[test]
    fn non_ascii_letters_are_not_labels() {
        let m = grammar().find_at("\u{e9}t\u{e9}.fr", 0).unwrap();
        assert!(matches!(m.host, HostMatch::Hostname { name: "t", .. }));
    }
}
