//! Error types for URI finding.

use std::fmt;

/// Errors that can occur when parsing a found URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty
    Empty,
    /// Scheme before `://` is empty or malformed
    InvalidScheme {
        /// The scheme that was found
        scheme: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Nothing between the userinfo (or scheme) and the port or path
    MissingHost,
    /// Host parsing failed
    InvalidHost(HostError),
    /// Invalid port number
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Unexpected character at position
    UnexpectedChar {
        /// The unexpected character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::InvalidScheme { scheme, reason } => {
                write!(f, "invalid scheme '{scheme}': {reason}")
            }
            ParseErrorKind::MissingHost => write!(f, "missing host"),
            ParseErrorKind::InvalidHost(e) => write!(f, "invalid host: {e}"),
            ParseErrorKind::InvalidPort { value, reason } => {
                write!(f, "invalid port '{value}': {reason}")
            }
            ParseErrorKind::UnexpectedChar { char, position } => {
                write!(f, "unexpected character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for host parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Host is empty
    Empty,
    /// Invalid hostname label
    InvalidLabel {
        /// The invalid label
        label: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Malformed IPv4 literal
    InvalidIpv4 {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Malformed IPv6 literal
    InvalidIpv6 {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "host cannot be empty"),
            Self::InvalidLabel { label, reason } => {
                write!(f, "invalid label '{label}': {reason}")
            }
            Self::InvalidIpv4 { value, reason } => {
                write!(f, "invalid IPv4 literal '{value}': {reason}")
            }
            Self::InvalidIpv6 { value, reason } => {
                write!(f, "invalid IPv6 literal '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for HostError {}

/// Errors for top-level domain table entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TldError {
    /// Entry is empty
    Empty,
    /// Entry contains a character other than a letter, digit, or hyphen
    InvalidChar {
        /// The offending entry
        tld: String,
        /// The invalid character
        char: char,
        /// Position in the entry
        position: usize,
    },
}

impl fmt::Display for TldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "top-level domain cannot be empty"),
            Self::InvalidChar {
                tld,
                char,
                position,
            } => write!(
                f,
                "invalid character '{char}' at position {position} in top-level domain '{tld}'; only letters, digits, and hyphens allowed"
            ),
        }
    }
}

impl std::error::Error for TldError {}

/// The host grammar failed to compile.
///
/// This is a programming error in the grammar source, never a property of
/// the scanned text.
#[derive(Debug, Clone)]
pub struct GrammarError(pub(crate) regex::Error);

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host grammar failed to compile: {}", self.0)
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Errors that can occur when building a [`UriFinder`](crate::UriFinder).
#[derive(Debug, Clone)]
pub enum BuildError {
    /// The host grammar failed to compile
    Grammar(GrammarError),
    /// A top-level domain entry was rejected
    Tld(TldError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar(e) => write!(f, "{e}"),
            Self::Tld(e) => write!(f, "invalid top-level domain table: {e}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grammar(e) => Some(e),
            Self::Tld(e) => Some(e),
        }
    }
}

impl From<GrammarError> for BuildError {
    fn from(e: GrammarError) -> Self {
        Self::Grammar(e)
    }
}

impl From<TldError> for BuildError {
    fn from(e: TldError) -> Self {
        Self::Tld(e)
    }
}

/// Unknown filter policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError {
    /// The name that was not recognized
    pub name: String,
}

impl fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown filter '{}'; expected one of none, simple, normal, strict, web, web-strict, email, email-strict",
            self.name
        )
    }
}

impl std::error::Error for FilterParseError {}

/// Why a candidate did not become a found URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The extended span is directly followed by a character other than a space
    TrailingChar {
        /// The character after the span
        found: char,
        /// Byte offset of that character in the scanned text
        position: usize,
    },
    /// The filter policy rejected the candidate
    Filtered,
    /// The span passed the filter but is not a well-formed URI
    Malformed(ParseError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrailingChar { found, position } => {
                write!(f, "followed by '{found}' at position {position}")
            }
            Self::Filtered => write!(f, "rejected by filter"),
            Self::Malformed(e) => write!(f, "{e}"),
        }
    }
}
