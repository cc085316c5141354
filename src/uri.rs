//! Lexical URI value for found links.

use std::fmt;
use std::str::FromStr;

use crate::charclass::{PATH, SCHEME, USERINFO};
use crate::constants::{MAX_PORT, SCHEME_SEPARATOR};
use crate::error::{ParseError, ParseErrorKind};
use crate::host::Host;

/// A URI found in free text.
///
/// Only the lexical shape is checked: the text is kept exactly as written,
/// and nothing is resolved, decoded, or normalized.
///
/// # Structure
///
/// ```text
/// [scheme://][userinfo@]host[:port][/path]
/// ```
///
/// # Examples
///
/// ```
/// use uri_finder::{FoundUri, Host};
///
/// let uri = FoundUri::parse("https://bob@example.com:8443/a?b=c").unwrap();
/// assert_eq!(uri.scheme(), Some("https"));
/// assert_eq!(uri.userinfo(), Some("bob"));
/// assert_eq!(uri.host(), &Host::Name("example.com".into()));
/// assert_eq!(uri.port(), Some(8443));
/// assert_eq!(uri.path(), Some("/a?b=c"));
///
/// let bare = FoundUri::parse("example.com").unwrap();
/// assert_eq!(bare.scheme(), None);
/// assert_eq!(bare.as_str(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundUri {
    text: String,
    scheme: Option<String>,
    userinfo: Option<String>,
    host: Host,
    port: Option<u32>,
    path: Option<String>,
}

impl FoundUri {
    /// Parses a found URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty
    /// - A scheme before `://` is empty or does not start with a letter
    /// - The host is missing or malformed
    /// - The port is not numeric or is larger than [`MAX_PORT`](crate::MAX_PORT)
    /// - The userinfo or path contains a character outside its class
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the userinfo before `@`, if present.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the host as a string, without IPv6 brackets.
    #[must_use]
    pub fn host_str(&self) -> &str {
        self.host.as_str()
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u32> {
        self.port
    }

    /// Returns the path (with any query and fragment), if present.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the URI exactly as it appeared in the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if the scheme is `http` or `https`, ignoring case.
    #[must_use]
    pub fn is_web(&self) -> bool {
        self.scheme
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https"))
    }

    /// Returns true if this looks like an email address: userinfo and a
    /// hostname, with no scheme or path.
    #[must_use]
    pub fn is_email(&self) -> bool {
        self.userinfo.as_deref().is_some_and(|u| !u.is_empty())
            && matches!(self.host, Host::Name(_))
            && self.scheme.is_none()
            && self.path.is_none()
    }

    /// Returns true if this URI references a localhost address.
    #[must_use]
    pub fn is_localhost(&self) -> bool {
        self.host.is_localhost()
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        if input.is_empty() {
            return Err(ParseErrorKind::Empty);
        }

        let (scheme, rest, offset) = Self::split_scheme(input)?;
        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], Some(&rest[idx..])),
            None => (rest, None),
        };
        let (userinfo, host_port) = Self::split_userinfo(authority, offset)?;
        let (host_str, port) = Self::split_port(host_port)?;

        if host_str.is_empty() {
            return Err(ParseErrorKind::MissingHost);
        }
        let host = Host::parse(host_str).map_err(ParseErrorKind::InvalidHost)?;

        if let Some(path) = path {
            if let Some((i, c)) = PATH.first_outside(path) {
                return Err(ParseErrorKind::UnexpectedChar {
                    char: c,
                    position: offset + authority.len() + i,
                });
            }
        }

        Ok(Self {
            text: input.to_string(),
            scheme: scheme.map(str::to_string),
            userinfo: userinfo.map(str::to_string),
            host,
            port,
            path: path.map(str::to_string),
        })
    }

    /// Splits off `scheme://`, returning the scheme, the remainder, and the
    /// remainder's offset in `input`.
    fn split_scheme(input: &str) -> Result<(Option<&str>, &str, usize), ParseErrorKind> {
        let Some(idx) = input.find(SCHEME_SEPARATOR) else {
            return Ok((None, input, 0));
        };

        let scheme = &input[..idx];
        if !SCHEME.contains_all(scheme) {
            // The separator belongs to a later component.
            return Ok((None, input, 0));
        }

        if scheme.is_empty() {
            return Err(ParseErrorKind::InvalidScheme {
                scheme: String::new(),
                reason: "scheme is empty",
            });
        }

        if !scheme.as_bytes()[0].is_ascii_alphabetic() {
            return Err(ParseErrorKind::InvalidScheme {
                scheme: scheme.to_string(),
                reason: "scheme must start with a letter",
            });
        }

        let offset = idx + SCHEME_SEPARATOR.len();
        Ok((Some(scheme), &input[offset..], offset))
    }

    fn split_userinfo(
        authority: &str,
        offset: usize,
    ) -> Result<(Option<&str>, &str), ParseErrorKind> {
        let Some(at) = authority.rfind('@') else {
            return Ok((None, authority));
        };

        let userinfo = &authority[..at];
        if let Some((i, c)) = USERINFO.first_outside(userinfo) {
            return Err(ParseErrorKind::UnexpectedChar {
                char: c,
                position: offset + i,
            });
        }

        Ok((Some(userinfo), &authority[at + 1..]))
    }

    fn split_port(host_port: &str) -> Result<(&str, Option<u32>), ParseErrorKind> {
        // Search after the closing bracket so IPv6 colons are not mistaken
        // for the port separator.
        let search_from = if host_port.starts_with('[') {
            host_port.find(']').map_or(host_port.len(), |i| i + 1)
        } else {
            0
        };

        let Some(colon) = host_port[search_from..].rfind(':').map(|i| i + search_from) else {
            return Ok((host_port, None));
        };

        let port_str = &host_port[colon + 1..];
        if port_str.is_empty() || !port_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseErrorKind::InvalidPort {
                value: port_str.to_string(),
                reason: "port must be one or more digits",
            });
        }

        let port = port_str
            .parse::<u32>()
            .ok()
            .filter(|&port| port <= MAX_PORT)
            .ok_or_else(|| ParseErrorKind::InvalidPort {
                value: port_str.to_string(),
                reason: "port must be at most 2147483647",
            })?;

        Ok((&host_port[..colon], Some(port)))
    }
}

impl fmt::Display for FoundUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for FoundUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for FoundUri {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl TryFrom<&str> for FoundUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FoundUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FoundUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
