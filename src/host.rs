//! Host component of a found URI.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host         = hostname / ipv4-literal / "[" ipv6-literal "]"
//! hostname     = *( domainlabel "." ) toplabel
//! ipv4-literal = 1*DIGIT 3( "." 1*DIGIT )
//! ipv6-literal = 2*7( 0*4HEXDIG ":" ) 0*4HEXDIG
//! ```
//!
//! Literals are kept as written. An IPv4 literal with a segment above 255
//! is still a host; [`Host::ip_addr`] tells whether it is a real address.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::candidate::HostType;
use crate::error::HostError;

/// The host portion of a found URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A hostname (e.g., "example.com")
    Name(String),
    /// A dotted-quad literal (e.g., "192.168.1.1")
    Ipv4(String),
    /// An IPv6 literal without brackets (e.g., "2001:db8::1")
    Ipv6(String),
}

impl Host {
    /// Parses a host as it appears in a URI authority.
    ///
    /// IPv6 literals must be bracketed.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the input is empty, a label is malformed, or
    /// a literal does not have the expected shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_finder::Host;
    ///
    /// assert_eq!(Host::parse("Example.com").unwrap(), Host::Name("Example.com".into()));
    /// assert_eq!(Host::parse("[::1]").unwrap(), Host::Ipv6("::1".into()));
    /// assert!(Host::parse("-bad.com").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, HostError> {
        if input.is_empty() {
            return Err(HostError::Empty);
        }

        if let Some(inner) = input.strip_prefix('[') {
            let literal = inner.strip_suffix(']').ok_or_else(|| HostError::InvalidIpv6 {
                value: input.to_string(),
                reason: "missing closing bracket",
            })?;
            Self::validate_ipv6(literal)?;
            return Ok(Self::Ipv6(literal.to_string()));
        }

        if input.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            Self::validate_ipv4(input)?;
            return Ok(Self::Ipv4(input.to_string()));
        }

        Self::validate_hostname(input)?;
        Ok(Self::Name(input.to_string()))
    }

    /// Returns the host text, without brackets for IPv6.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(s) | Self::Ipv4(s) | Self::Ipv6(s) => s,
        }
    }

    /// Returns the kind of host.
    #[must_use]
    pub const fn host_type(&self) -> HostType {
        match self {
            Self::Name(_) => HostType::Name,
            Self::Ipv4(_) => HostType::Ipv4,
            Self::Ipv6(_) => HostType::Ipv6,
        }
    }

    /// Returns the address if the literal is a real IP address.
    ///
    /// Always `None` for hostnames.
    #[must_use]
    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self {
            Self::Name(_) => None,
            Self::Ipv4(s) => {
                let mut octets = [0u8; 4];
                for (octet, segment) in octets.iter_mut().zip(s.split('.')) {
                    *octet = segment.parse().ok()?;
                }
                Some(IpAddr::V4(Ipv4Addr::from(octets)))
            }
            Self::Ipv6(s) => s.parse::<Ipv6Addr>().ok().map(IpAddr::V6),
        }
    }

    /// Returns true if this is a localhost address.
    #[must_use]
    pub fn is_localhost(&self) -> bool {
        match self {
            Self::Name(name) => name.eq_ignore_ascii_case("localhost"),
            Self::Ipv4(_) | Self::Ipv6(_) => self.ip_addr().is_some_and(|ip| ip.is_loopback()),
        }
    }

    fn validate_ipv4(literal: &str) -> Result<(), HostError> {
        let segments: Vec<&str> = literal.split('.').collect();
        if segments.len() != 4 {
            return Err(HostError::InvalidIpv4 {
                value: literal.to_string(),
                reason: "expected four dot-separated segments",
            });
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(HostError::InvalidIpv4 {
                value: literal.to_string(),
                reason: "empty segment",
            });
        }
        Ok(())
    }

    fn validate_ipv6(literal: &str) -> Result<(), HostError> {
        let groups: Vec<&str> = literal.split(':').collect();
        if !(3..=8).contains(&groups.len()) {
            return Err(HostError::InvalidIpv6 {
                value: literal.to_string(),
                reason: "expected 2 to 7 colons",
            });
        }
        for group in groups {
            if group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(HostError::InvalidIpv6 {
                    value: literal.to_string(),
                    reason: "groups must be at most four hex digits",
                });
            }
        }
        Ok(())
    }

    fn validate_hostname(name: &str) -> Result<(), HostError> {
        let labels: Vec<&str> = name.split('.').collect();
        let last = labels.len() - 1;

        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(HostError::InvalidLabel {
                    label: (*label).to_string(),
                    reason: "empty label (consecutive dots or leading/trailing dot)",
                });
            }

            if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
                return Err(HostError::InvalidLabel {
                    label: (*label).to_string(),
                    reason: "only letters, digits, and hyphens allowed",
                });
            }

            if label.starts_with('-') || label.ends_with('-') {
                return Err(HostError::InvalidLabel {
                    label: (*label).to_string(),
                    reason: "label cannot start or end with hyphen",
                });
            }

            if i == last && !label.as_bytes()[0].is_ascii_alphabetic() {
                return Err(HostError::InvalidLabel {
                    label: (*label).to_string(),
                    reason: "top label must start with a letter",
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv6(s) => write!(f, "[{s}]"),
            Self::Name(s) | Self::Ipv4(s) => f.write_str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
