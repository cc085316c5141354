//! Finds links, hostnames, IP literals, and `user@host` forms in free text.
//!
//! Chat messages rarely contain well-formed URIs. This crate picks out
//! anything that looks like a host, widens it to take in a scheme, userinfo,
//! or path written around it, and lets a [`Filter`] decide which of those
//! candidates are worth turning into links.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_finder::{find, find_with, Filter};
//!
//! let found = find("try example.com or http://10.0.0.1:8080/status");
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].host_str(), "example.com");
//! assert_eq!(found[1].port(), Some(8080));
//!
//! let mail = find_with("ping bob@example.org", Filter::Email);
//! assert_eq!(mail[0].userinfo(), Some("bob"));
//! ```
//!
//! # How Candidates Are Found
//!
//! 1. The host grammar matches a hostname, IPv4 literal, or bracketed IPv6
//!    literal, with an optional `:port`.
//! 2. The match is classified: multi-label names are checked against the
//!    [`TldTable`], IPv4 segments against 0-255.
//! 3. The span is widened left over `userinfo@` and `scheme://`, and right
//!    over a `/path`.
//! 4. A span followed by anything other than a space is dropped.
//! 5. The filter decides; accepted spans are parsed into [`FoundUri`].
//!
//! Use [`UriFinder::scan`] to see every decision, including why a candidate
//! was skipped.
//!
//! # Filters
//!
//! | Filter | Typical use |
//! |--------|-------------|
//! | `None` | debugging, every host-like word |
//! | `Simple` | anything with visible structure |
//! | `Normal` (default) | chat linkification |
//! | `Strict` | only explicit `scheme://` links |
//! | `Web` / `WebStrict` | `http` links |
//! | `Email` / `EmailStrict` | `user@host` addresses |
//!
//! # Custom TLD Tables
//!
//! ```rust
//! use uri_finder::UriFinder;
//!
//! let finder = UriFinder::builder().tlds(["lan"]).build().unwrap();
//! assert_eq!(finder.find("nas.lan example.com").len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod candidate;
mod charclass;
mod constants;
mod error;
mod filter;
mod finder;
mod grammar;
mod host;
pub mod prelude;
mod scanner;
mod tld;
mod uri;

pub use builder::UriFinderBuilder;
pub use candidate::{Candidate, HostType};
pub use constants::{MAX_PORT, PATH_CHARS, SCHEME_CHARS, SCHEME_SEPARATOR, USERINFO_CHARS};
pub use error::{
    BuildError, FilterParseError, GrammarError, HostError, ParseError, ParseErrorKind, SkipReason,
    TldError,
};
pub use filter::{CandidateFilter, Filter};
pub use finder::UriFinder;
pub use grammar::{GrammarMatch, HostGrammar, HostMatch};
pub use host::Host;
pub use scanner::{Outcome, Scanner};
pub use tld::{DEFAULT_COUNTRY_CODES, DEFAULT_GENERIC_TLDS, TldTable};
pub use uri::FoundUri;

/// Finds URIs in `text` with the `Normal` filter and the built-in TLD table.
///
/// # Panics
///
/// Panics on first use if the built-in host grammar fails to compile.
#[must_use]
pub fn find(text: &str) -> Vec<FoundUri> {
    UriFinder::shared().find(text)
}

/// Finds URIs in `text` accepted by `filter`, using the built-in TLD table.
///
/// # Panics
///
/// Panics on first use if the built-in host grammar fails to compile.
#[must_use]
pub fn find_with(text: &str, filter: Filter) -> Vec<FoundUri> {
    UriFinder::shared().find_with(text, &filter)
}
