//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_finder::prelude::*;
//!
//! let finder = UriFinder::new().unwrap();
//! let found: Vec<FoundUri> = finder.find_with("mail a@example.com", &Filter::Email);
//! assert_eq!(found[0].host(), &Host::Name("example.com".into()));
//! ```
//!
//! Grammar internals (`HostGrammar`, `GrammarMatch`, `HostMatch`) and the
//! character-class constants are left out.

pub use crate::{
    // Core types
    Candidate, CandidateFilter, Filter, FoundUri, Host, HostType, Outcome, Scanner, TldTable,
    UriFinder,
    // Builder
    UriFinderBuilder,
    // Errors
    BuildError, FilterParseError, GrammarError, HostError, ParseError, ParseErrorKind, SkipReason,
    TldError,
    // Functions
    find, find_with,
};
