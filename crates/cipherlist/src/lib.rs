//! OpenSSL-style cipher list expressions for TLS cipher suite
//! selection.
//!
//! An expression combines named suite groups with the OpenSSL
//! operators: `!` excludes a group permanently, `-` deletes it from the
//! working list, `+` moves its present members to the end, `@STRENGTH`
//! sorts by encryption strength and stops, and an embedded `+`
//! intersects groups. Evaluation is deterministic: the same expression
//! always produces the same ordered, duplicate-free list.
//!
//! ```
//! let suites = cipherlist::parse("EECDH+AESGCM:!aNULL");
//! assert!(!suites.is_empty());
//! for suite in &suites {
//!     println!("{}", suite.verbose());
//! }
//! ```

#![warn(clippy::arithmetic_side_effects)]

mod catalog;
mod expr;
mod names;
mod registry;
mod sort;
mod suite;

pub use crate::{
    catalog::{by_id, suites},
    suite::{
        Authentication, CipherSuite, Encryption, KeyExchange, MessageDigest, Protocol,
        StrengthClass,
    },
};

/// Evaluates a cipher list expression and returns the selected suites
/// in their effective order.
pub fn parse(expression: &str) -> Vec<&'static CipherSuite> {
    expr::evaluate(registry::registry(), expression)
}

/// Evaluates a cipher list expression and returns the runtime names of
/// the selected suites, standard names first, legacy provider
/// spellings after.
pub fn parse_expression(expression: &str) -> Vec<&'static str> {
    names::runtime_names(parse(expression))
}

/// Maps a runtime suite name to the owning suite's canonical alias.
pub fn canonical_alias(runtime_name: &str) -> Option<&'static str> {
    names::canonical(runtime_name)
}

/// Resolves a registered alias to its ordered member suites. Group
/// aliases come back pre-sorted; suite name aliases keep catalog order.
pub fn group(alias: &str) -> Option<&'static [&'static CipherSuite]> {
    registry::registry().group(alias)
}

/// Every registered alias, in registration order.
pub fn aliases() -> impl Iterator<Item = &'static str> {
    registry::registry().alias_names()
}
