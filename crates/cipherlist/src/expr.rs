//! Cipher list expression evaluation.
//!
//! An expression is a separator-delimited sequence of tokens, applied
//! left to right against a working list. Prefix operators exclude
//! (`!`), delete (`-`), or demote (`+`) a group; `@STRENGTH` sorts by
//! strength and stops processing; an embedded `+` intersects groups;
//! a bare token appends its group. Exclusions are permanent and take
//! effect once the whole expression has been walked.

use tracing::warn;

use crate::{
    registry::Registry,
    sort::{self, SuiteSet},
    suite::CipherSuite,
};

/// One token of a cipher list expression.
#[derive(Debug, PartialEq, Eq)]
enum Op<'a> {
    /// `!name`: drop the group from the final list, even if a later
    /// token re-adds it.
    Exclude(&'a str),
    /// `-name`: drop the group's members from the working list. A later
    /// token may add them back.
    Remove(&'a str),
    /// `+name`: move the group's members already in the working list to
    /// its end.
    ToEnd(&'a str),
    /// `@STRENGTH`: sort the working list by strength and stop.
    StrengthSort,
    /// A bare alias: append the group.
    Use(&'a str),
    /// `a+b+...`: append the intersection of the named groups.
    Intersect(Vec<&'a str>),
}

/// Splits an expression into operations. Runs of separators collapse;
/// classification is purely syntactic, so unknown names surface later,
/// during evaluation.
fn lex(expression: &str) -> Vec<Op<'_>> {
    expression
        .split([':', ',', ' '])
        .filter(|token| !token.is_empty())
        .map(|token| {
            if let Some(name) = token.strip_prefix('!') {
                Op::Exclude(name)
            } else if let Some(name) = token.strip_prefix('-') {
                Op::Remove(name)
            } else if let Some(name) = token.strip_prefix('+') {
                Op::ToEnd(name)
            } else if token == "@STRENGTH" {
                Op::StrengthSort
            } else if token.contains('+') {
                Op::Intersect(token.split('+').filter(|part| !part.is_empty()).collect())
            } else {
                Op::Use(token)
            }
        })
        .collect()
}

/// Evaluates an expression against the registry and returns the
/// selected suites in their effective order.
pub(crate) fn evaluate(registry: &Registry, expression: &str) -> Vec<&'static CipherSuite> {
    let mut working = SuiteSet::new();
    let mut excluded = SuiteSet::new();

    for op in lex(expression) {
        match op {
            Op::Exclude(name) => match registry.group(name) {
                Some(group) => excluded.extend(group.iter().copied()),
                None => warn!("unknown element {name} in cipher list"),
            },
            Op::Remove(name) => match registry.group(name) {
                Some(group) => working.retain(|suite| !group.contains(suite)),
                None => warn!("unknown element {name} in cipher list"),
            },
            Op::ToEnd(name) => match registry.group(name) {
                Some(group) => sort::move_to_end(&mut working, group.iter().copied()),
                None => warn!("unknown element {name} in cipher list"),
            },
            Op::StrengthSort => {
                working = sort::strength_sort(&working);
                break;
            }
            Op::Use(name) => match registry.group(name) {
                Some(group) => working.extend(group.iter().copied()),
                None => warn!("unknown element {name} in cipher list"),
            },
            Op::Intersect(parts) => {
                let Some((&first, rest)) = parts.split_first() else {
                    continue;
                };
                match registry.group(first) {
                    Some(group) => {
                        let mut intersection = group.to_vec();
                        for &part in rest {
                            match registry.group(part) {
                                Some(members) => {
                                    intersection.retain(|suite| members.contains(suite));
                                }
                                None => warn!("unknown element {part} in cipher list"),
                            }
                        }
                        working.extend(intersection);
                    }
                    None => warn!("unknown element {first} in cipher list"),
                }
            }
        }
    }

    working.retain(|suite| !excluded.contains(suite));
    working.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        registry::registry,
        suite::{Encryption, KeyExchange, MessageDigest},
    };

    #[test]
    fn lexes_every_operator() {
        let ops = lex("ALL:!RC4 -MD5,+SHA:@STRENGTH:AES128+SHA");
        assert_eq!(
            ops,
            [
                Op::Use("ALL"),
                Op::Exclude("RC4"),
                Op::Remove("MD5"),
                Op::ToEnd("SHA"),
                Op::StrengthSort,
                Op::Intersect(vec!["AES128", "SHA"]),
            ]
        );
    }

    #[test]
    fn separator_runs_collapse() {
        assert_eq!(lex(":, RSA::  RC4,"), [Op::Use("RSA"), Op::Use("RC4")]);
        assert!(lex("").is_empty());
        assert!(lex(" ,:").is_empty());
    }

    #[test]
    fn exclusion_is_permanent() {
        let suites = evaluate(registry(), "RC4:!RC4:RC4");
        assert!(suites.is_empty());
    }

    #[test]
    fn deletion_can_be_undone() {
        let deleted = evaluate(registry(), "RC4:-RC4");
        assert!(deleted.is_empty());
        let restored = evaluate(registry(), "RC4:-RC4:RC4");
        assert_eq!(restored, evaluate(registry(), "RC4"));
    }

    #[test]
    fn strength_sort_stops_processing() {
        let suites = evaluate(registry(), "AES128:@STRENGTH:RC4");
        assert_eq!(suites, evaluate(registry(), "AES128:@STRENGTH"));
        // Exclusions seen before the sort still apply afterwards.
        let filtered = evaluate(registry(), "ALL:!RC4:@STRENGTH");
        assert!(filtered.iter().all(|s| s.enc != Encryption::Rc4));
    }

    #[test]
    fn intersection_needs_a_known_first_group() {
        assert!(evaluate(registry(), "BOGUS+AES128").is_empty());
        // Unknown later parts are skipped rather than emptying the set.
        assert_eq!(
            evaluate(registry(), "AES128+BOGUS"),
            evaluate(registry(), "AES128")
        );
    }

    #[test]
    fn intersection_filters_by_every_known_part() {
        let suites = evaluate(registry(), "AES128+SHA256+kEECDH");
        assert!(!suites.is_empty());
        for suite in suites {
            assert_eq!(suite.mac, MessageDigest::Sha256);
            assert_eq!(suite.kx, KeyExchange::Ecdhe);
        }
    }

    #[test]
    fn appending_twice_does_not_duplicate() {
        assert_eq!(evaluate(registry(), "RSA:RSA"), evaluate(registry(), "RSA"));
    }

    #[test]
    fn unknown_names_select_nothing() {
        assert!(evaluate(registry(), "NOT-A-CIPHER").is_empty());
        assert!(evaluate(registry(), "-NOT-A-CIPHER").is_empty());
        assert!(evaluate(registry(), "+NOT-A-CIPHER").is_empty());
    }
}
