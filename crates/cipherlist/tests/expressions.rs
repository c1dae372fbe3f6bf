//! End to end checks of expression evaluation against the full catalog.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use cipherlist::{Authentication, CipherSuite, Encryption, KeyExchange, MessageDigest, Protocol};
use proptest::prelude::*;

const DEFAULT_EXPRESSION: &str = "ALL:!EXPORT:!eNULL:!aNULL:!SSLv2:!DES:!RC2:!RC4";

fn position(list: &[&'static CipherSuite], name: &str) -> usize {
    list.iter()
        .position(|suite| suite.name == name)
        .unwrap_or_else(|| panic!("{name} not selected"))
}

#[test]
fn parsing_is_deterministic() {
    for expression in ["ALL", "DEFAULT", "HIGH:!RC4:@STRENGTH", "AES128+RSA"] {
        assert_eq!(cipherlist::parse(expression), cipherlist::parse(expression));
    }
}

#[test]
fn default_keeps_only_modern_suites() {
    let default = cipherlist::parse("DEFAULT");
    assert!(!default.is_empty());
    for suite in &default {
        assert_ne!(suite.enc, Encryption::Null);
        assert_ne!(suite.au, Authentication::Anon);
        assert!(!suite.export);
        assert_ne!(suite.protocol, Protocol::SSLv2);
        assert_ne!(suite.enc, Encryption::Des);
        assert_ne!(suite.enc, Encryption::Rc2);
        assert_ne!(suite.enc, Encryption::Rc4);
    }
    // DEFAULT is itself evaluated, so it matches the spelled-out form.
    assert_eq!(default, cipherlist::parse(DEFAULT_EXPRESSION));
}

#[test]
fn all_is_the_catalog_without_null_encryption() {
    let all = cipherlist::parse("ALL");
    let selected: HashSet<_> = all.iter().map(|suite| suite.name).collect();
    let expected: HashSet<_> = cipherlist::suites()
        .iter()
        .filter(|suite| suite.enc != Encryption::Null)
        .map(|suite| suite.name)
        .collect();
    assert_eq!(all.len(), selected.len());
    assert_eq!(selected, expected);
    for pair in all.windows(2) {
        assert!(pair[0].strength_bits >= pair[1].strength_bits);
    }
}

#[test]
fn exclusion_wins_over_membership() {
    assert!(
        cipherlist::parse("HIGH:!RC4")
            .iter()
            .all(|suite| suite.enc != Encryption::Rc4)
    );
    let medium = cipherlist::parse("MEDIUM");
    assert!(medium.iter().any(|suite| suite.enc == Encryption::Rc4));
    assert!(
        cipherlist::parse("MEDIUM:!RC4")
            .iter()
            .all(|suite| suite.enc != Encryption::Rc4)
    );
}

#[test]
fn exclusion_cannot_be_undone() {
    let suites = cipherlist::parse("ALL:!MD5:MD5");
    assert!(!suites.is_empty());
    assert!(suites.iter().all(|suite| suite.mac != MessageDigest::Md5));
}

#[test]
fn intersection_requires_every_group() {
    let suites = cipherlist::parse("AES128+RSA");
    assert!(!suites.is_empty());
    for suite in suites {
        assert_eq!(suite.kx, KeyExchange::Rsa);
        assert!(matches!(
            suite.enc,
            Encryption::Aes128
                | Encryption::Aes128Ccm
                | Encryption::Aes128Ccm8
                | Encryption::Aes128Gcm
        ));
    }
}

#[test]
fn re_adding_present_members_changes_nothing() {
    assert_eq!(cipherlist::parse("ALL:RC4"), cipherlist::parse("ALL"));
}

#[test]
fn demotion_moves_present_members_to_the_end() {
    let all = cipherlist::parse("ALL");
    let demoted = cipherlist::parse("ALL:+RC4");

    let all_names: HashSet<_> = all.iter().map(|suite| suite.name).collect();
    let demoted_names: HashSet<_> = demoted.iter().map(|suite| suite.name).collect();
    assert_eq!(all_names, demoted_names);

    let rc4 = demoted
        .iter()
        .filter(|suite| suite.enc == Encryption::Rc4)
        .count();
    assert!(rc4 > 0);
    assert!(
        demoted[demoted.len() - rc4..]
            .iter()
            .all(|suite| suite.enc == Encryption::Rc4)
    );

    // Stayers keep their relative order.
    let kept: Vec<_> = demoted
        .iter()
        .filter(|suite| suite.enc != Encryption::Rc4)
        .map(|suite| suite.name)
        .collect();
    let reference: Vec<_> = all
        .iter()
        .filter(|suite| suite.enc != Encryption::Rc4)
        .map(|suite| suite.name)
        .collect();
    assert_eq!(kept, reference);
}

#[test]
fn strength_sort_orders_descending_with_stable_ties() {
    let sorted = cipherlist::parse("ALL:@STRENGTH");
    for pair in sorted.windows(2) {
        assert!(pair[0].strength_bits >= pair[1].strength_bits);
    }

    // Ties keep the order the working list had before the sort: the
    // RC4 group was appended first, so its 128-bit members stay ahead
    // of the 128-bit AES members.
    let mixed = cipherlist::parse("RC4:AES128:@STRENGTH");
    assert_eq!(mixed[0].strength_bits, 128);
    assert_eq!(mixed[mixed.len() - 1].strength_bits, 40);
    assert!(
        position(&mixed, "TLS_RSA_WITH_RC4_128_MD5")
            < position(&mixed, "TLS_RSA_WITH_AES_128_CBC_SHA")
    );
}

#[test]
fn canonical_alias_round_trips_for_every_suite() {
    for suite in cipherlist::suites() {
        assert_eq!(cipherlist::canonical_alias(suite.name), Some(suite.openssl_name));
    }
    assert_eq!(cipherlist::canonical_alias("TLS_NOT_A_SUITE"), None);
}

#[test]
fn runtime_names_include_legacy_spellings() {
    assert_eq!(
        cipherlist::parse_expression("NULL-MD5"),
        ["TLS_RSA_WITH_NULL_MD5", "SSL_RSA_WITH_NULL_MD5"]
    );
}

#[test]
fn separators_are_interchangeable() {
    let colons = cipherlist::parse("HIGH:!RC4:!MD5");
    assert_eq!(cipherlist::parse("HIGH,!RC4 !MD5"), colons);
    assert_eq!(cipherlist::parse("HIGH,, !RC4::!MD5"), colons);
}

#[test]
fn aliases_are_case_sensitive() {
    assert!(cipherlist::parse("all").is_empty());
    assert!(!cipherlist::parse("ALL").is_empty());
}

#[test_log::test]
fn unknown_tokens_are_skipped() {
    assert_eq!(cipherlist::parse("ALL:BOGUS"), cipherlist::parse("ALL"));
    assert_eq!(cipherlist::parse("!BOGUS:HIGH"), cipherlist::parse("HIGH"));
    assert!(cipherlist::parse("BOGUS").is_empty());
}

#[test]
fn default_and_its_complement_cover_all() {
    let mut covered: HashSet<_> = cipherlist::parse("DEFAULT")
        .iter()
        .map(|suite| suite.name)
        .collect();
    covered.extend(
        cipherlist::parse("COMPLEMENTOFDEFAULT")
            .iter()
            .map(|suite| suite.name),
    );
    let all: HashSet<_> = cipherlist::parse("ALL")
        .iter()
        .map(|suite| suite.name)
        .collect();
    assert_eq!(covered, all);
}

#[test]
fn protocol_aliases_follow_openssl() {
    assert_eq!(cipherlist::parse("SSLv3"), cipherlist::parse("TLSv1"));
    let tls11 = cipherlist::parse("TLSv1.1");
    assert!(!tls11.is_empty());
    assert!(tls11.iter().all(|suite| suite.protocol == Protocol::SSLv3));
    assert!(
        cipherlist::parse("TLSv1.2")
            .iter()
            .all(|suite| suite.protocol == Protocol::TLSv1_2)
    );
}

#[test]
fn suite_lookup_by_id() {
    let aes = cipherlist::by_id(0x002F).unwrap_or_else(|| panic!("0x002F missing"));
    assert_eq!(aes.openssl_name, "AES128-SHA");
    assert!(cipherlist::by_id(0xFFFE).is_none());
}

const ALIASES: &[&str] = &[
    "ALL", "DEFAULT", "COMPLEMENTOFDEFAULT", "HIGH", "MEDIUM", "LOW", "EXPORT", "eNULL", "aNULL",
    "RC4", "RC2", "3DES", "DES", "SEED", "IDEA", "CAMELLIA", "AES", "AES128", "AES256", "AESGCM",
    "kEECDH", "EECDH", "EDH", "kRSA", "aRSA", "PSK", "SHA1", "SHA256", "MD5", "SSLv3", "TLSv1.2",
    "@STRENGTH",
];

const PREFIXES: &[&str] = &["", "!", "-", "+"];

fn expressions() -> impl Strategy<Value = String> {
    let token = (prop::sample::select(PREFIXES), prop::sample::select(ALIASES))
        .prop_map(|(prefix, alias)| format!("{prefix}{alias}"));
    prop::collection::vec(token, 1..8).prop_map(|tokens| tokens.join(":"))
}

proptest! {
    #[test]
    fn random_expressions_behave(expression in expressions()) {
        let first = cipherlist::parse(&expression);
        let second = cipherlist::parse(&expression);
        prop_assert_eq!(&first, &second);

        let mut seen = HashSet::new();
        for suite in &first {
            prop_assert!(seen.insert(suite.name), "{} selected twice", suite.name);
        }
    }

    #[test]
    fn exclusions_always_hold(expression in expressions()) {
        // Leading, so a random @STRENGTH cannot cut it off.
        let expression = format!("!RC4:{expression}");
        for suite in cipherlist::parse(&expression) {
            prop_assert_ne!(suite.enc, Encryption::Rc4);
        }
    }
}
