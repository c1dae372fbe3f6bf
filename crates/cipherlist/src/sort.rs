//! Preference ordering for suite sequences.
//!
//! Everything here is a stable partitioning pass: a matching subset moves
//! to the front or back while the relative order of movers and stayers is
//! preserved. The default sort chains the passes OpenSSL applies when it
//! ranks a cipher list; the strength sort is the final pass on its own.

use indexmap::IndexSet;

use crate::suite::{Authentication, CipherSuite, Encryption, KeyExchange, MessageDigest, Protocol};

/// An ordered, duplicate-free suite sequence.
pub(crate) type SuiteSet = IndexSet<&'static CipherSuite>;

/// Moves every mover that is present in `set` to the end, in mover-list
/// order. Movers not in `set` are ignored.
pub(crate) fn move_to_end(
    set: &mut SuiteSet,
    movers: impl IntoIterator<Item = &'static CipherSuite>,
) {
    let moved: Vec<_> = movers.into_iter().filter(|s| set.contains(s)).collect();
    if moved.is_empty() {
        return;
    }
    set.retain(|s| !moved.contains(s));
    set.extend(moved);
}

/// Counterpart of [`move_to_end`] for the front of the sequence.
pub(crate) fn move_to_start(
    set: &mut SuiteSet,
    movers: impl IntoIterator<Item = &'static CipherSuite>,
) {
    let moved: Vec<_> = movers.into_iter().filter(|s| set.contains(s)).collect();
    if moved.is_empty() {
        return;
    }
    let rest: Vec<_> = set
        .iter()
        .copied()
        .filter(|s| !moved.contains(s))
        .collect();
    set.clear();
    set.extend(moved);
    set.extend(rest);
}

/// Moves the suites matching `pred` to the end, preserving their
/// relative order.
fn demote(set: &mut SuiteSet, pred: impl Fn(&CipherSuite) -> bool) {
    let movers: Vec<_> = set.iter().copied().filter(|s| pred(s)).collect();
    move_to_end(set, movers);
}

/// The AES variants the default sort prefers. CCM modes are deliberately
/// not in this set.
fn preferred_aes(enc: Encryption) -> bool {
    matches!(
        enc,
        Encryption::Aes128 | Encryption::Aes128Gcm | Encryption::Aes256 | Encryption::Aes256Gcm
    )
}

/// Ranks `input` by the full preference pipeline: ephemeral ECDH first,
/// AES ahead of other ciphers, then legacy protocols, MD5, anonymous,
/// non-forward-secret, PSK, Kerberos and RC4 suites pushed to the back,
/// and finally a strength sort over the result.
pub(crate) fn default_sort(input: &SuiteSet) -> SuiteSet {
    let mut result = SuiteSet::with_capacity(input.len());

    result.extend(
        input
            .iter()
            .copied()
            .filter(|s| s.kx == KeyExchange::Ecdhe),
    );
    let aes: Vec<_> = result
        .iter()
        .copied()
        .filter(|s| preferred_aes(s.enc))
        .collect();
    move_to_start(&mut result, aes);
    result.extend(input.iter().copied().filter(|s| preferred_aes(s.enc)));
    result.extend(input.iter().copied());

    demote(&mut result, |s| s.protocol == Protocol::SSLv2);
    demote(&mut result, |s| s.mac == MessageDigest::Md5);
    demote(&mut result, |s| s.au == Authentication::Anon);
    // No forward secrecy below this line.
    demote(&mut result, |s| s.au == Authentication::Ecdh);
    demote(&mut result, |s| s.kx == KeyExchange::Rsa);
    demote(&mut result, |s| s.kx == KeyExchange::Psk);
    demote(&mut result, |s| s.kx == KeyExchange::Krb5);
    demote(&mut result, |s| s.enc == Encryption::Rc4);

    strength_sort(&result)
}

/// Reorders `input` by descending strength bits. Ties keep the order
/// they already had, which makes this usable as the last pass of the
/// default sort and as the standalone `@STRENGTH` sort.
pub(crate) fn strength_sort(input: &SuiteSet) -> SuiteSet {
    let mut strengths: Vec<u16> = Vec::new();
    for suite in input {
        if !strengths.contains(&suite.strength_bits) {
            strengths.push(suite.strength_bits);
        }
    }
    strengths.sort_unstable_by(|a, b| b.cmp(a));

    let mut result = input.clone();
    for bits in strengths {
        let movers: Vec<_> = input
            .iter()
            .copied()
            .filter(|s| s.strength_bits == bits)
            .collect();
        move_to_end(&mut result, movers);
    }
    result
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::catalog;

    fn small_set(n: usize) -> SuiteSet {
        catalog::suites().iter().take(n).collect()
    }

    #[test]
    fn move_to_end_keeps_mover_order() {
        let suites = catalog::suites();
        let mut set = small_set(5);
        move_to_end(&mut set, [&suites[3], &suites[1]]);
        let order: Vec<_> = set.iter().map(|s| s.name).collect();
        assert_eq!(
            order,
            [
                suites[0].name,
                suites[2].name,
                suites[4].name,
                suites[3].name,
                suites[1].name,
            ]
        );
    }

    #[test]
    fn move_to_end_ignores_absent_movers() {
        let suites = catalog::suites();
        let mut set = small_set(3);
        move_to_end(&mut set, [&suites[10], &suites[0]]);
        let order: Vec<_> = set.iter().map(|s| s.name).collect();
        assert_eq!(order, [suites[1].name, suites[2].name, suites[0].name]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn move_to_start_keeps_stayer_order() {
        let suites = catalog::suites();
        let mut set = small_set(4);
        move_to_start(&mut set, [&suites[2]]);
        let order: Vec<_> = set.iter().map(|s| s.name).collect();
        assert_eq!(
            order,
            [suites[2].name, suites[0].name, suites[1].name, suites[3].name]
        );
    }

    #[test]
    fn strength_sort_is_descending_and_stable() {
        let input: SuiteSet = catalog::suites().iter().collect();
        let sorted = strength_sort(&input);
        assert_eq!(sorted.len(), input.len());

        let mut last = u16::MAX;
        for suite in &sorted {
            assert!(suite.strength_bits <= last);
            last = suite.strength_bits;
        }

        // Ties keep the input order.
        let mut previous = None;
        for suite in &sorted {
            if suite.strength_bits != 128 {
                continue;
            }
            let pos = input.get_index_of(suite).unwrap();
            if let Some(prev) = previous {
                assert!(pos > prev, "{} out of order", suite.name);
            }
            previous = Some(pos);
        }
    }

    #[test]
    fn default_sort_prefers_ecdhe_aes() {
        let input: SuiteSet = catalog::suites().iter().rev().collect();
        let sorted = default_sort(&input);
        assert_eq!(sorted.len(), input.len());

        let first = sorted[0];
        assert_eq!(first.kx, KeyExchange::Ecdhe);
        assert!(preferred_aes(first.enc));
        assert_eq!(first.strength_bits, 256);
    }

    #[test]
    fn default_sort_puts_rc4_last_within_strength() {
        let input: SuiteSet = catalog::suites().iter().rev().collect();
        let sorted = default_sort(&input);

        let band: Vec<_> = sorted
            .iter()
            .filter(|s| s.strength_bits == 128)
            .collect();
        let first_rc4 = band.iter().position(|s| s.enc == Encryption::Rc4);
        let last_other = band.iter().rposition(|s| s.enc != Encryption::Rc4);
        if let (Some(first_rc4), Some(last_other)) = (first_rc4, last_other) {
            assert!(first_rc4 > last_other);
        }
    }
}
