//! The group index: every alias an expression can name, resolved to an
//! ordered suite list.
//!
//! Built once, lazily, from the catalog. The master order is the reversed
//! catalog declaration order run through the default sort; every named
//! group filters that master, so groups come out pre-sorted. Per-suite
//! aliases (standard names, canonical aliases, legacy spellings) keep
//! declaration order instead.

use std::{collections::HashMap, sync::OnceLock};

use indexmap::IndexMap;

use crate::{
    catalog,
    expr,
    sort::{self, SuiteSet},
    suite::{Authentication, CipherSuite, Encryption, KeyExchange, MessageDigest, Protocol, StrengthClass},
};

/// The expression `DEFAULT` resolves through. It also excludes SSLv2,
/// unlike the documented OpenSSL definition.
const DEFAULT_EXPRESSION: &str = "ALL:!EXPORT:!eNULL:!aNULL:!SSLv2:!DES:!RC2:!RC4";

/// Attribute filter over the catalog. Provided dimensions combine with
/// logical OR: a suite matching any one of them is included. The
/// composite groups (`PSK`, `KRB5`, `FZA`) depend on the OR.
#[derive(Default)]
struct Filter<'a> {
    protocol: Option<&'a [Protocol]>,
    kx: Option<&'a [KeyExchange]>,
    au: Option<&'a [Authentication]>,
    enc: Option<&'a [Encryption]>,
    level: Option<&'a [StrengthClass]>,
    mac: Option<&'a [MessageDigest]>,
}

impl Filter<'_> {
    fn matches(&self, suite: &CipherSuite) -> bool {
        fn hit<T: PartialEq>(dim: Option<&[T]>, value: &T) -> bool {
            dim.is_some_and(|wanted| wanted.contains(value))
        }
        hit(self.protocol, &suite.protocol)
            || hit(self.kx, &suite.kx)
            || hit(self.au, &suite.au)
            || hit(self.enc, &suite.enc)
            || hit(self.level, &suite.level)
            || hit(self.mac, &suite.mac)
    }
}

fn members(set: &SuiteSet, filter: &Filter<'_>) -> Vec<&'static CipherSuite> {
    set.iter().copied().filter(|s| filter.matches(s)).collect()
}

fn by_protocol(set: &SuiteSet, protocol: &[Protocol]) -> Vec<&'static CipherSuite> {
    members(set, &Filter { protocol: Some(protocol), ..Filter::default() })
}

fn by_kx(set: &SuiteSet, kx: &[KeyExchange]) -> Vec<&'static CipherSuite> {
    members(set, &Filter { kx: Some(kx), ..Filter::default() })
}

fn by_au(set: &SuiteSet, au: &[Authentication]) -> Vec<&'static CipherSuite> {
    members(set, &Filter { au: Some(au), ..Filter::default() })
}

fn by_enc(set: &SuiteSet, enc: &[Encryption]) -> Vec<&'static CipherSuite> {
    members(set, &Filter { enc: Some(enc), ..Filter::default() })
}

fn by_level(set: &SuiteSet, level: &[StrengthClass]) -> Vec<&'static CipherSuite> {
    members(set, &Filter { level: Some(level), ..Filter::default() })
}

fn by_mac(set: &SuiteSet, mac: &[MessageDigest]) -> Vec<&'static CipherSuite> {
    members(set, &Filter { mac: Some(mac), ..Filter::default() })
}

/// The alias registry and the runtime-name translation table.
pub(crate) struct Registry {
    aliases: IndexMap<&'static str, Vec<&'static CipherSuite>>,
    canonical: HashMap<&'static str, &'static str>,
}

impl Registry {
    /// Resolves an alias to its ordered member list.
    pub(crate) fn group(&self, name: &str) -> Option<&[&'static CipherSuite]> {
        self.aliases.get(name).map(Vec::as_slice)
    }

    /// Maps a runtime name to the owning suite's canonical alias.
    pub(crate) fn canonical(&self, runtime_name: &str) -> Option<&'static str> {
        self.canonical.get(runtime_name).copied()
    }

    /// Every registered alias, in registration order.
    pub(crate) fn alias_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.aliases.keys().copied()
    }

    fn build() -> Self {
        let mut aliases: IndexMap<&'static str, Vec<&'static CipherSuite>> = IndexMap::new();
        let mut canonical: HashMap<&'static str, &'static str> = HashMap::new();

        for suite in catalog::suites() {
            aliases.entry(suite.openssl_name).or_default().push(suite);
            aliases.insert(suite.name, vec![suite]);
            for &alt in suite.openssl_alt_names {
                aliases.entry(alt).or_default().push(suite);
            }
            for name in suite.runtime_names() {
                canonical.insert(name, suite.openssl_name);
            }
        }

        let master: SuiteSet = catalog::suites().iter().rev().collect();
        let master = sort::default_sort(&master);

        let enull = by_enc(&master, &[Encryption::Null]);
        let all: Vec<_> = master
            .iter()
            .copied()
            .filter(|s| s.enc != Encryption::Null)
            .collect();
        aliases.insert("eNULL", enull.clone());
        aliases.insert("ALL", all.clone());
        aliases.insert("HIGH", by_level(&master, &[StrengthClass::High]));
        aliases.insert("MEDIUM", by_level(&master, &[StrengthClass::Medium]));
        aliases.insert("LOW", by_level(&master, &[StrengthClass::Low]));
        let export = by_level(&master, &[StrengthClass::Export40, StrengthClass::Export56]);
        aliases.insert("EXPORT", export.clone());
        aliases.insert("EXP", export);
        aliases.insert("EXPORT40", by_level(&master, &[StrengthClass::Export40]));
        aliases.insert("EXPORT56", by_level(&master, &[StrengthClass::Export56]));
        aliases.insert("NULL", enull.clone());
        aliases.insert("COMPLEMENTOFALL", enull);
        aliases.insert("aNULL", by_au(&master, &[Authentication::Anon]));

        let krsa = by_kx(&master, &[KeyExchange::Rsa]);
        aliases.insert("kRSA", krsa.clone());
        aliases.insert("aRSA", by_au(&master, &[Authentication::Rsa]));
        // OpenSSL treats RSA as the key exchange group, not aRSA.
        aliases.insert("RSA", krsa);

        aliases.insert("kEDH", by_kx(&master, &[KeyExchange::Dhe]));
        aliases.insert("kDHE", by_kx(&master, &[KeyExchange::Dhe]));
        let mut edh = by_kx(&master, &[KeyExchange::Dhe]);
        edh.retain(|s| s.au != Authentication::Anon);
        aliases.insert("EDH", edh.clone());
        aliases.insert("DHE", edh);
        aliases.insert("kDHr", by_kx(&master, &[KeyExchange::DhRsa]));
        aliases.insert("kDHd", by_kx(&master, &[KeyExchange::DhDss]));
        aliases.insert("kDH", by_kx(&master, &[KeyExchange::DhRsa, KeyExchange::DhDss]));

        aliases.insert("kECDHr", by_kx(&master, &[KeyExchange::EcdhRsa]));
        aliases.insert("kECDHe", by_kx(&master, &[KeyExchange::EcdhEcdsa]));
        aliases.insert(
            "kECDH",
            by_kx(&master, &[KeyExchange::EcdhEcdsa, KeyExchange::EcdhRsa]),
        );
        aliases.insert(
            "ECDH",
            by_kx(
                &master,
                &[KeyExchange::EcdhEcdsa, KeyExchange::EcdhRsa, KeyExchange::Ecdhe],
            ),
        );
        let kecdhe = by_kx(&master, &[KeyExchange::EcdhEcdsa]);
        aliases.insert("kECDHE", kecdhe.clone());
        aliases.insert("ECDHE", kecdhe);
        let keecdh = by_kx(&master, &[KeyExchange::Ecdhe]);
        aliases.insert("kEECDH", keecdh.clone());
        aliases.insert("EECDHE", keecdh);
        let mut eecdh = by_kx(&master, &[KeyExchange::Ecdhe]);
        eecdh.retain(|s| s.au != Authentication::Anon);
        aliases.insert("EECDH", eecdh);

        let adss = by_au(&master, &[Authentication::Dss]);
        aliases.insert("aDSS", adss.clone());
        aliases.insert("DSS", adss);
        aliases.insert("aDH", by_au(&master, &[Authentication::Dh]));
        let mut aecdh = by_kx(&master, &[KeyExchange::Ecdhe]);
        aecdh.retain(|s| s.au == Authentication::Anon);
        aliases.insert("AECDH", aecdh);
        aliases.insert("aECDH", by_au(&master, &[Authentication::Ecdh]));
        let ecdsa = by_au(&master, &[Authentication::Ecdsa]);
        aliases.insert("ECDSA", ecdsa.clone());
        aliases.insert("aECDSA", ecdsa);

        // Fortezza never made it into the catalog; the aliases resolve
        // to empty groups.
        aliases.insert("kFZA", by_kx(&master, &[KeyExchange::Fortezza]));
        aliases.insert("aFZA", by_au(&master, &[Authentication::Fortezza]));
        aliases.insert("eFZA", by_enc(&master, &[Encryption::Fortezza]));
        aliases.insert(
            "FZA",
            members(
                &master,
                &Filter {
                    kx: Some(&[KeyExchange::Fortezza]),
                    au: Some(&[Authentication::Fortezza]),
                    enc: Some(&[Encryption::Fortezza]),
                    ..Filter::default()
                },
            ),
        );

        // TLS 1.0 and 1.1 define no suites of their own; OpenSSL files
        // their names under the SSLv3 set.
        aliases.insert("TLSv1.2", by_protocol(&master, &[Protocol::TLSv1_2]));
        aliases.insert("TLSv1.1", by_protocol(&master, &[Protocol::SSLv3]));
        let tlsv1 = by_protocol(&master, &[Protocol::TLSv1, Protocol::SSLv3]);
        aliases.insert("TLSv1", tlsv1.clone());
        aliases.insert("SSLv3", tlsv1);
        aliases.insert("SSLv2", by_protocol(&master, &[Protocol::SSLv2]));

        aliases.insert(
            "DH",
            by_kx(
                &master,
                &[KeyExchange::DhRsa, KeyExchange::DhDss, KeyExchange::Dhe],
            ),
        );
        let mut adh = by_kx(&master, &[KeyExchange::Dhe]);
        adh.retain(|s| s.au == Authentication::Anon);
        aliases.insert("ADH", adh);

        aliases.insert(
            "AES128",
            by_enc(
                &master,
                &[
                    Encryption::Aes128,
                    Encryption::Aes128Ccm,
                    Encryption::Aes128Ccm8,
                    Encryption::Aes128Gcm,
                ],
            ),
        );
        aliases.insert(
            "AES256",
            by_enc(
                &master,
                &[
                    Encryption::Aes256,
                    Encryption::Aes256Ccm,
                    Encryption::Aes256Ccm8,
                    Encryption::Aes256Gcm,
                ],
            ),
        );
        aliases.insert(
            "AES",
            by_enc(
                &master,
                &[
                    Encryption::Aes128,
                    Encryption::Aes128Ccm,
                    Encryption::Aes128Ccm8,
                    Encryption::Aes128Gcm,
                    Encryption::Aes256,
                    Encryption::Aes256Ccm,
                    Encryption::Aes256Ccm8,
                    Encryption::Aes256Gcm,
                ],
            ),
        );
        aliases.insert(
            "AESGCM",
            by_enc(&master, &[Encryption::Aes128Gcm, Encryption::Aes256Gcm]),
        );
        aliases.insert(
            "CAMELLIA",
            by_enc(&master, &[Encryption::Camellia128, Encryption::Camellia256]),
        );
        aliases.insert("CAMELLIA128", by_enc(&master, &[Encryption::Camellia128]));
        aliases.insert("CAMELLIA256", by_enc(&master, &[Encryption::Camellia256]));
        aliases.insert("3DES", by_enc(&master, &[Encryption::TripleDes]));
        aliases.insert("DES", by_enc(&master, &[Encryption::Des]));
        aliases.insert("RC4", by_enc(&master, &[Encryption::Rc4]));
        aliases.insert("RC2", by_enc(&master, &[Encryption::Rc2]));
        aliases.insert("IDEA", by_enc(&master, &[Encryption::Idea]));
        aliases.insert("SEED", by_enc(&master, &[Encryption::Seed]));

        aliases.insert("MD5", by_mac(&master, &[MessageDigest::Md5]));
        let sha1 = by_mac(&master, &[MessageDigest::Sha1]);
        aliases.insert("SHA1", sha1.clone());
        aliases.insert("SHA", sha1);
        aliases.insert("SHA256", by_mac(&master, &[MessageDigest::Sha256]));
        aliases.insert("SHA384", by_mac(&master, &[MessageDigest::Sha384]));

        // GOST is in the same boat as Fortezza.
        aliases.insert(
            "aGOST",
            by_au(&master, &[Authentication::Gost01, Authentication::Gost94]),
        );
        aliases.insert("aGOST01", by_au(&master, &[Authentication::Gost01]));
        aliases.insert("aGOST94", by_au(&master, &[Authentication::Gost94]));
        aliases.insert("kGOST", by_kx(&master, &[KeyExchange::Gost]));
        aliases.insert("GOST94", by_mac(&master, &[MessageDigest::Gost94]));
        aliases.insert("GOST89MAC", by_mac(&master, &[MessageDigest::Gost89Mac]));

        aliases.insert(
            "PSK",
            members(
                &master,
                &Filter {
                    kx: Some(&[
                        KeyExchange::Psk,
                        KeyExchange::RsaPsk,
                        KeyExchange::DhePsk,
                        KeyExchange::EcdhePsk,
                    ]),
                    au: Some(&[Authentication::Psk]),
                    ..Filter::default()
                },
            ),
        );
        aliases.insert(
            "KRB5",
            members(
                &master,
                &Filter {
                    kx: Some(&[KeyExchange::Krb5]),
                    au: Some(&[Authentication::Krb5]),
                    ..Filter::default()
                },
            ),
        );

        aliases.insert("aSRP", by_au(&master, &[Authentication::Srp]));
        aliases.insert("kSRP", by_kx(&master, &[KeyExchange::Srp]));
        aliases.insert("SRP", by_kx(&master, &[KeyExchange::Srp]));

        let mut registry = Registry { aliases, canonical };

        // DEFAULT goes through the evaluator so it tracks exactly what a
        // user-supplied expression would get.
        let default = expr::evaluate(&registry, DEFAULT_EXPRESSION);
        registry.aliases.insert("DEFAULT", default);

        // COMPLEMENTOFDEFAULT is narrower than a literal complement:
        // the anonymous forward-secret suites, minus eNULL, plus the
        // groups DEFAULT shut out.
        let mut complement: SuiteSet = all
            .iter()
            .copied()
            .filter(|s| matches!(s.kx, KeyExchange::Dhe | KeyExchange::Ecdhe))
            .filter(|s| s.au == Authentication::Anon)
            .collect();
        complement.retain(|s| s.enc != Encryption::Null);
        for name in ["SSLv2", "EXPORT", "DES", "RC2", "RC4"] {
            if let Some(group) = registry.group(name) {
                let group: Vec<_> = group.to_vec();
                complement.extend(group);
            }
        }
        registry
            .aliases
            .insert("COMPLEMENTOFDEFAULT", complement.into_iter().collect());

        registry
    }
}

/// The process-wide registry, built on first use.
pub(crate) fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::build)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn names(alias: &str) -> Vec<&'static str> {
        registry()
            .group(alias)
            .map(|suites| suites.iter().map(|s| s.openssl_name).collect())
            .unwrap_or_default()
    }

    #[test]
    fn all_excludes_null_encryption() {
        let all = registry().group("ALL").unwrap();
        assert!(all.iter().all(|s| s.enc != Encryption::Null));
        let expected = catalog::suites()
            .iter()
            .filter(|s| s.enc != Encryption::Null)
            .count();
        assert_eq!(all.len(), expected);
    }

    #[test]
    fn master_order_prefers_forward_secret_aes() {
        let first = registry().group("ALL").unwrap()[0];
        assert_eq!(first.kx, KeyExchange::Ecdhe);
        assert_eq!(first.strength_bits, 256);
        assert_eq!(first.openssl_name, "ECDHE-RSA-AES256-GCM-SHA384");
    }

    #[test]
    fn aliased_groups_share_members() {
        assert_eq!(names("RSA"), names("kRSA"));
        assert_eq!(names("SHA"), names("SHA1"));
        assert_eq!(names("EXP"), names("EXPORT"));
        assert_eq!(names("ECDHE"), names("kECDHE"));
        assert_eq!(names("DSS"), names("aDSS"));
        assert_eq!(names("NULL"), names("eNULL"));
        assert_eq!(names("COMPLEMENTOFALL"), names("eNULL"));
        assert_eq!(names("SSLv3"), names("TLSv1"));
    }

    #[test]
    fn tlsv1_1_is_the_sslv3_set() {
        let group = registry().group("TLSv1.1").unwrap();
        assert!(!group.is_empty());
        assert!(group.iter().all(|s| s.protocol == Protocol::SSLv3));
    }

    #[test]
    fn psk_group_is_an_or_filter() {
        let psk = registry().group("PSK").unwrap();
        // RSA-PSK suites authenticate with RSA; only the OR over the
        // kx dimension pulls them in.
        assert!(
            psk.iter()
                .any(|s| s.name == "TLS_RSA_PSK_WITH_AES_128_CBC_SHA")
        );
        assert!(psk.iter().any(|s| s.au == Authentication::Rsa));
    }

    #[test]
    fn legacy_families_resolve_empty() {
        for alias in ["KRB5", "FZA", "kFZA", "aGOST", "kGOST", "GOST94", "GOST89MAC"] {
            let group = registry().group(alias).unwrap();
            assert!(group.is_empty(), "{alias} should be empty");
        }
    }

    #[test]
    fn default_is_clean() {
        let default = registry().group("DEFAULT").unwrap();
        assert!(!default.is_empty());
        for suite in default {
            assert!(!suite.export);
            assert_ne!(suite.enc, Encryption::Null);
            assert_ne!(suite.au, Authentication::Anon);
            assert_ne!(suite.protocol, Protocol::SSLv2);
            assert_ne!(suite.enc, Encryption::Des);
            assert_ne!(suite.enc, Encryption::Rc2);
            assert_ne!(suite.enc, Encryption::Rc4);
        }
    }

    #[test]
    fn complement_of_default_has_the_shut_out_suites() {
        let complement = registry().group("COMPLEMENTOFDEFAULT").unwrap();
        assert!(complement.iter().any(|s| s.protocol == Protocol::SSLv2));
        assert!(complement.iter().any(|s| s.enc == Encryption::Rc4));
        assert!(complement.iter().any(|s| s.export));
        assert!(
            complement
                .iter()
                .take_while(|s| s.au == Authentication::Anon)
                .any(|s| matches!(s.kx, KeyExchange::Dhe | KeyExchange::Ecdhe))
        );
    }

    #[test]
    fn shared_canonical_aliases_resolve_to_both_suites() {
        let rc4_md5 = registry().group("RC4-MD5").unwrap();
        let names: Vec<_> = rc4_md5.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["TLS_RSA_WITH_RC4_128_MD5", "SSL_CK_RC4_128_WITH_MD5"]
        );
    }

    #[test]
    fn legacy_spellings_are_registered() {
        let edh = registry().group("EDH-DSS-DES-CBC3-SHA").unwrap();
        assert_eq!(edh.len(), 1);
        assert_eq!(edh[0].name, "TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA");
    }

    #[test]
    fn standard_names_are_singleton_groups() {
        let group = registry().group("TLS_RSA_WITH_AES_128_CBC_SHA").unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].openssl_name, "AES128-SHA");
    }

    #[test]
    fn canonical_lookup_covers_every_runtime_name() {
        for suite in catalog::suites() {
            for name in suite.runtime_names() {
                assert_eq!(registry().canonical(name), Some(suite.openssl_name));
            }
        }
        assert_eq!(registry().canonical("TLS_NOT_A_SUITE"), None);
    }
}
