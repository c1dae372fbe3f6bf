//! The cipher suite record and its classification attributes.

use core::{
    fmt,
    hash::{Hash, Hasher},
    iter,
};

use serde::Serialize;

/// The protocol version a suite was introduced with.
///
/// TLS 1.0 and 1.1 did not define suites of their own beyond SSLv3's,
/// which is why the alias table maps their names onto the SSLv3 set.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Protocol {
    #[serde(rename = "SSLv2")]
    SSLv2,
    #[serde(rename = "SSLv3")]
    SSLv3,
    #[serde(rename = "TLSv1")]
    TLSv1,
    #[serde(rename = "TLSv1.2")]
    TLSv1_2,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SSLv2 => "SSLv2",
            Self::SSLv3 => "SSLv3",
            Self::TLSv1 => "TLSv1",
            Self::TLSv1_2 => "TLSv1.2",
        };
        name.fmt(f)
    }
}

/// Key exchange category.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum KeyExchange {
    #[serde(rename = "RSA")]
    Rsa,
    /// Fixed DH with an RSA-signed certificate.
    #[serde(rename = "DHr")]
    DhRsa,
    /// Fixed DH with a DSS-signed certificate.
    #[serde(rename = "DHd")]
    DhDss,
    /// Ephemeral DH.
    #[serde(rename = "EDH")]
    Dhe,
    /// Ephemeral ECDH.
    #[serde(rename = "EECDH")]
    Ecdhe,
    #[serde(rename = "ECDHr")]
    EcdhRsa,
    #[serde(rename = "ECDHe")]
    EcdhEcdsa,
    #[serde(rename = "PSK")]
    Psk,
    #[serde(rename = "RSAPSK")]
    RsaPsk,
    #[serde(rename = "DHEPSK")]
    DhePsk,
    #[serde(rename = "ECDHEPSK")]
    EcdhePsk,
    #[serde(rename = "KRB5")]
    Krb5,
    #[serde(rename = "SRP")]
    Srp,
    #[serde(rename = "GOST")]
    Gost,
    #[serde(rename = "FZA")]
    Fortezza,
}

impl fmt::Display for KeyExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rsa => "RSA",
            Self::DhRsa => "DHr",
            Self::DhDss => "DHd",
            Self::Dhe => "EDH",
            Self::Ecdhe => "EECDH",
            Self::EcdhRsa => "ECDHr",
            Self::EcdhEcdsa => "ECDHe",
            Self::Psk => "PSK",
            Self::RsaPsk => "RSAPSK",
            Self::DhePsk => "DHEPSK",
            Self::EcdhePsk => "ECDHEPSK",
            Self::Krb5 => "KRB5",
            Self::Srp => "SRP",
            Self::Gost => "GOST",
            Self::Fortezza => "FZA",
        };
        name.fmt(f)
    }
}

/// Authentication category.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Authentication {
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "DSS")]
    Dss,
    /// No authentication at all (anonymous suites).
    #[serde(rename = "aNULL")]
    Anon,
    #[serde(rename = "DH")]
    Dh,
    #[serde(rename = "ECDH")]
    Ecdh,
    #[serde(rename = "KRB5")]
    Krb5,
    #[serde(rename = "ECDSA")]
    Ecdsa,
    #[serde(rename = "PSK")]
    Psk,
    #[serde(rename = "GOST94")]
    Gost94,
    #[serde(rename = "GOST01")]
    Gost01,
    #[serde(rename = "FZA")]
    Fortezza,
    #[serde(rename = "SRP")]
    Srp,
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rsa => "RSA",
            Self::Dss => "DSS",
            Self::Anon => "None",
            Self::Dh => "DH",
            Self::Ecdh => "ECDH",
            Self::Krb5 => "KRB5",
            Self::Ecdsa => "ECDSA",
            Self::Psk => "PSK",
            Self::Gost94 => "GOST94",
            Self::Gost01 => "GOST01",
            Self::Fortezza => "FZA",
            Self::Srp => "SRP",
        };
        name.fmt(f)
    }
}

/// Bulk encryption category.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Encryption {
    #[serde(rename = "AES128")]
    Aes128,
    #[serde(rename = "AES128CCM")]
    Aes128Ccm,
    #[serde(rename = "AES128CCM8")]
    Aes128Ccm8,
    #[serde(rename = "AES128GCM")]
    Aes128Gcm,
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "AES256CCM")]
    Aes256Ccm,
    #[serde(rename = "AES256CCM8")]
    Aes256Ccm8,
    #[serde(rename = "AES256GCM")]
    Aes256Gcm,
    #[serde(rename = "CAMELLIA128")]
    Camellia128,
    #[serde(rename = "CAMELLIA256")]
    Camellia256,
    #[serde(rename = "CHACHA20POLY1305")]
    ChaCha20Poly1305,
    #[serde(rename = "3DES")]
    TripleDes,
    #[serde(rename = "DES")]
    Des,
    #[serde(rename = "IDEA")]
    Idea,
    #[serde(rename = "SEED")]
    Seed,
    #[serde(rename = "FZA")]
    Fortezza,
    #[serde(rename = "RC4")]
    Rc4,
    #[serde(rename = "RC2")]
    Rc2,
    /// No encryption.
    #[serde(rename = "eNULL")]
    Null,
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aes128 => "AES128",
            Self::Aes128Ccm => "AES128CCM",
            Self::Aes128Ccm8 => "AES128CCM8",
            Self::Aes128Gcm => "AES128GCM",
            Self::Aes256 => "AES256",
            Self::Aes256Ccm => "AES256CCM",
            Self::Aes256Ccm8 => "AES256CCM8",
            Self::Aes256Gcm => "AES256GCM",
            Self::Camellia128 => "Camellia128",
            Self::Camellia256 => "Camellia256",
            Self::ChaCha20Poly1305 => "ChaCha20Poly1305",
            Self::TripleDes => "3DES",
            Self::Des => "DES",
            Self::Idea => "IDEA",
            Self::Seed => "SEED",
            Self::Fortezza => "FZA",
            Self::Rc4 => "RC4",
            Self::Rc2 => "RC2",
            Self::Null => "None",
        };
        name.fmt(f)
    }
}

/// Message digest (MAC) category.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum MessageDigest {
    #[serde(rename = "MD5")]
    Md5,
    #[serde(rename = "SHA1")]
    Sha1,
    #[serde(rename = "SHA256")]
    Sha256,
    #[serde(rename = "SHA384")]
    Sha384,
    #[serde(rename = "GOST94")]
    Gost94,
    #[serde(rename = "GOST89MAC")]
    Gost89Mac,
    /// AEAD suites carry no separate MAC.
    #[serde(rename = "AEAD")]
    Aead,
}

impl fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Gost94 => "GOST94",
            Self::Gost89Mac => "GOST89MAC",
            Self::Aead => "AEAD",
        };
        name.fmt(f)
    }
}

/// Coarse strength class used by the `HIGH`/`MEDIUM`/`LOW`/`EXPORT*`
/// groups.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum StrengthClass {
    /// Either very strong or no encryption at all.
    #[serde(rename = "STRONG_NONE")]
    StrongNone,
    #[serde(rename = "EXP40")]
    Export40,
    #[serde(rename = "EXP56")]
    Export56,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

/// A single TLS cipher suite with its full classification.
///
/// Suites live in the static catalog; everything downstream works with
/// `&'static CipherSuite` references. Identity is the standard name,
/// which the catalog guarantees unique.
#[derive(Debug, Serialize)]
pub struct CipherSuite {
    /// Registry identifier. Suites predating the registry have none and
    /// are excluded from id lookup.
    pub id: Option<u16>,
    /// Standard registry name (`TLS_…`, `SSL2_…`), also the first
    /// runtime name.
    pub name: &'static str,
    /// Canonical OpenSSL-style alias, the primary display name.
    pub openssl_name: &'static str,
    /// Legacy OpenSSL spellings still accepted for this suite.
    pub openssl_alt_names: &'static [&'static str],
    /// Additional names the local TLS runtime knows the suite by.
    pub runtime_alt_names: &'static [&'static str],
    pub kx: KeyExchange,
    pub au: Authentication,
    pub enc: Encryption,
    pub mac: MessageDigest,
    pub protocol: Protocol,
    pub export: bool,
    pub level: StrengthClass,
    pub fips: bool,
    /// Effective strength in bits; the ordering key for strength sorts.
    pub strength_bits: u16,
    /// Key material size of the bulk cipher in bits.
    pub alg_bits: u16,
}

impl CipherSuite {
    /// All names the local TLS runtime accepts for this suite, starting
    /// with the standard name.
    pub fn runtime_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        iter::once(self.name).chain(self.runtime_alt_names.iter().copied())
    }

    /// One-line rendering in the style of `openssl ciphers -v`.
    pub fn verbose(&self) -> String {
        let export = if self.export { " export" } else { "" };
        format!(
            "{:<30} {:<8} Kx={:<10} Au={:<6} Enc={}({}) Mac={}{}",
            self.openssl_name,
            self.protocol,
            self.kx,
            self.au,
            self.enc,
            self.alg_bits,
            self.mac,
            export,
        )
    }
}

impl PartialEq for CipherSuite {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for CipherSuite {}

impl Hash for CipherSuite {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.openssl_name.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use crate::catalog;

    #[test]
    fn runtime_names_start_with_standard_name() {
        for suite in catalog::suites() {
            assert_eq!(suite.runtime_names().next(), Some(suite.name));
        }
    }

    #[test]
    fn verbose_line_mentions_all_columns() {
        let suite = catalog::by_id(0x002F).unwrap();
        let line = suite.verbose();
        assert!(line.starts_with("AES128-SHA"));
        assert!(line.contains("Kx=RSA"));
        assert!(line.contains("Au=RSA"));
        assert!(line.contains("Enc=AES128(128)"));
        assert!(line.contains("Mac=SHA1"));
        assert!(!line.ends_with("export"));
    }

    #[test]
    fn export_suites_are_marked() {
        let suite = catalog::by_id(0x0003).unwrap();
        assert_eq!(suite.openssl_name, "EXP-RC4-MD5");
        assert!(suite.verbose().ends_with("export"));
    }
}
