//! The static cipher suite catalog.
//!
//! Every known suite with its full attribute set, in catalog declaration
//! order. The order is load-bearing: the group index derives the master
//! preference order from it, so rows must not be rearranged.

use std::{collections::HashMap, sync::OnceLock};

use crate::suite::{
    Authentication, CipherSuite, Encryption, KeyExchange, MessageDigest, Protocol, StrengthClass,
};

macro_rules! opt_id {
    (-) => {
        None
    };
    ($id:literal) => {
        Some($id)
    };
}

macro_rules! name_list {
    ([]) => {
        &[]
    };
    ([$($name:literal),+]) => {
        &[$($name),+]
    };
}

macro_rules! catalog {
    ($({ $name:ident, $id:tt, $ossl:literal, $kx:ident, $au:ident, $enc:ident,
         $mac:ident, $proto:ident, $export:literal, $level:ident, $fips:literal,
         $strength:literal, $alg:literal, $runtime:tt, $legacy:tt }),* $(,)?) => {
        static SUITES: &[CipherSuite] = &[$(CipherSuite {
            id: opt_id!($id),
            name: stringify!($name),
            openssl_name: $ossl,
            openssl_alt_names: name_list!($legacy),
            runtime_alt_names: name_list!($runtime),
            kx: KeyExchange::$kx,
            au: Authentication::$au,
            enc: Encryption::$enc,
            mac: MessageDigest::$mac,
            protocol: Protocol::$proto,
            export: $export,
            level: StrengthClass::$level,
            fips: $fips,
            strength_bits: $strength,
            alg_bits: $alg,
        }),*];
    };
}

// Columns: name, id, canonical alias, kx, au, enc, mac, protocol, export,
// strength class, fips, strength bits, algorithm bits, runtime alternate
// names, legacy canonical aliases.
#[rustfmt::skip]
catalog! {
    { TLS_RSA_WITH_NULL_MD5, 0x0001, "NULL-MD5", Rsa, Rsa, Null, Md5, SSLv3, false, StrongNone, false, 0, 0, ["SSL_RSA_WITH_NULL_MD5"], [] },
    { TLS_RSA_WITH_NULL_SHA, 0x0002, "NULL-SHA", Rsa, Rsa, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, ["SSL_RSA_WITH_NULL_SHA"], [] },
    { TLS_RSA_EXPORT_WITH_RC4_40_MD5, 0x0003, "EXP-RC4-MD5", Rsa, Rsa, Rc4, Md5, SSLv3, true, Export40, false, 40, 128, ["SSL_RSA_EXPORT_WITH_RC4_40_MD5"], [] },
    { TLS_RSA_WITH_RC4_128_MD5, 0x0004, "RC4-MD5", Rsa, Rsa, Rc4, Md5, SSLv3, false, Medium, false, 128, 128, ["SSL_RSA_WITH_RC4_128_MD5"], [] },
    { TLS_RSA_WITH_RC4_128_SHA, 0x0005, "RC4-SHA", Rsa, Rsa, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, ["SSL_RSA_WITH_RC4_128_SHA"], [] },
    { TLS_RSA_EXPORT_WITH_RC2_CBC_40_MD5, 0x0006, "EXP-RC2-CBC-MD5", Rsa, Rsa, Rc2, Md5, SSLv3, true, Export40, false, 40, 128, ["SSL_RSA_EXPORT_WITH_RC2_CBC_40_MD5"], [] },
    { TLS_RSA_WITH_IDEA_CBC_SHA, 0x0007, "IDEA-CBC-SHA", Rsa, Rsa, Idea, Sha1, SSLv3, false, Medium, false, 128, 128, ["SSL_RSA_WITH_IDEA_CBC_SHA"], [] },
    { TLS_RSA_EXPORT_WITH_DES40_CBC_SHA, 0x0008, "EXP-DES-CBC-SHA", Rsa, Rsa, Des, Sha1, SSLv3, true, Export40, false, 40, 56, ["SSL_RSA_EXPORT_WITH_DES40_CBC_SHA"], [] },
    { TLS_RSA_WITH_DES_CBC_SHA, 0x0009, "DES-CBC-SHA", Rsa, Rsa, Des, Sha1, SSLv3, false, Low, false, 56, 56, ["SSL_RSA_WITH_DES_CBC_SHA"], [] },
    { TLS_RSA_WITH_3DES_EDE_CBC_SHA, 0x000A, "DES-CBC3-SHA", Rsa, Rsa, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, ["SSL_RSA_WITH_3DES_EDE_CBC_SHA"], [] },
    { TLS_DH_DSS_EXPORT_WITH_DES40_CBC_SHA, 0x000B, "EXP-DH-DSS-DES-CBC-SHA", DhDss, Dh, Des, Sha1, SSLv3, true, Export40, false, 40, 56, ["SSL_DH_DSS_EXPORT_WITH_DES40_CBC_SHA"], [] },
    { TLS_DH_DSS_WITH_DES_CBC_SHA, 0x000C, "DH-DSS-DES-CBC-SHA", DhDss, Dh, Des, Sha1, SSLv3, false, Low, false, 56, 56, ["SSL_DH_DSS_WITH_DES_CBC_SHA"], [] },
    { TLS_DH_DSS_WITH_3DES_EDE_CBC_SHA, 0x000D, "DH-DSS-DES-CBC3-SHA", DhDss, Dh, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, ["SSL_DH_DSS_WITH_3DES_EDE_CBC_SHA"], [] },
    { TLS_DH_RSA_EXPORT_WITH_DES40_CBC_SHA, 0x000E, "EXP-DH-RSA-DES-CBC-SHA", DhRsa, Dh, Des, Sha1, SSLv3, true, Export40, false, 40, 56, ["SSL_DH_RSA_EXPORT_WITH_DES40_CBC_SHA"], [] },
    { TLS_DH_RSA_WITH_DES_CBC_SHA, 0x000F, "DH-RSA-DES-CBC-SHA", DhRsa, Dh, Des, Sha1, SSLv3, false, Low, false, 56, 56, ["SSL_DH_RSA_WITH_DES_CBC_SHA"], [] },
    { TLS_DH_RSA_WITH_3DES_EDE_CBC_SHA, 0x0010, "DH-RSA-DES-CBC3-SHA", DhRsa, Dh, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, ["SSL_DH_RSA_WITH_3DES_EDE_CBC_SHA"], [] },
    { TLS_DHE_DSS_EXPORT_WITH_DES40_CBC_SHA, 0x0011, "EXP-DHE-DSS-DES-CBC-SHA", Dhe, Dss, Des, Sha1, SSLv3, true, Export40, false, 40, 56, ["SSL_DHE_DSS_EXPORT_WITH_DES40_CBC_SHA"], ["EXP-EDH-DSS-DES-CBC-SHA"] },
    { TLS_DHE_DSS_WITH_DES_CBC_SHA, 0x0012, "DHE-DSS-DES-CBC-SHA", Dhe, Dss, Des, Sha1, SSLv3, false, Low, false, 56, 56, ["SSL_DHE_DSS_WITH_DES_CBC_SHA"], ["EDH-DSS-DES-CBC-SHA"] },
    { TLS_DHE_DSS_WITH_3DES_EDE_CBC_SHA, 0x0013, "DHE-DSS-DES-CBC3-SHA", Dhe, Dss, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, ["SSL_DHE_DSS_WITH_3DES_EDE_CBC_SHA"], ["EDH-DSS-DES-CBC3-SHA"] },
    { TLS_DHE_RSA_EXPORT_WITH_DES40_CBC_SHA, 0x0014, "EXP-DHE-RSA-DES-CBC-SHA", Dhe, Rsa, Des, Sha1, SSLv3, true, Export40, false, 40, 56, ["SSL_DHE_RSA_EXPORT_WITH_DES40_CBC_SHA"], ["EXP-EDH-RSA-DES-CBC-SHA"] },
    { TLS_DHE_RSA_WITH_DES_CBC_SHA, 0x0015, "DHE-RSA-DES-CBC-SHA", Dhe, Rsa, Des, Sha1, SSLv3, false, Low, false, 56, 56, ["SSL_DHE_RSA_WITH_DES_CBC_SHA"], ["EDH-RSA-DES-CBC-SHA"] },
    { TLS_DHE_RSA_WITH_3DES_EDE_CBC_SHA, 0x0016, "DHE-RSA-DES-CBC3-SHA", Dhe, Rsa, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, ["SSL_DHE_RSA_WITH_3DES_EDE_CBC_SHA"], ["EDH-RSA-DES-CBC3-SHA"] },
    { TLS_DH_anon_EXPORT_WITH_RC4_40_MD5, 0x0017, "EXP-ADH-RC4-MD5", Dhe, Anon, Rc4, Md5, SSLv3, true, Export40, false, 40, 128, ["SSL_DH_anon_EXPORT_WITH_RC4_40_MD5"], [] },
    { TLS_DH_anon_WITH_RC4_128_MD5, 0x0018, "ADH-RC4-MD5", Dhe, Anon, Rc4, Md5, SSLv3, false, Medium, false, 128, 128, ["SSL_DH_anon_WITH_RC4_128_MD5"], [] },
    { TLS_DH_anon_EXPORT_WITH_DES40_CBC_SHA, 0x0019, "EXP-ADH-DES-CBC-SHA", Dhe, Anon, Des, Sha1, SSLv3, true, Export40, false, 40, 128, ["SSL_DH_anon_EXPORT_WITH_DES40_CBC_SHA"], [] },
    { TLS_DH_anon_WITH_DES_CBC_SHA, 0x001A, "ADH-DES-CBC-SHA", Dhe, Anon, Des, Sha1, SSLv3, false, Low, false, 56, 56, ["SSL_DH_anon_WITH_DES_CBC_SHA"], [] },
    { TLS_DH_anon_WITH_3DES_EDE_CBC_SHA, 0x001B, "ADH-DES-CBC3-SHA", Dhe, Anon, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, ["SSL_DH_anon_WITH_3DES_EDE_CBC_SHA"], [] },
    { TLS_PSK_WITH_NULL_SHA, 0x002C, "PSK-NULL-SHA", Psk, Psk, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_DHE_PSK_WITH_NULL_SHA, 0x002D, "DHE-PSK-NULL-SHA", DhePsk, Psk, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_RSA_PSK_WITH_NULL_SHA, 0x002E, "RSA-PSK-NULL-SHA", RsaPsk, Rsa, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_RSA_WITH_AES_128_CBC_SHA, 0x002F, "AES128-SHA", Rsa, Rsa, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_DH_DSS_WITH_AES_128_CBC_SHA, 0x0030, "DH-DSS-AES128-SHA", DhDss, Dh, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_DH_RSA_WITH_AES_128_CBC_SHA, 0x0031, "DH-RSA-AES128-SHA", DhRsa, Dh, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_DHE_DSS_WITH_AES_128_CBC_SHA, 0x0032, "DHE-DSS-AES128-SHA", Dhe, Dss, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_DHE_RSA_WITH_AES_128_CBC_SHA, 0x0033, "DHE-RSA-AES128-SHA", Dhe, Rsa, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_DH_anon_WITH_AES_128_CBC_SHA, 0x0034, "ADH-AES128-SHA", Dhe, Anon, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_RSA_WITH_AES_256_CBC_SHA, 0x0035, "AES256-SHA", Rsa, Rsa, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_DH_DSS_WITH_AES_256_CBC_SHA, 0x0036, "DH-DSS-AES256-SHA", DhDss, Dh, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_DH_RSA_WITH_AES_256_CBC_SHA, 0x0037, "DH-RSA-AES256-SHA", DhRsa, Dh, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_DHE_DSS_WITH_AES_256_CBC_SHA, 0x0038, "DHE-DSS-AES256-SHA", Dhe, Dss, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_AES_256_CBC_SHA, 0x0039, "DHE-RSA-AES256-SHA", Dhe, Rsa, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_DH_anon_WITH_AES_256_CBC_SHA, 0x003A, "ADH-AES256-SHA", Dhe, Anon, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_RSA_WITH_NULL_SHA256, 0x003B, "NULL-SHA256", Rsa, Rsa, Null, Sha256, TLSv1_2, false, StrongNone, true, 0, 0, [], [] },
    { TLS_RSA_WITH_AES_128_CBC_SHA256, 0x003C, "AES128-SHA256", Rsa, Rsa, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_RSA_WITH_AES_256_CBC_SHA256, 0x003D, "AES256-SHA256", Rsa, Rsa, Aes256, Sha256, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DH_DSS_WITH_AES_128_CBC_SHA256, 0x003E, "DH-DSS-AES128-SHA256", DhDss, Dh, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DH_RSA_WITH_AES_128_CBC_SHA256, 0x003F, "DH-RSA-AES128-SHA256", DhRsa, Dh, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DHE_DSS_WITH_AES_128_CBC_SHA256, 0x0040, "DHE-DSS-AES128-SHA256", Dhe, Dss, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_RSA_WITH_CAMELLIA_128_CBC_SHA, 0x0041, "CAMELLIA128-SHA", Rsa, Rsa, Camellia128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA, 0x0042, "DH-DSS-CAMELLIA128-SHA", DhDss, Dh, Camellia128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA, 0x0043, "DH-RSA-CAMELLIA128-SHA", DhRsa, Dh, Camellia128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA, 0x0044, "DHE-DSS-CAMELLIA128-SHA", Dhe, Dss, Camellia128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA, 0x0045, "DHE-RSA-CAMELLIA128-SHA", Dhe, Rsa, Camellia128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA, 0x0046, "ADH-CAMELLIA128-SHA", Dhe, Anon, Camellia128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_RSA_EXPORT1024_WITH_RC4_56_MD5, 0x0060, "EXP1024-RC4-MD5", Rsa, Rsa, Rc4, Md5, TLSv1, true, Export56, false, 56, 128, ["SSL_RSA_EXPORT1024_WITH_RC4_56_MD5"], [] },
    { TLS_RSA_EXPORT1024_WITH_RC2_CBC_56_MD5, 0x0061, "EXP1024-RC2-CBC-MD5", Rsa, Rsa, Rc2, Md5, TLSv1, true, Export56, false, 56, 128, ["SSL_RSA_EXPORT1024_WITH_RC2_CBC_56_MD5"], [] },
    { TLS_RSA_EXPORT1024_WITH_DES_CBC_SHA, 0x0062, "EXP1024-DES-CBC-SHA", Rsa, Rsa, Des, Sha1, TLSv1, true, Export56, false, 56, 56, ["SSL_RSA_EXPORT1024_WITH_DES_CBC_SHA"], [] },
    { TLS_DHE_DSS_EXPORT1024_WITH_DES_CBC_SHA, 0x0063, "EXP1024-DHE-DSS-DES-CBC-SHA", Dhe, Dss, Des, Sha1, TLSv1, true, Export56, false, 56, 56, ["SSL_DHE_DSS_EXPORT1024_WITH_DES_CBC_SHA"], [] },
    { TLS_RSA_EXPORT1024_WITH_RC4_56_SHA, 0x0064, "EXP1024-RC4-SHA", Rsa, Rsa, Rc4, Sha1, TLSv1, true, Export56, false, 56, 128, ["SSL_RSA_EXPORT1024_WITH_RC4_56_SHA"], [] },
    { TLS_DHE_DSS_EXPORT1024_WITH_RC4_56_SHA, 0x0065, "EXP1024-DHE-DSS-RC4-SHA", Dhe, Dss, Rc4, Sha1, TLSv1, true, Export56, false, 56, 128, ["SSL_DHE_DSS_EXPORT1024_WITH_RC4_56_SHA"], [] },
    { TLS_DHE_DSS_WITH_RC4_128_SHA, 0x0066, "DHE-DSS-RC4-SHA", Dhe, Dss, Rc4, Sha1, TLSv1, false, Medium, false, 128, 128, ["SSL_DHE_DSS_WITH_RC4_128_SHA"], [] },
    { TLS_DHE_RSA_WITH_AES_128_CBC_SHA256, 0x0067, "DHE-RSA-AES128-SHA256", Dhe, Rsa, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DH_DSS_WITH_AES_256_CBC_SHA256, 0x0068, "DH-DSS-AES256-SHA256", DhDss, Dh, Aes256, Sha256, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DH_RSA_WITH_AES_256_CBC_SHA256, 0x0069, "DH-RSA-AES256-SHA256", DhRsa, Dh, Aes256, Sha256, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DHE_DSS_WITH_AES_256_CBC_SHA256, 0x006A, "DHE-DSS-AES256-SHA256", Dhe, Dss, Aes256, Sha256, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_AES_256_CBC_SHA256, 0x006B, "DHE-RSA-AES256-SHA256", Dhe, Rsa, Aes256, Sha256, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DH_anon_WITH_AES_128_CBC_SHA256, 0x006C, "ADH-AES128-SHA256", Dhe, Anon, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DH_anon_WITH_AES_256_CBC_SHA256, 0x006D, "ADH-AES256-SHA256", Dhe, Anon, Aes256, Sha256, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_RSA_WITH_CAMELLIA_256_CBC_SHA, 0x0084, "CAMELLIA256-SHA", Rsa, Rsa, Camellia256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA, 0x0085, "DH-DSS-CAMELLIA256-SHA", DhDss, Dh, Camellia256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA, 0x0086, "DH-RSA-CAMELLIA256-SHA", DhRsa, Dh, Camellia256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA, 0x0087, "DHE-DSS-CAMELLIA256-SHA", Dhe, Dss, Camellia256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA, 0x0088, "DHE-RSA-CAMELLIA256-SHA", Dhe, Rsa, Camellia256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA, 0x0089, "ADH-CAMELLIA256-SHA", Dhe, Anon, Camellia256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_PSK_WITH_RC4_128_SHA, 0x008A, "PSK-RC4-SHA", Psk, Psk, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_PSK_WITH_3DES_EDE_CBC_SHA, 0x008B, "PSK-3DES-EDE-CBC-SHA", Psk, Psk, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_PSK_WITH_AES_128_CBC_SHA, 0x008C, "PSK-AES128-CBC-SHA", Psk, Psk, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_PSK_WITH_AES_256_CBC_SHA, 0x008D, "PSK-AES256-CBC-SHA", Psk, Psk, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_DHE_PSK_WITH_RC4_128_SHA, 0x008E, "DHE-PSK-RC4-SHA", DhePsk, Psk, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_DHE_PSK_WITH_3DES_EDE_CBC_SHA, 0x008F, "DHE-PSK-3DES-EDE-CBC-SHA", DhePsk, Psk, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_DHE_PSK_WITH_AES_128_CBC_SHA, 0x0090, "DHE-PSK-AES128-CBC-SHA", DhePsk, Psk, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_DHE_PSK_WITH_AES_256_CBC_SHA, 0x0091, "DHE-PSK-AES256-CBC-SHA", DhePsk, Psk, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_RSA_PSK_WITH_RC4_128_SHA, 0x0092, "RSA-PSK-RC4-SHA", RsaPsk, Rsa, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_RSA_PSK_WITH_3DES_EDE_CBC_SHA, 0x0093, "RSA-PSK-3DES-EDE-CBC-SHA", RsaPsk, Rsa, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_RSA_PSK_WITH_AES_128_CBC_SHA, 0x0094, "RSA-PSK-AES128-CBC-SHA", RsaPsk, Rsa, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_RSA_PSK_WITH_AES_256_CBC_SHA, 0x0095, "RSA-PSK-AES256-CBC-SHA", RsaPsk, Rsa, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_RSA_WITH_SEED_CBC_SHA, 0x0096, "SEED-SHA", Rsa, Rsa, Seed, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_DH_DSS_WITH_SEED_CBC_SHA, 0x0097, "DH-DSS-SEED-SHA", DhDss, Dh, Seed, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_DH_RSA_WITH_SEED_CBC_SHA, 0x0098, "DH-RSA-SEED-SHA", DhRsa, Dh, Seed, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_DHE_DSS_WITH_SEED_CBC_SHA, 0x0099, "DHE-DSS-SEED-SHA", Dhe, Dss, Seed, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_DHE_RSA_WITH_SEED_CBC_SHA, 0x009A, "DHE-RSA-SEED-SHA", Dhe, Rsa, Seed, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_DH_anon_WITH_SEED_CBC_SHA, 0x009B, "ADH-SEED-SHA", Dhe, Anon, Seed, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_RSA_WITH_AES_128_GCM_SHA256, 0x009C, "AES128-GCM-SHA256", Rsa, Rsa, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_RSA_WITH_AES_256_GCM_SHA384, 0x009D, "AES256-GCM-SHA384", Rsa, Rsa, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_AES_128_GCM_SHA256, 0x009E, "DHE-RSA-AES128-GCM-SHA256", Dhe, Rsa, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DHE_RSA_WITH_AES_256_GCM_SHA384, 0x009F, "DHE-RSA-AES256-GCM-SHA384", Dhe, Rsa, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DH_RSA_WITH_AES_128_GCM_SHA256, 0x00A0, "DH-RSA-AES128-GCM-SHA256", DhRsa, Dh, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DH_RSA_WITH_AES_256_GCM_SHA384, 0x00A1, "DH-RSA-AES256-GCM-SHA384", DhRsa, Dh, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DHE_DSS_WITH_AES_128_GCM_SHA256, 0x00A2, "DHE-DSS-AES128-GCM-SHA256", Dhe, Dss, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DHE_DSS_WITH_AES_256_GCM_SHA384, 0x00A3, "DHE-DSS-AES256-GCM-SHA384", Dhe, Dss, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DH_DSS_WITH_AES_128_GCM_SHA256, 0x00A4, "DH-DSS-AES128-GCM-SHA256", DhDss, Dh, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DH_DSS_WITH_AES_256_GCM_SHA384, 0x00A5, "DH-DSS-AES256-GCM-SHA384", DhDss, Dh, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DH_anon_WITH_AES_128_GCM_SHA256, 0x00A6, "ADH-AES128-GCM-SHA256", Dhe, Anon, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DH_anon_WITH_AES_256_GCM_SHA384, 0x00A7, "ADH-AES256-GCM-SHA384", Dhe, Anon, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_PSK_WITH_AES_128_GCM_SHA256, 0x00A8, "PSK-AES128-GCM-SHA256", Psk, Psk, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_PSK_WITH_AES_256_GCM_SHA384, 0x00A9, "PSK-AES256-GCM-SHA384", Psk, Psk, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DHE_PSK_WITH_AES_128_GCM_SHA256, 0x00AA, "DHE-PSK-AES128-GCM-SHA256", DhePsk, Psk, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_DHE_PSK_WITH_AES_256_GCM_SHA384, 0x00AB, "DHE-PSK-AES256-GCM-SHA384", DhePsk, Psk, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_RSA_PSK_WITH_AES_128_GCM_SHA256, 0x00AC, "RSA-PSK-AES128-GCM-SHA256", RsaPsk, Rsa, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_RSA_PSK_WITH_AES_256_GCM_SHA384, 0x00AD, "RSA-PSK-AES256-GCM-SHA384", RsaPsk, Rsa, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_DHE_PSK_WITH_AES_128_CBC_SHA256, 0x00B2, "DHE-PSK-AES128-CBC-SHA256", DhePsk, Psk, Aes128, Sha256, TLSv1, false, High, true, 128, 128, [], [] },
    { TLS_DHE_PSK_WITH_AES_256_CBC_SHA384, 0x00B3, "DHE-PSK-AES256-CBC-SHA384", DhePsk, Psk, Aes256, Sha384, TLSv1, false, High, true, 256, 256, [], [] },
    { TLS_RSA_PSK_WITH_AES_128_CBC_SHA256, 0x00B6, "RSA-PSK-AES128-CBC-SHA256", RsaPsk, Rsa, Aes128, Sha256, TLSv1, false, High, true, 128, 128, [], [] },
    { TLS_RSA_PSK_WITH_AES_256_CBC_SHA384, 0x00B7, "RSA-PSK-AES256-CBC-SHA384", RsaPsk, Rsa, Aes256, Sha384, TLSv1, false, High, true, 256, 256, [], [] },
    { TLS_RSA_WITH_CAMELLIA_128_CBC_SHA256, 0x00BA, "CAMELLIA128-SHA256", Rsa, Rsa, Camellia128, Sha256, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DH_DSS_WITH_CAMELLIA_128_CBC_SHA256, 0x00BB, "DH-DSS-CAMELLIA128-SHA256", DhDss, Dh, Camellia128, Sha256, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DH_RSA_WITH_CAMELLIA_128_CBC_SHA256, 0x00BC, "DH-RSA-CAMELLIA128-SHA256", DhRsa, Dh, Camellia128, Sha256, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DHE_DSS_WITH_CAMELLIA_128_CBC_SHA256, 0x00BD, "DHE-DSS-CAMELLIA128-SHA256", Dhe, Dss, Camellia128, Sha256, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DHE_RSA_WITH_CAMELLIA_128_CBC_SHA256, 0x00BE, "DHE-RSA-CAMELLIA128-SHA256", Dhe, Rsa, Camellia128, Sha256, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DH_anon_WITH_CAMELLIA_128_CBC_SHA256, 0x00BF, "ADH-CAMELLIA128-SHA256", Dhe, Anon, Camellia128, Sha256, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_RSA_WITH_CAMELLIA_256_CBC_SHA256, 0x00C0, "CAMELLIA256-SHA256", Rsa, Rsa, Camellia256, Sha256, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DH_DSS_WITH_CAMELLIA_256_CBC_SHA256, 0x00C1, "DH-DSS-CAMELLIA256-SHA256", DhDss, Dh, Camellia256, Sha256, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DH_RSA_WITH_CAMELLIA_256_CBC_SHA256, 0x00C2, "DH-RSA-CAMELLIA256-SHA256", DhRsa, Dh, Camellia256, Sha256, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DHE_DSS_WITH_CAMELLIA_256_CBC_SHA256, 0x00C3, "DHE-DSS-CAMELLIA256-SHA256", Dhe, Dss, Camellia256, Sha256, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_CAMELLIA_256_CBC_SHA256, 0x00C4, "DHE-RSA-CAMELLIA256-SHA256", Dhe, Rsa, Camellia256, Sha256, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DH_anon_WITH_CAMELLIA_256_CBC_SHA256, 0x00C5, "ADH-CAMELLIA256-SHA256", Dhe, Anon, Camellia256, Sha256, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_ECDH_ECDSA_WITH_NULL_SHA, 0xC001, "ECDH-ECDSA-NULL-SHA", EcdhEcdsa, Ecdh, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDH_ECDSA_WITH_RC4_128_SHA, 0xC002, "ECDH-ECDSA-RC4-SHA", EcdhEcdsa, Ecdh, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_ECDH_ECDSA_WITH_3DES_EDE_CBC_SHA, 0xC003, "ECDH-ECDSA-DES-CBC3-SHA", EcdhEcdsa, Ecdh, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA, 0xC004, "ECDH-ECDSA-AES128-SHA", EcdhEcdsa, Ecdh, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA, 0xC005, "ECDH-ECDSA-AES256-SHA", EcdhEcdsa, Ecdh, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_ECDSA_WITH_NULL_SHA, 0xC006, "ECDHE-ECDSA-NULL-SHA", Ecdhe, Ecdsa, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDHE_ECDSA_WITH_RC4_128_SHA, 0xC007, "ECDHE-ECDSA-RC4-SHA", Ecdhe, Ecdsa, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_ECDHE_ECDSA_WITH_3DES_EDE_CBC_SHA, 0xC008, "ECDHE-ECDSA-DES-CBC3-SHA", Ecdhe, Ecdsa, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA, 0xC009, "ECDHE-ECDSA-AES128-SHA", Ecdhe, Ecdsa, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA, 0xC00A, "ECDHE-ECDSA-AES256-SHA", Ecdhe, Ecdsa, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_RSA_WITH_NULL_SHA, 0xC00B, "ECDH-RSA-NULL-SHA", EcdhRsa, Ecdh, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDH_RSA_WITH_RC4_128_SHA, 0xC00C, "ECDH-RSA-RC4-SHA", EcdhRsa, Ecdh, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_ECDH_RSA_WITH_3DES_EDE_CBC_SHA, 0xC00D, "ECDH-RSA-DES-CBC3-SHA", EcdhRsa, Ecdh, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_ECDH_RSA_WITH_AES_128_CBC_SHA, 0xC00E, "ECDH-RSA-AES128-SHA", EcdhRsa, Ecdh, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_RSA_WITH_AES_256_CBC_SHA, 0xC00F, "ECDH-RSA-AES256-SHA", EcdhRsa, Ecdh, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_RSA_WITH_NULL_SHA, 0xC010, "ECDHE-RSA-NULL-SHA", Ecdhe, Rsa, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDHE_RSA_WITH_RC4_128_SHA, 0xC011, "ECDHE-RSA-RC4-SHA", Ecdhe, Rsa, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_ECDHE_RSA_WITH_3DES_EDE_CBC_SHA, 0xC012, "ECDHE-RSA-DES-CBC3-SHA", Ecdhe, Rsa, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA, 0xC013, "ECDHE-RSA-AES128-SHA", Ecdhe, Rsa, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA, 0xC014, "ECDHE-RSA-AES256-SHA", Ecdhe, Rsa, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_anon_WITH_NULL_SHA, 0xC015, "AECDH-NULL-SHA", Ecdhe, Anon, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDH_anon_WITH_RC4_128_SHA, 0xC016, "AECDH-RC4-SHA", Ecdhe, Anon, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_ECDH_anon_WITH_3DES_EDE_CBC_SHA, 0xC017, "AECDH-DES-CBC3-SHA", Ecdhe, Anon, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_ECDH_anon_WITH_AES_128_CBC_SHA, 0xC018, "AECDH-AES128-SHA", Ecdhe, Anon, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_anon_WITH_AES_256_CBC_SHA, 0xC019, "AECDH-AES256-SHA", Ecdhe, Anon, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA, 0xC01A, "SRP-3DES-EDE-CBC-SHA", Srp, Srp, TripleDes, Sha1, SSLv3, false, High, false, 112, 168, [], [] },
    { TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA, 0xC01B, "SRP-RSA-3DES-EDE-CBC-SHA", Srp, Rsa, TripleDes, Sha1, SSLv3, false, High, false, 112, 168, [], [] },
    { TLS_SRP_SHA_DSS_WITH_3DES_EDE_CBC_SHA, 0xC01C, "SRP-DSS-3DES-EDE-CBC-SHA", Srp, Dss, TripleDes, Sha1, SSLv3, false, High, false, 112, 168, [], [] },
    { TLS_SRP_SHA_WITH_AES_128_CBC_SHA, 0xC01D, "SRP-AES-128-CBC-SHA", Srp, Srp, Aes128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA, 0xC01E, "SRP-RSA-AES-128-CBC-SHA", Srp, Rsa, Aes128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_SRP_SHA_DSS_WITH_AES_128_CBC_SHA, 0xC01F, "SRP-DSS-AES-128-CBC-SHA", Srp, Dss, Aes128, Sha1, SSLv3, false, High, false, 128, 128, [], [] },
    { TLS_SRP_SHA_WITH_AES_256_CBC_SHA, 0xC020, "SRP-AES-256-CBC-SHA", Srp, Srp, Aes256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA, 0xC021, "SRP-RSA-AES-256-CBC-SHA", Srp, Rsa, Aes256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_SRP_SHA_DSS_WITH_AES_256_CBC_SHA, 0xC022, "SRP-DSS-AES-256-CBC-SHA", Srp, Dss, Aes256, Sha1, SSLv3, false, High, false, 256, 256, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256, 0xC023, "ECDHE-ECDSA-AES128-SHA256", Ecdhe, Ecdsa, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384, 0xC024, "ECDHE-ECDSA-AES256-SHA384", Ecdhe, Ecdsa, Aes256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_ECDSA_WITH_AES_128_CBC_SHA256, 0xC025, "ECDH-ECDSA-AES128-SHA256", EcdhEcdsa, Ecdh, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_ECDSA_WITH_AES_256_CBC_SHA384, 0xC026, "ECDH-ECDSA-AES256-SHA384", EcdhEcdsa, Ecdh, Aes256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256, 0xC027, "ECDHE-RSA-AES128-SHA256", Ecdhe, Rsa, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384, 0xC028, "ECDHE-RSA-AES256-SHA384", Ecdhe, Rsa, Aes256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_RSA_WITH_AES_128_CBC_SHA256, 0xC029, "ECDH-RSA-AES128-SHA256", EcdhRsa, Ecdh, Aes128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_RSA_WITH_AES_256_CBC_SHA384, 0xC02A, "ECDH-RSA-AES256-SHA384", EcdhRsa, Ecdh, Aes256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256, 0xC02B, "ECDHE-ECDSA-AES128-GCM-SHA256", Ecdhe, Ecdsa, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384, 0xC02C, "ECDHE-ECDSA-AES256-GCM-SHA384", Ecdhe, Ecdsa, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256, 0xC02D, "ECDH-ECDSA-AES128-GCM-SHA256", EcdhEcdsa, Ecdh, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384, 0xC02E, "ECDH-ECDSA-AES256-GCM-SHA384", EcdhEcdsa, Ecdh, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, 0xC02F, "ECDHE-RSA-AES128-GCM-SHA256", Ecdhe, Rsa, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384, 0xC030, "ECDHE-RSA-AES256-GCM-SHA384", Ecdhe, Rsa, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256, 0xC031, "ECDH-RSA-AES128-GCM-SHA256", EcdhRsa, Ecdh, Aes128Gcm, Aead, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384, 0xC032, "ECDH-RSA-AES256-GCM-SHA384", EcdhRsa, Ecdh, Aes256Gcm, Aead, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_PSK_WITH_RC4_128_SHA, 0xC033, "ECDHE-PSK-RC4-SHA", EcdhePsk, Psk, Rc4, Sha1, SSLv3, false, Medium, false, 128, 128, [], [] },
    { TLS_ECDHE_PSK_WITH_3DES_EDE_CBC_SHA, 0xC034, "ECDHE-PSK-3DES-EDE-CBC-SHA", EcdhePsk, Psk, TripleDes, Sha1, SSLv3, false, High, true, 112, 168, [], [] },
    { TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA, 0xC035, "ECDHE-PSK-AES128-CBC-SHA", EcdhePsk, Psk, Aes128, Sha1, SSLv3, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA, 0xC036, "ECDHE-PSK-AES256-CBC-SHA", EcdhePsk, Psk, Aes256, Sha1, SSLv3, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_PSK_WITH_AES_128_CBC_SHA256, 0xC037, "ECDHE-PSK-AES128-CBC-SHA256", EcdhePsk, Psk, Aes128, Sha256, TLSv1, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384, 0xC038, "ECDHE-PSK-AES256-CBC-SHA384", EcdhePsk, Psk, Aes256, Sha384, TLSv1, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_PSK_WITH_NULL_SHA, 0xC039, "ECDHE-PSK-NULL-SHA", EcdhePsk, Psk, Null, Sha1, SSLv3, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDHE_PSK_WITH_NULL_SHA256, 0xC03A, "ECDHE-PSK-NULL-SHA256", EcdhePsk, Psk, Null, Sha256, TLSv1, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDHE_PSK_WITH_NULL_SHA384, 0xC03B, "ECDHE-PSK-NULL-SHA384", EcdhePsk, Psk, Null, Sha384, TLSv1, false, StrongNone, true, 0, 0, [], [] },
    { TLS_ECDHE_ECDSA_WITH_CAMELLIA_128_CBC_SHA256, 0xC072, "ECDHE-ECDSA-CAMELLIA128-SHA256", Ecdhe, Ecdsa, Camellia128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_ECDSA_WITH_CAMELLIA_256_CBC_SHA384, 0xC073, "ECDHE-ECDSA-CAMELLIA256-SHA384", Ecdhe, Ecdsa, Camellia256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_ECDSA_WITH_CAMELLIA_128_CBC_SHA256, 0xC074, "ECDH-ECDSA-CAMELLIA128-SHA256", EcdhEcdsa, Ecdh, Camellia128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_ECDSA_WITH_CAMELLIA_256_CBC_SHA384, 0xC075, "ECDH-ECDSA-CAMELLIA256-SHA384", EcdhEcdsa, Ecdh, Camellia256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDHE_RSA_WITH_CAMELLIA_128_CBC_SHA256, 0xC076, "ECDHE-RSA-CAMELLIA128-SHA256", Ecdhe, Rsa, Camellia128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDHE_RSA_WITH_CAMELLIA_256_CBC_SHA384, 0xC077, "ECDHE-RSA-CAMELLIA256-SHA384", Ecdhe, Rsa, Camellia256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_ECDH_RSA_WITH_CAMELLIA_128_CBC_SHA256, 0xC078, "ECDH-RSA-CAMELLIA128-SHA256", EcdhRsa, Ecdh, Camellia128, Sha256, TLSv1_2, false, High, true, 128, 128, [], [] },
    { TLS_ECDH_RSA_WITH_CAMELLIA_256_CBC_SHA384, 0xC079, "ECDH-RSA-CAMELLIA256-SHA384", EcdhRsa, Ecdh, Camellia256, Sha384, TLSv1_2, false, High, true, 256, 256, [], [] },
    { TLS_PSK_WITH_CAMELLIA_128_CBC_SHA256, 0xC094, "PSK-CAMELLIA128-SHA256", Psk, Psk, Camellia128, Sha256, TLSv1, false, High, false, 128, 128, [], [] },
    { TLS_PSK_WITH_CAMELLIA_256_CBC_SHA384, 0xC095, "PSK-CAMELLIA256-SHA384", Psk, Psk, Camellia256, Sha384, TLSv1, false, High, false, 256, 256, [], [] },
    { TLS_DHE_PSK_WITH_CAMELLIA_128_CBC_SHA256, 0xC096, "DHE-PSK-CAMELLIA128-SHA256", DhePsk, Psk, Camellia128, Sha256, TLSv1, false, High, false, 128, 128, [], [] },
    { TLS_DHE_PSK_WITH_CAMELLIA_256_CBC_SHA384, 0xC097, "DHE-PSK-CAMELLIA256-SHA384", DhePsk, Psk, Camellia256, Sha384, TLSv1, false, High, false, 256, 256, [], [] },
    { TLS_RSA_PSK_WITH_CAMELLIA_128_CBC_SHA256, 0xC098, "RSA-PSK-CAMELLIA128-SHA256", RsaPsk, Rsa, Camellia128, Sha256, TLSv1, false, High, false, 128, 128, [], [] },
    { TLS_RSA_PSK_WITH_CAMELLIA_256_CBC_SHA384, 0xC099, "RSA-PSK-CAMELLIA256-SHA384", RsaPsk, Rsa, Camellia256, Sha384, TLSv1, false, High, false, 256, 256, [], [] },
    { TLS_ECDHE_PSK_WITH_CAMELLIA_128_CBC_SHA256, 0xC09A, "ECDHE-PSK-CAMELLIA128-SHA256", EcdhePsk, Psk, Camellia128, Sha256, TLSv1, false, High, false, 128, 128, [], [] },
    { TLS_ECDHE_PSK_WITH_CAMELLIA_256_CBC_SHA384, 0xC09B, "ECDHE-PSK-CAMELLIA256-SHA384", EcdhePsk, Psk, Camellia256, Sha384, TLSv1, false, High, false, 256, 256, [], [] },
    { TLS_RSA_WITH_AES_128_CCM, 0xC09C, "AES128-CCM", Rsa, Rsa, Aes128Ccm, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_RSA_WITH_AES_256_CCM, 0xC09D, "AES256-CCM", Rsa, Rsa, Aes256Ccm, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_AES_128_CCM, 0xC09E, "DHE-RSA-AES128-CCM", Dhe, Rsa, Aes128Ccm, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DHE_RSA_WITH_AES_256_CCM, 0xC09F, "DHE-RSA-AES256-CCM", Dhe, Rsa, Aes256Ccm, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_RSA_WITH_AES_128_CCM_8, 0xC0A0, "AES128-CCM8", Rsa, Rsa, Aes128Ccm8, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_RSA_WITH_AES_256_CCM_8, 0xC0A1, "AES256-CCM8", Rsa, Rsa, Aes256Ccm8, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_AES_128_CCM_8, 0xC0A2, "DHE-RSA-AES128-CCM8", Dhe, Rsa, Aes128Ccm8, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DHE_RSA_WITH_AES_256_CCM_8, 0xC0A3, "DHE-RSA-AES256-CCM8", Dhe, Rsa, Aes256Ccm8, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_PSK_WITH_AES_128_CCM, 0xC0A4, "PSK-AES128-CCM", Psk, Psk, Aes128Ccm, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_PSK_WITH_AES_256_CCM, 0xC0A5, "PSK-AES256-CCM", Psk, Psk, Aes256Ccm, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DHE_PSK_WITH_AES_128_CCM, 0xC0A6, "DHE-PSK-AES128-CCM", DhePsk, Psk, Aes128Ccm, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_DHE_PSK_WITH_AES_256_CCM, 0xC0A7, "DHE-PSK-AES256-CCM", DhePsk, Psk, Aes256Ccm, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_PSK_WITH_AES_128_CCM_8, 0xC0A8, "PSK-AES128-CCM8", Psk, Psk, Aes128Ccm8, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_PSK_WITH_AES_256_CCM_8, 0xC0A9, "PSK-AES256-CCM8", Psk, Psk, Aes256Ccm8, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_PSK_DHE_WITH_AES_128_CCM_8, 0xC0AA, "DHE-PSK-AES128-CCM8", DhePsk, Psk, Aes128Ccm8, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_PSK_DHE_WITH_AES_256_CCM_8, 0xC0AB, "DHE-PSK-AES256-CCM8", DhePsk, Psk, Aes256Ccm8, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_128_CCM, 0xC0AC, "ECDHE-ECDSA-AES128-CCM", Ecdhe, Ecdsa, Aes128Ccm, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_256_CCM, 0xC0AD, "ECDHE-ECDSA-AES256-CCM", Ecdhe, Ecdsa, Aes256Ccm, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_128_CCM_8, 0xC0AE, "ECDHE-ECDSA-AES128-CCM8", Ecdhe, Ecdsa, Aes128Ccm8, Aead, TLSv1_2, false, High, false, 128, 128, [], [] },
    { TLS_ECDHE_ECDSA_WITH_AES_256_CCM_8, 0xC0AF, "ECDHE-ECDSA-AES256-CCM8", Ecdhe, Ecdsa, Aes256Ccm8, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256, 0xCCA8, "ECDHE-RSA-CHACHA20-POLY1305", Ecdhe, Rsa, ChaCha20Poly1305, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256, 0xCCA9, "ECDHE-ECDSA-CHACHA20-POLY1305", Ecdhe, Ecdsa, ChaCha20Poly1305, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DHE_RSA_WITH_CHACHA20_POLY1305_SHA256, 0xCCAA, "DHE-RSA-CHACHA20-POLY1305", Dhe, Rsa, ChaCha20Poly1305, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_PSK_WITH_CHACHA20_POLY1305_SHA256, 0xCCAB, "PSK-CHACHA20-POLY1305", Psk, Psk, ChaCha20Poly1305, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_ECDHE_PSK_WITH_CHACHA20_POLY1305_SHA256, 0xCCAC, "ECDHE-PSK-CHACHA20-POLY1305", EcdhePsk, Psk, ChaCha20Poly1305, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_DHE_PSK_WITH_CHACHA20_POLY1305_SHA256, 0xCCAD, "DHE-PSK-CHACHA20-POLY1305", DhePsk, Psk, ChaCha20Poly1305, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { TLS_RSA_PSK_WITH_CHACHA20_POLY1305_SHA256, 0xCCAE, "RSA-PSK-CHACHA20-POLY1305", RsaPsk, Rsa, ChaCha20Poly1305, Aead, TLSv1_2, false, High, false, 256, 256, [], [] },
    { SSL_CK_RC4_128_WITH_MD5, -, "RC4-MD5", Rsa, Rsa, Rc4, Md5, SSLv2, false, Medium, false, 128, 128, [], [] },
    { SSL2_RC4_128_EXPORT40_WITH_MD5, -, "EXP-RC4-MD5", Rsa, Rsa, Rc4, Md5, SSLv2, true, Export40, false, 40, 128, ["SSL_RC4_128_EXPORT40_WITH_MD5"], [] },
    { SSL_CK_RC2_128_CBC_WITH_MD5, -, "RC2-CBC-MD5", Rsa, Rsa, Rc2, Md5, SSLv2, false, Medium, false, 128, 128, [], [] },
    { SSL_CK_RC2_128_CBC_EXPORT40_WITH_MD5, -, "EXP-RC2-CBC-MD5", Rsa, Rsa, Rc2, Md5, SSLv2, true, Export40, false, 40, 128, [], [] },
    { SSL2_IDEA_128_CBC_WITH_MD5, -, "IDEA-CBC-MD5", Rsa, Rsa, Idea, Md5, SSLv2, false, Medium, false, 128, 128, ["SSL_CK_IDEA_128_CBC_WITH_MD5"], [] },
    { SSL2_DES_64_CBC_WITH_MD5, -, "DES-CBC-MD5", Rsa, Rsa, Des, Md5, SSLv2, false, Low, false, 56, 56, ["SSL_CK_DES_64_CBC_WITH_MD5"], [] },
    { SSL2_DES_192_EDE3_CBC_WITH_MD5, -, "DES-CBC3-MD5", Rsa, Rsa, TripleDes, Md5, SSLv2, false, High, false, 112, 168, ["SSL_CK_DES_192_EDE3_CBC_WITH_MD5"], [] },
}

/// The full catalog in declaration order.
pub fn suites() -> &'static [CipherSuite] {
    SUITES
}

/// Looks up a suite by its registry id. Suites without an id cannot be
/// found this way.
pub fn by_id(id: u16) -> Option<&'static CipherSuite> {
    static BY_ID: OnceLock<HashMap<u16, &'static CipherSuite>> = OnceLock::new();
    let map = BY_ID.get_or_init(|| {
        let mut map = HashMap::new();
        for suite in SUITES {
            if let Some(id) = suite.id {
                map.insert(id, suite);
            }
        }
        map
    });
    map.get(&id).copied()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for suite in suites() {
            assert!(seen.insert(suite.name), "duplicate name {}", suite.name);
        }
        assert_eq!(seen.len(), 235);
    }

    #[test]
    fn ids_are_unique_where_present() {
        let mut seen = HashSet::new();
        for suite in suites() {
            if let Some(id) = suite.id {
                assert!(seen.insert(id), "duplicate id {id:#06x}");
            }
        }
        assert_eq!(seen.len(), 228);
    }

    #[test]
    fn id_lookup_round_trips() {
        for suite in suites() {
            if let Some(id) = suite.id {
                assert_eq!(by_id(id), Some(suite));
            }
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(by_id(0xFFFE), None);
    }

    #[test]
    fn only_legacy_protocol_suites_lack_ids() {
        for suite in suites() {
            if suite.id.is_none() {
                assert_eq!(suite.protocol, Protocol::SSLv2, "{}", suite.name);
            }
        }
    }

    #[test]
    fn well_known_rows() {
        let aes = by_id(0x002F).unwrap();
        assert_eq!(aes.name, "TLS_RSA_WITH_AES_128_CBC_SHA");
        assert_eq!(aes.openssl_name, "AES128-SHA");
        assert_eq!(aes.enc, Encryption::Aes128);

        let gcm = by_id(0xC02B).unwrap();
        assert_eq!(gcm.name, "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256");
        assert_eq!(gcm.kx, KeyExchange::Ecdhe);
        assert_eq!(gcm.mac, MessageDigest::Aead);
        assert_eq!(gcm.protocol, Protocol::TLSv1_2);
    }
}
