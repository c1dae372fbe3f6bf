//! Translation between suite lists and the names a TLS runtime uses.

use tracing::debug;

use crate::{registry, suite::CipherSuite};

/// Expands an ordered suite list into runtime names, standard name
/// first, then any legacy provider spellings. Order follows the input
/// list.
pub(crate) fn runtime_names<I>(suites: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'static CipherSuite>,
{
    let names: Vec<_> = suites
        .into_iter()
        .flat_map(CipherSuite::runtime_names)
        .collect();
    let effective = names.join(",");
    debug!("effective cipher list: {effective}");
    names
}

/// Maps any runtime name back to the suite's canonical alias.
pub(crate) fn canonical(runtime_name: &str) -> Option<&'static str> {
    registry::registry().canonical(runtime_name)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::catalog;

    #[test]
    fn expansion_keeps_order_and_legacy_spellings() {
        let null_md5 = catalog::by_id(0x0001).unwrap();
        let aes128_sha = catalog::by_id(0x002F).unwrap();
        assert_eq!(
            runtime_names([null_md5, aes128_sha]),
            [
                "TLS_RSA_WITH_NULL_MD5",
                "SSL_RSA_WITH_NULL_MD5",
                "TLS_RSA_WITH_AES_128_CBC_SHA",
            ]
        );
    }

    #[test]
    fn canonical_accepts_any_runtime_spelling() {
        assert_eq!(canonical("TLS_RSA_WITH_NULL_MD5"), Some("NULL-MD5"));
        assert_eq!(canonical("SSL_RSA_WITH_NULL_MD5"), Some("NULL-MD5"));
        assert_eq!(canonical("NULL-MD5"), None);
    }
}
