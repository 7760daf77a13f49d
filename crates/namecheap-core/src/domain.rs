//! Domain name splitting
//!
//! The registrar addresses a domain as `SLD` + `TLD`, where the SLD is the
//! first label and the TLD is everything after the first dot. This is not a
//! public-suffix split: `example.co.uk` becomes `example` + `co.uk`.

use serde::Serialize;

use crate::error::{Error, Result};

/// A domain split at its first dot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainParts {
    /// First label
    pub sld: String,
    /// Everything after the first dot
    pub tld: String,
}

impl DomainParts {
    /// Split `domain` on its first dot.
    ///
    /// Fails with [`Error::InvalidDomain`] when the domain has no dot or
    /// either side of the dot is empty.
    pub fn split(domain: &str) -> Result<Self> {
        let domain = domain.trim();

        let (sld, tld) = domain
            .split_once('.')
            .ok_or_else(|| Error::invalid_domain(format!("'{}' contains no dot", domain)))?;

        if sld.is_empty() {
            return Err(Error::invalid_domain(format!(
                "'{}' has an empty second-level label",
                domain
            )));
        }
        if tld.is_empty() {
            return Err(Error::invalid_domain(format!(
                "'{}' has an empty top-level part",
                domain
            )));
        }

        Ok(Self {
            sld: sld.to_string(),
            tld: tld.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_first_dot() {
        let parts = DomainParts::split("example.com").unwrap();
        assert_eq!(parts.sld, "example");
        assert_eq!(parts.tld, "com");

        let parts = DomainParts::split("example.co.uk").unwrap();
        assert_eq!(parts.sld, "example");
        assert_eq!(parts.tld, "co.uk");
    }

    #[test]
    fn test_split_trims_whitespace() {
        let parts = DomainParts::split("  example.org\n").unwrap();
        assert_eq!(parts.sld, "example");
        assert_eq!(parts.tld, "org");
    }

    #[test]
    fn test_split_rejects_malformed() {
        for domain in ["localhost", "", ".com", "example."] {
            let err = DomainParts::split(domain).unwrap_err();
            assert!(matches!(err, Error::InvalidDomain(_)), "{:?}", domain);
        }
    }
}
