//! Registrar command encoding
//!
//! A command is a name plus an ordered list of query parameters. Encoders in
//! this module are pure: no I/O, same input, same output.

pub mod set_hosts;
pub mod create_domain;

pub use create_domain::{Contact, ContactType, CreateDomainRequest, encode_create_domain};
pub use set_hosts::encode_set_hosts;

/// Command name for domain registration
pub const CMD_CREATE: &str = "namecheap.domains.create";

/// Command name for host record replacement
pub const CMD_SET_HOSTS: &str = "namecheap.domains.dns.setHosts";

/// A registrar command with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCommand {
    name: String,
    params: Vec<(String, String)>,
}

impl ApiCommand {
    /// Create a command without parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter in place
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    /// Command name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in insertion order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up the first value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render `name&Key=value&...`, values percent-encoded
    ///
    /// Carries no credentials, so it is safe to log.
    pub fn encode(&self) -> String {
        let mut out = self.name.clone();
        for (key, value) in &self.params {
            out.push('&');
            out.push_str(key);
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }
}

/// Render a registrar yes/no flag
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
