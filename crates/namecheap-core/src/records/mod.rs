//! DNS record synthesis
//!
//! This module turns the static table of default records into a concrete,
//! per-domain record plan:
//!
//! - [`template`]: the immutable default record table
//! - [`substitute`]: `%key%` placeholder resolution
//! - [`rules`]: per-record inclusion policy
//! - [`plan`]: the builder tying it all together

pub mod template;
pub mod substitute;
pub mod rules;
pub mod plan;

pub use plan::{DnsPlan, DnsPlanRequest, ResolvedDnsRecord, build_dns_plan};
pub use template::{DEFAULT_RECORD_TEMPLATES, DnsRecordTemplate};

use serde::{Deserialize, Serialize};
use std::fmt;

/// DNS record type accepted by the registrar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Name server
    Ns,
    /// Mail exchanger
    Mx,
    /// Free-form text
    Txt,
    /// Canonical name
    Cname,
}

impl RecordType {
    /// Wire name of the record type
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Ns => "NS",
            RecordType::Mx => "MX",
            RecordType::Txt => "TXT",
            RecordType::Cname => "CNAME",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
