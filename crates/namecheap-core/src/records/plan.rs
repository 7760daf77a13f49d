// # DNS Plan Builder
//
// Expands the default record table into the concrete, ordered record set
// submitted for one domain.
//
// ## Usage
//
// ```rust
// use namecheap_core::records::{DnsPlanRequest, build_dns_plan};
//
// let request = DnsPlanRequest::new("example.com", "1.2.3.4")
//     .with_hostname("mail.example.com")
//     .with_include_ns(true);
// let plan = build_dns_plan(&request).unwrap();
// assert_eq!(plan.domain.sld, "example");
// ```
//
// The builder reads only its request and the immutable template table, so
// concurrent calls never interfere.

use serde::{Deserialize, Serialize};

use super::RecordType;
use super::rules::{InclusionFlags, classify};
use super::substitute::Substitutions;
use super::template::{DEFAULT_RECORD_TEMPLATES, DnsRecordTemplate};
use crate::domain::DomainParts;
use crate::error::{Error, Result};

/// MX preference assigned to the mail exchanger
pub const MX_PREFERENCE: u16 = 10;

/// Email type marker attached to MX records
pub const MX_EMAIL_TYPE: &str = "MX";

/// Inputs for one plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsPlanRequest {
    /// Managed domain (e.g. `example.com`)
    pub domain: String,

    /// IPv4 address of the server
    pub ipv4: String,

    /// IPv6 address, empty when the server has none
    #[serde(default)]
    pub ipv6: String,

    /// Mail/panel host name, empty when unknown
    #[serde(default)]
    pub hostname: String,

    /// ACME DNS-01 challenge token, empty when not issuing
    #[serde(default)]
    pub acme_challenge: String,

    /// Publish NS records and nameserver glue
    #[serde(default)]
    pub include_ns: bool,

    /// Publish the DMARC policy record
    #[serde(default = "default_include_dmarc")]
    pub include_dmarc: bool,

    /// Only publish the ACME challenge record
    #[serde(default)]
    pub only_acme: bool,
}

fn default_include_dmarc() -> bool {
    true
}

impl DnsPlanRequest {
    /// Create a request with the default flags: no NS, DMARC on, full plan
    pub fn new(domain: impl Into<String>, ipv4: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ipv4: ipv4.into(),
            ipv6: String::new(),
            hostname: String::new(),
            acme_challenge: String::new(),
            include_ns: false,
            include_dmarc: default_include_dmarc(),
            only_acme: false,
        }
    }

    /// Set the IPv6 address
    pub fn with_ipv6(mut self, ipv6: impl Into<String>) -> Self {
        self.ipv6 = ipv6.into();
        self
    }

    /// Set the hostname
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Set the ACME challenge token
    pub fn with_acme_challenge(mut self, token: impl Into<String>) -> Self {
        self.acme_challenge = token.into();
        self
    }

    /// Enable or disable NS records
    pub fn with_include_ns(mut self, include_ns: bool) -> Self {
        self.include_ns = include_ns;
        self
    }

    /// Enable or disable the DMARC record
    pub fn with_include_dmarc(mut self, include_dmarc: bool) -> Self {
        self.include_dmarc = include_dmarc;
        self
    }

    /// Restrict the plan to the ACME challenge record
    pub fn with_only_acme(mut self, only_acme: bool) -> Self {
        self.only_acme = only_acme;
        self
    }

    fn flags(&self) -> InclusionFlags {
        InclusionFlags {
            has_ipv6: !self.ipv6.is_empty(),
            has_hostname: !self.hostname.is_empty(),
            has_acme_challenge: !self.acme_challenge.is_empty(),
            include_ns: self.include_ns,
            include_dmarc: self.include_dmarc,
            only_acme: self.only_acme,
        }
    }
}

/// A template resolved against one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDnsRecord {
    /// 1-based position among the included records
    pub index: usize,
    /// Subdomain label (`@`, `ftp.`, ...)
    pub label: String,
    /// Fully qualified host
    pub host: String,
    /// Record type
    pub record_type: RecordType,
    /// Resolved value
    pub value: String,
    /// MX preference, MX records only
    pub mx_preference: Option<u16>,
    /// Email type marker, MX records only
    pub email_type: Option<&'static str>,
}

/// The concrete record set for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsPlan {
    /// SLD/TLD split of the domain
    pub domain: DomainParts,
    /// Included records, densely indexed from 1
    pub records: Vec<ResolvedDnsRecord>,
}

impl DnsPlan {
    /// Number of included records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the plan submits no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records of one type
    pub fn records_of_type(
        &self,
        record_type: RecordType,
    ) -> impl Iterator<Item = &ResolvedDnsRecord> {
        self.records
            .iter()
            .filter(move |r| r.record_type == record_type)
    }
}

/// Build the record plan for `request` from the default table
///
/// Fails only when the domain can not be split into SLD and TLD.
pub fn build_dns_plan(request: &DnsPlanRequest) -> Result<DnsPlan> {
    build_dns_plan_from(request, &DEFAULT_RECORD_TEMPLATES)
}

/// Build the record plan for `request` from an arbitrary template table
///
/// Fails when the domain can not be split, or when a template uses a
/// placeholder other than those in
/// [`PLACEHOLDER_KEYS`](super::substitute::PLACEHOLDER_KEYS).
pub fn build_dns_plan_from(
    request: &DnsPlanRequest,
    templates: &[DnsRecordTemplate],
) -> Result<DnsPlan> {
    let domain = DomainParts::split(&request.domain)?;

    for template in templates {
        let unknown = Substitutions::unknown_marker(template.host)
            .or_else(|| Substitutions::unknown_marker(template.value));
        if let Some(key) = unknown {
            return Err(Error::invalid_input(format!(
                "Unknown placeholder %{}% in {} {} template",
                key, template.label, template.record_type
            )));
        }
    }

    let fqdn = request.domain.trim();

    let substitutions = Substitutions::new(
        fqdn,
        &request.ipv4,
        &request.ipv6,
        &request.hostname,
        &request.acme_challenge,
    );
    let flags = request.flags();

    let mut records = Vec::with_capacity(templates.len());
    for template in templates {
        let value = substitutions.apply(template.value);

        let class = classify(template, &value);
        if !class.is_included(&flags) {
            tracing::trace!(
                "Skipping {} {} record ({:?})",
                template.label,
                template.record_type,
                class
            );
            continue;
        }

        let is_mx = template.record_type == RecordType::Mx;
        records.push(ResolvedDnsRecord {
            index: records.len() + 1,
            label: template.label.to_string(),
            host: substitutions.apply(template.host),
            record_type: template.record_type,
            value,
            mx_preference: is_mx.then_some(MX_PREFERENCE),
            email_type: is_mx.then_some(MX_EMAIL_TYPE),
        });
    }

    tracing::debug!(
        "Built DNS plan for {}: {} of {} records",
        fqdn,
        records.len(),
        templates.len()
    );

    Ok(DnsPlan { domain, records })
}
