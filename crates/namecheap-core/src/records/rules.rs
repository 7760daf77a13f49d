// # Record Inclusion Rules
//
// Every template is first classified, then the class decides whether the
// resolved record goes into the plan. Classification is first-match in this
// order:
//
// 1. AAAA records
// 2. NS records and nameserver glue (`ns1.` / `ns2.` labels)
// 3. DMARC policy (`_dmarc.` TXT)
// 4. ACME challenge (`_acme-challenge.` label)
// 5. SPF / DomainConnect TXT
// 6. Everything else
//
// AAAA glue records for `ns1.`/`ns2.` match rule 1 but are still subject to
// the nameserver gate, so `include_ns = false` never leaks a glue record.

use super::RecordType;
use super::template::{
    ACME_CHALLENGE_LABEL, APEX_LABEL, DMARC_LABEL, DOMAINCONNECT_LABEL, DnsRecordTemplate,
    NAMESERVER_LABELS,
};

/// Flags and inputs the inclusion policy depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusionFlags {
    /// An IPv6 address was supplied
    pub has_ipv6: bool,
    /// A hostname was supplied
    pub has_hostname: bool,
    /// An ACME challenge token was supplied
    pub has_acme_challenge: bool,
    /// Manage NS records and nameserver glue
    pub include_ns: bool,
    /// Manage the DMARC policy record
    pub include_dmarc: bool,
    /// Only publish the ACME challenge record
    pub only_acme: bool,
}

/// Classification of a template, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    /// IPv6 address record; `glue` is set for `ns1.`/`ns2.`
    Ipv6 { glue: bool },
    /// NS record or IPv4 nameserver glue
    Nameserver,
    /// DMARC policy TXT
    Dmarc,
    /// ACME DNS-01 challenge TXT
    AcmeChallenge,
    /// SPF or DomainConnect TXT, both reference the hostname
    HostnameTxt,
    /// Default bucket
    Other,
}

fn is_nameserver_label(label: &str) -> bool {
    NAMESERVER_LABELS.contains(&label)
}

/// Classify a template. `value` is the resolved value of the record.
pub fn classify(template: &DnsRecordTemplate, value: &str) -> RecordClass {
    let label = template.label;
    let record_type = template.record_type;

    if record_type == RecordType::Aaaa {
        return RecordClass::Ipv6 {
            glue: is_nameserver_label(label),
        };
    }

    if record_type == RecordType::Ns || is_nameserver_label(label) {
        return RecordClass::Nameserver;
    }

    if label == DMARC_LABEL && record_type == RecordType::Txt {
        return RecordClass::Dmarc;
    }

    if label == ACME_CHALLENGE_LABEL {
        return RecordClass::AcmeChallenge;
    }

    if (label == APEX_LABEL || label == DOMAINCONNECT_LABEL)
        && record_type == RecordType::Txt
        && (value.starts_with("v=spf1") || value.starts_with("domainconnect"))
    {
        return RecordClass::HostnameTxt;
    }

    RecordClass::Other
}

impl RecordClass {
    /// Whether a record of this class belongs in the plan
    pub fn is_included(&self, flags: &InclusionFlags) -> bool {
        match self {
            RecordClass::Ipv6 { glue } => {
                !flags.only_acme && flags.has_ipv6 && (!glue || flags.include_ns)
            }
            RecordClass::Nameserver => !flags.only_acme && flags.include_ns,
            RecordClass::Dmarc => !flags.only_acme && flags.include_dmarc,
            RecordClass::AcmeChallenge => flags.has_acme_challenge,
            RecordClass::HostnameTxt => !flags.only_acme && flags.has_hostname,
            RecordClass::Other => !flags.only_acme,
        }
    }
}
