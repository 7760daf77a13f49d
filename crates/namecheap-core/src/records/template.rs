// # Default Record Templates
//
// The fixed table of records every managed domain starts from. Entries are
// never mutated; the plan builder resolves each one into a fresh
// `ResolvedDnsRecord` per call.
//
// ## Placeholders
//
// - `%domain%`: the managed domain
// - `%ipv4%` / `%ipv6%`: server addresses
// - `%hostname%`: mail/panel host name
// - `%acme_challenge%`: ACME DNS-01 token

use super::RecordType;

/// A DNS record description with unresolved placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsRecordTemplate {
    /// Subdomain label as sent in `HostName{n}` (`@` for the apex, otherwise
    /// with a trailing dot, e.g. `ftp.`)
    pub label: &'static str,
    /// Fully qualified host pattern
    pub host: &'static str,
    /// Record type
    pub record_type: RecordType,
    /// Record value pattern
    pub value: &'static str,
}

impl DnsRecordTemplate {
    const fn new(
        label: &'static str,
        host: &'static str,
        record_type: RecordType,
        value: &'static str,
    ) -> Self {
        Self {
            label,
            host,
            record_type,
            value,
        }
    }
}

/// Label of the apex records
pub const APEX_LABEL: &str = "@";

/// Label of the ACME DNS-01 challenge record
pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge.";

/// Label of the DMARC policy record
pub const DMARC_LABEL: &str = "_dmarc.";

/// Label of the DomainConnect discovery record
pub const DOMAINCONNECT_LABEL: &str = "_domainconnect.";

/// Labels of the nameserver glue records
pub const NAMESERVER_LABELS: [&str; 2] = ["ns1.", "ns2."];

/// Default records, in submission order
pub const DEFAULT_RECORD_TEMPLATES: [DnsRecordTemplate; 20] = [
    DnsRecordTemplate::new("@", "%domain%.", RecordType::Ns, "ns1.%domain%."),
    DnsRecordTemplate::new("@", "%domain%.", RecordType::Ns, "ns2.%domain%."),
    DnsRecordTemplate::new("@", "%domain%.", RecordType::A, "%ipv4%"),
    DnsRecordTemplate::new("@", "%domain%.", RecordType::Aaaa, "%ipv6%"),
    DnsRecordTemplate::new("@", "%domain%.", RecordType::Mx, "mail.%domain%."),
    DnsRecordTemplate::new("@", "%domain%.", RecordType::Txt, "v=spf1 +a +mx +a:%hostname% -all"),
    DnsRecordTemplate::new(
        "_domainconnect.",
        "%domain%.",
        RecordType::Txt,
        "domainconnect.plesk.com/host/%hostname%/port/8443",
    ),
    DnsRecordTemplate::new("_acme-challenge.", "%domain%.", RecordType::Txt, "%acme_challenge%"),
    DnsRecordTemplate::new("_dmarc.", "%domain%.", RecordType::Txt, "v=DMARC1; p=none"),
    DnsRecordTemplate::new("ftp.", "%domain%.", RecordType::Cname, "%domain%"),
    DnsRecordTemplate::new("ipv4.", "%domain%.", RecordType::A, "%ipv4%"),
    DnsRecordTemplate::new("ipv6.", "%domain%.", RecordType::Aaaa, "%ipv6%"),
    DnsRecordTemplate::new("mail.", "%domain%.", RecordType::A, "%ipv4%"),
    DnsRecordTemplate::new("mail.", "%domain%.", RecordType::Aaaa, "%ipv6%"),
    DnsRecordTemplate::new("ns1.", "%domain%.", RecordType::A, "%ipv4%"),
    DnsRecordTemplate::new("ns1.", "%domain%.", RecordType::Aaaa, "%ipv6%"),
    DnsRecordTemplate::new("ns2.", "%domain%.", RecordType::A, "%ipv4%"),
    DnsRecordTemplate::new("ns2.", "%domain%.", RecordType::Aaaa, "%ipv6%"),
    DnsRecordTemplate::new("webmail.", "%domain%.", RecordType::A, "%ipv4%"),
    DnsRecordTemplate::new("webmail.", "%domain%.", RecordType::Aaaa, "%ipv6%"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::substitute::PLACEHOLDER_KEYS;

    /// Collect every `%key%` marker in a pattern
    fn markers(pattern: &str) -> Vec<&str> {
        pattern.split('%').skip(1).step_by(2).collect()
    }

    #[test]
    fn test_table_uses_known_placeholders_only() {
        for template in DEFAULT_RECORD_TEMPLATES.iter() {
            for key in markers(template.host).into_iter().chain(markers(template.value)) {
                assert!(
                    PLACEHOLDER_KEYS.contains(&key),
                    "unknown placeholder %{}% in {:?}",
                    key,
                    template
                );
            }
        }
    }

    #[test]
    fn test_every_host_is_the_domain() {
        assert!(DEFAULT_RECORD_TEMPLATES.iter().all(|t| t.host == "%domain%."));
    }

    #[test]
    fn test_table_shape() {
        let count = |ty: RecordType| {
            DEFAULT_RECORD_TEMPLATES
                .iter()
                .filter(|t| t.record_type == ty)
                .count()
        };
        assert_eq!(count(RecordType::Ns), 2);
        assert_eq!(count(RecordType::Mx), 1);
        assert_eq!(count(RecordType::Txt), 4);
        assert_eq!(count(RecordType::Cname), 1);
        assert_eq!(count(RecordType::A), 6);
        assert_eq!(count(RecordType::Aaaa), 6);

        let dmarc: Vec<_> = DEFAULT_RECORD_TEMPLATES
            .iter()
            .filter(|t| t.label == DMARC_LABEL)
            .collect();
        assert_eq!(dmarc.len(), 1);
        assert_eq!(dmarc[0].record_type, RecordType::Txt);
    }
}
