//! `namecheap.domains.dns.setHosts` encoding

use super::{ApiCommand, CMD_SET_HOSTS};
use crate::records::DnsPlan;

/// Serialize a record plan into a host replacement command
///
/// Emits `SLD`, `TLD`, then `HostName{i}`, `RecordType{i}`, `Address{i}` per
/// record, with `MXPref{i}` and `EmailType{i}` for MX records.
pub fn encode_set_hosts(plan: &DnsPlan) -> ApiCommand {
    let mut command = ApiCommand::new(CMD_SET_HOSTS)
        .param("SLD", plan.domain.sld.as_str())
        .param("TLD", plan.domain.tld.as_str());

    for record in &plan.records {
        let i = record.index;
        command.push(format!("HostName{}", i), record.label.as_str());
        command.push(format!("RecordType{}", i), record.record_type.as_str());
        command.push(format!("Address{}", i), record.value.as_str());

        if let Some(preference) = record.mx_preference {
            command.push(format!("MXPref{}", i), preference.to_string());
        }
        if let Some(email_type) = record.email_type {
            command.push(format!("EmailType{}", i), email_type);
        }
    }

    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{DnsPlanRequest, build_dns_plan};

    #[test]
    fn test_encode_minimal_plan() {
        let plan = build_dns_plan(&DnsPlanRequest::new("example.com", "1.2.3.4")).unwrap();
        let command = encode_set_hosts(&plan);

        assert_eq!(command.name(), "namecheap.domains.dns.setHosts");
        assert_eq!(command.get("SLD"), Some("example"));
        assert_eq!(command.get("TLD"), Some("com"));

        assert_eq!(command.get("HostName1"), Some("@"));
        assert_eq!(command.get("RecordType1"), Some("A"));
        assert_eq!(command.get("Address1"), Some("1.2.3.4"));

        assert_eq!(command.get("HostName2"), Some("@"));
        assert_eq!(command.get("RecordType2"), Some("MX"));
        assert_eq!(command.get("Address2"), Some("mail.example.com."));
        assert_eq!(command.get("MXPref2"), Some("10"));
        assert_eq!(command.get("EmailType2"), Some("MX"));

        assert_eq!(command.get("MXPref1"), None);
        assert_eq!(command.get(&format!("HostName{}", plan.len() + 1)), None);
    }

    #[test]
    fn test_encode_param_count() {
        let plan = build_dns_plan(&DnsPlanRequest::new("example.co.uk", "1.2.3.4")).unwrap();
        let command = encode_set_hosts(&plan);

        // SLD + TLD, three per record, two more for the single MX
        assert_eq!(command.params().len(), 2 + 3 * plan.len() + 2);
        assert_eq!(command.get("TLD"), Some("co.uk"));
    }

    #[test]
    fn test_encode_escapes_values() {
        let plan = build_dns_plan(
            &DnsPlanRequest::new("example.com", "1.2.3.4").with_hostname("mail.example.com"),
        )
        .unwrap();
        let encoded = encode_set_hosts(&plan).encode();
        assert!(encoded.contains("v%3Dspf1%20%2Ba%20%2Bmx%20%2Ba%3Amail.example.com%20-all"));
        assert!(encoded.starts_with("namecheap.domains.dns.setHosts&SLD=example&TLD=com&HostName1=%40"));
    }
}
