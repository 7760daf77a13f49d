//! `namecheap.domains.create` encoding
//!
//! Contact fields are sent as `{ContactType}{Field}`, e.g.
//! `RegistrantFirstName` or `AuxBillingEmailAddress`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ApiCommand, CMD_CREATE, yes_no};
use crate::error::{Error, Result};

/// Role of a domain contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContactType {
    /// Domain owner
    Registrant,
    /// Technical contact
    Tech,
    /// Administrative contact
    Admin,
    /// Billing contact
    AuxBilling,
}

impl ContactType {
    /// All contact types, in submission order
    pub const ALL: [ContactType; 4] = [
        ContactType::Registrant,
        ContactType::Tech,
        ContactType::Admin,
        ContactType::AuxBilling,
    ];

    /// Parameter prefix for this contact type
    pub fn prefix(&self) -> &'static str {
        match self {
            ContactType::Registrant => "Registrant",
            ContactType::Tech => "Tech",
            ContactType::Admin => "Admin",
            ContactType::AuxBilling => "AuxBilling",
        }
    }
}

/// Contact details for one role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    /// Phone in `+NNN.NNNNNNNNNN` form
    pub phone: String,
    pub email_address: String,
}

impl Contact {
    /// Field name / value pairs in submission order, optional fields skipped
    fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::with_capacity(11);
        if let Some(org) = &self.organization_name {
            fields.push(("OrganizationName", org.as_str()));
        }
        fields.push(("FirstName", self.first_name.as_str()));
        fields.push(("LastName", self.last_name.as_str()));
        fields.push(("Address1", self.address1.as_str()));
        if let Some(address2) = &self.address2 {
            fields.push(("Address2", address2.as_str()));
        }
        fields.push(("City", self.city.as_str()));
        fields.push(("StateProvince", self.state_province.as_str()));
        fields.push(("PostalCode", self.postal_code.as_str()));
        fields.push(("Country", self.country.as_str()));
        fields.push(("Phone", self.phone.as_str()));
        fields.push(("EmailAddress", self.email_address.as_str()));
        fields
    }
}

/// Domain registration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    /// Domain to register
    pub domain: String,

    /// Registration period in years
    #[serde(default = "default_years")]
    pub years: u32,

    /// Contacts by role
    pub contacts: BTreeMap<ContactType, Contact>,

    /// Add the free WhoisGuard subscription
    #[serde(default = "default_true")]
    pub free_whois: bool,

    /// Enable WhoisGuard
    #[serde(default = "default_true")]
    pub whoisguard_enabled: bool,

    /// Generate an admin order reference id
    #[serde(default)]
    pub admin_order: bool,

    /// Domain is a premium domain
    #[serde(default)]
    pub premium: bool,
}

fn default_years() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl CreateDomainRequest {
    /// Create a one-year registration with WhoisGuard on
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            years: default_years(),
            contacts: BTreeMap::new(),
            free_whois: true,
            whoisguard_enabled: true,
            admin_order: false,
            premium: false,
        }
    }

    /// Set the registration period
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Set the contact for one role
    pub fn with_contact(mut self, contact_type: ContactType, contact: Contact) -> Self {
        self.contacts.insert(contact_type, contact);
        self
    }

    /// Use the same contact for every role
    pub fn with_all_contacts(mut self, contact: Contact) -> Self {
        for contact_type in ContactType::ALL {
            self.contacts.insert(contact_type, contact.clone());
        }
        self
    }

    /// Toggle the free WhoisGuard subscription
    pub fn with_free_whois(mut self, free_whois: bool) -> Self {
        self.free_whois = free_whois;
        self
    }

    /// Toggle WhoisGuard
    pub fn with_whoisguard_enabled(mut self, enabled: bool) -> Self {
        self.whoisguard_enabled = enabled;
        self
    }

    /// Toggle admin order reference generation
    pub fn with_admin_order(mut self, admin_order: bool) -> Self {
        self.admin_order = admin_order;
        self
    }

    /// Mark the domain as premium
    pub fn with_premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }

    /// Validate the request
    pub fn validate(&self) -> Result<()> {
        if !self.domain.trim().contains('.') {
            return Err(Error::invalid_domain(format!(
                "'{}' contains no dot",
                self.domain
            )));
        }
        if self.years == 0 {
            return Err(Error::invalid_input("Registration period must be >= 1 year"));
        }
        Ok(())
    }
}

/// Serialize a registration request
pub fn encode_create_domain(request: &CreateDomainRequest) -> ApiCommand {
    let mut command = ApiCommand::new(CMD_CREATE)
        .param("DomainName", request.domain.trim())
        .param("Years", request.years.to_string());

    // BTreeMap iterates in ContactType order
    for (contact_type, contact) in &request.contacts {
        for (field, value) in contact.fields() {
            command.push(format!("{}{}", contact_type.prefix(), field), value);
        }
    }

    command.push("AddFreeWhoisguard", yes_no(request.free_whois));
    command.push("WGEnabled", yes_no(request.whoisguard_enabled));
    command.push("GenerateAdminOrderRefId", yes_no(request.admin_order));
    command.push(
        "IsPremiumDomain",
        if request.premium { "True" } else { "False" },
    );

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> Contact {
        Contact {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address1: "12 St James's Square".to_string(),
            city: "London".to_string(),
            state_province: "London".to_string(),
            postal_code: "SW1Y 4JH".to_string(),
            country: "GB".to_string(),
            phone: "+44.2071234567".to_string(),
            email_address: "ada@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_contact_fields_prefixed_by_type() {
        let request = CreateDomainRequest::new("example.com")
            .with_contact(ContactType::AuxBilling, contact())
            .with_contact(ContactType::Registrant, contact());
        let command = encode_create_domain(&request);

        assert_eq!(command.get("RegistrantFirstName"), Some("Ada"));
        assert_eq!(command.get("AuxBillingEmailAddress"), Some("ada@example.com"));
        assert_eq!(command.get("TechFirstName"), None);
        assert_eq!(command.get("RegistrantOrganizationName"), None);

        let first_aux = command
            .params()
            .iter()
            .position(|(k, _)| k.starts_with("AuxBilling"))
            .unwrap();
        let last_registrant = command
            .params()
            .iter()
            .rposition(|(k, _)| k.starts_with("Registrant"))
            .unwrap();
        assert!(last_registrant < first_aux);
    }

    #[test]
    fn test_defaults_and_flags() {
        let command = encode_create_domain(&CreateDomainRequest::new("example.com"));
        assert_eq!(command.name(), "namecheap.domains.create");
        assert_eq!(command.get("DomainName"), Some("example.com"));
        assert_eq!(command.get("Years"), Some("1"));
        assert_eq!(command.get("AddFreeWhoisguard"), Some("yes"));
        assert_eq!(command.get("WGEnabled"), Some("yes"));
        assert_eq!(command.get("GenerateAdminOrderRefId"), Some("no"));
        assert_eq!(command.get("IsPremiumDomain"), Some("False"));

        let command = encode_create_domain(
            &CreateDomainRequest::new("example.com")
                .with_years(3)
                .with_free_whois(false)
                .with_whoisguard_enabled(false)
                .with_admin_order(true)
                .with_premium(true),
        );
        assert_eq!(command.get("Years"), Some("3"));
        assert_eq!(command.get("AddFreeWhoisguard"), Some("no"));
        assert_eq!(command.get("WGEnabled"), Some("no"));
        assert_eq!(command.get("GenerateAdminOrderRefId"), Some("yes"));
        assert_eq!(command.get("IsPremiumDomain"), Some("True"));
    }

    #[test]
    fn test_all_contacts() {
        let mut c = contact();
        c.organization_name = Some("Analytical Engines Ltd".to_string());
        let command = encode_create_domain(&CreateDomainRequest::new("example.com").with_all_contacts(c));
        for contact_type in ContactType::ALL {
            let key = format!("{}OrganizationName", contact_type.prefix());
            assert_eq!(command.get(&key), Some("Analytical Engines Ltd"));
        }
        // 2 header + 4 contacts * 10 fields + 4 flags
        assert_eq!(command.params().len(), 2 + 40 + 4);
    }

    #[test]
    fn test_validate() {
        assert!(CreateDomainRequest::new("example.com").validate().is_ok());
        assert!(matches!(
            CreateDomainRequest::new("localhost").validate(),
            Err(Error::InvalidDomain(_))
        ));
        assert!(matches!(
            CreateDomainRequest::new("example.com").with_years(0).validate(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_contacts_from_json() {
        let request: CreateDomainRequest = serde_json::from_str(
            r#"{
                "domain": "example.com",
                "contacts": {
                    "Tech": {
                        "FirstName": "Ada", "LastName": "Lovelace",
                        "Address1": "1 Road", "City": "London",
                        "StateProvince": "London", "PostalCode": "N1",
                        "Country": "GB", "Phone": "+44.1", "EmailAddress": "a@b.c"
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(request.years, 1);
        assert!(request.free_whois);
        assert_eq!(request.contacts[&ContactType::Tech].first_name, "Ada");
    }
}
