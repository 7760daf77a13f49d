//! Configuration types for the Namecheap client
//!
//! The client configuration is built once per client lifetime and never
//! mutated afterwards. There are no setters: construct a new value instead.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::command::ApiCommand;

/// Production API host
pub const PRODUCTION_HOST: &str = "api.namecheap.com";

/// Sandbox API host
pub const SANDBOX_HOST: &str = "api.sandbox.namecheap.com";

/// Path of the registrar's response endpoint
pub const RESPONSE_PATH: &str = "/xml.response";

/// Which registrar environment requests are sent to
///
/// Deserializes through [`Service::from_mode`], so unknown modes select the
/// sandbox rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Service {
    /// Live registrar API
    #[default]
    Production,
    /// Sandbox API for testing
    Sandbox,
}

impl Service {
    /// Parse a service mode string.
    ///
    /// Only `"production"` selects the live API; every other value falls back
    /// to the sandbox.
    pub fn from_mode(mode: &str) -> Self {
        if mode == "production" {
            Service::Production
        } else {
            Service::Sandbox
        }
    }

    /// Host name of the endpoint for this service
    pub fn host(&self) -> &'static str {
        match self {
            Service::Production => PRODUCTION_HOST,
            Service::Sandbox => SANDBOX_HOST,
        }
    }

    /// Full base URL of the response endpoint
    pub fn endpoint(&self) -> String {
        format!("https://{}{}", self.host(), RESPONSE_PATH)
    }
}

impl From<String> for Service {
    fn from(mode: String) -> Self {
        Self::from_mode(&mode)
    }
}

impl FromStr for Service {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_mode(s))
    }
}

/// Credentials and environment for one client
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API user (also sent as `UserName`)
    pub api_user: String,

    /// API key
    /// ⚠️ NEVER log this value
    pub api_key: String,

    /// Whitelisted client IP sent as `ClientIp`
    pub client_ip: String,

    /// Target environment
    #[serde(default)]
    pub service: Service,
}

// Custom Debug implementation that hides the API key
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_user", &self.api_user)
            .field("api_key", &"<REDACTED>")
            .field("client_ip", &self.client_ip)
            .field("service", &self.service)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(
        api_user: impl Into<String>,
        api_key: impl Into<String>,
        client_ip: impl Into<String>,
        service: Service,
    ) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: api_key.into(),
            client_ip: client_ip.into(),
            service,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.api_user.trim().is_empty() {
            return Err(crate::Error::config("API user cannot be empty"));
        }
        if self.api_key.trim().is_empty() {
            return Err(crate::Error::config("API key cannot be empty"));
        }
        if self.client_ip.trim().is_empty() {
            return Err(crate::Error::config("Client IP cannot be empty"));
        }
        Ok(())
    }

    /// Build the full request for a command against this configuration
    pub fn request(&self, command: &ApiCommand) -> ApiRequest {
        let mut query = Vec::with_capacity(5 + command.params().len());
        query.push(("ApiUser".to_string(), self.api_user.clone()));
        query.push(("ApiKey".to_string(), self.api_key.clone()));
        query.push(("UserName".to_string(), self.api_user.clone()));
        query.push(("ClientIp".to_string(), self.client_ip.clone()));
        query.push(("Command".to_string(), command.name().to_string()));
        query.extend(command.params().iter().cloned());

        ApiRequest {
            endpoint: self.service.endpoint(),
            command: command.name().to_string(),
            query,
        }
    }
}

/// A fully assembled GET request, ready for a transport
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    endpoint: String,
    command: String,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Base URL, without query string
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Registrar command name (e.g. `namecheap.domains.dns.setHosts`)
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Ordered query parameters, credentials included
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Point the request at another endpoint (proxy, local mock)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Render the complete URL with a percent-encoded query string
    ///
    /// For inspection and replay only. The URL contains the API key and
    /// must not be logged; transports send [`ApiRequest::query`] instead.
    pub fn to_url(&self) -> String {
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.endpoint, query)
    }
}

// The query carries the API key, so it is never printed
impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let query: Vec<(&str, &str)> = self
            .query
            .iter()
            .map(|(k, v)| {
                if k == "ApiKey" {
                    (k.as_str(), "<REDACTED>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("ApiRequest")
            .field("endpoint", &self.endpoint)
            .field("command", &self.command)
            .field("query", &query)
            .finish()
    }
}
