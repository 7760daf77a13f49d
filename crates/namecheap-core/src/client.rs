//! Registrar client
//!
//! [`NamecheapClient`] ties the pieces together: it encodes a command,
//! assembles the request from its immutable [`ClientConfig`], hands it to a
//! [`Transport`] and interprets the body.
//!
//! ```rust,ignore
//! let client = NamecheapClient::new(config, Box::new(HttpTransport::new()?))?;
//! let request = DnsPlanRequest::new("example.com", "1.2.3.4").with_include_ns(true);
//! let response = client.set_dns(&request).await?;
//! ```

use crate::command::{ApiCommand, CreateDomainRequest, encode_create_domain, encode_set_hosts};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::records::{DnsPlan, DnsPlanRequest, build_dns_plan};
use crate::response::ApiResponse;
use crate::traits::Transport;

/// Client for the registrar API
///
/// Cheap to share behind an `Arc`: the configuration is never mutated and
/// every call builds its own plan and request.
pub struct NamecheapClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl std::fmt::Debug for NamecheapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamecheapClient")
            .field("config", &self.config)
            .field("transport", &self.transport.transport_name())
            .finish()
    }
}

impl NamecheapClient {
    /// Create a client
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the user, key or client IP is empty.
    pub fn new(config: ClientConfig, transport: Box<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a command
    ///
    /// Never fails: transport errors are reported as an error response.
    pub async fn execute(&self, command: &ApiCommand) -> ApiResponse {
        let request = self.config.request(command);

        tracing::info!(
            "Executing {} ({} params) against {:?}",
            command.name(),
            command.params().len(),
            self.config.service
        );

        let response = match self.transport.get(&request).await {
            Ok(body) => ApiResponse::from_body(body),
            Err(e) => {
                tracing::warn!("Transport failure for {}: {}", command.name(), e);
                return ApiResponse::transport_error(&e);
            }
        };

        if !response.is_success() {
            tracing::warn!("{} was not successful", command.name());
        }
        response
    }

    /// Build the record plan for a request without sending anything
    ///
    /// Shows exactly what [`NamecheapClient::set_dns`] would submit.
    pub fn plan_dns(&self, request: &DnsPlanRequest) -> Result<DnsPlan> {
        build_dns_plan(request)
    }

    /// Replace the host records of a domain with its synthesized plan
    ///
    /// # Errors
    ///
    /// Fails only when the domain can not be split into SLD and TLD; in that
    /// case nothing is sent.
    pub async fn set_dns(&self, request: &DnsPlanRequest) -> Result<ApiResponse> {
        let plan = build_dns_plan(request)?;
        tracing::debug!("DNS plan for {}: {} records", request.domain, plan.len());

        let command = encode_set_hosts(&plan);
        Ok(self.execute(&command).await)
    }

    /// Register a domain
    ///
    /// # Errors
    ///
    /// Fails when the request does not validate; in that case nothing is sent.
    pub async fn create_domain(&self, request: &CreateDomainRequest) -> Result<ApiResponse> {
        request.validate()?;
        let command = encode_create_domain(request);
        Ok(self.execute(&command).await)
    }
}
