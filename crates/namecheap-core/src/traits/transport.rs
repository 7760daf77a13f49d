// # Transport Trait
//
// Defines the boundary between request assembly and the network.
//
// ## Implementations
//
// - HTTPS: `namecheap-transport-http` crate
// - Tests: recording mocks
//
// ## Usage
//
// ```rust,ignore
// use namecheap_core::{ClientConfig, Transport};
// use namecheap_core::command::ApiCommand;
//
// let request = config.request(&ApiCommand::new("namecheap.domains.getList"));
// let body = transport.get(&request).await?;
// ```

use async_trait::async_trait;

use crate::config::ApiRequest;

/// Trait for transport implementations
///
/// A transport performs exactly one GET per call and hands back the raw
/// body. Interpreting the body is the client's job.
///
/// # Constraints
///
/// - One request per invocation, no retry and no backoff
/// - Bounded by a timeout
/// - No state kept between calls
/// - Never logs the API key (use the `Debug` impl of [`ApiRequest`])
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the response body
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The body, whatever its content or HTTP status
    /// - `Err(Error)`: Connection, TLS or timeout failure
    async fn get(&self, request: &ApiRequest) -> Result<String, crate::Error>;

    /// Transport name (for logging/debugging)
    fn transport_name(&self) -> &'static str;
}
