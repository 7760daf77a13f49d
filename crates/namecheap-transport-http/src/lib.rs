// # HTTPS Transport
//
// This crate provides the reqwest-backed transport for the Namecheap client.
//
// ## Behaviour
//
// - ✅ One HTTPS GET per call
// - ✅ HTTP timeout configured (30 seconds)
// - ✅ At most 10 redirects, HTTP/1.1
// - ✅ Body returned as-is whatever the HTTP status; the client decides
// - ✅ Dry-run mode for safe testing
// - ❌ NO retry or backoff
// - ❌ NO caching
//
// ## Security Requirements
//
// - API key NEVER appears in logs
// - Only the command name and parameter count are logged

use async_trait::async_trait;
use namecheap_core::config::ApiRequest;
use namecheap_core::traits::Transport;
use namecheap_core::{Error, Result};
use std::time::Duration;

/// Default HTTP timeout for API requests (30 seconds)
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum redirects followed per request
pub const MAX_REDIRECTS: usize = 10;

/// HTTPS transport for the registrar API
///
/// # Dry-Run Mode
///
/// When `dry_run` is true, the transport will:
/// - Log the command it would send
/// - **NOT** perform any network request
/// - Return `{"success":true,"dry_run":true}`
pub struct HttpTransport {
    /// HTTP client for API requests
    client: reqwest::Client,

    /// Dry-run mode: if true, skip the request entirely
    dry_run: bool,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &DEFAULT_HTTP_TIMEOUT)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport
    ///
    /// # Parameters
    ///
    /// - `dry_run`: If true, log requests instead of sending them
    pub fn with_mode(dry_run: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .http1_only()
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, dry_run })
    }

    /// Create a transport (live mode)
    pub fn new() -> Result<Self> {
        Self::with_mode(false)
    }

    /// Create a transport (dry-run mode)
    pub fn new_dry_run() -> Result<Self> {
        Self::with_mode(true)
    }

    /// Whether requests are skipped
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &ApiRequest) -> Result<String> {
        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would send {} to {} with {} query params",
                request.command(),
                request.endpoint(),
                request.query().len()
            );
            return Ok(serde_json::json!({ "success": true, "dry_run": true }).to_string());
        }

        tracing::debug!("GET {} ({})", request.endpoint(), request.command());

        let response = self
            .client
            .get(request.endpoint())
            .query(request.query())
            .send()
            .await
            .map_err(|e| Error::transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::warn!("{} returned HTTP {}", request.command(), status);
        }

        Ok(body)
    }

    fn transport_name(&self) -> &'static str {
        "https"
    }
}
