//! Test doubles and common utilities for contract tests

#![allow(dead_code)]

use namecheap_core::config::ApiRequest;
use namecheap_core::error::{Error, Result};
use namecheap_core::traits::Transport;
use namecheap_core::{ClientConfig, Service};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// Return this body
    Body(String),
    /// Fail with a transport error carrying this message
    Fail(String),
}

/// A Transport that records every request and returns a fixed reply
pub struct MockTransport {
    reply: Reply,
    /// Call counter for get()
    call_count: Arc<AtomicUsize>,
    /// Requests seen, in order
    requests: Arc<std::sync::Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            call_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Reply with `{"success":true}`
    pub fn succeeding() -> Self {
        Self::new(Reply::Body(r#"{"success":true}"#.to_string()))
    }

    /// Get the number of times get() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the recorded requests
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Create a new MockTransport that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            reply: other.reply.clone(),
            call_count: Arc::clone(&other.call_count),
            requests: Arc::clone(&other.requests),
        }
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn get(&self, request: &ApiRequest) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Fail(msg) => Err(Error::transport(msg.clone())),
        }
    }

    fn transport_name(&self) -> &'static str {
        "mock"
    }
}

/// Sandbox configuration with dummy credentials
pub fn test_config() -> ClientConfig {
    ClientConfig::new("alice", "secret_key_12345", "10.0.0.1", Service::Sandbox)
}

/// Look up the first value for `key` in a request's query
pub fn query_value<'a>(request: &'a ApiRequest, key: &str) -> Option<&'a str> {
    request
        .query()
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
