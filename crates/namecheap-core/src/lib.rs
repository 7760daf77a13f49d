// # namecheap-core
//
// Core library for the Namecheap registrar API client.
//
// ## Architecture Overview
//
// - **records**: Default DNS record table and the plan builder that expands
//   it into a concrete per-domain record set
// - **domain**: SLD/TLD split of a domain name
// - **command**: Pure encoders for `setHosts` and `create`
// - **config**: Immutable client configuration and request assembly
// - **Transport**: Trait for executing one GET against the registrar
// - **response**: Success/error interpretation of the response body
// - **NamecheapClient**: Facade that runs encode → transport → interpret
//
// ## Design Principles
//
// 1. **Pure core**: Plan building and encoding never touch the network
// 2. **Immutable configuration**: Built once per client, never mutated
// 3. **Single-shot transport**: One request per call, no retry
// 4. **Library-First**: The CLI is a thin layer over this crate

pub mod traits;
pub mod records;
pub mod domain;
pub mod command;
pub mod config;
pub mod response;
pub mod client;
pub mod error;

// Re-export core types for convenience
pub use traits::Transport;
pub use client::NamecheapClient;
pub use config::{ApiRequest, ClientConfig, Service};
pub use domain::DomainParts;
pub use records::{DnsPlan, DnsPlanRequest, RecordType, ResolvedDnsRecord, build_dns_plan};
pub use response::{ApiResponse, ApiStatus};
pub use error::{Error, Result};
