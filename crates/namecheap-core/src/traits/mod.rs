//! Core traits for the Namecheap client
//!
//! - [`Transport`]: Execute one assembled request against the registrar

pub mod transport;

pub use transport::Transport;
