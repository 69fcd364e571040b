//! # Lagoon CLI Library
//!
//! This crate provides the core functionality for the Lagoon CLI,
//! a command-line client for the Lagoon timeline service.
//!
//! ## Modules
//!
//! - [`api`] - The authenticated API client (the request/response pipeline)
//! - [`commands`] - CLI command implementations
//! - [`config`] - Environment configuration
//! - [`credentials`] - Credential-file persistence
//! - [`errors`] - Error display helpers
//! - [`exit_codes`] - Standard exit codes

pub mod api;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod exit_codes;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, ClientConfig};
pub use config::Config;
pub use credentials::Credential;
