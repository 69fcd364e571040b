//! # Configuration Management
//!
//! This module loads CLI configuration from the process environment,
//! including the service origin and the OAuth client credentials.
//!
//! ## Environment Variables
//!
//! - `LAGOON_ORIGIN` - base URL of the service (default: `https://lagoon.social`)
//! - `LAGOON_CLIENT_ID` - client identifier (required)
//! - `LAGOON_CLIENT_SECRET` - client secret (required)
//! - `LAGOON_CREDENTIAL_FILE` - credential file path (default: `credential.json`)
//!
//! Release builds may bake the client credentials in at compile time by
//! setting `LAGOON_CLIENT_ID` / `LAGOON_CLIENT_SECRET` in the build
//! environment; baked-in values take precedence over the process
//! environment at runtime.

use anyhow::{Result, bail};

/// Default service origin
const DEFAULT_ORIGIN: &str = "https://lagoon.social";

/// Default credential file path, relative to the working directory
const DEFAULT_CREDENTIAL_FILE: &str = "credential.json";

/// Environment variable for overriding the origin
const ORIGIN_ENV_VAR: &str = "LAGOON_ORIGIN";

/// Environment variable for the client identifier
const CLIENT_ID_ENV_VAR: &str = "LAGOON_CLIENT_ID";

/// Environment variable for the client secret
const CLIENT_SECRET_ENV_VAR: &str = "LAGOON_CLIENT_SECRET";

/// Environment variable for the credential file path
const CREDENTIAL_FILE_ENV_VAR: &str = "LAGOON_CREDENTIAL_FILE";

/// Client credentials baked in at compile time, if any
const BAKED_CLIENT_ID: Option<&str> = option_env!("LAGOON_CLIENT_ID");
const BAKED_CLIENT_SECRET: Option<&str> = option_env!("LAGOON_CLIENT_SECRET");

/// CLI configuration
///
/// Supplies the API client with its origin and client credentials, and the
/// credential store with its file path.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the service
    pub origin: String,
    /// Client identifier
    pub client_id: String,
    /// Client secret
    pub client_secret: String,
    /// Path to the credential file
    pub credential_file: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Compile-time baked client credentials take precedence; otherwise
    /// both `LAGOON_CLIENT_ID` and `LAGOON_CLIENT_SECRET` must be set.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(_)` - A required variable is missing
    pub fn from_env() -> Result<Self> {
        let (client_id, client_secret) = match (BAKED_CLIENT_ID, BAKED_CLIENT_SECRET) {
            (Some(id), Some(secret)) => (id.to_string(), secret.to_string()),
            _ => (
                required_var(CLIENT_ID_ENV_VAR)?,
                required_var(CLIENT_SECRET_ENV_VAR)?,
            ),
        };

        Ok(Self {
            origin: std::env::var(ORIGIN_ENV_VAR).unwrap_or_else(|_| DEFAULT_ORIGIN.to_string()),
            client_id,
            client_secret,
            credential_file: std::env::var(CREDENTIAL_FILE_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_CREDENTIAL_FILE.to_string()),
        })
    }
}

/// Read a required environment variable, naming it in the error.
fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => bail!("required environment variable {} is not set", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var(ORIGIN_ENV_VAR);
        env::remove_var(CLIENT_ID_ENV_VAR);
        env::remove_var(CLIENT_SECRET_ENV_VAR);
        env::remove_var(CREDENTIAL_FILE_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_with_all_variables() {
        clear_env();
        env::set_var(ORIGIN_ENV_VAR, "http://localhost:8080");
        env::set_var(CLIENT_ID_ENV_VAR, "cid");
        env::set_var(CLIENT_SECRET_ENV_VAR, "secret");
        env::set_var(CREDENTIAL_FILE_ENV_VAR, "/tmp/cred.json");

        let config = Config::from_env().unwrap();
        assert_eq!(config.origin, "http://localhost:8080");
        // Baked credentials take precedence when the binary was built with
        // them in the environment, so only assert env values otherwise.
        if BAKED_CLIENT_ID.is_none() {
            assert_eq!(config.client_id, "cid");
            assert_eq!(config.client_secret, "secret");
        }
        assert_eq!(config.credential_file, "/tmp/cred.json");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var(CLIENT_ID_ENV_VAR, "cid");
        env::set_var(CLIENT_SECRET_ENV_VAR, "secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.origin, DEFAULT_ORIGIN);
        assert_eq!(config.credential_file, DEFAULT_CREDENTIAL_FILE);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_client_id() {
        if BAKED_CLIENT_ID.is_some() {
            return;
        }
        clear_env();
        env::set_var(CLIENT_SECRET_ENV_VAR, "secret");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains(CLIENT_ID_ENV_VAR));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_value_is_missing() {
        if BAKED_CLIENT_ID.is_some() {
            return;
        }
        clear_env();
        env::set_var(CLIENT_ID_ENV_VAR, "");
        env::set_var(CLIENT_SECRET_ENV_VAR, "secret");

        assert!(Config::from_env().is_err());

        clear_env();
    }

}
