//! # Login Command
//!
//! Stores a bearer access token in the credential file so subsequent
//! commands can authenticate.
//!
//! ## Usage
//!
//! ```bash
//! lagoon login --token <TOKEN>
//! ```

use anyhow::Result;

use crate::config::Config;
use crate::credentials::Credential;
use crate::errors::{display_config_error, display_success};
use crate::exit_codes::*;

/// Arguments for the login command
pub struct LoginArgs {
    /// The access token to store
    pub token: String,
}

/// Execute the login command
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Token stored
/// * `Ok(EXIT_CONFIG_ERROR)` - Configuration or credential-file error
pub fn execute(args: LoginArgs) -> Result<i32> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            display_config_error(&format!("{:#}", e));
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let credential = Credential::new(args.token);
    if let Err(e) = credential.save(&config.credential_file) {
        display_config_error(&format!("{:#}", e));
        return Ok(EXIT_CONFIG_ERROR);
    }

    display_success(&format!(
        "Access token stored in {}.",
        config.credential_file
    ));

    Ok(EXIT_SUCCESS)
}
