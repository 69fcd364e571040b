//! # Fetch Command
//!
//! Fetches a raw API resource and writes the response body to stdout,
//! unmodified. Useful for endpoints the CLI has no dedicated command for.
//!
//! ## Usage
//!
//! ```bash
//! lagoon fetch /v1/timelines/public
//! ```

use std::io::Write;

use anyhow::{Context, Result};

use crate::commands::build_client;
use crate::config::Config;
use crate::errors::{display_config_error, render_api_error};
use crate::exit_codes::*;

/// Arguments for the fetch command
pub struct FetchArgs {
    /// Resource path, relative to the service's `/api` routing prefix
    /// (e.g. `/v1/timelines/public`)
    pub path: String,
}

/// Execute the fetch command
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Body written to stdout
/// * `Ok(EXIT_CONFIG_ERROR)` - Configuration error
/// * Other codes per [`exit_code_for`]
pub async fn execute(args: FetchArgs) -> Result<i32> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            display_config_error(&format!("{:#}", e));
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let client = build_client(&config);

    match client.get(&args.path).await {
        Ok(bytes) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .context("Failed to write response body to stdout")?;
            if !bytes.ends_with(b"\n") {
                stdout
                    .write_all(b"\n")
                    .context("Failed to write response body to stdout")?;
            }
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            render_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
