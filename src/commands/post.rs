//! # Post Command
//!
//! Publishes a post to the timeline.
//!
//! ## Usage
//!
//! ```bash
//! lagoon post "hello from the shore"
//! ```

use anyhow::Result;
use serde::Serialize;

use crate::commands::build_client;
use crate::config::Config;
use crate::errors::{display_config_error, display_success, render_api_error};
use crate::exit_codes::*;

/// Arguments for the post command
pub struct PostArgs {
    /// Text of the post to publish
    pub text: String,
}

/// Request body for creating a post
#[derive(Debug, Serialize)]
struct NewPost {
    text: String,
}

/// Execute the post command
///
/// Sends `{"text": ...}` to `/v1/posts` and prints the raw response body.
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Post created
/// * `Ok(EXIT_CONFIG_ERROR)` - Configuration error
/// * Other codes per [`exit_code_for`]
pub async fn execute(args: PostArgs) -> Result<i32> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            display_config_error(&format!("{:#}", e));
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    let client = build_client(&config);
    let body = NewPost { text: args.text };

    match client.post("/v1/posts", &body).await {
        Ok(bytes) => {
            display_success("Posted.");
            println!("{}", String::from_utf8_lossy(&bytes));
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            render_api_error(&e);
            Ok(exit_code_for(&e))
        }
    }
}
