//! # Status Command
//!
//! Shows the effective configuration and credential state.
//!
//! ## Usage
//!
//! ```bash
//! lagoon status
//! ```

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::credentials::Credential;
use crate::exit_codes::*;

/// Execute the status command
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - Configured and authenticated
/// * `Ok(EXIT_CONFIG_ERROR)` - Missing configuration or credential
pub fn execute() -> Result<i32> {
    println!("{}", "Lagoon CLI Status".bold());
    println!("{}", "─".repeat(40).dimmed());
    println!();

    let config = match Config::from_env() {
        Ok(config) => {
            println!(
                "{} Configuration: {}",
                "✓".bright_green().bold(),
                "Found".green()
            );
            config
        }
        Err(e) => {
            println!("{} Configuration: {}", "✗".red().bold(), "Incomplete".red());
            println!("  {} {}", "Error:".dimmed(), format!("{:#}", e).dimmed());
            println!(
                "  {} Set LAGOON_CLIENT_ID and LAGOON_CLIENT_SECRET",
                "→".cyan()
            );
            return Ok(EXIT_CONFIG_ERROR);
        }
    };

    println!("{} Origin: {}", "ℹ".blue(), config.origin.cyan());
    println!(
        "{} Credential file: {}",
        "ℹ".blue(),
        config.credential_file.cyan()
    );
    println!();

    match Credential::load(&config.credential_file) {
        Ok(credential) => {
            println!(
                "{} Access token: {}",
                "✓".bright_green().bold(),
                mask_token(&credential.access_token).dimmed()
            );
            println!();
            println!(
                "{} Ready. Run `lagoon post <TEXT>` to publish.",
                "✓".bright_green().bold()
            );
            Ok(EXIT_SUCCESS)
        }
        Err(_) => {
            println!("{} Access token: {}", "✗".red().bold(), "Not found".red());
            println!(
                "  {} Run `lagoon login --token <TOKEN>` to authenticate",
                "→".cyan()
            );
            Ok(EXIT_CONFIG_ERROR)
        }
    }
}

/// Mask an access token for display
///
/// Shows the first 4 characters and masks the rest. Tokens are opaque and
/// not guaranteed to be ASCII, so the visible prefix is cut on a character
/// boundary.
fn mask_token(token: &str) -> String {
    let char_count = token.chars().count();
    if char_count <= 8 {
        return "*".repeat(char_count.max(4));
    }

    let boundary = token
        .char_indices()
        .nth(4)
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    let masked_len = char_count - 4;
    format!("{}{}", &token[..boundary], "*".repeat(masked_len.min(12)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_short() {
        assert_eq!(mask_token("abcd"), "****");
    }

    #[test]
    fn test_mask_token_empty() {
        assert_eq!(mask_token(""), "****");
    }

    #[test]
    fn test_mask_token_normal() {
        let masked = mask_token("tok_live_abcdef123456");
        assert!(masked.starts_with("tok_"));
        assert!(!masked.contains("abcdef"));
        assert!(masked.contains('*'));
    }

    #[test]
    fn test_mask_token_never_reveals_tail() {
        let masked = mask_token("tok_secret_tail_xyz");
        assert!(!masked.contains("xyz"));
    }

    #[test]
    fn test_mask_token_multibyte_short() {
        // 9 bytes but only 3 characters; must not panic and must not
        // reveal anything.
        assert_eq!(mask_token("日本語"), "****");
    }

    #[test]
    fn test_mask_token_multibyte_long() {
        let masked = mask_token("日本語のアクセストークン");
        assert!(masked.starts_with("日本語の"));
        assert!(!masked.contains("トークン"));
        assert!(masked.contains('*'));
    }
}
