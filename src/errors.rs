//! # Error Handling
//!
//! User-friendly error display functions for the Lagoon CLI. The API client
//! itself never prints; commands route its classified errors through these
//! helpers.

use colored::Colorize;

use crate::api::ApiError;

/// Display a network error with helpful suggestions
pub fn display_network_error(message: &str) {
    eprintln!("{} Network error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • No internet connection");
    eprintln!("  • The service is unreachable");
    eprintln!("  • Firewall blocking the connection");
    eprintln!();
    eprintln!(
        "{} Check your connection and try again.",
        "Tip:".cyan().bold()
    );
}

/// Display an authentication error with helpful suggestions
pub fn display_auth_error(message: &str) {
    eprintln!("{} Authentication error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • Access token is invalid or expired");
    eprintln!("  • You haven't logged in yet");
    eprintln!();
    eprintln!(
        "{} Run `lagoon login --token <TOKEN>` to authenticate.",
        "Tip:".cyan().bold()
    );
}

/// Display a configuration error with helpful suggestions
pub fn display_config_error(message: &str) {
    eprintln!("{} Configuration error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • LAGOON_CLIENT_ID / LAGOON_CLIENT_SECRET are not set");
    eprintln!("  • Credential file is missing or corrupted");
    eprintln!();
    eprintln!(
        "{} Check your environment and run `lagoon status`.",
        "Tip:".cyan().bold()
    );
}

/// Display a remote rejection (failing HTTP status)
pub fn display_remote_error(status_line: &str) {
    eprintln!("{} The service rejected the request: {}", "✗".red().bold(), status_line);
}

/// Display a generic error
pub fn display_error(message: &str) {
    eprintln!("{} Error: {}", "✗".red().bold(), message);
}

/// Display a success message
pub fn display_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Render a classified API error with the most specific helper.
pub fn render_api_error(error: &ApiError) {
    match error {
        ApiError::Transport { message } => display_network_error(message),
        ApiError::RemoteRejection {
            status,
            status_line,
        } => {
            if *status == 401 || *status == 403 {
                display_auth_error(status_line);
            } else {
                display_remote_error(status_line);
            }
        }
        other => display_error(&other.to_string()),
    }
}
