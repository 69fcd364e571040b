//! # Exit Codes
//!
//! Standard exit codes for the Lagoon CLI.
//!
//! These codes follow common Unix conventions and provide meaningful
//! feedback to scripts and CI/CD pipelines.

use crate::api::ApiError;

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// General error (unspecified)
pub const EXIT_ERROR: i32 = 1;

/// Configuration error (missing or invalid config)
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Authentication error (invalid or expired credentials)
pub const EXIT_AUTH_ERROR: i32 = 3;

/// Network error (connection failed, timeout, etc.)
pub const EXIT_NETWORK_ERROR: i32 = 4;

/// Remote rejection (failing HTTP status other than 401/403)
pub const EXIT_REMOTE_ERROR: i32 = 5;

/// Map a classified API error to an exit code.
pub fn exit_code_for(error: &ApiError) -> i32 {
    match error {
        ApiError::Transport { .. } => EXIT_NETWORK_ERROR,
        ApiError::RemoteRejection { status, .. } if *status == 401 || *status == 403 => {
            EXIT_AUTH_ERROR
        }
        ApiError::RemoteRejection { .. } => EXIT_REMOTE_ERROR,
        _ => EXIT_ERROR,
    }
}
