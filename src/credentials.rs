//! # Credential Store
//!
//! Persists the bearer access token across invocations as a small JSON
//! document at the configured credential file path. Relative paths resolve
//! against the working directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Stored credential for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer access token
    pub access_token: String,
}

impl Credential {
    /// Create a credential from an access token.
    pub fn new(access_token: String) -> Self {
        Self { access_token }
    }

    /// Load the credential from a file.
    ///
    /// # Returns
    ///
    /// * `Ok(Credential)` - Successfully loaded
    /// * `Err(_)` - File not found or invalid JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read credential file: {}", path.display()))?;
        let credential: Credential = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse credential file: {}", path.display()))?;
        Ok(credential)
    }

    /// Save the credential to a file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create credential directory: {}", parent.display())
                })?;
            }
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize credential")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write credential file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credential.json");

        let credential = Credential::new("tok_abc123".to_string());
        credential.save(&path).unwrap();

        let loaded = Credential::load(&path).unwrap();
        assert_eq!(loaded.access_token, "tok_abc123");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("credential.json");

        Credential::new("tok".to_string()).save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = Credential::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read credential file"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credential.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Credential::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse credential file"));
    }

    #[test]
    fn test_serialized_field_name() {
        let json = serde_json::to_string(&Credential::new("tok".to_string())).unwrap();
        assert!(json.contains("\"access_token\":\"tok\""));
    }
}
