//! Session persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the "stay logged in" session file lives.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Path of the session JSON file
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidSessionPath);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
        }
    }
}

fn default_file_path() -> PathBuf {
    PathBuf::from("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_default_path() {
        let config = SessionConfig::default();
        assert_eq!(config.file_path, PathBuf::from("session.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_path() {
        let config = SessionConfig {
            file_path: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
