// Service configuration
// Defaults, optionally overridden by a YAML file and then by command-line flags

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8008";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Socket address the HTTP server binds to
    pub bind_address: String,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load a config from a YAML file. Keys missing from the file keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn with_bind_address(mut self, bind_address: Option<String>) -> Self {
        if let Some(addr) = bind_address {
            self.bind_address = addr;
        }
        self
    }

    pub fn with_log_level(mut self, log_level: Option<String>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8008");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = RegistryConfig::parse("bind_address: 127.0.0.1:9000\n").unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(RegistryConfig::parse("").unwrap(), RegistryConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(RegistryConfig::parse("port: 8008\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bind_address: 127.0.0.1:18008").unwrap();
        writeln!(file, "log_level: debug").unwrap();

        let config = RegistryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:18008");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_from_missing_file() {
        let err = RegistryConfig::from_file("/nonexistent/registry.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bind_address: [1, 2").unwrap();

        let err = RegistryConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_cli_overrides() {
        let config = RegistryConfig::default()
            .with_bind_address(Some("127.0.0.1:1".to_string()))
            .with_log_level(None);
        assert_eq!(config.bind_address, "127.0.0.1:1");
        assert_eq!(config.log_level, "info");
    }
}
