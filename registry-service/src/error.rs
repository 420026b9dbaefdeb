// Registry error types

use std::io;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("user with id {0} not found")]
    NotFound(u64),
}

/// Errors raised while loading the service configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
