// Registry Service Library
// In-memory user registry and its configuration

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::RegistryConfig;
pub use error::{ConfigError, ServiceError, ServiceResult};
pub use models::{User, UserPayload};
pub use services::UserService;
