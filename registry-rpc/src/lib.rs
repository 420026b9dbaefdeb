pub mod api;
pub mod error;
pub mod handlers;

pub use api::{HttpServer, ROUTES};
pub use error::{RpcError, RpcResult};
pub use handlers::UserHandler;

// Re-export types needed by clients
pub use registry_service::{User, UserPayload};
pub use registry_service;
