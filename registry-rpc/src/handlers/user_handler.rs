use crate::error::RpcResult;
use registry_service::{User, UserPayload, UserService};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared, lock-guarded handle to the registry.
///
/// Clones share the same registry. Lookups take the read lock; every mutation
/// holds the write lock for its whole scan, so concurrent creates never race on
/// id assignment.
#[derive(Debug, Clone, Default)]
pub struct UserHandler {
    service: Arc<RwLock<UserService>>,
}

impl UserHandler {
    pub fn new() -> Self {
        Self::with_service(UserService::new())
    }

    pub fn with_service(service: UserService) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
        }
    }

    pub async fn list_users(&self) -> Vec<User> {
        self.service.read().await.list_users().to_vec()
    }

    pub async fn create_user(&self, payload: UserPayload) -> User {
        self.service.write().await.create_user(payload)
    }

    pub async fn get_user(&self, id: u64) -> RpcResult<User> {
        Ok(self.service.read().await.get_user(id)?.clone())
    }

    pub async fn update_user(&self, id: u64, payload: UserPayload) -> RpcResult<User> {
        Ok(self.service.write().await.update_user(id, payload)?)
    }

    /// Returns the index the deleted user occupied.
    pub async fn delete_user(&self, id: u64) -> RpcResult<usize> {
        Ok(self.service.write().await.delete_user(id)?)
    }

    pub async fn user_count(&self) -> usize {
        self.service.read().await.len()
    }
}
