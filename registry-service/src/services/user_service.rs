// User Service
// Ordered in-memory registry of users with linear-scan lookups

use crate::error::{ServiceError, ServiceResult};
use crate::models::{User, UserPayload};
use tracing::debug;

/// Ordered collection of users.
///
/// Users are kept in insertion order; deletions compact the sequence. Ids come
/// from a counter that only moves forward, so an id freed by a deletion is never
/// handed out again. The service itself is not synchronized; callers that share
/// it across tasks wrap it in a lock.
#[derive(Debug)]
pub struct UserService {
    users: Vec<User>,
    next_id: u64,
}

impl UserService {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn create_user(&mut self, payload: UserPayload) -> User {
        let user = User::new(self.next_id, payload.username, payload.email);
        self.next_id += 1;
        self.users.push(user.clone());
        debug!(id = user.id, total = self.users.len(), "user created");
        user
    }

    pub fn get_user(&self, id: u64) -> ServiceResult<&User> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(ServiceError::NotFound(id))
    }

    pub fn update_user(&mut self, id: u64, payload: UserPayload) -> ServiceResult<User> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        user.apply(payload);
        debug!(id, "user updated");
        Ok(user.clone())
    }

    /// Remove the user with `id` and return the index it occupied.
    pub fn delete_user(&mut self, id: u64) -> ServiceResult<usize> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        self.users.remove(index);
        debug!(id, index, remaining = self.users.len(), "user deleted");
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
