pub mod error;
pub mod ids;
pub mod logs;
pub mod users;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use diary_types::models::User;

pub use error::{Result, StoreError};
use ids::IdGenerator;

type UserHandle = Arc<Mutex<User>>;

/// In-memory diary store keyed by secret code.
///
/// The map lock is only held to look up or insert a user; each
/// read-modify-write on a user's diary runs under that user's own mutex.
#[derive(Default)]
pub struct DiaryStore {
    users: RwLock<HashMap<String, UserHandle>>,
    ids: IdGenerator,
}

impl DiaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    async fn handle(&self, secret_code: &str) -> Result<UserHandle> {
        self.users
            .read()
            .await
            .get(secret_code)
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }

    /// Run `f` with exclusive access to one user's record.
    pub async fn with_user<F, T>(&self, secret_code: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut User) -> Result<T>,
    {
        let handle = self.handle(secret_code).await?;
        let mut user = handle.lock().await;
        f(&mut user)
    }
}
