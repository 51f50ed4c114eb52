use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use diary_types::models::{DiaryEntry, User};

use crate::ids::{SECRET_CODE_ATTEMPTS, pick_unused_code, random_secret_code};
use crate::{DiaryStore, Result, StoreError};

impl DiaryStore {
    /// Create a user under a freshly drawn, unused secret code.
    pub async fn register(
        &self,
        name: String,
        email_address: String,
        date_of_birth: String,
    ) -> Result<User> {
        let mut users = self.users.write().await;

        let secret_code = pick_unused_code(|code| users.contains_key(code), random_secret_code)
            .ok_or(StoreError::SecretCodesExhausted(SECRET_CODE_ATTEMPTS))?;

        let user = User {
            id: Uuid::new_v4(),
            secret_code: secret_code.clone(),
            name,
            email_address,
            date_of_birth,
            diary_entries: BTreeMap::new(),
        };

        users.insert(secret_code, Arc::new(Mutex::new(user.clone())));
        info!("Registered user {} ({} total)", user.id, users.len());
        Ok(user)
    }

    /// Snapshot of the user holding `secret_code`.
    pub async fn get_user(&self, secret_code: &str) -> Result<User> {
        self.with_user(secret_code, |user| Ok(user.clone())).await
    }

    /// The user's diary entries dated within `year`/`month`, oldest first.
    pub async fn entries_in_month(
        &self,
        secret_code: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<DiaryEntry>> {
        self.with_user(secret_code, |user| Ok(user.entries_in_month(year, month)))
            .await
    }
}
