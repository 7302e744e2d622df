use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::identity::errors::StoreError;
use crate::domain::identity::models::UserRecord;
use crate::domain::identity::ports::UserStore;

/// In-memory user table.
///
/// Loaded once at startup and read-only thereafter, so it can be shared
/// across request handlers without locking.
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    /// Build a store from user records, keyed by username.
    pub fn from_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        Self {
            users: records
                .into_iter()
                .map(|record| (record.username.clone(), record))
                .collect(),
        }
    }

    /// Load the seed table from a JSON file holding an array of records.
    ///
    /// # Errors
    /// * `Unavailable` - the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Unavailable(format!("cannot read user seed file {}: {}", path.display(), e))
        })?;

        let records: Vec<UserRecord> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Unavailable(format!("invalid user seed file: {}", e)))?;

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.get(username).cloned())
    }
}
