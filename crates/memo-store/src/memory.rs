//! In-memory attribute store (process lifetime only).

use memo_types::{AttributeBag, AttributeStore, AttributeStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory implementation of AttributeStore. Used by tests and local runs;
/// memos do not survive a restart.
pub struct InMemoryAttributeStore {
    bags: RwLock<HashMap<String, AttributeBag>>,
}

impl InMemoryAttributeStore {
    pub fn new() -> Self {
        Self {
            bags: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AttributeStore for InMemoryAttributeStore {
    async fn load(&self, user_id: &str) -> Result<AttributeBag, AttributeStoreError> {
        let guard = self.bags.read().await;
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }

    async fn save(&self, user_id: &str, bag: &AttributeBag) -> Result<(), AttributeStoreError> {
        let mut guard = self.bags.write().await;
        guard.insert(user_id.to_string(), bag.clone());
        Ok(())
    }
}
