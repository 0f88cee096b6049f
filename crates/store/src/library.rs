//! History and saved-prompt records on top of a [`KeyValueStore`].
//!
//! Each record is a JSON array of [`SavedPromptItem`] stored under a fixed
//! key. Read-modify-write cycles are serialized by an internal mutex so
//! concurrent callers never lose each other's entries.

use std::sync::Arc;

use tokio::sync::Mutex;

use promptsmith_core::history::{
    newest_id, push_history, remove_by_id, NewPromptItem, SavedPromptItem,
};
use promptsmith_core::types::HistoryId;

use crate::error::StoreError;
use crate::kv::{KeyValueStore, MemoryStore};

/// Key of the recent-generations record.
pub const HISTORY_KEY: &str = "promptHistory";

/// Key of the user-saved record.
pub const SAVED_KEY: &str = "savedPrompts";

pub struct PromptLibrary {
    kv: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl PromptLibrary {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// A library backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    // ---- history ----

    /// Recent generations, newest first.
    pub async fn history(&self) -> Result<Vec<SavedPromptItem>, StoreError> {
        self.load(HISTORY_KEY).await
    }

    /// Stamp and prepend a generation, evicting the oldest beyond the limit.
    pub async fn record_generation(
        &self,
        item: NewPromptItem,
    ) -> Result<SavedPromptItem, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load(HISTORY_KEY).await?;
        let stamped = item.stamp_now(newest_id(&items));
        push_history(&mut items, stamped.clone());
        self.store(HISTORY_KEY, &items).await?;

        tracing::debug!(id = stamped.id, len = items.len(), "Recorded generation in history");
        Ok(stamped)
    }

    /// Returns whether an entry was removed.
    pub async fn delete_history(&self, id: HistoryId) -> Result<bool, StoreError> {
        self.delete_from(HISTORY_KEY, id).await
    }

    /// Drop the whole history record.
    pub async fn clear_history(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.kv.remove(HISTORY_KEY).await?;
        tracing::debug!("Cleared history");
        Ok(())
    }

    // ---- saved ----

    /// Saved prompts, newest first.
    pub async fn saved(&self) -> Result<Vec<SavedPromptItem>, StoreError> {
        self.load(SAVED_KEY).await
    }

    /// Stamp and prepend a saved prompt. Saved items are never evicted.
    pub async fn save(&self, item: NewPromptItem) -> Result<SavedPromptItem, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load(SAVED_KEY).await?;
        let stamped = item.stamp_now(newest_id(&items));
        items.insert(0, stamped.clone());
        self.store(SAVED_KEY, &items).await?;

        tracing::debug!(id = stamped.id, title = %stamped.title, "Saved prompt");
        Ok(stamped)
    }

    pub async fn delete_saved(&self, id: HistoryId) -> Result<bool, StoreError> {
        self.delete_from(SAVED_KEY, id).await
    }

    // ---- private helpers ----

    async fn delete_from(&self, key: &str, id: HistoryId) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load(key).await?;
        let removed = remove_by_id(&mut items, id);
        if removed {
            self.store(key, &items).await?;
        }
        tracing::debug!(key, id, removed, "Deleted prompt record entry");
        Ok(removed)
    }

    /// Read a record. A missing key is an empty list; so is one that is not
    /// a JSON array. Entries are decoded one by one and an unreadable entry
    /// is logged and skipped, so it is dropped on the next write.
    async fn load(&self, key: &str) -> Result<Vec<SavedPromptItem>, StoreError> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(Vec::new());
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding unreadable prompt record");
                return Ok(Vec::new());
            }
        };

        let items = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(key, index, error = %e, "Skipping unreadable prompt entry");
                    None
                }
            })
            .collect();
        Ok(items)
    }

    async fn store(&self, key: &str, items: &[SavedPromptItem]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.kv.set(key, &json).await
    }
}
