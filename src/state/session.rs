/// Session-scoped storage for the uploaded photo
///
/// The upload screen writes the encoded photo here on submit and the
/// results screen reads it back when it mounts. Screens never reach for
/// a global: they are handed an `ImageSlot` when they are constructed.
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Fixed key of the uploaded-photo slot
pub const UPLOADED_IMAGE_KEY: &str = "uploadedImage";

/// A single string slot holding one encoded image
pub trait ImageSlot {
    /// Store the encoded image, replacing whatever was there
    fn put(&self, encoded_image: String);

    /// Read the encoded image back, if one was ever stored
    fn get(&self) -> Option<String>;
}

/// How screens hold the slot
pub type SharedImageSlot = Arc<dyn ImageSlot + Send + Sync>;

/// String key/value store that lives as long as the app session.
///
/// Cloning is cheap and every clone sees the same entries.
#[derive(Debug, Clone, Default)]
pub struct SessionStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: &str, value: String) {
        // Entries stay whole even if a writer panicked
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value);
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }
}

/// The uploaded-photo slot, backed by session storage
#[derive(Debug, Clone, Default)]
pub struct SessionImageStore {
    storage: SessionStorage,
}

impl SessionImageStore {
    pub fn new(storage: SessionStorage) -> Self {
        Self { storage }
    }
}

impl ImageSlot for SessionImageStore {
    fn put(&self, encoded_image: String) {
        debug!(key = UPLOADED_IMAGE_KEY, bytes = encoded_image.len(), "storing uploaded image");
        self.storage.set_item(UPLOADED_IMAGE_KEY, encoded_image);
    }

    fn get(&self) -> Option<String> {
        self.storage.get_item(UPLOADED_IMAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_reads_none() {
        let store = SessionImageStore::default();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_put_then_get() {
        let store = SessionImageStore::default();
        store.put("X".to_string());
        assert_eq!(store.get().as_deref(), Some("X"));
        // Reading does not consume the value
        assert_eq!(store.get().as_deref(), Some("X"));
    }

    #[test]
    fn test_last_write_wins() {
        let store = SessionImageStore::default();
        store.put("first".to_string());
        store.put("second".to_string());
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let storage = SessionStorage::new();
        let writer = SessionImageStore::new(storage.clone());
        let reader = SessionImageStore::new(storage.clone());

        writer.put("data:image/png;base64,AAAA".to_string());

        assert_eq!(reader.get().as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(
            storage.get_item(UPLOADED_IMAGE_KEY).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_other_keys_do_not_touch_the_slot() {
        let storage = SessionStorage::new();
        let store = SessionImageStore::new(storage.clone());

        storage.set_item("theme", "dark".to_string());

        assert_eq!(store.get(), None);
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
    }
}
