//! Content Store: origin-scoped persistence of JSON records.
//!
//! # Failure handling
//!
//! | Situation                    | Behaviour                                        |
//! |------------------------------|--------------------------------------------------|
//! | key absent                   | `get` returns `None`                             |
//! | stored JSON is corrupt       | warning logged, `get` returns `None`             |
//! | backend read fails           | warning logged, `get` returns `None`             |
//! | backend write fails          | error logged, store turns *degraded*             |
//!
//! A degraded store keeps every later write in a session overlay: reads see
//! the new values, nothing reaches the backend again. The page keeps working
//! from memory for the rest of the session.
//!
//! # Example
//!
//! ```ignore
//! let store = ContentStore::open(".lumi/storage");
//! let gallery: Gallery = store.load_or_seed();
//! store.put(&gallery);
//! ```

mod backend;
mod error;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use error::StoreError;

use crate::{
    content::{Content, StorageKey},
    log,
};
use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::HashMap,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

/// Typed JSON records over a raw [`Backend`].
pub struct ContentStore {
    backend: Box<dyn Backend>,
    /// Session-only values written after the backend failed.
    /// `None` marks a key removed during the session.
    overlay: RwLock<HashMap<StorageKey, Option<String>>>,
    degraded: AtomicBool,
}

impl ContentStore {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            overlay: RwLock::default(),
            degraded: AtomicBool::new(false),
        }
    }

    /// Store that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Store backed by one JSON file per key in `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(dir))
    }

    /// Whether a write failed and the store now runs from memory only.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }

    // ------------------------------------------------------------------------
    // Raw values
    // ------------------------------------------------------------------------

    /// Read the raw string under `key`.
    pub fn get_raw(&self, key: StorageKey) -> Option<String> {
        if let Some(value) = self.overlay.read().get(&key) {
            return value.clone();
        }

        match self.backend.read(key.as_str()) {
            Ok(value) => value,
            Err(err) => {
                log!("warn"; "reading `{key}` failed: {err}");
                None
            }
        }
    }

    /// Store a raw string under `key`, replacing any previous value.
    pub fn set_raw(&self, key: StorageKey, value: &str) {
        if !self.is_degraded() {
            match self.backend.write(key.as_str(), value) {
                Ok(()) => return,
                Err(err) => self.degrade(key, &err),
            }
        }
        self.overlay.write().insert(key, Some(value.to_owned()));
    }

    /// Remove `key`.
    pub fn remove(&self, key: StorageKey) {
        if !self.is_degraded() {
            match self.backend.remove(key.as_str()) {
                Ok(()) => {
                    self.overlay.write().remove(&key);
                    return;
                }
                Err(err) => self.degrade(key, &err),
            }
        }
        self.overlay.write().insert(key, None);
    }

    fn degrade(&self, key: StorageKey, err: &StoreError) {
        if !self.degraded.swap(true, Ordering::SeqCst) {
            log!("error"; "writing `{key}` failed: {err}");
            log!("store"; "changes are kept for this session only");
        }
    }

    // ------------------------------------------------------------------------
    // JSON records
    // ------------------------------------------------------------------------

    /// Read and decode the record under `key`.
    ///
    /// Corrupt JSON counts as absent.
    pub fn get<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log!("warn"; "stored `{key}` is not valid: {err}");
                None
            }
        }
    }

    /// Encode `value` and store it under `key`, overwriting the old record.
    pub fn set<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, &json),
            Err(err) => log!("error"; "encoding `{key}` failed: {}", StoreError::from(err)),
        }
    }

    /// Read a content record by its own key.
    pub fn load<C: Content>(&self) -> Option<C> {
        self.get(C::KEY)
    }

    /// Store a content record under its own key.
    pub fn put<C: Content>(&self, value: &C) {
        self.set(C::KEY, value);
    }

    /// Read a content record, writing and returning the seed when nothing
    /// usable is stored.
    pub fn load_or_seed<C: Content>(&self) -> C {
        match self.load::<C>() {
            Some(value) if !value.is_vacant() => value,
            _ => {
                let seed = C::seed();
                self.put(&seed);
                seed
            }
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("degraded", &self.is_degraded())
            .field("overlay_keys", &self.overlay.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AboutContent, ContactContent, Gallery, SeoContent};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Backend that shares its map with the test, to inspect or corrupt it.
    struct Shared(Arc<MemoryBackend>);

    impl Backend for Shared {
        fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.read(key)
        }
        fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.write(key, value)
        }
        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_round_trip_all_records() {
        let store = ContentStore::in_memory();

        let gallery = Gallery::seed();
        let about = AboutContent::seed();
        let contact = ContactContent::seed();
        let seo = SeoContent::seed();
        store.put(&gallery);
        store.put(&about);
        store.put(&contact);
        store.put(&seo);

        assert_eq!(store.load::<Gallery>(), Some(gallery));
        assert_eq!(store.load::<AboutContent>(), Some(about));
        assert_eq!(store.load::<ContactContent>(), Some(contact));
        assert_eq!(store.load::<SeoContent>(), Some(seo));
    }

    #[test]
    fn test_absent_is_none() {
        let store = ContentStore::in_memory();
        assert_eq!(store.load::<AboutContent>(), None);
        assert_eq!(store.get_raw(StorageKey::GaMeasurementId), None);
    }

    #[test]
    fn test_corrupt_json_is_none_and_reseeds() {
        let backend = Arc::new(MemoryBackend::new());
        backend.write("aboutContent", "{\"title\": ").unwrap();
        let store = ContentStore::new(Shared(Arc::clone(&backend)));

        assert_eq!(store.load::<AboutContent>(), None);

        let about: AboutContent = store.load_or_seed();
        assert_eq!(about, AboutContent::seed());
        // The seed replaced the corrupt blob
        let raw = backend.read("aboutContent").unwrap().unwrap();
        assert!(serde_json::from_str::<AboutContent>(&raw).is_ok());
    }

    #[test]
    fn test_empty_gallery_reseeds() {
        let store = ContentStore::in_memory();
        store.set_raw(StorageKey::GalleryItems, "[]");

        let gallery: Gallery = store.load_or_seed();
        assert_eq!(gallery.len(), 4);
    }

    #[test]
    fn test_load_or_seed_keeps_stored_value() {
        let store = ContentStore::in_memory();
        let mut about = AboutContent::seed();
        about.title = "Wir".into();
        store.put(&about);

        assert_eq!(store.load_or_seed::<AboutContent>().title, "Wir");
    }

    #[test]
    fn test_quota_exceeded_degrades_to_memory() {
        let store = ContentStore::new(MemoryBackend::with_quota(16));
        assert!(!store.is_degraded());

        store.set_raw(StorageKey::MetaPixelId, "1234");
        assert!(!store.is_degraded());

        let gallery = Gallery::seed();
        store.put(&gallery);
        assert!(store.is_degraded());
        // Still readable for the rest of the session
        assert_eq!(store.load::<Gallery>(), Some(gallery));

        // Later writes stay in memory too, even small ones
        store.set_raw(StorageKey::MetaPixelId, "99");
        assert_eq!(store.get_raw(StorageKey::MetaPixelId).as_deref(), Some("99"));
    }

    #[test]
    fn test_remove_in_degraded_mode_hides_backend_value() {
        let backend = Arc::new(MemoryBackend::with_quota(8));
        backend.write("ga_measurement_id", "G-1").unwrap();
        let store = ContentStore::new(Shared(Arc::clone(&backend)));

        store.set_raw(StorageKey::AboutContent, "0123456789");
        assert!(store.is_degraded());

        store.remove(StorageKey::GaMeasurementId);
        assert_eq!(store.get_raw(StorageKey::GaMeasurementId), None);
        assert_eq!(backend.read("ga_measurement_id").unwrap().as_deref(), Some("G-1"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let mut contact = ContactContent::seed();
        contact.phone = "+49 1".into();

        ContentStore::open(dir.path()).put(&contact);
        let reopened = ContentStore::open(dir.path());

        assert_eq!(reopened.load::<ContactContent>(), Some(contact));
    }
}
