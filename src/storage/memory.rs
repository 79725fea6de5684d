use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::MarqueeError;
    use crate::model::Movie;

    /// A store whose writes are rejected, for exercising the non-fatal
    /// persistence-failure path. Reads still work so startup is unaffected.
    #[derive(Debug, Default)]
    pub struct RejectingStore {
        inner: InMemoryStore,
        reject_writes: bool,
    }

    impl RejectingStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reject_writes(mut self, reject: bool) -> Self {
            self.reject_writes = reject;
            self
        }
    }

    impl KeyValueStore for RejectingStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<()> {
            if self.reject_writes {
                return Err(MarqueeError::Storage("write rejected".to_string()));
            }
            self.inner.write(key, value)
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed a raw payload under a key, bypassing serialization. Useful for
        /// planting malformed data.
        pub fn with_payload(mut self, key: &str, payload: &str) -> Self {
            self.store.write(key, payload).unwrap();
            self
        }

        /// Seed a well-formed favorite set under a key.
        pub fn with_favorites(mut self, key: &str, movies: &[Movie]) -> Self {
            let payload = serde_json::to_string(movies).unwrap();
            self.store.write(key, &payload).unwrap();
            self
        }
    }
}
