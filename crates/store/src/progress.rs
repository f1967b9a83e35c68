//! [`ProgressStore`] over a namespaced key-value backend.

use log::debug;

use crate::core::{ProgressStore, StoreError};
use crate::kv::KvBackend;

pub const DEFAULT_NAMESPACE: &str = "water2048-demo";

#[derive(Debug, Clone)]
pub struct KvProgressStore<B: KvBackend> {
    backend: B,
    best_key: String,
    unlocked_key: String,
}

impl<B: KvBackend> KvProgressStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_namespace(backend, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(backend: B, namespace: &str) -> Self {
        Self {
            backend,
            best_key: format!("{}:best", namespace),
            unlocked_key: format!("{}:factsUnlocked", namespace),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KvBackend> ProgressStore for KvProgressStore<B> {
    fn load_best(&self) -> Result<u32, StoreError> {
        let Some(raw) = self.backend.get(&self.best_key)? else {
            return Ok(0);
        };
        raw.trim().parse().map_err(|e| StoreError::Malformed {
            key: self.best_key.clone(),
            reason: format!("{}: {:?}", e, raw),
        })
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        debug!("persist {} = {}", self.best_key, best);
        self.backend.set(&self.best_key, &best.to_string())
    }

    fn load_unlocked(&self) -> Result<Vec<u32>, StoreError> {
        let Some(raw) = self.backend.get(&self.unlocked_key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            key: self.unlocked_key.clone(),
            reason: e.to_string(),
        })
    }

    fn save_unlocked(&mut self, unlocked: &[u32]) -> Result<(), StoreError> {
        let json = serde_json::to_string(unlocked).map_err(|e| StoreError::Malformed {
            key: self.unlocked_key.clone(),
            reason: e.to_string(),
        })?;
        debug!("persist {} = {}", self.unlocked_key, json);
        self.backend.set(&self.unlocked_key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;

    #[test]
    fn missing_records_load_as_defaults() {
        let store = KvProgressStore::new(MemoryKv::default());
        assert_eq!(store.load_best().unwrap(), 0);
        assert!(store.load_unlocked().unwrap().is_empty());
    }

    #[test]
    fn formats_match_the_documented_layout() {
        let mut store = KvProgressStore::with_namespace(MemoryKv::default(), "demo");
        store.save_best(2316).unwrap();
        store.save_unlocked(&[256, 512]).unwrap();

        assert_eq!(store.backend().value("demo:best"), Some("2316"));
        assert_eq!(store.backend().value("demo:factsUnlocked"), Some("[256,512]"));
    }

    #[test]
    fn malformed_records_are_errors() {
        let mut kv = MemoryKv::default();
        kv.insert("demo:best", "lots");
        kv.insert("demo:factsUnlocked", "{not json");
        let store = KvProgressStore::with_namespace(kv, "demo");

        assert!(matches!(store.load_best(), Err(StoreError::Malformed { .. })));
        assert!(matches!(store.load_unlocked(), Err(StoreError::Malformed { .. })));
    }
}
