//! Persistence backends for state that outlives a game.
//!
//! Two independent records are stored under an application namespace:
//!
//! | Key | Format |
//! |-----|--------|
//! | `<ns>:best` | plain integer string, e.g. `"2316"` |
//! | `<ns>:factsUnlocked` | JSON array of integers, e.g. `[256,512]` |
//!
//! [`KvProgressStore`] implements the core's
//! [`ProgressStore`](water_2048_core::ProgressStore) on top of any
//! [`KvBackend`]: an in-memory map ([`MemoryKv`]) or one file per key in a
//! directory ([`FileKv`]).
//!
//! # Example
//!
//! ```
//! use water_2048_core::ProgressStore;
//! use water_2048_store::{KvProgressStore, MemoryKv};
//!
//! let mut store = KvProgressStore::new(MemoryKv::default());
//! store.save_best(128).unwrap();
//! store.save_unlocked(&[256]).unwrap();
//!
//! assert_eq!(store.backend().value("water2048-demo:best"), Some("128"));
//! assert_eq!(store.load_unlocked().unwrap(), vec![256]);
//! ```

pub mod kv;
pub mod progress;

pub use water_2048_core as core;
pub use water_2048_types as types;

pub use kv::{FileKv, KvBackend, MemoryKv};
pub use progress::{KvProgressStore, DEFAULT_NAMESPACE};
