//! Persistence seam for state that outlives a session.
//!
//! The session reads best score and unlocked thresholds at startup and writes
//! them back synchronously whenever they change. Concrete backends live in the
//! `water-2048-store` crate; [`MemoryStore`] is the in-process default.

use crate::error::StoreError;

pub trait ProgressStore {
    /// Best score across sessions; 0 if nothing was stored yet
    fn load_best(&self) -> Result<u32, StoreError>;

    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;

    /// Unlocked thresholds in ascending order; empty if nothing was stored yet
    fn load_unlocked(&self) -> Result<Vec<u32>, StoreError>;

    fn save_unlocked(&mut self, unlocked: &[u32]) -> Result<(), StoreError>;
}

impl<S: ProgressStore + ?Sized> ProgressStore for &mut S {
    fn load_best(&self) -> Result<u32, StoreError> {
        (**self).load_best()
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        (**self).save_best(best)
    }

    fn load_unlocked(&self) -> Result<Vec<u32>, StoreError> {
        (**self).load_unlocked()
    }

    fn save_unlocked(&mut self, unlocked: &[u32]) -> Result<(), StoreError> {
        (**self).save_unlocked(unlocked)
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for Box<S> {
    fn load_best(&self) -> Result<u32, StoreError> {
        (**self).load_best()
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        (**self).save_best(best)
    }

    fn load_unlocked(&self) -> Result<Vec<u32>, StoreError> {
        (**self).load_unlocked()
    }

    fn save_unlocked(&mut self, unlocked: &[u32]) -> Result<(), StoreError> {
        (**self).save_unlocked(unlocked)
    }
}

/// Volatile store for tests and headless play
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub best: u32,
    pub unlocked: Vec<u32>,
}

impl ProgressStore for MemoryStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        Ok(self.best)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        self.best = best;
        Ok(())
    }

    fn load_unlocked(&self) -> Result<Vec<u32>, StoreError> {
        Ok(self.unlocked.clone())
    }

    fn save_unlocked(&mut self, unlocked: &[u32]) -> Result<(), StoreError> {
        self.unlocked = unlocked.to_vec();
        Ok(())
    }
}
