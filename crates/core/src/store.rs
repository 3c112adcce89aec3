//! Best-score persistence capability
//!
//! The session takes the store as an injected trait object so the core has
//! no ambient global state. Load defaults to 0 when nothing is persisted;
//! save is best-effort (a failed write never aborts a game).

/// Persisted best-score access.
pub trait BestScoreStore {
    /// Load the persisted best score, 0 when absent or unreadable.
    fn load(&mut self) -> u32;

    /// Persist a new best score.
    fn save(&mut self, best: u32);
}

/// In-memory store for tests and storeless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u32,
    saves: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
        self.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(), 0);

        store.save(1234);
        assert_eq!(store.load(), 1234);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_memory_store_seeded() {
        let mut store = MemoryStore::new(500);
        assert_eq!(store.load(), 500);
        assert_eq!(store.save_count(), 0);
    }
}
