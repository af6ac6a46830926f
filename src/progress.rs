//! Unlock progress
//!
//! Storage is owned by the host application, which passes an implementation
//! of `ProgressStore` around instead of reaching for a global. Level 1 is
//! always unlocked and the highest level only ever goes up.

use serde::{Deserialize, Serialize};

use crate::scoring::AttemptOutcome;

pub trait ProgressStore {
    fn highest_unlocked_level(&self) -> u32;

    /// Raise the highest unlocked level to `level_index` (never lowers it)
    fn mark_level_unlocked(&mut self, level_index: u32);

    fn is_unlocked(&self, level_index: u32) -> bool {
        level_index >= 1 && level_index <= self.highest_unlocked_level()
    }
}

/// Apply a finished attempt to the store. Returns true if it unlocked a level.
pub fn record_outcome(store: &mut dyn ProgressStore, outcome: &AttemptOutcome) -> bool {
    match *outcome {
        AttemptOutcome::Won { unlocked_level, .. } => {
            let before = store.highest_unlocked_level();
            store.mark_level_unlocked(unlocked_level);
            store.highest_unlocked_level() > before
        }
        AttemptOutcome::InProgress | AttemptOutcome::TimedOut => false,
    }
}

/// In-memory store, serializable so a host can persist it as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryProgress {
    highest_level: u32,
}

impl Default for MemoryProgress {
    fn default() -> Self {
        Self { highest_level: 1 }
    }
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse stored progress, falling back to a fresh store on bad data
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<MemoryProgress>(json) {
            Ok(mut progress) => {
                progress.highest_level = progress.highest_level.max(1);
                log::info!("Loaded progress: level {} unlocked", progress.highest_level);
                progress
            }
            Err(e) => {
                log::warn!("Discarding unreadable progress ({}), starting fresh", e);
                Self::new()
            }
        }
    }
}

impl ProgressStore for MemoryProgress {
    fn highest_unlocked_level(&self) -> u32 {
        self.highest_level
    }

    fn mark_level_unlocked(&mut self, level_index: u32) {
        if level_index > self.highest_level {
            self.highest_level = level_index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store() {
        let store = MemoryProgress::new();
        assert_eq!(store.highest_unlocked_level(), 1);
        assert!(store.is_unlocked(1));
        assert!(!store.is_unlocked(2));
        assert!(!store.is_unlocked(0));
    }

    #[test]
    fn test_unlock_never_lowers() {
        let mut store = MemoryProgress::new();
        store.mark_level_unlocked(5);
        store.mark_level_unlocked(3);
        assert_eq!(store.highest_unlocked_level(), 5);
        assert!(store.is_unlocked(4));
    }

    #[test]
    fn test_record_outcome() {
        let mut store = MemoryProgress::new();
        assert!(record_outcome(
            &mut store,
            &AttemptOutcome::Won {
                score: 10,
                unlocked_level: 2,
            }
        ));
        assert!(!record_outcome(&mut store, &AttemptOutcome::TimedOut));
        // Replaying an earlier level unlocks nothing new
        assert!(!record_outcome(
            &mut store,
            &AttemptOutcome::Won {
                score: 10,
                unlocked_level: 2,
            }
        ));
        assert_eq!(store.highest_unlocked_level(), 2);
    }

    #[test]
    fn test_json_persistence() {
        let mut store = MemoryProgress::new();
        store.mark_level_unlocked(7);
        let json = store.to_json().unwrap();
        assert_eq!(MemoryProgress::from_json(&json), store);

        assert_eq!(MemoryProgress::from_json("garbage"), MemoryProgress::new());
        assert_eq!(
            MemoryProgress::from_json(r#"{"highest_level":0}"#).highest_unlocked_level(),
            1
        );
    }
}
