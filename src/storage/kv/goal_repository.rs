//! # Goal Repository
//!
//! Persists each identity's goal collection as a single JSON document in
//! the key-value surface, under the key `goaltracker-goals-{identity}`.
//!
//! ## Storage Format
//!
//! The value is the serde_json encoding of the goal vector in collection
//! order (most recently created first):
//!
//! ```json
//! [{"id":"goal::user_1_1700000000000","owner":"user_1","title":"Run 100km",
//!   "category":"fitness","targetValue":100.0,"currentValue":25.0, ...}]
//! ```
//!
//! ## Failure Behavior
//!
//! - Missing key: empty collection.
//! - Malformed payload: logged and treated as an empty collection, never
//!   propagated to the caller.
//! - Unavailable surface on save: logged and skipped, so the session
//!   degrades to in-memory-only instead of failing the mutation.

use log::{debug, warn};

use crate::domain::models::goal::Goal;
use crate::storage::traits::KvStore;

/// Repository storing one goal collection per identity.
#[derive(Debug, Clone)]
pub struct GoalRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> GoalRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Storage key for an identity's collection. Two distinct identities
    /// always map to distinct keys.
    fn goals_key(owner: &str) -> String {
        format!("goaltracker-goals-{}", owner)
    }

    /// Load the collection persisted for `owner`.
    ///
    /// Never fails: a missing key, an unreadable surface or a malformed
    /// payload all come back as an empty collection.
    pub fn load(&self, owner: &str) -> Vec<Goal> {
        let key = Self::goals_key(owner);

        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Persistence surface unavailable reading {}: {}", key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Goal>>(&raw) {
            Ok(goals) => {
                debug!("Loaded {} goals for {}", goals.len(), owner);
                goals
            }
            Err(e) => {
                warn!("Malformed goal collection under {}: {}. Treating as empty.", key, e);
                Vec::new()
            }
        }
    }

    /// Persist the full collection for `owner` (whole-value overwrite).
    ///
    /// A failing surface is logged and otherwise ignored; the in-memory
    /// collection stays authoritative for the rest of the session.
    pub fn save(&self, owner: &str, goals: &[Goal]) {
        let key = Self::goals_key(owner);

        let encoded = match serde_json::to_string(goals) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Failed to encode goal collection for {}: {}", owner, e);
                return;
            }
        };

        if let Err(e) = self.store.set(&key, &encoded) {
            warn!("Persistence surface unavailable writing {}: {}. Keeping in-memory only.", key, e);
            return;
        }
        debug!("Saved {} goals for {}", goals.len(), owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::goal::GoalCategory;
    use anyhow::anyhow;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::sync::Arc;

    use crate::storage::kv::memory::MemoryKvStore;

    /// Surface that refuses every operation, for degraded-mode coverage.
    struct UnavailableKvStore;

    impl KvStore for UnavailableKvStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow!("surface unavailable"))
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("surface unavailable"))
        }
    }

    fn sample_goal(owner: &str, title: &str) -> Goal {
        Goal {
            id: Goal::generate_id(owner, 1700000000000),
            owner: owner.to_string(),
            title: title.to_string(),
            description: "on the trainer".to_string(),
            category: GoalCategory::Fitness,
            target_value: 100.0,
            current_value: 40.0,
            unit: "km".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            color: "#EF4444".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn round_trip_preserves_every_field_and_the_order() {
        let repo = GoalRepository::new(MemoryKvStore::new());
        let goals = vec![sample_goal("user_1", "Newest"), sample_goal("user_1", "Oldest")];

        repo.save("user_1", &goals);
        assert_eq!(repo.load("user_1"), goals);
    }

    #[test]
    fn identities_never_observe_each_other() {
        let repo = GoalRepository::new(MemoryKvStore::new());
        repo.save("user_a", &[sample_goal("user_a", "A's goal")]);

        assert!(repo.load("user_b").is_empty());
        assert_eq!(repo.load("user_a").len(), 1);
    }

    #[test]
    fn missing_key_loads_as_empty() {
        let repo = GoalRepository::new(MemoryKvStore::new());
        assert!(repo.load("nobody").is_empty());
    }

    #[test]
    fn malformed_payload_loads_as_empty() {
        let store = Arc::new(MemoryKvStore::new());
        store.set("goaltracker-goals-user_1", "{not json").unwrap();

        let repo = GoalRepository::new(store);
        assert!(repo.load("user_1").is_empty());
    }

    #[test]
    fn unavailable_surface_degrades_instead_of_failing() {
        let repo = GoalRepository::new(UnavailableKvStore);
        assert!(repo.load("user_1").is_empty());
        // Must not panic or propagate.
        repo.save("user_1", &[sample_goal("user_1", "Unsaved")]);
    }
}
