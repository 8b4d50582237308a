//! Identity-scoped session over the goal service.
//!
//! The identity provider is an external collaborator; this module only
//! reacts to its events. Signing in loads that identity's collection,
//! signing out tears the view down so the previous identity's goals are
//! no longer visible. All mutations run synchronously to completion, so
//! the persisted collection always reflects the latest accepted mutation
//! before the next event is handled.

use chrono::{DateTime, Utc};
use log::info;

use crate::domain::commands::goal::{CreateGoalCommand, DeleteGoalCommand, UpdateProgressCommand};
use crate::domain::goal_service::GoalService;
use crate::domain::models::goal::{Goal, GoalDraft, GoalValidationError};
use crate::domain::presenter::{self, DashboardCounts};
use crate::storage::traits::KvStore;

/// Event from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityEvent {
    SignedIn(String),
    SignedOut,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No user is signed in")]
    NotSignedIn,
    #[error(transparent)]
    Validation(#[from] GoalValidationError),
}

#[derive(Debug, Clone)]
struct ActiveIdentity {
    identity: String,
    goals: Vec<Goal>,
}

/// Per-client session: the goal service plus the view of the currently
/// signed-in identity's collection.
#[derive(Debug)]
pub struct Session<S: KvStore> {
    goal_service: GoalService<S>,
    active: Option<ActiveIdentity>,
}

impl<S: KvStore> Session<S> {
    /// Create a signed-out session over a key-value surface.
    pub fn new(store: S) -> Self {
        Self {
            goal_service: GoalService::new(store),
            active: None,
        }
    }

    /// React to an identity change. Signing in (including switching
    /// users) replaces the whole visible collection; signing out clears
    /// it.
    pub fn handle_identity(&mut self, event: IdentityEvent) {
        match event {
            IdentityEvent::SignedIn(identity) => {
                let goals = self.goal_service.list_goals(&identity);
                info!("Signed in as {}; loaded {} goals", identity, goals.len());
                self.active = Some(ActiveIdentity { identity, goals });
            }
            IdentityEvent::SignedOut => {
                if let Some(active) = self.active.take() {
                    info!("Signed out {}; goal view cleared", active.identity);
                }
            }
        }
    }

    /// Identity of the signed-in user, if any.
    pub fn identity(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.identity.as_str())
    }

    /// Current collection snapshot; empty while signed out.
    pub fn goals(&self) -> &[Goal] {
        self.active.as_ref().map(|a| a.goals.as_slice()).unwrap_or(&[])
    }

    /// Dashboard counts for the snapshot at instant `now`.
    pub fn counts_at(&self, now: DateTime<Utc>) -> DashboardCounts {
        presenter::aggregate_counts_at(self.goals(), now)
    }

    /// Dashboard counts against the wall clock.
    pub fn counts(&self) -> DashboardCounts {
        presenter::aggregate_counts(self.goals())
    }

    /// Create a goal for the signed-in identity from a form draft.
    pub fn create_goal(&mut self, draft: GoalDraft) -> Result<Goal, SessionError> {
        let active = self.active.as_mut().ok_or(SessionError::NotSignedIn)?;
        let goal = self.goal_service.create_goal(CreateGoalCommand {
            owner: active.identity.clone(),
            draft,
        })?;
        active.goals = self.goal_service.list_goals(&active.identity);
        Ok(goal)
    }

    /// Update a goal's progress. `None` while signed out or when the id
    /// is not in the signed-in identity's collection.
    pub fn update_progress(&mut self, goal_id: &str, new_value: f64) -> Option<Goal> {
        let active = self.active.as_mut()?;
        let updated = self.goal_service.update_progress(UpdateProgressCommand {
            owner: active.identity.clone(),
            goal_id: goal_id.to_string(),
            new_value,
        })?;
        active.goals = self.goal_service.list_goals(&active.identity);
        Some(updated)
    }

    /// Delete a goal by id. `false` while signed out or for an unknown id.
    pub fn delete_goal(&mut self, goal_id: &str) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let removed = self.goal_service.delete_goal(DeleteGoalCommand {
            owner: active.identity.clone(),
            goal_id: goal_id.to_string(),
        });
        if removed {
            active.goals = self.goal_service.list_goals(&active.identity);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::goal::GoalCategory;
    use crate::storage::kv::MemoryKvStore;
    use std::sync::Arc;

    fn draft(title: &str) -> GoalDraft {
        GoalDraft {
            title: title.to_string(),
            category: GoalCategory::Health,
            target_value: "10".to_string(),
            unit: "kg".to_string(),
            ..GoalDraft::default()
        }
    }

    #[test]
    fn signed_out_session_shows_nothing_and_refuses_mutations() {
        let mut session = Session::new(Arc::new(MemoryKvStore::new()));

        assert!(session.goals().is_empty());
        assert_eq!(session.counts().total, 0);
        assert_eq!(session.create_goal(draft("Lose 10kg")), Err(SessionError::NotSignedIn));
        assert!(session.update_progress("goal::user_1_0", 5.0).is_none());
        assert!(!session.delete_goal("goal::user_1_0"));
    }

    #[test]
    fn sign_in_loads_and_sign_out_clears_the_view() {
        let store = Arc::new(MemoryKvStore::new());
        let mut session = Session::new(store.clone());

        session.handle_identity(IdentityEvent::SignedIn("user_1".to_string()));
        session.create_goal(draft("Lose 10kg")).expect("Failed to create goal");
        assert_eq!(session.goals().len(), 1);

        session.handle_identity(IdentityEvent::SignedOut);
        assert!(session.identity().is_none());
        assert!(session.goals().is_empty());

        // Signing back in restores the persisted collection.
        session.handle_identity(IdentityEvent::SignedIn("user_1".to_string()));
        assert_eq!(session.goals().len(), 1);
        assert_eq!(session.goals()[0].title, "Lose 10kg");
    }

    #[test]
    fn switching_identity_swaps_the_entire_collection() {
        let store = Arc::new(MemoryKvStore::new());
        let mut session = Session::new(store);

        session.handle_identity(IdentityEvent::SignedIn("alice".to_string()));
        session.create_goal(draft("Alice's goal")).expect("Failed to create goal");

        session.handle_identity(IdentityEvent::SignedIn("bob".to_string()));
        assert_eq!(session.identity(), Some("bob"));
        assert!(session.goals().is_empty());

        session.create_goal(draft("Bob's goal")).expect("Failed to create goal");
        session.handle_identity(IdentityEvent::SignedIn("alice".to_string()));

        let titles: Vec<&str> = session.goals().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Alice's goal"]);
    }

    #[test]
    fn mutations_refresh_the_cached_snapshot() {
        let mut session = Session::new(Arc::new(MemoryKvStore::new()));
        session.handle_identity(IdentityEvent::SignedIn("user_1".to_string()));

        let goal = session.create_goal(draft("Lose 10kg")).expect("Failed to create goal");
        session.update_progress(&goal.id, 25.0).expect("Goal should exist");
        assert_eq!(session.goals()[0].current_value, 10.0); // clamped to target

        assert!(session.delete_goal(&goal.id));
        assert!(session.goals().is_empty());
        assert_eq!(session.counts().total, 0);
    }

    #[test]
    fn validation_failures_leave_the_view_unchanged() {
        let mut session = Session::new(Arc::new(MemoryKvStore::new()));
        session.handle_identity(IdentityEvent::SignedIn("user_1".to_string()));

        let result = session.create_goal(GoalDraft {
            target_value: "abc".to_string(),
            ..draft("Bad target")
        });
        assert!(matches!(
            result,
            Err(SessionError::Validation(GoalValidationError::InvalidTargetValue))
        ));
        assert!(session.goals().is_empty());
    }
}
