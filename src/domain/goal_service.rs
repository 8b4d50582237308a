//! Goal service domain logic for the goal tracker.
//!
//! This module contains the core business logic for goal management:
//! validating creation drafts, clamping progress updates, deleting goals
//! and keeping each identity's persisted collection consistent with every
//! mutation.
//!
//! ## Business Rules
//!
//! - A draft without a title or with a non-positive/non-numeric target is
//!   rejected whole; no partial goal is ever persisted.
//! - `current_value` stays within `[0, target_value]` through any sequence
//!   of progress updates.
//! - New goals are prepended (most recent first); deletion removes by id
//!   without reordering the remainder.
//! - `target_value`, `title`, `category` and the dates are immutable after
//!   creation; the color is frozen from the category style.

use chrono::Utc;
use log::{debug, info, warn};

use crate::domain::commands::goal::{CreateGoalCommand, DeleteGoalCommand, UpdateProgressCommand};
use crate::domain::models::goal::{Goal, GoalValidationError};
use crate::storage::kv::GoalRepository;
use crate::storage::traits::KvStore;

/// Service owning the goal collection operations for any identity.
///
/// Stateless over the repository: every operation loads the identity's
/// collection, applies the mutation and persists the result before
/// returning, so storage always reflects the latest accepted mutation.
#[derive(Debug, Clone)]
pub struct GoalService<S: KvStore> {
    goal_repository: GoalRepository<S>,
}

impl<S: KvStore> GoalService<S> {
    /// Create a new GoalService over a key-value surface.
    pub fn new(store: S) -> Self {
        Self {
            goal_repository: GoalRepository::new(store),
        }
    }

    /// The collection persisted for `owner`, most recently created first.
    pub fn list_goals(&self, owner: &str) -> Vec<Goal> {
        self.goal_repository.load(owner)
    }

    /// Validate a draft and create a goal from it.
    ///
    /// On any validation failure the persisted collection is left
    /// untouched.
    pub fn create_goal(&self, command: CreateGoalCommand) -> Result<Goal, GoalValidationError> {
        info!("Creating goal for {}: {:?}", command.owner, command.draft.title);

        let draft = command.draft;

        let title = draft.title.trim();
        if title.is_empty() {
            return Err(GoalValidationError::EmptyTitle);
        }

        let target_value = draft
            .target_value
            .trim()
            .parse::<f64>()
            .map_err(|_| GoalValidationError::InvalidTargetValue)?;
        if !target_value.is_finite() || target_value <= 0.0 {
            return Err(GoalValidationError::InvalidTargetValue);
        }

        let current_value = if draft.current_value.trim().is_empty() {
            0.0
        } else {
            let value = draft
                .current_value
                .trim()
                .parse::<f64>()
                .map_err(|_| GoalValidationError::InvalidCurrentValue)?;
            if !value.is_finite() || value < 0.0 {
                return Err(GoalValidationError::InvalidCurrentValue);
            }
            value
        };

        let now = Utc::now();
        let mut goals = self.goal_repository.load(&command.owner);

        // Epoch millis distinguish creations; bump on a same-millisecond
        // collision so ids stay unique within the collection.
        let mut millis = now.timestamp_millis() as u64;
        while goals.iter().any(|g| g.id == Goal::generate_id(&command.owner, millis)) {
            millis += 1;
        }

        let goal = Goal {
            id: Goal::generate_id(&command.owner, millis),
            owner: command.owner.clone(),
            title: title.to_string(),
            description: draft.description,
            category: draft.category,
            target_value,
            current_value: current_value.min(target_value),
            unit: draft.unit,
            start_date: now.date_naive(),
            end_date: draft.end_date,
            color: draft.category.style().hex.to_string(),
            created_at: now,
        };

        goals.insert(0, goal.clone());
        self.goal_repository.save(&command.owner, &goals);

        info!("Created goal {} for {}", goal.id, goal.owner);
        Ok(goal)
    }

    /// Set a goal's progress, clamped to `[0, target_value]`.
    ///
    /// A non-finite value is ignored and the goal returned unchanged. An
    /// id absent from the owner's collection yields `None` without
    /// touching storage.
    pub fn update_progress(&self, command: UpdateProgressCommand) -> Option<Goal> {
        if !command.new_value.is_finite() {
            warn!(
                "Ignoring non-finite progress update for goal {}",
                command.goal_id
            );
            return self
                .goal_repository
                .load(&command.owner)
                .into_iter()
                .find(|g| g.id == command.goal_id);
        }

        let mut goals = self.goal_repository.load(&command.owner);
        let goal = goals.iter_mut().find(|g| g.id == command.goal_id)?;

        goal.current_value = command.new_value.clamp(0.0, goal.target_value);
        let updated = goal.clone();

        self.goal_repository.save(&command.owner, &goals);

        info!(
            "Updated progress of goal {} to {}/{}",
            updated.id, updated.current_value, updated.target_value
        );
        Some(updated)
    }

    /// Delete a goal by id. Returns whether anything was removed; a
    /// nonexistent id is a benign no-op.
    pub fn delete_goal(&self, command: DeleteGoalCommand) -> bool {
        let mut goals = self.goal_repository.load(&command.owner);
        let before = goals.len();

        goals.retain(|g| g.id != command.goal_id);
        if goals.len() == before {
            debug!("Goal {} not found for {}; nothing deleted", command.goal_id, command.owner);
            return false;
        }

        self.goal_repository.save(&command.owner, &goals);
        info!("Deleted goal {} for {}", command.goal_id, command.owner);
        true
    }
}
