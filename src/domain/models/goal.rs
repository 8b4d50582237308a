use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category of a goal. The set is fixed; each category maps to a static
/// display style via [`GoalCategory::style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    #[default]
    Personal,
    Health,
    Career,
    Finance,
    Education,
    Fitness,
}

/// Display style attached to a category: card accent, badge background,
/// badge text and the hex color frozen into a goal at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub bg: &'static str,
    pub light: &'static str,
    pub text: &'static str,
    pub hex: &'static str,
}

impl GoalCategory {
    /// Resolve the static style for this category.
    ///
    /// Used both at creation time (to freeze `Goal::color`) and at render
    /// time (category badges). A goal keeps the hex it was created with
    /// even if this palette changes afterwards.
    pub fn style(&self) -> &'static CategoryStyle {
        match self {
            GoalCategory::Personal => &CategoryStyle {
                bg: "bg-blue-500",
                light: "bg-blue-100",
                text: "text-blue-700",
                hex: "#3B82F6",
            },
            GoalCategory::Health => &CategoryStyle {
                bg: "bg-green-500",
                light: "bg-green-100",
                text: "text-green-700",
                hex: "#10B981",
            },
            GoalCategory::Career => &CategoryStyle {
                bg: "bg-purple-500",
                light: "bg-purple-100",
                text: "text-purple-700",
                hex: "#8B5CF6",
            },
            GoalCategory::Finance => &CategoryStyle {
                bg: "bg-yellow-500",
                light: "bg-yellow-100",
                text: "text-yellow-700",
                hex: "#F59E0B",
            },
            GoalCategory::Education => &CategoryStyle {
                bg: "bg-indigo-500",
                light: "bg-indigo-100",
                text: "text-indigo-700",
                hex: "#6366F1",
            },
            GoalCategory::Fitness => &CategoryStyle {
                bg: "bg-red-500",
                light: "bg-red-100",
                text: "text-red-700",
                hex: "#EF4444",
            },
        }
    }

    /// Lowercase label as shown on category badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Personal => "personal",
            GoalCategory::Health => "health",
            GoalCategory::Career => "career",
            GoalCategory::Finance => "finance",
            GoalCategory::Education => "education",
            GoalCategory::Fitness => "fitness",
        }
    }
}

/// Derived classification of a goal. Never persisted; recomputed from
/// `current_value`, `target_value` and `end_date` on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    InProgress,
    Completed,
    Overdue,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::InProgress => "in-progress",
            GoalStatus::Completed => "completed",
            GoalStatus::Overdue => "overdue",
        }
    }
}

/// A persisted goal owned by one identity.
///
/// Persisted JSON uses camelCase field names (`targetValue`,
/// `currentValue`, `startDate`, `endDate`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// ID in format `goal::{owner}_{epoch_millis}`; immutable.
    pub id: String,
    /// Identity of the user the goal belongs to; partitions storage.
    pub owner: String,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    /// Positive, finite target; immutable after creation.
    pub target_value: f64,
    /// Progress, kept within `[0, target_value]`.
    pub current_value: f64,
    /// Cosmetic measurement label ("km", "kg", ...).
    pub unit: String,
    pub start_date: NaiveDate,
    /// Optional deadline; a goal without one can never become overdue.
    pub end_date: Option<NaiveDate>,
    /// Hex color frozen from the category style at creation.
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn generate_id(owner: &str, epoch_millis: u64) -> String {
        format!("goal::{}_{}", owner, epoch_millis)
    }
}

/// Unvalidated creation payload, as it arrives from the creation form.
/// Numeric fields are strings; validation happens in the goal service.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub target_value: String,
    /// Empty means "start at 0".
    pub current_value: String,
    pub unit: String,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GoalValidationError {
    #[error("Goal title cannot be empty")]
    EmptyTitle,
    #[error("Goal target must be a positive number")]
    InvalidTargetValue,
    #[error("Goal starting progress must be a non-negative number")]
    InvalidCurrentValue,
}
