pub mod goal;

pub use goal::{CategoryStyle, Goal, GoalCategory, GoalDraft, GoalStatus, GoalValidationError};
