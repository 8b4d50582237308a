//! Domain-level command types.
//!
//! These structs are the inputs to the goal service. The presentation
//! shell maps its form state and button clicks onto them; they carry the
//! acting identity explicitly so nothing in the domain layer holds
//! module-level user state.

pub mod goal {
    use crate::domain::models::goal::GoalDraft;

    /// Input for creating a new goal from an unvalidated draft.
    #[derive(Debug, Clone)]
    pub struct CreateGoalCommand {
        pub owner: String,
        pub draft: GoalDraft,
    }

    /// Input for updating the progress of an existing goal.
    #[derive(Debug, Clone)]
    pub struct UpdateProgressCommand {
        pub owner: String,
        pub goal_id: String,
        pub new_value: f64,
    }

    /// Input for deleting a goal by id.
    #[derive(Debug, Clone)]
    pub struct DeleteGoalCommand {
        pub owner: String,
        pub goal_id: String,
    }
}
