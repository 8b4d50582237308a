//! Domain layer: the goal model, the service that mutates collections and
//! the presenter that derives display state from them.

pub mod commands;
pub mod goal_service;
pub mod models;
pub mod presenter;

pub use goal_service::GoalService;
pub use presenter::DashboardCounts;
