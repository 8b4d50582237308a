//! # Goal Tracker Core
//!
//! Core of a small goal-tracking client: authenticated users create, view,
//! update progress on and delete personal goals, persisted per identity to
//! a synchronous key-value surface.
//!
//! The crate is split the way the data flows:
//! - [`storage`] — the [`storage::KvStore`] persistence surface and the
//!   JSON goal repository keyed by `goaltracker-goals-{identity}`,
//! - [`domain`] — the [`Goal`] model with its category palette, the
//!   [`GoalService`] mutation operations (validated creation, clamped
//!   progress updates, deletion) and the presenter deriving status and
//!   dashboard counts on every read,
//! - [`session`] — the identity-scoped [`Session`] that loads a user's
//!   collection on sign-in and tears it down on sign-out.
//!
//! All operations are synchronous and run to completion, so the persisted
//! collection always reflects the most recently applied mutation. Storage
//! failures degrade to an in-memory-only session; they never crash the
//! presentation layer.

pub mod domain;
pub mod session;
pub mod storage;

pub use domain::models::goal::{
    CategoryStyle, Goal, GoalCategory, GoalDraft, GoalStatus, GoalValidationError,
};
pub use domain::presenter::DashboardCounts;
pub use domain::GoalService;
pub use session::{IdentityEvent, Session, SessionError};
pub use storage::{FileKvStore, GoalRepository, KvStore, MemoryKvStore};
