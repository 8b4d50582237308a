//! # Goal Presenter
//!
//! Read-only derivations over the current goal collection: progress
//! percentage, status classification and the dashboard counts. Status is
//! recomputed from the goal's values on every read and never stored, so
//! it can never go stale.

use chrono::{DateTime, NaiveTime, Utc};

use crate::domain::models::goal::{Goal, GoalStatus};

/// Dashboard aggregate over one collection snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub active: usize,
    pub completed: usize,
    pub overdue: usize,
    pub total: usize,
}

/// Progress as a percentage in `[0, 100]`.
///
/// Creation guarantees a positive target, but a zero or negative target in
/// stored data must not divide; it reads as 0% progress.
pub fn progress_percent(goal: &Goal) -> f64 {
    if goal.target_value <= 0.0 {
        return 0.0;
    }
    ((goal.current_value / goal.target_value) * 100.0).min(100.0)
}

/// Classify a goal at instant `now`.
///
/// Completion is checked before the deadline, so a goal that reached its
/// target after the deadline passed is `Completed`, never `Overdue`. The
/// deadline is its date's start of day, so a goal ending today reads as
/// overdue once the day has started.
pub fn status_at(goal: &Goal, now: DateTime<Utc>) -> GoalStatus {
    if progress_percent(goal) >= 100.0 {
        return GoalStatus::Completed;
    }
    if let Some(end_date) = goal.end_date {
        if end_date.and_time(NaiveTime::MIN).and_utc() < now {
            return GoalStatus::Overdue;
        }
    }
    GoalStatus::InProgress
}

/// Classify a goal against the wall clock.
pub fn status(goal: &Goal) -> GoalStatus {
    status_at(goal, Utc::now())
}

/// Dashboard counts for a collection snapshot at instant `now`.
pub fn aggregate_counts_at(goals: &[Goal], now: DateTime<Utc>) -> DashboardCounts {
    let mut counts = DashboardCounts {
        total: goals.len(),
        ..DashboardCounts::default()
    };
    for goal in goals {
        match status_at(goal, now) {
            GoalStatus::InProgress => counts.active += 1,
            GoalStatus::Completed => counts.completed += 1,
            GoalStatus::Overdue => counts.overdue += 1,
        }
    }
    counts
}

/// Dashboard counts against the wall clock.
pub fn aggregate_counts(goals: &[Goal]) -> DashboardCounts {
    aggregate_counts_at(goals, Utc::now())
}
