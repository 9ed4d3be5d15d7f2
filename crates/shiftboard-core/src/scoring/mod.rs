//! Scoring and staffing math
//!
//! Two independent derivations per task:
//! - a priority score ranking the task from urgency, importance, and
//!   days-until-due;
//! - a worker count sizing the task from its quantity and per-unit minutes,
//!   weighted so high-priority work is over-provisioned relative to a strict
//!   workload split.
//!
//! Both are pure; inputs are assumed pre-validated by the caller.

use crate::catalog::TaskCatalog;

/// Minutes one worker has available per shift (7 hours).
pub const SHIFT_MINUTES: u32 = 420;

/// Weight of urgency in the priority score and the staffing factor.
pub const URGENCY_WEIGHT: f64 = 1.5;

/// Weight of importance in the priority score and the staffing factor.
pub const IMPORTANCE_WEIGHT: f64 = 2.0;

/// Penalty per day of slack until the due date.
pub const DUE_DATE_WEIGHT: f64 = 0.5;

/// Priority score for a task. Strictly increasing in urgency and importance,
/// strictly decreasing in days-until-due. Not clamped; a distant due date can
/// drive the score negative.
pub fn priority_score(urgency: u32, importance: u32, days_until_due: u32) -> f64 {
    f64::from(urgency) * URGENCY_WEIGHT + f64::from(importance) * IMPORTANCE_WEIGHT
        - f64::from(days_until_due) * DUE_DATE_WEIGHT
}

/// Normalized staffing weight. Importance counts twice as heavily as
/// urgency, matching the priority score's weights.
pub fn priority_factor(urgency: u32, importance: u32) -> f64 {
    (f64::from(urgency) * URGENCY_WEIGHT + f64::from(importance) * IMPORTANCE_WEIGHT) / 10.0
}

/// Number of workers needed to finish `quantity` units of `task_name` within
/// one shift. Unknown task names fall back to a single worker; every known
/// task gets at least one.
pub fn staff_needed(
    catalog: &TaskCatalog,
    task_name: &str,
    quantity: u32,
    urgency: u32,
    importance: u32,
) -> u32 {
    let Some(minutes_per_unit) = catalog.minutes_per_unit(task_name) else {
        return 1;
    };

    let total_minutes = quantity * minutes_per_unit;
    let factor = priority_factor(urgency, importance);
    let shifts_of_effort = f64::from(total_minutes) / f64::from(SHIFT_MINUTES);
    let people = (shifts_of_effort * factor).ceil() as u32;
    let people = people.max(1);

    tracing::debug!(
        task = task_name,
        quantity,
        urgency,
        importance,
        priority_factor = factor,
        people_needed = people,
        "staff allocation computed"
    );

    people
}
