//! Evaluation context for eligibility rules.

use crate::models::{WeeklySchedule, Weekday};

/// What a rule may see besides the worker and the shift.
///
/// Both parts are optional: allocation-style rules need neither, and can be
/// evaluated with `RuleContext::empty()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleContext<'a> {
    /// The schedule as filled so far.
    pub schedule: Option<&'a WeeklySchedule>,
    /// The day being decided.
    pub day: Option<Weekday>,
}

impl<'a> RuleContext<'a> {
    /// A context with no schedule and no day.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A context for deciding `day` against `schedule`.
    pub fn at(schedule: &'a WeeklySchedule, day: Weekday) -> Self {
        Self {
            schedule: Some(schedule),
            day: Some(day),
        }
    }

    /// A context that only carries the day.
    pub fn on_day(day: Weekday) -> Self {
        Self {
            schedule: None,
            day: Some(day),
        }
    }
}
