//! Eligibility rules and the rule set.
//!
//! A rule is a pure predicate deciding whether a worker may take a shift on
//! a given day, looking at the schedule as it stands. Rules are combined
//! conjunctively by a `RuleSet`, which stops at the first rejection.
//!
//! # Usage
//!
//! ```
//! use u_rota::eligibility::{rules, RuleContext, RuleSet};
//! use u_rota::models::{Shift, WeeklySchedule, Weekday, Worker};
//!
//! let rules = RuleSet::new()
//!     .with_rule(rules::ConsecutiveShiftsRule)
//!     .with_rule(rules::EmployeeAllocationsAvailabilityRule);
//!
//! let worker = Worker::new("w1").with_allocation(1, 0);
//! let schedule = WeeklySchedule::new();
//! let ctx = RuleContext::at(&schedule, Weekday::Monday);
//! assert!(rules.passes(&worker, Shift::Day, &ctx));
//! assert!(!rules.passes(&worker, Shift::Night, &ctx));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::RuleContext;
pub use engine::{RuleKind, RuleSet};

use crate::models::{Shift, Worker};
use std::fmt::Debug;

/// An eligibility predicate over (worker, shift, schedule-so-far, day).
///
/// Implementations must not depend on anything but their arguments: the
/// scheduler re-evaluates rules whenever the schedule changes and expects
/// the same answer for the same inputs.
pub trait ShiftRule: Send + Sync + Debug {
    /// Rule name (e.g., "consecutive_shifts").
    fn name(&self) -> &'static str;

    /// Whether `worker` may take `shift` given the context.
    ///
    /// `false` means ineligible; callers need not consult further rules.
    fn check(&self, worker: &Worker, shift: Shift, context: &RuleContext<'_>) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
