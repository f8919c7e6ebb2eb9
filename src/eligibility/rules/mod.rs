//! Built-in eligibility rules.
//!
//! - **Adjacency**: `ConsecutiveShiftsRule`
//! - **Quota**: `EmployeeAllocationsAvailabilityRule`
//! - **Availability**: `EmployeeShiftAvailabilityRule`

use super::{RuleContext, ShiftRule};
use crate::models::{Shift, Worker};

/// No back-to-back shifts.
///
/// The day/night cells form one linear sequence over the week
/// (mon-day, mon-night, tue-day, ...). A worker may not hold two
/// neighbouring cells. The sequence does not wrap: Sunday night and Monday
/// day are not neighbours.
///
/// - Day on day *i*: rejects if the worker holds night *i−1* or night *i*.
/// - Night on day *i*: rejects if the worker holds day *i* or day *i+1*.
///
/// Without a schedule or a day there is nothing to conflict with, so the
/// rule passes.
#[derive(Debug, Clone, Copy)]
pub struct ConsecutiveShiftsRule;

impl ShiftRule for ConsecutiveShiftsRule {
    fn name(&self) -> &'static str {
        "consecutive_shifts"
    }

    fn check(&self, worker: &Worker, shift: Shift, context: &RuleContext<'_>) -> bool {
        let (Some(schedule), Some(day)) = (context.schedule, context.day) else {
            return true;
        };
        let id = &worker.id;

        match shift {
            Shift::Day => {
                let prev_night = day
                    .prev()
                    .is_some_and(|prev| schedule.holds(prev, Shift::Night, id));
                !(prev_night || schedule.holds(day, Shift::Night, id))
            }
            Shift::Night => {
                let next_day = day
                    .next()
                    .is_some_and(|next| schedule.holds(next, Shift::Day, id));
                !(next_day || schedule.holds(day, Shift::Day, id))
            }
        }
    }

    fn description(&self) -> &'static str {
        "No two adjacent shifts for the same worker"
    }
}

/// Remaining quota for the shift type must be positive.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeAllocationsAvailabilityRule;

impl ShiftRule for EmployeeAllocationsAvailabilityRule {
    fn name(&self) -> &'static str {
        "allocation"
    }

    fn check(&self, worker: &Worker, shift: Shift, _context: &RuleContext<'_>) -> bool {
        worker.allocation.has_remaining(shift)
    }

    fn description(&self) -> &'static str {
        "Worker has remaining allocation for the shift type"
    }
}

/// Static availability must mark (day, shift) available.
///
/// Fails when the context carries no day.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeShiftAvailabilityRule;

impl ShiftRule for EmployeeShiftAvailabilityRule {
    fn name(&self) -> &'static str {
        "shift_availability"
    }

    fn check(&self, worker: &Worker, shift: Shift, context: &RuleContext<'_>) -> bool {
        context
            .day
            .is_some_and(|day| worker.is_available(day, shift))
    }

    fn description(&self) -> &'static str {
        "Worker is available for the shift on that day"
    }
}
