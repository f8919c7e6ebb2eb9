//! Roster validation and schedule audit.
//!
//! `validate_roster` checks input integrity before scheduling:
//! - Duplicate worker IDs
//! - Empty worker IDs
//! - Negative allocation counters
//!
//! `audit_schedule` checks a finished rota against the roster and the
//! adjacency/availability constraints.

use std::collections::HashSet;

use thiserror::Error;

use crate::eligibility::{RuleContext, RuleSet};
use crate::models::{
    Shift, Violation, ViolationType, WeeklySchedule, Weekday, Worker, WorkerRegistry,
};

/// Rules whose concerns the audit checks directly.
const BUILTIN_RULES: [&str; 3] = ["consecutive_shifts", "allocation", "shift_availability"];

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers share the same ID.
    DuplicateId,
    /// A worker has an empty ID.
    EmptyId,
    /// An allocation counter is below zero.
    NegativeAllocation,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(workers: &[Worker]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (position, worker) in workers.iter().enumerate() {
        if worker.id.as_str().trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Worker at position {position} has an empty ID"),
            ));
        } else if !ids.insert(worker.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", worker.id),
            ));
        }

        for shift in Shift::ALL {
            let remaining = worker.allocation.remaining(shift);
            if remaining < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeAllocation,
                    format!(
                        "Worker '{}' has negative {shift} allocation ({remaining})",
                        worker.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Audits a finished schedule.
///
/// Reports cells held by unknown workers, adjacent shifts held by the same
/// worker, cells held by statically unavailable workers, and negative
/// allocation counters left on the roster. Custom rules in `rules` are
/// re-run for each assigned cell; the built-in ones are not, since their
/// concerns are checked directly above and the allocation rule would reject
/// counters that scheduling legitimately consumed to zero.
pub fn audit_schedule(
    schedule: &WeeklySchedule,
    registry: &WorkerRegistry,
    rules: &RuleSet,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (day, shift, id) in schedule.cells() {
        let Some(id) = id else { continue };
        let Some(worker) = registry.get(id) else {
            violations.push(Violation::unknown_worker(id.clone(), day, shift));
            continue;
        };

        if !worker.is_available(day, shift) {
            violations.push(Violation::unavailable(id.clone(), day, shift));
        }

        // Each adjacent pair is reported once, from its earlier cell.
        if let Some((next_day, next_shift)) = following_cell(day, shift) {
            if schedule.holds(next_day, next_shift, id) {
                violations.push(Violation::consecutive_shifts(
                    id.clone(),
                    day,
                    shift,
                    format!("'{id}' works {day} {shift} and {next_day} {next_shift}"),
                ));
            }
        }

        let ctx = RuleContext::at(schedule, day);
        for name in rules.failures(worker, shift, &ctx) {
            if BUILTIN_RULES.contains(&name) {
                continue;
            }
            violations.push(Violation {
                violation_type: ViolationType::Rule(name.to_string()),
                worker_id: id.clone(),
                slot: Some((day, shift)),
                message: format!("'{id}' fails rule '{name}' on {day} {shift}"),
            });
        }
    }

    for worker in registry {
        for shift in Shift::ALL {
            let remaining = worker.allocation.remaining(shift);
            if remaining < 0 {
                violations.push(Violation::negative_allocation(
                    worker.id.clone(),
                    shift,
                    remaining,
                ));
            }
        }
    }

    violations
}

/// The cell after (day, shift) in the linear week sequence.
fn following_cell(day: Weekday, shift: Shift) -> Option<(Weekday, Shift)> {
    match shift {
        Shift::Day => Some((day, Shift::Night)),
        Shift::Night => day.next().map(|next| (next, Shift::Day)),
    }
}
