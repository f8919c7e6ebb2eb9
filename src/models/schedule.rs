//! Weekly schedule (solution) model.
//!
//! Seven day-slots, two cells each. A cell is either open or holds one
//! worker key. Cells are append-only: once assigned they are never cleared
//! or reassigned.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Shift, Weekday, WorkerId, DAYS_PER_WEEK};
use crate::error::{Result, RotaError};

/// Day and night cells for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    pub day: Option<WorkerId>,
    pub night: Option<WorkerId>,
}

impl DaySlot {
    #[inline]
    pub fn get(&self, shift: Shift) -> Option<&WorkerId> {
        match shift {
            Shift::Day => self.day.as_ref(),
            Shift::Night => self.night.as_ref(),
        }
    }

    fn cell_mut(&mut self, shift: Shift) -> &mut Option<WorkerId> {
        match shift {
            Shift::Day => &mut self.day,
            Shift::Night => &mut self.night,
        }
    }
}

/// The weekly rota grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [DaySlot; DAYS_PER_WEEK],
}

/// A problem found when auditing a finished schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related worker ID.
    pub worker_id: WorkerId,
    /// Affected cell, if the violation is tied to one.
    pub slot: Option<(Weekday, Shift)>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A cell references a worker missing from the roster.
    UnknownWorker,
    /// A worker holds two adjacent shifts.
    ConsecutiveShifts,
    /// A worker holds a shift they are not available for.
    Unavailable,
    /// A worker's allocation counter went below zero.
    NegativeAllocation,
    /// Rule-specific violation (rule name).
    Rule(String),
}

impl Violation {
    pub fn unknown_worker(worker_id: WorkerId, day: Weekday, shift: Shift) -> Self {
        let message = format!("{day} {shift} references unknown worker '{worker_id}'");
        Self {
            violation_type: ViolationType::UnknownWorker,
            worker_id,
            slot: Some((day, shift)),
            message,
        }
    }

    pub fn consecutive_shifts(
        worker_id: WorkerId,
        day: Weekday,
        shift: Shift,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type: ViolationType::ConsecutiveShifts,
            worker_id,
            slot: Some((day, shift)),
            message: message.into(),
        }
    }

    pub fn unavailable(worker_id: WorkerId, day: Weekday, shift: Shift) -> Self {
        let message = format!("'{worker_id}' is not available for {day} {shift}");
        Self {
            violation_type: ViolationType::Unavailable,
            worker_id,
            slot: Some((day, shift)),
            message,
        }
    }

    pub fn negative_allocation(worker_id: WorkerId, shift: Shift, remaining: i32) -> Self {
        let message = format!("'{worker_id}' has {remaining} {shift} shifts remaining");
        Self {
            violation_type: ViolationType::NegativeAllocation,
            worker_id,
            slot: None,
            message,
        }
    }
}

impl WeeklySchedule {
    /// Creates a schedule with every cell open.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, day: Weekday) -> &DaySlot {
        &self.days[day.index()]
    }

    /// Worker holding (day, shift), if any.
    #[inline]
    pub fn get(&self, day: Weekday, shift: Shift) -> Option<&WorkerId> {
        self.slot(day).get(shift)
    }

    pub fn is_assigned(&self, day: Weekday, shift: Shift) -> bool {
        self.get(day, shift).is_some()
    }

    /// Whether the given worker holds (day, shift).
    #[inline]
    pub fn holds(&self, day: Weekday, shift: Shift, worker_id: &WorkerId) -> bool {
        self.get(day, shift) == Some(worker_id)
    }

    /// Assigns an open cell.
    ///
    /// # Errors
    /// `RotaError::CellTaken` if the cell already holds a worker; the
    /// existing assignment is left untouched.
    pub fn assign(&mut self, day: Weekday, shift: Shift, worker_id: WorkerId) -> Result<()> {
        let cell = self.days[day.index()].cell_mut(shift);
        if cell.is_some() {
            return Err(RotaError::CellTaken { day, shift });
        }
        *cell = Some(worker_id);
        Ok(())
    }

    /// All cells in week order, day shift before night shift.
    pub fn cells(&self) -> impl Iterator<Item = (Weekday, Shift, Option<&WorkerId>)> + '_ {
        Weekday::ALL.into_iter().flat_map(move |day| {
            Shift::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.get(day, shift)))
        })
    }

    /// Open cells in week order.
    pub fn open_slots(&self) -> Vec<(Weekday, Shift)> {
        self.cells()
            .filter(|(_, _, w)| w.is_none())
            .map(|(d, s, _)| (d, s))
            .collect()
    }

    /// Cells held by a worker, in week order.
    pub fn shifts_for_worker(&self, worker_id: &WorkerId) -> Vec<(Weekday, Shift)> {
        self.cells()
            .filter(|(_, _, w)| *w == Some(worker_id))
            .map(|(d, s, _)| (d, s))
            .collect()
    }

    /// Number of assigned cells.
    pub fn assignment_count(&self) -> usize {
        self.cells().filter(|(_, _, w)| w.is_some()).count()
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        DAYS_PER_WEEK * Shift::ALL.len()
    }

    pub fn is_complete(&self) -> bool {
        self.assignment_count() == self.cell_count()
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |w: Option<&WorkerId>| w.map_or_else(|| "-".to_string(), |id| id.to_string());
        writeln!(f, "{:<6} {:<16} {:<16}", "day", "day shift", "night shift")?;
        for day in Weekday::ALL {
            writeln!(
                f,
                "{:<6} {:<16} {:<16}",
                day.short_name(),
                cell(self.get(day, Shift::Day)),
                cell(self.get(day, Shift::Night)),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> WeeklySchedule {
        let mut s = WeeklySchedule::new();
        s.assign(Weekday::Monday, Shift::Day, "a".into()).unwrap();
        s.assign(Weekday::Monday, Shift::Night, "b".into()).unwrap();
        s.assign(Weekday::Wednesday, Shift::Night, "a".into()).unwrap();
        s
    }

    #[test]
    fn test_new_schedule_is_open() {
        let s = WeeklySchedule::new();
        assert_eq!(s.assignment_count(), 0);
        assert_eq!(s.open_slots().len(), 14);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_assign_is_append_only() {
        let mut s = sample_schedule();
        let err = s
            .assign(Weekday::Monday, Shift::Day, "c".into())
            .unwrap_err();
        assert!(matches!(
            err,
            RotaError::CellTaken {
                day: Weekday::Monday,
                shift: Shift::Day
            }
        ));
        assert!(s.holds(Weekday::Monday, Shift::Day, &"a".into()));
    }

    #[test]
    fn test_shifts_for_worker() {
        let s = sample_schedule();
        assert_eq!(
            s.shifts_for_worker(&"a".into()),
            vec![(Weekday::Monday, Shift::Day), (Weekday::Wednesday, Shift::Night)]
        );
        assert!(s.shifts_for_worker(&"zz".into()).is_empty());
    }

    #[test]
    fn test_cells_order() {
        let s = sample_schedule();
        let first: Vec<(Weekday, Shift)> = s.cells().take(3).map(|(d, sh, _)| (d, sh)).collect();
        assert_eq!(
            first,
            vec![
                (Weekday::Monday, Shift::Day),
                (Weekday::Monday, Shift::Night),
                (Weekday::Tuesday, Shift::Day),
            ]
        );
        assert_eq!(s.assignment_count(), 3);
    }

    #[test]
    fn test_display_marks_open_cells() {
        let s = sample_schedule();
        let text = s.to_string();
        assert!(text.lines().nth(1).unwrap().starts_with("mon"));
        assert!(text.contains('-'));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_violation_factories() {
        let v = Violation::unavailable("a".into(), Weekday::Friday, Shift::Day);
        assert_eq!(v.violation_type, ViolationType::Unavailable);
        assert_eq!(v.slot, Some((Weekday::Friday, Shift::Day)));

        let v2 = Violation::negative_allocation("a".into(), Shift::Night, -1);
        assert_eq!(v2.violation_type, ViolationType::NegativeAllocation);
        assert!(v2.slot.is_none());
    }
}
