//! Rota coverage metrics.
//!
//! Computes how much of the weekly grid a run managed to fill and how the
//! load fell across the roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Filled cells | Assigned cells out of 14 |
//! | Coverage rate | filled / total |
//! | Open slots | Unassigned (day, shift) cells, week order |
//! | Worker load | Day and night shifts held per worker, plus remaining quota |

use serde::{Deserialize, Serialize};

use crate::models::{Allocation, Shift, WeeklySchedule, Weekday, WorkerId, WorkerRegistry};

/// Shifts held by one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerLoad {
    pub worker_id: WorkerId,
    pub day_shifts: usize,
    pub night_shifts: usize,
    /// Quota left after scheduling.
    pub remaining: Allocation,
}

impl WorkerLoad {
    pub fn total(&self) -> usize {
        self.day_shifts + self.night_shifts
    }
}

/// Rota coverage indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotaKpi {
    /// Number of assigned cells.
    pub filled_cells: usize,
    /// Number of cells in the grid.
    pub total_cells: usize,
    /// Fraction of cells assigned (0.0..1.0).
    pub coverage_rate: f64,
    /// Cells left open.
    pub open_slots: Vec<(Weekday, Shift)>,
    /// Per-worker load, in roster order.
    pub worker_loads: Vec<WorkerLoad>,
}

impl RotaKpi {
    /// Computes KPIs from a schedule and the roster it was built from.
    ///
    /// Cells held by IDs missing from the roster count as filled but do not
    /// appear in `worker_loads`.
    pub fn calculate(schedule: &WeeklySchedule, registry: &WorkerRegistry) -> Self {
        let filled_cells = schedule.assignment_count();
        let total_cells = schedule.cell_count();

        let worker_loads = registry
            .iter()
            .map(|worker| {
                let held = schedule.shifts_for_worker(&worker.id);
                let night_shifts = held.iter().filter(|(_, s)| *s == Shift::Night).count();
                WorkerLoad {
                    worker_id: worker.id.clone(),
                    day_shifts: held.len() - night_shifts,
                    night_shifts,
                    remaining: worker.allocation,
                }
            })
            .collect();

        Self {
            filled_cells,
            total_cells,
            coverage_rate: filled_cells as f64 / total_cells as f64,
            open_slots: schedule.open_slots(),
            worker_loads,
        }
    }

    /// Whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.open_slots.is_empty()
    }

    /// Whether coverage reaches the given rate.
    pub fn meets_coverage(&self, min_rate: f64) -> bool {
        self.coverage_rate >= min_rate
    }

    pub fn load_for(&self, worker_id: &WorkerId) -> Option<&WorkerLoad> {
        self.worker_loads.iter().find(|l| &l.worker_id == worker_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Worker;

    fn sample() -> (WeeklySchedule, WorkerRegistry) {
        let registry = WorkerRegistry::new(vec![
            Worker::new("a").with_allocation(1, 0),
            Worker::new("b").with_allocation(0, 2),
        ]);
        let mut s = WeeklySchedule::new();
        s.assign(Weekday::Monday, Shift::Day, "a".into()).unwrap();
        s.assign(Weekday::Monday, Shift::Night, "b".into()).unwrap();
        s.assign(Weekday::Tuesday, Shift::Night, "b".into()).unwrap();
        (s, registry)
    }

    #[test]
    fn test_coverage() {
        let (s, reg) = sample();
        let kpi = RotaKpi::calculate(&s, &reg);
        assert_eq!(kpi.filled_cells, 3);
        assert_eq!(kpi.total_cells, 14);
        assert!((kpi.coverage_rate - 3.0 / 14.0).abs() < 1e-10);
        assert_eq!(kpi.open_slots.len(), 11);
        assert_eq!(kpi.open_slots[0], (Weekday::Tuesday, Shift::Day));
        assert!(!kpi.is_complete());
        assert!(kpi.meets_coverage(0.2));
        assert!(!kpi.meets_coverage(0.5));
    }

    #[test]
    fn test_worker_loads() {
        let (s, reg) = sample();
        let kpi = RotaKpi::calculate(&s, &reg);

        let a = kpi.load_for(&"a".into()).unwrap();
        assert_eq!((a.day_shifts, a.night_shifts), (1, 0));
        let b = kpi.load_for(&"b".into()).unwrap();
        assert_eq!(b.total(), 2);
        assert_eq!(b.remaining, Allocation::new(0, 2));
        assert!(kpi.load_for(&"zz".into()).is_none());
    }

    #[test]
    fn test_empty_schedule() {
        let kpi = RotaKpi::calculate(&WeeklySchedule::new(), &WorkerRegistry::default());
        assert_eq!(kpi.filled_cells, 0);
        assert_eq!(kpi.coverage_rate, 0.0);
        assert!(kpi.worker_loads.is_empty());
    }
}
