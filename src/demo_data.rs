//! Demo roster.
//!
//! Four workers with a mix of availability and small quotas. Enough
//! contention to exercise both phases: Friday day has a single available
//! worker, and Thursday night ends up with no eligible worker at all.

use crate::models::{ShiftAvailability, WeeklyAvailability, Worker, WorkerRegistry};

const BOTH: ShiftAvailability = ShiftAvailability::BOTH;
const NONE: ShiftAvailability = ShiftAvailability::NONE;
const DAY: ShiftAvailability = ShiftAvailability::DAY_ONLY;
const NIGHT: ShiftAvailability = ShiftAvailability::NIGHT_ONLY;

/// The demo roster, in tie-break order.
pub fn demo_roster() -> WorkerRegistry {
    WorkerRegistry::new(vec![
        Worker::new("abeeha")
            .with_name("Abeeha")
            .with_availability(WeeklyAvailability::from_days([
                BOTH, BOTH, BOTH, BOTH, NONE, NONE, NONE,
            ]))
            .with_allocation(2, 1),
        Worker::new("umaid")
            .with_name("Umaid")
            .with_availability(WeeklyAvailability::from_days([
                BOTH, DAY, NONE, BOTH, NIGHT, BOTH, BOTH,
            ]))
            .with_allocation(1, 3),
        Worker::new("huzaifa")
            .with_name("Huzaifa")
            .with_availability(WeeklyAvailability::always())
            .with_allocation(2, 2),
        Worker::new("laiba")
            .with_name("Laiba")
            .with_availability(WeeklyAvailability::from_days([
                NONE, NIGHT, BOTH, DAY, NIGHT, BOTH, DAY,
            ]))
            .with_allocation(2, 1),
    ])
}
