//! Rota domain models.
//!
//! Provides the data types the scheduling engine reads and writes: the
//! weekly grid coordinates, workers with their availability and quotas,
//! the ordered roster, and the weekly schedule itself.
//!
//! # Ownership
//!
//! | Type | Owns | Refers to |
//! |------|------|-----------|
//! | `WorkerRegistry` | `Worker` values | nothing |
//! | `WeeklySchedule` | cells | workers by `WorkerId` |

mod registry;
mod schedule;
mod week;
mod worker;

pub use registry::WorkerRegistry;
pub use schedule::{DaySlot, Violation, ViolationType, WeeklySchedule};
pub use week::{Shift, Weekday, DAYS_PER_WEEK};
pub use worker::{Allocation, ShiftAvailability, WeeklyAvailability, Worker, WorkerId};
