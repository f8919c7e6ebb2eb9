//! Weekly two-shift rota scheduling.
//!
//! Assigns a roster of workers to a fixed week of day and night shifts,
//! honouring per-worker availability, per-shift quotas, and a
//! no-back-to-back-shifts rule. Scheduling is a single greedy pass with a
//! unique-candidate pre-pass; it never backtracks.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Worker`, `WorkerRegistry`,
//!   `WeeklySchedule`, `Weekday`, `Shift`
//! - **`eligibility`**: The `ShiftRule` trait, built-in rules, and `RuleSet`
//! - **`scheduler`**: `RotaScheduler` (two-phase fill) and `RotaKpi`
//! - **`validation`**: Roster checks and post-hoc schedule audit
//! - **`config`**: TOML configuration for rules and quota policy
//!
//! # Example
//!
//! ```
//! use u_rota::demo_data::demo_roster;
//! use u_rota::eligibility::RuleSet;
//! use u_rota::scheduler::{RotaKpi, RotaScheduler};
//!
//! let mut roster = demo_roster();
//! let schedule = RotaScheduler::new(RuleSet::standard())
//!     .schedule(&mut roster)
//!     .unwrap();
//!
//! let kpi = RotaKpi::calculate(&schedule, &roster);
//! assert_eq!(kpi.filled_cells, 13);
//! ```

pub mod config;
pub mod demo_data;
pub mod eligibility;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, RotaError};
