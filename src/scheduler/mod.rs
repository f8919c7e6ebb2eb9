//! Rota scheduler and coverage metrics.
//!
//! # Algorithm
//!
//! `RotaScheduler` runs a unique-candidate pre-pass followed by a greedy,
//! rule-checked fill in week order. It never backtracks: it is a fast,
//! deterministic baseline, not an optimizer.
//!
//! # KPI
//!
//! `RotaKpi` reports filled and open cells and the per-worker load.

mod kpi;
mod rota;

pub use kpi::{RotaKpi, WorkerLoad};
pub use rota::{QuotaPolicy, RotaOutcome, RotaRequest, RotaScheduler};
