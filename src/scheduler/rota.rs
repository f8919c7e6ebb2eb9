//! Two-phase greedy rota scheduler.
//!
//! # Algorithm
//!
//! 1. **Unique-candidate pre-pass.** For every (day, shift), if exactly one
//!    worker is statically available, assign them without consulting the
//!    rules.
//! 2. **Greedy fill.** Days in week order. For each day, collect day and
//!    night candidates (workers passing every rule against the schedule so
//!    far), then fill the open day cell with the first candidate in roster
//!    order that still passes, then the open night cell likewise.
//!
//! Decisions are never revisited. A cell without a valid candidate stays
//! open.
//!
//! # Complexity
//! O(d * w * r) where d=7 days, w=workers, r=rules.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::config::RotaConfig;
use crate::eligibility::{RuleContext, RuleSet};
use crate::error::{Result, RotaError};
use crate::models::{Shift, WeeklySchedule, Weekday, Worker, WorkerId, WorkerRegistry};
use crate::validation::validate_roster;

/// What to do when asked to assign a worker whose quota for the shift type
/// is already exhausted.
///
/// Only reachable through the pre-pass (which bypasses the rules) or
/// through a rule set without the allocation rule. Neither policy lets a
/// counter go below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotaPolicy {
    /// Skip the assignment and leave the cell open.
    #[default]
    Reject,
    /// Make the assignment and keep the counter at zero.
    Clamp,
}

/// Input container for scheduling.
#[derive(Debug, Clone)]
pub struct RotaRequest {
    /// Roster in tie-break order.
    pub workers: WorkerRegistry,
    /// Quota policy for this run.
    pub quota_policy: QuotaPolicy,
}

impl RotaRequest {
    /// Creates a new request with the default quota policy.
    pub fn new(workers: impl Into<WorkerRegistry>) -> Self {
        Self {
            workers: workers.into(),
            quota_policy: QuotaPolicy::default(),
        }
    }

    pub fn with_quota_policy(mut self, policy: QuotaPolicy) -> Self {
        self.quota_policy = policy;
        self
    }
}

/// Result of a request: the rota plus the roster with consumed quotas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotaOutcome {
    pub schedule: WeeklySchedule,
    pub workers: WorkerRegistry,
}

/// Two-phase greedy rota scheduler.
///
/// # Example
///
/// ```
/// use u_rota::eligibility::RuleSet;
/// use u_rota::models::{Shift, WeeklyAvailability, Weekday, Worker, WorkerRegistry};
/// use u_rota::scheduler::RotaScheduler;
///
/// let mut roster = WorkerRegistry::new(vec![
///     Worker::new("a")
///         .with_availability(WeeklyAvailability::always())
///         .with_allocation(4, 0),
///     Worker::new("b")
///         .with_availability(WeeklyAvailability::always())
///         .with_allocation(3, 7),
/// ]);
///
/// let scheduler = RotaScheduler::new(RuleSet::standard());
/// let schedule = scheduler.schedule(&mut roster).unwrap();
/// assert_eq!(schedule.get(Weekday::Monday, Shift::Day).unwrap(), "a");
/// ```
#[derive(Debug, Clone)]
pub struct RotaScheduler {
    rules: RuleSet,
    quota_policy: QuotaPolicy,
}

impl RotaScheduler {
    /// Creates a scheduler with the given rules and the default quota
    /// policy.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            quota_policy: QuotaPolicy::default(),
        }
    }

    /// Creates a scheduler from configuration.
    pub fn from_config(config: &RotaConfig) -> Self {
        Self::new(config.rule_set()).with_quota_policy(config.quota_policy)
    }

    pub fn with_quota_policy(mut self, policy: QuotaPolicy) -> Self {
        self.quota_policy = policy;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn quota_policy(&self) -> QuotaPolicy {
        self.quota_policy
    }

    /// Builds the weekly rota, consuming allocation counters in place.
    ///
    /// # Errors
    /// `RotaError::Validation` if the roster fails validation; nothing is
    /// mutated in that case.
    pub fn schedule(&self, registry: &mut WorkerRegistry) -> Result<WeeklySchedule> {
        validate_roster(registry.workers()).map_err(RotaError::Validation)?;

        info!(
            event = "rota_start",
            workers = registry.len(),
            rules = ?self.rules.names(),
            quota_policy = ?self.quota_policy,
        );

        let mut schedule = WeeklySchedule::new();
        self.assign_unique_candidates(registry, &mut schedule)?;
        let forced = schedule.assignment_count();
        self.fill_greedy(registry, &mut schedule)?;

        let open = schedule.open_slots();
        for (day, shift) in &open {
            warn!(%day, %shift, "no eligible worker, cell left open");
        }
        info!(
            event = "rota_end",
            forced,
            filled = schedule.assignment_count(),
            open = open.len(),
        );

        Ok(schedule)
    }

    /// Schedules a request without touching the caller's roster.
    pub fn schedule_request(&self, request: &RotaRequest) -> Result<RotaOutcome> {
        let scheduler = Self {
            rules: self.rules.clone(),
            quota_policy: request.quota_policy,
        };
        let mut workers = request.workers.clone();
        let schedule = scheduler.schedule(&mut workers)?;
        Ok(RotaOutcome { schedule, workers })
    }

    /// Phase 1: force-assign every (day, shift) with exactly one statically
    /// available worker. Rules are not consulted.
    fn assign_unique_candidates(
        &self,
        registry: &mut WorkerRegistry,
        schedule: &mut WeeklySchedule,
    ) -> Result<()> {
        for day in Weekday::ALL {
            for shift in Shift::ALL {
                let mut available = registry
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| w.is_available(day, shift))
                    .map(|(i, _)| i);
                let (Some(only), None) = (available.next(), available.next()) else {
                    continue;
                };

                debug!(%day, %shift, worker = %registry.at(only).id, "unique candidate");
                self.commit(registry, schedule, only, day, shift)?;
            }
        }
        Ok(())
    }

    /// Phase 2: greedy fill in week order.
    fn fill_greedy(
        &self,
        registry: &mut WorkerRegistry,
        schedule: &mut WeeklySchedule,
    ) -> Result<()> {
        for day in Weekday::ALL {
            let (day_candidates, night_candidates) =
                self.collect_candidates(registry, schedule, day);

            debug!(
                %day,
                day_candidates = ?ids(registry, &day_candidates),
                night_candidates = ?ids(registry, &night_candidates),
                "candidates collected"
            );

            for (shift, candidates) in [
                (Shift::Day, &day_candidates),
                (Shift::Night, &night_candidates),
            ] {
                if !schedule.is_assigned(day, shift) {
                    self.assign_first_valid(registry, schedule, candidates, day, shift)?;
                }
            }
        }
        Ok(())
    }

    /// Day and night eligibility for every worker, evaluated independently.
    fn collect_candidates(
        &self,
        registry: &WorkerRegistry,
        schedule: &WeeklySchedule,
        day: Weekday,
    ) -> (Vec<usize>, Vec<usize>) {
        let ctx = RuleContext::at(schedule, day);
        let mut day_candidates = Vec::new();
        let mut night_candidates = Vec::new();

        for (idx, worker) in registry.iter().enumerate() {
            let day_ok = self.is_eligible(worker, Shift::Day, &ctx);
            let night_ok = self.is_eligible(worker, Shift::Night, &ctx);
            if day_ok {
                day_candidates.push(idx);
            }
            if night_ok {
                night_candidates.push(idx);
            }
        }

        (day_candidates, night_candidates)
    }

    /// Assigns the first candidate that still passes every rule against the
    /// current schedule.
    fn assign_first_valid(
        &self,
        registry: &mut WorkerRegistry,
        schedule: &mut WeeklySchedule,
        candidates: &[usize],
        day: Weekday,
        shift: Shift,
    ) -> Result<()> {
        for &idx in candidates {
            let eligible = {
                let ctx = RuleContext::at(schedule, day);
                self.is_eligible(registry.at(idx), shift, &ctx)
            };
            if eligible && self.commit(registry, schedule, idx, day, shift)? {
                debug!(%day, %shift, worker = %registry.at(idx).id, "assigned");
                return Ok(());
            }
        }
        Ok(())
    }

    fn is_eligible(&self, worker: &Worker, shift: Shift, ctx: &RuleContext<'_>) -> bool {
        match self.rules.first_failure(worker, shift, ctx) {
            None => true,
            Some(rule) => {
                trace!(worker = %worker.id, day = ?ctx.day, %shift, rule, "rejected");
                false
            }
        }
    }

    /// Writes one assignment and consumes the quota, applying the quota
    /// policy when the counter is already exhausted.
    ///
    /// Returns whether the cell was assigned.
    fn commit(
        &self,
        registry: &mut WorkerRegistry,
        schedule: &mut WeeklySchedule,
        idx: usize,
        day: Weekday,
        shift: Shift,
    ) -> Result<bool> {
        let worker = registry.at_mut(idx);
        let remaining = worker.allocation.remaining(shift);

        if remaining <= 0 {
            match self.quota_policy {
                QuotaPolicy::Reject => {
                    warn!(
                        worker = %worker.id, %day, %shift, remaining,
                        "allocation exhausted, assignment rejected"
                    );
                    return Ok(false);
                }
                QuotaPolicy::Clamp => {
                    warn!(
                        worker = %worker.id, %day, %shift, remaining,
                        "allocation exhausted, assigned with counter clamped at zero"
                    );
                }
            }
        }

        schedule.assign(day, shift, worker.id.clone())?;
        worker.allocation.consume(shift);
        Ok(true)
    }
}

fn ids<'a>(registry: &'a WorkerRegistry, indices: &[usize]) -> Vec<&'a WorkerId> {
    indices.iter().map(|&i| &registry.at(i).id).collect()
}
