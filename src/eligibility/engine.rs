//! Rule set: ordered, conjunctive rule evaluation.
//!
//! Rules run in insertion order and evaluation stops at the first rule that
//! rejects. Ordering therefore only affects which rule is reported as the
//! reason, never the verdict.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::rules::{
    ConsecutiveShiftsRule, EmployeeAllocationsAvailabilityRule, EmployeeShiftAvailabilityRule,
};
use super::{RuleContext, ShiftRule};
use crate::models::{Shift, Worker};

/// Names of the built-in rules, as used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ConsecutiveShifts,
    Allocation,
    ShiftAvailability,
}

impl RuleKind {
    /// The standard rules in their standard order.
    pub const STANDARD: [RuleKind; 3] = [
        RuleKind::ConsecutiveShifts,
        RuleKind::Allocation,
        RuleKind::ShiftAvailability,
    ];

    fn build(self) -> Arc<dyn ShiftRule> {
        match self {
            RuleKind::ConsecutiveShifts => Arc::new(ConsecutiveShiftsRule),
            RuleKind::Allocation => Arc::new(EmployeeAllocationsAvailabilityRule),
            RuleKind::ShiftAvailability => Arc::new(EmployeeShiftAvailabilityRule),
        }
    }
}

/// An ordered collection of rules, all of which must pass.
///
/// # Example
/// ```
/// use u_rota::eligibility::RuleSet;
///
/// let rules = RuleSet::standard();
/// assert_eq!(rules.names(), vec!["consecutive_shifts", "allocation", "shift_availability"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn ShiftRule>>,
}

impl RuleSet {
    /// Creates an empty rule set. An empty set accepts every worker.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Consecutive shifts, allocation, then shift availability.
    pub fn standard() -> Self {
        Self::from_kinds(&RuleKind::STANDARD)
    }

    /// Builds a rule set from built-in rule names, preserving order.
    pub fn from_kinds(kinds: &[RuleKind]) -> Self {
        Self {
            rules: kinds.iter().map(|k| k.build()).collect(),
        }
    }

    /// Appends a rule.
    pub fn with_rule<R: ShiftRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Whether every rule accepts (worker, shift) in this context.
    pub fn passes(&self, worker: &Worker, shift: Shift, context: &RuleContext<'_>) -> bool {
        self.first_failure(worker, shift, context).is_none()
    }

    /// Name of the first rule that rejects, or `None` if all pass.
    pub fn first_failure(
        &self,
        worker: &Worker,
        shift: Shift,
        context: &RuleContext<'_>,
    ) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| !rule.check(worker, shift, context))
            .map(|rule| rule.name())
    }

    /// Names of every rule that rejects, without short-circuiting.
    pub fn failures(
        &self,
        worker: &Worker,
        shift: Shift,
        context: &RuleContext<'_>,
    ) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| !rule.check(worker, shift, context))
            .map(|rule| rule.name())
            .collect()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WeeklyAvailability, WeeklySchedule, Weekday};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Reject;

    impl ShiftRule for Reject {
        fn name(&self) -> &'static str {
            "reject"
        }

        fn check(&self, _: &Worker, _: Shift, _: &RuleContext<'_>) -> bool {
            false
        }
    }

    #[derive(Debug)]
    struct Counting(Arc<AtomicUsize>);

    impl ShiftRule for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn check(&self, _: &Worker, _: Shift, _: &RuleContext<'_>) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    fn worker() -> Worker {
        Worker::new("a")
            .with_availability(WeeklyAvailability::always())
            .with_allocation(1, 1)
    }

    #[test]
    fn test_standard_order() {
        let rules = RuleSet::standard();
        assert_eq!(rules.len(), 3);
        assert_eq!(
            rules.names(),
            vec!["consecutive_shifts", "allocation", "shift_availability"]
        );
    }

    #[test]
    fn test_empty_set_passes() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert!(rules.passes(&worker(), Shift::Day, &RuleContext::empty()));
    }

    #[test]
    fn test_short_circuit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let rules = RuleSet::new()
            .with_rule(Reject)
            .with_rule(Counting(calls.clone()));

        assert!(!rules.passes(&worker(), Shift::Day, &RuleContext::empty()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_failure_reports_rule() {
        let schedule = WeeklySchedule::new();
        let ctx = RuleContext::at(&schedule, Weekday::Monday);
        let exhausted = worker().with_allocation(0, 1);

        let rules = RuleSet::standard();
        assert_eq!(rules.first_failure(&exhausted, Shift::Day, &ctx), Some("allocation"));
        assert_eq!(rules.first_failure(&exhausted, Shift::Night, &ctx), None);
    }

    #[test]
    fn test_failures_collects_all() {
        let schedule = WeeklySchedule::new();
        let ctx = RuleContext::at(&schedule, Weekday::Monday);
        let nobody = Worker::new("n");

        let failed = RuleSet::standard().failures(&nobody, Shift::Day, &ctx);
        assert_eq!(failed, vec!["allocation", "shift_availability"]);
    }

    #[test]
    fn test_rule_kind_serde() {
        let kinds: Vec<RuleKind> =
            serde_json::from_str(r#"["allocation", "consecutive_shifts"]"#).unwrap();
        let rules = RuleSet::from_kinds(&kinds);
        assert_eq!(rules.names(), vec!["allocation", "consecutive_shifts"]);
    }

    #[test]
    fn test_debug_lists_names() {
        let dbg = format!("{:?}", RuleSet::standard());
        assert!(dbg.contains("consecutive_shifts"));
    }
}
