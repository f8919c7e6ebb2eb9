//! Worker registry: the ordered roster the scheduler consumes.
//!
//! The registry owns every `Worker`; schedule cells only hold `WorkerId`
//! keys. Order is preserved exactly as supplied, since the greedy fill
//! breaks ties by roster position.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Worker, WorkerId};
use crate::error::Result;

/// Ordered roster of workers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerRegistry {
    workers: Vec<Worker>,
}

impl WorkerRegistry {
    pub fn new(workers: Vec<Worker>) -> Self {
        Self { workers }
    }

    /// Appends a worker at the end of the roster.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.workers.push(worker);
        self
    }

    pub fn push(&mut self, worker: Worker) {
        self.workers.push(worker);
    }

    /// Parses a roster from a JSON array of workers.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a roster from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Workers in roster order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Worker> {
        self.workers.iter()
    }

    /// Roster position of a worker.
    pub fn position(&self, id: &WorkerId) -> Option<usize> {
        self.workers.iter().position(|w| &w.id == id)
    }

    pub fn get(&self, id: &WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| &w.id == id)
    }

    pub fn get_mut(&mut self, id: &WorkerId) -> Option<&mut Worker> {
        self.workers.iter_mut().find(|w| &w.id == id)
    }

    pub(crate) fn at(&self, index: usize) -> &Worker {
        &self.workers[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Worker {
        &mut self.workers[index]
    }

    pub fn into_workers(self) -> Vec<Worker> {
        self.workers
    }
}

impl From<Vec<Worker>> for WorkerRegistry {
    fn from(workers: Vec<Worker>) -> Self {
        Self::new(workers)
    }
}

impl FromIterator<Worker> for WorkerRegistry {
    fn from_iter<I: IntoIterator<Item = Worker>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WorkerRegistry {
    type Item = &'a Worker;
    type IntoIter = std::slice::Iter<'a, Worker>;

    fn into_iter(self) -> Self::IntoIter {
        self.workers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeeklyAvailability;

    fn sample_registry() -> WorkerRegistry {
        WorkerRegistry::new(vec![
            Worker::new("a").with_allocation(1, 1),
            Worker::new("b").with_allocation(2, 0),
        ])
    }

    #[test]
    fn test_lookup_by_id() {
        let reg = sample_registry();
        assert_eq!(reg.position(&"b".into()), Some(1));
        assert_eq!(reg.get(&"a".into()).unwrap().allocation.day, 1);
        assert!(reg.get(&"zz".into()).is_none());
    }

    #[test]
    fn test_get_mut() {
        let mut reg = sample_registry();
        reg.get_mut(&"b".into()).unwrap().allocation.day = 5;
        assert_eq!(reg.workers()[1].allocation.day, 5);
    }

    #[test]
    fn test_json_preserves_order() {
        let reg = sample_registry()
            .with_worker(Worker::new("c").with_availability(WeeklyAvailability::always()));
        let json = reg.to_json_string().unwrap();
        let back = WorkerRegistry::from_json_str(&json).unwrap();
        let ids: Vec<&str> = back.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_malformed_roster_rejected() {
        let err = WorkerRegistry::from_json_str(r#"[{"id": "a"}]"#).unwrap_err();
        assert!(matches!(err, crate::error::RotaError::Json(_)));
    }
}
