//! Scheduling engine and ALL-mode comparison.
//!
//! The engine holds configuration only (sweep direction, SSTF tie-break).
//! It is `Copy` and keeps no state between calls, so one value can serve
//! any number of concurrent simulations.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::rules::policy_for;
use super::SweepContext;
use crate::models::policy::{DEFAULT_SSTF_TIE_BREAK, DEFAULT_SWEEP_DIRECTION};
use crate::models::{
    Algorithm, AlgorithmSelector, Cylinder, SeekResult, SimulationInput, SstfTieBreak,
    SweepDirection,
};
use crate::validation::ValidationResult;

/// Stateless disk-scheduling engine.
///
/// # Example
/// ```
/// use disk_scheduling::dispatching::SeekEngine;
/// use disk_scheduling::models::{Algorithm, SimulationInput, SweepDirection};
///
/// let input = SimulationInput::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200).unwrap();
/// let engine = SeekEngine::new().with_direction(SweepDirection::Up);
///
/// let all = engine.run_all(&input);
/// assert_eq!(all.get(Algorithm::CScan).unwrap().total_seek_time(), 382);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekEngine {
    direction: SweepDirection,
    tie_break: SstfTieBreak,
}

impl SeekEngine {
    /// Creates an engine with the default policies.
    pub fn new() -> Self {
        Self {
            direction: DEFAULT_SWEEP_DIRECTION,
            tie_break: DEFAULT_SSTF_TIE_BREAK,
        }
    }

    /// Sets the initial sweep direction of the SCAN family.
    pub fn with_direction(mut self, direction: SweepDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the SSTF tie-break.
    pub fn with_tie_break(mut self, tie_break: SstfTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Configured sweep direction.
    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Configured SSTF tie-break.
    pub fn tie_break(&self) -> SstfTieBreak {
        self.tie_break
    }

    /// Sweep context for `input` under this engine's policies.
    pub fn context(&self, input: &SimulationInput) -> SweepContext {
        SweepContext::for_input(input)
            .with_direction(self.direction)
            .with_tie_break(self.tie_break)
    }

    /// Runs one algorithm.
    pub fn run(&self, algorithm: Algorithm, input: &SimulationInput) -> SeekResult {
        let context = self.context(input);
        let trajectory = policy_for(algorithm).plan(input.requests(), &context);
        let result = SeekResult::from_trajectory(algorithm, trajectory);

        tracing::debug!(
            algorithm = %algorithm,
            requests = input.requests().len(),
            head = input.head(),
            disk_size = input.disk_size(),
            total_seek_time = result.total_seek_time(),
            "scheduled"
        );
        result
    }

    /// Runs all six algorithms in canonical order.
    pub fn run_all(&self, input: &SimulationInput) -> Comparison {
        Comparison {
            results: Algorithm::ALL
                .iter()
                .map(|&a| self.run(a, input))
                .collect(),
        }
    }

    /// Runs whatever the selector asks for.
    pub fn dispatch(&self, selector: AlgorithmSelector, input: &SimulationInput) -> Outcome {
        match selector {
            AlgorithmSelector::Single(a) => Outcome::Single(self.run(a, input)),
            AlgorithmSelector::All => Outcome::All(self.run_all(input)),
        }
    }
}

impl Default for SeekEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates the arguments and runs one algorithm with the default policies.
pub fn schedule(
    algorithm: Algorithm,
    requests: &[Cylinder],
    head: Cylinder,
    disk_size: u32,
) -> ValidationResult<SeekResult> {
    let input = SimulationInput::new(requests.to_vec(), head, disk_size)?;
    Ok(SeekEngine::new().run(algorithm, &input))
}

/// Results of every algorithm on the same input, in canonical order.
///
/// Serializes as a JSON object keyed by algorithm name; keys appear in
/// canonical order (FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK).
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    results: Vec<SeekResult>,
}

impl Comparison {
    /// Result of `algorithm`.
    pub fn get(&self, algorithm: Algorithm) -> Option<&SeekResult> {
        self.results.iter().find(|r| r.algorithm() == algorithm)
    }

    /// Results in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &SeekResult> {
        self.results.iter()
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether there are no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Result with the lowest total seek time. Ties go to the earlier algorithm.
    pub fn best(&self) -> Option<&SeekResult> {
        self.results.iter().min_by_key(|r| r.total_seek_time())
    }
}

impl Serialize for Comparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for r in &self.results {
            map.serialize_entry(r.algorithm().name(), r)?;
        }
        map.end()
    }
}

/// Engine output for an [`AlgorithmSelector`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// One algorithm was requested.
    Single(SeekResult),
    /// `ALL` was requested.
    All(Comparison),
}

impl Outcome {
    /// Every result, in canonical order.
    pub fn results(&self) -> std::slice::Iter<'_, SeekResult> {
        match self {
            Outcome::Single(r) => std::slice::from_ref(r).iter(),
            Outcome::All(c) => c.results.iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::total_seek_time;

    fn reference() -> SimulationInput {
        SimulationInput::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200).unwrap()
    }

    #[test]
    fn test_reference_metrics() {
        let engine = SeekEngine::new();
        let input = reference();
        let expected = [
            (Algorithm::Fcfs, 640, 80.0),
            (Algorithm::Sstf, 236, 29.5),
            (Algorithm::Scan, 331, 41.375),
            (Algorithm::CScan, 382, 47.75),
            (Algorithm::Look, 299, 37.375),
            (Algorithm::CLook, 322, 40.25),
        ];
        for (algorithm, total, avg) in expected {
            let r = engine.run(algorithm, &input);
            assert_eq!(r.algorithm(), algorithm);
            assert_eq!(r.total_seek_time(), total, "{algorithm}");
            assert!((r.average_seek_time() - avg).abs() < 1e-10, "{algorithm}");
            assert_eq!(r.request_count(), 8);
        }
    }

    #[test]
    fn test_totals_recompute_from_path() {
        let engine = SeekEngine::new();
        let input = reference();
        for r in engine.run_all(&input).iter() {
            assert_eq!(
                total_seek_time(input.head(), r.head_path()),
                r.total_seek_time()
            );
        }
        // No boundary trips: the service order alone accounts for the total.
        for a in [Algorithm::Fcfs, Algorithm::Sstf, Algorithm::Look, Algorithm::CLook] {
            let r = engine.run(a, &input);
            assert_eq!(
                total_seek_time(input.head(), r.seek_sequence()),
                r.total_seek_time()
            );
        }
    }

    #[test]
    fn test_run_all_matches_single_runs() {
        let engine = SeekEngine::new();
        let input = reference();
        let all = engine.run_all(&input);
        assert_eq!(all.len(), 6);
        let order: Vec<Algorithm> = all.iter().map(|r| r.algorithm()).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        for a in Algorithm::ALL {
            assert_eq!(all.get(a), Some(&engine.run(a, &input)));
        }
    }

    #[test]
    fn test_comparison_serializes_in_canonical_order() {
        let all = SeekEngine::new().run_all(&reference());
        let json = serde_json::to_string(&all).unwrap();
        let positions: Vec<usize> = Algorithm::ALL
            .iter()
            .map(|a| json.find(&format!("\"{}\":", a.name())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_best() {
        let all = SeekEngine::new().run_all(&reference());
        assert_eq!(all.best().map(|r| r.algorithm()), Some(Algorithm::Sstf));
    }

    #[test]
    fn test_dispatch() {
        let engine = SeekEngine::new();
        let input = reference();
        match engine.dispatch(AlgorithmSelector::Single(Algorithm::Look), &input) {
            Outcome::Single(r) => assert_eq!(r.total_seek_time(), 299),
            Outcome::All(_) => panic!("expected a single result"),
        }
        match engine.dispatch(AlgorithmSelector::All, &input) {
            Outcome::All(c) => assert_eq!(c.len(), 6),
            Outcome::Single(_) => panic!("expected a comparison"),
        }
    }

    #[test]
    fn test_outcome_results() {
        let engine = SeekEngine::new();
        let input = reference();
        let single = engine.dispatch(AlgorithmSelector::Single(Algorithm::CLook), &input);
        let names: Vec<Algorithm> = single.results().map(|r| r.algorithm()).collect();
        assert_eq!(names, vec![Algorithm::CLook]);

        let all = engine.dispatch(AlgorithmSelector::All, &input);
        let names: Vec<Algorithm> = all.results().map(|r| r.algorithm()).collect();
        assert_eq!(names, Algorithm::ALL.to_vec());
    }

    #[test]
    fn test_empty_input_all_algorithms() {
        let input = SimulationInput::new(vec![], 10, 20).unwrap();
        for r in SeekEngine::new().run_all(&input).iter() {
            assert!(r.seek_sequence().is_empty());
            assert_eq!(r.total_seek_time(), 0);
            assert_eq!(r.average_seek_time(), 0.0);
        }
    }

    #[test]
    fn test_engine_policies_apply() {
        let input = reference();
        let down = SeekEngine::new().with_direction(SweepDirection::Down);
        assert_eq!(down.run(Algorithm::Scan, &input).total_seek_time(), 236);
        // FCFS and SSTF are direction-independent.
        assert_eq!(down.run(Algorithm::Fcfs, &input).total_seek_time(), 640);
        assert_eq!(down.run(Algorithm::Sstf, &input).total_seek_time(), 236);
    }

    #[test]
    fn test_schedule_free_function() {
        let r = schedule(Algorithm::Fcfs, &[98, 183, 37, 122, 14, 124, 65, 67], 53, 200).unwrap();
        assert_eq!(r.seek_sequence(), &[98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(r.total_seek_time(), 640);

        assert!(schedule(Algorithm::Fcfs, &[200], 53, 200).is_err());
    }

    #[test]
    fn test_input_not_mutated() {
        let input = reference();
        let before = input.clone();
        let _ = SeekEngine::new().run_all(&input);
        assert_eq!(input, before);
    }
}
