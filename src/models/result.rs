//! Seek result (solution) model.
//!
//! A result is the head's trajectory for one algorithm plus the metrics
//! derived from it. Metrics are never set independently of the trajectory.

use serde::{Serialize, Serializer};

use super::{Algorithm, Cylinder};
use crate::metrics;

/// Head movement produced by a scheduling policy.
///
/// `serviced` holds requests in service order. `path` holds every stop of the
/// head in order: the serviced requests plus any turnaround or wrap-around
/// points the algorithm passes through. The starting head is excluded from both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTrajectory {
    start: Cylinder,
    serviced: Vec<Cylinder>,
    path: Vec<Cylinder>,
}

impl HeadTrajectory {
    /// Empty trajectory starting at `head`.
    pub fn starting_at(head: Cylinder) -> Self {
        Self {
            start: head,
            serviced: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Same, with room for `capacity` serviced requests.
    pub fn with_capacity(head: Cylinder, capacity: usize) -> Self {
        Self {
            start: head,
            serviced: Vec::with_capacity(capacity),
            path: Vec::with_capacity(capacity + 2),
        }
    }

    /// Current head position.
    pub fn position(&self) -> Cylinder {
        self.path.last().copied().unwrap_or(self.start)
    }

    /// Moves to `cylinder` and services the request there.
    pub fn service(&mut self, cylinder: Cylinder) {
        self.serviced.push(cylinder);
        self.path.push(cylinder);
    }

    /// Services every cylinder in order.
    pub fn service_all(&mut self, cylinders: impl IntoIterator<Item = Cylinder>) {
        for c in cylinders {
            self.service(c);
        }
    }

    /// Moves to `cylinder` without servicing anything. No-op if already there.
    pub fn travel_to(&mut self, cylinder: Cylinder) {
        if self.position() != cylinder {
            self.path.push(cylinder);
        }
    }

    /// Starting head position.
    pub fn start(&self) -> Cylinder {
        self.start
    }

    /// Serviced requests in order.
    pub fn serviced(&self) -> &[Cylinder] {
        &self.serviced
    }

    /// Every stop of the head in order.
    pub fn path(&self) -> &[Cylinder] {
        &self.path
    }
}

/// Outcome of running one algorithm.
///
/// Immutable: built only through [`SeekResult::from_trajectory`], which
/// derives `total_seek_time` and `average_seek_time` from the head path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekResult {
    algorithm: Algorithm,
    seek_sequence: Vec<Cylinder>,
    head_path: Vec<Cylinder>,
    total_seek_time: u64,
    #[serde(serialize_with = "serialize_rounded")]
    average_seek_time: f64,
}

/// Averages go on the wire rounded to two decimals, exact halves to even.
fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 100.0).round_ties_even() / 100.0)
}

impl SeekResult {
    /// Builds a result, computing metrics from the trajectory.
    pub fn from_trajectory(algorithm: Algorithm, trajectory: HeadTrajectory) -> Self {
        let total = metrics::total_seek_time(trajectory.start, &trajectory.path);
        let average = metrics::average_seek_time(total, trajectory.serviced.len());
        Self {
            algorithm,
            seek_sequence: trajectory.serviced,
            head_path: trajectory.path,
            total_seek_time: total,
            average_seek_time: average,
        }
    }

    /// Algorithm that produced this result.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Requests in service order.
    pub fn seek_sequence(&self) -> &[Cylinder] {
        &self.seek_sequence
    }

    /// Every head stop, including turnaround and wrap-around points.
    pub fn head_path(&self) -> &[Cylinder] {
        &self.head_path
    }

    /// Total head movement in cylinders.
    pub fn total_seek_time(&self) -> u64 {
        self.total_seek_time
    }

    /// Total head movement per serviced request (0 when nothing was serviced).
    pub fn average_seek_time(&self) -> f64 {
        self.average_seek_time
    }

    /// Number of serviced requests.
    pub fn request_count(&self) -> usize {
        self.seek_sequence.len()
    }
}
