//! Disk scheduling policies and the engine that runs them.
//!
//! Each of the six algorithms is a [`SeekPolicy`]. The [`SeekEngine`] maps
//! an algorithm (or `ALL`) to its policy, runs it, and derives metrics.
//!
//! # Usage
//!
//! ```
//! use disk_scheduling::dispatching::SeekEngine;
//! use disk_scheduling::models::{Algorithm, SimulationInput};
//!
//! let input = SimulationInput::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200).unwrap();
//! let result = SeekEngine::new().run(Algorithm::Sstf, &input);
//! assert_eq!(result.total_seek_time(), 236);
//! ```
//!
//! # Complexity
//!
//! FCFS is O(n). SCAN, C-SCAN, LOOK and C-LOOK sort once: O(n log n).
//! SSTF scans the pending set at every step: O(n²). The engine does not
//! bound n; callers must (see `limits.max_requests` in the server config).
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 11
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod context;
mod engine;
pub mod rules;

pub use context::SweepContext;
pub use engine::{schedule, Comparison, Outcome, SeekEngine};

use crate::models::{Algorithm, Cylinder, HeadTrajectory};
use std::fmt::Debug;

/// A disk-scheduling algorithm.
///
/// Implementations are stateless: all inputs arrive as arguments and the
/// produced trajectory is the only output. Requests must lie in
/// `[0, context.disk_size - 1]`.
pub trait SeekPolicy: Send + Sync + Debug {
    /// Algorithm implemented by this policy.
    fn algorithm(&self) -> Algorithm;

    /// Plans the head movement that services every request exactly once.
    fn plan(&self, requests: &[Cylinder], context: &SweepContext) -> HeadTrajectory;

    /// Policy name (e.g., "C-SCAN").
    fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
