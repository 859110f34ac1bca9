//! Disk scheduling domain models.
//!
//! Provides the data types for a single simulation: the validated input,
//! the algorithm identifiers, the fixed sweep policies, and the result.
//!
//! # Terms
//!
//! | Term | Meaning |
//! |------|---------|
//! | Cylinder | Addressable track position, `0..disk_size` |
//! | Head | Current read/write position |
//! | Seek time | Absolute cylinder difference between two consecutive head stops |
//! | Sweep | One directional traversal before reversal or wrap-around |

mod algorithm;
mod input;
pub mod policy;
mod result;
pub mod workload;

pub use algorithm::{Algorithm, AlgorithmSelector, UnknownAlgorithm};
pub use input::{Cylinder, SimulationInput};
pub use policy::{SstfTieBreak, SweepDirection};
pub use result::{HeadTrajectory, SeekResult};
