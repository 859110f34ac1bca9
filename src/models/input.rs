//! Validated simulation input.

use serde::Serialize;

use crate::validation::{self, ValidationResult};

/// A cylinder index on the simulated disk.
pub type Cylinder = u32;

/// A validated `(requests, head, disk_size)` triple.
///
/// Every request and the head lie in `[0, disk_size - 1]` and `disk_size > 0`.
/// The only public way to build one is through validation, so scheduling
/// never sees out-of-range cylinders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationInput {
    requests: Vec<Cylinder>,
    head: Cylinder,
    disk_size: u32,
}

impl SimulationInput {
    /// Validates and builds an input. Returns every detected problem on failure.
    pub fn new(requests: Vec<Cylinder>, head: Cylinder, disk_size: u32) -> ValidationResult<Self> {
        validation::check_ranges(&requests, head, disk_size)?;
        Ok(Self::new_unchecked(requests, head, disk_size))
    }

    pub(crate) fn new_unchecked(requests: Vec<Cylinder>, head: Cylinder, disk_size: u32) -> Self {
        Self {
            requests,
            head,
            disk_size,
        }
    }

    /// Pending requests in arrival order.
    pub fn requests(&self) -> &[Cylinder] {
        &self.requests
    }

    /// Starting head position.
    pub fn head(&self) -> Cylinder {
        self.head
    }

    /// Number of cylinders on the disk.
    pub fn disk_size(&self) -> u32 {
        self.disk_size
    }

    /// Highest addressable cylinder (`disk_size - 1`).
    pub fn last_cylinder(&self) -> Cylinder {
        self.disk_size - 1
    }
}
