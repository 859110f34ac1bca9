//! Sweep context passed to scheduling policies.

use crate::models::policy::{DEFAULT_SSTF_TIE_BREAK, DEFAULT_SWEEP_DIRECTION};
use crate::models::{Cylinder, SimulationInput, SstfTieBreak, SweepDirection};

/// Disk geometry and fixed policies for one scheduling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepContext {
    /// Starting head position.
    pub head: Cylinder,
    /// Number of cylinders on the disk.
    pub disk_size: u32,
    /// Initial direction of SCAN-family sweeps.
    pub direction: SweepDirection,
    /// SSTF tie-breaking rule.
    pub tie_break: SstfTieBreak,
}

impl SweepContext {
    /// Creates a context with the default policies.
    pub fn new(head: Cylinder, disk_size: u32) -> Self {
        Self {
            head,
            disk_size,
            direction: DEFAULT_SWEEP_DIRECTION,
            tie_break: DEFAULT_SSTF_TIE_BREAK,
        }
    }

    /// Creates a context for a validated input.
    pub fn for_input(input: &SimulationInput) -> Self {
        Self::new(input.head(), input.disk_size())
    }

    /// Sets the sweep direction.
    pub fn with_direction(mut self, direction: SweepDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the SSTF tie-break.
    pub fn with_tie_break(mut self, tie_break: SstfTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Highest addressable cylinder.
    pub fn last_cylinder(&self) -> Cylinder {
        self.disk_size.saturating_sub(1)
    }

    /// Edge of the disk the head reaches when sweeping in `direction`.
    pub fn edge(&self, direction: SweepDirection) -> Cylinder {
        match direction {
            SweepDirection::Up => self.last_cylinder(),
            SweepDirection::Down => 0,
        }
    }
}
