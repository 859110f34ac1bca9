//! Fixed scheduling policies.
//!
//! SSTF tie-breaking and the initial sweep direction of the SCAN family have
//! no single textbook definition. Both change `total_seek_time`, so they are
//! pinned here as named defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Initial head movement of SCAN, C-SCAN, LOOK and C-LOOK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepDirection {
    /// Toward `disk_size - 1`.
    #[default]
    Up,
    /// Toward cylinder 0.
    Down,
}

/// How SSTF chooses among pending requests at equal distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SstfTieBreak {
    /// The request that arrived first wins.
    #[default]
    ArrivalOrder,
    /// The smaller cylinder wins.
    LowerCylinder,
}

/// SCAN-family algorithms start moving toward higher cylinders.
pub const DEFAULT_SWEEP_DIRECTION: SweepDirection = SweepDirection::Up;

/// SSTF serves the earliest-arrived request among equally near ones.
pub const DEFAULT_SSTF_TIE_BREAK: SstfTieBreak = SstfTieBreak::ArrivalOrder;

impl SweepDirection {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SweepDirection::Up => SweepDirection::Down,
            SweepDirection::Down => SweepDirection::Up,
        }
    }
}

impl fmt::Display for SweepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SweepDirection::Up => "up",
            SweepDirection::Down => "down",
        })
    }
}

impl FromStr for SweepDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "increasing" => Ok(SweepDirection::Up),
            "down" | "decreasing" => Ok(SweepDirection::Down),
            other => Err(format!("unknown sweep direction '{other}' (expected up or down)")),
        }
    }
}

impl fmt::Display for SstfTieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SstfTieBreak::ArrivalOrder => "arrival_order",
            SstfTieBreak::LowerCylinder => "lower_cylinder",
        })
    }
}

impl FromStr for SstfTieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "arrival" | "arrival_order" => Ok(SstfTieBreak::ArrivalOrder),
            "lower" | "lower_cylinder" => Ok(SstfTieBreak::LowerCylinder),
            other => Err(format!(
                "unknown tie-break '{other}' (expected arrival or lower)"
            )),
        }
    }
}
