//! Algorithm identifiers and the name selector used by the dispatch layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A disk-scheduling algorithm.
///
/// The declaration order is the canonical order used for ALL-mode output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    /// First Come First Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First.
    #[serde(rename = "SSTF")]
    Sstf,
    /// Elevator: sweep to the disk edge, then reverse.
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN: sweep to the disk edge, wrap to the opposite edge.
    #[serde(rename = "C-SCAN")]
    CScan,
    /// SCAN that turns around at the last pending request.
    #[serde(rename = "LOOK")]
    Look,
    /// C-SCAN that wraps between the outermost pending requests.
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Algorithm {
    /// All algorithms in canonical order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
        Algorithm::Look,
        Algorithm::CLook,
    ];

    /// Wire name (e.g., "C-SCAN").
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
            Algorithm::Look => "LOOK",
            Algorithm::CLook => "C-LOOK",
        }
    }

    /// Comma-separated list of valid names, for error messages.
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown algorithm '{}'. Supported: {}, ALL",
            self.0,
            Algorithm::supported_names()
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == upper)
            .ok_or(UnknownAlgorithm(upper))
    }
}

/// What the caller asked for: one algorithm, or all six for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmSelector {
    /// Run a single algorithm.
    Single(Algorithm),
    /// Run every algorithm in canonical order.
    All,
}

impl AlgorithmSelector {
    /// Meta-name selecting every algorithm.
    pub const ALL_NAME: &'static str = "ALL";

    /// Algorithms covered by this selector, in canonical order.
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmSelector::Single(a) => vec![a],
            AlgorithmSelector::All => Algorithm::ALL.to_vec(),
        }
    }
}

impl FromStr for AlgorithmSelector {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_NAME) {
            return Ok(AlgorithmSelector::All);
        }
        s.parse().map(AlgorithmSelector::Single)
    }
}

impl fmt::Display for AlgorithmSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmSelector::Single(a) => a.fmt(f),
            AlgorithmSelector::All => f.write_str(Self::ALL_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("FCFS".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("c-scan".parse::<Algorithm>(), Ok(Algorithm::CScan));
        assert_eq!(" C-Look ".parse::<Algorithm>(), Ok(Algorithm::CLook));
    }

    #[test]
    fn test_unknown_lists_supported() {
        let err = "ELEVATOR".parse::<Algorithm>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ELEVATOR"));
        assert!(msg.contains("FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK"));
    }

    #[test]
    fn test_selector() {
        assert_eq!("all".parse::<AlgorithmSelector>(), Ok(AlgorithmSelector::All));
        assert_eq!(
            "look".parse::<AlgorithmSelector>(),
            Ok(AlgorithmSelector::Single(Algorithm::Look))
        );
        assert!("".parse::<AlgorithmSelector>().is_err());
        assert_eq!(AlgorithmSelector::All.algorithms().len(), 6);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Algorithm::CScan).unwrap();
        assert_eq!(json, "\"C-SCAN\"");
        let back: Algorithm = serde_json::from_str("\"C-LOOK\"").unwrap();
        assert_eq!(back, Algorithm::CLook);
    }
}
