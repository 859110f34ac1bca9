//! Head-movement indicators (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total seek | Sum of head movement over the path |
//! | Average seek | Total seek per serviced request |
//! | Max seek | Largest single movement between two stops |
//! | Reversals | Number of direction changes (wrap-arounds count) |
//! | Span | Lowest and highest cylinder the head reaches |

use serde::Serialize;

use crate::models::{Algorithm, Cylinder, SeekResult};

/// Movement indicators of one result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekKpi {
    /// Total head movement (cylinders).
    pub total_seek_time: u64,
    /// Movement per serviced request.
    pub average_seek_time: f64,
    /// Largest single movement between consecutive stops.
    pub max_seek: u64,
    /// Number of times the head changes direction.
    pub reversals: usize,
    /// Lowest cylinder reached, including the start.
    pub min_cylinder: Cylinder,
    /// Highest cylinder reached, including the start.
    pub max_cylinder: Cylinder,
}

impl SeekKpi {
    /// Computes KPIs for `result`, which started at `head`.
    pub fn calculate(head: Cylinder, result: &SeekResult) -> Self {
        let mut max_seek: u64 = 0;
        let mut reversals = 0;
        let mut min_cylinder = head;
        let mut max_cylinder = head;
        // Sign of the last non-zero move: true = up.
        let mut last_up: Option<bool> = None;
        let mut prev = head;

        for &pos in result.head_path() {
            max_seek = max_seek.max(u64::from(prev.abs_diff(pos)));
            min_cylinder = min_cylinder.min(pos);
            max_cylinder = max_cylinder.max(pos);

            if pos != prev {
                let up = pos > prev;
                if last_up.is_some_and(|l| l != up) {
                    reversals += 1;
                }
                last_up = Some(up);
            }
            prev = pos;
        }

        Self {
            total_seek_time: result.total_seek_time(),
            average_seek_time: result.average_seek_time(),
            max_seek,
            reversals,
            min_cylinder,
            max_cylinder,
        }
    }

    /// Cylinders between the lowest and highest head position.
    pub fn span(&self) -> u32 {
        self.max_cylinder - self.min_cylinder
    }

    /// Whether total movement stays within `max_total`.
    pub fn meets_threshold(&self, max_total: u64) -> bool {
        self.total_seek_time <= max_total
    }
}

/// Algorithms whose total movement from `head` exceeds `max_total`.
pub fn over_threshold<'a>(
    head: Cylinder,
    results: impl IntoIterator<Item = &'a SeekResult>,
    max_total: u64,
) -> Vec<Algorithm> {
    results
        .into_iter()
        .filter(|r| !SeekKpi::calculate(head, r).meets_threshold(max_total))
        .map(|r| r.algorithm())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::SeekEngine;
    use crate::models::{HeadTrajectory, SimulationInput};

    fn result_from(head: Cylinder, serviced: &[Cylinder]) -> SeekResult {
        let mut t = HeadTrajectory::starting_at(head);
        t.service_all(serviced.iter().copied());
        SeekResult::from_trajectory(Algorithm::Fcfs, t)
    }

    #[test]
    fn test_kpi_basic() {
        let r = result_from(53, &[98, 183, 37]);
        let kpi = SeekKpi::calculate(53, &r);
        assert_eq!(kpi.total_seek_time, 276);
        assert_eq!(kpi.max_seek, 146);
        assert_eq!(kpi.reversals, 1);
        assert_eq!(kpi.min_cylinder, 37);
        assert_eq!(kpi.max_cylinder, 183);
        assert_eq!(kpi.span(), 146);
    }

    #[test]
    fn test_kpi_stationary_moves_do_not_reverse() {
        let r = result_from(10, &[20, 20, 30, 5]);
        let kpi = SeekKpi::calculate(10, &r);
        assert_eq!(kpi.reversals, 1);
    }

    #[test]
    fn test_kpi_empty() {
        let r = result_from(42, &[]);
        let kpi = SeekKpi::calculate(42, &r);
        assert_eq!(kpi.total_seek_time, 0);
        assert_eq!(kpi.max_seek, 0);
        assert_eq!(kpi.reversals, 0);
        assert_eq!(kpi.span(), 0);
    }

    #[test]
    fn test_meets_threshold() {
        let r = result_from(0, &[100]);
        let kpi = SeekKpi::calculate(0, &r);
        assert!(kpi.meets_threshold(100));
        assert!(!kpi.meets_threshold(99));
    }

    #[test]
    fn test_over_threshold() {
        let input =
            SimulationInput::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200).unwrap();
        let all = SeekEngine::new().run_all(&input);
        assert_eq!(
            over_threshold(53, all.iter(), 330),
            vec![Algorithm::Fcfs, Algorithm::Scan, Algorithm::CScan]
        );
        assert!(over_threshold(53, all.iter(), 640).is_empty());
    }
}
