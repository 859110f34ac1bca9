//! Seek-time metrics.
//!
//! `total_seek_time` and `average_seek_time` are the two summaries every
//! result carries. `SeekKpi` adds movement statistics for comparing
//! algorithms on the same workload.
//!
//! All distances are integer cylinder counts; only the average is a float.

mod kpi;

pub use kpi::{over_threshold, SeekKpi};

use crate::models::Cylinder;

/// Sum of `|p[i] - p[i-1]|` over `[head] + path`.
pub fn total_seek_time(head: Cylinder, path: &[Cylinder]) -> u64 {
    path.iter()
        .scan(head, |prev, &pos| {
            let d = u64::from(prev.abs_diff(pos));
            *prev = pos;
            Some(d)
        })
        .sum()
}

/// `total / request_count`, or 0 when no request was serviced.
pub fn average_seek_time(total: u64, request_count: usize) -> f64 {
    if request_count == 0 {
        0.0
    } else {
        total as f64 / request_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_basic() {
        // 53→98→183→37 = 45 + 85 + 146
        assert_eq!(total_seek_time(53, &[98, 183, 37]), 276);
    }

    #[test]
    fn test_total_empty_and_stationary() {
        assert_eq!(total_seek_time(10, &[]), 0);
        assert_eq!(total_seek_time(10, &[10, 10]), 0);
    }

    #[test]
    fn test_total_no_overflow_on_large_disks() {
        let far = u32::MAX;
        let path = [far, 0, far, 0];
        assert_eq!(total_seek_time(0, &path), 4 * u64::from(far));
    }

    #[test]
    fn test_average() {
        assert!((average_seek_time(331, 8) - 41.375).abs() < 1e-10);
        assert_eq!(average_seek_time(0, 0), 0.0);
        assert_eq!(average_seek_time(17, 0), 0.0);
    }
}
