//! Built-in disk-scheduling policies.
//!
//! # Categories
//!
//! - **Order-based**: FCFS
//! - **Greedy**: SSTF
//! - **Sweep (elevator)**: SCAN, LOOK
//! - **Circular sweep**: C-SCAN, C-LOOK
//!
//! # Fixed policies
//! Sweeps start in `context.direction` (default: toward higher cylinders).
//! Requests at the head belong to the first sweep. SSTF breaks distance ties
//! with `context.tie_break` (default: earliest arrival).
//!
//! # Boundary travel
//! With any request pending, SCAN and C-SCAN always finish the first sweep at
//! the disk edge, and C-SCAN always wraps to the opposite edge. Both stops are
//! recorded in the head path and counted in the total seek time. An empty
//! request set moves nothing. LOOK and C-LOOK never travel past a pending
//! request.

use super::{SeekPolicy, SweepContext};
use crate::models::{Algorithm, Cylinder, HeadTrajectory, SstfTieBreak, SweepDirection};

/// Returns the built-in policy for `algorithm`.
pub fn policy_for(algorithm: Algorithm) -> &'static dyn SeekPolicy {
    match algorithm {
        Algorithm::Fcfs => &Fcfs,
        Algorithm::Sstf => &Sstf,
        Algorithm::Scan => &Scan,
        Algorithm::CScan => &CScan,
        Algorithm::Look => &Look,
        Algorithm::CLook => &CLook,
    }
}

/// Splits requests into the first sweep and the rest.
///
/// `ahead` is in travel order from the head. `behind` is ordered nearest to
/// the head first, which is the return-sweep order after a reversal.
fn split_sweeps(
    requests: &[Cylinder],
    head: Cylinder,
    direction: SweepDirection,
) -> (Vec<Cylinder>, Vec<Cylinder>) {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();

    match direction {
        SweepDirection::Up => {
            let at = sorted.partition_point(|&r| r < head);
            let ahead = sorted.split_off(at);
            sorted.reverse();
            (ahead, sorted)
        }
        SweepDirection::Down => {
            let at = sorted.partition_point(|&r| r <= head);
            let behind = sorted.split_off(at);
            sorted.reverse();
            (sorted, behind)
        }
    }
}

// ======================== Order-based ========================

/// First Come First Served.
///
/// Services requests in arrival order. Fair, but ignores head position.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn plan(&self, requests: &[Cylinder], context: &SweepContext) -> HeadTrajectory {
        let mut t = HeadTrajectory::with_capacity(context.head, requests.len());
        t.service_all(requests.iter().copied());
        t
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly services the pending request nearest to the current head
/// position. Minimizes each individual seek; may starve distant requests.
///
/// O(n²): the pending set is scanned at every step.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekPolicy for Sstf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sstf
    }

    fn plan(&self, requests: &[Cylinder], context: &SweepContext) -> HeadTrajectory {
        let mut t = HeadTrajectory::with_capacity(context.head, requests.len());
        // Kept in arrival order; `Vec::remove` preserves it.
        let mut pending = requests.to_vec();

        while !pending.is_empty() {
            let current = t.position();
            let best = pending
                .iter()
                .enumerate()
                .min_by_key(|&(i, &r)| {
                    let tie = match context.tie_break {
                        SstfTieBreak::ArrivalOrder => i as u64,
                        SstfTieBreak::LowerCylinder => u64::from(r),
                    };
                    (current.abs_diff(r), tie)
                })
                .map(|(i, _)| i);

            match best {
                Some(i) => t.service(pending.remove(i)),
                None => break,
            }
        }
        t
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

// ======================== Sweep ========================

/// SCAN (elevator).
///
/// Sweeps in the initial direction servicing requests, continues to the disk
/// edge, then reverses and services the rest.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl SeekPolicy for Scan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Scan
    }

    fn plan(&self, requests: &[Cylinder], context: &SweepContext) -> HeadTrajectory {
        let (ahead, behind) = split_sweeps(requests, context.head, context.direction);
        let mut t = HeadTrajectory::with_capacity(context.head, requests.len());

        if requests.is_empty() {
            return t;
        }

        t.service_all(ahead);
        t.travel_to(context.edge(context.direction));
        t.service_all(behind);
        t
    }

    fn description(&self) -> &'static str {
        "Elevator: sweep to the disk edge, then reverse"
    }
}

/// LOOK.
///
/// SCAN that reverses at the last pending request instead of the disk edge.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl SeekPolicy for Look {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Look
    }

    fn plan(&self, requests: &[Cylinder], context: &SweepContext) -> HeadTrajectory {
        let (ahead, behind) = split_sweeps(requests, context.head, context.direction);
        let mut t = HeadTrajectory::with_capacity(context.head, requests.len());

        t.service_all(ahead);
        t.service_all(behind);
        t
    }

    fn description(&self) -> &'static str {
        "Elevator that reverses at the last pending request"
    }
}

// ======================== Circular sweep ========================

/// Circular SCAN.
///
/// Sweeps in the initial direction to the disk edge, jumps to the opposite
/// edge, and continues in the same direction. The jump is head movement and
/// counts toward the total seek time (`disk_size - 1` cylinders).
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl SeekPolicy for CScan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::CScan
    }

    fn plan(&self, requests: &[Cylinder], context: &SweepContext) -> HeadTrajectory {
        let (ahead, mut behind) = split_sweeps(requests, context.head, context.direction);
        let mut t = HeadTrajectory::with_capacity(context.head, requests.len());

        if requests.is_empty() {
            return t;
        }

        t.service_all(ahead);
        t.travel_to(context.edge(context.direction));

        // After the wrap the head keeps its direction: farthest-from-head first.
        behind.reverse();
        let landing = context.edge(context.direction.reversed());
        if behind.first() != Some(&landing) {
            t.travel_to(landing);
        }
        t.service_all(behind);
        t
    }

    fn description(&self) -> &'static str {
        "Circular SCAN: sweep to the disk edge, wrap to the opposite edge"
    }
}

/// Circular LOOK.
///
/// Sweeps in the initial direction to the last pending request, jumps to the
/// farthest pending request on the other side, and continues in the same
/// direction. The jump distance counts toward the total seek time.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl SeekPolicy for CLook {
    fn algorithm(&self) -> Algorithm {
        Algorithm::CLook
    }

    fn plan(&self, requests: &[Cylinder], context: &SweepContext) -> HeadTrajectory {
        let (ahead, behind) = split_sweeps(requests, context.head, context.direction);
        let mut t = HeadTrajectory::with_capacity(context.head, requests.len());

        t.service_all(ahead);
        t.service_all(behind.into_iter().rev());
        t
    }

    fn description(&self) -> &'static str {
        "Circular LOOK: wrap between the outermost pending requests"
    }
}
