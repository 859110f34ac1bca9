//! Random request workloads.

use rand::Rng;

use super::Cylinder;

/// Draws `count` requests uniformly from `[0, disk_size - 1]`.
///
/// Duplicates are possible. Returns an empty list when `disk_size` is 0.
pub fn random_requests<R: Rng>(count: usize, disk_size: u32, rng: &mut R) -> Vec<Cylinder> {
    if disk_size == 0 {
        return Vec::new();
    }
    (0..count).map(|_| rng.random_range(0..disk_size)).collect()
}

/// Draws a head position uniformly from `[0, disk_size - 1]`.
pub fn random_head<R: Rng>(disk_size: u32, rng: &mut R) -> Option<Cylinder> {
    (disk_size > 0).then(|| rng.random_range(0..disk_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_requests_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let reqs = random_requests(500, 37, &mut rng);
        assert_eq!(reqs.len(), 500);
        assert!(reqs.iter().all(|&r| r < 37));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_requests(20, 1000, &mut StdRng::seed_from_u64(7));
        let b = random_requests(20, 1000, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_disk() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_requests(5, 0, &mut rng).is_empty());
        assert!(random_head(0, &mut rng).is_none());
        assert_eq!(random_head(1, &mut rng), Some(0));
    }
}
