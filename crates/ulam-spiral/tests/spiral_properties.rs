// Property-based tests for the square spiral.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::HashSet;

use proptest::prelude::*;
use ulam_spiral::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn walk_prefix_is_injective(n in 1u64..3_000) {
        let seen: HashSet<_> = SpiralWalk::take_cells(n).collect();
        prop_assert_eq!(seen.len() as u64, n);
    }

    #[test]
    fn closed_form_round_trips(index in 0u64..10_000_000_000) {
        let coord = spiral_to_coord(SpiralIndex(index));
        prop_assert_eq!(coord_to_spiral(coord), Some(SpiralIndex(index)));
    }

    #[test]
    fn coord_round_trips(x in -100_000i64..100_000, y in -100_000i64..100_000) {
        let coord = GridCoord::new(x, y);
        let index = coord_to_spiral(coord);
        prop_assert!(index.is_some());
        prop_assert_eq!(index.map(spiral_to_coord), Some(coord));
    }

    #[test]
    fn ring_matches_coordinate_distance(index in 0u64..1_000_000_000) {
        let index = SpiralIndex(index);
        prop_assert_eq!(spiral_to_coord(index).ring(), index.ring());
    }

    #[test]
    fn ring_never_decreases_along_walk(n in 2u64..2_000) {
        let rings: Vec<u64> = SpiralWalk::take_cells(n).map(|c| c.ring()).collect();
        prop_assert!(rings.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn consecutive_cells_are_adjacent(index in 0u64..1_000_000_000) {
        let a = spiral_to_coord(SpiralIndex(index));
        let b = spiral_to_coord(SpiralIndex(index + 1));
        let d = b - a;
        prop_assert_eq!(d.x.abs() + d.y.abs(), 1);
    }

    #[test]
    fn trial_division_agrees_with_sieve(n in 1i64..5_000) {
        let has_divisor = (2..n).any(|d| n % d == 0);
        prop_assert_eq!(is_prime(n), Ok(n > 1 && !has_divisor));
    }
}
