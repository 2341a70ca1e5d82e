use hora_props::{Tiling, tile};
use proptest::prelude::*;

proptest! {
    #[test]
    fn length_matches_request(base in prop::collection::vec(any::<u8>(), 1..8), len in 0usize..64) {
        prop_assert_eq!(tile(&base, len, Tiling::RoundRobin).len(), len);
        prop_assert_eq!(tile(&base, len, Tiling::Block).len(), len);
    }

    #[test]
    fn round_robin_is_periodic(base in prop::collection::vec(any::<u8>(), 1..8), len in 0usize..64) {
        let out = tile(&base, len, Tiling::RoundRobin);
        for (i, v) in out.iter().enumerate() {
            prop_assert_eq!(*v, base[i % base.len()]);
        }
    }

    #[test]
    fn block_is_non_decreasing_in_slot(base_len in 1usize..8, len in 1usize..64) {
        let base: Vec<usize> = (0..base_len).collect();
        let out = tile(&base, len, Tiling::Block);
        for pair in out.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        prop_assert_eq!(out[0], 0);
    }

    #[test]
    fn block_even_division(base_len in 1usize..6, per in 1usize..6) {
        let base: Vec<usize> = (0..base_len).collect();
        let out = tile(&base, base_len * per, Tiling::Block);
        for (i, v) in out.iter().enumerate() {
            prop_assert_eq!(*v, i / per);
        }
    }
}
