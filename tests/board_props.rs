use gridgames::battleship::{Board, BoardConfig, CellMark, ShotResult};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn placed_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(BoardConfig::default());
    board.place_fleet(&mut rng).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_never_touches(seed in any::<u64>()) {
        let board = placed_board(seed);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                for (ar, ac) in a.cells() {
                    for (br, bc) in b.cells() {
                        let chebyshev = ar.abs_diff(br).max(ac.abs_diff(bc));
                        prop_assert!(
                            chebyshev >= 2,
                            "ships touch: ({},{}) vs ({},{})",
                            ar, ac, br, bc
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn owner_sees_every_ship_cell_and_opponent_none(seed in any::<u64>()) {
        let mut board = placed_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0xdead_beef);
        let shots = rng.random_range(0..40);
        for _ in 0..shots {
            let coord = (rng.random_range(0..10), rng.random_range(0..10));
            board.receive_shot(coord).unwrap();
        }
        let own = board.visible_state(true);
        let visible = own
            .iter()
            .flatten()
            .filter(|&&m| matches!(m, CellMark::Ship | CellMark::Hit))
            .count();
        prop_assert_eq!(visible, board.ship_cell_count());
        let theirs = board.visible_state(false);
        let leaked = theirs
            .iter()
            .flatten()
            .filter(|&&m| m == CellMark::Ship)
            .count();
        prop_assert_eq!(leaked, 0);
    }

    #[test]
    fn second_shot_never_mutates(
        seed in any::<u64>(),
        row in 0..10usize,
        col in 0..10usize,
    ) {
        let mut board = placed_board(seed);
        let first = board.receive_shot((row, col)).unwrap();
        prop_assert_ne!(first, ShotResult::AlreadyShot);
        let misses = board.misses().to_vec();
        let shots = board.shot_count();
        let second = board.receive_shot((row, col)).unwrap();
        prop_assert_eq!(second, ShotResult::AlreadyShot);
        prop_assert_eq!(board.misses(), &misses[..]);
        prop_assert_eq!(board.shot_count(), shots);
    }
}
