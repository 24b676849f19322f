use gridgames::match3::{
    Cell, GameState, GridConfig, MatchEngine, ScoreBoard, ScoreConfig, SelectionTracker, Tile,
    TileClickResult, TileGrid,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn t(color: u8) -> Cell {
    Some(Tile(color))
}

/// Square base pattern with no 3-runs: colors 0-3 tiled in 2x2 blocks,
/// so both rows and columns alternate between two colors.
fn no_match_rows(size: usize) -> Vec<Vec<Cell>> {
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| t(((row % 2) * 2 + (col % 2)) as u8))
                .collect()
        })
        .collect()
}

fn config(size: usize) -> GridConfig {
    GridConfig {
        size,
        colors: 6,
        max_moves: None,
    }
}

#[test]
fn horizontal_triple_marks_exactly_three() {
    let mut rows = no_match_rows(8);
    rows[2][0] = t(4);
    rows[2][1] = t(4);
    rows[2][2] = t(4);
    let engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    let mask = engine.check_matches();
    assert_eq!(mask.count(), 3);
    assert!(mask.is_marked(2, 0));
    assert!(mask.is_marked(2, 1));
    assert!(mask.is_marked(2, 2));
    assert!(!mask.is_marked(2, 3));
}

#[test]
fn run_of_four_marks_all_four() {
    let mut rows = no_match_rows(8);
    for col in 1..5 {
        rows[6][col] = t(5);
    }
    let engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    let mask = engine.check_matches();
    assert_eq!(mask.count(), 4);
    for col in 1..5 {
        assert!(mask.is_marked(6, col));
    }
}

#[test]
fn vertical_triple_detected() {
    let mut rows = no_match_rows(8);
    rows[1][5] = t(4);
    rows[2][5] = t(4);
    rows[3][5] = t(4);
    let engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    let mask = engine.check_matches();
    assert_eq!(mask.count(), 3);
    assert!(mask.is_marked(1, 5));
    assert!(mask.is_marked(2, 5));
    assert!(mask.is_marked(3, 5));
}

#[test]
fn crossing_runs_merge_in_the_mask() {
    let mut rows = no_match_rows(8);
    // plus shape centered on (3, 2)
    rows[3][1] = t(4);
    rows[3][2] = t(4);
    rows[3][3] = t(4);
    rows[2][2] = t(4);
    rows[4][2] = t(4);
    let engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    let mask = engine.check_matches();
    assert_eq!(mask.count(), 5);
    assert!(mask.is_marked(3, 2));
}

#[test]
fn two_in_a_row_is_not_a_match() {
    let mut rows = no_match_rows(8);
    rows[0][0] = t(4);
    rows[0][1] = t(4);
    let engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    assert!(!engine.check_matches().any());
}

#[test]
fn empty_cells_never_match() {
    let mut rows = no_match_rows(8);
    rows[5][2] = None;
    rows[5][3] = None;
    rows[5][4] = None;
    let engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    assert!(!engine.check_matches().any());
}

#[test]
fn remove_matched_empties_and_counts() {
    let mut rows = no_match_rows(8);
    rows[2][0] = t(4);
    rows[2][1] = t(4);
    rows[2][2] = t(4);
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    let mask = engine.check_matches();
    let removed = engine.remove_matched(&mask);
    assert_eq!(removed, 3);
    assert_eq!(engine.grid().color(2, 0), None);
    assert_eq!(engine.grid().color(2, 1), None);
    assert_eq!(engine.grid().color(2, 2), None);
    assert_eq!(engine.grid().empty_count(), 3);
}

#[test]
fn drop_is_stable_per_column() {
    let mut grid = TileGrid::new(5);
    grid.set(0, 1, t(1));
    grid.set(2, 1, t(2));
    grid.set(4, 1, t(3));
    grid.drop_tiles();
    assert_eq!(grid.get(0, 1).unwrap(), None);
    assert_eq!(grid.get(1, 1).unwrap(), None);
    assert_eq!(grid.get(2, 1).unwrap(), t(1));
    assert_eq!(grid.get(3, 1).unwrap(), t(2));
    assert_eq!(grid.get(4, 1).unwrap(), t(3));
    assert_eq!(grid.empty_count(), 25 - 3);
}

#[test]
fn fill_assigns_only_palette_colors_to_empties() {
    let mut grid = TileGrid::new(6);
    grid.set(0, 0, t(5));
    let mut rng = SmallRng::seed_from_u64(4);
    let filled = grid.fill_empty(&mut rng, 3);
    assert_eq!(filled, 35);
    assert!(grid.is_full());
    assert_eq!(grid.color(0, 0), Some(Tile(5)));
    for row in 0..6 {
        for col in 0..6 {
            if (row, col) != (0, 0) {
                assert!(grid.color(row, col).unwrap().0 < 3);
            }
        }
    }
}

#[test]
fn non_adjacent_swap_is_a_no_op() {
    let rows = no_match_rows(8);
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows.clone()), config(8));
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(engine.handle_tile_swap((0, 0), (0, 2), &mut rng), 0);
    assert_eq!(engine.handle_tile_swap((0, 0), (1, 1), &mut rng), 0);
    assert_eq!(engine.handle_tile_swap((0, 0), (0, 0), &mut rng), 0);
    assert_eq!(engine.grid().rows(), rows);
    assert_eq!(engine.score(), 0);
}

#[test]
fn out_of_range_swap_is_a_no_op() {
    let rows = no_match_rows(8);
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows.clone()), config(8));
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(engine.handle_tile_swap((7, 7), (8, 7), &mut rng), 0);
    assert_eq!(engine.grid().rows(), rows);
}

#[test]
fn matchless_swap_reverts_exactly() {
    let rows = no_match_rows(8);
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows.clone()), config(8));
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(engine.handle_tile_swap((0, 0), (0, 1), &mut rng), 0);
    assert_eq!(engine.grid().rows(), rows);
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.score(), 0);
}

#[test]
fn matching_swap_resolves_and_scores_once() {
    let mut rows = no_match_rows(8);
    // two 4s waiting at (5,3),(5,4); the third comes up from (6,2)
    rows[5][3] = t(4);
    rows[5][4] = t(4);
    rows[6][2] = t(4);
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(8));
    let mut rng = SmallRng::seed_from_u64(12);
    let removed = engine.handle_tile_swap((6, 2), (5, 2), &mut rng);
    assert!(removed >= 3);
    assert!(engine.grid().is_full());
    assert!(!engine.check_matches().any());
    let expected = ScoreBoard::new(ScoreConfig::default()).points_for(removed as u32);
    assert_eq!(engine.score(), expected);
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn process_matches_clears_planted_run() {
    let mut rows = no_match_rows(16);
    rows[5][2] = t(4);
    rows[5][3] = t(4);
    rows[5][4] = t(4);
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows), config(16));
    let mut rng = SmallRng::seed_from_u64(99);
    let removed = engine.process_matches(&mut rng);
    assert!(removed >= 3);
    assert!(engine.grid().is_full());
    assert!(!engine.check_matches().any());
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn start_settles_into_playing_with_full_matchless_grid() {
    let mut engine = MatchEngine::new(GridConfig {
        size: 10,
        colors: 4,
        max_moves: Some(50),
    });
    assert_eq!(engine.state(), GameState::Initializing);
    let mut rng = SmallRng::seed_from_u64(8);
    engine.start(&mut rng);
    assert_eq!(engine.state(), GameState::Playing);
    assert!(engine.grid().is_full());
    assert!(!engine.check_matches().any());
    // the initial settle is unscored
    assert_eq!(engine.score(), 0);
}

#[test]
fn move_budget_reaches_game_over() {
    let mut rows = no_match_rows(8);
    rows[5][3] = t(4);
    rows[5][4] = t(4);
    rows[6][2] = t(4);
    let cfg = GridConfig {
        size: 8,
        colors: 6,
        max_moves: Some(1),
    };
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows), cfg);
    let mut rng = SmallRng::seed_from_u64(12);
    assert!(engine.handle_tile_swap((6, 2), (5, 2), &mut rng) >= 3);
    assert_eq!(engine.state(), GameState::GameOver);
    assert_eq!(engine.moves_left(), Some(0));
    assert_eq!(engine.handle_tile_swap((0, 0), (0, 1), &mut rng), 0);
}

#[test]
fn failed_swaps_do_not_consume_moves() {
    let rows = no_match_rows(8);
    let cfg = GridConfig {
        size: 8,
        colors: 6,
        max_moves: Some(3),
    };
    let mut engine = MatchEngine::from_grid(TileGrid::from_rows(rows), cfg);
    let mut rng = SmallRng::seed_from_u64(2);
    engine.handle_tile_swap((0, 0), (0, 1), &mut rng);
    engine.handle_tile_swap((0, 0), (5, 5), &mut rng);
    assert_eq!(engine.moves_left(), Some(3));
}

#[test]
fn score_tiers_match_the_table() {
    let score = ScoreBoard::new(ScoreConfig::default());
    assert_eq!(score.points_for(0), 0);
    assert_eq!(score.points_for(3), 30);
    assert_eq!(score.points_for(4), 40);
    assert_eq!(score.points_for(5), 60);
    assert_eq!(score.points_for(10), 130);
    assert_eq!(score.points_for(15), 225);
    assert_eq!(score.points_for(20), 300);
}

#[test]
fn totals_accumulate_monotonically() {
    let mut score = ScoreBoard::new(ScoreConfig::default());
    assert_eq!(score.add_for_tiles(3), 30);
    assert_eq!(score.add_for_tiles(0), 0);
    assert_eq!(score.add_for_tiles(5), 60);
    assert_eq!(score.total(), 90);
}

#[test]
fn selection_clicks_walk_the_documented_states() {
    let mut tracker = SelectionTracker::new();
    assert_eq!(
        tracker.handle_click((1, 1), GameState::Playing),
        TileClickResult::FirstSelected
    );
    assert_eq!(
        tracker.handle_click((1, 2), GameState::Playing),
        TileClickResult::SwapReady
    );
    assert_eq!(tracker.pair(), Some(((1, 1), (1, 2))));
    tracker.reset();
    assert_eq!(tracker.pair(), None);
}

#[test]
fn clicking_the_same_tile_deselects() {
    let mut tracker = SelectionTracker::new();
    tracker.handle_click((2, 2), GameState::Playing);
    assert_eq!(
        tracker.handle_click((2, 2), GameState::Playing),
        TileClickResult::Deselected
    );
    assert_eq!(tracker.pair(), None);
}

#[test]
fn clicks_are_ignored_unless_playing() {
    let mut tracker = SelectionTracker::new();
    for state in [
        GameState::Initializing,
        GameState::Processing,
        GameState::GameOver,
    ] {
        assert_eq!(
            tracker.handle_click((0, 0), state),
            TileClickResult::Ignored
        );
    }
    assert_eq!(tracker.pair(), None);
}
