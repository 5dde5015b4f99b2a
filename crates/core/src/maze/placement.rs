//! Start, key and exit placement over the carved cell pool.

use crate::types::{Cell, Pos};

use super::draw::UniformDraw;
use super::grid::Grid;

/// Minimum squared world distance between the exit and both the start and the key.
pub const MIN_EXIT_DISTANCE_SQ: i64 = (5 * 2) * (5 * 2);
pub const MAX_EXIT_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Markers {
    pub start: Pos,
    pub key: Pos,
    pub exit: Pos,
}

/// Draws start and key from the carved pool, then places the exit away from both.
///
/// The carved region of a valid maze holds at least seven cells, so both draws always have a
/// non-empty pool to choose from.
pub(super) fn place_markers<R: UniformDraw + ?Sized>(grid: &mut Grid, rng: &mut R) -> Markers {
    let mut pool: Vec<Pos> = grid.open_cells().collect();
    debug_assert!(pool.len() >= 2, "carved pool too small for start and key");

    let start = pool.remove(rng.draw_index(pool.len()));
    let key = pool.remove(rng.draw_index(pool.len()));
    grid.set(key, Cell::Key);

    let exit = match choose_exit(&pool, start, key, rng) {
        Some(exit) => exit,
        None => {
            log::warn!("no cell left for the exit, placing it on the key cell {key:?}");
            key
        }
    };
    grid.set(exit, Cell::Exit);

    Markers { start, key, exit }
}

pub(super) fn is_far_enough(candidate: Pos, start: Pos, key: Pos) -> bool {
    candidate.world_distance_sq(start) > MIN_EXIT_DISTANCE_SQ
        && candidate.world_distance_sq(key) > MIN_EXIT_DISTANCE_SQ
}

fn choose_exit<R: UniformDraw + ?Sized>(
    pool: &[Pos],
    start: Pos,
    key: Pos,
    rng: &mut R,
) -> Option<Pos> {
    if pool.is_empty() {
        return None;
    }

    for _ in 0..MAX_EXIT_ATTEMPTS {
        let candidate = pool[rng.draw_index(pool.len())];
        if is_far_enough(candidate, start, key) {
            return Some(candidate);
        }
    }

    let fallback = nearest_to_qualifying(pool, start, key);
    log::debug!("no exit draw cleared the separation in {MAX_EXIT_ATTEMPTS} tries: {fallback:?}");
    fallback
}

/// The pool cell that comes closest to meeting the separation rule: the one whose smaller
/// distance to start or key is largest. Ties keep the earliest pool entry.
fn nearest_to_qualifying(pool: &[Pos], start: Pos, key: Pos) -> Option<Pos> {
    let mut best: Option<(i64, Pos)> = None;
    for &candidate in pool {
        let score = candidate.world_distance_sq(start).min(candidate.world_distance_sq(key));
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, candidate));
        }
    }
    best.map(|(_, pos)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::draw::ScriptedDraws;

    fn corridor_grid() -> Grid {
        Grid::from_rows(&["###############", "#.............#", "###############"])
            .expect("valid layout")
    }

    #[test]
    fn first_qualifying_draw_is_accepted() {
        let mut grid = corridor_grid();
        // Pool is x = 1..=13 on row 1. Start x=1, key x=2 (index 0 after removal),
        // then a near draw (x=4) followed by a far one (x=13).
        let mut draws = ScriptedDraws::new([0, 0, 1, 10]);
        let markers = place_markers(&mut grid, &mut draws);

        assert_eq!(markers.start, Pos { y: 1, x: 1 });
        assert_eq!(markers.key, Pos { y: 1, x: 2 });
        assert_eq!(markers.exit, Pos { y: 1, x: 13 });
        assert_eq!(draws.consumed(), 4);
        assert_eq!(grid.cell_at(markers.key), Cell::Key);
        assert_eq!(grid.cell_at(markers.exit), Cell::Exit);
    }

    #[test]
    fn exhausted_attempts_fall_back_to_the_best_separated_cell() {
        // Nine cells: nothing can be more than five cells away from both start and key.
        let mut grid =
            Grid::from_rows(&["###########", "#.........#", "###########"]).expect("valid layout");
        // Start x=5, key x=6; the exhausted script keeps drawing index 0 (x=1).
        let mut draws = ScriptedDraws::new([4, 4]);
        let markers = place_markers(&mut grid, &mut draws);

        assert_eq!(markers.start, Pos { y: 1, x: 5 });
        assert_eq!(markers.key, Pos { y: 1, x: 6 });
        assert_eq!(draws.consumed(), 2 + MAX_EXIT_ATTEMPTS);
        // x=1 keeps min(8^2, 10^2) = 64, better than any other remaining cell.
        assert_eq!(markers.exit, Pos { y: 1, x: 1 });
    }

    #[test]
    fn fallback_prefers_earliest_cell_on_ties() {
        let start = Pos { y: 1, x: 3 };
        let key = Pos { y: 1, x: 5 };
        let pool = [Pos { y: 1, x: 1 }, Pos { y: 1, x: 7 }];
        assert_eq!(nearest_to_qualifying(&pool, start, key), Some(Pos { y: 1, x: 1 }));
    }

    #[test]
    fn empty_pool_places_exit_on_the_key() {
        let mut grid = Grid::from_rows(&["#..#"]).expect("valid layout");
        let mut draws = ScriptedDraws::new([0, 0]);
        let markers = place_markers(&mut grid, &mut draws);

        assert_eq!(markers.exit, markers.key);
        assert_eq!(grid.exit_cell(), Some(markers.key));
        assert_eq!(grid.key_cell(), None);
    }

    #[test]
    fn distance_threshold_is_strict() {
        let start = Pos { y: 1, x: 1 };
        let key = Pos { y: 11, x: 1 };
        assert!(!is_far_enough(Pos { y: 1, x: 6 }, start, key));
        assert!(is_far_enough(Pos { y: 6, x: 7 }, start, key));
    }
}
