//! Maze generation orchestration: validated dimensions, carving, then marker placement.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Axis, MazeError, Pos};

use super::carve::carve_backtracker;
use super::draw::UniformDraw;
use super::grid::Grid;
use super::placement::place_markers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeDimensions {
    width: usize,
    height: usize,
}

impl MazeDimensions {
    pub const MIN_SIDE: usize = 5;

    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        validate_side(Axis::Width, width)?;
        validate_side(Axis::Height, height)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of odd-coordinate rooms in the lattice.
    pub fn room_count(&self) -> usize {
        (self.width / 2) * (self.height / 2)
    }
}

fn validate_side(axis: Axis, value: usize) -> Result<(), MazeError> {
    if value < MazeDimensions::MIN_SIDE || value % 2 == 0 {
        return Err(MazeError::InvalidDimension { axis, value });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub grid: Grid,
    pub start: Pos,
}

impl GeneratedMaze {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.grid.canonical_bytes();
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

pub struct MazeGenerator {
    dimensions: MazeDimensions,
}

impl MazeGenerator {
    pub fn new(dimensions: MazeDimensions) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    pub fn generate<R: UniformDraw + ?Sized>(&self, rng: &mut R) -> GeneratedMaze {
        let mut grid = Grid::walled(self.dimensions.width, self.dimensions.height);
        let carve_origin = carve_backtracker(&mut grid, rng);
        let markers = place_markers(&mut grid, rng);

        log::debug!(
            "generated {}x{} maze from room {carve_origin:?}: start {:?}, key {:?}, exit {:?}",
            self.dimensions.width,
            self.dimensions.height,
            markers.start,
            markers.key,
            markers.exit
        );

        GeneratedMaze { grid, start: markers.start }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::maze::draw::ScriptedDraws;
    use crate::maze::path::reachable_open_cells;
    use crate::maze::placement::{MIN_EXIT_DISTANCE_SQ, is_far_enough};
    use crate::types::Cell;

    fn generate_seeded(width: usize, height: usize, seed: u64) -> GeneratedMaze {
        let dimensions = MazeDimensions::new(width, height).expect("valid dimensions");
        MazeGenerator::new(dimensions).generate(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn dimensions_reject_even_and_small_sides() {
        assert_eq!(
            MazeDimensions::new(12, 11),
            Err(MazeError::InvalidDimension { axis: Axis::Width, value: 12 })
        );
        assert_eq!(
            MazeDimensions::new(11, 3),
            Err(MazeError::InvalidDimension { axis: Axis::Height, value: 3 })
        );
        assert!(MazeDimensions::new(5, 5).is_ok());
        assert_eq!(MazeDimensions::new(11, 7).map(|d| d.room_count()), Ok(15));
    }

    #[test]
    fn same_seed_produces_byte_identical_maze() {
        let a = generate_seeded(11, 11, 123_456);
        let b = generate_seeded(11, 11, 123_456);
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn different_seeds_change_the_maze() {
        let fingerprints: BTreeSet<u64> =
            (0..8).map(|seed| generate_seeded(11, 11, seed).fingerprint()).collect();
        assert!(fingerprints.len() > 1, "eight seeds should not all produce the same maze");
    }

    #[test]
    fn scripted_five_by_five_layout() {
        // Carve (1,1) -> (3,1) -> (3,3) -> (1,3); start draw 0 -> (1,1); key draw 1 -> (3,1).
        // Nothing in a 5x5 maze clears the separation rule, so the exit falls back to the cell
        // whose nearer marker is farthest away: (2,3), then (1,3) and (3,3) by pool order.
        // Under that rule (3,3), the cell nearest the key, is never chosen for this layout.
        let dimensions = MazeDimensions::new(5, 5).expect("valid dimensions");
        let mut draws = ScriptedDraws::new([0, 0, 0, 0, 0, 0, 1]);
        let maze = MazeGenerator::new(dimensions).generate(&mut draws);

        assert_eq!(maze.start, Pos { y: 1, x: 1 });
        assert_eq!(maze.grid.cell_at(Pos { y: 1, x: 1 }), Cell::Path);
        assert_eq!(maze.grid.cell_at(Pos { y: 1, x: 3 }), Cell::Key);
        assert_eq!(maze.grid.cell_at(Pos { y: 3, x: 2 }), Cell::Exit);
        assert_eq!(maze.grid.rows(), vec!["#####", "#..K#", "###.#", "#.E.#", "#####"]);
    }

    #[test]
    fn start_key_and_exit_are_distinct_open_cells() {
        for seed in [1_u64, 2, 3, 40, 99, 321, 1_024, 999_999] {
            let maze = generate_seeded(11, 11, seed);
            let key = maze.grid.key_cell().expect("key placed");
            let exit = maze.grid.exit_cell().expect("exit placed");

            assert_eq!(maze.grid.cell_at(maze.start), Cell::Path);
            assert_ne!(maze.start, key);
            assert_ne!(maze.start, exit);
            assert_ne!(key, exit);
        }
    }

    #[test]
    fn eleven_by_eleven_mazes_usually_separate_the_exit() {
        let separated = (0..64_u64)
            .filter(|&seed| {
                let maze = generate_seeded(11, 11, seed);
                let key = maze.grid.key_cell().expect("key placed");
                let exit = maze.grid.exit_cell().expect("exit placed");
                exit.world_distance_sq(maze.start) > MIN_EXIT_DISTANCE_SQ
                    && exit.world_distance_sq(key) > MIN_EXIT_DISTANCE_SQ
            })
            .count();
        assert!(separated > 0, "some 11x11 layouts must admit a distant exit");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_mazes_are_perfect_and_connected(
            seed in any::<u64>(),
            half_width in 2_usize..=12,
            half_height in 2_usize..=12
        ) {
            let width = half_width * 2 + 1;
            let height = half_height * 2 + 1;
            let maze = generate_seeded(width, height, seed);
            let grid = &maze.grid;

            let open = grid.open_cells().count();
            let rooms = half_width * half_height;
            prop_assert_eq!(open, 2 * rooms - 1, "spanning tree over {} rooms", rooms);

            let reached = reachable_open_cells(grid, maze.start);
            prop_assert_eq!(reached.len(), open, "seed={} should produce a connected maze", seed);

            prop_assert_eq!(grid.count(Cell::Key), 1);
            prop_assert_eq!(grid.count(Cell::Exit), 1);
        }

        #[test]
        fn border_stays_solid(seed in any::<u64>(), half in 2_usize..=10) {
            let side = half * 2 + 1;
            let maze = generate_seeded(side, side, seed);
            let last = (side - 1) as i32;
            for i in 0..side as i32 {
                for pos in [
                    Pos { y: 0, x: i },
                    Pos { y: last, x: i },
                    Pos { y: i, x: 0 },
                    Pos { y: i, x: last },
                ] {
                    prop_assert_eq!(maze.grid.cell_at(pos), Cell::Wall);
                }
            }
        }

        #[test]
        fn exit_is_separated_whenever_any_cell_qualifies(
            seed in any::<u64>(),
            half in 2_usize..=8
        ) {
            let side = half * 2 + 1;
            let maze = generate_seeded(side, side, seed);
            let key = maze.grid.key_cell().expect("key placed");
            let exit = maze.grid.exit_cell().expect("exit placed");

            let any_qualifies = maze
                .grid
                .open_cells()
                .filter(|&pos| pos != maze.start && pos != key)
                .any(|pos| is_far_enough(pos, maze.start, key));
            if any_qualifies {
                prop_assert!(is_far_enough(exit, maze.start, key));
            }
        }
    }
}
