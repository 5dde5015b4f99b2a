//! Randomized depth-first backtracker over the odd-coordinate room lattice.

use crate::types::{Cell, Pos};

use super::draw::UniformDraw;
use super::grid::Grid;

/// Room-to-room steps in draw order: +x, -x, +y, -y.
const LATTICE_STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Passage {
    room: Pos,
    wall: Pos,
}

/// Carves a spanning tree of rooms into an all-wall `grid` and returns the start room.
///
/// Every room joins the tree through exactly one wall cell, so the carved region is connected
/// and acyclic.
pub(super) fn carve_backtracker<R: UniformDraw + ?Sized>(grid: &mut Grid, rng: &mut R) -> Pos {
    let rooms_x = grid.width() / 2;
    let rooms_y = grid.height() / 2;
    let start = Pos {
        x: 2 * rng.draw_index(rooms_x) as i32 + 1,
        y: 2 * rng.draw_index(rooms_y) as i32 + 1,
    };

    let mut visited = vec![false; grid.width() * grid.height()];
    grid.set(start, Cell::Path);
    visited[grid.index(start)] = true;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let passages = unvisited_passages(grid, &visited, current);
        if passages.is_empty() {
            stack.pop();
            continue;
        }

        let next = passages[rng.draw_index(passages.len())];
        grid.set(next.wall, Cell::Path);
        grid.set(next.room, Cell::Path);
        visited[grid.index(next.room)] = true;
        stack.push(next.room);
    }

    start
}

fn unvisited_passages(grid: &Grid, visited: &[bool], current: Pos) -> Vec<Passage> {
    let mut passages = Vec::with_capacity(LATTICE_STEPS.len());
    for (dx, dy) in LATTICE_STEPS {
        let room = Pos { y: current.y + dy, x: current.x + dx };
        if !grid.in_bounds(room) || visited[grid.index(room)] {
            continue;
        }
        let wall = Pos { y: current.y + dy / 2, x: current.x + dx / 2 };
        passages.push(Passage { room, wall });
    }
    passages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::draw::ScriptedDraws;

    #[test]
    fn first_two_draws_pick_the_start_room() {
        let mut grid = Grid::walled(9, 7);
        let mut draws = ScriptedDraws::new([3, 2]);
        let start = carve_backtracker(&mut grid, &mut draws);

        assert_eq!(start, Pos { y: 5, x: 7 });
        assert_eq!(grid.cell_at(start), Cell::Path);
    }

    #[test]
    fn scripted_walk_carves_expected_corridors() {
        // Start at (1,1), step +x to (3,1), then the only exits lead to (3,3) and (1,3).
        let mut grid = Grid::walled(5, 5);
        let mut draws = ScriptedDraws::new([0, 0, 0, 0, 0]);
        carve_backtracker(&mut grid, &mut draws);

        assert_eq!(grid.rows(), vec!["#####", "#...#", "###.#", "#...#", "#####"]);
    }

    #[test]
    fn border_is_never_carved() {
        let mut grid = Grid::walled(11, 11);
        let mut draws = ScriptedDraws::new([4, 4, 1, 3, 2, 0, 1, 1, 2, 3, 0, 1]);
        carve_backtracker(&mut grid, &mut draws);

        for i in 0..11 {
            assert_eq!(grid.cell_at(Pos { y: 0, x: i }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y: 10, x: i }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y: i, x: 0 }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y: i, x: 10 }), Cell::Wall);
        }
    }
}
