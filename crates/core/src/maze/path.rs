//! Breadth-first reachability and shortest paths over open cells.
//! Used for maze validation and solution lengths; movement never consults it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::types::Pos;

use super::grid::Grid;

/// Every open cell reachable from `start` through open cells.
pub fn reachable_open_cells(grid: &Grid, start: Pos) -> BTreeSet<Pos> {
    let mut visited = BTreeSet::new();
    if !grid.cell_at(start).is_open() {
        return visited;
    }

    let mut queue = VecDeque::from([start]);
    visited.insert(start);
    while let Some(current) = queue.pop_front() {
        for neighbor in current.neighbors() {
            if grid.cell_at(neighbor).is_open() && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited
}

/// Cells from `start` to `goal` inclusive, or `None` when no open route exists.
pub fn shortest_path(grid: &Grid, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    if !grid.cell_at(start).is_open() || !grid.cell_at(goal).is_open() {
        return None;
    }

    let mut came_from = BTreeMap::new();
    let mut queue = VecDeque::from([start]);
    came_from.insert(start, start);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }
        for neighbor in current.neighbors() {
            if grid.cell_at(neighbor).is_open() && !came_from.contains_key(&neighbor) {
                came_from.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

fn reconstruct_path(came_from: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&previous) = came_from.get(&current) else {
            break;
        };
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
