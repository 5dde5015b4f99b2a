//! Cell storage for a maze plus the key/exit marker bookkeeping.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Cell, MazeError, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    key: Option<Pos>,
    exit: Option<Pos>,
}

impl Grid {
    pub fn walled(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::Wall; width * height], key: None, exit: None }
    }

    /// Parses an ASCII layout: `#` wall, `.` path, `K` key, `E` exit.
    pub fn from_rows(rows: &[&str]) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::EmptyLayout);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(MazeError::EmptyLayout);
        }

        let mut grid = Grid::walled(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MazeError::RaggedLayout { row: y, expected: width, found });
            }
            for (x, symbol) in row.chars().enumerate() {
                let cell = match symbol {
                    '#' => Cell::Wall,
                    '.' => Cell::Path,
                    'K' => Cell::Key,
                    'E' => Cell::Exit,
                    _ => return Err(MazeError::UnknownSymbol { row: y, column: x, symbol }),
                };
                let pos = Pos { y: y as i32, x: x as i32 };
                if (cell == Cell::Key && grid.key.is_some())
                    || (cell == Cell::Exit && grid.exit.is_some())
                {
                    return Err(MazeError::DuplicateMarker { symbol });
                }
                grid.set(pos, cell);
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Cell at `pos`; anything outside the grid reads as `Wall`.
    pub fn cell_at(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn key_cell(&self) -> Option<Pos> {
        self.key
    }

    pub fn exit_cell(&self) -> Option<Pos> {
        self.exit
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&pos| self.cell_at(pos).is_open())
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }

    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Wall => 0,
                Cell::Path => 1,
                Cell::Key => 2,
                Cell::Exit => 3,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = cell;

        if cell == Cell::Key {
            self.key = Some(pos);
        } else if self.key == Some(pos) {
            self.key = None;
        }
        if cell == Cell::Exit {
            self.exit = Some(pos);
        } else if self.exit == Some(pos) {
            self.exit = None;
        }
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 }))
    }
}
