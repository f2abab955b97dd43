use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};

/// The 3x3 grid. `Board` is `Copy`, so search branches work on their own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        if pos.is_on_board() {
            self.cells[pos.row][pos.col] = mark;
        }
    }

    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.set(pos, mark);
        next
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == Mark::Empty)
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    pub fn available_moves(&self) -> Vec<Position> {
        self.empty_cells().collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|mark| mark.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect();
        write!(f, "{}", rows.join("/"))
    }
}
