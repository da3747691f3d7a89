use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// The 3x3 grid, indexed 0..9 row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Mark::Empty
    }

    /// The caller must have checked `is_empty(index)` first; within a game a
    /// placed mark never reverts.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Undo for search probes on scratch boards.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
