// Board state: the 8x8 cell grid holding occupancy and highlight flags.

use crate::geometry::{NUM_COLS, NUM_ROWS, TileQuad};

/// Render classification of a tile, derived from (row + col) parity and the
/// highlight flags. Purely presentational; the frontend maps it to colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileShade {
    Light,
    Dark,
    LightHighlight,
    DarkHighlight,
}

/// One square of the board. Holds a non-owning piece id (0 = empty) that
/// resolves through the piece registry, plus the transient selection flags.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Corner points of the tile's diamond, derived once at startup.
    pub quad: TileQuad,
    pub piece_id: u8,
    pub is_selected: bool,
    pub can_play: bool,
}

impl Cell {
    fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            quad: TileQuad::of(row, col),
            piece_id: 0,
            is_selected: false,
            can_play: false,
        }
    }

    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub fn shade(&self) -> TileShade {
        let highlighted = self.is_selected || self.can_play;
        match (self.is_light(), highlighted) {
            (true, false) => TileShade::Light,
            (true, true) => TileShade::LightHighlight,
            (false, false) => TileShade::Dark,
            (false, true) => TileShade::DarkHighlight,
        }
    }
}

/// Single source of truth for occupancy. Performs no legality checks of its
/// own; the move generator decides what is legal, the board just records it.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Cell; NUM_COLS]; NUM_ROWS],
}

impl Board {
    pub fn new() -> Board {
        let mut cells = [[Cell::new(0, 0); NUM_COLS]; NUM_ROWS];
        for (row, rank) in cells.iter_mut().enumerate() {
            for (col, cell) in rank.iter_mut().enumerate() {
                *cell = Cell::new(row, col);
            }
        }
        Board { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Piece id occupying a cell, 0 when empty.
    pub fn occupant(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col].piece_id
    }

    pub fn place(&mut self, row: usize, col: usize, id: u8) {
        self.cells[row][col].piece_id = id;
    }

    /// Move an occupant id from one cell to another, overwriting whatever id
    /// the destination held. The registry position for the id is updated by
    /// the caller in lockstep.
    pub fn relocate(&mut self, from: (usize, usize), to: (usize, usize)) {
        let id = self.cells[from.0][from.1].piece_id;
        self.cells[from.0][from.1].piece_id = 0;
        self.cells[to.0][to.1].piece_id = id;
    }

    pub fn set_selected(&mut self, row: usize, col: usize, selected: bool) {
        self.cells[row][col].is_selected = selected;
    }

    pub fn set_can_play(&mut self, row: usize, col: usize, can_play: bool) {
        self.cells[row][col].can_play = can_play;
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|rank| rank.iter())
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}
