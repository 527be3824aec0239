// Piece identities, movement capabilities and the two per-color collections.

use crate::geometry::NUM_COLS;

/// Piece ownership. `None` is the explicit empty sentinel: comparing any real
/// color against it is false, so "no piece here" needs no separate null case.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
    None,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    /// True for the two real colors, false for the empty sentinel.
    pub fn is_piece(self) -> bool {
        self != Color::None
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

/// One movement capability. The compass directions are unit steps in board
/// space; `InL` is the knight's fixed offset pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Movement {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
    InL,
}

impl Movement {
    /// Unit (row, col) step for the compass directions. North increases the
    /// row index; white pawns advance south, black pawns north, matching the
    /// mirrored starting setup.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Movement::North => (1, 0),
            Movement::South => (-1, 0),
            Movement::East => (0, 1),
            Movement::West => (0, -1),
            Movement::Northeast => (1, 1),
            Movement::Northwest => (1, -1),
            Movement::Southeast => (-1, 1),
            Movement::Southwest => (-1, -1),
            Movement::InL => (0, 0),
        }
    }
}

const ORTHOGONALS: [Movement; 4] = [
    Movement::North,
    Movement::South,
    Movement::East,
    Movement::West,
];

const DIAGONALS: [Movement; 4] = [
    Movement::Northwest,
    Movement::Northeast,
    Movement::Southeast,
    Movement::Southwest,
];

const ALL_EIGHT: [Movement; 8] = [
    Movement::Northwest,
    Movement::Northeast,
    Movement::Southeast,
    Movement::Southwest,
    Movement::East,
    Movement::North,
    Movement::South,
    Movement::West,
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Piece {
    /// 1..=16 for white, 17..=32 for black; 0 is reserved for the sentinel.
    pub id: u8,
    pub color: Color,
    pub kind: PieceKind,
    pub row: usize,
    pub col: usize,
    pub is_first_move: bool,
}

/// Lookup target for ids with no live piece. Empty capability set, sentinel
/// color, never mutated.
pub const EMPTY: Piece = Piece {
    id: 0,
    color: Color::None,
    kind: PieceKind::Pawn,
    row: 0,
    col: 0,
    is_first_move: false,
};

impl Piece {
    /// The fixed capability set assigned from type and color. The sentinel
    /// has no capabilities at all.
    pub fn capabilities(&self) -> &'static [Movement] {
        if self.color == Color::None {
            return &[];
        }
        match self.kind {
            PieceKind::Bishop => &DIAGONALS,
            PieceKind::Rook => &ORTHOGONALS,
            PieceKind::Queen | PieceKind::King => &ALL_EIGHT,
            PieceKind::Knight => &[Movement::InL],
            PieceKind::Pawn => match self.color {
                Color::White => &[Movement::South],
                _ => &[Movement::North],
            },
        }
    }
}

/// Fixed asset identifier for a piece's sprite, one of the 12 names the
/// image set ships with. Pure lookup, no I/O here.
pub fn sprite_name(kind: PieceKind, color: Color) -> &'static str {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => "WhitePawn",
        (Color::White, PieceKind::Rook) => "WhiteRook",
        (Color::White, PieceKind::Knight) => "WhiteKnight",
        (Color::White, PieceKind::Bishop) => "WhiteBishop",
        (Color::White, PieceKind::Queen) => "WhiteQueen",
        (Color::White, PieceKind::King) => "WhiteKing",
        (Color::Black, PieceKind::Pawn) => "BlackPawn",
        (Color::Black, PieceKind::Rook) => "BlackRook",
        (Color::Black, PieceKind::Knight) => "BlackKnight",
        (Color::Black, PieceKind::Bishop) => "BlackBishop",
        (Color::Black, PieceKind::Queen) => "BlackQueen",
        (Color::Black, PieceKind::King) => "BlackKing",
        (Color::None, _) => "",
    }
}

// Back rank left to right, shared by both colors.
const BACK_RANK: [PieceKind; NUM_COLS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Exclusive owner of all live pieces, one collection per color. Cells refer
/// back into it by id; every persistent piece mutation goes through here.
#[derive(Debug, Clone, Default)]
pub struct PieceSet {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl PieceSet {
    /// The full 32-piece starting position. White is placed on the mirrored
    /// rows (7 and 6) so the two sides face each other; ids are assigned in
    /// file order, back rank first, black offset by 16.
    pub fn starting() -> PieceSet {
        let mut set = PieceSet::default();
        let mut id = 0u8;
        for row in 0..2 {
            for col in 0..NUM_COLS {
                id += 1;
                let kind = if row > 0 { PieceKind::Pawn } else { BACK_RANK[col] };
                set.white.push(Piece {
                    id,
                    color: Color::White,
                    kind,
                    row: 7 - row,
                    col,
                    is_first_move: true,
                });
                set.black.push(Piece {
                    id: id + 16,
                    color: Color::Black,
                    kind,
                    row,
                    col,
                    is_first_move: true,
                });
            }
        }
        set
    }

    /// Resolve an id to its piece; unknown ids (including 0) resolve to the
    /// [`EMPTY`] sentinel. Linear scan, fine at 32 pieces.
    pub fn piece(&self, id: u8) -> &Piece {
        self.white
            .iter()
            .chain(self.black.iter())
            .find(|p| p.id == id)
            .unwrap_or(&EMPTY)
    }

    /// Write a committed move back to the owning collection. Read-only
    /// copies handed out elsewhere never carry mutations; this is the only
    /// way a move becomes persistent.
    pub fn commit_move(&mut self, id: u8, row: usize, col: usize) {
        if let Some(piece) = self.find_mut(id) {
            piece.row = row;
            piece.col = col;
            piece.is_first_move = false;
        }
    }

    /// Remove a captured piece from its color's collection.
    pub fn capture(&mut self, id: u8) -> Option<Piece> {
        for list in [&mut self.white, &mut self.black] {
            if let Some(at) = list.iter().position(|p| p.id == id) {
                return Some(list.remove(at));
            }
        }
        None
    }

    pub fn all(&self) -> impl Iterator<Item = &Piece> {
        self.white.iter().chain(self.black.iter())
    }

    pub fn count(&self, color: Color) -> usize {
        match color {
            Color::White => self.white.len(),
            Color::Black => self.black.len(),
            Color::None => 0,
        }
    }

    /// Build an arbitrary position for test scenarios.
    #[cfg(test)]
    pub(crate) fn from_pieces(pieces: Vec<Piece>) -> PieceSet {
        let mut set = PieceSet::default();
        for p in pieces {
            match p.color {
                Color::White => set.white.push(p),
                Color::Black => set.black.push(p),
                Color::None => {}
            }
        }
        set
    }

    fn find_mut(&mut self, id: u8) -> Option<&mut Piece> {
        self.white
            .iter_mut()
            .chain(self.black.iter_mut())
            .find(|p| p.id == id)
    }
}
