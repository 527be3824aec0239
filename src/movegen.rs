// Legal-destination generation: directional ray walks, the knight's offset
// pattern and the pawn's forward/diagonal split.
//
// All rays use one convention: walk up to the full board span, stop at the
// first blocker (inclusive for an enemy, exclusive for an own piece) or the
// board edge. The king reuses the same eight directions capped to one step.

use crate::board::Board;
use crate::geometry::{NUM_ROWS, in_bounds};
use crate::pieces::{Movement, Piece, PieceKind, PieceSet};

/// The eight fixed knight offsets.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
    (-1, 2),
    (-2, 1),
];

/// Compute the full set of legal destinations for `piece` on `board`,
/// marking each one `can_play` for the UI as it is found. Returns the
/// ordered destination list so the caller can later unmark exactly these
/// cells.
pub fn mark_destinations(board: &mut Board, pieces: &PieceSet, piece: &Piece) -> Vec<(usize, usize)> {
    let mut targets = Vec::new();
    for &movement in piece.capabilities() {
        match movement {
            Movement::InL => knight_targets(board, pieces, piece, &mut targets),
            Movement::North | Movement::South if piece.kind == PieceKind::Pawn => {
                pawn_targets(board, pieces, piece, movement.delta().0, &mut targets)
            }
            dir => {
                let range = if piece.kind == PieceKind::King { 1 } else { NUM_ROWS - 1 };
                slide(board, pieces, piece, dir.delta(), range, &mut targets)
            }
        }
    }
    targets
}

fn mark(board: &mut Board, targets: &mut Vec<(usize, usize)>, row: usize, col: usize) {
    board.set_can_play(row, col, true);
    targets.push((row, col));
}

/// Walk outward along one direction. An own piece blocks before marking; an
/// enemy piece is marked as a capture and then blocks.
fn slide(
    board: &mut Board,
    pieces: &PieceSet,
    piece: &Piece,
    (dr, dc): (i32, i32),
    range: usize,
    targets: &mut Vec<(usize, usize)>,
) {
    let (mut row, mut col) = (piece.row as i32, piece.col as i32);
    for _ in 0..range {
        row += dr;
        col += dc;
        if !in_bounds(row, col) {
            break;
        }
        let ahead = pieces.piece(board.occupant(row as usize, col as usize));
        if ahead.color == piece.color {
            break;
        }
        mark(board, targets, row as usize, col as usize);
        if ahead.color.is_piece() {
            break;
        }
    }
}

fn knight_targets(board: &mut Board, pieces: &PieceSet, piece: &Piece, targets: &mut Vec<(usize, usize)>) {
    for (dr, dc) in KNIGHT_OFFSETS {
        let (row, col) = (piece.row as i32 + dr, piece.col as i32 + dc);
        if !in_bounds(row, col) {
            continue;
        }
        let ahead = pieces.piece(board.occupant(row as usize, col as usize));
        if ahead.color != piece.color {
            mark(board, targets, row as usize, col as usize);
        }
    }
}

/// Pawn movement: one forward square, two on the first move, blocked before
/// marking by any occupant (a pawn never captures straight ahead). The two
/// forward-diagonal squares are capture-only, marked just when an enemy
/// stands there.
fn pawn_targets(
    board: &mut Board,
    pieces: &PieceSet,
    piece: &Piece,
    forward: i32,
    targets: &mut Vec<(usize, usize)>,
) {
    let steps = if piece.is_first_move { 2 } else { 1 };
    let (mut row, col) = (piece.row as i32, piece.col as i32);
    for _ in 0..steps {
        row += forward;
        if !in_bounds(row, col) {
            break;
        }
        if board.occupant(row as usize, col as usize) != 0 {
            break;
        }
        mark(board, targets, row as usize, col as usize);
    }

    for dc in [-1, 1] {
        let (row, col) = (piece.row as i32 + forward, piece.col as i32 + dc);
        if !in_bounds(row, col) {
            continue;
        }
        let ahead = pieces.piece(board.occupant(row as usize, col as usize));
        if ahead.color.is_piece() && ahead.color != piece.color {
            mark(board, targets, row as usize, col as usize);
        }
    }
}
