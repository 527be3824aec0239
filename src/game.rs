// The game aggregate: board, piece registry, turn ownership and the
// two-phase select-then-move click interpreter.

use crate::board::Board;
use crate::geometry;
use crate::movegen;
use crate::pieces::{Color, Piece, PieceKind, PieceSet, sprite_name};

/// The click interpreter's two states. `Armed` remembers the origin cell of
/// the in-progress move; its legal destinations live in `GameState::targets`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Selection {
    Idle,
    Armed { origin: (usize, usize) },
}

/// What a processed click did. Malformed input is absorbed as `Ignored`;
/// there are no error paths out of the rule engine.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Ignored,
    Selected { at: (usize, usize) },
    Cancelled,
    Moved {
        mover: Piece,
        from: (usize, usize),
        to: (usize, usize),
        captured: Option<Piece>,
    },
}

/// One complete game. All shared mutable state lives here, so tests and
/// multiple concurrent games need no process-wide globals.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    pieces: PieceSet,
    active: Color,
    selection: Selection,
    targets: Vec<(usize, usize)>,
    captured: Vec<Piece>,
    game_over: bool,
}

impl GameState {
    /// Fresh starting position, white to move.
    pub fn new() -> GameState {
        let pieces = PieceSet::starting();
        let mut board = Board::new();
        for p in pieces.all() {
            board.place(p.row, p.col, p.id);
        }
        GameState {
            board,
            pieces,
            active: Color::White,
            selection: Selection::Idle,
            targets: Vec::new(),
            captured: Vec::new(),
            game_over: false,
        }
    }

    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &PieceSet {
        &self.pieces
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Pieces removed from play, in capture order.
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Process one click already resolved to board coordinates. Out-of-bounds
    /// coordinates and clicks after the game has ended are no-ops.
    pub fn click(&mut self, row: i32, col: i32) -> ClickOutcome {
        if self.game_over || !geometry::in_bounds(row, col) {
            return ClickOutcome::Ignored;
        }
        let at = (row as usize, col as usize);

        match self.selection {
            Selection::Idle => self.try_select(at),
            Selection::Armed { origin } if at == origin => {
                self.clear_marks(origin);
                log::debug!("selection at {:?} cancelled", origin);
                ClickOutcome::Cancelled
            }
            Selection::Armed { origin } => {
                if self.targets.contains(&at) {
                    self.commit(origin, at)
                } else {
                    // Not a legal destination: stay armed, change nothing.
                    ClickOutcome::Ignored
                }
            }
        }
    }

    /// Idle-state click: arm a selection when the cell holds a piece of the
    /// active color, otherwise ignore.
    fn try_select(&mut self, at: (usize, usize)) -> ClickOutcome {
        let piece = *self.pieces.piece(self.board.occupant(at.0, at.1));
        // The sentinel's color is None, so an empty cell fails this too.
        if piece.color != self.active {
            return ClickOutcome::Ignored;
        }

        self.board.set_selected(at.0, at.1, true);
        self.targets = movegen::mark_destinations(&mut self.board, &self.pieces, &piece);
        self.selection = Selection::Armed { origin: at };
        log::debug!(
            "{} selected at {:?}, {} destinations",
            sprite_name(piece.kind, piece.color),
            at,
            self.targets.len()
        );
        ClickOutcome::Selected { at }
    }

    /// Commit a confirmed move: capture, relocate through board and registry
    /// in lockstep, flip the turn exactly once.
    fn commit(&mut self, origin: (usize, usize), dest: (usize, usize)) -> ClickOutcome {
        let mover_id = self.board.occupant(origin.0, origin.1);
        let captured = match self.board.occupant(dest.0, dest.1) {
            0 => None,
            id => self.pieces.capture(id),
        };
        if let Some(taken) = &captured {
            if taken.kind == PieceKind::King {
                self.game_over = true;
            }
            self.captured.push(*taken);
        }

        self.clear_marks(origin);
        self.board.relocate(origin, dest);
        // Position and first-move flag persist only through the registry;
        // the local `Piece` copies above are read-only.
        self.pieces.commit_move(mover_id, dest.0, dest.1);
        let mover = *self.pieces.piece(mover_id);

        self.active = self.active.opponent();

        match &captured {
            Some(taken) => log::info!(
                "{} {:?} -> {:?} takes {}",
                sprite_name(mover.kind, mover.color),
                origin,
                dest,
                sprite_name(taken.kind, taken.color)
            ),
            None => log::info!(
                "{} {:?} -> {:?}",
                sprite_name(mover.kind, mover.color),
                origin,
                dest
            ),
        }
        if self.game_over {
            log::info!("game over, {:?} wins", mover.color);
        }

        ClickOutcome::Moved { mover, from: origin, to: dest, captured }
    }

    /// Drop the selection and unmark exactly the cells the last generation
    /// marked.
    fn clear_marks(&mut self, origin: (usize, usize)) {
        self.board.set_selected(origin.0, origin.1, false);
        for (row, col) in std::mem::take(&mut self.targets) {
            self.board.set_can_play(row, col, false);
        }
        self.selection = Selection::Idle;
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(game: &GameState) -> (usize, usize) {
        let selected = game.board.cells().filter(|c| c.is_selected).count();
        let playable = game.board.cells().filter(|c| c.can_play).count();
        (selected, playable)
    }

    #[test]
    fn white_moves_first_and_turn_flips_once_per_move() {
        let mut game = GameState::new();
        assert_eq!(game.active_color(), Color::White);

        // Selecting does not flip the turn.
        assert!(matches!(game.click(6, 4), ClickOutcome::Selected { .. }));
        assert_eq!(game.active_color(), Color::White);

        // An ignored click while armed does not flip it either.
        assert_eq!(game.click(3, 0), ClickOutcome::Ignored);
        assert_eq!(game.active_color(), Color::White);

        // Committing the move flips it exactly once.
        assert!(matches!(game.click(4, 4), ClickOutcome::Moved { .. }));
        assert_eq!(game.active_color(), Color::Black);
    }

    #[test]
    fn selecting_the_inactive_color_is_a_no_op() {
        let mut game = GameState::new();
        assert_eq!(game.click(1, 4), ClickOutcome::Ignored); // black pawn
        assert_eq!(marks(&game), (0, 0));
        assert_eq!(game.active_color(), Color::White);
    }

    #[test]
    fn selecting_an_empty_cell_is_a_no_op() {
        let mut game = GameState::new();
        assert_eq!(game.click(4, 4), ClickOutcome::Ignored);
        assert_eq!(marks(&game), (0, 0));
    }

    #[test]
    fn out_of_bounds_clicks_never_touch_board_state() {
        let mut game = GameState::new();
        for (row, col) in [(-1, 0), (0, -3), (8, 2), (2, 8), (42, 42)] {
            assert_eq!(game.click(row, col), ClickOutcome::Ignored);
        }
        assert_eq!(marks(&game), (0, 0));
        assert_eq!(game.active_color(), Color::White);
    }

    #[test]
    fn selection_marks_origin_and_targets_and_nothing_else() {
        let mut game = GameState::new();
        game.click(6, 4);
        let (selected, playable) = marks(&game);
        assert_eq!(selected, 1);
        assert_eq!(playable, 2);
        assert!(game.board().cell(6, 4).is_selected);
        assert!(game.board().cell(5, 4).can_play);
        assert!(game.board().cell(4, 4).can_play);
    }

    #[test]
    fn clicking_the_origin_cancels_without_flipping_the_turn() {
        let mut game = GameState::new();
        game.click(6, 4);
        assert_eq!(game.click(6, 4), ClickOutcome::Cancelled);
        assert_eq!(marks(&game), (0, 0));
        assert_eq!(game.active_color(), Color::White);

        // The piece is still selectable afterwards.
        assert!(matches!(game.click(6, 4), ClickOutcome::Selected { .. }));
    }

    #[test]
    fn committed_move_clears_all_marks_and_updates_both_owners() {
        let mut game = GameState::new();
        game.click(6, 4);
        let outcome = game.click(4, 4);
        assert!(matches!(outcome, ClickOutcome::Moved { captured: None, .. }));
        assert_eq!(marks(&game), (0, 0));

        // Board and registry agree on the new position.
        let id = game.board().occupant(4, 4);
        assert_ne!(id, 0);
        assert_eq!(game.board().occupant(6, 4), 0);
        let pawn = game.pieces().piece(id);
        assert_eq!((pawn.row, pawn.col), (4, 4));
        assert!(!pawn.is_first_move);
    }

    #[test]
    fn capture_removes_the_victim_from_its_registry() {
        let mut game = GameState::new();
        // White pawn e-file out two, black pawn d-file out two, pawn takes pawn.
        game.click(6, 4);
        game.click(4, 4);
        game.click(1, 3);
        game.click(3, 3);
        game.click(4, 4);
        let outcome = game.click(3, 3);

        match outcome {
            ClickOutcome::Moved { captured: Some(taken), .. } => {
                assert_eq!(taken.kind, PieceKind::Pawn);
                assert_eq!(taken.color, Color::Black);
                assert_eq!(game.pieces().count(Color::Black), 15);
                assert_eq!(game.captured().len(), 1);
            }
            other => panic!("expected a capture, got {other:?}"),
        }
        assert!(!game.is_game_over());
    }

    #[test]
    fn capturing_the_king_ends_the_game() {
        let pieces = PieceSet::from_pieces(vec![
            Piece { id: 1, color: Color::White, kind: PieceKind::Rook, row: 7, col: 0, is_first_move: true },
            Piece { id: 20, color: Color::Black, kind: PieceKind::King, row: 7, col: 3, is_first_move: true },
        ]);
        let mut game = GameState::new();
        game.board = Board::new();
        game.pieces = pieces;
        for p in game.pieces.all().cloned().collect::<Vec<_>>() {
            game.board.place(p.row, p.col, p.id);
        }

        game.click(7, 0);
        let outcome = game.click(7, 3);
        match outcome {
            ClickOutcome::Moved { captured: Some(taken), .. } => {
                assert_eq!(taken.kind, PieceKind::King);
            }
            other => panic!("expected a king capture, got {other:?}"),
        }
        assert!(game.is_game_over());
        assert_eq!(game.pieces().count(Color::Black), 0);

        // Every further click is ignored until a reset.
        assert_eq!(game.click(7, 3), ClickOutcome::Ignored);
        game.reset();
        assert!(!game.is_game_over());
        assert_eq!(game.pieces().count(Color::Black), 16);
    }

    #[test]
    fn armed_state_ignores_clicks_on_other_own_pieces() {
        let mut game = GameState::new();
        game.click(6, 4);
        // Another white pawn is not a legal destination; selection stays put.
        assert_eq!(game.click(6, 3), ClickOutcome::Ignored);
        assert!(game.board().cell(6, 4).is_selected);
        assert!(matches!(game.click(5, 4), ClickOutcome::Moved { .. }));
    }
}
