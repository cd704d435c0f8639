//! Game controller: the stateful surface over the stateless rule layers.
//!
//! A [`Game`] owns the single authoritative [`Board`] plus the cached
//! terminal classification. Callers probe legality with [`Game::can_move`],
//! commit with [`Game::make_move`], and read the verdict from the returned
//! [`MoveReport`] or from [`Game::outcome`]. Once the position is checkmate
//! or stalemate every further move is rejected until [`Game::reset`].

use serde::Serialize;

use crate::engine::apply;
use crate::engine::attacks::is_in_check;
use crate::engine::board::Board;
use crate::engine::legality::is_legal;
use crate::engine::status;
use crate::engine::types::{CastlingRights, ChessError, Color, GameOutcome, Piece, Square};

// ---------------------------------------------------------------------------
// MoveReport
// ---------------------------------------------------------------------------

/// Everything a caller learns from one committed move: the side effects of
/// the move itself plus the auxiliary state of the position it produced.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MoveReport {
    pub from: Square,
    pub to: Square,
    /// The piece removed from the board, if any. For an en-passant capture
    /// this is the passed pawn, which did not stand on `to`.
    pub captured: Option<Piece>,
    pub en_passant_capture: bool,
    pub castled: bool,
    pub promoted: bool,
    /// Castling availability after the move.
    pub castling_rights: CastlingRights,
    /// En-passant target opened by the move, if it was a double pawn push.
    pub en_passant: Option<Square>,
    /// The side to move next.
    pub side_to_move: Color,
    /// Classification of the position the move produced.
    pub outcome: GameOutcome,
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// A two-player game in progress.
///
/// Serializes outward only; positions re-enter through [`Game::from_fen`],
/// which validates what a raw payload could not be trusted to uphold.
#[derive(Clone, Debug, Serialize)]
pub struct Game {
    board: Board,
    outcome: GameOutcome,
}

impl Game {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            outcome: GameOutcome::Ongoing,
        }
    }

    /// Resume a game from a FEN position. The outcome is classified
    /// immediately, so loading a mated position yields a finished game.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let board = Board::from_fen(fen)?;
        let outcome = status::evaluate(&board, board.side_to_move);
        Ok(Self { board, outcome })
    }

    /// Discard the current game and return to the starting position.
    pub fn reset(&mut self) {
        tracing::debug!("game reset to the starting position");
        self.board = Board::starting();
        self.outcome = GameOutcome::Ongoing;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Is the side to move currently in check?
    pub fn is_in_check(&self) -> bool {
        is_in_check(&self.board, self.board.side_to_move)
    }

    /// FEN rendering of the current position.
    pub fn to_fen(&self) -> String {
        self.board.to_fen()
    }

    /// Would `from` → `to` be accepted right now?
    ///
    /// True only for a piece of the side to move making a fully legal move in
    /// a game that is still running. Never mutates the position.
    pub fn can_move(&self, from: Square, to: Square) -> bool {
        if self.outcome.is_game_over() {
            return false;
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.board.side_to_move => {
                is_legal(&self.board, piece, from, to)
            }
            _ => false,
        }
    }

    /// Validate and commit `from` → `to`, handing the turn to the opponent.
    ///
    /// On success the report carries every side effect of the move plus the
    /// classification of the resulting position. On failure the position is
    /// untouched.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveReport, ChessError> {
        if self.outcome.is_game_over() {
            return Err(ChessError::GameOver(self.outcome.to_string()));
        }

        let piece = self.board.piece_at(from).ok_or_else(|| ChessError::InvalidMove {
            from: from.to_algebraic(),
            to: to.to_algebraic(),
            reason: "no piece on the origin square".into(),
        })?;

        if piece.color != self.board.side_to_move {
            return Err(ChessError::InvalidMove {
                from: from.to_algebraic(),
                to: to.to_algebraic(),
                reason: format!("it is {}'s turn", self.board.side_to_move),
            });
        }

        if !is_legal(&self.board, piece, from, to) {
            return Err(ChessError::InvalidMove {
                from: from.to_algebraic(),
                to: to.to_algebraic(),
                reason: format!("illegal {} move", piece.kind),
            });
        }

        let applied = apply::commit(&mut self.board, piece, from, to);
        self.outcome = status::evaluate(&self.board, self.board.side_to_move);

        tracing::debug!(
            from = %from.to_algebraic(),
            to = %to.to_algebraic(),
            captured = applied.captured.is_some(),
            outcome = %self.outcome,
            "move committed"
        );

        Ok(MoveReport {
            from,
            to,
            captured: applied.captured,
            en_passant_capture: applied.en_passant_capture,
            castled: applied.castled,
            promoted: applied.promoted,
            castling_rights: self.board.castling_rights,
            en_passant: self.board.en_passant,
            side_to_move: self.board.side_to_move,
            outcome: self.outcome,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
