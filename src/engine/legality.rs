//! Legality filtering: king safety layered over pseudo-legal geometry.
//!
//! A candidate move is simulated on an independent copy of the board and
//! accepted only if the mover's own king is not left attacked. The real board
//! is never mutated here — every function is a pure predicate over a
//! hypothetical successor position.

use crate::engine::attacks::{is_in_check, is_square_attacked};
use crate::engine::board::Board;
use crate::engine::rules::{is_castling_attempt, pseudo_legal};
use crate::engine::types::{Color, Piece, PieceKind, Square};

/// Would this move leave the mover's own king safe?
///
/// Simulates the relocation on a scratch copy. For an en-passant capture the
/// passed pawn is removed as well: it stands on a different square from the
/// destination, and leaving it in place would hide a discovered check along
/// the rank.
pub fn leaves_king_safe(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let mut scratch = board.clone();

    if piece.kind == PieceKind::Pawn && board.en_passant == Some(to) && board.is_empty(to) {
        scratch.set_piece(Square::new(from.row, to.col), None);
    }

    scratch.set_piece(from, None);
    scratch.set_piece(to, Some(piece));
    !is_in_check(&scratch, piece.color)
}

/// May a king castle along `from` → `to` without moving out of, through, or
/// into an attacked square?
///
/// The structural half (right held, corridor clear, rook on its corner) is
/// the pseudo-legal validator's job; this closes the king-path half.
pub fn castle_path_is_safe(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let enemy = !color;
    let mid = Square::new(from.row, (from.col + to.col) / 2);

    !is_square_attacked(board, from, enemy)
        && !is_square_attacked(board, mid, enemy)
        && !is_square_attacked(board, to, enemy)
}

/// Full move legality: pseudo-legal geometry, castling path safety, and king
/// safety after the move.
pub fn is_legal(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if !pseudo_legal(board, piece, from, to) {
        return false;
    }
    if is_castling_attempt(piece, from, to) && !castle_path_is_safe(board, piece.color, from, to) {
        return false;
    }
    leaves_king_safe(board, piece, from, to)
}
