//! Pseudo-legal move validation.
//!
//! A pseudo-legal move obeys the moving piece's geometry — including the
//! structural half of castling — while ignoring whether it exposes the
//! mover's own king. King safety is layered on top by `legality`.

use crate::engine::board::Board;
use crate::engine::path::path_is_clear;
use crate::engine::types::{CastlingRights, Color, Piece, PieceKind, Square};

// =========================================================================
// Public API
// =========================================================================

/// Does moving `piece` from `from` to `to` obey that piece's movement rule?
///
/// Rejects self-captures; never consults king safety. `from == to` is never
/// a move.
pub fn pseudo_legal(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    let d_row = to.row as i8 - from.row as i8;
    let d_col = to.col as i8 - from.col as i8;

    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece.color, from, to, d_row, d_col),
        PieceKind::Knight => {
            (d_row.abs() == 1 && d_col.abs() == 2) || (d_row.abs() == 2 && d_col.abs() == 1)
        }
        PieceKind::Bishop => d_row.abs() == d_col.abs() && path_is_clear(board, from, to),
        PieceKind::Rook => (d_row == 0 || d_col == 0) && path_is_clear(board, from, to),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
                && path_is_clear(board, from, to)
        }
        PieceKind::King => king_move(board, piece.color, from, to, d_row, d_col),
    }
}

/// Is this (piece, from, to) triple a castling attempt, i.e. a king moving
/// two squares horizontally?
#[inline]
pub fn is_castling_attempt(piece: Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::King
        && from.row == to.row
        && (to.col as i8 - from.col as i8).abs() == 2
}

// =========================================================================
// Pawn
// =========================================================================

fn pawn_move(board: &Board, color: Color, from: Square, to: Square, d_row: i8, d_col: i8) -> bool {
    let dir = color.forward();

    if d_col == 0 {
        // Straight advances must land on an empty square.
        if d_row == dir {
            return board.is_empty(to);
        }
        if d_row == 2 * dir && from.row == color.pawn_home_row() {
            // One step out from the home row is always on the board.
            let mid = Square::new((from.row as i8 + dir) as u8, from.col);
            return board.is_empty(mid) && board.is_empty(to);
        }
        return false;
    }

    // Diagonal step: a capture, or a landing on the en-passant target. The
    // target is only capturable by the side that did not create it, so its
    // row must be the opponent's jumped-over row.
    if d_col.abs() == 1 && d_row == dir {
        return match board.piece_at(to) {
            Some(_) => true, // same-color targets were rejected up front
            None => {
                board.en_passant == Some(to) && to.row == (!color).double_push_target_row()
            }
        };
    }

    false
}

// =========================================================================
// King (including the structural half of castling)
// =========================================================================

fn king_move(board: &Board, color: Color, from: Square, to: Square, d_row: i8, d_col: i8) -> bool {
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        return true;
    }

    // Two-square horizontal move: a castling attempt. Structural checks only —
    // the right must still be held, the corridor between king and rook must be
    // clear, and the rook must stand on its corner. Whether the king's path is
    // attacked is the legality layer's concern.
    if d_row == 0 && d_col.abs() == 2 {
        return castle_structure_ok(board, color, from, to);
    }

    false
}

fn castle_structure_ok(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let rank = color.back_rank();
    if from != Square::new(rank, 4) {
        return false;
    }

    let (right, rook_col) = match to.col {
        6 => (CastlingRights::kingside_flag(color), 7),
        2 => (CastlingRights::queenside_flag(color), 0),
        _ => return false,
    };
    if !board.castling_rights.has(right) {
        return false;
    }

    let rook_sq = Square::new(rank, rook_col);
    if board.piece_at(rook_sq) != Some(Piece::new(color, PieceKind::Rook)) {
        return false;
    }

    path_is_clear(board, from, rook_sq)
}

// =========================================================================
// Tests
// =========================================================================
