//! Terminal-state classification.
//!
//! An exhaustive scan: every piece of the side to move against every
//! destination square, filtered through the pseudo-legal validator and the
//! legality filter. O(pieces × 64) per query, which needs no caching at this
//! scale.

use crate::engine::attacks::is_in_check;
use crate::engine::board::Board;
use crate::engine::legality::is_legal;
use crate::engine::types::{Color, GameOutcome, Square};

/// Does `color` have at least one legal move?
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    for (from, piece) in board.occupied() {
        if piece.color != color {
            continue;
        }
        for row in 0..8 {
            for col in 0..8 {
                if is_legal(board, piece, from, Square::new(row, col)) {
                    return true;
                }
            }
        }
    }
    false
}

/// Classify the position for the side to move next.
///
/// No legal move while in check is checkmate (the opponent wins); no legal
/// move out of check is stalemate.
pub fn evaluate(board: &Board, to_move: Color) -> GameOutcome {
    if has_any_legal_move(board, to_move) {
        GameOutcome::Ongoing
    } else if is_in_check(board, to_move) {
        GameOutcome::Checkmate(!to_move)
    } else {
        GameOutcome::Stalemate
    }
}
