//! Check detection.
//!
//! A color is in check when any enemy piece could pseudo-legally move onto
//! its king's square — attack reachability, not turn legality. The scan asks
//! the pseudo-legal validator for every enemy piece; cost is proportional to
//! board occupancy, which is fine at 64 squares.

use crate::engine::board::Board;
use crate::engine::rules::pseudo_legal;
use crate::engine::types::{Color, PieceKind, Square};

/// Is `target` attacked by any piece of color `by`?
///
/// Pawns are tested by their capture geometry directly: a pawn controls its
/// two forward diagonals even when they are empty, which matters when probing
/// a castling king's path. Every other piece's attack reach coincides with
/// its pseudo-legal movement.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    for (sq, piece) in board.occupied() {
        if piece.color != by {
            continue;
        }
        let attacks = if piece.kind == PieceKind::Pawn {
            pawn_controls(sq, by, target)
        } else {
            pseudo_legal(board, piece, sq, target)
        };
        if attacks {
            return true;
        }
    }
    false
}

/// Is `color`'s king currently attacked?
///
/// A missing king is reported as "in check": no legal, non-check position can
/// lack a king, so the fail-safe keeps a corrupted position from ever being
/// classified as safe.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_sq) => is_square_attacked(board, king_sq, !color),
        None => true,
    }
}

/// Does a pawn of `color` on `from` control `target`?
#[inline]
fn pawn_controls(from: Square, color: Color, target: Square) -> bool {
    target.row as i8 == from.row as i8 + color.forward()
        && (target.col as i8 - from.col as i8).abs() == 1
}
