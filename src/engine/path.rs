//! Path clearance for sliding pieces.
//!
//! Given two squares on a shared rank, file, or diagonal, reports whether all
//! strictly intervening squares are empty (both endpoints excluded). Callers
//! are expected to have confirmed the sliding geometry already; a pair not
//! aligned on a rank, file, or diagonal reports `false`.

use crate::engine::board::Board;
use crate::engine::types::Square;

/// Is every square strictly between `from` and `to` empty?
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = to.row as i8 - from.row as i8;
    let d_col = to.col as i8 - from.col as i8;

    let aligned = (d_row == 0) != (d_col == 0) || (d_row != 0 && d_row.abs() == d_col.abs());
    if !aligned {
        return false;
    }

    // Unit step per axis from the sign of the deltas.
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut cursor = from.offset(step_row, step_col);
    while let Some(sq) = cursor {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        cursor = sq.offset(step_row, step_col);
    }

    // Unreachable for aligned on-board pairs; walking off the board means the
    // caller handed us a malformed geometry.
    false
}
