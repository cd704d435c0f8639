//! Committing a validated move to the real board.
//!
//! Everything here runs only after a move has passed both the pseudo-legal
//! validator and the legality filter; nothing is rejected at this stage. The
//! commit performs the raw relocation plus every special-move side effect:
//! en-passant pawn removal, castling rook relocation, castling-rights
//! revocation, queen promotion, and the one-ply en-passant target.

use crate::engine::board::Board;
use crate::engine::rules::is_castling_attempt;
use crate::engine::types::{CastlingRights, Piece, PieceKind, Square};

/// Side effects recorded while committing a move.
#[derive(Clone, Copy, Debug, Default)]
pub struct Applied {
    /// The piece removed from the board, if any (for en passant this is the
    /// passed pawn, which does not stand on the destination square).
    pub captured: Option<Piece>,
    pub en_passant_capture: bool,
    pub castled: bool,
    pub promoted: bool,
}

/// Apply `piece`'s move from `from` to `to` in place, including all special
/// side effects, then hand the turn to the opponent.
pub fn commit(board: &mut Board, piece: Piece, from: Square, to: Square) -> Applied {
    let us = piece.color;
    let mut applied = Applied {
        captured: board.piece_at(to),
        ..Applied::default()
    };

    // En passant: the captured pawn stands on the origin's rank in the
    // destination's file — the square that was jumped over last ply.
    if piece.kind == PieceKind::Pawn && board.en_passant == Some(to) && board.is_empty(to) {
        let passed_sq = Square::new(from.row, to.col);
        applied.captured = board.piece_at(passed_sq);
        applied.en_passant_capture = true;
        board.set_piece(passed_sq, None);
    }

    // Relocate, promoting a pawn that reaches the opposite back rank.
    board.set_piece(from, None);
    let landing = if piece.kind == PieceKind::Pawn && to.row == us.promotion_row() {
        applied.promoted = true;
        Piece::new(us, PieceKind::Queen)
    } else {
        piece
    };
    board.set_piece(to, Some(landing));

    // Castling: bring the rook to the square beside the king's new position.
    if is_castling_attempt(piece, from, to) {
        let (rook_from_col, rook_to_col) = if to.col == 6 { (7, 5) } else { (0, 3) };
        board.set_piece(Square::new(from.row, rook_from_col), None);
        board.set_piece(
            Square::new(from.row, rook_to_col),
            Some(Piece::new(us, PieceKind::Rook)),
        );
        applied.castled = true;
    }

    // Rights revocation: any move touching a king or rook home square — by
    // leaving it or by capturing on it — clears the matching rights.
    revoke_rights_for(board, from);
    revoke_rights_for(board, to);

    // En-passant target lives for exactly one ply: set behind a double pawn
    // push, cleared by every other move.
    board.en_passant =
        if piece.kind == PieceKind::Pawn && (to.row as i8 - from.row as i8).abs() == 2 {
            Some(Square::new((from.row + to.row) / 2, from.col))
        } else {
            None
        };

    board.side_to_move = !us;
    applied
}

/// Clear the castling rights tied to a king or rook starting square.
fn revoke_rights_for(board: &mut Board, sq: Square) {
    let flags = match (sq.row, sq.col) {
        (7, 4) => CastlingRights::WHITE_KINGSIDE | CastlingRights::WHITE_QUEENSIDE,
        (7, 0) => CastlingRights::WHITE_QUEENSIDE,
        (7, 7) => CastlingRights::WHITE_KINGSIDE,
        (0, 4) => CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE,
        (0, 0) => CastlingRights::BLACK_QUEENSIDE,
        (0, 7) => CastlingRights::BLACK_KINGSIDE,
        _ => return,
    };
    board.castling_rights.remove(flags);
}
