//! Mailbox board representation.
//!
//! `Board` stores piece placement as an 8×8 grid of `Option<Piece>` plus the
//! auxiliary state a rules engine needs: side to move, castling rights, and
//! the en-passant target square. It exposes reads and writes of individual
//! squares and carries no move semantics of its own; rule knowledge lives in
//! the validator and commit modules.

use serde::Serialize;

use crate::engine::types::{CastlingRights, ChessError, Color, Piece, PieceKind, Square};

/// Standard starting position (placement, side, castling, en passant).
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A complete position: 8×8 grid plus auxiliary state.
///
/// Row 0 is black's back rank (rank 8), row 7 is white's back rank (rank 1).
///
/// Serializes outward only: a position re-enters through [`Board::from_fen`],
/// which enforces the invariants (one king per side, target rank) that a raw
/// deserialized payload could bypass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    /// `squares[row][col]`, `None` for an empty square.
    squares: [[Option<Piece>; 8]; 8],

    /// Whose turn it is.
    pub side_to_move: Color,

    /// Castling availability (K/Q/k/q).
    pub castling_rights: CastlingRights,

    /// En-passant target square: the square a capturing pawn would land on,
    /// set only immediately after a double pawn push.
    pub en_passant: Option<Square>,
}

impl Board {
    /// An empty board with no pieces and no castling rights.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Standard starting position.
    pub fn starting() -> Self {
        Self::from_fen(STARTING_FEN).expect("starting FEN is always valid")
    }

    // -----------------------------------------------------------------------
    // Square access
    // -----------------------------------------------------------------------

    /// What piece (if any) is on a given square?
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row as usize][sq.col as usize]
    }

    /// Place or clear a square. No side effects beyond the requested write.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row as usize][sq.col as usize] = piece;
    }

    /// Is the square empty?
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Find the king square for the given color, if one exists.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square::new(row, col);
                if self.piece_at(sq) == Some(Piece::new(color, PieceKind::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }

    /// Iterate over all occupied squares as `(square, piece)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|p| (sq, p))
            })
        })
    }

    // -----------------------------------------------------------------------
    // FEN parsing & generation
    // -----------------------------------------------------------------------

    /// Parse a FEN string into a `Board`.
    ///
    /// The first four fields (placement, side to move, castling, en passant)
    /// are required and validated; trailing clock fields of a full six-field
    /// FEN are accepted and ignored, since the engine tracks no move clocks.
    /// Exactly one king per side is required.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 4 && fields.len() != 6 {
            return Err(ChessError::InvalidFen(format!(
                "expected 4 or 6 fields, got {}",
                fields.len()
            )));
        }

        let mut board = Board::empty();

        // ----- Field 1: Piece placement -----
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in rank_str.chars() {
                if col > 7 {
                    return Err(ChessError::InvalidFen(format!(
                        "too many squares in rank {}",
                        8 - row
                    )));
                }
                if let Some(digit) = ch.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(ChessError::InvalidFen(format!(
                            "invalid empty count '{ch}' in rank {}",
                            8 - row
                        )));
                    }
                    col += digit as u8;
                } else if let Some(piece) = Piece::from_char(ch) {
                    board.set_piece(Square::new(row as u8, col), Some(piece));
                    col += 1;
                } else {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid character '{ch}' in piece placement"
                    )));
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has {} squares instead of 8",
                    8 - row,
                    col
                )));
            }
        }

        // Validate exactly one king per side.
        for color in [Color::White, Color::Black] {
            let king_count = board
                .occupied()
                .filter(|(_, p)| *p == Piece::new(color, PieceKind::King))
                .count();
            if king_count != 1 {
                return Err(ChessError::InvalidFen(format!(
                    "{color} has {king_count} kings (expected 1)"
                )));
            }
        }

        // ----- Field 2: Side to move -----
        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid side to move: '{other}'"
                )));
            }
        };

        // ----- Field 3: Castling availability -----
        board.castling_rights = CastlingRights::from_fen(fields[2]).ok_or_else(|| {
            ChessError::InvalidFen(format!("invalid castling string: '{}'", fields[2]))
        })?;

        // ----- Field 4: En passant target square -----
        if fields[3] != "-" {
            let ep_sq = Square::from_algebraic(fields[3]).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid en passant square: '{}'", fields[3]))
            })?;
            // The target sits behind a double-pushed pawn: row 5 (rank 3) for
            // a white push, row 2 (rank 6) for a black push.
            if ep_sq.row != 2 && ep_sq.row != 5 {
                return Err(ChessError::InvalidFen(format!(
                    "en passant square {} is not on rank 3 or 6",
                    fields[3]
                )));
            }
            board.en_passant = Some(ep_sq);
        }

        Ok(board)
    }

    /// Export the position as a four-field FEN string
    /// (placement, side to move, castling, en passant).
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);

        // ----- Field 1: Piece placement -----
        for row in 0..8 {
            let mut empty_count = 0u8;
            for col in 0..8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push((b'0' + empty_count) as char);
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => {
                        empty_count += 1;
                    }
                }
            }
            if empty_count > 0 {
                fen.push((b'0' + empty_count) as char);
            }
            if row < 7 {
                fen.push('/');
            }
        }

        // ----- Field 2: Side to move -----
        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        // ----- Field 3: Castling -----
        fen.push(' ');
        fen.push_str(&self.castling_rights.to_fen());

        // ----- Field 4: En passant -----
        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen
    }

    // -----------------------------------------------------------------------
    // Board display (8×8 text grid)
    // -----------------------------------------------------------------------

    /// Render the board as an 8-line string (rank 8 at top), for debugging.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for row in 0..8 {
            s.push((b'8' - row) as char);
            s.push(' ');
            for col in 0..8 {
                let ch = match self.piece_at(Square::new(row, col)) {
                    Some(p) => p.to_char(),
                    None => '.',
                };
                s.push(ch);
                if col < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    // ===================================================================
    // Starting position
    // ===================================================================

    #[test]
    fn starting_position_fen() {
        let board = Board::starting();
        assert_eq!(board.to_fen(), STARTING_FEN);
    }

    #[test]
    fn starting_position_aux_state() {
        let board = Board::starting();
        assert_eq!(board.side_to_move, Color::White);
        assert_eq!(board.castling_rights, CastlingRights::ALL);
        assert_eq!(board.en_passant, None);
    }

    #[test]
    fn starting_position_piece_count() {
        let board = Board::starting();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(
            board
                .occupied()
                .filter(|(_, p)| p.color == Color::White)
                .count(),
            16
        );
    }

    #[test]
    fn starting_back_ranks() {
        let board = Board::starting();
        let order = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in order.iter().enumerate() {
            assert_eq!(
                board.piece_at(Square::new(0, col as u8)),
                Some(Piece::new(Color::Black, kind))
            );
            assert_eq!(
                board.piece_at(Square::new(7, col as u8)),
                Some(Piece::new(Color::White, kind))
            );
        }
    }

    #[test]
    fn starting_pawn_rows() {
        let board = Board::starting();
        for col in 0..8 {
            assert_eq!(
                board.piece_at(Square::new(1, col)),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
            assert_eq!(
                board.piece_at(Square::new(6, col)),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
        }
    }

    #[test]
    fn starting_middle_rows_empty() {
        let board = Board::starting();
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(Square::new(row, col)));
            }
        }
    }

    // ===================================================================
    // Square access
    // ===================================================================

    #[test]
    fn set_and_clear_square() {
        let mut board = Board::empty();
        let e4 = sq("e4");
        let knight = Piece::new(Color::White, PieceKind::Knight);

        board.set_piece(e4, Some(knight));
        assert_eq!(board.piece_at(e4), Some(knight));
        assert!(!board.is_empty(e4));

        board.set_piece(e4, None);
        assert_eq!(board.piece_at(e4), None);
    }

    #[test]
    fn king_square_lookup() {
        let board = Board::starting();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
    }

    #[test]
    fn king_square_missing() {
        let board = Board::empty();
        assert_eq!(board.king_square(Color::White), None);
        assert_eq!(board.king_square(Color::Black), None);
    }

    // ===================================================================
    // FEN parsing
    // ===================================================================

    #[test]
    fn fen_round_trip_starting() {
        let board = Board::from_fen(STARTING_FEN).unwrap();
        assert_eq!(board.to_fen(), STARTING_FEN);
    }

    #[test]
    fn fen_six_field_input_accepted() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(board.side_to_move, Color::Black);
        assert_eq!(board.en_passant, Some(sq("e3")));
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3"
        );
    }

    #[test]
    fn fen_round_trip_kiwipete() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn fen_round_trip_endgame() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn fen_round_trip_partial_castling() {
        let fen = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w Kq -";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
    }

    // ===================================================================
    // FEN validation errors
    // ===================================================================

    #[test]
    fn fen_error_wrong_field_count() {
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq").is_err());
    }

    #[test]
    fn fen_error_wrong_rank_count() {
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
    }

    #[test]
    fn fen_error_invalid_piece_char() {
        assert!(Board::from_fen("xnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
    }

    #[test]
    fn fen_error_rank_too_long() {
        assert!(Board::from_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
    }

    #[test]
    fn fen_error_invalid_side_to_move() {
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq -").is_err());
    }

    #[test]
    fn fen_error_invalid_castling() {
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XYZ -").is_err());
    }

    #[test]
    fn fen_error_invalid_ep_square() {
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9").is_err());
    }

    #[test]
    fn fen_error_ep_wrong_rank() {
        // e4 is rank 4, not a valid en-passant target rank.
        assert!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e4").is_err()
        );
    }

    #[test]
    fn fen_error_no_white_king() {
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQ1BNR w KQkq -").is_err());
    }

    #[test]
    fn fen_error_two_white_kings() {
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBKKBNR w KQkq -").is_err());
    }

    // ===================================================================
    // board_string display
    // ===================================================================

    #[test]
    fn board_string_starting() {
        let s = Board::starting().board_string();
        assert!(s.starts_with("8 r n b q k b n r"));
        assert!(s.ends_with("a b c d e f g h"));
    }
}
