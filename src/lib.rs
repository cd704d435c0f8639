//! Two-player chess rules engine.
//!
//! Given a board position and a proposed move, the engine decides whether the
//! move is structurally valid for the moving piece, whether it leaves the
//! mover's own king exposed, and — after a move is committed — whether the
//! game has reached checkmate or stalemate.
//!
//! The engine is a pure library: a presentation layer (board rendering, input
//! handling) drives it through [`engine::game::Game`], which exposes a
//! legality query, a commit operation, an outcome query, and a reset.

pub mod engine;

pub use engine::board::Board;
pub use engine::game::{Game, MoveReport};
pub use engine::types::{
    CastlingRights, ChessError, Color, GameOutcome, Piece, PieceKind, Square,
};
