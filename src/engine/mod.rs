pub mod apply;
pub mod attacks;
pub mod board;
pub mod game;
pub mod legality;
pub mod path;
pub mod rules;
pub mod status;
pub mod types;

pub use board::Board;
pub use game::{Game, MoveReport};
pub use types::*;
