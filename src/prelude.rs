//! Common types re-exported for convenience.

pub use crate::board::color::Color;
pub use crate::board::piece::{Piece, PieceKind};
pub use crate::board::position::Position;
pub use crate::board::square::Square;
pub use crate::board::Board;
pub use crate::game::{ChessMatch, MatchError, MatchStatus};
pub use crate::move_generation::MoveMatrix;
