pub mod applied_move;
pub mod capture;
pub mod castle;
pub mod en_passant;

pub use applied_move::{AppliedMove, SpecialMove};
pub use capture::Capture;
pub use castle::{CastleChessMove, CastleSide};
pub use en_passant::EnPassantChessMove;
