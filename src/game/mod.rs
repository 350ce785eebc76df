pub mod chess_match;
pub mod display;
pub mod error;
pub mod game_loop;
pub mod input_source;
pub mod roster;
pub(crate) mod speculation;


pub use chess_match::{ChessMatch, MatchStatus};
pub use error::MatchError;
pub use game_loop::{GameLoop, GameLoopConfig, GameLoopError, LoopOutcome};
