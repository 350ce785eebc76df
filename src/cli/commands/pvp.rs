//! PvP command - play a game against another human.

use chess_rules::game::input_source::HumanInput;
use chess_rules::game::{ChessMatch, GameLoop, GameLoopConfig, LoopOutcome};
use log::error;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    /// Print each frame below the last instead of clearing the screen.
    #[structopt(long = "no-clear")]
    pub no_clear: bool,
    /// Do not mark where a selected piece can move.
    #[structopt(long = "no-highlight")]
    pub no_highlight: bool,
}

impl Command for PvpArgs {
    fn execute(self) -> i32 {
        let config = GameLoopConfig {
            clear_screen: !self.no_clear,
            highlight_moves: !self.no_highlight,
            ..Default::default()
        };
        let mut game_loop = GameLoop::new(ChessMatch::new(), HumanInput, config);

        match game_loop.run() {
            Ok(LoopOutcome::Checkmate { winner }) => {
                println!("Checkmate! {} wins.", winner);
                0
            }
            Ok(LoopOutcome::Quit) | Ok(LoopOutcome::InputExhausted) => {
                println!("Goodbye.");
                0
            }
            Err(err) => {
                error!("game aborted: {}", err);
                eprintln!("error: {}", err);
                1
            }
        }
    }
}
