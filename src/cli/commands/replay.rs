//! Replay command - apply a list of moves and show where they lead.

use chess_rules::game::input_source::ScriptedInput;
use chess_rules::game::{ChessMatch, GameLoop, GameLoopConfig, LoopOutcome};
use log::{error, info};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct ReplayArgs {
    /// Moves in coordinate form, e.g. `e2e4 e7e5 g1f3`.
    #[structopt(required = true)]
    pub moves: Vec<String>,
}

impl Command for ReplayArgs {
    fn execute(self) -> i32 {
        let config = GameLoopConfig {
            render: false,
            stop_on_error: true,
            ..Default::default()
        };
        info!("replaying {} moves", self.moves.len());
        let mut game_loop =
            GameLoop::new(ChessMatch::new(), ScriptedInput::new(self.moves), config);
        let outcome = game_loop.run();

        let chess_match = game_loop.into_match();
        println!("{}", chess_match.board());
        match outcome {
            Ok(LoopOutcome::Checkmate { winner }) => {
                println!("Checkmate! {} wins.", winner);
                0
            }
            Ok(_) => {
                println!(
                    "Turn {}, {} to move ({:?})",
                    chess_match.current_turn(),
                    chess_match.current_mover(),
                    chess_match.status()
                );
                0
            }
            Err(err) => {
                error!("replay stopped: {}", err);
                eprintln!("error: {}", err);
                1
            }
        }
    }
}
