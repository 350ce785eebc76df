//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{pvp::PvpArgs, replay::ReplayArgs, Command};

#[derive(StructOpt)]
#[structopt(name = "chess", about = "Two-player chess in the terminal ♛")]
pub enum Chess {
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Enter a square to see where its piece can go, then its destination, or type a whole move like `e2e4`."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "replay",
        about = "Play the given coordinate moves (like `e2e4`, or `e7e8q` to promote) from the starting position and print the final board. Stops at the first move the rules reject."
    )]
    Replay(ReplayArgs),
}

impl Command for Chess {
    fn execute(self) -> i32 {
        match self {
            Self::Pvp(cmd) => cmd.execute(),
            Self::Replay(cmd) => cmd.execute(),
        }
    }
}
