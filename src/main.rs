use std::process;

use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Chess;

fn main() {
    env_logger::init();
    let code = Chess::from_args().execute();
    process::exit(code);
}
