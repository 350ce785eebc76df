//! CLI command implementations.

pub trait Command {
    /// Runs the command and returns the process exit code.
    fn execute(self) -> i32;
}

pub mod pvp;
pub mod replay;
