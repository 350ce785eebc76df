use core::fmt;
use std::collections::VecDeque;

use crate::board::color::Color;
use crate::board::square::Square;
use crate::input_handler::{self, InputError};

/// What the game loop is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    Source { mover: Color },
    Target { from: Square },
    Promotion,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Source { mover } => {
                write!(f, "{} to move (e.g. e2 or e2e4, q to quit): ", mover)
            }
            Prompt::Target { from } => write!(f, "move {} to: ", from),
            Prompt::Promotion => write!(f, "promote to (N, B, R, Q): "),
        }
    }
}

pub trait InputSource {
    /// The next line of input, or `None` once the source has run dry.
    fn next_line(&mut self, prompt: Prompt) -> Result<Option<String>, InputError>;
}

/// Reads from the terminal.
pub struct HumanInput;

impl InputSource for HumanInput {
    fn next_line(&mut self, prompt: Prompt) -> Result<Option<String>, InputError> {
        match input_handler::read_line(&prompt.to_string()) {
            Ok(line) => Ok(Some(line)),
            Err(InputError::UserExit) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Replays a fixed list of inputs.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self, _prompt: Prompt) -> Result<Option<String>, InputError> {
        Ok(self.lines.pop_front())
    }
}
