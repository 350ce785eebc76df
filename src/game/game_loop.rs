use log::{debug, warn};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::square::Square;
use crate::input_handler::{self, CoordinateMove, InputError};
use crate::move_generation::MoveMatrix;

use super::chess_match::ChessMatch;
use super::display::GameDisplay;
use super::error::MatchError;
use super::input_source::{InputSource, Prompt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameLoopConfig {
    /// Clear the terminal before each frame instead of scrolling.
    pub clear_screen: bool,
    /// Mark the destinations of a selected piece.
    pub highlight_moves: bool,
    /// Draw frames at all.
    pub render: bool,
    /// End the loop on the first rejected input instead of re-prompting.
    pub stop_on_error: bool,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            highlight_moves: true,
            render: true,
            stop_on_error: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    Checkmate { winner: Color },
    /// The input source ran out before the match ended.
    InputExhausted,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameLoopError {
    #[error("{error}")]
    Input {
        #[from]
        error: InputError,
    },
    #[error("{error}")]
    Match {
        #[from]
        error: MatchError,
    },
}

impl GameLoopError {
    /// Errors the loop cannot recover from by asking again.
    pub fn is_fatal(&self) -> bool {
        match self {
            GameLoopError::Match { error } => error.is_fatal(),
            GameLoopError::Input { error } => matches!(error, InputError::IOError { .. }),
        }
    }
}

/// Drives one match from its input source until checkmate, quit or the
/// input runs out.
pub struct GameLoop<I: InputSource> {
    chess_match: ChessMatch,
    input: I,
    display: GameDisplay,
    config: GameLoopConfig,
    selected: Option<Square>,
    message: Option<String>,
}

impl<I: InputSource> GameLoop<I> {
    pub fn new(chess_match: ChessMatch, input: I, config: GameLoopConfig) -> Self {
        Self {
            chess_match,
            input,
            display: GameDisplay::new(config.clear_screen, config.highlight_moves),
            config,
            selected: None,
            message: None,
        }
    }

    pub fn chess_match(&self) -> &ChessMatch {
        &self.chess_match
    }

    pub fn into_match(self) -> ChessMatch {
        self.chess_match
    }

    fn prompt(&self) -> Prompt {
        if self.chess_match.pending_promotion().is_some() {
            return Prompt::Promotion;
        }
        match self.selected {
            Some(from) => Prompt::Target { from },
            None => Prompt::Source {
                mover: self.chess_match.current_mover(),
            },
        }
    }

    fn render(&mut self) {
        if !self.config.render {
            return;
        }
        let highlights: Option<MoveMatrix> = self
            .selected
            .and_then(|square| self.chess_match.legal_moves_at(square).ok());
        self.display
            .render(&self.chess_match, highlights.as_ref(), self.message.as_deref());
    }

    pub fn run(&mut self) -> Result<LoopOutcome, GameLoopError> {
        loop {
            self.render();
            if let Some(winner) = self.chess_match.winner() {
                return Ok(LoopOutcome::Checkmate { winner });
            }

            let prompt = self.prompt();
            let line = match self.input.next_line(prompt)? {
                Some(line) => line,
                None => return Ok(LoopOutcome::InputExhausted),
            };
            // a lone `q` answers the promotion prompt, so it only quits elsewhere
            if prompt != Prompt::Promotion && input_handler::is_exit_command(&line) {
                return Ok(LoopOutcome::Quit);
            }

            self.message = None;
            if let Err(error) = self.handle(prompt, &line) {
                debug!("input {:?} rejected: {}", line, error);
                if error.is_fatal() || self.config.stop_on_error {
                    return Err(error);
                }
                self.message = Some(format!("error: {}", error));
            }
        }
    }

    fn handle(&mut self, prompt: Prompt, line: &str) -> Result<(), GameLoopError> {
        match prompt {
            Prompt::Promotion => {
                let kind = input_handler::parse_promotion(line)?;
                self.chess_match.resolve_promotion(kind)?;
            }
            Prompt::Target { from } => {
                self.selected = None;
                let target = input_handler::parse_square(line)?;
                self.play(CoordinateMove {
                    source: from,
                    target,
                    promotion: None,
                })?;
            }
            Prompt::Source { .. } => match line.parse::<CoordinateMove>() {
                Ok(coordinate_move) => self.play(coordinate_move)?,
                Err(_) => {
                    let source = input_handler::parse_square(line)?;
                    self.chess_match.legal_moves_at(source)?;
                    self.selected = Some(source);
                }
            },
        }
        Ok(())
    }

    fn play(&mut self, coordinate_move: CoordinateMove) -> Result<(), GameLoopError> {
        let captured = self
            .chess_match
            .perform_move_at(coordinate_move.source, coordinate_move.target)?;
        if let Some(piece) = captured {
            self.message = Some(format!("captured {} {}", piece.color(), piece.kind()));
        }

        match (coordinate_move.promotion, self.chess_match.pending_promotion()) {
            (Some(kind), Some(_)) => {
                self.chess_match.resolve_promotion(kind)?;
            }
            (Some(kind), None) => {
                warn!("ignoring promotion to {}, no pawn reached the last rank", kind)
            }
            (None, _) => {}
        }
        Ok(())
    }
}
