use std::{fmt, io::Write, str::FromStr};

mod text;

pub use text::TextOutput;

use crate::{
    error::{MazeError, Result},
    solvers::MazeSolutions,
};

/// Something that turns a solved maze into bytes.
///
/// Adapters receive the solutions by shared reference and must not alter the maze.
pub trait MazeOutput {
    fn name(&self) -> &'static str;

    fn write(&self, solutions: &MazeSolutions, sink: &mut dyn Write) -> Result<()>;
}

/// Registered output adapters, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    Text,
}

impl Output {
    pub const ALL: [Output; 1] = [Output::Text];

    pub fn name(self) -> &'static str {
        self.adapter().name()
    }

    pub fn adapter(self) -> Box<dyn MazeOutput> {
        match self {
            Output::Text => Box::new(TextOutput),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text => write!(f, "Plain text (ASCII art and path listing)"),
        }
    }
}

impl FromStr for Output {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Output::ALL
            .into_iter()
            .find(|output| output.name() == s)
            .ok_or_else(|| MazeError::UnknownOutput(s.to_string()))
    }
}
