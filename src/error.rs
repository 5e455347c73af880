use thiserror::Error;

use crate::maze::Coord;

/// Errors produced while building, generating, solving or writing a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    /// Width or height is zero.
    #[error("invalid maze dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: u16, height: u16 },

    /// A wall operation was requested between two cells that do not share a
    /// wall, including when either of them lies outside the maze.
    #[error("cells {from:?} and {to:?} are not adjacent")]
    NotAdjacent { from: Coord, to: Coord },

    /// The solver could not connect the two endpoints, either because no
    /// route exists or because one of them lies outside the maze.
    #[error("no path found from {start:?} to {end:?}")]
    NoPathFound { start: Coord, end: Coord },

    /// The execution was invoked while still marked as running, which only
    /// happens after an earlier run returned an error. It has to be rebuilt.
    #[error("maze execution was aborted earlier and cannot be resumed")]
    ExecutionAborted,

    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),

    #[error("unknown output `{0}`")]
    UnknownOutput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
