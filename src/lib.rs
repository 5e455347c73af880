//! Rectangular maze generation and solving.
//!
//! Build a [`MazeExecution`] with a [`Generator`] and a [`RandomSource`], run it,
//! then hand the finished [`Maze`] to the [`solvers`] to get [`MazeSolutions`]
//! for an [`outputs::MazeOutput`].

pub mod config;
pub mod error;
pub mod execution;
pub mod generators;
pub mod maze;
pub mod outputs;
pub mod random;
pub mod solvers;

pub use error::{MazeError, Result};
pub use execution::{MazeExecution, State};
pub use generators::Generator;
pub use maze::{Coord, Direction, Maze};
pub use random::RandomSource;
pub use solvers::{MazeSolutions, Path};
