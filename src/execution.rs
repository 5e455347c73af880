use std::{fmt, thread::JoinHandle};

use crate::{
    error::{MazeError, Result},
    generators::Generator,
    maze::Maze,
    random::RandomSource,
};

/// Lifecycle of a [`MazeExecution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NotStarted,
    Running,
    Finished,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::NotStarted => write!(f, "not started"),
            State::Running => write!(f, "running"),
            State::Finished => write!(f, "finished"),
        }
    }
}

/// One run of a generator over a maze of fixed size.
///
/// The maze is created and prepared when the execution is built. Calling
/// [`MazeExecution::call`] moves the state from `NotStarted` through `Running`
/// to `Finished`; calling it again afterwards hands back the same maze
/// untouched. If the generator fails, the state stays `Running` and the
/// execution cannot be resumed: drop it and build a new one.
#[derive(Debug)]
pub struct MazeExecution {
    generator: Generator,
    maze: Maze,
    state: State,
    random: RandomSource,
}

impl MazeExecution {
    pub fn new(
        width: u16,
        height: u16,
        generator: Generator,
        random: RandomSource,
    ) -> Result<Self> {
        let mut maze = Maze::new(width, height)?;
        generator.prepare_maze(&mut maze);
        Ok(MazeExecution {
            generator,
            maze,
            state: State::NotStarted,
            random,
        })
    }

    /// Runs the generator to completion, or returns the finished maze if it already ran.
    pub fn call(&mut self) -> Result<&Maze> {
        match self.state {
            State::Finished => return Ok(&self.maze),
            State::Running => {
                tracing::warn!(
                    "[execution] {} was invoked again after an aborted run",
                    self.generator.name()
                );
                return Err(MazeError::ExecutionAborted);
            }
            State::NotStarted => {}
        }

        self.state = State::Running;
        tracing::info!(
            "[execution] generating a {}x{} maze with {}",
            self.maze.width(),
            self.maze.height(),
            self.generator
        );
        self.generator.generate(&mut self.maze, &self.random)?;
        self.state = State::Finished;
        tracing::info!("[execution] {} finished", self.generator.name());
        Ok(&self.maze)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    /// The maze in whatever state it currently is. Only a `Finished` maze is complete.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Takes the finished maze out of the execution.
    pub fn into_maze(self) -> Result<Maze> {
        match self.state {
            State::Finished => Ok(self.maze),
            _ => Err(MazeError::ExecutionAborted),
        }
    }

    /// Runs the execution on a worker thread and yields the finished maze.
    pub fn spawn(mut self) -> JoinHandle<Result<Maze>> {
        std::thread::spawn(move || -> Result<Maze> {
            self.call()?;
            self.into_maze()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execution(seed: u64) -> MazeExecution {
        MazeExecution::new(6, 6, Generator::RecurBacktrack, RandomSource::seeded(seed)).unwrap()
    }

    #[test]
    fn test_lifecycle() {
        let mut exec = execution(1);
        assert_eq!(exec.state(), State::NotStarted);
        assert_eq!(exec.maze().carved_count(), 0);
        exec.call().unwrap();
        assert_eq!(exec.state(), State::Finished);
        assert_eq!(exec.maze().carved_count(), 35);
    }

    #[test]
    fn test_second_call_is_idempotent() {
        let mut exec = execution(2);
        let first = exec.call().unwrap().clone();
        let first_ptr = exec.maze() as *const Maze;
        let second = exec.call().unwrap();
        assert!(std::ptr::eq(first_ptr, second));
        assert_eq!(&first, second);
        assert_eq!(exec.state(), State::Finished);
    }

    #[test]
    fn test_running_execution_cannot_resume() {
        let mut exec = execution(3);
        exec.state = State::Running;
        assert!(matches!(exec.call(), Err(MazeError::ExecutionAborted)));
        assert_eq!(exec.state(), State::Running);
        assert!(matches!(exec.into_maze(), Err(MazeError::ExecutionAborted)));
    }

    #[test]
    fn test_unfinished_maze_is_not_handed_out() {
        assert!(matches!(
            execution(4).into_maze(),
            Err(MazeError::ExecutionAborted)
        ));
    }

    #[test]
    fn test_invalid_dimensions() {
        let result = MazeExecution::new(0, 3, Generator::Prim, RandomSource::seeded(0));
        assert!(matches!(result, Err(MazeError::InvalidDimension { .. })));
    }

    #[test]
    fn test_spawn_matches_synchronous_run() {
        let spawned = execution(5).spawn().join().unwrap().unwrap();
        let mut exec = execution(5);
        assert_eq!(exec.call().unwrap(), &spawned);
    }
}
