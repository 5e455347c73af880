use std::{fmt, str::FromStr};

mod kruskal;
mod prim;
mod recur_backtrack;
mod recur_div;
mod wilson;

use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use recur_div::recursive_division;
use wilson::wilson;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Maze},
    random::RandomSource,
};

/// The maze construction algorithms this crate knows about.
///
/// Every variant produces a perfect maze: the carved passages form a spanning
/// tree over all cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    Prim,
    Kruskal,
    Wilson,
    RecurDiv,
}

impl Generator {
    /// Every registered generator, in the order they are listed to users.
    pub const ALL: [Generator; 5] = [
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::Kruskal,
        Generator::Wilson,
        Generator::RecurDiv,
    ];

    /// Identifier used to select the generator by name.
    pub fn name(self) -> &'static str {
        match self {
            Generator::RecurBacktrack => "recursive-backtracker",
            Generator::Prim => "prim",
            Generator::Kruskal => "kruskal",
            Generator::Wilson => "wilson",
            Generator::RecurDiv => "recursive-division",
        }
    }

    /// Puts a freshly created maze into the starting state this generator expects.
    pub fn prepare_maze(self, maze: &mut Maze) {
        maze.clear_visited();
        match self {
            Generator::RecurDiv => maze.clear_walls(),
            _ => maze.fill_walls(),
        }
    }

    /// Runs the generator body on a prepared maze.
    pub fn generate(self, maze: &mut Maze, random: &RandomSource) -> Result<()> {
        match self {
            Generator::RecurBacktrack => recursive_backtrack(maze, random)?,
            Generator::Prim => randomized_prim(maze, random)?,
            Generator::Kruskal => randomized_kruskal(maze, random)?,
            Generator::Wilson => wilson(maze, random)?,
            Generator::RecurDiv => recursive_division(maze, random)?,
        }
        maze.clear_visited();
        tracing::debug!(
            "[generate] {} finished a {}x{} maze with {} carved walls",
            self.name(),
            maze.width(),
            maze.height(),
            maze.carved_count()
        );
        Ok(())
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker (randomized DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name() == s)
            .ok_or_else(|| MazeError::UnknownGenerator(s.to_string()))
    }
}

/// Picks a uniformly random cell of the maze.
fn random_cell(maze: &Maze, random: &RandomSource) -> Coord {
    (
        random.next_in_range(0, maze.width() as usize) as u16,
        random.next_in_range(0, maze.height() as usize) as u16,
    )
}

/// In-bounds neighbours of `coord` whose visited marker matches `visited`, in compass order.
fn neighbors_with_state(maze: &Maze, coord: Coord, visited: bool) -> Vec<Coord> {
    maze.neighbors_of(coord)
        .map(|(_, c)| c)
        .filter(|&c| maze.is_visited(c) == visited)
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;

    use crate::maze::{Coord, Maze};

    /// Number of cells reachable from `start` through open walls.
    pub fn reachable_from(maze: &Maze, start: Coord) -> usize {
        let mut seen = vec![false; maze.len()];
        let index = |(x, y): Coord| y as usize * maze.width() as usize + x as usize;
        let mut queue = VecDeque::from([start]);
        seen[index(start)] = true;
        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for next in maze.open_neighbors(cell) {
                if !seen[index(next)] {
                    seen[index(next)] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    pub fn assert_perfect(maze: &Maze) {
        assert_eq!(maze.carved_count(), maze.len() - 1, "not a spanning tree");
        assert_eq!(reachable_from(maze, (0, 0)), maze.len(), "not connected");
    }
}
