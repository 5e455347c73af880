mod bfs;

pub use bfs::{Distances, distances_from};

use crate::{
    error::Result,
    maze::{Coord, Maze},
};

/// Ordered walk from a start cell to an end cell through open walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    /// `coords` must be non-empty.
    pub(crate) fn new(coords: Vec<Coord>) -> Self {
        debug_assert!(!coords.is_empty(), "a path holds at least one cell");
        Path { coords }
    }

    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    pub fn end(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Number of cells on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// A path always holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Checks every step of the path against the walls of `maze`.
    pub fn is_valid_in(&self, maze: &Maze) -> bool {
        self.coords.iter().all(|&c| maze.is_in_bounds(c))
            && self
                .coords
                .windows(2)
                .all(|step| maze.is_connected(step[0], step[1]))
    }
}

/// A finished maze together with the paths solved through it, in request order.
///
/// This is what output adapters receive; they only get read access.
#[derive(Debug, Clone)]
pub struct MazeSolutions {
    maze: Maze,
    solutions: Vec<Path>,
}

impl MazeSolutions {
    pub fn new(maze: Maze, solutions: Vec<Path>) -> Self {
        MazeSolutions { maze, solutions }
    }

    /// A maze handed to outputs without any solution.
    pub fn unsolved(maze: Maze) -> Self {
        MazeSolutions::new(maze, Vec::new())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn solutions(&self) -> &[Path] {
        &self.solutions
    }
}

/// The two opposite corners: top-left to bottom-right.
pub fn default_endpoints(maze: &Maze) -> (Coord, Coord) {
    ((0, 0), (maze.width() - 1, maze.height() - 1))
}

/// Shortest path from `start` to `end`.
pub fn solve(maze: &Maze, start: Coord, end: Coord) -> Result<Path> {
    let path = distances_from(maze, start).path_to(end)?;
    tracing::debug!("[solve] {:?} -> {:?} in {} cells", start, end, path.len());
    Ok(path)
}

/// Up to `limit` distinct shortest paths from `start` to `end`.
///
/// A maze with loops can hold several routes of equal length; a perfect maze
/// always gives exactly one. The first path is the one [`solve`] returns.
pub fn solve_paths(maze: &Maze, start: Coord, end: Coord, limit: usize) -> Result<Vec<Path>> {
    let paths = distances_from(maze, start).paths_to(end, limit)?;
    tracing::debug!(
        "[solve] {:?} -> {:?} has {} shortest paths",
        start,
        end,
        paths.len()
    );
    Ok(paths)
}

/// Shortest path for each `(start, end)` pair, in the order given.
/// Fails on the first pair that cannot be solved.
pub fn solve_all(maze: &Maze, endpoints: &[(Coord, Coord)]) -> Result<Vec<Path>> {
    endpoints
        .iter()
        .map(|&(start, end)| solve(maze, start, end))
        .collect()
}

/// Solves every pair and bundles the paths with the maze for the outputs.
pub fn solve_maze(maze: Maze, endpoints: &[(Coord, Coord)]) -> Result<MazeSolutions> {
    let solutions = solve_all(&maze, endpoints)?;
    Ok(MazeSolutions::new(maze, solutions))
}

/// Longest shortest path in the maze, found with two flood fills: from the
/// top-left corner to the furthest cell, then from there to its furthest cell.
/// Exact for perfect mazes.
pub fn longest_path(maze: &Maze) -> Result<Path> {
    let (far, _) = distances_from(maze, (0, 0)).max();
    let from_far = distances_from(maze, far);
    let (end, distance) = from_far.max();
    tracing::debug!(
        "[solve] longest path {:?} -> {:?} spans {} steps",
        from_far.start(),
        end,
        distance
    );
    from_far.path_to(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MazeError, generators::Generator, random::RandomSource};

    fn generated(width: u16, height: u16, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        let generator = Generator::Kruskal;
        generator.prepare_maze(&mut maze);
        generator
            .generate(&mut maze, &RandomSource::seeded(seed))
            .unwrap();
        maze
    }

    #[test]
    fn test_single_cell_path() {
        let maze = Maze::new(1, 1).unwrap();
        let path = solve(&maze, (0, 0), (0, 0)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.start(), path.end());
    }

    #[test]
    fn test_solution_is_valid() {
        let maze = generated(12, 9, 4);
        let (start, end) = default_endpoints(&maze);
        let path = solve(&maze, start, end).unwrap();
        assert_eq!(path.start(), (0, 0));
        assert_eq!(path.end(), (11, 8));
        assert!(path.is_valid_in(&maze));
    }

    #[test]
    fn test_solve_all_keeps_order() {
        let maze = generated(6, 6, 9);
        let pairs = [((5, 5), (0, 0)), ((0, 0), (3, 2)), ((2, 2), (2, 2))];
        let paths = solve_all(&maze, &pairs).unwrap();
        assert_eq!(paths.len(), 3);
        for (path, &(start, end)) in paths.iter().zip(pairs.iter()) {
            assert_eq!((path.start(), path.end()), (start, end));
            assert!(path.is_valid_in(&maze));
        }
    }

    #[test]
    fn test_disconnected_maze_has_no_path() {
        let maze = Maze::new(3, 3).unwrap();
        assert!(matches!(
            solve(&maze, (0, 0), (2, 2)),
            Err(MazeError::NoPathFound { .. })
        ));
        assert!(matches!(
            solve(&maze, (0, 0), (3, 0)),
            Err(MazeError::NoPathFound {
                start: (0, 0),
                end: (3, 0)
            })
        ));
        assert!(matches!(
            solve(&maze, (0, 9), (0, 0)),
            Err(MazeError::NoPathFound {
                start: (0, 9),
                end: (0, 0)
            })
        ));
        assert!(matches!(
            solve_paths(&maze, (7, 7), (0, 0), 3),
            Err(MazeError::NoPathFound { .. })
        ));
    }

    #[test]
    fn test_shortest_path_in_a_maze_with_a_cycle() {
        // Open 2x2 room with two equally short routes; compass order reaches (1, 0) before (0, 1)
        let mut maze = Maze::new(2, 2).unwrap();
        maze.clear_walls();
        let path = solve(&maze, (0, 0), (1, 1)).unwrap();
        assert_eq!(path.coords(), &[(0, 0), (1, 0), (1, 1)]);

        let paths = solve_paths(&maze, (0, 0), (1, 1), 10).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], path);
        assert_eq!(paths[1].coords(), &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(solve_paths(&maze, (0, 0), (1, 1), 1).unwrap(), vec![path]);
    }

    #[test]
    fn test_perfect_maze_has_one_route() {
        let maze = generated(8, 8, 11);
        let paths = solve_paths(&maze, (0, 0), (7, 7), 5).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_valid_in(&maze));
    }

    #[test]
    fn test_longest_path_in_corridor() {
        let maze = generated(1, 7, 0);
        let path = longest_path(&maze).unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.is_valid_in(&maze));
    }

    #[test]
    fn test_solve_maze_bundles_paths() {
        let maze = generated(4, 4, 2);
        let endpoints = [default_endpoints(&maze)];
        let solutions = solve_maze(maze.clone(), &endpoints).unwrap();
        assert_eq!(solutions.maze(), &maze);
        assert_eq!(solutions.solutions().len(), 1);
        assert!(MazeSolutions::unsolved(maze).solutions().is_empty());
    }
}
