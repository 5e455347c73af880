use std::collections::VecDeque;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, Grid, Maze},
    solvers::Path,
};

/// Breadth-first flood fill from one cell: step counts and predecessors for
/// every cell reachable from the start.
///
/// Every neighbour one step closer to the start is kept as a predecessor, in
/// the order the fill reached it, so all shortest routes can be recovered.
#[derive(Debug, Clone)]
pub struct Distances {
    start: Coord,
    distances: Grid<Option<u32>>,
    predecessors: Grid<Vec<Coord>>,
    furthest: (Coord, u32),
}

impl Distances {
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Number of steps from the start, or `None` if the cell is unreachable or outside the maze.
    pub fn distance(&self, coord: Coord) -> Option<u32> {
        self.distances.get(coord).copied().flatten()
    }

    /// The furthest reachable cell and its distance. Ties go to the cell reached first.
    /// A start outside the maze reaches nothing and reports itself at distance 0.
    pub fn max(&self) -> (Coord, u32) {
        self.furthest
    }

    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    fn ensure_reached(&self, end: Coord) -> Result<()> {
        match self.distance(end) {
            Some(_) => Ok(()),
            None => Err(MazeError::NoPathFound {
                start: self.start,
                end,
            }),
        }
    }

    /// Shortest path from the start to `end`, following the first predecessor back from `end`.
    pub fn path_to(&self, end: Coord) -> Result<Path> {
        self.ensure_reached(end)?;

        let mut coords = vec![end];
        let mut current = end;
        while let Some(&parent) = self.predecessors[current].first() {
            coords.push(parent);
            current = parent;
        }
        coords.reverse();
        Ok(Path::new(coords))
    }

    /// Up to `limit` distinct shortest paths from the start to `end`.
    ///
    /// Paths come out in a fixed order; the first one is the path returned by
    /// [`Distances::path_to`]. A perfect maze always yields exactly one.
    pub fn paths_to(&self, end: Coord, limit: usize) -> Result<Vec<Path>> {
        self.ensure_reached(end)?;

        let mut paths = Vec::new();
        // Partial routes walked backwards from `end`
        let mut stack = vec![vec![end]];
        while paths.len() < limit {
            let Some(mut route) = stack.pop() else {
                break;
            };
            let last = route[route.len() - 1];
            let parents = &self.predecessors[last];
            if parents.is_empty() {
                route.reverse();
                paths.push(Path::new(route));
                continue;
            }
            // Reversed so the first predecessor is explored first
            for &parent in parents.iter().rev() {
                let mut next = route.clone();
                next.push(parent);
                stack.push(next);
            }
        }
        Ok(paths)
    }
}

/// Flood fills the maze from `start`, expanding neighbours in compass order
/// (north, east, south, west) so results are reproducible.
pub fn distances_from(maze: &Maze, start: Coord) -> Distances {
    let mut distances = Grid::new(maze.width(), maze.height(), None);
    let mut predecessors: Grid<Vec<Coord>> = Grid::new(maze.width(), maze.height(), Vec::new());
    let mut furthest = (start, 0);

    let mut queue = VecDeque::new();
    if maze.is_in_bounds(start) {
        distances[start] = Some(0);
        queue.push_back(start);
    }

    while let Some(cell) = queue.pop_front() {
        let Some(distance) = distances[cell] else {
            continue;
        };
        if distance > furthest.1 {
            furthest = (cell, distance);
        }
        for next in maze.open_neighbors(cell) {
            match distances[next] {
                None => {
                    distances[next] = Some(distance + 1);
                    predecessors[next].push(cell);
                    queue.push_back(next);
                }
                Some(d) if d == distance + 1 => predecessors[next].push(cell),
                Some(_) => {}
            }
        }
    }

    Distances {
        start,
        distances,
        predecessors,
        furthest,
    }
}
