pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::{Cell, Direction};
pub use grid::Grid;

use crate::error::{MazeError, Result};

/// `(x, y)` position of a cell, `x` growing east and `y` growing south.
pub type Coord = (u16, u16);

/// A rectangular maze of `width * height` cells with symmetric walls.
///
/// Every wall is stored on both cells that share it, and every mutation goes
/// through methods that update both sides at once. The outer boundary is
/// never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Grid<Cell>,
}

impl Maze {
    /// Creates a fully walled maze with every cell unvisited.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Maze {
            cells: Grid::new(width, height, Cell::WALLED),
        })
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.cells.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.cells.height()
    }

    /// Number of cells in the maze.
    pub fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// A maze always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.cells.is_in_bounds(coord)
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord)
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width(), self.height());
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// The neighbour one step away in `direction`, if it lies inside the maze.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        direction.step(coord).filter(|&c| self.is_in_bounds(c))
    }

    /// Get neighbors of a cell, each paired with the direction of the wall they share.
    /// Neighbours come in compass order (north, east, south, west); an out-of-bounds
    /// coordinate has none.
    pub fn neighbors_of(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(coord, dir).map(|c| (dir, c)))
    }

    /// Neighbours reachable from `coord` without crossing a wall, in compass order.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors_of(coord)
            .filter(move |&(dir, _)| !self.cells[coord].has_wall(dir))
            .map(|(_, c)| c)
    }

    /// Whether `coord` has a wall on its `direction` side.
    /// Anything outside the maze counts as solid.
    pub fn has_wall(&self, coord: Coord, direction: Direction) -> bool {
        self.cell(coord).is_none_or(|cell| cell.has_wall(direction))
    }

    /// True iff `a` and `b` are adjacent and no wall separates them.
    /// This says nothing about reachability through other cells.
    pub fn is_connected(&self, a: Coord, b: Coord) -> bool {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            return false;
        }
        match Direction::between(a, b) {
            Some(dir) => !self.cells[a].has_wall(dir),
            None => false,
        }
    }

    /// Carves the passage between two adjacent cells.
    pub fn remove_wall_between(&mut self, a: Coord, b: Coord) -> Result<()> {
        self.set_wall_between(a, b, false)
    }

    /// Restores the wall between two adjacent cells.
    pub fn add_wall_between(&mut self, a: Coord, b: Coord) -> Result<()> {
        self.set_wall_between(a, b, true)
    }

    fn set_wall_between(&mut self, a: Coord, b: Coord, present: bool) -> Result<()> {
        let dir = self.direction_between(a, b)?;
        self.cells[a].set_wall(dir, present);
        self.cells[b].set_wall(dir.opposite(), present);
        Ok(())
    }

    fn direction_between(&self, a: Coord, b: Coord) -> Result<Direction> {
        Direction::between(a, b)
            .filter(|_| self.is_in_bounds(a) && self.is_in_bounds(b))
            .ok_or(MazeError::NotAdjacent { from: a, to: b })
    }

    /// False for coordinates outside the maze.
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(|cell| cell.is_visited())
    }

    /// Marks a cell as visited.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the maze.
    pub fn set_visited(&mut self, coord: Coord) {
        self.cells[coord].set_visited(true);
    }

    /// Clears the visited marker on every cell.
    pub fn clear_visited(&mut self) {
        for coord in self.coords() {
            self.cells[coord].set_visited(false);
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// Puts every wall back, leaving a fully walled grid.
    pub fn fill_walls(&mut self) {
        self.coords().for_each(|coord| {
            let visited = self.cells[coord].is_visited();
            let cell = &mut self.cells[coord];
            *cell = Cell::WALLED;
            cell.set_visited(visited);
        });
    }

    /// Clears all walls between cells. Boundary walls are preserved.
    pub fn clear_walls(&mut self) {
        self.coords().for_each(|coord| {
            for dir in Direction::ALL {
                if self.neighbor(coord, dir).is_some() {
                    self.cells[coord].set_wall(dir, false);
                }
            }
        });
    }

    /// Number of inner walls that have been removed, i.e. edges of the passage graph.
    pub fn carved_count(&self) -> usize {
        self.coords()
            .map(|coord| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| {
                        self.neighbor(coord, dir).is_some() && !self.cells[coord].has_wall(dir)
                    })
                    .count()
            })
            .sum()
    }

    /// Writes the maze as ASCII art, asking `mark` for the glyph to put inside each cell.
    pub fn write_ascii<W, F>(&self, out: &mut W, mark: F) -> fmt::Result
    where
        W: fmt::Write,
        F: Fn(Coord) -> Option<char>,
    {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let top = if self.has_wall((x, y), Direction::North) {
                    "---"
                } else {
                    "   "
                };
                write!(out, "+{}", top)?;
            }
            writeln!(out, "+")?;
            for x in 0..self.width() {
                let side = if self.has_wall((x, y), Direction::West) {
                    '|'
                } else {
                    ' '
                };
                write!(out, "{} {} ", side, mark((x, y)).unwrap_or(' '))?;
            }
            let last = (self.width() - 1, y);
            writeln!(
                out,
                "{}",
                if self.has_wall(last, Direction::East) {
                    '|'
                } else {
                    ' '
                }
            )?;
        }
        for x in 0..self.width() {
            let bottom = if self.has_wall((x, self.height() - 1), Direction::South) {
                "---"
            } else {
                "   "
            };
            write!(out, "+{}", bottom)?;
        }
        writeln!(out, "+")
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_ascii(f, |_| None)
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_fully_walled() {
        let maze = Maze::new(4, 3).unwrap();
        assert_eq!(maze.len(), 12);
        assert_eq!(maze.carved_count(), 0);
        assert!(maze.coords().all(|c| maze[c] == Cell::WALLED));
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(matches!(
            Maze::new(0, 5),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(
            Maze::new(5, 0),
            Err(MazeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_neighbors_in_compass_order() {
        let maze = Maze::new(5, 5).unwrap();
        let neighbors = maze.neighbors_of((2, 2)).collect::<Vec<_>>();
        assert_eq!(
            neighbors,
            vec![
                (Direction::North, (2, 1)),
                (Direction::East, (3, 2)),
                (Direction::South, (2, 3)),
                (Direction::West, (1, 2)),
            ]
        );
        let corner = maze.neighbors_of((0, 0)).map(|(_, c)| c).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
        assert_eq!(maze.neighbors_of((5, 5)).count(), 0);
    }

    #[test]
    fn test_remove_wall_is_symmetric() {
        let mut maze = Maze::new(5, 5).unwrap();
        maze.remove_wall_between((1, 1), (2, 1)).unwrap();
        assert!(!maze.has_wall((1, 1), Direction::East));
        assert!(!maze.has_wall((2, 1), Direction::West));
        assert!(maze.is_connected((1, 1), (2, 1)));
        assert!(maze.is_connected((2, 1), (1, 1)));
        assert_eq!(maze.carved_count(), 1);

        maze.add_wall_between((2, 1), (1, 1)).unwrap();
        assert!(!maze.is_connected((1, 1), (2, 1)));
        assert_eq!(maze.carved_count(), 0);
    }

    #[test]
    fn test_remove_wall_not_adjacent() {
        let mut maze = Maze::new(5, 5).unwrap();
        assert!(matches!(
            maze.remove_wall_between((1, 1), (2, 2)),
            Err(MazeError::NotAdjacent { .. })
        ));
        assert!(matches!(
            maze.remove_wall_between((1, 1), (1, 1)),
            Err(MazeError::NotAdjacent { .. })
        ));
        assert!(matches!(
            maze.remove_wall_between((4, 4), (5, 4)),
            Err(MazeError::NotAdjacent {
                from: (4, 4),
                to: (5, 4)
            })
        ));
        assert!(matches!(
            maze.add_wall_between((9, 9), (9, 10)),
            Err(MazeError::NotAdjacent { .. })
        ));
        assert_eq!(maze.carved_count(), 0);
    }

    #[test]
    fn test_queries_outside_the_maze() {
        let mut maze = Maze::new(3, 2).unwrap();
        maze.clear_walls();
        for dir in Direction::ALL {
            assert!(maze.has_wall((3, 0), dir));
            assert!(maze.has_wall((0, 7), dir));
        }
        assert!(maze.cell((3, 0)).is_none());
        maze.set_visited((2, 1));
        assert!(maze.is_visited((2, 1)));
        assert!(!maze.is_visited((3, 1)));
    }

    #[test]
    fn test_is_connected_requires_adjacency() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.remove_wall_between((0, 0), (1, 0)).unwrap();
        maze.remove_wall_between((1, 0), (2, 0)).unwrap();
        assert!(!maze.is_connected((0, 0), (2, 0)));
        assert!(!maze.is_connected((0, 0), (0, 0)));
        assert!(!maze.is_connected((2, 0), (3, 0)));
    }

    #[test]
    fn test_clear_and_fill_walls() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.clear_walls();
        assert_eq!(maze.carved_count(), 12);
        assert!(maze.has_wall((0, 0), Direction::North));
        assert!(maze.has_wall((2, 2), Direction::East));
        maze.set_visited((1, 1));
        maze.fill_walls();
        assert_eq!(maze.carved_count(), 0);
        assert!(maze.is_visited((1, 1)));
        maze.clear_visited();
        assert_eq!(maze.visited_count(), 0);
    }

    #[test]
    fn test_ascii_rendering() {
        let mut maze = Maze::new(2, 1).unwrap();
        maze.remove_wall_between((0, 0), (1, 0)).unwrap();
        assert_eq!(maze.to_string(), "+---+---+\n|       |\n+---+---+\n");
    }
}
