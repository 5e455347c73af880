/// Compass direction from a cell towards one of its four neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed compass order used wherever neighbours are enumerated.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Steps one cell from `coord` in this direction.
    /// Returns `None` on underflow; the upper bound is left to the caller.
    pub fn step(self, coord: (u16, u16)) -> Option<(u16, u16)> {
        let (x, y) = coord;
        match self {
            Direction::North => Some((x, y.checked_sub(1)?)),
            Direction::East => Some((x.checked_add(1)?, y)),
            Direction::South => Some((x, y.checked_add(1)?)),
            Direction::West => Some((x.checked_sub(1)?, y)),
        }
    }

    /// Direction leading from `from` to the adjacent cell `to`, if they are adjacent.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.step(from) == Some(to))
    }

    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

/// A single maze cell: its four walls plus the marker generators use while carving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: u8,
    visited: bool,
}

impl Cell {
    const ALL_WALLS: u8 = 0b1111;

    /// A fully walled, unvisited cell.
    pub const WALLED: Cell = Cell {
        walls: Cell::ALL_WALLS,
        visited: false,
    };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls & direction.bit() != 0
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_wall(&mut self, direction: Direction, present: bool) {
        if present {
            self.walls |= direction.bit();
        } else {
            self.walls &= !direction.bit();
        }
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}
