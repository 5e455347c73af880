use std::io::Write;

use crate::{
    error::Result,
    maze::Coord,
    outputs::MazeOutput,
    solvers::MazeSolutions,
};

/// ASCII art of the maze with solution cells marked, followed by one line per path.
///
/// Start cells are drawn as `S`, end cells as `E` and the cells in between as `*`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextOutput;

impl TextOutput {
    fn mark(solutions: &MazeSolutions, coord: Coord) -> Option<char> {
        let paths = solutions.solutions();
        if paths.iter().any(|p| p.start() == coord) {
            Some('S')
        } else if paths.iter().any(|p| p.end() == coord) {
            Some('E')
        } else if paths.iter().any(|p| p.contains(coord)) {
            Some('*')
        } else {
            None
        }
    }
}

impl MazeOutput for TextOutput {
    fn name(&self) -> &'static str {
        "text"
    }

    fn write(&self, solutions: &MazeSolutions, sink: &mut dyn Write) -> Result<()> {
        let mut art = String::new();
        solutions
            .maze()
            .write_ascii(&mut art, |coord| Self::mark(solutions, coord))
            .map_err(|_| std::io::Error::other("failed to format maze"))?;
        sink.write_all(art.as_bytes())?;

        for (i, path) in solutions.solutions().iter().enumerate() {
            let steps = path
                .coords()
                .iter()
                .map(|(x, y)| format!("({},{})", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(sink, "path {} ({} cells): {}", i + 1, path.len(), steps)?;
        }
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::Maze, solvers::solve_maze};

    #[test]
    fn test_text_output() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.remove_wall_between((0, 0), (1, 0)).unwrap();
        maze.remove_wall_between((1, 0), (2, 0)).unwrap();
        let solutions = solve_maze(maze, &[((0, 0), (2, 0))]).unwrap();

        let mut out = Vec::new();
        TextOutput.write(&solutions, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "+---+---+---+\n| S   *   E |\n+---+---+---+\npath 1 (3 cells): (0,0) (1,0) (2,0)\n"
        );
    }

    #[test]
    fn test_unsolved_maze_has_no_marks() {
        let solutions = MazeSolutions::unsolved(Maze::new(1, 1).unwrap());
        let mut out = Vec::new();
        TextOutput.write(&solutions, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "+---+\n|   |\n+---+\n");
    }
}
