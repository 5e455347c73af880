use crate::{
    error::Result,
    generators::{neighbors_with_state, random_cell},
    maze::Maze,
    random::RandomSource,
};

/// Randomized depth-first carving. Produces long, winding corridors.
pub fn recursive_backtrack(maze: &mut Maze, random: &RandomSource) -> Result<()> {
    // Initialize the starting point
    let start = random_cell(maze, random);
    maze.set_visited(start);

    // The stack keeps only visited cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = neighbors_with_state(maze, cell, false);

        if let Some(&neighbor) = random.choose(&neighbors) {
            maze.remove_wall_between(cell, neighbor)?;
            maze.set_visited(neighbor);
            tracing::trace!(
                "[recursive-backtracker] carved {:?} -> {:?}",
                cell,
                neighbor
            );
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }
    Ok(())
}
