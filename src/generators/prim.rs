use crate::{
    error::Result,
    generators::{neighbors_with_state, random_cell},
    maze::{Grid, Maze},
    random::RandomSource,
};

/// Randomized Prim: grows the maze from one cell by repeatedly attaching a
/// random frontier cell to a random visited neighbour.
pub fn randomized_prim(maze: &mut Maze, random: &RandomSource) -> Result<()> {
    let start = random_cell(maze, random);
    maze.set_visited(start);

    // Cells already queued as frontier, so each is added once
    let mut in_frontier = Grid::new(maze.width(), maze.height(), false);
    let mut frontiers = neighbors_with_state(maze, start, false);
    for &coord in &frontiers {
        in_frontier[coord] = true;
    }

    while !frontiers.is_empty() {
        // Randomly select a cell from the frontiers
        let idx = random.next_in_range(0, frontiers.len());
        let frontier = frontiers.swap_remove(idx);

        // A frontier cell always borders the visited region
        let visited_neighbors = neighbors_with_state(maze, frontier, true);
        let Some(&neighbor) = random.choose(&visited_neighbors) else {
            continue;
        };

        maze.remove_wall_between(frontier, neighbor)?;
        maze.set_visited(frontier);
        tracing::trace!("[prim] carved {:?} -> {:?}", neighbor, frontier);

        for coord in neighbors_with_state(maze, frontier, false) {
            if !in_frontier[coord] {
                in_frontier[coord] = true;
                frontiers.push(coord);
            }
        }
    }
    Ok(())
}
