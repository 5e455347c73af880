use crate::{
    error::Result,
    generators::random_cell,
    maze::{Coord, Grid, Maze},
    random::RandomSource,
};

/// Wilson's algorithm: loop-erased random walks from unvisited cells until
/// they hit the maze. Samples uniformly among all spanning trees.
pub fn wilson(maze: &mut Maze, random: &RandomSource) -> Result<()> {
    let first = random_cell(maze, random);
    maze.set_visited(first);
    let mut remaining = maze.len() - 1;

    // Candidate walk starts; entries that have since joined the maze are dropped lazily
    let mut pool = maze.coords().filter(|&c| c != first).collect::<Vec<_>>();
    // Last step taken out of each cell during the current walk. Overwriting an
    // entry when the walk revisits a cell is what erases the loop.
    let mut exits: Grid<Option<Coord>> = Grid::new(maze.width(), maze.height(), None);

    while remaining > 0 {
        let idx = random.next_in_range(0, pool.len());
        let start = pool[idx];
        if maze.is_visited(start) {
            pool.swap_remove(idx);
            continue;
        }

        let mut current = start;
        while !maze.is_visited(current) {
            let neighbors = maze.neighbors_of(current).map(|(_, c)| c).collect::<Vec<_>>();
            let Some(&next) = random.choose(&neighbors) else {
                break;
            };
            exits[current] = Some(next);
            current = next;
        }

        // Retrace the loop-erased walk, carving it into the maze
        let mut current = start;
        while !maze.is_visited(current) {
            let Some(next) = exits[current] else {
                break;
            };
            maze.remove_wall_between(current, next)?;
            maze.set_visited(current);
            remaining -= 1;
            current = next;
        }
        tracing::trace!(
            "[wilson] walk from {:?} joined the maze, {} left",
            start,
            remaining
        );
    }
    Ok(())
}
