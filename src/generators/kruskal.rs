use crate::{
    error::Result,
    maze::{Coord, Maze},
    random::RandomSource,
};

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        // Iterative path halving, so large mazes cannot overflow the stack
        let mut x = x;
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall edge between two adjacent cells
#[derive(Clone, Copy)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

/// Randomized Kruskal: carves shuffled walls whenever they join two separate regions.
pub fn randomized_kruskal(maze: &mut Maze, random: &RandomSource) -> Result<()> {
    let width = maze.width();
    let height = maze.height();

    // Union-Find index of a cell
    let index = |(x, y): Coord| y as usize * width as usize + x as usize;
    let mut uf = UnionFind::new(maze.len());

    // Collect all possible edges (walls between adjacent cells)
    let mut edges: Vec<Edge> = maze
        .coords()
        .flat_map(|(x, y)| {
            [
                (x + 1 < width).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x + 1, y),
                }),
                (y + 1 < height).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x, y + 1),
                }),
            ]
        })
        .flatten()
        .collect();

    random.shuffle(&mut edges);

    for edge in edges {
        // If cells are not yet connected, remove the wall between them
        if uf.unite(index(edge.cell1), index(edge.cell2)) {
            maze.remove_wall_between(edge.cell1, edge.cell2)?;
            maze.set_visited(edge.cell1);
            maze.set_visited(edge.cell2);
            tracing::trace!("[kruskal] carved {:?} -> {:?}", edge.cell1, edge.cell2);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(4);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(2, 3));
        assert!(!uf.unite(1, 0));
        assert_ne!(uf.find(0), uf.find(3));
        assert!(uf.unite(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
    }

    #[test]
    fn test_randomized_kruskal() {
        let mut maze = Maze::new(10, 6).unwrap();
        randomized_kruskal(&mut maze, &RandomSource::seeded(17)).unwrap();
        test_support::assert_perfect(&maze);
    }
}
