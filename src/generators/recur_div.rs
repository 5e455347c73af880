use crate::{error::Result, maze::Maze, random::RandomSource};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Rectangular region of cells still to be divided.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

/// Recursive division: starting from an open maze, splits each chamber with a
/// wall line that has a single hole, until chambers are one cell thin.
///
/// Expects the maze to have no inner walls. Chambers are kept on an explicit
/// stack rather than the call stack.
pub fn recursive_division(maze: &mut Maze, random: &RandomSource) -> Result<()> {
    let mut chambers = vec![Chamber {
        x: 0,
        y: 0,
        width: maze.width(),
        height: maze.height(),
    }];

    while let Some(Chamber {
        x,
        y,
        width,
        height,
    }) = chambers.pop()
    {
        if width < 2 || height < 2 {
            continue;
        }

        let orientation = match width.cmp(&height) {
            std::cmp::Ordering::Less => Orientation::Horizontal,
            std::cmp::Ordering::Greater => Orientation::Vertical,
            std::cmp::Ordering::Equal => {
                if random.coin_flip() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        match orientation {
            Orientation::Horizontal => {
                // Randomly choose the row the wall goes below
                let diff = random.next_in_range(0, height as usize - 1) as u16;
                let y_wall = y + diff;
                // Randomly choose a position for the hole in the wall
                let x_hole = x + random.next_in_range(0, width as usize) as u16;

                for cx in x..x + width {
                    maze.add_wall_between((cx, y_wall), (cx, y_wall + 1))?;
                }
                maze.remove_wall_between((x_hole, y_wall), (x_hole, y_wall + 1))?;
                tracing::trace!(
                    "[recursive-division] wall below row {} with hole at {}",
                    y_wall,
                    x_hole
                );

                let upper_height = diff + 1;
                // Pushed in reverse so the upper chamber is divided first
                chambers.push(Chamber {
                    x,
                    y: y_wall + 1,
                    width,
                    height: height - upper_height,
                });
                chambers.push(Chamber {
                    x,
                    y,
                    width,
                    height: upper_height,
                });
            }
            Orientation::Vertical => {
                // Randomly choose the column the wall goes right of
                let diff = random.next_in_range(0, width as usize - 1) as u16;
                let x_wall = x + diff;
                // Randomly choose a position for the hole in the wall
                let y_hole = y + random.next_in_range(0, height as usize) as u16;

                for cy in y..y + height {
                    maze.add_wall_between((x_wall, cy), (x_wall + 1, cy))?;
                }
                maze.remove_wall_between((x_wall, y_hole), (x_wall + 1, y_hole))?;
                tracing::trace!(
                    "[recursive-division] wall right of column {} with hole at {}",
                    x_wall,
                    y_hole
                );

                let left_width = diff + 1;
                chambers.push(Chamber {
                    x: x_wall + 1,
                    y,
                    width: width - left_width,
                    height,
                });
                chambers.push(Chamber {
                    x,
                    y,
                    width: left_width,
                    height,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_support;

    fn generate(width: u16, height: u16, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        maze.clear_walls();
        recursive_division(&mut maze, &RandomSource::seeded(seed)).unwrap();
        maze
    }

    #[test]
    fn test_recursive_division_is_perfect() {
        for seed in 0..5 {
            test_support::assert_perfect(&generate(8, 5, seed));
        }
    }

    #[test]
    fn test_thin_mazes_stay_open() {
        let maze = generate(6, 1, 0);
        assert_eq!(maze.carved_count(), 5);
    }
}
