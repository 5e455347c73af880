use std::path::PathBuf;

use clap::Parser;

use crate::{
    error::{MazeError, Result},
    generators::Generator,
    maze::Coord,
    outputs::Output,
};

/// Generate a rectangular maze, solve it and print it.
#[derive(Debug, Clone, Parser)]
#[command(name = "maze-cli", version, about)]
pub struct Config {
    /// Width of the maze in cells
    #[arg(short = 'W', long, default_value_t = 10)]
    pub width: u16,

    /// Height of the maze in cells
    #[arg(short = 'H', long, default_value_t = 10)]
    pub height: u16,

    /// Seed for the random number generator; omit for a random maze
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Name of the generation algorithm (see --list)
    #[arg(short, long, default_value = "recursive-backtracker")]
    pub generator: String,

    /// Name of the output adapter (see --list)
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Start cell as `x,y` (default: top-left corner)
    #[arg(long, value_parser = parse_coord)]
    pub from: Option<Coord>,

    /// End cell as `x,y` (default: bottom-right corner)
    #[arg(long, value_parser = parse_coord)]
    pub to: Option<Coord>,

    /// Solve the longest path in the maze instead of corner to corner
    #[arg(long, conflicts_with_all = ["from", "to", "no_solve"])]
    pub longest: bool,

    /// Print up to this many equally short paths between the endpoints
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub paths: u16,

    /// Only generate, do not solve
    #[arg(long)]
    pub no_solve: bool,

    /// List the registered generators and outputs, then exit
    #[arg(long)]
    pub list: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn generator(&self) -> Result<Generator> {
        self.generator.parse()
    }

    pub fn output(&self) -> Result<Output> {
        self.output.parse()
    }

    /// Start and end of the requested path; corners fill in whatever was not given.
    pub fn endpoints(&self) -> (Coord, Coord) {
        let start = self.from.unwrap_or((0, 0));
        let end = self.to.unwrap_or((
            self.width.saturating_sub(1),
            self.height.saturating_sub(1),
        ));
        (start, end)
    }

    /// Checks everything that can be checked before a maze is built.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.generator()?;
        self.output()?;
        Ok(())
    }
}

fn parse_coord(s: &str) -> std::result::Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u16>()
            .map_err(|e| format!("invalid coordinate `{}`: {}", v, e))
    };
    Ok((parse(x)?, parse(y)?))
}
