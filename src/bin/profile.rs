use std::time::{Duration, Instant};

use maze_cli::{Generator, MazeExecution, RandomSource, solvers};
use tracing_subscriber::EnvFilter;

/// Times every generator plus a corner-to-corner solve on the largest square maze.
/// Usage: `profile [iterations] [seed]`
fn main() -> anyhow::Result<()> {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(3);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
    let size = u8::MAX as u16;

    for generator in Generator::ALL {
        let mut total = Duration::ZERO;
        for i in 0..num_iters {
            let random = RandomSource::seeded(seed.wrapping_add(i as u64));
            let mut execution = MazeExecution::new(size, size, generator, random)?;
            let started = Instant::now();
            let maze = execution.call()?;
            let (start, end) = solvers::default_endpoints(maze);
            let path = solvers::solve(maze, start, end)?;
            total += started.elapsed();
            tracing::debug!(
                "[profile] {} run {} path length {}",
                generator.name(),
                i,
                path.len()
            );
        }
        tracing::info!(
            "[profile] {}: {} runs on {}x{}, {:?} per run",
            generator.name(),
            num_iters,
            size,
            size,
            total / num_iters.max(1) as u32
        );
    }
    Ok(())
}
