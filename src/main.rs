use std::{path::Path, process::ExitCode};

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use maze_cli::{
    Generator, MazeExecution, MazeSolutions, RandomSource, config::Config, outputs::Output, solvers,
};

/// Non-blocking writer onto `--log-file`, or stderr when no file was given.
/// A log file that cannot be created is reported as an error.
fn log_writer(config: &Config) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let Some(path) = &config.log_file else {
        return Ok(tracing_appender::non_blocking(std::io::stderr()));
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("log file path {} has no usable file name", path.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Installs the global subscriber. Logs go to `--log-file` when given, stderr
/// otherwise; the level comes from `RUST_LOG` and defaults to `warn`.
fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = log_writer(config)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.log_file.is_none())
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {}", e))?;
    Ok(guard)
}

fn print_registry() {
    println!("Generators:");
    for generator in Generator::ALL {
        println!("  {:<24}{}", generator.name(), generator);
    }
    println!("Outputs:");
    for output in Output::ALL {
        println!("  {:<24}{}", output.name(), output);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let _guard = init_logging(&config)?;

    if config.list {
        print_registry();
        return Ok(());
    }

    config.validate().context("invalid configuration")?;
    let generator = config.generator()?;
    let output = config.output()?;
    tracing::info!(
        "[main] {}x{} maze, generator {}, output {}, seed {:?}",
        config.width,
        config.height,
        generator.name(),
        output.name(),
        config.seed
    );

    // Generation runs on a worker thread, like any other execution would
    let execution = MazeExecution::new(
        config.width,
        config.height,
        generator,
        RandomSource::new(config.seed),
    )?;
    let maze = execution
        .spawn()
        .join()
        .map_err(|_| anyhow!("generator thread panicked"))?
        .context("maze generation failed")?;

    let solutions = if config.no_solve {
        MazeSolutions::unsolved(maze)
    } else if config.longest {
        let path = solvers::longest_path(&maze).context("unsolvable configuration")?;
        MazeSolutions::new(maze, vec![path])
    } else {
        let (start, end) = config.endpoints();
        let paths = solvers::solve_paths(&maze, start, end, config.paths as usize)
            .context("unsolvable configuration")?;
        MazeSolutions::new(maze, paths)
    };

    let mut stdout = std::io::stdout().lock();
    output
        .adapter()
        .write(&solutions, &mut stdout)
        .with_context(|| format!("failed to write {} output", output.name()))?;
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
