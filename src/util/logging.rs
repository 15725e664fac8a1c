use anyhow::Result;
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Where log records go.
pub enum LogSink {
    /// One-shot modes: plain stderr.
    Stderr,
    /// TUI mode: the terminal is ours, so append to a file instead.
    File(PathBuf),
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("resmon").join("resmon.log"))
}

/// Initialise `env_logger`. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str, sink: LogSink) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(parse_level(default_level));
    builder.parse_default_env();

    if let LogSink::File(path) = sink {
        let file = open_log_file(&path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init()?;
    Ok(())
}

/// Open `path` for appending, creating its directory first.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Warn)
}
