use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::{Env, Target};

/// Route `log` records to a file; the terminal belongs to the TUI. `RUST_LOG`
/// wins over the configured level.
pub fn init(default_level: &str) -> Result<Option<PathBuf>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join("planner.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .wrap_err("logger already initialised")?;

    Ok(Some(path))
}

fn log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|d| d.join("planner-tui"))
}
