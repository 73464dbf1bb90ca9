//! Path utilities for scroller directory resolution.

use std::path::PathBuf;

use anyhow::Result;

const SCROLLER_DIR_NAME: &str = "scroller";
const DB_FILE: &str = "scroller.db";

/// Environment variable to override the scroller data directory.
const SCROLLER_DIR_ENV: &str = "SCROLLER_DIR";

/// Resolve the scroller data directory.
/// Priority: SCROLLER_DIR env var > platform data dir (e.g. ~/.local/share/scroller).
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(SCROLLER_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join(SCROLLER_DIR_NAME))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))
}

/// Ensure the data directory exists and return its path.
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = resolve_data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default database path: `<data dir>/scroller.db`.
pub fn db_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(DB_FILE))
}
