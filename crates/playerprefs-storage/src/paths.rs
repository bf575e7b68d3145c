//! Path utilities for playerprefs directory resolution.

use anyhow::Result;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = ".playerprefs";
const PREFS_DB_FILE: &str = "prefs.redb";

/// Environment variable to override the playerprefs data directory.
const DATA_DIR_ENV: &str = "PLAYERPREFS_DIR";

/// Resolve the playerprefs data directory.
/// Priority: PLAYERPREFS_DIR env var > ~/.playerprefs/
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(DATA_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the playerprefs data directory exists and return its path.
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = resolve_data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the preference database path inside `data_dir`.
pub fn prefs_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFS_DB_FILE)
}
