use std::path::Path;

use anyhow::Result;
use tracing::debug;

use playerprefs_storage::{ProfileStore, RedbPrefs, paths};

/// Open the profile store in `data_dir`, falling back to the resolved
/// default directory. Creates the directory if needed.
pub fn open_profile(data_dir: Option<&Path>) -> Result<ProfileStore<RedbPrefs>> {
    let data_dir = match data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.to_path_buf()
        }
        None => paths::ensure_data_dir()?,
    };

    let db_path = paths::prefs_db_path(&data_dir);
    debug!("opening preference store at {}", db_path.display());
    let prefs = RedbPrefs::open(db_path)?;
    Ok(ProfileStore::new(prefs))
}
