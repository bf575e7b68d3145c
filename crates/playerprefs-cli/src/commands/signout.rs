use anyhow::Result;
use serde_json::json;

use playerprefs_storage::{ProfileStore, RedbPrefs};

use crate::output::{OutputFormat, print_json};

pub fn run(profile: &ProfileStore<RedbPrefs>, format: OutputFormat) -> Result<()> {
    // An unreadable profile (e.g. an avatar from another build) still
    // counts as one to remove.
    let had_profile = match profile.load() {
        Ok(user) => user.is_some(),
        Err(_) => true,
    };

    profile.clear();

    if format.is_json() {
        return print_json(&json!({
            "signed_out": true,
            "had_profile": had_profile,
        }));
    }

    if had_profile {
        println!("Signed out.");
    } else {
        println!("No profile saved; nothing to do.");
    }
    Ok(())
}
