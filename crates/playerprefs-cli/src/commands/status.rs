use anyhow::Result;
use serde_json::json;

use playerprefs_storage::{ProfileStore, RedbPrefs};

use crate::output::{OutputFormat, print_json};

pub fn run(profile: &ProfileStore<RedbPrefs>, format: OutputFormat) -> Result<()> {
    let user = profile.load()?;
    let signed_in = profile.is_signed_in();

    if format.is_json() {
        return print_json(&json!({
            "signed_in": signed_in,
            "profile": user.as_ref().map(|u| {
                json!({
                    "phone": u.phone,
                    "pass": u.pass.as_deref().map(mask),
                    "avatar": u.avatar,
                })
            }),
        }));
    }

    let Some(user) = user else {
        println!("No profile saved.");
        return Ok(());
    };

    if signed_in {
        println!("Signed in: yes");
    } else {
        println!("Signed in: no (partial profile)");
    }
    if let Some(phone) = &user.phone {
        println!("Phone:  {phone}");
    }
    if let Some(pass) = &user.pass {
        println!("Pass:   {}", mask(pass));
    }
    if let Some(avatar) = user.avatar {
        println!("Avatar: {}", avatar.name());
    }
    Ok(())
}

/// Passwords never reach the terminal in the clear.
fn mask(pass: &str) -> String {
    "*".repeat(pass.chars().count())
}
