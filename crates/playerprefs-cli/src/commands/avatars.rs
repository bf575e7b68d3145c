use anyhow::Result;

use playerprefs_models::Avatar;

use crate::output::{OutputFormat, print_json};

pub fn run(format: OutputFormat) -> Result<()> {
    if format.is_json() {
        return print_json(&Avatar::ALL);
    }

    for avatar in Avatar::ALL {
        println!("{}", avatar.name());
    }
    Ok(())
}
