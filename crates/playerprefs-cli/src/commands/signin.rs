use anyhow::Result;
use serde_json::json;

use playerprefs_models::{Avatar, User};
use playerprefs_storage::{ProfileStore, RedbPrefs};

use crate::cli::SigninArgs;
use crate::output::{OutputFormat, print_json};

pub fn run(
    profile: &ProfileStore<RedbPrefs>,
    args: SigninArgs,
    format: OutputFormat,
) -> Result<()> {
    let phone = match args.phone {
        Some(phone) => phone,
        None => prompt_line("Phone number: ")?,
    };
    let phone = phone.trim().to_string();
    if phone.is_empty() {
        anyhow::bail!("Phone number cannot be empty.");
    }

    let pass = match args.pass {
        Some(pass) => pass,
        None => rpassword::prompt_password("Password: ")?,
    };
    if pass.is_empty() {
        anyhow::bail!("Password cannot be empty.");
    }

    let avatar: Avatar = match args.avatar {
        Some(name) => name.parse()?,
        None => {
            let names: Vec<&str> = Avatar::ALL.iter().map(|a| a.name()).collect();
            eprintln!("Avatars: {}", names.join(", "));
            prompt_line("Avatar: ")?.parse()?
        }
    };

    let user = User::new(phone.as_str(), pass, avatar);
    profile.save(&user);

    if format.is_json() {
        return print_json(&json!({
            "signed_in": profile.is_signed_in(),
            "phone": user.phone,
            "avatar": user.avatar,
        }));
    }

    println!("Signed in as {phone} ({}).", avatar.name());
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String> {
    eprint!("{prompt}");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
