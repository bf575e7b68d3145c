use colored::Colorize;

pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let msg = err.to_string().to_lowercase();

    if msg.contains("unknown avatar") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  List the selectable avatars with:");
        eprintln!("  {} playerprefs avatars", "$".dimmed());
    }

    if msg.contains("home directory") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Point playerprefs at a writable data directory:");
        eprintln!(
            "  {} PLAYERPREFS_DIR=/path/to/dir playerprefs status",
            "$".dimmed()
        );
    }

    std::process::exit(1);
}
