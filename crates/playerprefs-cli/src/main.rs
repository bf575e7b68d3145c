mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(cli) {
        error::handle_error(err);
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    match cli.command {
        Commands::Signin(args) => {
            let profile = commands::shared::open_profile(cli.data_dir.as_deref())?;
            commands::signin::run(&profile, args, format)
        }
        Commands::Signout => {
            let profile = commands::shared::open_profile(cli.data_dir.as_deref())?;
            commands::signout::run(&profile, format)
        }
        Commands::Status => {
            let profile = commands::shared::open_profile(cli.data_dir.as_deref())?;
            commands::status::run(&profile, format)
        }
        Commands::Avatars => commands::avatars::run(format),
    }
}
