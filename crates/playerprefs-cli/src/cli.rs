use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "playerprefs")]
#[command(version, about = "Player profile store on local preferences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to ~/.playerprefs)
    #[arg(long, global = true, env = "PLAYERPREFS_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save a profile and sign in
    Signin(SigninArgs),

    /// Remove the saved profile
    Signout,

    /// Show the saved profile
    Status,

    /// List the selectable avatars
    Avatars,
}

#[derive(Args)]
pub struct SigninArgs {
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Password (prompted when omitted)
    #[arg(long)]
    pub pass: Option<String>,

    /// Avatar name, e.g. FOX
    #[arg(long)]
    pub avatar: Option<String>,
}
