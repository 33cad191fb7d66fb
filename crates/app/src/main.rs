//! initrack - initiative tracker for tabletop sessions
//!
//! Tracks characters' hit points, armor class, and initiative order in a
//! local database. Each invocation loads the collection, applies one
//! command, and writes it back.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod state;
mod viewmodel;

#[derive(Debug, Parser)]
#[command(name = "initrack", version, about = "Track initiative and hit points at the table")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "INITRACK_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the character database
    #[arg(long, global = true, env = "INITRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: viewmodel::Command,
}

fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Starting initrack");

    let mut app_state = match state::AppState::new(cli.config, cli.data_dir) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match viewmodel::execute(cli.command, &mut app_state.store, &app_state.config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(data_dir = %app_state.data_dir().display(), "Command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
