//! Settings panel for the autoname editor plugin.
//!
//! The plugin proper is a library a host editor wires into its document
//! lifecycle; this binary is its configuration surface. It opens a terminal
//! folder chooser bound to the one persisted setting: the directory newly
//! created documents are written to.

use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;

use autoname::core::app;
use autoname::core::settings::Settings;
use autoname::tui;

/// Command-line arguments for the settings panel.
#[derive(Parser)]
#[command(
    version,
    about = "Configure where auto-named documents are written"
)]
struct Args {
    /// Start browsing from this directory instead of the configured one
    #[arg(short, long)]
    directory: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Debug-logging toggle, checked once at load; RUST_LOG still overrides.
    let default_filter = if std::env::var_os(app::DEV_MODE_ENV).is_some() {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()
        .ok();

    let args = Args::parse();

    let settings = Settings::open().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    tui::run(settings, args.directory)
}
