//! CLI entry point for sift.

mod cli;

use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr so stdout carries only extracted lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
