//! rSerialStats main entrypoint.

use rserialstats::run;
use rserialstats::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // diagnostics go to stderr; RUST_LOG=rserialstats=debug shows engine traces
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
