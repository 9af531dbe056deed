use std::error::Error;
use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over `default_level`.
/// Stdout is left to the report.
pub fn init_tracing(default_level: &str) {
    if let Err(err) = try_install(default_level) {
        eprintln!("Warning: failed to initialise logging: {err}");
    }
}

fn try_install(default_level: &str) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
}
