// crates/facdb-cli/src/logging.rs

//! Diagnostic output for the CLI.
//!
//! Logs go to stderr so stdout stays clean for results (and for `--json`
//! piping). `RUST_LOG` wins over `--log-level` when both are set.

use tracing_subscriber::EnvFilter;

pub fn init_logging(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
