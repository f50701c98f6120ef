//! Tracing subscriber setup for the CLI.
//!
//! Diagnostics ride `tracing` and land on stderr, keeping stdout reserved
//! for the report output the probe exists to print. Quiet unless
//! `RUST_LOG` opts in to more.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. Calling it again is a no-op, which
/// matters when tests drive the library in-process.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
