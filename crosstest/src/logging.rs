//! Console tracing for crosstest runs.
//!
//! Every line the tool prints while working goes through `tracing`; only the
//! final statistics block is written with `println!`. The subscriber is built
//! once from [`LogOptions`] and never reconfigured during a run.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging switches taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Emit `debug` events (`--debug`).
    pub verbose: bool,
    /// Allow ANSI colours (cleared by `--nocolors`).
    pub color: bool,
}

impl LogOptions {
    /// Default filter directive when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Colours are used only when requested and stdout is a terminal.
    pub fn use_ansi(&self, is_terminal: bool) -> bool {
        self.color && is_terminal
    }
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` if set; otherwise uses [`LogOptions::default_directive`].
/// Output: stdout, compact format, no timestamps.
///
/// # Example
/// ```bash
/// RUST_LOG=crosstest=debug crosstest --who petrov .
/// ```
pub fn init(options: LogOptions) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_directive()));
    let ansi = options.use_ansi(std::io::stdout().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(ansi)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
