//! Gfx Demo - graphics shape registry demonstration.
//!
//! Library half of the `gfx-demo` binary:
//! - [`demo`] runs the registry lifecycle and prints the report
//! - [`options`] parses command-line options
//! - [`output`] routes report and diagnostic lines
//! - [`init_tracing`] installs the log subscriber

pub mod demo;
pub mod options;
pub mod output;

pub use demo::{print_statistics, report_containment, run_demo, DemoError, DemoSummary};
pub use options::{DemoOptions, OptionsError, USAGE};
pub use output::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=gfx_registry=debug`. Logs go to stderr so they never
/// mix with the report.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
