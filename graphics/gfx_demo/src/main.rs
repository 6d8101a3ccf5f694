//! Graphics System Test
//!
//! Runs the shape registry demonstration and prints its report.

use std::process::ExitCode;

use gfx_demo::{init_tracing, run_demo, stdout_handler, DemoOptions, USAGE};
use gfx_registry::ShapeRegistry;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match DemoOptions::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let out = stdout_handler();
    let mut registry = ShapeRegistry::new(options.registry);
    match run_demo(&mut registry, &out) {
        Ok(summary) => {
            tracing::debug!(statistics = %summary.statistics, "demo complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "demo aborted");
            ExitCode::FAILURE
        }
    }
}
