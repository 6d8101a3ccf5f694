//! Command-line options for `gfx-demo`.

use gfx_registry::RegistryConfig;
use thiserror::Error;

/// Usage text printed for `--help` and after option errors.
pub const USAGE: &str = "\
Usage: gfx-demo [options]

Options:
  --capacity=<n>   Registry capacity, shared by both shape kinds (default: 1000)
  -h, --help       Print this help

Set RUST_LOG (e.g. RUST_LOG=gfx_registry=debug) to trace registry operations.";

/// Parsed demo options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoOptions {
    pub registry: RegistryConfig,
    pub help: bool,
}

/// Rejected command-line input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid capacity '{0}': expected a positive integer")]
    InvalidCapacity(String),
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

impl DemoOptions {
    /// Parse options from arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, OptionsError> {
        let mut options = DemoOptions::default();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--capacity=") {
                options.registry = parse_capacity(value)?;
            } else if arg == "--help" || arg == "-h" {
                options.help = true;
            } else {
                return Err(OptionsError::UnknownArgument(arg.clone()));
            }
        }

        Ok(options)
    }
}

fn parse_capacity(value: &str) -> Result<RegistryConfig, OptionsError> {
    value
        .parse::<usize>()
        .ok()
        .and_then(RegistryConfig::with_capacity)
        .ok_or_else(|| OptionsError::InvalidCapacity(value.to_string()))
}

#[cfg(test)]
mod tests;
