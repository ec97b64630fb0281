//! viewtx CLI library
//!
//! Command-line front end that writes view transition stylesheets for
//! pipelines that ship static CSS instead of injecting it at runtime.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;

pub use commands::{BundleArgs, Cli, ColorArg, Commands, GenerateArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
