//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use viewtx::animation::{DEFAULT_DURATION_MS, DEFAULT_EASING};

/// viewtx: generate view transition stylesheets
#[derive(Parser, Debug)]
#[command(name = "viewtx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (log errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate CSS for one transition
    Generate(GenerateArgs),

    /// Generate one stylesheet from a YAML or JSON transition manifest
    Bundle(BundleArgs),

    /// List the available animations
    List,
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Transition group name (the element's view-transition-name)
    #[arg(short, long)]
    pub name: String,

    /// Animation, e.g. fadeIn, slideUp, flipX
    #[arg(short, long)]
    pub animation: String,

    /// Duration in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_MS)]
    pub duration: u32,

    /// CSS timing function, inserted verbatim
    #[arg(short, long, default_value = DEFAULT_EASING)]
    pub easing: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `bundle`
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Manifest file (.yaml, .yml or .json)
    pub manifest: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
