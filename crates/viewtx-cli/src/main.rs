//! viewtx: view transition stylesheet generator
//!
//! ## Usage
//!
//! ```bash
//! viewtx generate -n card -a fadeIn            # CSS for one transition
//! viewtx generate -n nav -a slideLeft -d 200 -e ease-out -o nav.css
//! viewtx bundle transitions.yaml -o transitions.css
//! viewtx list                                  # available animations
//! ```

use clap::Parser;
use std::process::ExitCode;
use viewtx_cli::{handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity)?;

    match cli.command {
        Commands::Generate(args) => handlers::run_generate(&args),
        Commands::Bundle(args) => handlers::run_bundle(&args),
        Commands::List => handlers::run_list(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
}
