//! bibcheck CLI entry point

use bibcheck::cli::common::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use bibcheck::cli::{Command, args::Cli};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for reports
    let filter = if cli.verbose {
        EnvFilter::new("bibcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "bibcheck=warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match cli.command {
        Command::Check(args) => bibcheck::cli::check::run_check(&args, cli.color),
        Command::List { format, config } => {
            bibcheck::cli::list::run_list(format, config.as_deref())
        }
        Command::Init { force } => match bibcheck::cli::init::run_init(force) {
            Ok(result) => {
                for path in &result.created {
                    println!("Created {}", path);
                }
                for path in &result.overwritten {
                    println!("Overwrote {}", path);
                }
                for path in &result.skipped {
                    println!("Skipped {} (already exists, use --force to overwrite)", path);
                }
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_CONFIG_ERROR
            }
        },
    };

    process::exit(exit_code);
}
