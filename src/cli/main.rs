//! Command line entry point for the report exercises

mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "northwind-reports")]
#[command(version)]
#[command(about = "Run reporting exercises over the bundled Northwind dataset", long_about = None)]
struct Cli {
    /// TOML file overriding exercise parameters
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON or YAML dataset to use instead of the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available exercises
    List,
    /// Run one or more exercises by id (Q1 to Q10)
    Run {
        /// Exercise ids, e.g. Q1 q5 7
        #[arg(required = true, value_name = "ID")]
        exercises: Vec<String>,
    },
    /// Run every exercise in order
    All,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::List => commands::list::handle_list(),
        Commands::Run { exercises } => commands::run::handle_run(
            cli.config.as_deref(),
            cli.data.as_deref(),
            &exercises,
        ),
        Commands::All => commands::run::handle_all(cli.config.as_deref(), cli.data.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
