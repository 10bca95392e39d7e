mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Simplify document-layout annotation records and rebuild reading order"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simplify a page record: merge word children into text, re-sort the rest
    Simplify {
        /// Path to a page record JSON file
        input_file: PathBuf,

        /// Output format: json (default) or summary
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Write the simplified record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Custom layout params JSON file
        #[arg(long = "params", value_name = "FILE")]
        params: Option<PathBuf>,
    },
    /// Simplify every page record JSON file in a directory
    Batch {
        /// Directory containing page record JSON files
        input_dir: PathBuf,

        /// Suffix appended to output file stems
        #[arg(long, default_value = "_processed")]
        suffix: String,

        /// Custom layout params JSON file
        #[arg(long = "params", value_name = "FILE")]
        params: Option<PathBuf>,
    },
    /// Inspect and validate layout params
    Params {
        #[command(subcommand)]
        action: ParamsAction,
    },
}

#[derive(Subcommand)]
enum ParamsAction {
    /// Print the default params with field descriptions
    Show,
    /// Validate a custom params file
    Validate {
        /// Path to JSON params file
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simplify {
            input_file,
            output,
            out,
            params,
        } => commands::simplify::run(input_file, &output, out, params),
        Commands::Batch {
            input_dir,
            suffix,
            params,
        } => commands::batch::run(input_dir, &suffix, params),
        Commands::Params { action } => match action {
            ParamsAction::Show => commands::params::show(),
            ParamsAction::Validate { file } => commands::params::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
