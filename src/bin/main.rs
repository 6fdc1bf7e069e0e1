use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use atsp2tsp::{convert_file, initialize_tracing, ConvertError};

const DEFAULT_INPUT: &str = "instances/kro124p.atsp";
const DEFAULT_OUTPUT: &str = "instances/kro124p.tsp";

/// Converts an asymmetric TSP instance into an equivalent symmetric one
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = None,
    after_help = "INPUT and OUTPUT must be given together; with neither, instances/kro124p.atsp is converted to instances/kro124p.tsp"
)]
struct Args {
    /// Input .atsp file
    #[arg(requires = "output")]
    input: Option<PathBuf>,

    /// Output .tsp file, overwritten if it exists
    #[arg(requires = "input")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_tracing();

    let input = args.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = args.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    match convert_file(&input, &output) {
        Ok(_) => {
            println!("Conversion complete");
            ExitCode::SUCCESS
        }
        Err(e @ ConvertError::FileAccess { .. }) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("Error in conversion: {e}");
            ExitCode::FAILURE
        }
    }
}
