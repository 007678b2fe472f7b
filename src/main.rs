use clap::Parser;
use dino_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::setup_logging(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }

    match commands::run(&args) {
        Ok(outcome) if outcome.is_success() => process::exit(0),
        // The failure report has already been written to stderr
        Ok(_) => process::exit(1),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
