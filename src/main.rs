use clap::Parser;
use std::process;

use typedcsv::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Err(e) = commands::setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(error) = commands::run(&args) {
        commands::report_error(&error);
        process::exit(1);
    }
}
