use clap::Parser;
use listening_analytics::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Run the pipeline; it either completes fully or aborts on the first
    // unrecoverable error
    match commands::run(args) {
        Ok(_stats) => {
            // Success - the KPI report has already been printed
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
