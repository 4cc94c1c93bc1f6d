use std::process::ExitCode;

use clap::Parser;
use crossing_cli::{run, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    if !args.quiet {
        crossing_console::init();
    }

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if args.quiet {
                eprintln!("error: {}", err);
            } else {
                tracing::error!(target: "crossing_cli", "{}", err);
            }
            ExitCode::FAILURE
        }
    }
}
