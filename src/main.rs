use std::process::ExitCode;

use clap::Parser;
use msgcat::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    msgcat::logger::init_logger(args.verbose());

    match msgcat::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
