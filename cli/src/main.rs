//! Demo entry point for the xoshiro256** generator
//!
//! Seeds a generator, draws one raw value, then prints ranged-int / double
//! pairs. With no arguments it reproduces the reference demo output.

mod args;
mod report;

use std::env;
use std::process::ExitCode;

use args::{parse_args, CliError, USAGE};
use report::{render_json, render_text, run_demo};

fn run_with_args(args: &[String]) -> Result<String, CliError> {
    let config = parse_args(args)?;
    let report = run_demo(&config);

    if config.json {
        render_json(&report).map(|json| json + "\n")
    } else {
        Ok(render_text(&report))
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match run_with_args(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}
