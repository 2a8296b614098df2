//! Command-line parsing for the demo
//!
//! `xoshiro-demo [SEED] [--draws N] [--range FROM TO] [--jump] [--long-jump] [--json]`

use serde::Serialize;
use thiserror::Error;

pub const USAGE: &str =
    "usage: xoshiro-demo [SEED] [--draws N] [--range FROM TO] [--jump] [--long-jump] [--json]";

/// Seed used by the reference demo
pub const DEFAULT_SEED: u64 = 0xDEADBEEF;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("invalid seed '{0}' (expected decimal or 0x-prefixed hex)")]
    InvalidSeed(String),

    #[error("invalid {name} '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("report serialization failed: {0}")]
    Serialization(String),
}

/// Demo settings built from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoConfig {
    pub seed: u64,
    /// Number of (int, double) pairs to print
    pub draws: usize,
    pub from: i32,
    pub to: i32,
    pub jump: bool,
    pub long_jump: bool,
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            draws: 1,
            from: 0,
            to: 1000,
            jump: false,
            long_jump: false,
            json: false,
        }
    }
}

/// Parse arguments (excluding the program name)
pub fn parse_args(args: &[String]) -> Result<DemoConfig, CliError> {
    let mut config = DemoConfig::default();
    let mut seed_seen = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--draws" => {
                let value = iter.next().ok_or(CliError::MissingValue("--draws"))?;
                config.draws = parse_number(value, "draw count")?;
            }
            "--range" => {
                let from = iter.next().ok_or(CliError::MissingValue("--range"))?;
                let to = iter.next().ok_or(CliError::MissingValue("--range"))?;
                config.from = parse_number(from, "range start")?;
                config.to = parse_number(to, "range end")?;
            }
            "--jump" => config.jump = true,
            "--long-jump" => config.long_jump = true,
            "--json" => config.json = true,
            flag if flag.starts_with("--") => return Err(CliError::UnknownFlag(flag.to_string())),
            value if !seed_seen => {
                config.seed = parse_seed(value)?;
                seed_seen = true;
            }
            value => return Err(CliError::UnexpectedArgument(value.to_string())),
        }
    }

    Ok(config)
}

/// Parse a seed given as decimal or `0x`-prefixed hex
pub fn parse_seed(raw: &str) -> Result<u64, CliError> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse::<u64>(),
    };
    parsed.map_err(|_| CliError::InvalidSeed(raw.to_string()))
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &'static str) -> Result<T, CliError> {
    raw.parse::<T>().map_err(|_| CliError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_gives_reference_demo() {
        assert_eq!(parse_args(&[]).unwrap(), DemoConfig::default());
    }

    #[test]
    fn seed_accepts_hex_and_decimal() {
        assert_eq!(parse_seed("0xDEADBEEF").unwrap(), 0xDEADBEEF);
        assert_eq!(parse_seed("0Xff").unwrap(), 255);
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(
            parse_seed("0xZZ"),
            Err(CliError::InvalidSeed("0xZZ".to_string()))
        );
        assert!(parse_seed("-1").is_err());
    }

    #[test]
    fn flags_parse_in_any_order() {
        let config =
            parse_args(&args(&["--json", "--range", "-5", "5", "7", "--draws", "3", "--jump"]))
                .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.draws, 3);
        assert_eq!((config.from, config.to), (-5, 5));
        assert!(config.jump);
        assert!(!config.long_jump);
        assert!(config.json);
    }

    #[test]
    fn missing_and_bad_values_rejected() {
        assert_eq!(
            parse_args(&args(&["--draws"])),
            Err(CliError::MissingValue("--draws"))
        );
        assert_eq!(
            parse_args(&args(&["--range", "1"])),
            Err(CliError::MissingValue("--range"))
        );
        assert_eq!(
            parse_args(&args(&["--draws", "many"])),
            Err(CliError::InvalidNumber {
                name: "draw count",
                value: "many".to_string()
            })
        );
    }

    #[test]
    fn unknown_flag_and_extra_positional_rejected() {
        assert_eq!(
            parse_args(&args(&["--fast"])),
            Err(CliError::UnknownFlag("--fast".to_string()))
        );
        assert_eq!(
            parse_args(&args(&["1", "2"])),
            Err(CliError::UnexpectedArgument("2".to_string()))
        );
    }
}
