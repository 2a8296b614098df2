//! Demo run and output formatting

use serde::Serialize;
use xoshiro_core::Xoshiro256StarStar;

use crate::args::{CliError, DemoConfig};

/// One ranged-int / double pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawPair {
    pub int: i32,
    pub double: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub config: DemoConfig,
    /// Raw value drawn (and discarded by the text output) before the pairs
    pub raw: u64,
    pub draws: Vec<DrawPair>,
}

/// Seed, optionally jump, draw one raw value, then the requested pairs
pub fn run_demo(config: &DemoConfig) -> DemoReport {
    let mut rng = Xoshiro256StarStar::new(config.seed);
    if config.long_jump {
        rng.long_jump();
    }
    if config.jump {
        rng.jump();
    }

    let raw = rng.next_u64();
    let draws = (0..config.draws)
        .map(|_| {
            let int = rng.next_int(config.from, config.to);
            let double = rng.next_f64();
            DrawPair { int, double }
        })
        .collect();

    DemoReport {
        config: config.clone(),
        raw,
        draws,
    }
}

/// `"{int} {double:.5}"` per line
pub fn render_text(report: &DemoReport) -> String {
    report
        .draws
        .iter()
        .map(|pair| format!("{} {:.5}\n", pair.int, pair.double))
        .collect()
}

pub fn render_json(report: &DemoReport) -> Result<String, CliError> {
    serde_json::to_string_pretty(report).map_err(|e| CliError::Serialization(e.to_string()))
}
