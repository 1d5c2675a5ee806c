// Configuration for the abacus engine and terminal front-end
// Defaults reproduce the behavior of the legacy web calculator

use std::path::PathBuf;

use crate::engine::token::Operator;

/// Pass order used by the legacy calculator: multiply, add, subtract, add.
pub const LEGACY_PASS_ORDER: [Operator; 4] = [
    Operator::Multiply,
    Operator::Add,
    Operator::Subtract,
    Operator::Add,
];

/// Result display formatting (en-US `toLocaleString` by default)
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Inserted between every three integer digits (default ',')
    pub grouping_separator: char,

    /// Separates integer and fraction digits (default '.')
    pub decimal_separator: char,

    /// Fraction digits kept after rounding (default 3)
    pub max_fraction_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            max_fraction_digits: 3,
        }
    }
}

/// Reduction settings
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorConfig {
    /// Operators resolved one full pass at a time, in this order.
    /// `/` is absent from the legacy order and stays unresolved.
    pub pass_order: Vec<Operator>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            pass_order: LEGACY_PASS_ORDER.to_vec(),
        }
    }
}

/// File logging; the terminal owns stdout so logs never go there
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub file_name: String,

    /// `EnvFilter` directive used when `RUST_LOG` is unset (default "info")
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: std::env::temp_dir(),
            file_name: "abacus.log".to_string(),
            filter: "info".to_string(),
        }
    }
}

/// Master configuration combining all abacus settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub display: DisplayConfig,
    pub evaluator: EvaluatorConfig,
    pub log: LogConfig,
}
