//! Basketball win-probability estimation from box-score statistics.
//!
//! Fits a ridge regression to per-game box scores and ranks teams by the
//! linear score applied to their phase-average statistics.

pub mod data;
pub mod features;
pub mod model;
pub mod predict;
pub mod report;
pub mod training;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide errors
#[derive(Debug, Error)]
pub enum HoopsError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HoopsError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub columns: ColumnConfig,
    pub model: ModelConfig,
    pub report: ReportConfig,
}

/// Column names of the input stats table.
///
/// The scraper that produces the table has changed its header over time
/// (`P2`/`P3`/`FT` vs `2P%`/`3P%`/`FT%`), so nothing here is hard-coded
/// in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Ordered feature columns; this order is the contract between
    /// training and scoring.
    pub features: Vec<String>,
    /// Target column (1 = win, 0 = loss)
    pub target: String,
    /// Team name column
    pub team: String,
    /// Category/phase tag column
    pub category: String,
    /// Category value marking a team's phase-average row
    pub average_tag: String,
    /// Field delimiter of the input table
    pub delimiter: char,
}

impl ColumnConfig {
    /// Delimiter as the single byte the CSV reader wants
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Ridge regularization strength
    pub alpha: f64,
    /// Fraction of rows held out for evaluation
    pub test_fraction: f64,
    /// Seed for the train/test partition
    pub seed: u64,
    /// Standardize feature columns before fitting
    pub normalize: bool,
    /// Clamp scores into [0.001, 1.0]
    pub clamp_scores: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for metrics and scores
    pub decimals: usize,
    /// Append the stat abbreviation legend
    pub legend: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: ColumnConfig {
                features: ["P2", "P3", "FT", "AS", "RE", "TO", "ST"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                target: "RES".to_string(),
                team: "TEAM".to_string(),
                category: "CAT".to_string(),
                average_tag: "AVE".to_string(),
                delimiter: ',',
            },
            model: ModelConfig {
                alpha: 1.0,
                test_fraction: 0.20,
                seed: 1,
                normalize: false,
                clamp_scores: true,
            },
            report: ReportConfig {
                decimals: 3,
                legend: true,
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HoopsError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| HoopsError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| HoopsError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
