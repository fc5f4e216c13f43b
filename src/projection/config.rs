//! Projection inputs and config file loading

use super::error::ValidationError;
use super::frequency::{CompoundingFrequency, DepositFrequency};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Inputs for a single projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Starting balance, counted as invested capital
    pub initial_investment: f64,

    /// Amount added at every deposit period
    pub deposit_amount: f64,

    pub deposit_frequency: DepositFrequency,

    /// Nominal annual rate in percent (7.0 = 7%)
    pub annual_rate_percent: f64,

    pub compounding_frequency: CompoundingFrequency,

    /// Number of years to project (at least 1)
    pub number_of_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            initial_investment: 1000.0,
            deposit_amount: 100.0,
            deposit_frequency: DepositFrequency::Monthly,
            annual_rate_percent: 7.0,
            compounding_frequency: CompoundingFrequency::Annually,
            number_of_years: 40,
        }
    }
}

impl ProjectionConfig {
    /// Check every input before any computation happens
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_non_negative(self.initial_investment) {
            return Err(ValidationError::InitialInvestment);
        }
        if !is_non_negative(self.deposit_amount) {
            return Err(ValidationError::DepositAmount);
        }
        if !is_non_negative(self.annual_rate_percent) {
            return Err(ValidationError::AnnualRate);
        }
        if self.number_of_years == 0 {
            return Err(ValidationError::NumberOfYears);
        }
        Ok(())
    }

    /// Interest rate applied at each compounding step
    pub fn rate_per_compounding_period(&self) -> f64 {
        (self.annual_rate_percent / 100.0) / self.compounding_frequency.periods_per_year() as f64
    }

    /// Total deposited over one year
    pub fn yearly_deposits(&self) -> f64 {
        self.deposit_frequency.periods_per_year() as f64 * self.deposit_amount
    }

    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Load a config from any reader (e.g., string buffer, request body)
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Failure reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
