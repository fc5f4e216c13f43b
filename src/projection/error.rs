//! Errors raised before a projection runs

use thiserror::Error;

/// Message shown to the user for any rejected input
pub const VALIDATION_MESSAGE: &str =
    "Please enter valid positive numbers for amounts, rate, and years.";

/// Input rejected by validation. Every variant renders the same user-facing
/// message; the variant records which field tripped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter valid positive numbers for amounts, rate, and years.")]
    InitialInvestment,
    #[error("Please enter valid positive numbers for amounts, rate, and years.")]
    DepositAmount,
    #[error("Please enter valid positive numbers for amounts, rate, and years.")]
    AnnualRate,
    #[error("Please enter valid positive numbers for amounts, rate, and years.")]
    NumberOfYears,
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InitialInvestment => "initial_investment",
            ValidationError::DepositAmount => "deposit_amount",
            ValidationError::AnnualRate => "annual_rate_percent",
            ValidationError::NumberOfYears => "number_of_years",
        }
    }
}
