//! Projection output structures

use serde::{Deserialize, Serialize};

/// Round to two decimal places, as figures are shown to the user.
///
/// Rounds the exact binary value half away from zero, so 1.115 (stored as
/// 1.11499999...) gives 1.11 and 0.125 gives 0.13.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();

    // scaled + residual == magnitude * 100 exactly
    let scaled = magnitude * 100.0;
    let residual = magnitude.mul_add(100.0, -scaled);

    let whole = scaled.floor();
    let above_half = (scaled - whole) - 0.5;
    let cents = if above_half >= -residual { whole + 1.0 } else { whole };

    (cents / 100.0).copysign(value)
}

/// A single row of projection output for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearResult {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Cumulative principal contributed, rounded to cents
    pub total_invested: f64,

    /// Cumulative interest (balance less invested), rounded to cents
    pub interest_earned: f64,

    /// Year-end balance, rounded to cents
    pub total_balance: f64,
}

impl YearResult {
    /// Build an output row from unrounded running totals
    pub fn from_totals(year: u32, total_invested: f64, current_balance: f64) -> Self {
        Self {
            year,
            total_invested: round_to_cents(total_invested),
            interest_earned: round_to_cents(current_balance - total_invested),
            total_balance: round_to_cents(current_balance),
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Yearly rows, ordered by year
    pub years: Vec<YearResult>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { years: Vec::new() }
    }

    /// Add a yearly row
    pub fn add_row(&mut self, row: YearResult) {
        self.years.push(row);
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.years.last();

        ProjectionSummary {
            total_years: self.years.len() as u32,
            final_invested: last.map(|r| r.total_invested).unwrap_or(0.0),
            final_interest: last.map(|r| r.interest_earned).unwrap_or(0.0),
            final_balance: last.map(|r| r.total_balance).unwrap_or(0.0),
        }
    }

    pub fn into_rows(self) -> Vec<YearResult> {
        self.years
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub final_invested: f64,
    pub final_interest: f64,
    pub final_balance: f64,
}
