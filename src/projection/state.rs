//! Running balance carried from one projected year to the next

use super::config::ProjectionConfig;

/// Unrounded accumulators for a projection in progress
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Last completed year (0 before the first year runs)
    pub year: u32,

    /// Balance including all interest credited so far
    pub current_balance: f64,

    /// Cumulative principal contributed, including the initial investment
    pub total_invested: f64,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn from_config(config: &ProjectionConfig) -> Self {
        Self {
            year: 0,
            current_balance: config.initial_investment,
            total_invested: config.initial_investment,
        }
    }

    /// Move to the next year
    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    /// Land every deposit for the year on the balance, returning the year's total
    pub fn apply_deposits(&mut self, deposit_amount: f64, periods: u32) -> f64 {
        let mut yearly_deposits = 0.0;
        for _ in 0..periods {
            self.current_balance += deposit_amount;
            yearly_deposits += deposit_amount;
        }
        self.total_invested += yearly_deposits;
        yearly_deposits
    }

    /// Compound the whole post-deposit balance `periods` times at `rate` per step
    pub fn compound(&mut self, rate: f64, periods: u32) {
        let mut balance = self.current_balance;
        for _ in 0..periods {
            balance += balance * rate;
        }
        self.current_balance = balance;
    }

    /// Balance in excess of contributed principal
    pub fn cumulative_interest(&self) -> f64 {
        self.current_balance - self.total_invested
    }
}
