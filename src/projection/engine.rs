//! Core projection engine for yearly compound interest projections

use super::config::ProjectionConfig;
use super::error::ValidationError;
use super::results::{ProjectionResult, YearResult};
use super::state::ProjectionState;

/// Validate `config` and project it year by year
pub fn project(config: &ProjectionConfig) -> Result<Vec<YearResult>, ValidationError> {
    ProjectionEngine::new(config.clone())
        .run()
        .map(ProjectionResult::into_rows)
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection. Nothing is computed if validation fails.
    pub fn run(&self) -> Result<ProjectionResult, ValidationError> {
        if let Err(err) = self.config.validate() {
            log::debug!("Rejected projection input: {}", err.field());
            return Err(err);
        }

        let deposit_periods = self.config.deposit_frequency.periods_per_year();
        let compounding_periods = self.config.compounding_frequency.periods_per_year();
        let rate = self.config.rate_per_compounding_period();

        log::debug!(
            "Projecting {} years: {} deposits of {:.2}/yr, {} compounding steps at {:.6}",
            self.config.number_of_years,
            deposit_periods,
            self.config.deposit_amount,
            compounding_periods,
            rate,
        );

        let mut result = ProjectionResult::new();
        let mut state = ProjectionState::from_config(&self.config);

        for _year in 1..=self.config.number_of_years {
            state.advance_year();
            let row = self.project_year(&mut state, deposit_periods, compounding_periods, rate);
            result.add_row(row);
        }

        Ok(result)
    }

    /// Deposits land first, then the whole balance compounds.
    /// Rounding applies to the emitted row only; `state` stays unrounded.
    fn project_year(
        &self,
        state: &mut ProjectionState,
        deposit_periods: u32,
        compounding_periods: u32,
        rate: f64,
    ) -> YearResult {
        let deposited = state.apply_deposits(self.config.deposit_amount, deposit_periods);
        state.compound(rate, compounding_periods);

        log::trace!(
            "Year {}: deposited {:.2}, balance {:.2}, interest {:.2}",
            state.year,
            deposited,
            state.current_balance,
            state.cumulative_interest(),
        );

        YearResult::from_totals(state.year, state.total_invested, state.current_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{CompoundingFrequency, DepositFrequency};
    use approx::assert_relative_eq;

    fn calculator_config(years: u32) -> ProjectionConfig {
        ProjectionConfig {
            initial_investment: 1000.0,
            deposit_amount: 100.0,
            deposit_frequency: DepositFrequency::Monthly,
            annual_rate_percent: 7.0,
            compounding_frequency: CompoundingFrequency::Annually,
            number_of_years: years,
        }
    }

    #[test]
    fn test_first_year_scenario() {
        let rows = project(&calculator_config(1)).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, 1);
        assert_eq!(rows[0].total_invested, 2200.0);
        assert_eq!(rows[0].total_balance, 2354.0);
        assert_eq!(rows[0].interest_earned, 154.0);
    }

    #[test]
    fn test_second_year_carries_balance() {
        let rows = project(&calculator_config(2)).unwrap();

        // (2354 + 1200) * 1.07
        assert_eq!(rows[1].total_invested, 3400.0);
        assert_eq!(rows[1].total_balance, 3802.78);
        assert_eq!(rows[1].interest_earned, 402.78);
    }

    #[test]
    fn test_row_count_and_years() {
        let rows = project(&calculator_config(40)).unwrap();

        assert_eq!(rows.len(), 40);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.year, i as u32 + 1);
        }
    }

    #[test]
    fn test_monotonic_and_decomposes() {
        for deposit_frequency in [DepositFrequency::Monthly, DepositFrequency::Weekly] {
            for compounding_frequency in CompoundingFrequency::ALL {
                let config = ProjectionConfig {
                    deposit_frequency,
                    compounding_frequency,
                    number_of_years: 30,
                    ..calculator_config(30)
                };
                let rows = project(&config).unwrap();

                for row in &rows {
                    let diff = row.total_balance - (row.total_invested + row.interest_earned);
                    assert!(diff.abs() <= 0.01 + 1e-9, "year {} off by {}", row.year, diff);
                }
                for pair in rows.windows(2) {
                    assert!(pair[1].total_invested >= pair[0].total_invested);
                    assert!(pair[1].total_balance >= pair[0].total_balance);
                }
            }
        }
    }

    #[test]
    fn test_zero_rate_earns_nothing() {
        let config = ProjectionConfig {
            annual_rate_percent: 0.0,
            deposit_frequency: DepositFrequency::Weekly,
            compounding_frequency: CompoundingFrequency::Daily,
            ..calculator_config(15)
        };
        let rows = project(&config).unwrap();

        for row in &rows {
            assert_eq!(row.interest_earned, 0.0);
            assert_eq!(row.total_balance, row.total_invested);
        }
        assert_eq!(rows[14].total_invested, 1000.0 + 15.0 * 52.0 * 100.0);
    }

    #[test]
    fn test_compounding_steps_match_table() {
        for freq in CompoundingFrequency::ALL {
            let n = freq.periods_per_year();
            let engine = ProjectionEngine::new(ProjectionConfig {
                initial_investment: 10_000.0,
                deposit_amount: 0.0,
                annual_rate_percent: 10.0,
                compounding_frequency: freq,
                number_of_years: 1,
                ..Default::default()
            });
            let result = engine.run().unwrap();

            let expected = 10_000.0 * (1.0 + 0.10 / n as f64).powi(n as i32);
            assert_relative_eq!(result.years[0].total_balance, expected, epsilon = 0.006);
        }
    }

    #[test]
    fn test_deposits_compound_for_whole_year() {
        // Every deposit earns the full year of interest, even under monthly
        // compounding with monthly deposits. A deposit-by-deposit model would
        // give a lower balance here.
        let config = ProjectionConfig {
            initial_investment: 0.0,
            deposit_amount: 100.0,
            deposit_frequency: DepositFrequency::Monthly,
            annual_rate_percent: 12.0,
            compounding_frequency: CompoundingFrequency::Monthly,
            number_of_years: 1,
        };
        let rows = project(&config).unwrap();

        let whole_year = 1200.0 * 1.01_f64.powi(12);
        let interleaved: f64 = (1..=12).map(|k| 100.0 * 1.01_f64.powi(k)).sum();
        assert_relative_eq!(rows[0].total_balance, whole_year, epsilon = 0.006);
        assert!(rows[0].total_balance > interleaved + 1.0);
    }

    #[test]
    fn test_carry_over_is_unrounded() {
        let config = ProjectionConfig {
            initial_investment: 0.004,
            deposit_amount: 0.0,
            annual_rate_percent: 100.0,
            number_of_years: 3,
            ..Default::default()
        };
        let rows = project(&config).unwrap();

        // 0.008, 0.016, 0.032; carrying the rounded 0.01 forward would end at 0.04
        let balances: Vec<f64> = rows.iter().map(|r| r.total_balance).collect();
        assert_eq!(balances, vec![0.01, 0.02, 0.03]);
    }

    #[test]
    fn test_rows_round_exact_value() {
        let config = ProjectionConfig {
            initial_investment: 1.115,
            deposit_amount: 0.0,
            annual_rate_percent: 0.0,
            number_of_years: 1,
            ..Default::default()
        };
        let rows = project(&config).unwrap();

        assert_eq!(rows[0].total_invested, 1.11);
        assert_eq!(rows[0].total_balance, 1.11);
        assert_eq!(rows[0].interest_earned, 0.0);
    }

    #[test]
    fn test_validation_produces_nothing() {
        let config = ProjectionConfig {
            initial_investment: -1.0,
            ..calculator_config(10)
        };
        assert_eq!(project(&config), Err(ValidationError::InitialInvestment));

        let config = ProjectionConfig {
            number_of_years: 0,
            ..calculator_config(10)
        };
        assert_eq!(project(&config), Err(ValidationError::NumberOfYears));

        let config = ProjectionConfig {
            annual_rate_percent: f64::NAN,
            ..calculator_config(10)
        };
        let err = ProjectionEngine::new(config).run().unwrap_err();
        assert_eq!(err.to_string(), crate::projection::VALIDATION_MESSAGE);
    }
}
