//! Read-only views over projection output for display and export

mod export;
mod paginate;

pub use export::{render_table, to_csv_string, write_csv, write_csv_to, ReportError};
pub use paginate::{Paginator, ITEMS_PER_PAGE};

use crate::projection::{round_to_cents, YearResult};
use serde::{Deserialize, Serialize};

/// A yearly row with the interest earned in that year alone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub year: u32,
    pub total_invested: f64,
    pub interest_earned: f64,
    pub annual_interest: f64,
    pub total_balance: f64,
}

/// Interest earned in each year: the change in cumulative interest from the
/// previous row (from zero for the first row)
pub fn annual_interest(rows: &[YearResult]) -> Vec<f64> {
    let mut previous = 0.0;
    rows.iter()
        .map(|row| {
            let delta = round_to_cents(row.interest_earned - previous);
            previous = row.interest_earned;
            delta
        })
        .collect()
}

/// Pair every yearly row with its annual interest
pub fn report_rows(rows: &[YearResult]) -> Vec<ReportRow> {
    rows.iter()
        .zip(annual_interest(rows))
        .map(|(row, annual)| ReportRow {
            year: row.year,
            total_invested: row.total_invested,
            interest_earned: row.interest_earned,
            annual_interest: annual,
            total_balance: row.total_balance,
        })
        .collect()
}
