//! CSV and text-table output for projection rows

use super::ReportRow;
use csv::Writer;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// CSV record; field names become the header
#[derive(Serialize)]
struct CsvRecord {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "TotalInvested")]
    total_invested: f64,
    #[serde(rename = "InterestEarned")]
    interest_earned: f64,
    #[serde(rename = "AnnualInterest")]
    annual_interest: f64,
    #[serde(rename = "TotalBalance")]
    total_balance: f64,
}

impl From<&ReportRow> for CsvRecord {
    fn from(row: &ReportRow) -> Self {
        Self {
            year: row.year,
            total_invested: row.total_invested,
            interest_earned: row.interest_earned,
            annual_interest: row.annual_interest,
            total_balance: row.total_balance,
        }
    }
}

/// Write rows with a header to any writer
pub fn write_csv_to<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut csv_writer = Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(CsvRecord::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write rows to a CSV file
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[ReportRow]) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_csv_to(file, rows)
}

pub fn to_csv_string(rows: &[ReportRow]) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, rows)?;
    Ok(String::from_utf8(buffer)?)
}

/// Fixed-width table, annual interest shown in parentheses after the cumulative figure
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut out = format!(
        "{:>5} {:>16} {:>28} {:>16}\n",
        "Year", "Total Invested", "Interest Earned", "Total Balance"
    );
    out.push_str(&"-".repeat(68));
    out.push('\n');

    for row in rows {
        let interest = format!("{:.2} (+{:.2})", row.interest_earned, row.annual_interest);
        out.push_str(&format!(
            "{:>5} {:>16.2} {:>28} {:>16.2}\n",
            row.year, row.total_invested, interest, row.total_balance
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project, ProjectionConfig};
    use crate::report::report_rows;

    fn sample_rows() -> Vec<ReportRow> {
        let config = ProjectionConfig {
            number_of_years: 2,
            ..Default::default()
        };
        report_rows(&project(&config).unwrap())
    }

    #[test]
    fn test_csv_output() {
        let csv = to_csv_string(&sample_rows()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Year,TotalInvested,InterestEarned,AnnualInterest,TotalBalance");
        assert_eq!(lines[1], "1,2200.0,154.0,154.0,2354.0");
        assert_eq!(lines[2], "2,3400.0,402.78,248.78,3802.78");
    }

    #[test]
    fn test_csv_of_no_rows_is_empty() {
        assert_eq!(to_csv_string(&[]).unwrap(), "");
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&sample_rows());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Interest Earned"));
        assert!(lines[2].contains("154.00 (+154.00)"));
        assert!(lines[3].trim_end().ends_with("3802.78"));
    }
}
