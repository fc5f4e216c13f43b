//! Compound Calculator CLI
//!
//! Command-line interface for running compound interest projections

use anyhow::Context;
use clap::Parser;
use compound_calculator::{
    projection::{CompoundingFrequency, DepositFrequency, ProjectionConfig, ProjectionEngine},
    report::{self, Paginator},
};
use std::path::PathBuf;

/// Project a balance year by year under periodic deposits and compound interest
#[derive(Parser, Debug)]
#[command(name = "compound-calculator")]
#[command(version)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial investment ($)
    #[arg(long, allow_negative_numbers = true)]
    initial_investment: Option<f64>,

    /// Deposit amount ($) per deposit period
    #[arg(long, allow_negative_numbers = true)]
    deposit_amount: Option<f64>,

    /// Deposit frequency: monthly or weekly
    #[arg(long)]
    deposit_frequency: Option<DepositFrequency>,

    /// Annual interest rate (%)
    #[arg(long, allow_negative_numbers = true)]
    annual_rate: Option<f64>,

    /// Compounding frequency: annually, semi-annually, quarterly, monthly, weekly, daily
    #[arg(long)]
    compounding_frequency: Option<String>,

    /// Number of years
    #[arg(long)]
    years: Option<u32>,

    /// Results page to print (10 years per page)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Print every year instead of a single page
    #[arg(long)]
    all: bool,

    /// Write the full yearly table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print rows and summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn projection_config(&self) -> anyhow::Result<ProjectionConfig> {
        let mut config = match &self.config {
            Some(path) => ProjectionConfig::from_json_path(path)
                .with_context(|| format!("Unable to load config from {}", path.display()))?,
            None => ProjectionConfig::default(),
        };

        if let Some(v) = self.initial_investment {
            config.initial_investment = v;
        }
        if let Some(v) = self.deposit_amount {
            config.deposit_amount = v;
        }
        if let Some(v) = self.deposit_frequency {
            config.deposit_frequency = v;
        }
        if let Some(v) = self.annual_rate {
            config.annual_rate_percent = v;
        }
        if let Some(v) = &self.compounding_frequency {
            config.compounding_frequency = CompoundingFrequency::from_label(v);
        }
        if let Some(v) = self.years {
            config.number_of_years = v;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.projection_config()?;
    log::info!("Running projection with {:?}", config);

    let result = match ProjectionEngine::new(config.clone()).run() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    let rows = report::report_rows(&result.years);
    let summary = result.summary();

    if let Some(path) = &args.csv {
        report::write_csv(path, &rows)
            .with_context(|| format!("Unable to write CSV to {}", path.display()))?;
        log::info!("Full results written to {}", path.display());
    }

    if args.json {
        let body = serde_json::json!({
            "summary": summary,
            "rows": rows,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Compound Interest Calculator");
    println!("============================\n");
    println!("  Initial Investment: ${:.2}", config.initial_investment);
    println!(
        "  Deposits: ${:.2} {}",
        config.deposit_amount, config.deposit_frequency
    );
    println!(
        "  Annual Rate: {}% compounded {}",
        config.annual_rate_percent, config.compounding_frequency
    );
    println!("  Years: {}\n", config.number_of_years);

    if args.all {
        print!("{}", report::render_table(&rows));
    } else {
        let mut pages = Paginator::new(&rows);
        pages.go_to(args.page);
        print!("{}", report::render_table(pages.page()));
        println!("\nPage {} of {}", pages.current_page(), pages.total_pages());
    }

    println!("\nSummary:");
    println!("  Total Invested: ${:.2}", summary.final_invested);
    println!("  Interest Earned: ${:.2}", summary.final_interest);
    println!("  Final Balance: ${:.2}", summary.final_balance);

    if let Some(path) = &args.csv {
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}
