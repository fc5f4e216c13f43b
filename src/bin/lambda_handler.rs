//! AWS Lambda handler for the compound interest calculator
//!
//! Accepts the calculator form fields as JSON and returns the yearly
//! projection with per-year interest and a summary.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use compound_calculator::{
    projection::{
        CompoundingFrequency, DepositFrequency, ProjectionConfig, ProjectionEngine,
        ProjectionSummary,
    },
    report::{self, ReportRow, ITEMS_PER_PAGE},
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Calculator form input. Missing fields take the form's initial values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionRequest {
    pub initial_investment: f64,
    pub deposit_amount: f64,
    pub deposit_frequency: DepositFrequency,
    /// Annual interest rate in percent
    pub annual_rate: f64,
    pub compounding_frequency: CompoundingFrequency,
    pub number_of_years: u32,
}

impl Default for ProjectionRequest {
    fn default() -> Self {
        let config = ProjectionConfig::default();
        Self {
            initial_investment: config.initial_investment,
            deposit_amount: config.deposit_amount,
            deposit_frequency: config.deposit_frequency,
            annual_rate: config.annual_rate_percent,
            compounding_frequency: config.compounding_frequency,
            number_of_years: config.number_of_years,
        }
    }
}

impl From<ProjectionRequest> for ProjectionConfig {
    fn from(request: ProjectionRequest) -> Self {
        ProjectionConfig {
            initial_investment: request.initial_investment,
            deposit_amount: request.deposit_amount,
            deposit_frequency: request.deposit_frequency,
            annual_rate_percent: request.annual_rate,
            compounding_frequency: request.compounding_frequency,
            number_of_years: request.number_of_years,
        }
    }
}

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub summary: ProjectionSummary,
    pub rows: Vec<ReportRow>,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub execution_time_ms: u64,
}

const CORS_METHODS: &str = "POST, OPTIONS";

/// Longest projection served over HTTP
pub const MAX_NUMBER_OF_YEARS: u32 = 1000;

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message });
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body.to_string()))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", CORS_METHODS)
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", CORS_METHODS)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("Rejected request body: {}", e);
            return error_response(400, &format!("Invalid JSON: {}", e));
        }
    };

    if request.number_of_years > MAX_NUMBER_OF_YEARS {
        log::info!("Rejected numberOfYears {}", request.number_of_years);
        return error_response(
            400,
            &format!("numberOfYears may not exceed {}", MAX_NUMBER_OF_YEARS),
        );
    }

    let config = ProjectionConfig::from(request);
    let result = match ProjectionEngine::new(config).run() {
        Ok(result) => result,
        Err(e) => {
            log::info!("Validation failed on {}", e.field());
            return error_response(400, &e.to_string());
        }
    };

    let rows = report::report_rows(&result.years);
    let total_pages = rows.len().div_ceil(ITEMS_PER_PAGE);

    let response = ProjectionResponse {
        summary: result.summary(),
        rows,
        items_per_page: ITEMS_PER_PAGE,
        total_pages,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
