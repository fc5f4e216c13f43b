//! Compound Calculator - yearly projection of invested capital and interest
//!
//! This library provides:
//! - Input validation for a projection configuration
//! - Year-by-year balance projection with periodic deposits and configurable compounding
//! - Report views over the output (annual interest, pagination, CSV and table export)

pub mod projection;
pub mod report;

// Re-export commonly used types
pub use projection::{
    project, CompoundingFrequency, DepositFrequency, ProjectionConfig, ProjectionEngine,
    ProjectionResult, ValidationError, YearResult,
};
pub use report::{Paginator, ReportRow};
