//! Projection engine for yearly compound interest projections

mod config;
mod engine;
mod error;
mod frequency;
mod results;
mod state;

pub use config::{ConfigError, ProjectionConfig};
pub use engine::{project, ProjectionEngine};
pub use error::{ValidationError, VALIDATION_MESSAGE};
pub use frequency::{CompoundingFrequency, DepositFrequency};
pub use results::{round_to_cents, ProjectionResult, ProjectionSummary, YearResult};
pub use state::ProjectionState;
