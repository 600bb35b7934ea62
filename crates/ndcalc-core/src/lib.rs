//! ndcalc Core — exposure math for ND filter recommendations.
//!
//! This crate contains the EV formulas, the 180-degree shutter rule, input
//! validation and the explicit form state. No I/O or framework dependencies.

pub mod error;
pub mod exposure;
pub mod input;
pub mod state;

// Re-exports for convenience.
pub use error::ExposureError;
pub use exposure::recommend::{
    CurrentSettings, DesiredSettings, ExposureGap, ExposureMode, NdFilter, Recommendation,
    compute_recommendation,
};
pub use input::Field;
pub use state::{Evaluation, EvaluationReport, ExposureInputs};
