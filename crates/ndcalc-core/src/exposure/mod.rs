//! Exposure math — EV, the 180-degree shutter rule, and ND recommendations.

pub mod ev;
pub mod recommend;
pub mod rounding;
pub mod shutter;

pub use ev::compute_ev;
pub use rounding::round_to;
pub use shutter::{parse_shutter_speed, recommended_shutter_speed, shutter_fraction_label};

use crate::error::ExposureError;

/// Reject zero, negative and non-finite formula inputs.
pub(crate) fn ensure_domain(quantity: &'static str, value: f64) -> Result<f64, ExposureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ExposureError::OutOfDomain { quantity, value })
    }
}
