//! Exposure value from aperture, shutter speed and ISO.
//!
//! ```text
//! N  = aperture²
//! EV = log2(N / t) − log2(ISO)
//! ```
//!
//! This is the ISO-normalised form: two settings with the same EV let the
//! same amount of light reach a sensor of the given sensitivity.

use super::ensure_domain;
use super::rounding::round_to;
use crate::error::ExposureError;

/// Decimal places EV values are reported with.
pub const EV_DECIMALS: u32 = 2;

/// Compute the exposure value of a camera setting, rounded to two decimals.
///
/// - `aperture`: f-number (e.g. `1.7`).
/// - `shutter_speed`: exposure time in seconds (e.g. `0.01` for 1/100).
/// - `iso`: sensor sensitivity.
///
/// All three must be positive and finite.
pub fn compute_ev(aperture: f64, shutter_speed: f64, iso: f64) -> Result<f64, ExposureError> {
    let aperture = ensure_domain("aperture", aperture)?;
    let shutter_speed = ensure_domain("shutter speed", shutter_speed)?;
    let iso = ensure_domain("ISO", iso)?;

    let n = aperture * aperture;
    let ev = (n / shutter_speed).log2() - iso.log2();
    if !ev.is_finite() {
        return Err(ExposureError::NonFiniteResult("EV"));
    }
    Ok(round_to(ev, EV_DECIMALS))
}
