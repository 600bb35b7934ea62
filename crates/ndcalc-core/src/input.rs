//! Validation of raw form input.
//!
//! Form fields arrive as text. Every numeric field must parse to a positive,
//! finite number before it reaches the EV formulas; anything else is reported
//! as [`ExposureError::InvalidNumericInput`] instead of turning into `NaN`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ExposureError;

/// Identifies one input field of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    /// Target frame rate.
    Fps,
    /// ISO of the current settings.
    CurrentIso,
    /// f-number of the current settings.
    CurrentAperture,
    /// Shutter speed of the current settings, as typed (`1/100` or `0.01`).
    CurrentShutter,
    /// ISO to shoot at. Only read in advanced mode.
    DesiredIso,
    /// f-number to shoot at. Only read in advanced mode.
    DesiredAperture,
}

impl Field {
    /// Human-readable label for form rows and error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fps => "FPS",
            Self::CurrentIso => "current ISO",
            Self::CurrentAperture => "current aperture",
            Self::CurrentShutter => "current shutter speed",
            Self::DesiredIso => "desired ISO",
            Self::DesiredAperture => "desired aperture",
        }
    }

    /// All fields in display order.
    pub fn all() -> &'static [Self] {
        const ALL: [Field; 6] = [
            Field::CurrentIso,
            Field::CurrentAperture,
            Field::CurrentShutter,
            Field::Fps,
            Field::DesiredIso,
            Field::DesiredAperture,
        ];
        &ALL
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a form field that must hold a positive, finite number.
pub fn parse_positive(field: Field, text: &str) -> Result<f64, ExposureError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ExposureError::invalid(field, text))?;
    require_positive(field, value)
}

/// Check an already numeric value against the positivity constraint.
pub fn require_positive(field: Field, value: f64) -> Result<f64, ExposureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ExposureError::invalid(field, value))
    }
}
