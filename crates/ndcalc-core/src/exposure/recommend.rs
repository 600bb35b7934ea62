//! ND filter recommendation from current and desired camera settings.
//!
//! The desired shutter speed is always the 180-degree value for the current
//! frame rate. The EV difference between the two settings, rounded to whole
//! stops, is the amount of light an ND filter has to remove.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ev::compute_ev;
use super::rounding::{round_to, whole_stops_between};
use super::shutter::recommended_shutter_speed;
use crate::error::ExposureError;
use crate::input::{Field, require_positive};

/// Which desired settings the user controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureMode {
    /// Only the shutter speed changes; desired ISO and aperture follow current.
    #[default]
    Simple,
    /// Desired ISO and aperture are set independently.
    Advanced,
}

impl ExposureMode {
    /// Label shown next to the mode switch.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Advanced => "Advanced",
        }
    }

    pub const fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced)
    }
}

/// Settings the camera is currently exposed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentSettings {
    /// Sensor sensitivity.
    pub iso: f64,
    /// f-number.
    pub aperture: f64,
    /// Exposure time in seconds.
    pub shutter_speed: f64,
    /// Target frame rate.
    pub fps: f64,
}

/// Settings to shoot at. Ignored in [`ExposureMode::Simple`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesiredSettings {
    /// Sensor sensitivity.
    pub iso: f64,
    /// f-number.
    pub aperture: f64,
}

/// Derived values of one recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// EV of the current settings, two decimals.
    pub current_ev: f64,
    /// EV of the desired settings at the 180-degree shutter speed.
    pub desired_ev: f64,
    /// Whole stops of light to remove. Negative when light is missing.
    pub stops: i32,
    /// `round(2^stops)`; the ND factor (8 for three stops).
    pub filter_factor: f64,
}

impl Recommendation {
    /// The ND filter to mount, if one is needed at all.
    ///
    /// Only a positive number of stops calls for a filter. Zero stops means
    /// the settings already match; negative stops cannot be fixed with ND.
    pub fn nd_filter(&self) -> Option<NdFilter> {
        (self.stops >= 1).then_some(NdFilter {
            stops: self.stops,
            factor: self.filter_factor,
        })
    }

    /// Direction and size of the exposure mismatch.
    pub fn exposure_gap(&self) -> ExposureGap {
        match self.stops {
            0 => ExposureGap::Balanced,
            s if s > 0 => ExposureGap::TooBright(s.unsigned_abs()),
            s => ExposureGap::TooDark(s.unsigned_abs()),
        }
    }
}

/// How far the desired settings are from the current exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stops", rename_all = "kebab-case")]
pub enum ExposureGap {
    /// No filter needed.
    Balanced,
    /// Too much light by this many stops; an ND filter fixes it.
    TooBright(u32),
    /// Too little light by this many stops; open up or raise ISO instead.
    TooDark(u32),
}

/// A neutral-density filter strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NdFilter {
    /// Stops of attenuation.
    pub stops: i32,
    /// Light-attenuation factor (`2^stops`).
    pub factor: f64,
}

impl NdFilter {
    /// Optical density printed on filter rings (`ND 8` is `0.9`).
    ///
    /// ```text
    /// density = stops × log10(2)
    /// ```
    pub fn optical_density(&self) -> f64 {
        round_to(self.stops as f64 * std::f64::consts::LOG10_2, 1)
    }
}

impl fmt::Display for NdFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ND {}", self.factor)
    }
}

/// Compare current settings to the 180-degree shutter speed for their frame
/// rate and recommend an ND filter.
///
/// # Algorithm
/// 1. EV of the current settings
/// 2. Desired shutter speed `1 / (2 × fps)`
/// 3. Desired ISO and aperture (current values in simple mode)
/// 4. EV of the desired settings
/// 5. `stops = round(current_ev − desired_ev)`
/// 6. `filter_factor = round(2^stops)`
pub fn compute_recommendation(
    current: &CurrentSettings,
    desired: &DesiredSettings,
    mode: ExposureMode,
) -> Result<Recommendation, ExposureError> {
    require_positive(Field::CurrentIso, current.iso)?;
    require_positive(Field::CurrentAperture, current.aperture)?;
    require_positive(Field::CurrentShutter, current.shutter_speed)?;
    require_positive(Field::Fps, current.fps)?;

    let current_ev = compute_ev(current.aperture, current.shutter_speed, current.iso)?;
    let desired_shutter = recommended_shutter_speed(current.fps)?;

    let (desired_aperture, desired_iso) = match mode {
        ExposureMode::Simple => (current.aperture, current.iso),
        ExposureMode::Advanced => (
            require_positive(Field::DesiredAperture, desired.aperture)?,
            require_positive(Field::DesiredIso, desired.iso)?,
        ),
    };
    let desired_ev = compute_ev(desired_aperture, desired_shutter, desired_iso)?;

    let stops = i32::try_from(whole_stops_between(current_ev, desired_ev))
        .map_err(|_| ExposureError::NonFiniteResult("stop difference"))?;

    let filter_factor = round_to(2f64.powi(stops), 0);
    if !filter_factor.is_finite() {
        return Err(ExposureError::NonFiniteResult("filter factor"));
    }

    tracing::trace!(current_ev, desired_ev, stops, filter_factor, "recommendation computed");

    Ok(Recommendation {
        current_ev,
        desired_ev,
        stops,
        filter_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(fps: f64, shutter_speed: f64) -> CurrentSettings {
        CurrentSettings {
            iso: 100.0,
            aperture: 1.7,
            shutter_speed,
            fps,
        }
    }

    const SAME: DesiredSettings = DesiredSettings {
        iso: 100.0,
        aperture: 1.7,
    };

    #[test]
    fn test_reference_recommendation_is_nd2() {
        let rec = compute_recommendation(&current(25.0, 0.01), &SAME, ExposureMode::Simple)
            .unwrap();
        assert_eq!(rec.current_ev, 1.53);
        assert_eq!(rec.desired_ev, 0.53);
        assert_eq!(rec.stops, 1);
        assert_eq!(rec.filter_factor, 2.0);
        assert_eq!(rec.nd_filter().unwrap().to_string(), "ND 2");
    }

    #[test]
    fn test_doubling_fps_removes_one_stop_and_halves_filter() {
        let at_25 = compute_recommendation(&current(25.0, 1.0 / 400.0), &SAME, ExposureMode::Simple)
            .unwrap();
        let at_50 = compute_recommendation(&current(50.0, 1.0 / 400.0), &SAME, ExposureMode::Simple)
            .unwrap();
        assert_eq!(at_25.stops, 3);
        assert_eq!(at_25.filter_factor, 8.0);
        assert_eq!(at_50.stops, 2);
        assert_eq!(at_50.filter_factor, 4.0);
    }

    #[test]
    fn test_half_stop_difference_at_high_ev_rounds_up() {
        // 8.44 vs 7.94: exactly half a stop once both EVs are rounded.
        let settings = CurrentSettings {
            iso: 100.0,
            aperture: 16.0,
            shutter_speed: 1.0 / 136.0,
            fps: 48.0,
        };
        let desired = DesiredSettings {
            iso: 100.0,
            aperture: 16.0,
        };
        let rec = compute_recommendation(&settings, &desired, ExposureMode::Simple).unwrap();
        assert_eq!(rec.current_ev, 8.44);
        assert_eq!(rec.desired_ev, 7.94);
        assert_eq!(rec.stops, 1);
        assert_eq!(rec.filter_factor, 2.0);
        assert!(rec.nd_filter().is_some());
    }

    #[test]
    fn test_matching_shutter_needs_no_filter() {
        let rec = compute_recommendation(&current(25.0, 0.02), &SAME, ExposureMode::Simple)
            .unwrap();
        assert_eq!(rec.stops, 0);
        assert_eq!(rec.filter_factor, 1.0);
        assert_eq!(rec.nd_filter(), None);
        assert_eq!(rec.exposure_gap(), ExposureGap::Balanced);
    }

    #[test]
    fn test_slow_current_shutter_is_too_dark() {
        // 1/25 s at 25 fps is one stop brighter than 1/50 s would be.
        let rec = compute_recommendation(&current(25.0, 0.04), &SAME, ExposureMode::Simple)
            .unwrap();
        assert_eq!(rec.stops, -1);
        assert_eq!(rec.filter_factor, 1.0);
        assert_eq!(rec.nd_filter(), None);
        assert_eq!(rec.exposure_gap(), ExposureGap::TooDark(1));
    }

    #[test]
    fn test_simple_mode_ignores_desired_settings() {
        let desired = DesiredSettings {
            iso: -1.0,
            aperture: 0.0,
        };
        let rec = compute_recommendation(&current(25.0, 0.01), &desired, ExposureMode::Simple)
            .unwrap();
        assert_eq!(rec.stops, 1);
    }

    #[test]
    fn test_advanced_mode_uses_desired_settings() {
        // Stopping down from f/1.7 to f/2.4 removes one stop; shutter adds one.
        let desired = DesiredSettings {
            iso: 100.0,
            aperture: 2.4,
        };
        let rec = compute_recommendation(&current(25.0, 0.01), &desired, ExposureMode::Advanced)
            .unwrap();
        assert_eq!(rec.desired_ev, 1.53);
        assert_eq!(rec.stops, 0);
    }

    #[test]
    fn test_advanced_mode_validates_desired_fields() {
        let desired = DesiredSettings {
            iso: 0.0,
            aperture: 1.7,
        };
        let err = compute_recommendation(&current(25.0, 0.01), &desired, ExposureMode::Advanced)
            .unwrap_err();
        assert_eq!(
            err,
            ExposureError::InvalidNumericInput {
                field: Field::DesiredIso,
                value: "0".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_fps_is_reported_against_field() {
        let err = compute_recommendation(&current(0.0, 0.01), &SAME, ExposureMode::Simple)
            .unwrap_err();
        assert!(matches!(
            err,
            ExposureError::InvalidNumericInput {
                field: Field::Fps,
                ..
            }
        ));
    }

    #[test]
    fn test_recommendation_is_idempotent() {
        let settings = current(24.0, 1.0 / 250.0);
        let a = compute_recommendation(&settings, &SAME, ExposureMode::Simple).unwrap();
        let b = compute_recommendation(&settings, &SAME, ExposureMode::Simple).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_filter_factor_is_power_of_two() {
        for (shutter, stops) in [(1.0 / 100.0, 1), (1.0 / 200.0, 2), (1.0 / 800.0, 4), (1.0 / 3200.0, 6)] {
            let rec = compute_recommendation(&current(25.0, shutter), &SAME, ExposureMode::Simple)
                .unwrap();
            assert_eq!(rec.stops, stops);
            assert_eq!(rec.filter_factor, 2f64.powi(stops));
        }
    }

    #[test]
    fn test_optical_density() {
        let nd = |stops: i32| NdFilter {
            stops,
            factor: 2f64.powi(stops),
        };
        assert_eq!(nd(1).optical_density(), 0.3);
        assert_eq!(nd(3).optical_density(), 0.9);
        assert_eq!(nd(6).optical_density(), 1.8);
        assert_eq!(nd(10).optical_density(), 3.0);
    }

    #[test]
    fn test_mode_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&ExposureMode::Advanced).unwrap(), "\"advanced\"");
        assert_eq!(ExposureMode::default(), ExposureMode::Simple);
    }
}
