//! Form state for the calculator.
//!
//! `ExposureInputs` is the single record a front end owns. Edits store raw
//! text; [`ExposureInputs::evaluate`] is the one recompute entry point and
//! derives every displayed value from the current text on each call.

use serde::{Deserialize, Serialize};

use crate::error::ExposureError;
use crate::exposure::recommend::{
    CurrentSettings, DesiredSettings, ExposureGap, ExposureMode, NdFilter, Recommendation,
    compute_recommendation,
};
use crate::exposure::shutter::{parse_shutter_speed, shutter_fraction_label};
use crate::input::{Field, parse_positive};

/// Raw text of every form field plus the mode switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureInputs {
    /// Target frame rate.
    pub fps: String,
    /// Current ISO.
    pub current_iso: String,
    /// Current f-number.
    pub current_aperture: String,
    /// Current shutter speed, decimal seconds or a fraction.
    pub current_shutter: String,
    /// Desired ISO (advanced mode).
    pub desired_iso: String,
    /// Desired f-number (advanced mode).
    pub desired_aperture: String,
    /// Simple or advanced.
    #[serde(default)]
    pub mode: ExposureMode,
}

impl Default for ExposureInputs {
    fn default() -> Self {
        Self {
            fps: "25".to_string(),
            current_iso: "100".to_string(),
            current_aperture: "1.7".to_string(),
            current_shutter: "1/100".to_string(),
            desired_iso: "100".to_string(),
            desired_aperture: "1.7".to_string(),
            mode: ExposureMode::Simple,
        }
    }
}

/// Everything a front end displays after one recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The inputs this evaluation was derived from.
    pub inputs: ExposureInputs,
    /// Recommended shutter speed as a fraction, e.g. `"1/50"`.
    pub recommended_shutter: Result<String, ExposureError>,
    /// Derived EVs, stops and filter factor.
    pub outcome: Result<Recommendation, ExposureError>,
}

impl Evaluation {
    /// The first error, if this evaluation is invalid.
    pub fn error(&self) -> Option<&ExposureError> {
        self.outcome.as_ref().err()
    }

    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Flatten into the serializable form sent to external front ends.
    pub fn report(&self) -> EvaluationReport {
        let recommendation = self.outcome.as_ref().ok().copied();
        EvaluationReport {
            inputs: self.inputs.clone(),
            mode_label: self.inputs.mode.label().to_string(),
            recommended_shutter: self.recommended_shutter.as_ref().ok().cloned(),
            recommendation,
            nd_filter: recommendation.and_then(|r| r.nd_filter()),
            gap: recommendation.map(|r| r.exposure_gap()),
            error: self.error().map(ToString::to_string),
        }
    }
}

/// Serializable snapshot of an [`Evaluation`].
///
/// Errors are carried as display strings; `recommendation` and `error` are
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub inputs: ExposureInputs,
    /// `"Simple"` or `"Advanced"`.
    pub mode_label: String,
    pub recommended_shutter: Option<String>,
    pub recommendation: Option<Recommendation>,
    /// Present only when a filter is actually needed.
    pub nd_filter: Option<NdFilter>,
    pub gap: Option<ExposureGap>,
    pub error: Option<String>,
}

impl ExposureInputs {
    /// Raw text of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Fps => &self.fps,
            Field::CurrentIso => &self.current_iso,
            Field::CurrentAperture => &self.current_aperture,
            Field::CurrentShutter => &self.current_shutter,
            Field::DesiredIso => &self.desired_iso,
            Field::DesiredAperture => &self.desired_aperture,
        }
    }

    /// Store a raw edit. Validation happens on [`evaluate`](Self::evaluate),
    /// so an invalid value is kept and shown back to the user.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::Fps => &mut self.fps,
            Field::CurrentIso => &mut self.current_iso,
            Field::CurrentAperture => &mut self.current_aperture,
            Field::CurrentShutter => &mut self.current_shutter,
            Field::DesiredIso => &mut self.desired_iso,
            Field::DesiredAperture => &mut self.desired_aperture,
        };
        *slot = text.into();
    }

    pub fn set_mode(&mut self, mode: ExposureMode) {
        self.mode = mode;
    }

    /// Parse the current-settings fields.
    pub fn current_settings(&self) -> Result<CurrentSettings, ExposureError> {
        Ok(CurrentSettings {
            iso: parse_positive(Field::CurrentIso, &self.current_iso)?,
            aperture: parse_positive(Field::CurrentAperture, &self.current_aperture)?,
            shutter_speed: parse_shutter_speed(&self.current_shutter)?,
            fps: parse_positive(Field::Fps, &self.fps)?,
        })
    }

    /// Parse the desired-settings fields. In simple mode they mirror the
    /// current ISO and aperture, and their own text is never read.
    pub fn desired_settings(
        &self,
        current: &CurrentSettings,
    ) -> Result<DesiredSettings, ExposureError> {
        match self.mode {
            ExposureMode::Simple => Ok(DesiredSettings {
                iso: current.iso,
                aperture: current.aperture,
            }),
            ExposureMode::Advanced => Ok(DesiredSettings {
                iso: parse_positive(Field::DesiredIso, &self.desired_iso)?,
                aperture: parse_positive(Field::DesiredAperture, &self.desired_aperture)?,
            }),
        }
    }

    /// Recompute all derived values from the current field text.
    pub fn evaluate(&self) -> Evaluation {
        let recommended_shutter = parse_positive(Field::Fps, &self.fps)
            .and_then(shutter_fraction_label);

        let outcome = self.current_settings().and_then(|current| {
            let desired = self.desired_settings(&current)?;
            compute_recommendation(&current, &desired, self.mode)
        });

        match &outcome {
            Ok(rec) => tracing::debug!(
                mode = self.mode.label(),
                stops = rec.stops,
                filter_factor = rec.filter_factor,
                "exposure recomputed"
            ),
            Err(e) => tracing::debug!("exposure inputs invalid: {e}"),
        }

        Evaluation {
            inputs: self.clone(),
            recommended_shutter,
            outcome,
        }
    }
}
