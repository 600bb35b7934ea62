//! Application configuration for the terminal front end.

use ndcalc_core::{ExposureInputs, Field};

/// Environment variables that override the initial form values.
const FIELD_VARS: [(&str, Field); 4] = [
    ("NDCALC_FPS", Field::Fps),
    ("NDCALC_ISO", Field::CurrentIso),
    ("NDCALC_APERTURE", Field::CurrentAperture),
    ("NDCALC_SHUTTER", Field::CurrentShutter),
];
/// Pretty-print JSON output when set.
const PRETTY_JSON_VAR: &str = "NDCALC_PRETTY_JSON";

/// Runtime configuration for the ndcalc application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Form values a session starts with and `calc` falls back to.
    pub defaults: ExposureInputs,
    /// Indent JSON written by `--json`.
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl AppConfig {
    /// Build from an arbitrary variable lookup.
    ///
    /// Current ISO and aperture overrides also seed the desired fields, so
    /// switching to advanced mode starts from the same settings.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut defaults = ExposureInputs::default();
        for (var, field) in FIELD_VARS {
            if let Some(value) = lookup(var) {
                tracing::debug!("{var} overrides {field}: {value:?}");
                defaults.set(field, value.clone());
                match field {
                    Field::CurrentIso => defaults.set(Field::DesiredIso, value),
                    Field::CurrentAperture => defaults.set(Field::DesiredAperture, value),
                    _ => {}
                }
            }
        }

        Self {
            defaults,
            pretty_json: lookup(PRETTY_JSON_VAR).is_some(),
        }
    }
}
