//! Message contracts between the calculator and an external UI.
//!
//! One JSON object per line in each direction, using the
//! `#[serde(tag = "type", content = "data")]` layout.

use serde::{Deserialize, Serialize};

use ndcalc_core::{EvaluationReport, ExposureMode, Field};

/// Messages from the UI to the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToCore {
    /// Ask for the current state without changing anything.
    RequestState,

    /// A form field was edited.
    SetField {
        /// Which field.
        field: Field,
        /// Raw text as typed.
        value: String,
    },

    /// The simple/advanced switch was toggled.
    SetMode {
        /// New mode.
        mode: ExposureMode,
    },

    /// Restore the configured defaults.
    Reset,
}

/// Messages from the calculator to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CoreToUi {
    /// Full recomputed state, sent after every accepted message.
    State {
        /// Derived values and any validation error.
        evaluation: EvaluationReport,
    },

    /// A line could not be decoded.
    Error {
        /// Error description.
        message: String,
    },
}
