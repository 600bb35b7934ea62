use crate::input::Field;

/// Errors produced while validating inputs or evaluating exposure formulas.
///
/// Every variant is recoverable: the caller keeps its state and renders the
/// message in place of the derived values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExposureError {
    #[error("{field} must be a positive number, got {value:?}")]
    InvalidNumericInput { field: Field, value: String },
    #[error("shutter speed {0:?} is not a number or a fraction like 1/50")]
    MalformedFraction(String),
    #[error("{quantity} must be positive and finite, got {value}")]
    OutOfDomain { quantity: &'static str, value: f64 },
    #[error("{0} is out of range")]
    NonFiniteResult(&'static str),
}

impl ExposureError {
    pub(crate) fn invalid(field: Field, value: impl ToString) -> Self {
        Self::InvalidNumericInput {
            field,
            value: value.to_string(),
        }
    }
}
