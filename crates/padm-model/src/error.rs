use thiserror::Error;

use crate::panel::LabParameter;

#[derive(Debug, Error)]
pub enum PadmError {
    #[error("no prediction model is loaded: {reason}")]
    ModelUnavailable { reason: String },

    #[error("model inference failed: {message}")]
    Inference { message: String },

    #[error("probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("invalid {parameter} value {value}: {reason}")]
    InvalidPanel {
        parameter: LabParameter,
        value: f64,
        reason: String,
    },

    #[error("invalid thresholds (low={low}, high={high}): expected 0 < low < high < 1")]
    InvalidThresholds { low: f64, high: f64 },
}

pub type Result<T> = std::result::Result<T, PadmError>;
