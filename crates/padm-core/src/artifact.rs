//! Loading and validation of the trained PADM model artifact.
//!
//! The artifact is a single JSON document produced by the training
//! pipeline: feature names in the model-agreed order, one logistic
//! coefficient per feature, an intercept, and an optional Platt
//! recalibration pair. It is read once at startup and shared read-only
//! for the process lifetime.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use padm_model::{LabPanel, LabParameter, PadmError};

use crate::classifier::ProbabilityModel;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model features do not match the panel contract (expected {expected}, found {found})")]
    FeatureMismatch { expected: String, found: String },

    #[error("invalid model coefficients: {message}")]
    InvalidCoefficients { message: String },
}

/// Platt scaling pair applied to the raw logistic score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub slope: f64,
    pub intercept: f64,
}

/// Validation metrics recorded by the training pipeline, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub auc: f64,
    pub sensitivity: f64,
    pub specificity: f64,
}

/// The deserialized, validated model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub version: String,
    /// Feature names in training order. Must equal the canonical panel
    /// order exactly; validated on load.
    pub features: Vec<String>,
    /// One coefficient per feature, same order.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<Calibration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ValidationMetrics>,
}

impl ModelArtifact {
    /// Load an artifact from disk and validate it against the panel
    /// contract.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] when the file is unreadable, malformed,
    /// or describes a model incompatible with the four-parameter panel.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        artifact.validate()?;
        info!(
            model = %artifact.name,
            version = %artifact.version,
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Check feature order and coefficient sanity.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let expected: Vec<&str> = LabParameter::ORDERED.iter().map(|p| p.as_str()).collect();
        let found: Vec<&str> = self.features.iter().map(String::as_str).collect();
        if found != expected {
            return Err(ArtifactError::FeatureMismatch {
                expected: expected.join(", "),
                found: found.join(", "),
            });
        }
        if self.coefficients.len() != expected.len() {
            return Err(ArtifactError::InvalidCoefficients {
                message: format!(
                    "expected {} coefficients, found {}",
                    expected.len(),
                    self.coefficients.len()
                ),
            });
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::InvalidCoefficients {
                message: "intercept and coefficients must be finite".to_string(),
            });
        }
        if let Some(calibration) = &self.calibration {
            if !calibration.slope.is_finite() || !calibration.intercept.is_finite() {
                return Err(ArtifactError::InvalidCoefficients {
                    message: "calibration pair must be finite".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Raw logistic score before calibration.
    fn logistic_score(&self, panel: &LabPanel) -> f64 {
        let features = panel.feature_values();
        let linear: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        sigmoid(linear)
    }
}

impl ProbabilityModel for ModelArtifact {
    fn predict_probability(&self, panel: &LabPanel) -> padm_model::Result<f64> {
        let score = self.logistic_score(panel);
        let probability = match &self.calibration {
            Some(calibration) => sigmoid(calibration.slope * score + calibration.intercept),
            None => score,
        };
        if !probability.is_finite() {
            return Err(PadmError::Inference {
                message: "model produced a non-finite probability".to_string(),
            });
        }
        Ok(probability)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            name: "PADM".to_string(),
            version: "1.0".to_string(),
            features: LabParameter::ORDERED
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            coefficients: vec![0.12, 0.05, 0.9, 0.2],
            intercept: -6.5,
            calibration: None,
            metrics: Some(ValidationMetrics {
                auc: 0.904,
                sensitivity: 0.792,
                specificity: 0.901,
            }),
        }
    }

    #[test]
    fn test_validate_accepts_canonical_artifact() {
        assert!(artifact().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_feature_reorder() {
        let mut bad = artifact();
        bad.features.swap(0, 1);
        assert!(matches!(
            bad.validate(),
            Err(ArtifactError::FeatureMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_coefficient_count_mismatch() {
        let mut bad = artifact();
        bad.coefficients.pop();
        assert!(matches!(
            bad.validate(),
            Err(ArtifactError::InvalidCoefficients { .. })
        ));
    }

    #[test]
    fn test_probability_is_monotone_in_d_dimer() {
        // Positive D-Dimer coefficient: a higher D-Dimer must never lower
        // the predicted probability.
        let model = artifact();
        let low = LabPanel::new(12.0, 30.0, 0.5, 10.0).unwrap();
        let high = LabPanel::new(12.0, 30.0, 8.0, 10.0).unwrap();
        let p_low = model.predict_probability(&low).unwrap();
        let p_high = model.predict_probability(&high).unwrap();
        assert!(p_high > p_low);
        assert!((0.0..=1.0).contains(&p_low));
        assert!((0.0..=1.0).contains(&p_high));
    }

    #[test]
    fn test_calibration_is_applied() {
        let mut model = artifact();
        let panel = LabPanel::new(18.5, 55.0, 3.2, 12.5).unwrap();
        let raw = model.predict_probability(&panel).unwrap();
        model.calibration = Some(Calibration {
            slope: 2.0,
            intercept: -1.0,
        });
        let calibrated = model.predict_probability(&panel).unwrap();
        assert_ne!(raw, calibrated);
        assert!((0.0..=1.0).contains(&calibrated));
    }
}
