//! The risk classifier and the assessment service wrapped around it.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use padm_model::{AssessmentReport, LabPanel, PadmError, Result, Thresholds};

use crate::artifact::ModelArtifact;
use crate::assess::build_report;

/// The single capability the core requires of a trained model: a
/// probability of the positive (DIC present) class for one panel.
///
/// The loaded artifact implements this; tests substitute stubs.
pub trait ProbabilityModel: Send + Sync {
    fn predict_probability(&self, panel: &LabPanel) -> Result<f64>;
}

/// Binary DIC classifier over a loaded, immutable model handle.
///
/// Performs no feature engineering: the four raw panel values pass
/// straight through to the model in the fixed feature order.
#[derive(Clone)]
pub struct RiskClassifier {
    model: Arc<dyn ProbabilityModel>,
}

impl RiskClassifier {
    pub fn new(model: Arc<dyn ProbabilityModel>) -> Self {
        Self { model }
    }

    /// Predict the probability of the positive class for one panel.
    ///
    /// # Errors
    ///
    /// Returns [`PadmError::InvalidPanel`] for a malformed panel and
    /// [`PadmError::Inference`] when the model rejects the input or
    /// produces a value outside [0, 1]. No fallback probability is ever
    /// fabricated.
    pub fn classify(&self, panel: &LabPanel) -> Result<f64> {
        panel.validate()?;
        let probability = self.model.predict_probability(panel)?;
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(PadmError::Inference {
                message: format!("model returned probability {probability} outside [0, 1]"),
            });
        }
        debug!(probability, "classified panel");
        Ok(probability)
    }
}

/// Request/response assessment service: one loaded model (or a recorded
/// load failure), the fixed thresholds, and nothing else.
///
/// When the model cannot be loaded the service degrades instead of
/// failing: tier mapping, recommendations and normalcy checks stay
/// available through [`Assessor::assess_with_probability`], while
/// [`Assessor::assess`] reports [`PadmError::ModelUnavailable`].
pub struct Assessor {
    classifier: Option<RiskClassifier>,
    degraded_reason: Option<String>,
    thresholds: Thresholds,
}

impl Assessor {
    /// Service with a live classifier.
    pub fn new(classifier: RiskClassifier, thresholds: Thresholds) -> Self {
        Self {
            classifier: Some(classifier),
            degraded_reason: None,
            thresholds,
        }
    }

    /// Service with no model: demo-only operation.
    pub fn degraded(reason: impl Into<String>, thresholds: Thresholds) -> Self {
        Self {
            classifier: None,
            degraded_reason: Some(reason.into()),
            thresholds,
        }
    }

    /// Load the artifact at `path`, degrading on failure rather than
    /// returning an error. A load failure must not take the product down;
    /// the demo path stays available.
    pub fn from_artifact_path(path: &Path, thresholds: Thresholds) -> Self {
        match ModelArtifact::load(path) {
            Ok(artifact) => Self::new(RiskClassifier::new(Arc::new(artifact)), thresholds),
            Err(error) => {
                warn!(path = %path.display(), %error, "model load failed, running degraded");
                Self::degraded(error.to_string(), thresholds)
            }
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.classifier.is_none()
    }

    /// Why the service is degraded, when it is.
    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded_reason.as_deref()
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Run the full pipeline for one panel: inference, tier mapping,
    /// recommendation lookup, normalcy checks and gauge data.
    ///
    /// # Errors
    ///
    /// [`PadmError::ModelUnavailable`] when degraded, plus anything
    /// [`RiskClassifier::classify`] reports.
    pub fn assess(&self, panel: &LabPanel) -> Result<AssessmentReport> {
        let classifier =
            self.classifier
                .as_ref()
                .ok_or_else(|| PadmError::ModelUnavailable {
                    reason: self
                        .degraded_reason
                        .clone()
                        .unwrap_or_else(|| "no model configured".to_string()),
                })?;
        let probability = classifier.classify(panel)?;
        build_report(panel, probability, &self.thresholds)
    }

    /// Run everything except inference, with a caller-supplied
    /// probability. This is the degraded-mode demo path and works whether
    /// or not a model is loaded.
    pub fn assess_with_probability(
        &self,
        panel: &LabPanel,
        probability: f64,
    ) -> Result<AssessmentReport> {
        panel.validate()?;
        build_report(panel, probability, &self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padm_model::RiskTier;

    struct FixedModel(f64);

    impl ProbabilityModel for FixedModel {
        fn predict_probability(&self, _panel: &LabPanel) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct RejectingModel;

    impl ProbabilityModel for RejectingModel {
        fn predict_probability(&self, _panel: &LabPanel) -> Result<f64> {
            Err(PadmError::Inference {
                message: "unexpected input shape".to_string(),
            })
        }
    }

    fn panel() -> LabPanel {
        LabPanel::new(18.5, 55.0, 3.2, 12.5).unwrap()
    }

    #[test]
    fn test_classify_rejects_out_of_range_model_output() {
        let classifier = RiskClassifier::new(Arc::new(FixedModel(1.2)));
        let err = classifier.classify(&panel()).unwrap_err();
        assert!(matches!(err, PadmError::Inference { .. }));
    }

    #[test]
    fn test_inference_error_propagates_without_fallback() {
        let assessor = Assessor::new(
            RiskClassifier::new(Arc::new(RejectingModel)),
            Thresholds::default(),
        );
        let err = assessor.assess(&panel()).unwrap_err();
        assert!(matches!(err, PadmError::Inference { .. }));
    }

    #[test]
    fn test_degraded_assess_reports_model_unavailable() {
        let assessor = Assessor::degraded("file not found", Thresholds::default());
        assert!(assessor.is_degraded());
        assert_eq!(assessor.degraded_reason(), Some("file not found"));
        let err = assessor.assess(&panel()).unwrap_err();
        assert!(matches!(err, PadmError::ModelUnavailable { .. }));
    }

    #[test]
    fn test_degraded_demo_path_still_works() {
        let assessor = Assessor::degraded("file not found", Thresholds::default());
        let report = assessor.assess_with_probability(&panel(), 0.75).unwrap();
        assert_eq!(report.assessment.tier, RiskTier::High);
    }
}
