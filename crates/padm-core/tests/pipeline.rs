//! End-to-end assessment pipeline tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use padm_core::{Assessor, ModelArtifact, ProbabilityModel, RiskClassifier, demo_panel};
use padm_model::{LabPanel, PadmError, Result, RiskTier, Thresholds};

struct StubModel(f64);

impl ProbabilityModel for StubModel {
    fn predict_probability(&self, _panel: &LabPanel) -> Result<f64> {
        Ok(self.0)
    }
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn stub_model_at_075_yields_high_tier_report() {
    let assessor = Assessor::new(
        RiskClassifier::new(Arc::new(StubModel(0.75))),
        Thresholds::default(),
    );
    let report = assessor.assess(&demo_panel()).expect("assessment");

    assert_eq!(report.assessment.tier, RiskTier::High);
    assert_eq!(report.assessment.probability, 0.75);
    assert!(report.recommendations.title.contains("High Risk"));
    assert!(
        report
            .recommendations
            .actions
            .iter()
            .any(|action| action.contains("Urgent consultation"))
    );
    // The demo panel is abnormal across the board.
    assert!(report.checks.iter().all(|check| check.is_abnormal));
}

#[test]
fn low_probability_report_has_no_immediate_considerations() {
    let assessor = Assessor::new(
        RiskClassifier::new(Arc::new(StubModel(0.1))),
        Thresholds::default(),
    );
    let panel = LabPanel::new(12.0, 30.0, 0.5, 10.0).unwrap();
    let report = assessor.assess(&panel).expect("assessment");

    assert_eq!(report.assessment.tier, RiskTier::Low);
    assert!(report.recommendations.immediate_considerations.is_none());
    assert!(report.checks.iter().all(|check| !check.is_abnormal));
}

#[test]
fn missing_artifact_degrades_without_raising() {
    let assessor = Assessor::from_artifact_path(
        Path::new("tests/fixtures/does-not-exist.json"),
        Thresholds::default(),
    );
    assert!(assessor.is_degraded());
    assert!(assessor.degraded_reason().is_some());

    // The demo flow still runs end to end.
    let report = assessor
        .assess_with_probability(&demo_panel(), 0.75)
        .expect("demo assessment");
    assert_eq!(report.assessment.tier, RiskTier::High);

    // Real classification refuses with the dedicated error.
    let err = assessor.assess(&demo_panel()).unwrap_err();
    assert!(matches!(err, PadmError::ModelUnavailable { .. }));
}

#[test]
fn artifact_fixture_loads_and_classifies() {
    let artifact = ModelArtifact::load(&fixture_path("padm-v1.json")).expect("load fixture");
    assert_eq!(artifact.name, "PADM");
    assert_eq!(artifact.features, ["PT", "APTT", "D-Dimer", "MPV"]);
    let metrics = artifact.metrics.expect("metrics recorded");
    assert_eq!(metrics.auc, 0.904);

    let assessor = Assessor::from_artifact_path(&fixture_path("padm-v1.json"), Thresholds::default());
    assert!(!assessor.is_degraded());
    let report = assessor.assess(&demo_panel()).expect("assessment");
    assert!((0.0..=1.0).contains(&report.assessment.probability));
}

#[test]
fn malformed_artifact_degrades_with_reason() {
    let assessor = Assessor::from_artifact_path(
        &fixture_path("padm-bad-features.json"),
        Thresholds::default(),
    );
    assert!(assessor.is_degraded());
    let reason = assessor.degraded_reason().unwrap();
    assert!(reason.contains("features"));
}
