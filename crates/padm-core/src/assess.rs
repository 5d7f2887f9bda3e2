//! Assembly of a complete assessment report from one panel and one
//! probability.

use tracing::debug;

use padm_model::{AssessmentReport, LabPanel, Result, RiskAssessment, Thresholds};

use crate::gauge::gauge_segments;
use crate::recommendations::recommendations_for;
use crate::reference::check_panel;
use crate::tiering::tier_of;

/// The fixed example panel for demonstrating the tier and recommendation
/// flow when no model is available. All four values are abnormal.
pub fn demo_panel() -> LabPanel {
    LabPanel {
        pt: 18.5,
        aptt: 55.0,
        d_dimer: 3.2,
        mpv: 12.5,
    }
}

/// Derive the tier, guidance, normalcy flags and gauge data for an
/// already-computed probability.
///
/// # Errors
///
/// Returns [`padm_model::PadmError::InvalidProbability`] when the
/// probability is outside [0, 1].
pub fn build_report(
    panel: &LabPanel,
    probability: f64,
    thresholds: &Thresholds,
) -> Result<AssessmentReport> {
    let tier = tier_of(probability, thresholds)?;
    debug!(probability, tier = %tier, "assembled assessment report");
    Ok(AssessmentReport {
        panel: *panel,
        assessment: RiskAssessment { probability, tier },
        recommendations: recommendations_for(tier),
        checks: check_panel(panel),
        gauge: gauge_segments(probability, thresholds),
    })
}
