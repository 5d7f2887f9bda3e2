//! Result types crossing the crate boundary to presentation layers.
//!
//! Everything here is plain, immutable data: built once per panel,
//! serialized or rendered by the caller, then discarded.

use serde::{Deserialize, Serialize};

use crate::panel::{LabPanel, LabParameter};
use crate::tier::RiskTier;

/// The classifier output for one panel: a probability and its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Probability of the positive (DIC present) class, in [0, 1].
    pub probability: f64,
    /// Tier the probability falls in.
    pub tier: RiskTier,
}

/// One parameter's value flagged against its reference interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterCheck {
    pub parameter: LabParameter,
    pub value: f64,
    pub normal_min: f64,
    pub normal_max: f64,
    /// True when the value lies outside `[normal_min, normal_max]`.
    /// Display-only; never feeds back into classification.
    pub is_abnormal: bool,
}

/// Clinical guidance for one risk tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub tier: RiskTier,
    pub title: String,
    /// Ordered recommended actions.
    pub actions: Vec<String>,
    /// Ordered immediate considerations. Present only for [`RiskTier::High`].
    pub immediate_considerations: Option<Vec<String>>,
}

/// Band coverage for a horizontal risk gauge, all values in percent.
///
/// `low + medium + high` equals the marker position, so a renderer can draw
/// stacked band fills and a marker line without re-deriving the cut math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeSegments {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    /// Marker position: the probability as a percentage.
    pub marker: f64,
}

/// Everything one assessment produces, assembled in a single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub panel: LabPanel,
    pub assessment: RiskAssessment,
    pub recommendations: RecommendationBundle,
    /// Per-parameter normalcy flags in the fixed panel order.
    pub checks: Vec<ParameterCheck>,
    pub gauge: GaugeSegments,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes() {
        let report = AssessmentReport {
            panel: LabPanel {
                pt: 18.5,
                aptt: 55.0,
                d_dimer: 3.2,
                mpv: 12.5,
            },
            assessment: RiskAssessment {
                probability: 0.75,
                tier: RiskTier::High,
            },
            recommendations: RecommendationBundle {
                tier: RiskTier::High,
                title: "High Risk Clinical Recommendations".to_string(),
                actions: vec!["Immediate Action: Urgent consultation required".to_string()],
                immediate_considerations: Some(vec!["Acute kidney injury".to_string()]),
            },
            checks: vec![],
            gauge: GaugeSegments {
                low: 22.2,
                medium: 41.8,
                high: 11.0,
                marker: 75.0,
            },
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: AssessmentReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.assessment.tier, RiskTier::High);
        assert_eq!(round.assessment.probability, 0.75);
    }
}
