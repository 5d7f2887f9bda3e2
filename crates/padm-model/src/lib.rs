pub mod assessment;
pub mod error;
pub mod panel;
pub mod tier;

pub use assessment::{
    AssessmentReport, GaugeSegments, ParameterCheck, RecommendationBundle, RiskAssessment,
};
pub use error::{PadmError, Result};
pub use panel::{InputSpec, LabPanel, LabParameter};
pub use tier::{RiskTier, Thresholds};
