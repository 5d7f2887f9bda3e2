//! PADM risk classification core.
//!
//! Four request/response components over one read-only loaded model:
//! the risk classifier, the threshold mapper, the recommendation lookup
//! and the parameter normalcy checker, plus the artifact loader and the
//! [`Assessor`] service that strings them together.

pub mod artifact;
pub mod assess;
pub mod classifier;
pub mod gauge;
pub mod recommendations;
pub mod reference;
pub mod tiering;

pub use artifact::{ArtifactError, Calibration, ModelArtifact, ValidationMetrics};
pub use assess::{build_report, demo_panel};
pub use classifier::{Assessor, ProbabilityModel, RiskClassifier};
pub use gauge::gauge_segments;
pub use recommendations::recommendations_for;
pub use reference::{check_panel, check_value, normal_range};
pub use tiering::tier_of;
