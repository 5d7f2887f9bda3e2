//! Risk tiers and the probability cut points that define them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PadmError, Result};

/// Discretized DIC risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Human-readable risk label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }

    /// Stable category id for downstream consumers (0=Low, 1=Medium, 2=High).
    pub fn category_id(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Medium => 1,
            RiskTier::High => 2,
        }
    }

    /// Probability-band summary shown alongside the tier.
    pub fn band_description(&self) -> &'static str {
        match self {
            RiskTier::Low => "Probability < 22.2% - Routine monitoring recommended",
            RiskTier::Medium => "Probability 22.2% - 64.0% - Increased vigilance required",
            RiskTier::High => "Probability > 64.0% - Urgent intervention needed",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two fixed probability cut points separating the three tiers.
///
/// Intervals are `[0, low_cut)` Low, `[low_cut, high_cut]` Medium and
/// `(high_cut, 1]` High. Both cut points belong to Medium; this boundary
/// placement matches the validated clinical model and must not change
/// without domain-expert sign-off, since it moves patients sitting exactly
/// on a cut point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    low_cut: f64,
    high_cut: f64,
}

impl Thresholds {
    /// Build a threshold pair, enforcing `0 < low < high < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`PadmError::InvalidThresholds`] when the ordering invariant
    /// does not hold or either cut is non-finite.
    pub fn new(low_cut: f64, high_cut: f64) -> Result<Self> {
        let ordered = low_cut.is_finite()
            && high_cut.is_finite()
            && 0.0 < low_cut
            && low_cut < high_cut
            && high_cut < 1.0;
        if !ordered {
            return Err(PadmError::InvalidThresholds {
                low: low_cut,
                high: high_cut,
            });
        }
        Ok(Self { low_cut, high_cut })
    }

    pub fn low_cut(&self) -> f64 {
        self.low_cut
    }

    pub fn high_cut(&self) -> f64 {
        self.high_cut
    }
}

impl Default for Thresholds {
    /// The validated PADM cut points.
    fn default() -> Self {
        Self {
            low_cut: 0.222,
            high_cut: 0.64,
        }
    }
}
