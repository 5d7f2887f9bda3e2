//! Probability-to-tier mapping.

use padm_model::{PadmError, Result, RiskTier, Thresholds};

/// Map a probability to its risk tier.
///
/// Interval semantics are exact and clinically significant:
/// `[0, low_cut)` is Low, `[low_cut, high_cut]` is Medium and
/// `(high_cut, 1]` is High. A probability sitting exactly on either cut
/// point is Medium.
///
/// # Errors
///
/// Returns [`PadmError::InvalidProbability`] for NaN or any value outside
/// `[0, 1]`. Out-of-range probabilities are a caller contract violation
/// and are never clamped.
pub fn tier_of(probability: f64, thresholds: &Thresholds) -> Result<RiskTier> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(PadmError::InvalidProbability { value: probability });
    }
    if probability < thresholds.low_cut() {
        Ok(RiskTier::Low)
    } else if probability <= thresholds.high_cut() {
        Ok(RiskTier::Medium)
    } else {
        Ok(RiskTier::High)
    }
}
