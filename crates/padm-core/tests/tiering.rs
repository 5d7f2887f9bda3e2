//! Tier mapping contract tests, including the exact boundary placement.

use proptest::prelude::*;

use padm_core::tier_of;
use padm_model::{PadmError, RiskTier, Thresholds};

fn tier(p: f64) -> RiskTier {
    tier_of(p, &Thresholds::default()).expect("probability in range")
}

#[test]
fn boundary_placement_is_exact() {
    // Both cut points belong to Medium. Patients sitting exactly on a cut
    // are triaged to the middle tier, matching the validated model.
    assert_eq!(tier(0.222), RiskTier::Medium);
    assert_eq!(tier(0.64), RiskTier::Medium);
    assert_eq!(tier(0.2219999), RiskTier::Low);
    assert_eq!(tier(0.6400001), RiskTier::High);
}

#[test]
fn out_of_range_probability_is_rejected() {
    for p in [-0.01, 1.01] {
        let err = tier_of(p, &Thresholds::default()).unwrap_err();
        assert!(matches!(err, PadmError::InvalidProbability { value } if value == p));
    }
}

#[test]
fn custom_thresholds_shift_the_bands() {
    let thresholds = Thresholds::new(0.3, 0.7).unwrap();
    assert_eq!(tier_of(0.25, &thresholds).unwrap(), RiskTier::Low);
    assert_eq!(tier_of(0.3, &thresholds).unwrap(), RiskTier::Medium);
    assert_eq!(tier_of(0.7, &thresholds).unwrap(), RiskTier::Medium);
    assert_eq!(tier_of(0.71, &thresholds).unwrap(), RiskTier::High);
}

proptest! {
    #[test]
    fn every_probability_maps_to_its_interval(p in 0.0f64..=1.0) {
        let thresholds = Thresholds::default();
        let tier = tier_of(p, &thresholds).unwrap();
        let expected = if p < thresholds.low_cut() {
            RiskTier::Low
        } else if p <= thresholds.high_cut() {
            RiskTier::Medium
        } else {
            RiskTier::High
        };
        prop_assert_eq!(tier, expected);
    }

    #[test]
    fn mapping_is_total_over_the_unit_interval(p in 0.0f64..=1.0) {
        prop_assert!(tier_of(p, &Thresholds::default()).is_ok());
    }
}
