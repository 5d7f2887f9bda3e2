//! Band coverage math for a horizontal risk gauge.

use padm_model::{GaugeSegments, Thresholds};

/// Compute how far a probability fills each tier band, in percent.
///
/// The three widths partition `[0, marker]`: the low band fills first,
/// then the medium band, then the high band. Callers are expected to pass
/// a probability already validated by the threshold mapper.
pub fn gauge_segments(probability: f64, thresholds: &Thresholds) -> GaugeSegments {
    let marker = probability * 100.0;
    let low_end = thresholds.low_cut() * 100.0;
    let high_end = thresholds.high_cut() * 100.0;
    GaugeSegments {
        low: marker.min(low_end),
        medium: (marker - low_end).clamp(0.0, high_end - low_end),
        high: (marker - high_end).max(0.0),
        marker,
    }
}
