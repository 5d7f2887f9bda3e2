//! Reference intervals and parameter normalcy flagging.
//!
//! Flags are for display only. An abnormal flag never feeds back into the
//! probability computation; the classifier sees raw values.

use padm_model::{LabPanel, LabParameter, ParameterCheck};

/// Reference interval for a parameter. Inclusive on both ends: a value
/// exactly on a bound counts as normal.
pub fn normal_range(parameter: LabParameter) -> (f64, f64) {
    match parameter {
        LabParameter::Pt => (11.0, 13.5),
        LabParameter::Aptt => (25.0, 35.0),
        LabParameter::DDimer => (0.0, 0.5),
        LabParameter::Mpv => (7.5, 11.5),
    }
}

/// Flag one value against its reference interval.
pub fn check_value(parameter: LabParameter, value: f64) -> ParameterCheck {
    let (normal_min, normal_max) = normal_range(parameter);
    ParameterCheck {
        parameter,
        value,
        normal_min,
        normal_max,
        is_abnormal: value < normal_min || value > normal_max,
    }
}

/// Flag every panel value, in the fixed panel order.
pub fn check_panel(panel: &LabPanel) -> Vec<ParameterCheck> {
    LabParameter::ORDERED
        .iter()
        .map(|&parameter| check_value(parameter, panel.value(parameter)))
        .collect()
}
