//! Coagulation panel parameters and patient input values.
//!
//! The PADM model consumes exactly four lab values in a fixed,
//! model-agreed order: PT, APTT, D-Dimer, MPV. `LabParameter` is the
//! closed set of those parameters; `LabPanel` is one patient's values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PadmError, Result};

/// One of the four coagulation parameters the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabParameter {
    /// Prothrombin Time (seconds) - measures the extrinsic pathway.
    Pt,
    /// Activated Partial Thromboplastin Time (seconds) - measures the
    /// intrinsic pathway.
    Aptt,
    /// D-Dimer (mg/L) - fibrin degradation product, fibrinolysis marker.
    DDimer,
    /// Mean Platelet Volume (fL) - platelet activation marker.
    Mpv,
}

impl LabParameter {
    /// All parameters in the model-agreed feature order.
    ///
    /// This order is a contract with the trained artifact; it must match
    /// the feature list recorded in the model file.
    pub const ORDERED: [LabParameter; 4] = [
        LabParameter::Pt,
        LabParameter::Aptt,
        LabParameter::DDimer,
        LabParameter::Mpv,
    ];

    /// Returns the canonical short name as it appears in the model artifact
    /// and in clinical reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabParameter::Pt => "PT",
            LabParameter::Aptt => "APTT",
            LabParameter::DDimer => "D-Dimer",
            LabParameter::Mpv => "MPV",
        }
    }

    /// Returns the spelled-out clinical name.
    pub fn long_name(&self) -> &'static str {
        match self {
            LabParameter::Pt => "Prothrombin Time",
            LabParameter::Aptt => "Activated Partial Thromboplastin Time",
            LabParameter::DDimer => "D-Dimer",
            LabParameter::Mpv => "Mean Platelet Volume",
        }
    }

    /// Returns the unit the value is expressed in.
    pub fn unit(&self) -> &'static str {
        match self {
            LabParameter::Pt | LabParameter::Aptt => "s",
            LabParameter::DDimer => "mg/L",
            LabParameter::Mpv => "fL",
        }
    }

    /// Input-widget metadata for presentation layers.
    ///
    /// The maxima are entry caps for data-entry sanity only; the classifier
    /// itself places no upper bound on values.
    pub fn input_spec(&self) -> InputSpec {
        match self {
            LabParameter::Pt => InputSpec {
                min: 0.0,
                max: 100.0,
                default: 12.0,
                step: 0.1,
            },
            LabParameter::Aptt => InputSpec {
                min: 0.0,
                max: 200.0,
                default: 30.0,
                step: 0.1,
            },
            LabParameter::DDimer => InputSpec {
                min: 0.0,
                max: 50.0,
                default: 0.5,
                step: 0.1,
            },
            LabParameter::Mpv => InputSpec {
                min: 0.0,
                max: 20.0,
                default: 10.0,
                step: 0.1,
            },
        }
    }
}

impl fmt::Display for LabParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LabParameter {
    type Err = String;

    /// Parse a parameter name. Accepts the canonical short names in any
    /// case, with `DDIMER`/`D_DIMER` tolerated for `D-Dimer`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "PT" => Ok(LabParameter::Pt),
            "APTT" => Ok(LabParameter::Aptt),
            "D-DIMER" | "DDIMER" | "D_DIMER" => Ok(LabParameter::DDimer),
            "MPV" => Ok(LabParameter::Mpv),
            _ => Err(format!("Unknown lab parameter: {s}")),
        }
    }
}

/// Presentation metadata for a parameter input widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

/// One patient's coagulation panel: the four raw values handed to the
/// classifier, unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabPanel {
    /// Prothrombin Time in seconds.
    pub pt: f64,
    /// Activated Partial Thromboplastin Time in seconds.
    pub aptt: f64,
    /// D-Dimer in mg/L.
    pub d_dimer: f64,
    /// Mean Platelet Volume in fL.
    pub mpv: f64,
}

impl LabPanel {
    /// Build a panel, validating every value.
    ///
    /// # Errors
    ///
    /// Returns [`PadmError::InvalidPanel`] if any value is non-finite or
    /// negative.
    pub fn new(pt: f64, aptt: f64, d_dimer: f64, mpv: f64) -> Result<Self> {
        let panel = Self {
            pt,
            aptt,
            d_dimer,
            mpv,
        };
        panel.validate()?;
        Ok(panel)
    }

    /// Check every value is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for parameter in LabParameter::ORDERED {
            let value = self.value(parameter);
            if !value.is_finite() {
                return Err(PadmError::InvalidPanel {
                    parameter,
                    value,
                    reason: "value must be finite".to_string(),
                });
            }
            if value < 0.0 {
                return Err(PadmError::InvalidPanel {
                    parameter,
                    value,
                    reason: "value must be non-negative".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Value of a single parameter.
    pub fn value(&self, parameter: LabParameter) -> f64 {
        match parameter {
            LabParameter::Pt => self.pt,
            LabParameter::Aptt => self.aptt,
            LabParameter::DDimer => self.d_dimer,
            LabParameter::Mpv => self.mpv,
        }
    }

    /// Values in the model-agreed feature order.
    pub fn feature_values(&self) -> [f64; 4] {
        [self.pt, self.aptt, self.d_dimer, self.mpv]
    }
}
