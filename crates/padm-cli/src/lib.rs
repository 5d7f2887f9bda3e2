//! CLI library components for the PADM risk predictor.

pub mod logging;
