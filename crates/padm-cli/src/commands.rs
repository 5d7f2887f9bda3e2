use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use padm_core::{Assessor, ModelArtifact, demo_panel};
use padm_model::{AssessmentReport, LabPanel, Thresholds};

use crate::cli::{AssessArgs, DemoArgs, ModelInfoArgs};
use crate::summary::{print_model_info, print_ranges};
use padm_cli::logging::redact_value;

const MODEL_PATH_ENV_VAR: &str = "PADM_MODEL_PATH";
const DEFAULT_MODEL_FILE: &str = "PADM_model.json";

/// Resolve the artifact path: explicit flag, then environment, then the
/// conventional file name in the working directory.
fn resolve_model_path(explicit: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path.clone();
    }
    if let Ok(path) = std::env::var(MODEL_PATH_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_MODEL_FILE)
}

pub fn run_assess(args: &AssessArgs) -> Result<AssessmentReport> {
    let span = info_span!("assess");
    let _guard = span.enter();

    let panel = LabPanel::new(args.pt, args.aptt, args.d_dimer, args.mpv)
        .context("invalid panel values")?;
    debug!(
        pt = %redact_value(&args.pt.to_string()),
        aptt = %redact_value(&args.aptt.to_string()),
        d_dimer = %redact_value(&args.d_dimer.to_string()),
        mpv = %redact_value(&args.mpv.to_string()),
        "panel accepted"
    );

    let model_path = resolve_model_path(args.model.as_ref());
    let assessor = Assessor::from_artifact_path(&model_path, Thresholds::default());
    if assessor.is_degraded() {
        let reason = assessor
            .degraded_reason()
            .unwrap_or("unknown load failure")
            .to_string();
        bail!(
            "{reason}\n\
             No risk can be computed without a model. Run `padm demo` to \
             inspect the tier and recommendation flow with the example panel."
        );
    }
    assessor
        .assess(&panel)
        .context("risk assessment failed; no risk is displayed for this panel")
}

pub fn run_demo(args: &DemoArgs) -> Result<AssessmentReport> {
    let span = info_span!("demo");
    let _guard = span.enter();

    // Demo never touches the model: it exists so the tier and
    // recommendation flow is demonstrable when no artifact is present.
    let assessor = Assessor::degraded("demo mode", Thresholds::default());
    assessor
        .assess_with_probability(&demo_panel(), args.probability)
        .context("demo assessment failed")
}

pub fn run_ranges() -> Result<()> {
    print_ranges();
    Ok(())
}

pub fn run_model_info(args: &ModelInfoArgs) -> Result<()> {
    let model_path = resolve_model_path(args.model.as_ref());
    let artifact = ModelArtifact::load(&model_path)
        .with_context(|| format!("load model artifact {}", model_path.display()))?;
    print_model_info(&artifact);
    Ok(())
}
