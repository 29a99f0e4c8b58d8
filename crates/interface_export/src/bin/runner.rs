//! Resubmission pipeline runner.
//!
//! Reads a JSON file of raw claim records, runs the resubmission pipeline,
//! and writes the run artifacts.
//!
//! Configuration comes from `PIPELINE_*` environment variables (and a
//! `.env` file when present); a first command-line argument overrides the
//! input path.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_resubmission::Pipeline;
use interface_export::{read_records, ArtifactWriter, RunnerConfig};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = RunnerConfig::from_env().context("loading runner configuration")?;
    if let Some(path) = std::env::args().nth(1) {
        config.input_path = path;
    }

    init_tracing(&config.log_level);

    tracing::info!(
        input = %config.input_path,
        source = %config.source,
        mode = %config.classifier_mode,
        "starting resubmission run"
    );

    let records = read_records(&config.input_path)
        .with_context(|| format!("reading records from {}", config.input_path))?;

    let pipeline = Pipeline::new(config.pipeline_config()?);
    let outcome = pipeline.run(records, &config.source)?;

    let writer = ArtifactWriter::new(&config.artifacts_dir);
    let paths = writer.write_all(&outcome)?;

    tracing::info!(
        run_id = %outcome.run_id,
        processed = outcome.metrics.processed,
        flagged = outcome.metrics.flagged,
        rejected = outcome.metrics.rejected,
        candidates_file = %paths.candidates.display(),
        "resubmission run finished"
    );

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
