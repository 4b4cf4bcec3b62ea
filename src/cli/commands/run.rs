//! Run and all command implementations

use std::path::Path;

use anyhow::Context;
use northwind_reports::{Dataset, ReportConfig, Runner, stdout_sink};
use tracing::info;

/// Load the dataset and configuration the runner works with
fn load_runner(config: Option<&Path>, data: Option<&Path>) -> anyhow::Result<Runner> {
    let config = match config {
        Some(path) => ReportConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ReportConfig::default(),
    };

    let dataset = match data {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?,
        None => Dataset::bundled().context("Failed to load bundled dataset")?,
    };

    Ok(Runner::new(dataset, config))
}

/// Handle the run command
pub fn handle_run(
    config: Option<&Path>,
    data: Option<&Path>,
    exercises: &[String],
) -> anyhow::Result<()> {
    let runner = load_runner(config, data)?;

    info!(exercises = ?exercises, "Running exercises");
    let mut sink = stdout_sink();
    runner.run_many(exercises, &mut sink)?;
    sink.flush();
    Ok(())
}

/// Handle the all command
pub fn handle_all(config: Option<&Path>, data: Option<&Path>) -> anyhow::Result<()> {
    let runner = load_runner(config, data)?;

    info!(count = runner.registry().len(), "Running all exercises");
    let mut sink = stdout_sink();
    runner.run_all(&mut sink);
    sink.flush();
    Ok(())
}
