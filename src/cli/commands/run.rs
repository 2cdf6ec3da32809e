use crate::core::{RunReport, SimulationReporter};
use crate::engine::RunCoordinator;
use crate::services::config::SimulationConfig;
use anyhow::{Context, Result};

/// Execute the configured run with the given reporter
pub async fn execute_run<R>(config: SimulationConfig, reporter: R) -> Result<RunReport>
where
    R: SimulationReporter + 'static,
{
    let mode = config.mode();
    let mut coordinator = RunCoordinator::new(config, reporter)
        .context("failed to set up the simulation")?;

    coordinator
        .run()
        .await
        .with_context(|| format!("{mode} run failed"))
}
