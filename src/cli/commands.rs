//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::app::{AppContainer, PlanRequest, TrimPlan, TrimRequest};
use crate::cli::args::{PlanArgs, TrimArgs};
use crate::cli::{Cli, Commands};
use crate::config::{ConfigOverrides, TrimConfig};
use crate::domain::model::{Interval, RunOutcome};

/// Dispatch the parsed command line
pub async fn run(container: &dyn AppContainer, cli: Cli) -> Result<RunOutcome> {
    let config_path = cli.config.clone();
    match cli.command {
        Commands::Trim(args) => {
            info!("Executing trim command");
            trim(container, config_path.as_deref(), args).await
        }
        Commands::Plan(args) => {
            info!("Executing plan command");
            plan(container, config_path.as_deref(), args).await
        }
    }
}

/// Execute the trim command
pub async fn trim(
    container: &dyn AppContainer,
    config_path: Option<&Path>,
    args: TrimArgs,
) -> Result<RunOutcome> {
    info!("Input: {}", args.filepath.display());

    let config = load_config(container, config_path, &args.overrides()).await?;
    let hardware = args.hardware().context("Invalid hardware acceleration options")?;

    let request = TrimRequest {
        input: args.filepath,
        keep_source: args.keep,
        skip: args.interpret.skip,
        debug: args.debug,
        output_to_cwd: args.output_to_cwd,
        no_audio: args.interpret.no_audio,
        hardware,
        config,
    };

    let response = container
        .trim_interactor()
        .execute(request)
        .await
        .context("Trim failed")?;

    if let Some(output) = &response.output {
        info!("Trimmed file: {}", output.display());
    }
    if let Some(work_dir) = &response.work_dir {
        info!("Working directory kept at {}", work_dir.display());
    }
    Ok(response.outcome)
}

/// Execute the plan command
pub async fn plan(
    container: &dyn AppContainer,
    config_path: Option<&Path>,
    args: PlanArgs,
) -> Result<RunOutcome> {
    info!("Log: {}", args.log.display());

    let config = load_config(container, config_path, &args.interpret.overrides()).await?;
    let request = PlanRequest {
        log_path: args.log,
        strategy: config.decimate.strategy,
        rules: config.intervals,
        skip: args.interpret.skip,
        no_audio: args.interpret.no_audio,
    };

    let plan = container
        .plan_interactor()
        .execute(request)
        .await
        .context("Failed to plan from decimation log")?;

    if args.json {
        let json = serde_json::to_string_pretty(&PlanReport::from(&plan))
            .context("Failed to serialize plan to JSON")?;
        println!("{}", json);
    } else if let Some(script) = plan.script() {
        println!("{}", script);
    }

    Ok(plan.outcome)
}

/// Load and validate configuration, CLI > Env > File > Defaults
async fn load_config(
    container: &dyn AppContainer,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<TrimConfig> {
    let mut config = container
        .config_port()
        .load_config(config_path)
        .await
        .context("Failed to load configuration")?;
    config.apply_overrides(overrides);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// JSON view of a plan
#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    outcome: &'a RunOutcome,
    has_audio: bool,
    with_audio: bool,
    intervals: &'a [Interval],
    program: Option<String>,
}

impl<'a> From<&'a TrimPlan> for PlanReport<'a> {
    fn from(plan: &'a TrimPlan) -> Self {
        Self {
            outcome: &plan.outcome,
            has_audio: plan.summary.has_audio,
            with_audio: plan.with_audio,
            intervals: &plan.summary.intervals,
            program: plan.script(),
        }
    }
}
