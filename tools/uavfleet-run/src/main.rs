//! uavfleet-run: run a fleet simulation from parameter and command files.
//!
//! Usage:
//!   uavfleet-run --params SimParams.ini --commands SimCmds.txt --output-dir traces
//!   uavfleet-run --summary run.json --quiet

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use uavfleet_core::constants::{DEFAULT_COMMANDS_FILE, DEFAULT_PARAMS_FILE};
use uavfleet_io::{load_commands, load_params, report, save_summary, RunSummary, TraceDirectory};
use uavfleet_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "uavfleet-run", about = "Fixed-step UAV fleet waypoint simulation")]
struct Cli {
    /// Key=Value parameter file
    #[arg(long, default_value = DEFAULT_PARAMS_FILE)]
    params: PathBuf,
    /// Command list, one `time id x y` per line
    #[arg(long, default_value = DEFAULT_COMMANDS_FILE)]
    commands: PathBuf,
    /// Directory receiving the UAV<id>.txt traces
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Also write a JSON run summary
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Skip the configuration, command and fleet reports
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let params = load_params(&cli.params)
        .with_context(|| format!("loading parameters from {}", cli.params.display()))?;
    let list = load_commands(&cli.commands)
        .with_context(|| format!("loading commands from {}", cli.commands.display()))?;

    if !cli.quiet {
        info!("\n{}", report::configuration(&params));
        info!("\n{}", report::commands(&list.commands));
    }

    let mut engine = SimulationEngine::new(params.clone(), list.commands.iter().copied())
        .context("invalid simulation configuration")?;

    if !cli.quiet {
        info!("\n{}", report::fleet(engine.fleet()));
    }

    let mut sink = TraceDirectory::new(&cli.output_dir);
    let stats = engine.run(&mut sink).context("simulation run failed")?;

    let summary = RunSummary {
        params,
        commands_accepted: engine.schedule().len(),
        commands_skipped: list.skipped,
        commands_dropped: engine.schedule().dropped(),
        stats,
        final_state: engine.snapshot(),
    };

    if let Some(path) = &cli.summary {
        save_summary(&summary, path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!(path = %path.display(), "Summary written");
    }

    info!(
        output_dir = %cli.output_dir.display(),
        ticks = stats.ticks,
        records = stats.records,
        "Traces written"
    );
    Ok(summary)
}
