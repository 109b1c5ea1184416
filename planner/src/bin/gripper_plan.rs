//! `gripper-plan`: plan arm actions for a problem file.
//!
//! ```text
//! gripper-plan problem.json [--time-budget-ms N] [--max-aggregation]
//!              [--no-prune-reversals] [--config planner.json] [--json]
//! ```
//!
//! Prints one action label per line, or the full plan as JSON with `--json`.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gripper_planner::{plan, ConjunctionCost, PlannerConfig, PlanningProblemV1};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plan gripper actions for a blocks-world goal",
    long_about = None
)]
struct Cli {
    /// Problem file: world, object catalog, and goal formula.
    problem: PathBuf,
    /// Planner configuration file (JSON). Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Wall-clock search budget in milliseconds.
    #[arg(long)]
    time_budget_ms: Option<u64>,
    /// Combine literal estimates with max instead of sum.
    #[arg(long)]
    max_aggregation: bool,
    /// Also generate edges that undo the incoming action.
    #[arg(long)]
    no_prune_reversals: bool,
    /// Print the whole plan as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gripper_planner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let problem = PlanningProblemV1::load(&cli.problem)
        .with_context(|| format!("loading problem {}", cli.problem.display()))?;

    let plan = plan(&problem, &config).context("planning failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        for label in plan.labels() {
            println!("{label}");
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<PlannerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PlannerConfig::default(),
    };
    if let Some(ms) = cli.time_budget_ms {
        config.search.time_budget = Duration::from_millis(ms);
    }
    if cli.max_aggregation {
        config.conjunction_cost = ConjunctionCost::Max;
    }
    if cli.no_prune_reversals {
        config.prune_reversals = false;
    }
    Ok(config)
}
