use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use u_rota::config::RotaConfig;
use u_rota::demo_data::demo_roster;
use u_rota::models::WorkerRegistry;
use u_rota::scheduler::{RotaKpi, RotaOutcome, RotaScheduler};
use u_rota::validation::audit_schedule;

#[derive(Parser, Debug)]
#[command(name = "u-rota")]
#[command(about = "Build a weekly day/night rota from a worker roster")]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Roster file (JSON); overrides the config's roster
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Use the built-in demo roster
    #[arg(long, conflicts_with = "roster")]
    demo: bool,

    /// Print the schedule and remaining quotas as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("u_rota=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> u_rota::Result<()> {
    let config = match &args.config {
        Some(path) => RotaConfig::load(path)?,
        None => RotaConfig::default(),
    };

    let mut roster = match (args.demo, args.roster.as_ref().or(config.roster.as_ref())) {
        (false, Some(path)) => WorkerRegistry::load_json(path)?,
        _ => demo_roster(),
    };

    let scheduler = RotaScheduler::from_config(&config);
    let schedule = scheduler.schedule(&mut roster)?;

    for violation in audit_schedule(&schedule, &roster, scheduler.rules()) {
        tracing::warn!(kind = ?violation.violation_type, "{}", violation.message);
    }

    if args.json {
        let outcome = RotaOutcome {
            schedule,
            workers: roster,
        };
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print!("{schedule}");
    let kpi = RotaKpi::calculate(&schedule, &roster);
    println!(
        "\nfilled {}/{} ({:.0}%)",
        kpi.filled_cells,
        kpi.total_cells,
        kpi.coverage_rate * 100.0
    );
    for load in &kpi.worker_loads {
        println!(
            "  {:<16} day {} night {}  (left: day {} night {})",
            load.worker_id.as_str(),
            load.day_shifts,
            load.night_shifts,
            load.remaining.day,
            load.remaining.night
        );
    }
    Ok(())
}
