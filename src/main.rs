use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ferrysched::demo;
use ferrysched::engine::{EngineConfig, Horizon, Synthesizer};
use ferrysched::snapshot::Snapshot;
use ferrysched::validation::{audit_schedules, validate_snapshot, AuditViolationKind};

#[derive(Debug, Parser)]
#[command(
    name = "ferrysched",
    version,
    about = "Generate ferry timetables over a planning horizon"
)]
struct Cli {
    /// Snapshot JSON file; omit to use the built-in demo network.
    #[arg(long, conflicts_with = "seed_demo")]
    data: Option<PathBuf>,

    /// Use the built-in demo network explicitly.
    #[arg(long)]
    seed_demo: bool,

    /// First day of the horizon (YYYY-MM-DD); defaults to tomorrow.
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Horizon length in days.
    #[arg(long, default_value_t = 30)]
    days: u32,

    /// Only generate for these route ids.
    #[arg(long, value_delimiter = ',')]
    routes: Vec<String>,

    /// Suppress curfew and spacing checks in the primary pass.
    #[arg(long)]
    relaxed: bool,

    /// Add reverse legs for one-way routes before generating.
    #[arg(long)]
    bidirectional: bool,

    /// Drop auto-generated schedules inside the horizon before running.
    #[arg(long)]
    reset_schedules: bool,

    /// Drop every schedule inside the horizon, manual entries included.
    #[arg(long, conflicts_with = "reset_schedules")]
    reset_all: bool,

    /// Randomize demo fares per tier instead of flat per-km pricing.
    #[arg(long)]
    realistic_fares: bool,

    /// RNG seed for demo fares.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Audit the full timetable (existing plus created) after the run.
    #[arg(long)]
    validate: bool,

    /// Write the created schedules as JSON to this file.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if cli.days == 0 {
        bail!("--days must be at least 1");
    }

    let mut snapshot = load_snapshot(&cli)?;
    if cli.bidirectional {
        snapshot.add_reverse_routes();
    }
    snapshot.finalize();

    if let Err(errors) = validate_snapshot(&snapshot) {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
        bail!("snapshot failed validation with {} error(s)", errors.len());
    }

    let start = cli
        .start
        .unwrap_or_else(|| Local::now().date_naive() + Duration::days(1));
    let horizon = Horizon::new(start, cli.days);

    if cli.reset_all || cli.reset_schedules {
        let removed = reset_horizon(&mut snapshot, horizon, cli.reset_all);
        info!(removed, all = cli.reset_all, "dropped schedules inside the horizon");
    }

    let config = EngineConfig::at(Local::now().naive_local()).relaxed(cli.relaxed);
    let filter: Option<HashSet<String>> =
        (!cli.routes.is_empty()).then(|| cli.routes.iter().cloned().collect());

    let report = Synthesizer::new(config)
        .run_filtered(&snapshot, horizon, filter.as_ref())
        .context("generation failed")?;

    print!("{report}");

    if cli.validate {
        let mut timetable = snapshot.schedules.clone();
        timetable.extend(report.created.iter().cloned());
        let violations = audit_schedules(&snapshot, &timetable);
        // Backfill sailings may sit outside curfews by design; only
        // physical violations fail the audit.
        let physical: Vec<_> = violations
            .iter()
            .filter(|v| v.kind != AuditViolationKind::CurfewViolation)
            .collect();
        for v in &violations {
            println!("{:?}: {}", v.kind, v.message);
        }
        if physical.is_empty() {
            println!("timetable audit clean ({} curfew waivers)", violations.len());
        } else {
            bail!("timetable audit found {} violation(s)", physical.len());
        }
    }

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&report.created)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), count = report.created_count(), "wrote created schedules");
    }
    Ok(())
}

/// Drops in-horizon schedules: all of them, or only engine-generated
/// ones. Returns the number removed.
fn reset_horizon(snapshot: &mut Snapshot, horizon: Horizon, all: bool) -> usize {
    let before = snapshot.schedules.len();
    snapshot
        .schedules
        .retain(|s| !horizon.contains(s.day) || !(all || s.auto_generated));
    before - snapshot.schedules.len()
}

fn load_snapshot(cli: &Cli) -> Result<Snapshot> {
    match &cli.data {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        }
        None => {
            if !cli.seed_demo {
                info!("no --data file given; using the built-in demo network");
            }
            Ok(demo::fiji_network(cli.realistic_fares, cli.seed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use ferrysched::models::Schedule;

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.schedules = vec![
            // Manual sailing inside the horizon.
            Schedule::new("f1", "r1", dt(3, 8), dt(3, 10), 40),
            // Generated sailing inside the horizon.
            Schedule::new("f1", "r1", dt(4, 8), dt(4, 10), 40).auto_generated(),
            // Generated sailing before the horizon opens.
            Schedule::new("f1", "r1", dt(1, 8), dt(1, 10), 40).auto_generated(),
        ];
        snapshot
    }

    fn horizon() -> Horizon {
        Horizon::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), 7)
    }

    #[test]
    fn test_reset_schedules_keeps_manual_entries() {
        let mut snapshot = snapshot();
        let removed = reset_horizon(&mut snapshot, horizon(), false);
        assert_eq!(removed, 1);
        let departures: Vec<NaiveDateTime> =
            snapshot.schedules.iter().map(|s| s.departure).collect();
        assert_eq!(departures, vec![dt(3, 8), dt(1, 8)]);
    }

    #[test]
    fn test_reset_all_drops_manual_entries_too() {
        let mut snapshot = snapshot();
        let removed = reset_horizon(&mut snapshot, horizon(), true);
        assert_eq!(removed, 2);
        // Only the sailing before the horizon survives.
        assert_eq!(snapshot.schedules.len(), 1);
        assert_eq!(snapshot.schedules[0].departure, dt(1, 8));
    }

    #[test]
    fn test_reset_flags_conflict() {
        assert!(Cli::try_parse_from(["ferrysched", "--reset-all", "--reset-schedules"]).is_err());
        assert!(Cli::try_parse_from(["ferrysched", "--reset-all"]).is_ok());
    }
}
