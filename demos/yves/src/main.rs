//! yves — the four-peak stochastic hill-climbing experiment.
//!
//! Drops one or more climbers at the origin of `MountainRange::yves()`,
//! climbs for a fixed number of steps, writes every trajectory to disk, and
//! prints how close each climber stayed to the tallest peak.
//!
//! ```text
//! RUST_LOG=debug cargo run --release -p yves -- --climbers 4 --format parquet
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use hc_core::{ClimbConfig, ClimberId, Position};
use hc_output::{
    CsvWriter, ParquetWriter, Trajectory, TrajectorySummary, TrajectoryWriter, DWELL_BINS,
    write_history,
};
use hc_policy::{ClimbOutcome, Ensemble, LogObserver};
use hc_surface::MountainRange;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Parquet,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Parquet => "parquet",
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Stochastic hill climbing on the four-peak Yves landscape")]
struct Cli {
    /// Steps per climber.
    #[arg(long, default_value_t = 40_000)]
    steps: u64,

    /// Distance moved per step; also sets the noise level (std dev 1/step).
    #[arg(long, default_value_t = 0.05)]
    step_size: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of independent climbers.
    #[arg(long, default_value_t = 1)]
    climbers: usize,

    /// Worker threads (all logical cores if omitted).
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory.
    #[arg(long, default_value = "output/yves")]
    out: PathBuf,

    /// JSON `ClimbConfig`; replaces the step, seed, climber and thread flags.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Log progress every N steps (0 = start and end only).
    #[arg(long, default_value_t = 10_000)]
    log_interval: u64,
}

impl Cli {
    fn climb_config(&self) -> Result<ClimbConfig> {
        match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(ClimbConfig {
                start:       Position::ORIGIN,
                step_size:   self.step_size,
                steps:       self.steps,
                seed:        self.seed,
                climbers:    self.climbers,
                num_threads: self.threads,
            }),
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn trajectory_path(dir: &Path, climber: ClimberId, climbers: usize, format: Format) -> PathBuf {
    let stem = if climbers == 1 {
        "yves".to_owned()
    } else {
        format!("yves_{}", climber.0)
    };
    dir.join(format!("{stem}.{}", format.extension()))
}

fn write_outcome(outcome: &ClimbOutcome, path: &Path, format: Format) -> Result<()> {
    let mut writer: Box<dyn TrajectoryWriter> = match format {
        Format::Csv => Box::new(CsvWriter::new(path)?),
        Format::Parquet => Box::new(ParquetWriter::new(path)?),
    };
    write_history(outcome.agent.history(), writer.as_mut())
        .with_context(|| format!("writing {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.climb_config()?;
    let range = MountainRange::yves();
    let peak = range.tallest_peak().context("landscape has no peaks")?;

    println!("=== yves: stochastic hill climber ===");
    println!(
        "Climbers: {}  |  Steps: {}  |  Step size: {}  |  Seed: {}",
        config.climbers, config.steps, config.step_size, config.seed
    );
    println!("Tallest peak at {peak}");
    println!();

    let ensemble = Ensemble::new(config, range.into_shared())?;
    let interval = cli.log_interval;

    let t0 = Instant::now();
    let outcomes = ensemble.run_with(|id| LogObserver::new(format!("climber {}", id.0), interval))?;
    let elapsed = t0.elapsed();
    println!("Climb complete in {:.3} s", elapsed.as_secs_f64());

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating {}", cli.out.display()))?;

    println!();
    println!(
        "{:<8} {:<26} {:<10} {:<8} {:<10} {:<18} {:<18}",
        "Climber", "Final position", "Utility", "Moves", "Mean dist", "Modal x bin", "Modal y bin"
    );
    println!("{}", "-".repeat(104));

    for outcome in &outcomes {
        let path = trajectory_path(&cli.out, outcome.climber, ensemble.config().climbers, cli.format);
        write_outcome(outcome, &path, cli.format)?;
        log::debug!("wrote {}", path.display());

        let agent = &outcome.agent;
        let trajectory = Trajectory::from_history(agent.history());
        match TrajectorySummary::compute(&trajectory, peak, DWELL_BINS) {
            Some(s) => println!(
                "{:<8} {:<26} {:<10.6} {:<8} {:<10.4} [{:>6.3}, {:>6.3})  [{:>6.3}, {:>6.3})",
                outcome.climber.0,
                agent.position().to_string(),
                agent.utility(),
                s.rows,
                s.mean_distance,
                s.modal_x.0,
                s.modal_x.1,
                s.modal_y.0,
                s.modal_y.1,
            ),
            None => println!(
                "{:<8} {:<26} {:<10.6} {:<8} (never moved)",
                outcome.climber.0,
                agent.position().to_string(),
                agent.utility(),
                0,
            ),
        }
    }

    println!();
    println!("Trajectories written to {}", cli.out.display());
    Ok(())
}
