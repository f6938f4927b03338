//! Print a CSV comparison of Tarjan and Kosaraju over the size tiers
//!
//! Run with: cargo run --release --bin scc-compare -- --tier large --parallel
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=scc_bench=debug`).

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use scc_bench::compare::DEFAULT_SEED;
use scc_bench::{
    CompareConfig, ComparisonRow, RowSpec, SizeTier, TrackingAllocator, CSV_HEADER,
};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Tier {
    Small,
    Medium,
    Large,
}

impl From<Tier> for SizeTier {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Small => Self::small(),
            Tier::Medium => Self::medium(),
            Tier::Large => Self::large(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "scc-compare",
    version,
    about = "Compare runtime and peak memory of Tarjan and Kosaraju SCC algorithms"
)]
struct Cli {
    /// Base seed; row i uses seed + i
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Tier to run (repeatable); all tiers when omitted
    #[arg(long = "tier", value_enum)]
    tiers: Vec<Tier>,

    /// Measure rows concurrently on the blocking thread pool
    #[arg(long)]
    parallel: bool,

    /// Fail if the two algorithms disagree on any partition
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn config(&self) -> CompareConfig {
        let mut config = CompareConfig {
            seed: self.seed,
            ..CompareConfig::default()
        };
        if !self.tiers.is_empty() {
            config.tiers = self.tiers.iter().copied().map(SizeTier::from).collect();
        }
        config
    }
}

async fn run_rows(rows: Vec<RowSpec>, parallel: bool) -> Result<Vec<ComparisonRow>> {
    if !parallel {
        return rows
            .iter()
            .map(|spec| {
                spec.run()
                    .with_context(|| format!("{} row with {} nodes", spec.category, spec.nodes))
            })
            .collect();
    }

    // Each row runs on its own blocking thread; allocation accounting is
    // per thread, so the rows do not see each other's memory.
    let handles: Vec<_> = rows
        .into_iter()
        .map(|spec| (spec, tokio::task::spawn_blocking(move || spec.run())))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (spec, handle) in handles {
        let row = handle
            .await
            .context("measurement task panicked")?
            .with_context(|| format!("{} row with {} nodes", spec.category, spec.nodes))?;
        results.push(row);
    }
    Ok(results)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    let rows = config.rows();
    log::info!(
        "measuring {} graphs (seed {}, parallel: {})",
        rows.len(),
        config.seed,
        cli.parallel
    );

    if !scc_bench::measure::is_tracking() {
        log::warn!("allocation tracking inactive; memory columns will be 0");
    }

    let results = run_rows(rows, cli.parallel).await?;

    println!("{CSV_HEADER}");
    for row in &results {
        println!("{}", row.to_csv());
    }

    if cli.check {
        if let Some(row) = results.iter().find(|row| !row.partitions_agree()) {
            bail!(
                "partitions disagree on {} graph with {} nodes",
                row.category,
                row.nodes
            );
        }
        log::info!("all {} partitions agree", results.len());
    }

    Ok(())
}
