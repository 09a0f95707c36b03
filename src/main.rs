//! Command-line interface for sandbox-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed every module with defaults (10 docs each, 1 config doc)
//! sandbox-seed seed all
//!
//! # Reset and reseed a single module with an explicit count
//! sandbox-seed seed products --clear --count 25
//!
//! # Deterministic full run, skipping config
//! sandbox-seed seed all --clear --seed 42 --skip config
//!
//! # List the registered modules
//! sandbox-seed modules
//! ```

use clap::{Parser, Subcommand};
use sandbox_seed::{ModuleSelection, Orchestrator, RunnerSettings};
use seed_core::{AggregateSummary, SeedOptions};
use seed_gateway::MemoryBackend;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "sandbox-seed")]
#[command(about = "Populate a sandbox document backend with consistent fixture data")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed one module, or "all" for every module in dependency order
    Seed {
        /// Target module name, or "all"
        target: String,

        /// Clear the target collection(s) before seeding
        #[arg(long)]
        clear: bool,

        /// Documents to generate per module (default: module-specific)
        #[arg(long)]
        count: Option<u64>,

        /// Module names to skip (comma-separated or repeated)
        #[arg(long, value_delimiter = ',')]
        skip: Vec<String>,

        /// RNG seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,

        /// Per-batch persistence timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },

    /// List the registered modules
    Modules,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let orchestrator = Orchestrator::new(Arc::new(MemoryBackend::new()))?;

    match cli.command {
        Commands::Seed {
            target,
            clear,
            count,
            skip,
            seed,
            timeout_secs,
        } => {
            let options = SeedOptions { clear, count, skip };
            let settings = RunnerSettings {
                seed,
                persist_timeout: Duration::from_secs(timeout_secs),
            };
            let orchestrator = orchestrator.with_settings(settings);

            let summary = orchestrator
                .run(&ModuleSelection::parse(&target), &options)
                .await?;
            print_summary(&summary);

            if !summary.all_succeeded() {
                anyhow::bail!("{} module(s) failed", summary.failure_count());
            }
        }
        Commands::Modules => {
            for info in sandbox_seed::list_modules(&orchestrator) {
                if info.dependencies.is_empty() {
                    println!("{:<12} default count {}", info.module, info.default_count);
                } else {
                    println!(
                        "{:<12} default count {}, depends on {}",
                        info.module,
                        info.default_count,
                        info.dependencies.join(", ")
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &AggregateSummary) {
    println!("{:<12} {:>8} {:>8} {:>10}  result", "module", "created", "deleted", "time");
    for result in summary.results() {
        let outcome = if result.success {
            "ok".to_string()
        } else {
            format!("failed: {}", result.error.as_deref().unwrap_or("unknown"))
        };
        println!(
            "{:<12} {:>8} {:>8} {:>8}ms  {}",
            result.module, result.created, result.deleted, result.duration_ms, outcome
        );
    }
    println!(
        "total: {} created across {} module(s), {} failure(s)",
        summary.total_created(),
        summary.results().len(),
        summary.failure_count()
    );
}
