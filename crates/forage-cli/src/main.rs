//! Forage CLI.
//!
//! - `forage run` - run scripted episodes in the kinematic harness
//! - `forage check-config` - load and validate a config file
//! - `forage init` - write a default config file

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use forage_agent::{CategoryCatalog, ForageConfig};
use forage_cli::scripted::NodeLayout;
use forage_cli::{default_categories, load_run_config, run, RunOptions};

#[derive(Parser)]
#[command(name = "forage")]
#[command(about = "Foraging-and-delivery agent harness", version)]
struct Cli {
    /// Config file (YAML); defaults apply when it does not exist
    #[arg(short, long, global = true, default_value = "forage.yaml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run episodes with a scripted policy
    Run {
        #[arg(long, default_value_t = 1)]
        episodes: u32,

        /// Decision steps per episode
        #[arg(long, default_value_t = 3000)]
        steps: u32,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Resource nodes to generate
        #[arg(long, default_value_t = 6)]
        nodes: u32,

        /// Force training rewards and randomized spawns on
        #[arg(long, conflicts_with = "eval")]
        training: bool,

        /// Force training mode off
        #[arg(long)]
        eval: bool,

        /// Write trace events to this file as JSON lines
        #[arg(long)]
        trace: Option<PathBuf>,

        /// Print episode summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the config file
    CheckConfig,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    if cli.json_logs {
        fmt().json().with_env_filter(filter).with_target(false).init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }

    match cli.command {
        Commands::Run {
            episodes,
            steps,
            seed,
            nodes,
            training,
            eval,
            trace,
            json,
        } => {
            let mode = if training {
                Some(true)
            } else if eval {
                Some(false)
            } else {
                None
            };
            let config = load_run_config(&cli.config, mode)?;

            let options = RunOptions {
                episodes,
                steps,
                seed,
                layout: NodeLayout {
                    count: nodes,
                    ..NodeLayout::default()
                },
                trace,
                ..RunOptions::default()
            };
            run_episodes(&config, &options, json)
        }
        Commands::CheckConfig => check_config(&cli.config),
        Commands::Init { force } => init_config(&cli.config, force),
    }
}

fn run_episodes(config: &ForageConfig, options: &RunOptions, json: bool) -> Result<()> {
    tracing::info!(
        episodes = options.episodes,
        steps = options.steps,
        seed = options.seed,
        training = config.agent.training_mode,
        "starting run"
    );
    let summaries = run(config, options)?;

    if json {
        for summary in &summaries {
            println!("{}", serde_json::to_string(summary)?);
        }
        return Ok(());
    }

    println!("Episode  Reward     Collected  Drained  Delivered");
    for s in &summaries {
        println!(
            "{:>7}  {:>9.4}  {:>9.2}  {:>7}  {:>9}",
            s.episode, s.reward, s.collected, s.drained, s.delivered
        );
    }
    Ok(())
}

fn check_config(path: &Path) -> Result<()> {
    let config = ForageConfig::load(path)
        .with_context(|| format!("config check failed for {}", path.display()))?;
    let catalog = CategoryCatalog::from_config(&config.categories);

    println!("Config OK: {}", path.display());
    println!(
        "  training: {}, delivery: {}",
        config.agent.training_mode, config.agent.delivery_enabled
    );
    println!("  area diameter: {}", config.environment.area_diameter);
    println!("  categories: {}", catalog.len());
    for category in catalog.categories() {
        println!("    {} {}", category, catalog.name(category).unwrap_or("?"));
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = ForageConfig {
        version: Some("1".to_string()),
        categories: default_categories(),
        ..ForageConfig::default()
    };
    let yaml = config.to_yaml()?;
    std::fs::write(path, format!("# Forage agent configuration\n\n{yaml}"))
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    println!();
    println!("Next steps:");
    println!("  forage check-config");
    println!("  forage run --episodes 3");
    Ok(())
}
