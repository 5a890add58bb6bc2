use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rl_tic_tac_toe::ai::ValueAgent;
use rl_tic_tac_toe::config::AppConfig;
use rl_tic_tac_toe::policy::PolicyStore;
use rl_tic_tac_toe::training::trainer::Trainer;

/// Train the tic-tac-toe value agent against a random opponent.
#[derive(Parser)]
#[command(name = "train", about = "Train a tic-tac-toe RL agent")]
struct Cli {
    /// Agent identifier (names the persisted policy file)
    #[arg(long, default_value = "p1")]
    agent_id: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of training episodes
    #[arg(long)]
    episodes: Option<usize>,

    /// Override exploration rate
    #[arg(long)]
    epsilon: Option<f64>,

    /// Override policy directory
    #[arg(long)]
    policy_dir: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore any previously saved policy and start fresh
    #[arg(long)]
    fresh: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(episodes) = cli.episodes {
        app_config.training.num_episodes = episodes;
    }
    if let Some(epsilon) = cli.epsilon {
        app_config.agent.exploration_rate = epsilon;
    }
    if let Some(policy_dir) = cli.policy_dir {
        app_config.policy.policy_dir = policy_dir;
    }
    app_config.validate().context("validating config")?;

    let mut agent = match cli.seed {
        Some(seed) => ValueAgent::with_seed(cli.agent_id.clone(), app_config.agent.clone(), seed),
        None => ValueAgent::new(cli.agent_id.clone(), app_config.agent.clone()),
    };

    if !cli.fresh {
        let store = PolicyStore::new(app_config.policy.clone());
        agent.load_policy(&store);
        if !agent.policy().is_empty() {
            println!(
                "Loaded existing policy for '{}' ({} states)",
                agent.id(),
                agent.policy().len()
            );
        }
    }

    let trainer = Trainer::new(app_config.training.clone(), app_config.policy.clone());
    trainer.train(&mut agent).context("training")?;

    Ok(())
}
