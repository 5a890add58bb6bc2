use crate::ai::{RandomAgent, ValueAgent};
use crate::error::TrainingError;
use crate::game::Player;
use crate::policy::{PolicyStore, PolicyStoreConfig};
use crate::training::episode::{play_eval_game, play_training_game};
use crate::training::metrics::TrainingMetrics;

/// Trainer configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub num_episodes: usize,
    pub log_interval: usize,
    pub eval_interval: usize,
    pub eval_games: usize,
    pub save_interval: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            num_episodes: 10_000,
            log_interval: 500,
            eval_interval: 1000,
            eval_games: 200,
            save_interval: 1000,
        }
    }
}

/// Trains the value agent against a random opponent, alternating which side
/// the learner takes, and flushes its policy to the store on an interval.
pub struct Trainer {
    config: TrainerConfig,
    store: PolicyStore,
}

impl Trainer {
    pub fn new(config: TrainerConfig, store_config: PolicyStoreConfig) -> Self {
        Trainer {
            config,
            store: PolicyStore::new(store_config),
        }
    }

    /// Run the full training loop.
    pub fn train(&self, agent: &mut ValueAgent) -> Result<(), TrainingError> {
        let mut metrics = TrainingMetrics::new();
        let mut opponent = RandomAgent::new();

        println!(
            "Training '{}' for {} episodes (eps: {:.3}, alpha: {:.3}, gamma: {:.3})...",
            agent.id(),
            self.config.num_episodes,
            agent.config().exploration_rate,
            agent.config().learning_rate,
            agent.config().decay_factor,
        );
        println!("-------------------------------------------");

        for episode in 1..=self.config.num_episodes {
            let learner_side = if episode % 2 == 1 { Player::X } else { Player::O };
            let result = play_training_game(agent, &mut opponent, learner_side)?;
            metrics.record_episode(result);

            if episode % self.config.log_interval == 0 {
                let window = self.config.log_interval;
                println!(
                    "Episode {}/{} | states: {} | win_rate({}): {:.1}% | draw: {:.1}% | avg_len: {:.1}",
                    episode,
                    self.config.num_episodes,
                    agent.policy().len(),
                    window,
                    metrics.win_rate(window) * 100.0,
                    metrics.draw_rate(window) * 100.0,
                    metrics.average_game_length(window),
                );
            }

            if episode % self.config.eval_interval == 0 {
                let eval_wr = self.evaluate(agent)?;
                println!(
                    "  >> Eval vs Random ({} games): {:.1}% win rate",
                    self.config.eval_games,
                    eval_wr * 100.0
                );
            }

            if episode % self.config.save_interval == 0 {
                match agent.save_policy(&self.store) {
                    Ok(path) => println!("  >> Policy saved: {}", path.display()),
                    Err(e) => eprintln!("  >> Policy save failed: {}", e),
                }
            }
        }

        println!("-------------------------------------------");
        println!(
            "Training complete. Episodes: {}, known states: {}",
            metrics.total_episodes(),
            agent.policy().len()
        );

        let final_wr = self.evaluate(agent)?;
        println!("Final eval vs Random: {:.1}% win rate", final_wr * 100.0);

        let path = agent.save_policy(&self.store)?;
        println!("Policy saved: {}", path.display());

        Ok(())
    }

    /// Evaluate greedily against a random opponent, alternating sides.
    pub fn evaluate(&self, agent: &mut ValueAgent) -> Result<f64, TrainingError> {
        let mut opponent = RandomAgent::new();
        let mut wins = 0;

        for game_idx in 0..self.config.eval_games {
            let learner_side = if game_idx % 2 == 0 { Player::X } else { Player::O };
            if let Some(true) = play_eval_game(agent, &mut opponent, learner_side)? {
                wins += 1;
            }
        }

        Ok(wins as f64 / self.config.eval_games as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ValueAgentConfig;

    fn small_trainer(dir: &std::path::Path) -> Trainer {
        Trainer::new(
            TrainerConfig {
                num_episodes: 50,
                log_interval: 50,
                eval_interval: 50,
                eval_games: 10,
                save_interval: 50,
            },
            PolicyStoreConfig {
                policy_dir: dir.to_path_buf(),
            },
        )
    }

    #[test]
    fn test_training_run_learns_states_and_saves_policy() {
        let dir = tempfile::tempdir().unwrap();
        let trainer = small_trainer(dir.path());
        let mut agent = ValueAgent::with_seed("trainee", ValueAgentConfig::default(), 5);

        trainer.train(&mut agent).unwrap();

        assert!(!agent.policy().is_empty());
        assert!(dir.path().join("policy_trainee.json").exists());
    }

    #[test]
    fn test_evaluate_returns_rate_in_unit_interval() {
        let dir = tempfile::tempdir().unwrap();
        let trainer = small_trainer(dir.path());
        let mut agent = ValueAgent::with_seed("trainee", ValueAgentConfig::default(), 5);

        let rate = trainer.evaluate(&mut agent).unwrap();
        assert!((0.0..=1.0).contains(&rate));
    }
}
