use std::path::Path;

use crate::ai::ValueAgentConfig;
use crate::error::ConfigError;
use crate::policy::PolicyStoreConfig;
use crate::training::trainer::TrainerConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub agent: ValueAgentConfig,
    pub training: TrainerConfig,
    pub policy: PolicyStoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            agent: ValueAgentConfig::default(),
            training: TrainerConfig::default(),
            policy: PolicyStoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent.exploration_rate < 0.0 || self.agent.exploration_rate > 1.0 {
            return Err(ConfigError::Validation(
                "agent.exploration_rate must be in [0, 1]".into(),
            ));
        }
        if self.agent.learning_rate <= 0.0 || self.agent.learning_rate > 1.0 {
            return Err(ConfigError::Validation(
                "agent.learning_rate must be in (0, 1]".into(),
            ));
        }
        if self.agent.decay_factor <= 0.0 || self.agent.decay_factor > 1.0 {
            return Err(ConfigError::Validation(
                "agent.decay_factor must be in (0, 1]".into(),
            ));
        }
        if self.training.num_episodes == 0 {
            return Err(ConfigError::Validation(
                "training.num_episodes must be > 0".into(),
            ));
        }
        if self.training.log_interval == 0 {
            return Err(ConfigError::Validation(
                "training.log_interval must be > 0".into(),
            ));
        }
        if self.training.eval_interval == 0 {
            return Err(ConfigError::Validation(
                "training.eval_interval must be > 0".into(),
            ));
        }
        if self.training.eval_games == 0 {
            return Err(ConfigError::Validation(
                "training.eval_games must be > 0".into(),
            ));
        }
        if self.training.save_interval == 0 {
            return Err(ConfigError::Validation(
                "training.save_interval must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[agent]
exploration_rate = 0.1
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!((config.agent.exploration_rate - 0.1).abs() < 1e-9);
        // Other fields should be defaults
        assert!((config.agent.learning_rate - 0.2).abs() < 1e-9);
        assert_eq!(config.training.num_episodes, 10_000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert!((config.agent.learning_rate - default.agent.learning_rate).abs() < 1e-9);
        assert_eq!(config.training.num_episodes, default.training.num_episodes);
    }

    #[test]
    fn test_validation_rejects_zero_episodes() {
        let mut config = AppConfig::default();
        config.training.num_episodes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_epsilon_out_of_range() {
        let mut config = AppConfig::default();
        config.agent.exploration_rate = 1.5;
        assert!(config.validate().is_err());
        config.agent.exploration_rate = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_learning_rate() {
        let mut config = AppConfig::default();
        config.agent.learning_rate = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_learning_rate_above_one() {
        let mut config = AppConfig::default();
        config.agent.learning_rate = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_invalid_decay_factor() {
        let mut config = AppConfig::default();
        config.agent.decay_factor = 0.0;
        assert!(config.validate().is_err());
        config.agent.decay_factor = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_eval_games() {
        let mut config = AppConfig::default();
        config.training.eval_games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_save_interval() {
        let mut config = AppConfig::default();
        config.training.save_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.training.num_episodes, 10_000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[training]
num_episodes = 500

[agent]
draw_reward = 0.5
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.training.num_episodes, 500);
        assert!((config.agent.draw_reward - 0.5).abs() < 1e-9);
        // Others are defaults
        assert!((config.agent.win_reward - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
