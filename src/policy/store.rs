use std::fs;
use std::path::PathBuf;

use crate::error::PolicyError;
use crate::policy::PolicyTable;

/// Configuration for the on-disk policy store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PolicyStoreConfig {
    pub policy_dir: PathBuf,
}

impl Default for PolicyStoreConfig {
    fn default() -> Self {
        PolicyStoreConfig {
            policy_dir: PathBuf::from("policies"),
        }
    }
}

/// Saves and loads policy tables, one JSON file per agent identifier.
pub struct PolicyStore {
    config: PolicyStoreConfig,
}

impl PolicyStore {
    pub fn new(config: PolicyStoreConfig) -> Self {
        fs::create_dir_all(&config.policy_dir).ok();
        PolicyStore { config }
    }

    /// Path of the policy file for a given agent identifier.
    pub fn policy_path(&self, agent_id: &str) -> PathBuf {
        self.config.policy_dir.join(format!("policy_{}.json", agent_id))
    }

    /// Serialize the full table. Written to a temporary file first and
    /// renamed into place, so a fully written file is always recoverable.
    pub fn save(&self, agent_id: &str, table: &PolicyTable) -> Result<PathBuf, PolicyError> {
        fs::create_dir_all(&self.config.policy_dir)?;

        let final_path = self.policy_path(agent_id);
        let tmp_path = final_path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(table)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &final_path)?;

        Ok(final_path)
    }

    /// Load a previously saved table. `Ok(None)` if no file exists.
    pub fn load(&self, agent_id: &str) -> Result<Option<PolicyTable>, PolicyError> {
        let path = self.policy_path(agent_id);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(|e| PolicyError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        let table: PolicyTable =
            serde_json::from_str(&json).map_err(|e| PolicyError::FileParse { path, source: e })?;
        Ok(Some(table))
    }
}
