use crate::error::{RecfileError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_USERS_FILE: &str = "users.txt";

/// Configuration for recfile, stored as config.json in the base directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecfileConfig {
    /// Record file backing the credential registry
    #[serde(default = "default_users_file")]
    pub users_file: String,
}

fn default_users_file() -> String {
    DEFAULT_USERS_FILE.to_string()
}

impl Default for RecfileConfig {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
        }
    }
}

impl RecfileConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecfileError::Io)?;
        let config: RecfileConfig =
            serde_json::from_str(&content).map_err(RecfileError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecfileError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecfileError::Serialization)?;
        fs::write(config_path, content).map_err(RecfileError::Io)?;
        Ok(())
    }

    pub fn users_file(&self) -> &str {
        &self.users_file
    }
}
