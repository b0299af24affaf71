use crate::error::{Result, ShelfError};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_STORAGE_KEY: &str = "storage-key";
pub const KEY_CONFIRM_DELETE: &str = "confirm-delete";
pub const KEYS: [&str; 2] = [KEY_STORAGE_KEY, KEY_CONFIRM_DELETE];

/// Configuration for the shelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Name of the key the collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Ask before deleting a book
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_STORAGE_KEY => Some(self.storage_key.clone()),
            KEY_CONFIRM_DELETE => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_STORAGE_KEY => {
                let value = value.trim();
                if value.is_empty() || value.starts_with('.') || value.contains(['/', '\\']) {
                    return Err(ShelfError::Config(format!(
                        "Invalid storage key: {:?}",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            KEY_CONFIRM_DELETE => {
                self.confirm_delete = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(ShelfError::Config(format!(
                            "Expected true or false, got {:?}",
                            other
                        )))
                    }
                };
            }
            other => return Err(ShelfError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
