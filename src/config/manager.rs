use super::{program::ProgramConfig, search::SearchConfig, traits::ConfigSection};
use crate::error::BlockseekError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub program: ProgramConfig,
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            program: ProgramConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), BlockseekError> {
        self.program.validate()?;
        self.search.validate()?;

        // The bounds must stay within the digit width the block table implies.
        let width = self.program.blocks.len() as u32;
        match 10u64.checked_pow(width) {
            Some(limit) if self.search.upper_bound < limit => Ok(()),
            Some(limit) => Err(BlockseekError::Configuration(format!(
                "Upper bound {} does not fit in {} digits (limit {})",
                self.search.upper_bound, width, limit
            ))),
            None => Err(BlockseekError::Configuration(format!(
                "Block table width {} exceeds the range of 64-bit candidates",
                width
            ))),
        }
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlockseekError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BlockseekError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| BlockseekError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlockseekError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| BlockseekError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| BlockseekError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), BlockseekError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}
