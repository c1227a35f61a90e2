//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use crate::processing::document_vectors::DEFAULT_DOCUMENT_MODEL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Local directory or Hugging Face repo id of a Model2Vec model
    pub embedding_model: String,
    /// Model2Vec model averaged into document vectors for document similarity
    pub document_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub rankings_file: PathBuf,
    pub job_description_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub color_output: bool,
    pub name_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("resume-ranker");

        Self {
            models: ModelConfig {
                embedding_model: "minishlab/potion-base-8M".to_string(),
                document_model: DEFAULT_DOCUMENT_MODEL.to_string(),
            },
            storage: StorageConfig {
                rankings_file: data_dir.join("hybrid_matching_results.json"),
                job_description_file: data_dir.join("job_description.txt"),
            },
            output: OutputConfig {
                color_output: true,
                name_width: 100,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load an explicit config file; a missing file is an error here
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ResumeRankerError::from_io(e, path))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.models.embedding_model.trim().is_empty() {
            return Err(ResumeRankerError::Configuration(
                "models.embedding_model must not be empty".to_string(),
            ));
        }
        if self.models.document_model.trim().is_empty() {
            return Err(ResumeRankerError::Configuration(
                "models.document_model must not be empty".to_string(),
            ));
        }
        if self.output.name_width == 0 {
            return Err(ResumeRankerError::Configuration(
                "output.name_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
