//! The single active job description, stored as one text file

use crate::error::{Result, ResumeRankerError};
use crate::storage::atomic::write_atomic;
use log::info;
use std::path::{Path, PathBuf};

pub struct JobDescriptionStore {
    path: PathBuf,
}

impl JobDescriptionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current description, trimmed. An unsaved description is empty.
    pub fn load(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No job description saved at {}", self.path.display());
                Ok(String::new())
            }
            Err(e) => Err(ResumeRankerError::Io(e)),
        }
    }

    pub fn save(&self, text: &str) -> Result<()> {
        write_atomic(&self.path, text.as_bytes())?;
        info!("Saved job description ({} characters)", text.chars().count());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
