//! Input manager routing files to the right extractor

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract resume text. Resumes must be PDFs.
    pub async fn extract_resume(&self, path: &Path) -> Result<String> {
        self.ensure_exists(path)?;

        match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            _ => Err(ResumeRankerError::UnsupportedFormat(format!(
                "Resume must be a PDF: {}",
                path.display()
            ))),
        }
    }

    /// Read a job description from a plain text or markdown file
    pub async fn extract_job_description(&self, path: &Path) -> Result<String> {
        self.ensure_exists(path)?;

        match FileType::from_path(path) {
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            _ => Err(ResumeRankerError::UnsupportedFormat(format!(
                "Job description must be .txt or .md: {}",
                path.display()
            ))),
        }
    }

    fn ensure_exists(&self, path: &Path) -> Result<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(ResumeRankerError::FileNotFound(path.to_path_buf()))
        }
    }
}
