//! Candidate records as persisted in the ranking file

use crate::error::{Result, ResumeRankerError};
use crate::processing::combiner::{ScoreBreakdown, SectionDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One scored resume. Field names on disk follow the historical ranking file
/// layout (`transformer_score`, `tfidf_score`, `section_score`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CandidateRecord {
    pub resume_file: String,
    pub candidate_name: String,
    #[serde(rename = "transformer_score")]
    pub embedding_score: f32,
    #[serde(rename = "tfidf_score")]
    pub lexical_score: f32,
    #[serde(rename = "section_score")]
    pub document_score: f32,
    pub combined_score: f32,
    pub section_details: SectionDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scored_at: Option<DateTime<Utc>>,
}

impl CandidateRecord {
    pub fn new(candidate_name: &str, resume_path: &Path, scores: ScoreBreakdown) -> Result<Self> {
        let resume_file = resume_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ResumeRankerError::InvalidInput(format!(
                    "Resume path has no file name: {}",
                    resume_path.display()
                ))
            })?;

        let record = Self {
            resume_file,
            candidate_name: candidate_name.trim().to_string(),
            embedding_score: scores.embedding_score,
            lexical_score: scores.lexical_score,
            document_score: scores.document_score,
            combined_score: scores.combined_score,
            section_details: scores.section_details,
            scored_at: Some(Utc::now()),
        };
        record.validate()?;
        Ok(record)
    }

    /// Schema checks beyond what serde enforces
    pub fn validate(&self) -> Result<()> {
        if self.candidate_name.trim().is_empty() {
            return Err(ResumeRankerError::InvalidInput("Candidate name is empty".to_string()));
        }
        if self.resume_file.trim().is_empty() {
            return Err(ResumeRankerError::InvalidInput("Resume file name is empty".to_string()));
        }

        let scores = [
            ("transformer_score", self.embedding_score),
            ("tfidf_score", self.lexical_score),
            ("section_score", self.document_score),
            ("combined_score", self.combined_score),
            ("section_details.experience", self.section_details.experience),
            ("section_details.education", self.section_details.education),
            ("section_details.skills", self.section_details.skills),
        ];
        for (field, value) in scores {
            if !value.is_finite() {
                return Err(ResumeRankerError::InvalidInput(format!(
                    "{} is not a finite number",
                    field
                )));
            }
        }

        Ok(())
    }
}
