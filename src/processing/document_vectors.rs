//! Whole-document similarity from averaged static token vectors

use crate::error::Result;
use crate::processing::embeddings::SentenceEncoder;
use crate::processing::similarity::cosine_similarity;
use log::{debug, warn};

/// Default document-vector model: static vectors over the GloVe vocabulary
pub const DEFAULT_DOCUMENT_MODEL: &str = "minishlab/M2V_base_glove";

/// Scores two texts by the cosine of their document vectors.
///
/// The vectorizer is expected to average token vectors without normalizing
/// (a Model2Vec model loaded with `normalize: Some(false)`). A text with no
/// vectorizable token yields an all-zero vector, so the pair scores 0.0 with
/// a warning.
pub struct DocumentScorer {
    vectorizer: Box<dyn SentenceEncoder>,
}

impl DocumentScorer {
    pub fn new(vectorizer: Box<dyn SentenceEncoder>) -> Self {
        Self { vectorizer }
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> Result<f32> {
        let resume_vector = self.document_vector(resume_text, "resume")?;
        let job_vector = self.document_vector(job_text, "job description")?;

        let (Some(resume_vector), Some(job_vector)) = (resume_vector, job_vector) else {
            return Ok(0.0);
        };

        let score = cosine_similarity(&resume_vector, &job_vector)?;
        debug!("Document similarity score ({}): {:.4}", self.vectorizer.name(), score);
        Ok(score)
    }

    /// Document vector, or `None` when no token could be vectorized
    fn document_vector(&self, text: &str, label: &str) -> Result<Option<Vec<f32>>> {
        let vector = self.vectorizer.encode(text)?;

        if vector.iter().all(|v| *v == 0.0) {
            warn!(
                "The {} has no vectorizable tokens; document similarity defaults to 0.0",
                label
            );
            return Ok(None);
        }

        Ok(Some(vector))
    }

    pub fn model_name(&self) -> &str {
        self.vectorizer.name()
    }
}
