//! Dense sentence-embedding similarity using Model2Vec

use crate::error::{Result, ResumeRankerError};
use crate::processing::similarity::cosine_similarity;
use anyhow::Context;
use log::{debug, info};
use model2vec_rs::model::StaticModel;
use std::time::Instant;

/// Anything that turns a text into a fixed-size dense vector
pub trait SentenceEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<f32>>;

    fn name(&self) -> &str;
}

/// A loaded Model2Vec static embedding model
pub struct Model2VecEncoder {
    model: StaticModel,
    model_name: String,
}

impl Model2VecEncoder {
    /// Load from a local directory or Hugging Face repo id. This is the
    /// expensive step; do it once per process.
    ///
    /// `normalize` overrides the model's own setting; `Some(false)` yields the
    /// plain mean of the token vectors.
    pub fn load(repo_or_path: &str, normalize: Option<bool>) -> Result<Self> {
        let start_time = Instant::now();
        info!("Loading Model2Vec model: {}", repo_or_path);

        let model = StaticModel::from_pretrained(repo_or_path, None, normalize, None)
            .with_context(|| format!("failed to load embedding model '{}'", repo_or_path))?;

        info!("Model {} loaded in {:.2?}", repo_or_path, start_time.elapsed());

        Ok(Self {
            model,
            model_name: repo_or_path.to_string(),
        })
    }
}

impl SentenceEncoder for Model2VecEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let embedding = self.model.encode_single(text);
        if embedding.is_empty() {
            return Err(ResumeRankerError::Embedding(format!(
                "Model '{}' produced an empty vector",
                self.model_name
            )));
        }
        Ok(embedding)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

/// Scores resume/job similarity as the cosine of their sentence embeddings.
///
/// The result is nominally in [0, 1] for related text but can be negative
/// for unrelated text.
pub struct EmbeddingScorer {
    encoder: Box<dyn SentenceEncoder>,
}

impl EmbeddingScorer {
    pub fn new(encoder: Box<dyn SentenceEncoder>) -> Self {
        Self { encoder }
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> Result<f32> {
        if resume_text.trim().is_empty() {
            return Err(ResumeRankerError::InvalidInput("Resume text is empty".to_string()));
        }
        if job_text.trim().is_empty() {
            return Err(ResumeRankerError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }

        let resume_embedding = self.encoder.encode(resume_text)?;
        let job_embedding = self.encoder.encode(job_text)?;

        let score = cosine_similarity(&job_embedding, &resume_embedding)
            .map_err(|e| ResumeRankerError::Embedding(e.to_string()))?;

        debug!("Embedding score ({}): {:.4}", self.encoder.name(), score);
        Ok(score)
    }

    pub fn model_name(&self) -> &str {
        self.encoder.name()
    }
}
