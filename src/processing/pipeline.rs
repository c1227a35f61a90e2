//! A scoring run: extract, score three ways, combine, build the record

use crate::config::ModelConfig;
use crate::error::Result;
use crate::input::InputManager;
use crate::processing::combiner::{combine, ScoreBreakdown};
use crate::processing::document_vectors::DocumentScorer;
use crate::processing::embeddings::{EmbeddingScorer, Model2VecEncoder};
use crate::processing::tfidf::LexicalScorer;
use crate::storage::CandidateRecord;
use log::info;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Owns the loaded models. Build once at startup and reuse for every resume.
pub struct RankingPipeline {
    input: InputManager,
    embedding: Arc<EmbeddingScorer>,
    lexical: Arc<LexicalScorer>,
    document: Arc<DocumentScorer>,
}

impl RankingPipeline {
    pub fn new(embedding: EmbeddingScorer, document: DocumentScorer) -> Self {
        Self {
            input: InputManager::new(),
            embedding: Arc::new(embedding),
            lexical: Arc::new(LexicalScorer::new()),
            document: Arc::new(document),
        }
    }

    /// Load both models named in the config
    pub fn from_config(models: &ModelConfig) -> Result<Self> {
        let encoder = Model2VecEncoder::load(&models.embedding_model, None)?;
        let vectorizer = Model2VecEncoder::load(&models.document_model, Some(false))?;

        Ok(Self::new(
            EmbeddingScorer::new(Box::new(encoder)),
            DocumentScorer::new(Box::new(vectorizer)),
        ))
    }

    pub async fn extract_resume(&self, resume_path: &Path) -> Result<String> {
        self.input.extract_resume(resume_path).await
    }

    /// Run the three scorers concurrently and blend the results. Any scorer
    /// failure fails the whole run.
    pub async fn score_texts(&self, resume_text: &str, job_text: &str) -> Result<ScoreBreakdown> {
        let start_time = Instant::now();
        let resume: Arc<str> = Arc::from(resume_text);
        let job: Arc<str> = Arc::from(job_text);

        let embedding_task = {
            let scorer = Arc::clone(&self.embedding);
            let (resume, job) = (Arc::clone(&resume), Arc::clone(&job));
            tokio::task::spawn_blocking(move || scorer.score(&resume, &job))
        };
        let lexical_task = {
            let scorer = Arc::clone(&self.lexical);
            let (resume, job) = (Arc::clone(&resume), Arc::clone(&job));
            tokio::task::spawn_blocking(move || scorer.score(&resume, &job))
        };
        let document_task = {
            let scorer = Arc::clone(&self.document);
            let (resume, job) = (Arc::clone(&resume), Arc::clone(&job));
            tokio::task::spawn_blocking(move || scorer.score(&resume, &job))
        };

        let (embedding_score, lexical_score, document_score) =
            tokio::try_join!(embedding_task, lexical_task, document_task)?;

        let scores = combine(embedding_score?, lexical_score, document_score?);
        info!(
            "Scored in {:.2?}: combined {:.4} (embedding {:.4}, tf-idf {:.4}, document {:.4})",
            start_time.elapsed(),
            scores.combined_score,
            scores.embedding_score,
            scores.lexical_score,
            scores.document_score
        );
        Ok(scores)
    }

    /// Full run for one resume file
    pub async fn evaluate(
        &self,
        candidate_name: &str,
        resume_path: &Path,
        job_text: &str,
    ) -> Result<CandidateRecord> {
        let resume_text = self.extract_resume(resume_path).await?;
        let scores = self.score_texts(&resume_text, job_text).await?;
        CandidateRecord::new(candidate_name, resume_path, scores)
    }

    pub fn embedding_model(&self) -> &str {
        self.embedding.model_name()
    }

    pub fn document_model(&self) -> &str {
        self.document.model_name()
    }
}
