//! TF-IDF cosine similarity over exactly the two compared documents

use crate::processing::text_processor::TextProcessor;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Builds a two-document TF-IDF space and scores the cosine between them.
///
/// Weights are raw term counts times smoothed idf, `ln((1 + n) / (1 + df)) + 1`
/// with `n = 2`: shared terms get idf 1, terms unique to one side get
/// `1 + ln(1.5)`. Vectors with no terms score 0.0.
pub struct LexicalScorer {
    processor: TextProcessor,
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalScorer {
    pub fn new() -> Self {
        Self {
            processor: TextProcessor::new(),
        }
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> f32 {
        let resume_counts = self.term_counts(resume_text);
        let job_counts = self.term_counts(job_text);

        if resume_counts.is_empty() || job_counts.is_empty() {
            debug!("TF-IDF score: 0.0 (empty vocabulary on one side)");
            return 0.0;
        }

        // BTreeMap keeps the vocabulary order, and so the float sums, deterministic
        let mut vocabulary: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
        for (term, count) in &resume_counts {
            vocabulary.entry(term.as_str()).or_default().0 = *count as f64;
        }
        for (term, count) in &job_counts {
            vocabulary.entry(term.as_str()).or_default().1 = *count as f64;
        }

        let n_docs = 2.0_f64;
        let (mut dot, mut norm_resume, mut norm_job) = (0.0_f64, 0.0_f64, 0.0_f64);
        for (tf_resume, tf_job) in vocabulary.values() {
            let df = (*tf_resume > 0.0) as u8 as f64 + (*tf_job > 0.0) as u8 as f64;
            let idf = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
            let (w_resume, w_job) = (tf_resume * idf, tf_job * idf);

            dot += w_resume * w_job;
            norm_resume += w_resume * w_resume;
            norm_job += w_job * w_job;
        }

        let score = (dot / (norm_resume * norm_job).sqrt()).clamp(0.0, 1.0) as f32;
        debug!("TF-IDF score over {} terms: {:.4}", vocabulary.len(), score);
        score
    }

    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for term in self.processor.terms(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }
}
