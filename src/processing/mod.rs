//! Similarity scoring: tokenization, the three scorers, and their combination

pub mod combiner;
pub mod document_vectors;
pub mod embeddings;
pub mod pipeline;
pub mod similarity;
pub mod text_processor;
pub mod tfidf;

pub use pipeline::RankingPipeline;
