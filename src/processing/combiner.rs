//! Weighted blend of the three similarity scores

use serde::{Deserialize, Serialize};

pub const EMBEDDING_WEIGHT: f32 = 0.4;
pub const LEXICAL_WEIGHT: f32 = 0.3;
pub const DOCUMENT_WEIGHT: f32 = 0.3;

/// Display label and weight of each score, in blend order. The labels name
/// the persisted JSON keys; `section_score` holds document similarity and is
/// unrelated to `section_details`.
pub const WEIGHTS: [(&str, f32); 3] = [
    ("Transformer (transformer_score)", EMBEDDING_WEIGHT),
    ("TF-IDF (tfidf_score)", LEXICAL_WEIGHT),
    ("Document (section_score)", DOCUMENT_WEIGHT),
];

/// Per-section sub-scores attached to every record.
///
/// These are fixed placeholder values and are NOT derived from the resume or
/// the job description. Do not read them as a measure of content quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDetails {
    pub experience: f32,
    pub education: f32,
    pub skills: f32,
}

impl SectionDetails {
    pub const PLACEHOLDER: SectionDetails = SectionDetails {
        experience: 0.8,
        education: 0.7,
        skills: 0.6,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub embedding_score: f32,
    pub lexical_score: f32,
    pub document_score: f32,
    pub combined_score: f32,
    pub section_details: SectionDetails,
}

pub fn combine(embedding_score: f32, lexical_score: f32, document_score: f32) -> ScoreBreakdown {
    let combined_score = embedding_score * EMBEDDING_WEIGHT
        + lexical_score * LEXICAL_WEIGHT
        + document_score * DOCUMENT_WEIGHT;

    ScoreBreakdown {
        embedding_score,
        lexical_score,
        document_score,
        combined_score,
        section_details: SectionDetails::PLACEHOLDER,
    }
}
