//! Vector similarity helpers

use crate::error::{Result, ResumeRankerError};

/// Cosine similarity of two dense vectors.
///
/// Zero-norm inputs score 0.0. Identical vectors score exactly 1.0 because the
/// denominator is `sqrt(|a|² · |b|²)` rather than the product of two roots.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ResumeRankerError::Processing(format!(
            "Vector dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum();
    let norm_b: f32 = b.iter().map(|x| x * x).sum();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / (norm_a * norm_b).sqrt()).clamp(-1.0, 1.0))
}
