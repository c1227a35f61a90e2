//! Persistent state: the ranking history and the active job description

pub mod atomic;
pub mod job_description;
pub mod rankings;
pub mod record;

pub use job_description::JobDescriptionStore;
pub use rankings::{RankedCandidate, RankingStore};
pub use record::CandidateRecord;
