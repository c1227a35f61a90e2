//! Resume ranker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod storage;

pub use config::Config;
pub use error::{Result, ResumeRankerError};
pub use processing::RankingPipeline;
pub use storage::{CandidateRecord, JobDescriptionStore, RankingStore};
