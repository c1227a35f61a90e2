//! Ranking history persisted as one JSON array, kept sorted by combined score

use crate::error::{Result, ResumeRankerError};
use crate::storage::atomic::write_atomic;
use crate::storage::record::CandidateRecord;
use log::{debug, info};
use serde::Serialize;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};

/// A record together with its 1-based position in the score ordering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedCandidate<'a> {
    pub rank: usize,
    #[serde(flatten)]
    pub record: &'a CandidateRecord,
}

pub struct RankingStore {
    path: PathBuf,
    records: Vec<CandidateRecord>,
}

impl RankingStore {
    /// Load the store. A missing file is an empty store; anything else that
    /// fails to read or validate is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No ranking file at {}, starting empty", path.display());
                return Ok(Self {
                    path,
                    records: Vec::new(),
                });
            }
            Err(e) => return Err(ResumeRankerError::Io(e)),
        };

        let mut records: Vec<CandidateRecord> = serde_json::from_str(&content).map_err(|e| {
            ResumeRankerError::Storage(format!("{}: malformed ranking file: {}", path.display(), e))
        })?;

        for (i, record) in records.iter().enumerate() {
            record.validate().map_err(|e| {
                ResumeRankerError::Storage(format!("{}: record {}: {}", path.display(), i, e))
            })?;
        }

        sort_by_combined_score(&mut records);
        info!("Loaded {} candidates from {}", records.len(), path.display());

        Ok(Self { path, records })
    }

    /// Add a record and persist the whole collection. The in-memory state only
    /// changes once the file has been written. Returns the record's 1-based rank.
    pub fn insert(&mut self, record: CandidateRecord) -> Result<usize> {
        record.validate()?;

        let score = record.combined_score;
        let mut updated = self.records.clone();
        updated.push(record);
        sort_by_combined_score(&mut updated);

        let json = serde_json::to_string_pretty(&updated)?;
        write_atomic(&self.path, json.as_bytes())?;

        self.records = updated;

        // Stable sort puts the new record after existing ties
        let rank = self
            .records
            .iter()
            .filter(|r| r.combined_score >= score)
            .count();
        debug!("Inserted candidate at rank {} of {}", rank, self.records.len());
        Ok(rank)
    }

    /// All records, best first
    pub fn list(&self) -> &[CandidateRecord] {
        &self.records
    }

    /// Every record with its rank, best first
    pub fn ranked(&self) -> Vec<RankedCandidate<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| RankedCandidate { rank: i + 1, record })
            .collect()
    }

    pub fn top(&self, n: usize) -> Vec<RankedCandidate<'_>> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// The `n` most recently scored records, newest first, each keeping its
    /// score rank. Records without `scored_at` come last.
    pub fn recent(&self, n: usize) -> Vec<RankedCandidate<'_>> {
        let mut ranked = self.ranked();
        // None < Some, so reversing puts undated records at the end
        ranked.sort_by_key(|entry| Reverse(entry.record.scored_at));
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Descending by combined score; equal scores keep insertion order
fn sort_by_combined_score(records: &mut [CandidateRecord]) {
    records.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::combiner::SectionDetails;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn record(name: &str, combined: f32) -> CandidateRecord {
        CandidateRecord {
            resume_file: format!("{}.pdf", name.to_lowercase()),
            candidate_name: name.to_string(),
            embedding_score: combined,
            lexical_score: combined,
            document_score: combined,
            combined_score: combined,
            section_details: SectionDetails::PLACEHOLDER,
            scored_at: None,
        }
    }

    fn names(store: &RankingStore) -> Vec<&str> {
        store.list().iter().map(|r| r.candidate_name.as_str()).collect()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = RankingStore::load(dir.path().join("missing.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_single_insert_is_rank_one() {
        let dir = tempdir().unwrap();
        let mut store = RankingStore::load(dir.path().join("rankings.json")).unwrap();

        let rank = store.insert(record("Ada", 0.75)).unwrap();

        assert_eq!(rank, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].combined_score, 0.75);
    }

    #[test]
    fn test_order_independent_of_insertion_order() {
        for order in [[0.90, 0.60], [0.60, 0.90]] {
            let dir = tempdir().unwrap();
            let mut store = RankingStore::load(dir.path().join("rankings.json")).unwrap();
            for score in order {
                store.insert(record(&format!("C{}", score), score)).unwrap();
            }
            assert_eq!(store.list()[0].combined_score, 0.90);
            assert_eq!(store.list()[1].combined_score, 0.60);
        }
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let dir = tempdir().unwrap();
        let mut store = RankingStore::load(dir.path().join("rankings.json")).unwrap();

        store.insert(record("First", 0.5)).unwrap();
        store.insert(record("Top", 0.9)).unwrap();
        let rank = store.insert(record("Second", 0.5)).unwrap();
        store.insert(record("Third", 0.5)).unwrap();

        assert_eq!(rank, 3);
        assert_eq!(names(&store), vec!["Top", "First", "Second", "Third"]);
    }

    #[test]
    fn test_reload_reproduces_sequence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rankings.json");
        let mut store = RankingStore::load(&path).unwrap();
        for (name, score) in [("A", 0.31), ("B", 0.87), ("C", 0.31), ("D", 0.55)] {
            store.insert(record(name, score)).unwrap();
        }

        let reloaded = RankingStore::load(&path).unwrap();
        assert_eq!(reloaded.list(), store.list());
    }

    #[test]
    fn test_load_resorts_unsorted_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rankings.json");
        let unsorted = vec![record("Low", 0.2), record("High", 0.8)];
        std::fs::write(&path, serde_json::to_string(&unsorted).unwrap()).unwrap();

        let store = RankingStore::load(&path).unwrap();
        assert_eq!(names(&store), vec!["High", "Low"]);
    }

    #[test]
    fn test_malformed_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rankings.json");
        std::fs::write(&path, r#"[{"candidate_name": "no scores"}]"#).unwrap();

        assert!(matches!(
            RankingStore::load(&path),
            Err(ResumeRankerError::Storage(_))
        ));
    }

    #[test]
    fn test_failed_write_leaves_memory_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rankings.json");
        let mut store = RankingStore::load(&path).unwrap();
        store.insert(record("Kept", 0.4)).unwrap();

        // A non-empty directory in place of the file makes the rename fail
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), b"x").unwrap();

        assert!(store.insert(record("Lost", 0.9)).is_err());
        assert_eq!(names(&store), vec!["Kept"]);
    }

    #[test]
    fn test_top_limits_results() {
        let dir = tempdir().unwrap();
        let mut store = RankingStore::load(dir.path().join("rankings.json")).unwrap();
        for (name, score) in [("A", 0.1), ("B", 0.2), ("C", 0.3)] {
            store.insert(record(name, score)).unwrap();
        }

        let top = store.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].record.candidate_name, "C");
        assert_eq!(store.top(10).len(), 3);
    }

    #[test]
    fn test_recent_orders_by_scored_at_with_undated_last() {
        let dir = tempdir().unwrap();
        let mut store = RankingStore::load(dir.path().join("rankings.json")).unwrap();

        let at = |day| Some(Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap());
        let mut old = record("Old", 0.9);
        old.scored_at = at(1);
        let mut newest = record("Newest", 0.2);
        newest.scored_at = at(20);
        let mut middle = record("Middle", 0.5);
        middle.scored_at = at(10);

        store.insert(record("Undated", 0.7)).unwrap();
        store.insert(old).unwrap();
        store.insert(newest).unwrap();
        store.insert(middle).unwrap();

        let recent: Vec<(&str, usize)> = store
            .recent(10)
            .iter()
            .map(|e| (e.record.candidate_name.as_str(), e.rank))
            .collect();
        assert_eq!(
            recent,
            vec![("Newest", 4), ("Middle", 3), ("Old", 1), ("Undated", 2)]
        );

        let names: Vec<&str> = store.recent(2).iter().map(|e| e.record.candidate_name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Middle"]);
    }

    #[test]
    fn test_unknown_field_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rankings.json");
        let mut value = serde_json::to_value(vec![record("Ada", 0.5)]).unwrap();
        value[0]["favourite_colour"] = serde_json::json!("green");
        std::fs::write(&path, value.to_string()).unwrap();

        assert!(matches!(
            RankingStore::load(&path),
            Err(ResumeRankerError::Storage(_))
        ));
    }

    #[test]
    fn test_non_finite_score_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rankings.json");
        let valid = serde_json::to_string(&vec![record("Ada", 0.5)]).unwrap();

        // 1e39 overflows f32 to infinity; 1e999 overflows even f64
        for huge in ["1e39", "1e999"] {
            let content = valid.replacen("\"section_score\":0.5", &format!("\"section_score\":{}", huge), 1);
            assert_ne!(content, valid);
            std::fs::write(&path, content).unwrap();

            assert!(matches!(
                RankingStore::load(&path),
                Err(ResumeRankerError::Storage(_))
            ));
        }
    }
}
