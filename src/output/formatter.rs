//! Output formatters for rankings and single scoring results

use crate::error::Result;
use crate::processing::text_processor::truncate_text;
use crate::storage::{CandidateRecord, RankedCandidate};
use colored::{Color, Colorize};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Console,
    Json,
}

pub trait OutputFormatter {
    /// Render ranked candidates in the order given
    fn format_rankings(&self, entries: &[RankedCandidate]) -> Result<String>;

    /// Render one freshly scored candidate and its place in the ranking
    fn format_result(&self, record: &CandidateRecord, rank: usize, total: usize) -> Result<String>;
}

pub fn formatter_for(format: OutputFormat, use_colors: bool, name_width: usize) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, name_width)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

/// Table output with percentage scores
pub struct ConsoleFormatter {
    use_colors: bool,
    name_width: usize,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, name_width: usize) -> Self {
        Self {
            use_colors,
            name_width,
        }
    }

    fn percent(score: f32) -> String {
        format!("{:.2}%", score * 100.0)
    }

    fn format_score_badge(&self, score: f32) -> String {
        let (badge, color) = if score >= 0.8 {
            ("STRONG", Color::Green)
        } else if score >= 0.6 {
            ("GOOD", Color::Yellow)
        } else if score >= 0.4 {
            ("FAIR", Color::BrightYellow)
        } else {
            ("WEAK", Color::Red)
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_rankings(&self, entries: &[RankedCandidate]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No candidates ranked yet.\n".to_string());
        }

        let names: Vec<String> = entries
            .iter()
            .map(|e| truncate_text(&e.record.candidate_name, self.name_width))
            .collect();
        let name_col = names.iter().map(|n| n.chars().count()).max().unwrap_or(0).max(4);
        let file_col = entries
            .iter()
            .map(|e| e.record.resume_file.chars().count())
            .max()
            .unwrap_or(0)
            .max(6);

        let mut output = String::new();
        let header = format!(
            "{:>4}  {:<name_col$}  {:<file_col$}  {:>9}  {:>11}  {:>9}  {:>9}",
            "Rank", "Name", "Resume", "Combined", "Transformer", "TF-IDF", "Document",
        );
        output.push_str(&self.header(&header));
        output.push('\n');

        for (entry, name) in entries.iter().zip(&names) {
            let record = entry.record;
            output.push_str(&format!(
                "{:>4}  {:<name_col$}  {:<file_col$}  {:>9}  {:>11}  {:>9}  {:>9}\n",
                entry.rank,
                name,
                record.resume_file,
                Self::percent(record.combined_score),
                Self::percent(record.embedding_score),
                Self::percent(record.lexical_score),
                Self::percent(record.document_score),
            ));
        }

        Ok(output)
    }

    fn format_result(&self, record: &CandidateRecord, rank: usize, total: usize) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {} ({})\n",
            self.header(&truncate_text(&record.candidate_name, self.name_width)),
            self.format_score_badge(record.combined_score),
            record.resume_file
        ));
        output.push_str(&format!("  Combined score:                 {}\n", Self::percent(record.combined_score)));
        output.push_str(&format!("  Transformer score:              {}\n", Self::percent(record.embedding_score)));
        output.push_str(&format!("  TF-IDF score:                   {}\n", Self::percent(record.lexical_score)));
        output.push_str(&format!("  Document score (section_score): {}\n", Self::percent(record.document_score)));
        output.push_str(&format!("  Rank:                           {} of {}\n", rank, total));
        Ok(output)
    }
}

/// JSON output in the persisted record layout, plus rank
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct RankedResult<'a> {
    rank: usize,
    total: usize,
    #[serde(flatten)]
    record: &'a CandidateRecord,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_rankings(&self, entries: &[RankedCandidate]) -> Result<String> {
        self.to_json(&entries)
    }

    fn format_result(&self, record: &CandidateRecord, rank: usize, total: usize) -> Result<String> {
        self.to_json(&RankedResult { rank, total, record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::combiner::SectionDetails;

    fn record(name: &str, combined: f32) -> CandidateRecord {
        CandidateRecord {
            resume_file: "cv.pdf".to_string(),
            candidate_name: name.to_string(),
            embedding_score: 0.8123,
            lexical_score: 0.5,
            document_score: 0.25,
            combined_score: combined,
            section_details: SectionDetails::PLACEHOLDER,
            scored_at: None,
        }
    }

    fn ranked(records: &[CandidateRecord]) -> Vec<RankedCandidate<'_>> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| RankedCandidate { rank: i + 1, record })
            .collect()
    }

    #[test]
    fn test_console_rankings_show_percentages_and_ranks() {
        let formatter = ConsoleFormatter::new(false, 100);
        let records = [record("Ada", 0.9), record("Grace", 0.6)];
        let output = formatter.format_rankings(&ranked(&records)).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with("1  Ada"));
        assert!(lines[1].contains("90.00%"));
        assert!(lines[1].contains("81.23%"));
        assert!(lines[2].trim_start().starts_with("2  Grace"));
    }

    #[test]
    fn test_console_rankings_keep_given_ranks() {
        let formatter = ConsoleFormatter::new(false, 100);
        let records = [record("Grace", 0.6), record("Ada", 0.9)];
        let entries = [
            RankedCandidate { rank: 7, record: &records[0] },
            RankedCandidate { rank: 2, record: &records[1] },
        ];
        let output = formatter.format_rankings(&entries).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].trim_start().starts_with("7  Grace"));
        assert!(lines[2].trim_start().starts_with("2  Ada"));
    }

    #[test]
    fn test_console_labels_document_score_apart_from_sections() {
        let formatter = ConsoleFormatter::new(false, 100);
        let records = [record("Ada", 0.9)];
        let table = formatter.format_rankings(&ranked(&records)).unwrap();
        let header = table.lines().next().unwrap();
        assert!(header.contains("Document"));
        assert!(!header.contains("Section"));

        let result = formatter.format_result(&records[0], 1, 1).unwrap();
        assert!(result.contains("Document score (section_score): 25.00%"));
        assert!(!result.contains("Section score"));
    }

    #[test]
    fn test_console_truncates_long_names() {
        let formatter = ConsoleFormatter::new(false, 5);
        let records = [record("Bartholomew", 0.5)];
        let output = formatter.format_rankings(&ranked(&records)).unwrap();
        assert!(output.contains("Barth..."));
        assert!(!output.contains("Bartholomew"));
    }

    #[test]
    fn test_console_empty_rankings() {
        let formatter = ConsoleFormatter::new(false, 100);
        assert_eq!(formatter.format_rankings(&[]).unwrap(), "No candidates ranked yet.\n");
    }

    #[test]
    fn test_console_result_badge() {
        let formatter = ConsoleFormatter::new(false, 100);
        let output = formatter.format_result(&record("Ada", 0.85), 1, 4).unwrap();
        assert!(output.contains("[STRONG]"));
        assert!(output.contains("1 of 4"));
    }

    #[test]
    fn test_json_result_is_flattened_record() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_result(&record("Ada", 0.5), 2, 3).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["rank"], 2);
        assert_eq!(value["candidate_name"], "Ada");
        assert_eq!(value["combined_score"], 0.5);
    }

    #[test]
    fn test_json_rankings_carry_rank_and_record_fields() {
        let formatter = JsonFormatter::new(true);
        let records = vec![record("Ada", 0.9), record("Grace", 0.6)];
        let output = formatter.format_rankings(&ranked(&records)).unwrap();

        let mut parsed: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[1]["rank"], 2);
        assert_eq!(parsed[1]["candidate_name"], "Grace");

        let rank = parsed[0].as_object_mut().unwrap().remove("rank");
        assert_eq!(rank, Some(serde_json::json!(1)));
        let first: CandidateRecord = serde_json::from_value(parsed.remove(0)).unwrap();
        assert_eq!(first, records[0]);
    }
}
