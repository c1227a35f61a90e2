//! CLI interface for the resume ranker

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Rank resumes against a job description")]
#[command(long_about = "Score PDF resumes against the saved job description using sentence embeddings, TF-IDF and document-vector similarity, and keep a ranked history of candidates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score resumes and add them to the rankings
    Add {
        /// Candidate name (defaults to the resume file name; single resume only)
        #[arg(short, long)]
        name: Option<String>,

        /// Resume PDF files
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show the ranked candidates
    Rankings {
        /// Only show the best N candidates
        #[arg(short, long)]
        top: Option<usize>,

        /// Show the N most recently scored candidates, newest first
        #[arg(short, long, conflicts_with = "top")]
        recent: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Manage the active job description
    Job {
        #[command(subcommand)]
        action: JobAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum JobAction {
    /// Print the current job description
    Show,

    /// Replace the job description
    Set {
        /// Job description text
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,

        /// Read the job description from a .txt or .md file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Pair each resume with a candidate name. An explicit name only makes
/// sense for a single resume; otherwise names come from the file stems.
pub fn candidate_names(name: Option<&str>, resumes: &[PathBuf]) -> Result<Vec<(String, PathBuf)>, String> {
    if resumes.is_empty() {
        return Err("At least one resume is required".to_string());
    }

    match name.map(str::trim) {
        Some("") => Err("Candidate name must not be empty".to_string()),
        Some(_) if resumes.len() > 1 => {
            Err("--name can only be used with a single resume".to_string())
        }
        Some(name) => Ok(vec![(name.to_string(), resumes[0].clone())]),
        None => resumes
            .iter()
            .map(|path| {
                path.file_stem()
                    .map(|stem| (stem.to_string_lossy().into_owned(), path.clone()))
                    .ok_or_else(|| format!("Cannot derive a name from: {}", path.display()))
            })
            .collect(),
    }
}
