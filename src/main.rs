//! Resume ranker: score resumes against a job description and keep a ranking

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction, JobAction};
use resume_ranker::input::InputManager;
use resume_ranker::output::formatter_for;
use resume_ranker::processing::combiner::WEIGHTS;
use resume_ranker::{CandidateRecord, Config, JobDescriptionStore, RankingPipeline, RankingStore, Result, ResumeRankerError};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let (config, config_path) = match &cli.config {
        Some(path) => (Config::load_from(path), path.clone()),
        None => (Config::load(), Config::config_path()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Add { name, resumes, output } => {
            let output_format = cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?;
            let candidates = cli::candidate_names(name.as_deref(), &resumes)
                .map_err(ResumeRankerError::InvalidInput)?;

            for (_, resume) in &candidates {
                if !resume.exists() {
                    return Err(ResumeRankerError::FileNotFound(resume.clone()));
                }
                cli::validate_file_extension(resume, &["pdf"])
                    .map_err(|e| ResumeRankerError::InvalidInput(format!("Resume file: {}", e)))?;
            }

            let job_text = JobDescriptionStore::new(&config.storage.job_description_file).load()?;
            if job_text.is_empty() {
                return Err(ResumeRankerError::InvalidInput(
                    "No job description saved. Set one with `resume-ranker job set`".to_string(),
                ));
            }

            let mut store = RankingStore::load(&config.storage.rankings_file)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Loading models...");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let pipeline = RankingPipeline::from_config(&config.models);
            spinner.finish_and_clear();
            let pipeline = pipeline?;
            info!("Using embedding model: {}", pipeline.embedding_model());
            info!("Using document model: {}", pipeline.document_model());

            let formatter = formatter_for(output_format, config.output.color_output, config.output.name_width);

            for (candidate_name, resume) in candidates {
                let progress = stage_bar(3)?;

                progress.set_message(format!("Extracting {}", resume.display()));
                let resume_text = pipeline.extract_resume(&resume).await;
                let resume_text = finish_on_error(&progress, resume_text)?;
                progress.inc(1);

                progress.set_message("Scoring");
                let scores = pipeline.score_texts(&resume_text, &job_text).await;
                let scores = finish_on_error(&progress, scores)?;
                progress.inc(1);

                progress.set_message("Saving");
                let record = CandidateRecord::new(&candidate_name, &resume, scores);
                let record = finish_on_error(&progress, record)?;
                let rank = store.insert(record.clone());
                let rank = finish_on_error(&progress, rank)?;
                progress.inc(1);
                progress.finish_and_clear();

                println!("{}", formatter.format_result(&record, rank, store.len())?);
            }
        }

        Commands::Rankings { top, recent, output } => {
            let output_format = cli::parse_output_format(&output).map_err(ResumeRankerError::InvalidInput)?;
            let store = RankingStore::load(&config.storage.rankings_file)?;

            let entries = match (top, recent) {
                (_, Some(n)) => store.recent(n),
                (Some(n), None) => store.top(n),
                (None, None) => store.ranked(),
            };

            let formatter = formatter_for(output_format, config.output.color_output, config.output.name_width);
            print!("{}", formatter.format_rankings(&entries)?);
        }

        Commands::Job { action } => {
            let job_store = JobDescriptionStore::new(&config.storage.job_description_file);

            match action {
                JobAction::Show => {
                    let text = job_store.load()?;
                    if text.is_empty() {
                        println!("No job description saved.");
                    } else {
                        println!("{}", text);
                    }
                }

                JobAction::Set { text, file } => {
                    let text = match (text, file) {
                        (Some(text), _) => text,
                        (None, Some(path)) => InputManager::new().extract_job_description(&path).await?,
                        (None, None) => {
                            return Err(ResumeRankerError::InvalidInput(
                                "Provide --text or --file".to_string(),
                            ))
                        }
                    };
                    job_store.save(text.trim())?;
                    println!("✅ Job description saved to {}", job_store.path().display());
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Embedding Model: {}", config.models.embedding_model);
                println!("Document Model: {}", config.models.document_model);
                println!("Rankings File: {}", config.storage.rankings_file.display());
                println!("Job Description File: {}", config.storage.job_description_file.display());
                println!("\nScore Weights (fixed):");
                for (label, weight) in WEIGHTS {
                    println!("  {}: {:.0}%", label, weight * 100.0);
                }
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Progress bar for the extraction → scoring → saving stages of one resume
fn stage_bar(stages: u64) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template("{spinner} [{bar:20}] {pos}/{len} {msg}")
        .map_err(|e| ResumeRankerError::Processing(format!("Invalid progress template: {}", e)))?
        .progress_chars("=> ");

    let bar = ProgressBar::new(stages);
    bar.set_style(style);
    bar.enable_steady_tick(Duration::from_millis(120));
    Ok(bar)
}

fn finish_on_error<T>(progress: &ProgressBar, result: Result<T>) -> Result<T> {
    if result.is_err() {
        progress.abandon();
    }
    result
}
