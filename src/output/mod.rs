//! Rendering of rankings and scoring results

pub mod formatter;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter};
