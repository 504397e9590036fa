use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::error::LineSiftError;
use crate::lines::{join_lines, LineEnding};
use crate::pipeline::{self, TransformConfig};
use crate::source::TextSource;
use crate::surface::OutputSurface;

/// Outcome of processing one file; never mutated after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub name: String,
    pub last_modified: DateTime<Utc>,
    pub line_count: usize,
    pub transformed_text: String,
}

/// A file whose text could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{name}: {message}")]
pub struct ReadFailure {
    pub name: String,
    pub message: String,
}

impl ReadFailure {
    fn from_error(name: &str, error: LineSiftError) -> Self {
        let message = match error {
            LineSiftError::Read { message, .. } => message,
            other => other.to_string(),
        };
        Self {
            name: name.to_string(),
            message,
        }
    }
}

pub type FileOutcome = std::result::Result<FileResult, ReadFailure>;

/// Every file's outcome, in the order the sources were given
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &FileResult> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ReadFailure> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    /// All successful outputs joined in input order
    pub fn concatenated_output(&self, ending: LineEnding) -> String {
        let texts: Vec<&str> = self
            .succeeded()
            .map(|result| result.transformed_text.as_str())
            .collect();
        join_lines(&texts, ending)
    }
}

#[derive(Serialize)]
struct ReportView<'a> {
    processed: Vec<&'a FileResult>,
    failed: Vec<&'a ReadFailure>,
}

impl Serialize for BatchReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ReportView {
            processed: self.succeeded().collect(),
            failed: self.failed().collect(),
        }
        .serialize(serializer)
    }
}

/// Runs one batch of sources through the pipeline.
///
/// Files are read and transformed independently on the rayon pool. Each
/// file is published to the surface as soon as it completes, so summary
/// order follows completion order and the shared output ends up holding
/// whichever file finished last.
pub struct Batch<'a> {
    config: &'a TransformConfig,
    ending: LineEnding,
    jobs: Option<usize>,
}

impl<'a> Batch<'a> {
    pub fn new(config: &'a TransformConfig) -> Self {
        Self {
            config,
            ending: LineEnding::default(),
            jobs: None,
        }
    }

    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.ending = ending;
        self
    }

    /// Cap the number of worker threads; `None` uses the global pool
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs.filter(|&n| n > 0);
        self
    }

    pub fn run<S>(&self, sources: &[S], surface: &OutputSurface) -> Result<BatchReport>
    where
        S: TextSource,
    {
        surface.clear();

        let report = match self.jobs {
            Some(jobs) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build()
                    .context("Failed to build worker pool")?;
                pool.install(|| self.process_all(sources, surface))
            }
            None => self.process_all(sources, surface),
        };

        tracing::info!(
            processed = report.succeeded().count(),
            failed = report.failed().count(),
            "batch complete"
        );

        Ok(report)
    }

    fn process_all<S: TextSource>(&self, sources: &[S], surface: &OutputSurface) -> BatchReport {
        let outcomes = sources
            .par_iter()
            .map(|source| {
                let outcome = process_source(source, self.config, self.ending);
                match &outcome {
                    Ok(result) => surface.publish(result),
                    Err(failure) => {
                        tracing::warn!(file = %failure.name, error = %failure.message, "failed to read file");
                        surface.append_failure(failure.clone());
                    }
                }
                outcome
            })
            .collect();

        BatchReport { outcomes }
    }
}

/// Read one source and run it through the pipeline
pub fn process_source<S>(source: &S, config: &TransformConfig, ending: LineEnding) -> FileOutcome
where
    S: TextSource + ?Sized,
{
    let name = source.name();
    let text = source
        .read_text()
        .map_err(|e| ReadFailure::from_error(&name, e))?;
    let last_modified = source
        .last_modified()
        .map_err(|e| ReadFailure::from_error(&name, e))?;

    let processed = pipeline::process_text(&text, config);
    tracing::debug!(file = %name, before = processed.line_count, after = processed.lines.len(), "processed file");

    Ok(FileResult {
        name,
        last_modified,
        line_count: processed.line_count,
        transformed_text: join_lines(&processed.lines, ending),
    })
}
