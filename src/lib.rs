pub mod batch;
pub mod config;
pub mod error;
pub mod lines;
pub mod pipeline;
pub mod source;
pub mod surface;
pub mod transform;

use anyhow::Result;
use std::path::Path;

pub use batch::{Batch, BatchReport, FileOutcome, FileResult, ReadFailure};
pub use lines::LineEnding;
pub use pipeline::TransformConfig;
pub use source::{FileSource, MemorySource, TextSource};
pub use surface::{OutputMode, OutputSurface};

#[derive(Debug, Clone)]
pub struct LineSift {
    config: config::Config,
}

impl LineSift {
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let config = config::Config::load_or_default(project_root)?;
        Ok(Self { config })
    }

    pub fn with_config(config: config::Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut config::Config {
        &mut self.config
    }

    /// Validate settings and run one batch; the surface is cleared first
    pub fn process<S: TextSource>(
        &self,
        sources: &[S],
        surface: &OutputSurface,
        jobs: Option<usize>,
    ) -> Result<BatchReport> {
        let transform = self.config.transform_config()?;
        Batch::new(&transform)
            .with_line_ending(self.config.data.output.line_ending)
            .with_jobs(jobs)
            .run(sources, surface)
    }

    /// The text shown in the output area for the configured mode
    pub fn output_text(&self, report: &BatchReport, surface: &OutputSurface) -> Option<String> {
        let output = &self.config.data.output;
        match output.mode {
            OutputMode::Last => surface.snapshot().output,
            OutputMode::Concat if report.succeeded().next().is_some() => {
                Some(report.concatenated_output(output.line_ending))
            }
            OutputMode::Concat => None,
        }
    }
}
