use regex::Regex;

use crate::error::PipelineError;
use crate::lines::split_lines;
use crate::transform;

/// Which line transforms run, and with what pattern.
///
/// Built once per batch. The pattern is compiled up front, so an invalid
/// expression is rejected before any file is touched.
#[derive(Debug, Clone, Default)]
pub struct TransformConfig {
    pub trim_enabled: bool,
    pub remove_blank_enabled: bool,
    pattern: Option<Regex>,
    substitute: Option<String>,
}

impl TransformConfig {
    pub fn new(
        trim_enabled: bool,
        remove_blank_enabled: bool,
        pattern: Option<&str>,
        substitute: Option<&str>,
    ) -> Result<Self, PipelineError> {
        let pattern = match pattern.filter(|p| !p.is_empty()) {
            Some(source) => Some(Regex::new(source).map_err(|e| {
                PipelineError::InvalidPattern {
                    pattern: source.to_string(),
                    source: e,
                }
            })?),
            None => None,
        };

        Ok(Self {
            trim_enabled,
            remove_blank_enabled,
            pattern,
            substitute: substitute.filter(|s| !s.is_empty()).map(str::to_string),
        })
    }

    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    pub fn substitute_template(&self) -> Option<&str> {
        self.substitute.as_deref()
    }

    /// Pattern and template, but only when both are configured
    pub fn substitution(&self) -> Option<(&Regex, &str)> {
        match (&self.pattern, &self.substitute) {
            (Some(pattern), Some(template)) => Some((pattern, template.as_str())),
            _ => None,
        }
    }
}

/// Run the enabled transforms in order: trim, remove blank, substitute
pub fn run(lines: Vec<String>, config: &TransformConfig) -> Vec<String> {
    let mut lines = lines;

    if config.trim_enabled {
        lines = transform::trim(lines);
        tracing::debug!(count = lines.len(), "trimmed lines");
    }

    if config.remove_blank_enabled {
        lines = transform::remove_blank(lines);
        tracing::debug!(count = lines.len(), "removed blank lines");
    }

    if let Some((pattern, template)) = config.substitution() {
        lines = transform::substitute(lines, pattern, template);
        tracing::debug!(count = lines.len(), pattern = %pattern, "substituted lines");
    }

    lines
}

/// Lines produced from one text, plus the line count before transforming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedText {
    pub line_count: usize,
    pub lines: Vec<String>,
}

pub fn process_text(text: &str, config: &TransformConfig) -> ProcessedText {
    let lines = split_lines(text);
    let line_count = lines.len();

    ProcessedText {
        line_count,
        lines: run(lines, config),
    }
}
