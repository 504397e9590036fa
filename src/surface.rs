use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use crate::batch::{FileResult, ReadFailure};
use crate::error::ConfigError;

/// How the shared output area is filled across a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Each completed file overwrites the previous one's output
    #[default]
    Last,
    /// Every successful file's output, joined in input order
    Concat,
}

impl OutputMode {
    pub fn name(&self) -> &'static str {
        match self {
            OutputMode::Last => "last",
            OutputMode::Concat => "concat",
        }
    }
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "last" => Ok(OutputMode::Last),
            "concat" => Ok(OutputMode::Concat),
            _ => Err(ConfigError::InvalidValue {
                field: "output.mode".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The metadata line shown for a processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub name: String,
    pub last_modified: DateTime<Utc>,
    pub line_count: usize,
}

impl From<&FileResult> for FileSummary {
    fn from(result: &FileResult) -> Self {
        Self {
            name: result.name.clone(),
            last_modified: result.last_modified,
            line_count: result.line_count,
        }
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Date Modified: {}, lines: {}",
            self.name,
            self.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.line_count
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SurfaceEntry {
    File(FileSummary),
    Failed(ReadFailure),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceSnapshot {
    pub entries: Vec<SurfaceEntry>,
    pub output: Option<String>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    entries: Vec<SurfaceEntry>,
    output: Option<String>,
}

/// Append-only list of per-file entries plus one shared output area.
///
/// Workers write to it as files complete; it is cleared at the start of
/// each batch.
#[derive(Debug, Default)]
pub struct OutputSurface {
    state: Mutex<SurfaceState>,
}

impl OutputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a worker panicked mid-append; the entries are still usable.
    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.output = None;
    }

    pub fn append_failure(&self, failure: ReadFailure) {
        self.lock().entries.push(SurfaceEntry::Failed(failure));
    }

    /// Record a completed file: summary line first, then overwrite the output
    pub fn publish(&self, result: &FileResult) {
        let mut state = self.lock();
        state.entries.push(SurfaceEntry::File(FileSummary::from(result)));
        state.output = Some(result.transformed_text.clone());
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        let state = self.lock();
        SurfaceSnapshot {
            entries: state.entries.clone(),
            output: state.output.clone(),
        }
    }
}
