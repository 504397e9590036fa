pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};

use crate::lines::LineEnding;
use crate::surface::OutputMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigData {
    pub version: String,
    #[serde(default)]
    pub transform: TransformSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    pub remove_blank: bool,
    /// Follows `remove_blank` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<bool>,
    pub pattern: String,
    pub substitute: String,
}

impl TransformSettings {
    pub fn trim_enabled(&self) -> bool {
        self.trim.unwrap_or(self.remove_blank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub mode: OutputMode,
    pub line_ending: LineEnding,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            transform: TransformSettings::default(),
            output: OutputSettings::default(),
        }
    }
}
