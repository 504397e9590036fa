use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigData;
use crate::error::ConfigError;
use crate::lines::LineEnding;
use crate::pipeline::TransformConfig;
use crate::surface::OutputMode;

pub const CONFIG_DIR: &str = ".linesift";
pub const CONFIG_FILE: &str = "config.toml";

pub const KEYS: &[&str] = &[
    "transform.remove_blank",
    "transform.trim",
    "transform.pattern",
    "transform.substitute",
    "output.mode",
    "output.line_ending",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    /// Load the project config, falling back to the user config, then defaults
    pub fn load_or_default(project_root: impl AsRef<Path>) -> Result<Self> {
        let config_path = Self::project_path(project_root);

        if config_path.exists() {
            return Self::load(&config_path);
        }

        if let Some(user_path) = Self::user_path().filter(|p| p.exists()) {
            tracing::debug!(path = %user_path.display(), "using user config");
            let data = Self::read_data(&user_path)?;
            return Ok(Self {
                data,
                path: config_path,
            });
        }

        Ok(Self {
            data: ConfigData::default(),
            path: config_path,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(Self {
            data: Self::read_data(path)?,
            path: path.to_path_buf(),
        })
    }

    fn read_data(path: &Path) -> Result<ConfigData> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let data = toml::from_str(&content)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(data)
    }

    pub fn project_path(project_root: impl AsRef<Path>) -> PathBuf {
        project_root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn user_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "linesift", "linesift")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Write the default config unless one already exists.
    ///
    /// Returns the config path and whether a new file was written.
    pub fn init(project_root: impl AsRef<Path>) -> Result<(PathBuf, bool)> {
        let config_dir = project_root.as_ref().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).context("Failed to create .linesift directory")?;

        let config_path = config_dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Ok((config_path, false));
        }

        let content = toml::to_string_pretty(&ConfigData::default())
            .context("Failed to serialize initial config")?;
        fs::write(&config_path, content).context("Failed to write initial config")?;

        Ok((config_path, true))
    }

    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.data)
            .context("Failed to serialize config")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&self.path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let transform = &mut self.data.transform;
        match key {
            "transform.remove_blank" => {
                transform.remove_blank = parse_bool(key, value)?;
            }
            "transform.trim" => {
                transform.trim = match value {
                    "" | "auto" => None,
                    _ => Some(parse_bool(key, value)?),
                };
            }
            "transform.pattern" => {
                // Reject bad patterns here rather than at the next run
                TransformConfig::new(false, false, Some(value), None)?;
                transform.pattern = value.to_string();
            }
            "transform.substitute" => {
                transform.substitute = value.to_string();
            }
            "output.mode" => {
                self.data.output.mode = value.parse::<OutputMode>()?;
            }
            "output.line_ending" => {
                self.data.output.line_ending = value.parse::<LineEnding>()?;
            }
            _ => return Err(unknown_key(key)),
        }

        self.save()?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let transform = &self.data.transform;
        let value = match key {
            "transform.remove_blank" => transform.remove_blank.to_string(),
            "transform.trim" => match transform.trim {
                Some(trim) => trim.to_string(),
                None => "auto".to_string(),
            },
            "transform.pattern" => transform.pattern.clone(),
            "transform.substitute" => transform.substitute.clone(),
            "output.mode" => self.data.output.mode.to_string(),
            "output.line_ending" => self.data.output.line_ending.to_string(),
            _ => return Err(unknown_key(key)),
        };

        Ok(value)
    }

    pub fn list(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }

    /// Compile the transform settings into a pipeline configuration
    pub fn transform_config(&self) -> Result<TransformConfig> {
        let settings = &self.data.transform;
        let config = TransformConfig::new(
            settings.trim_enabled(),
            settings.remove_blank,
            Some(&settings.pattern),
            Some(&settings.substitute),
        )
        .context("Failed to build transform configuration")?;
        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse::<bool>().map_err(|_| {
        ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}

fn unknown_key(key: &str) -> anyhow::Error {
    ConfigError::UnknownKey {
        key: key.to_string(),
    }
    .into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(CONFIG_DIR).join(CONFIG_FILE),
        }
    }
}
