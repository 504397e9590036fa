use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{LineSiftError, LineSiftResult};

/// Something a batch can read text from: a file on disk, stdin, a buffer.
pub trait TextSource: Send + Sync {
    fn name(&self) -> String;

    fn last_modified(&self) -> LineSiftResult<DateTime<Utc>>;

    fn read_text(&self) -> LineSiftResult<String>;
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn last_modified(&self) -> LineSiftResult<DateTime<Utc>> {
        (**self).last_modified()
    }

    fn read_text(&self) -> LineSiftResult<String> {
        (**self).read_text()
    }
}

/// A file on disk, decoded as UTF-8 with invalid bytes replaced
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, err: io::Error) -> LineSiftError {
        LineSiftError::Read {
            name: self.name(),
            message: err.to_string(),
        }
    }
}

impl TextSource for FileSource {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn last_modified(&self) -> LineSiftResult<DateTime<Utc>> {
        let modified = fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|e| self.read_error(e))?;
        Ok(DateTime::<Utc>::from(modified))
    }

    fn read_text(&self) -> LineSiftResult<String> {
        let bytes = fs::read(&self.path).map_err(|e| self.read_error(e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory text, used for stdin
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    text: String,
    modified: DateTime<Utc>,
    failure: Option<String>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            modified: Utc::now(),
            failure: None,
        }
    }

    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = modified;
        self
    }

    /// A source whose read always fails with `message`
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            modified: Utc::now(),
            failure: Some(message.into()),
        }
    }

    pub fn from_reader(name: impl Into<String>, mut reader: impl io::Read) -> LineSiftResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::new(name, String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl TextSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn last_modified(&self) -> LineSiftResult<DateTime<Utc>> {
        Ok(self.modified)
    }

    fn read_text(&self) -> LineSiftResult<String> {
        match &self.failure {
            Some(message) => Err(LineSiftError::Read {
                name: self.name.clone(),
                message: message.clone(),
            }),
            None => Ok(self.text.clone()),
        }
    }
}
