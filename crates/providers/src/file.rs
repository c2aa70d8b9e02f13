use crate::Provider;
use credbroker_core::{Error, Result, SecretValue, FILE_PROVIDER};
use std::io;
use std::path::{Path, PathBuf};

/// Provider reading a whole file per key. The key is a path; `~` and
/// `$VAR` references are expanded, and relative paths are joined to the
/// base directory when one is set.
#[derive(Debug, Clone)]
pub struct FileProvider {
    name: String,
    base_dir: Option<PathBuf>,
}

impl FileProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: FILE_PROVIDER.to_string(),
            base_dir: None,
        }
    }

    /// Resolve relative keys against `dir` instead of the working directory
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Register under a name other than `file`
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let expanded = shellexpand::full(key).map_err(|e| {
            Error::environment(e.var_name, format!("referenced by file path '{key}': {}", e.cause))
        })?;
        let path = PathBuf::from(expanded.as_ref());

        Ok(match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        })
    }
}

impl Default for FileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for FileProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_value(&self, key: &str) -> Result<SecretValue> {
        let path = self.path_for(key)?;

        let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::not_found(&self.name, "file", key),
            _ => Error::file_system(&path, "read", e),
        })?;

        let contents = String::from_utf8(bytes).map_err(|_| {
            Error::file_system(
                &path,
                "read",
                io::Error::new(io::ErrorKind::InvalidData, "file contents are not valid UTF-8"),
            )
        })?;

        tracing::debug!(provider = %self.name, path = %path.display(), "Read secret file");
        Ok(SecretValue::from(contents))
    }
}
