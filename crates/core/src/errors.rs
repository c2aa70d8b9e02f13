use std::path::PathBuf;

/// Result type alias for credbroker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for credbroker operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The descriptor names a provider that is not registered
    #[error("provider '{provider}' cannot be found")]
    UnknownProvider { provider: String },

    /// The key is absent from the selected provider's backing store
    #[error("{provider} cannot find {kind} '{key}'")]
    NotFound {
        provider: String,
        kind: &'static str,
        key: String,
    },

    /// A descriptor field is empty or otherwise unusable
    #[error("invalid descriptor '{descriptor}': {message}")]
    InvalidDescriptor { descriptor: String, message: String },

    /// Environment variable related errors
    #[error("environment variable '{variable}' error: {message}")]
    Environment { variable: String, message: String },

    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML deserialization errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Several failures collected from one batch, sorted by message
    #[error("{}", format_aggregate(.errors))]
    Aggregate { errors: Vec<Error> },
}

fn format_aggregate(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// Conversion implementations
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create an unknown provider error
    #[must_use]
    pub fn unknown_provider(provider: impl Into<String>) -> Self {
        Error::UnknownProvider {
            provider: provider.into(),
        }
    }

    /// Create a not found error. `kind` describes what the key names,
    /// e.g. "environment variable" or "file".
    #[must_use]
    pub fn not_found(provider: impl Into<String>, kind: &'static str, key: impl Into<String>) -> Self {
        Error::NotFound {
            provider: provider.into(),
            kind,
            key: key.into(),
        }
    }

    /// Create an invalid descriptor error
    #[must_use]
    pub fn invalid_descriptor(descriptor: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidDescriptor {
            descriptor: descriptor.into(),
            message: message.into(),
        }
    }

    /// Create an environment variable error
    #[must_use]
    pub fn environment(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Environment {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Collect batch failures. Members are sorted by their rendered message so
    /// the combined output does not depend on provider iteration order.
    #[must_use]
    pub fn aggregate(mut errors: Vec<Error>) -> Self {
        errors.sort_by_cached_key(ToString::to_string);
        Error::Aggregate { errors }
    }

    /// Whether this error (or, for an aggregate, every member) is an unknown provider
    #[must_use]
    pub fn is_unknown_provider(&self) -> bool {
        match self {
            Error::UnknownProvider { .. } => true,
            Error::Aggregate { errors } => {
                !errors.is_empty() && errors.iter().all(Error::is_unknown_provider)
            }
            _ => false,
        }
    }

    /// Whether this error (or, for an aggregate, every member) is a missing key
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Aggregate { errors } => !errors.is_empty() && errors.iter().all(Error::is_not_found),
            _ => false,
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Configuration {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Configuration {
                message: format!("{}: {}", f(), base_error),
            }
        })
    }
}
