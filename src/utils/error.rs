use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Cannot read or write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch '{url}': {reason}")]
    NetworkError { url: String, reason: String },

    #[error("{document} failed schema validation:\n{}", .details.join("\n"))]
    ValidationError {
        document: String,
        details: Vec<String>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error: '{collection}' is missing or empty")]
    EmptyCollectionError { collection: String },

    #[error("Configuration error: port '{slug}' has alias '{alias}', which is not a known port")]
    DanglingAliasError { slug: String, alias: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Section '{section}' not found in document: {reason}")]
    SectionNotFoundError { section: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Network,
    Validation,
    Configuration,
    Render,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GenError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        GenError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        GenError::NetworkError {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GenError::IoError { .. } => ErrorCategory::Io,
            GenError::NetworkError { .. } => ErrorCategory::Network,
            GenError::ValidationError { .. } => ErrorCategory::Validation,
            GenError::ConfigError { .. }
            | GenError::EmptyCollectionError { .. }
            | GenError::DanglingAliasError { .. }
            | GenError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GenError::SectionNotFoundError { .. } => ErrorCategory::Render,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Render => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Everything except a splice failure aborts the run before the README is touched.
    pub fn is_fatal(&self) -> bool {
        self.category() != ErrorCategory::Render
    }

    /// Process exit status for a run that stopped on this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Render => 0,
            ErrorCategory::Validation | ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GenError::IoError { .. } => "Check that the file exists and is readable from the working directory",
            GenError::NetworkError { .. } => "Check network access to the userstyles repository and run again",
            GenError::ValidationError { .. } => {
                "Fix the reported fields so the catalog matches its schema"
            }
            GenError::DanglingAliasError { .. } => {
                "Point the alias at an existing port slug or remove it"
            }
            GenError::EmptyCollectionError { .. } => {
                "Make sure the catalog file has at least one entry"
            }
            GenError::ConfigError { .. } | GenError::InvalidConfigValueError { .. } => {
                "Review the command line flags and portlist.toml"
            }
            GenError::SectionNotFoundError { .. } => {
                "Add matching AUTOGEN START/END markers to the README"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Network => format!("Could not download the userstyles catalog: {}", self),
            ErrorCategory::Validation => format!("A catalog is invalid: {}", self),
            ErrorCategory::Configuration => self.to_string(),
            ErrorCategory::Render => format!("README was only partially updated: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
