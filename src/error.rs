use std::path::PathBuf;

/// Every error strata can produce. All of them come from the file-handling
/// layer; analysis itself never fails, malformed markdown just degrades.
#[derive(Debug)]
pub enum StrataError {
    NotFound {
        path: PathBuf,
    },
    PermissionDenied {
        path: PathBuf,
    },
    /// The file exists but is not UTF-8 text.
    NotText {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for StrataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "not found: {}", path.display()),
            Self::PermissionDenied { path } => {
                write!(f, "{} [permission denied]", path.display())
            }
            Self::NotText { path } => {
                write!(f, "{} is not UTF-8 text", path.display())
            }
            Self::IoError { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for StrataError {}

impl StrataError {
    /// Process exit code for the CLI.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::IoError { .. } => 2,
            Self::NotText { .. } => 3,
            Self::PermissionDenied { .. } => 4,
        }
    }
}
