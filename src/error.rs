use std::fmt;

/// Error type for icon pack operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    SourceLoadFailed { path: String, reason: String },
    RenderFailed { file: String, reason: String },
    IcoFailed { path: String, reason: String },
    ManifestFailed { path: String, reason: String },
    ArchiveFailed { path: String, reason: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::SourceLoadFailed { path, reason } => {
                write!(f, "failed to load source image '{}': {}", path, reason)
            }
            BuildError::RenderFailed { file, reason } => {
                write!(f, "failed to render '{}': {}", file, reason)
            }
            BuildError::IcoFailed { path, reason } => {
                write!(f, "failed to write ICO '{}': {}", path, reason)
            }
            BuildError::ManifestFailed { path, reason } => {
                write!(f, "failed to write manifest '{}': {}", path, reason)
            }
            BuildError::ArchiveFailed { path, reason } => {
                write!(f, "failed to write archive '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for BuildError {}
