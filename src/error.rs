use thiserror::Error;

/// Unified error type for release-gate operations
#[derive(Error, Debug)]
pub enum ReleaseGateError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Checkout branch '{expected}' before generating release.")]
    WrongBranch { expected: String, actual: String },

    #[error("Working tree has uncommitted changes:\n{}", list_files(.files))]
    DirtyTree { files: Vec<String> },

    #[error("Version error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Failed to tag a release.")]
    Helper { detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn list_files(files: &[String]) -> String {
    files
        .iter()
        .map(|f| format!("  {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convenience type alias for Results in release-gate
pub type Result<T> = std::result::Result<T, ReleaseGateError>;

impl ReleaseGateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseGateError::Config(msg.into())
    }

    /// Create a wrong-branch error naming the required release branch
    pub fn wrong_branch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ReleaseGateError::WrongBranch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a dirty-tree error carrying the modified file list
    pub fn dirty_tree(files: Vec<String>) -> Self {
        ReleaseGateError::DirtyTree { files }
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseGateError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseGateError::Tag(msg.into())
    }

    /// Create a helper failure; `detail` is kept for debug logging only
    pub fn helper(detail: impl Into<String>) -> Self {
        ReleaseGateError::Helper {
            detail: detail.into(),
        }
    }
}
