use derive_more::{Display, Error};
use miette::Diagnostic;
use std::path::PathBuf;

/// Error type of [`expand_patterns`](crate::expand_patterns).
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum GlobError {
    #[display("Invalid glob pattern {pattern:?}: {error}")]
    #[diagnostic(code(globlink_glob::invalid_pattern))]
    InvalidPattern {
        pattern: String,
        #[error(source)]
        error: globset::Error,
    },

    #[display("Failed to read directory entries under {root:?}: {error}")]
    #[diagnostic(code(globlink_glob::walk))]
    Walk {
        root: PathBuf,
        #[error(source)]
        error: walkdir::Error,
    },
}
