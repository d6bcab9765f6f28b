use derive_more::{Display, Error};
use globlink_glob::GlobError;
use miette::Diagnostic;
use std::{io, path::PathBuf};
use tokio::task::JoinError;

/// Error type of [`link`](crate::link) and [`link_sync`](crate::link_sync).
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum LinkError {
    #[display("Failed to get the current working directory: {_0}")]
    #[diagnostic(code(globlink::current_dir))]
    CurrentDir(#[error(source)] io::Error),

    #[display("Path {dest_dir:?} doesn't exist")]
    #[diagnostic(code(globlink::destination_not_found))]
    DestinationNotFound { dest_dir: PathBuf },

    #[display("Path {dest_dir:?} is not a directory")]
    #[diagnostic(code(globlink::destination_not_directory))]
    DestinationNotDirectory { dest_dir: PathBuf },

    #[display("Failed to inspect the destination directory {dest_dir:?}: {error}")]
    #[diagnostic(code(globlink::inspect_destination))]
    InspectDestination {
        dest_dir: PathBuf,
        #[error(source)]
        error: io::Error,
    },

    #[display("{path:?} already exists. Pass the `force` option to replace it")]
    #[diagnostic(
        code(globlink::collision_blocked),
        help("Set `force: true` to remove existing entries before linking")
    )]
    CollisionBlocked { path: PathBuf },

    #[display("Failed to check whether {path:?} exists: {error}")]
    #[diagnostic(code(globlink::inspect_entry))]
    InspectEntry {
        path: PathBuf,
        #[error(source)]
        error: io::Error,
    },

    #[display("Failed to remove the existing entry at {path:?}: {error}")]
    #[diagnostic(code(globlink::remove_existing))]
    RemoveExisting {
        path: PathBuf,
        #[error(source)]
        error: io::Error,
    },

    #[display("Failed to create symlink at {path:?} to {target:?}: {error}")]
    #[diagnostic(code(globlink::create_link))]
    CreateLink {
        target: PathBuf,
        path: PathBuf,
        #[error(source)]
        error: io::Error,
    },

    #[display("{_0}")]
    #[diagnostic(transparent)]
    Glob(#[error(source)] GlobError),

    #[display("A filesystem task did not complete: {_0}")]
    #[diagnostic(code(globlink::task_join))]
    TaskJoin(#[error(source)] JoinError),
}

impl LinkError {
    /// Path the error is about, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            LinkError::DestinationNotFound { dest_dir }
            | LinkError::DestinationNotDirectory { dest_dir }
            | LinkError::InspectDestination { dest_dir, .. } => Some(dest_dir),
            LinkError::CollisionBlocked { path }
            | LinkError::InspectEntry { path, .. }
            | LinkError::RemoveExisting { path, .. }
            | LinkError::CreateLink { path, .. } => Some(path),
            LinkError::CurrentDir(_) | LinkError::Glob(_) | LinkError::TaskJoin(_) => None,
        }
    }
}
