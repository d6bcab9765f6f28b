use crate::{
    path_resolver::{resolve_cwd, resolve_dest_dir},
    ExecutionConfig, LinkError, LinkOptions,
};
use globlink_fs::{LinkTypeHint, Platform};
use globlink_glob::GlobOptions;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

/// A validated link request.
///
/// Constructing one checks that the destination directory exists. Nothing is cached
/// about the entries inside it.
#[derive(Debug, Clone)]
pub struct LinkRequest {
    /// Glob patterns, in order.
    pub patterns: Vec<String>,
    /// Absolute destination directory.
    pub dest_dir: PathBuf,
    /// Absolute base directory of the patterns and the link targets.
    pub cwd: PathBuf,
    pub force: bool,
    pub dry_run: bool,
    /// Options for the glob engine.
    pub glob: GlobOptions,
    /// How links are created on this platform.
    pub link_type: LinkTypeHint,
}

impl LinkRequest {
    /// Resolve paths against the process working directory and validate the destination.
    pub fn new<Patterns>(
        patterns: Patterns,
        dest_dir: &Path,
        options: LinkOptions,
    ) -> Result<Self, LinkError>
    where
        Patterns: IntoIterator,
        Patterns::Item: AsRef<str>,
    {
        let process_cwd = env::current_dir().map_err(LinkError::CurrentDir)?;
        let LinkOptions { cwd, force, dry_run, glob } = options;

        let dest_dir = resolve_dest_dir(&process_cwd, dest_dir);
        ensure_dest_dir(&dest_dir)?;

        Ok(LinkRequest {
            patterns: patterns.into_iter().map(|pattern| pattern.as_ref().to_string()).collect(),
            cwd: resolve_cwd(&process_cwd, cwd.as_deref()),
            dest_dir,
            force,
            dry_run,
            glob,
            link_type: LinkTypeHint::for_platform(Platform::current()),
        })
    }

    /// Settings the executor needs for every candidate of this request.
    pub fn execution_config(&self) -> ExecutionConfig {
        ExecutionConfig { force: self.force, dry_run: self.dry_run, link_type: self.link_type }
    }
}

fn ensure_dest_dir(dest_dir: &Path) -> Result<(), LinkError> {
    match fs::metadata(dest_dir) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(LinkError::DestinationNotDirectory { dest_dir: dest_dir.to_path_buf() }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(LinkError::DestinationNotFound { dest_dir: dest_dir.to_path_buf() })
        }
        Err(error) => {
            Err(LinkError::InspectDestination { dest_dir: dest_dir.to_path_buf(), error })
        }
    }
}
