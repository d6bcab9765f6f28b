use crate::{
    path_resolver::{destination_path, target_path},
    LinkError, LinkRequest,
};
use globlink_glob::expand_patterns;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// One glob match together with the link it should become.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    /// Path as returned by the glob engine.
    pub matched_path: PathBuf,
    /// Absolute path the link points to.
    pub target: PathBuf,
    /// Absolute path of the link.
    pub destination: PathBuf,
}

impl LinkCandidate {
    /// Returns `None` if `matched_path` has no base name.
    pub fn new(matched_path: PathBuf, cwd: &Path, dest_dir: &Path) -> Option<Self> {
        let destination = destination_path(dest_dir, &matched_path)?;
        let target = target_path(cwd, &matched_path);
        Some(LinkCandidate { matched_path, target, destination })
    }
}

/// Expand the patterns of `request` into candidates, in match order.
///
/// Candidates sharing a base name are kept. They map to the same destination and
/// each one goes through the collision check on its own.
#[instrument(skip(request), fields(patterns = ?request.patterns, cwd = ?request.cwd))]
pub fn plan(request: &LinkRequest) -> Result<Vec<LinkCandidate>, LinkError> {
    let candidates: Vec<_> = expand_patterns(&request.patterns, &request.cwd, &request.glob)
        .map_err(LinkError::Glob)?
        .into_iter()
        .filter_map(|matched_path| {
            let candidate =
                LinkCandidate::new(matched_path.clone(), &request.cwd, &request.dest_dir);
            if candidate.is_none() {
                tracing::warn!(
                    target: "globlink::plan",
                    ?matched_path,
                    "Skip match without a base name"
                );
            }
            candidate
        })
        .collect();

    tracing::debug!(target: "globlink::plan", count = candidates.len(), "Planned candidates");
    Ok(candidates)
}
