use crate::LinkError;
use globlink_fs::entry_exists;
use std::path::Path;

/// Outcome of checking a destination before linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionVerdict {
    /// Nothing blocks the link. An existing entry may still need removal under `force`.
    Proceed,
    /// An entry occupies the destination and `force` is off.
    Block,
}

/// Decide whether `destination` may be linked.
///
/// With `force` the filesystem is not consulted at all.
pub fn evaluate(destination: &Path, force: bool) -> Result<CollisionVerdict, LinkError> {
    if force {
        return Ok(CollisionVerdict::Proceed);
    }
    let exists = entry_exists(destination)
        .map_err(|error| LinkError::InspectEntry { path: destination.to_path_buf(), error })?;
    Ok(if exists { CollisionVerdict::Block } else { CollisionVerdict::Proceed })
}

/// Like [`evaluate`], but a [`CollisionVerdict::Block`] becomes [`LinkError::CollisionBlocked`].
pub fn ensure_no_collision(destination: &Path, force: bool) -> Result<(), LinkError> {
    match evaluate(destination, force)? {
        CollisionVerdict::Proceed => Ok(()),
        CollisionVerdict::Block => {
            tracing::debug!(target: "globlink::link", ?destination, "Collision");
            Err(LinkError::CollisionBlocked { path: destination.to_path_buf() })
        }
    }
}
