//! Create symlinks in a directory for every path matched by a set of glob patterns.
//!
//! ```no_run
//! # async fn example() -> Result<(), globlink::LinkError> {
//! use globlink::{link, link_sync, LinkOptions};
//!
//! let options = LinkOptions::default().with_cwd("fixtures").with_force(true);
//! let links = link(["**/*.txt"], "node_modules/.bin", options.clone()).await?;
//! let same_links = link_sync(["**/*.txt"], "node_modules/.bin", options)?;
//! assert_eq!(links, same_links);
//! # Ok(())
//! # }
//! ```
//!
//! Links are named after the base name of each match, so `sub/deep/file.txt` becomes
//! `<dest>/file.txt`. Two matches sharing a base name compete for the same link:
//!
//! * [`link_sync`] handles them in order. Without `force` the second one fails with
//!   [`LinkError::CollisionBlocked`]; with `force` the last one wins.
//! * [`link`] may check the second one before the first link exists, and then both try to
//!   create it. The call fails with [`LinkError::CreateLink`] for that path, with or without
//!   `force`. When the first link is already there at the second check, the outcome is the
//!   sequential one: [`LinkError::CollisionBlocked`], or with `force` one link pointing at
//!   one of the matches.

mod collector;
mod collision;
mod error;
mod executor;
mod options;
mod path_resolver;
mod planner;
mod request;

pub use collector::LinkResult;
pub use collision::{evaluate, CollisionVerdict};
pub use error::LinkError;
pub use executor::{ExecutionConfig, LinkExecutor};
pub use globlink_fs::{LinkTypeHint, Platform};
pub use globlink_glob::{GlobError, GlobOptions};
pub use options::LinkOptions;
pub use planner::{plan, LinkCandidate};
pub use request::LinkRequest;

use std::path::Path;
use tokio::task::spawn_blocking;

/// Link every match of `patterns` into `dest_dir`, working on all matches concurrently.
///
/// Relative `dest_dir` is resolved against the process working directory, not against
/// [`LinkOptions::cwd`]. Must be called from within a tokio runtime.
///
/// On failure, links already created for other matches are left in place.
pub async fn link<Patterns>(
    patterns: Patterns,
    dest_dir: impl AsRef<Path>,
    options: LinkOptions,
) -> Result<Vec<LinkResult>, LinkError>
where
    Patterns: IntoIterator,
    Patterns::Item: AsRef<str>,
{
    let request = LinkRequest::new(patterns, dest_dir.as_ref(), options)?;
    let (request, candidates) =
        spawn_blocking(move || plan(&request).map(|candidates| (request, candidates)))
            .await
            .map_err(LinkError::TaskJoin)??;

    LinkExecutor { candidates: &candidates, config: request.execution_config() }
        .run_concurrent()
        .await
}

/// Link every match of `patterns` into `dest_dir`, one match at a time, blocking the thread.
///
/// The first failure stops the run: matches before it are linked, matches after it are untouched.
pub fn link_sync<Patterns>(
    patterns: Patterns,
    dest_dir: impl AsRef<Path>,
    options: LinkOptions,
) -> Result<Vec<LinkResult>, LinkError>
where
    Patterns: IntoIterator,
    Patterns::Item: AsRef<str>,
{
    let request = LinkRequest::new(patterns, dest_dir.as_ref(), options)?;
    let candidates = plan(&request)?;

    LinkExecutor { candidates: &candidates, config: request.execution_config() }.run_sequential()
}
