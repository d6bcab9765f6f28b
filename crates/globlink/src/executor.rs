use crate::{
    collector::{collect_concurrent, collect_sequential},
    collision::ensure_no_collision,
    LinkCandidate, LinkError, LinkResult,
};
use globlink_fs::{create_link, entry_exists, remove_all, LinkTypeHint};
use pipe_trait::Pipe;
use std::path::Path;
use tokio::task::spawn_blocking;
use tracing::instrument;

/// Settings shared by every candidate of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionConfig {
    pub force: bool,
    pub dry_run: bool,
    pub link_type: LinkTypeHint,
}

/// This subroutine turns planned candidates into links.
///
/// Both strategies run the same steps per candidate:
/// 1. Without `force`, an existing entry at the destination fails the whole request.
/// 2. In a dry run, nothing else happens.
/// 3. An existing entry at the destination is removed.
/// 4. The link is created.
///
/// Results come back in candidate order. Nothing is rolled back on failure.
#[must_use]
pub struct LinkExecutor<'a> {
    pub candidates: &'a [LinkCandidate],
    pub config: ExecutionConfig,
}

impl<'a> LinkExecutor<'a> {
    /// Run every candidate concurrently.
    ///
    /// Existence checks happen synchronously, right before the mutations of their own
    /// candidate, while the removals and link creations of other candidates may be in flight.
    /// A candidate sharing its destination with a sibling may pass its check before the
    /// sibling's link exists, and then fails with [`LinkError::CreateLink`] even under `force`.
    /// After the first failure, links created by sibling candidates stay in place, and
    /// blocking tasks already handed to the runtime are not cancelled.
    #[instrument(skip(self), fields(count = self.candidates.len(), config = ?self.config))]
    pub async fn run_concurrent(self) -> Result<Vec<LinkResult>, LinkError> {
        let LinkExecutor { candidates, config } = self;
        candidates
            .iter()
            .map(|candidate| link_candidate(candidate, config))
            .pipe(collect_concurrent)
            .await
    }

    /// Run the candidates one after another on the calling thread.
    ///
    /// A failure stops the loop before the next candidate is looked at.
    #[instrument(skip(self), fields(count = self.candidates.len(), config = ?self.config))]
    pub fn run_sequential(self) -> Result<Vec<LinkResult>, LinkError> {
        let LinkExecutor { candidates, config } = self;
        candidates
            .iter()
            .map(|candidate| link_candidate_sync(candidate, config))
            .pipe(collect_sequential)
    }
}

/// What is left to do for a candidate once it passed its checks.
enum Pending {
    Nothing,
    Link { replace: bool },
}

fn check_candidate(
    candidate: &LinkCandidate,
    config: ExecutionConfig,
) -> Result<Pending, LinkError> {
    ensure_no_collision(&candidate.destination, config.force)?;

    if config.dry_run {
        tracing::debug!(
            target: "globlink::link",
            link_target = ?candidate.target,
            link_path = ?candidate.destination,
            "Dry run"
        );
        return Ok(Pending::Nothing);
    }

    let replace = entry_exists(&candidate.destination).map_err(|error| {
        LinkError::InspectEntry { path: candidate.destination.clone(), error }
    })?;
    Ok(Pending::Link { replace })
}

fn remove_existing(destination: &Path) -> Result<(), LinkError> {
    tracing::debug!(target: "globlink::link", ?destination, "Remove existing entry");
    remove_all(destination)
        .map_err(|error| LinkError::RemoveExisting { path: destination.to_path_buf(), error })
}

fn create(candidate: &LinkCandidate, link_type: LinkTypeHint) -> Result<(), LinkError> {
    create_link(&candidate.target, &candidate.destination, link_type).map_err(|error| {
        LinkError::CreateLink {
            target: candidate.target.clone(),
            path: candidate.destination.clone(),
            error,
        }
    })?;
    tracing::debug!(
        target: "globlink::link",
        link_target = ?candidate.target,
        link_path = ?candidate.destination,
        "Linked"
    );
    Ok(())
}

/// Run `task` on the blocking thread pool.
async fn run_blocking<Task>(task: Task) -> Result<(), LinkError>
where
    Task: FnOnce() -> Result<(), LinkError> + Send + 'static,
{
    spawn_blocking(task).await.map_err(LinkError::TaskJoin)?
}

fn link_candidate_sync(
    candidate: &LinkCandidate,
    config: ExecutionConfig,
) -> Result<LinkResult, LinkError> {
    if let Pending::Link { replace } = check_candidate(candidate, config)? {
        if replace {
            remove_existing(&candidate.destination)?;
        }
        create(candidate, config.link_type)?;
    }
    Ok(LinkResult::from(candidate))
}

async fn link_candidate(
    candidate: &LinkCandidate,
    config: ExecutionConfig,
) -> Result<LinkResult, LinkError> {
    if let Pending::Link { replace } = check_candidate(candidate, config)? {
        // NOTE: siblings sharing this destination may remove or create it between the check
        // and here, in which case the link creation below fails with `CreateLink`.
        if replace {
            let destination = candidate.destination.clone();
            run_blocking(move || remove_existing(&destination)).await?;
        }
        let owned = candidate.clone();
        run_blocking(move || create(&owned, config.link_type)).await?;
    }
    Ok(LinkResult::from(candidate))
}
