use crate::{LinkCandidate, LinkError};
use futures_util::future;
use serde::Serialize;
use std::{future::Future, path::PathBuf};

/// A link that was created, or would have been in a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResult {
    /// Absolute path the link points to.
    pub target: PathBuf,
    /// Absolute path of the link itself.
    pub path: PathBuf,
}

impl From<&LinkCandidate> for LinkResult {
    fn from(candidate: &LinkCandidate) -> Self {
        LinkResult { target: candidate.target.clone(), path: candidate.destination.clone() }
    }
}

/// Gather outcomes one by one, in order. Stops pulling at the first error, so a lazy
/// iterator never runs the steps that come after it.
pub fn collect_sequential<Outcomes>(outcomes: Outcomes) -> Result<Vec<LinkResult>, LinkError>
where
    Outcomes: IntoIterator<Item = Result<LinkResult, LinkError>>,
{
    let results = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(target: "globlink::link", count = results.len(), "Collected results");
    Ok(results)
}

/// Drive every pipeline at once and gather their outcomes in the order the pipelines were given.
///
/// The first error to surface wins. Pipelines still pending at that point are dropped.
pub async fn collect_concurrent<Pipelines, Pipeline>(
    pipelines: Pipelines,
) -> Result<Vec<LinkResult>, LinkError>
where
    Pipelines: IntoIterator<Item = Pipeline>,
    Pipeline: Future<Output = Result<LinkResult, LinkError>>,
{
    let results = future::try_join_all(pipelines).await?;
    tracing::debug!(target: "globlink::link", count = results.len(), "Collected results");
    Ok(results)
}
