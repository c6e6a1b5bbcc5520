//! Fan-out helpers for batch operations.
//!
//! Every batch call polls all of its member requests concurrently and settles
//! only after each one has settled. A single failure fails the batch with a
//! `BatchError` carrying every per-element outcome in input order; it never
//! cancels sibling requests.

use std::future::Future;

use futures_util::future::join_all;

use crate::error::{BatchError, SdkError, SdkResult, ValidationError};
use crate::http::VeroResponse;

/// Reject an empty batch before anything is dispatched.
pub(crate) fn ensure_non_empty<T>(items: &[T], what: &'static str) -> Result<(), ValidationError> {
    if items.is_empty() {
        tracing::debug!(what, "Refusing empty batch");
        return Err(ValidationError::EmptyBatch { what });
    }
    Ok(())
}

/// Drive every request to completion and aggregate the outcomes.
pub(crate) async fn settle_all<I, F>(what: &'static str, requests: I) -> SdkResult<Vec<VeroResponse>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = SdkResult<VeroResponse>>,
{
    let outcomes = join_all(requests).await;
    aggregate(what, outcomes)
}

/// All `Ok` → responses in order; any `Err` → `BatchError` with everything.
pub(crate) fn aggregate(
    what: &'static str,
    outcomes: Vec<SdkResult<VeroResponse>>,
) -> SdkResult<Vec<VeroResponse>> {
    if outcomes.iter().any(Result::is_err) {
        return Err(batch_failure(what, outcomes));
    }

    tracing::debug!(what, total = outcomes.len(), "Batch settled");
    outcomes.into_iter().collect()
}

/// Wrap settled outcomes, at least one of them failed, into an `SdkError`.
pub(crate) fn batch_failure(what: &'static str, outcomes: Vec<SdkResult<VeroResponse>>) -> SdkError {
    let err = BatchError { outcomes };
    tracing::warn!(
        what,
        failed = err.failure_count(),
        total = err.outcomes.len(),
        "Batch settled with failures"
    );
    err.into()
}
