//! Per-item results for batch operations.

use crate::store::StoreError;

/// One failed write inside a batch operation.
#[derive(Debug)]
pub struct BatchFailure {
    /// Id of the record whose write failed.
    pub id: String,
    /// The store error, propagated verbatim.
    pub error: StoreError,
}

/// Result of an `update_many` call.
///
/// Batch writes fan out concurrently and are not transactional: records
/// counted in `modified` stay written even when `failures` is non-empty.
#[derive(Debug, Default)]
pub struct UpdateReport {
    /// Records whose hash merge completed.
    pub modified: usize,
    /// Records whose write failed.
    pub failures: Vec<BatchFailure>,
}

impl UpdateReport {
    /// Whether every matched record was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of a `delete_many` call, under the same non-transactional
/// contract as [`UpdateReport`].
#[derive(Debug, Default)]
pub struct DeleteReport {
    /// Records fully removed (hash deleted and id deregistered).
    pub deleted: usize,
    /// Records whose removal failed partway; the hash delete may have
    /// landed even when the registry removal did not.
    pub failures: Vec<BatchFailure>,
}

impl DeleteReport {
    /// Whether every matched record was removed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
