//! Persistence seam for reports.
//!
//! The document store itself lives in a downstream crate; this crate
//! only defines the trait the service layer calls through. Concurrency
//! control for the edit limit belongs to the implementation: `save` must
//! reject a write whose `edit_count` does not follow the stored value
//! (compare-and-set or equivalent), so two racing edits cannot both pass
//! the limit check.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::report::Report;
use crate::types::EntityId;

/// Load/save access to stored reports.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Load a report by id. Missing reports are `CoreError::NotFound`.
    async fn load(&self, report_id: EntityId) -> Result<Report, CoreError>;

    /// Persist a report, replacing any stored state for its id.
    async fn save(&self, report: &Report) -> Result<(), CoreError>;
}
