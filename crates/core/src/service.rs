//! Report service: the thin stateful layer between request handlers and
//! the pure evaluator.
//!
//! The evaluator and the edit state machine are pure; this module owns
//! the load/apply/save sequence against an injected [`ReportStore`] and
//! is the only place in the crate that logs.

use tracing::{info, warn};

use crate::error::CoreError;
use crate::evaluate::EvalOptions;
use crate::readings::ReadingSet;
use crate::report::{apply_edit, Report, VersionSnapshot};
use crate::store::ReportStore;
use crate::types::{EntityId, Timestamp};

/// Load a report, apply one edit on behalf of `editor_id`, and persist
/// the result.
///
/// Guard-rail failures (edit limit, wrong editor, invalid readings) are
/// returned without touching the store.
pub async fn edit_report<S: ReportStore + ?Sized>(
    store: &S,
    report_id: EntityId,
    editor_id: EntityId,
    new_readings: ReadingSet,
    options: &EvalOptions,
    now: Timestamp,
) -> Result<(Report, VersionSnapshot), CoreError> {
    let report = store.load(report_id).await?;

    let (updated, snapshot) = match apply_edit(&report, new_readings, editor_id, options, now) {
        Ok(result) => result,
        Err(err) => {
            warn!(%report_id, %editor_id, error = %err, "report edit rejected");
            return Err(err);
        }
    };

    store.save(&updated).await?;
    info!(
        %report_id,
        version = updated.version,
        edit_count = updated.edit_count,
        score = updated.evaluation.performance_score,
        "report edit applied"
    );

    Ok((updated, snapshot))
}
