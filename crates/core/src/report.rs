//! Maintenance report assembly and the bounded edit/version state
//! machine.
//!
//! A report starts at `version = 1` with `edit_count = 0` and accepts at
//! most [`MAX_REPORT_EDITS`] edits, each of which re-runs the full
//! evaluation. The first edit snapshots the pre-edit report as version 1
//! ("Before Repair"); every edit appends an "After Repair N" snapshot.
//! Snapshots carry the essential fields only; photos are excluded to keep
//! the version history small.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::evaluate::{evaluate, EvalOptions, Evaluation};
use crate::readings::ReadingSet;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of edits a report accepts after its original
/// submission. The fourth edit attempt is always rejected.
pub const MAX_REPORT_EDITS: u32 = 3;

/// Label for the pre-edit snapshot taken on the first edit.
pub const LABEL_BEFORE_REPAIR: &str = "Before Repair";

// ---------------------------------------------------------------------------
// Report metadata
// ---------------------------------------------------------------------------

/// Customer contact details captured on the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Nameplate details for one piece of equipment (evaporator or
/// condenser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentInfo {
    pub brand: String,
    pub model_number: String,
    pub serial_number: String,
    pub warranty_status: String,
}

/// Base64-encoded photos grouped by report section. Excluded from
/// version snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPhotos {
    pub evaporator: Vec<String>,
    pub condenser: Vec<String>,
    pub refrigerant: Vec<String>,
    pub capacitor: Vec<String>,
    pub temperature: Vec<String>,
    pub electrical: Vec<String>,
    pub drainage: Vec<String>,
    pub indoor_air_quality: Vec<String>,
    pub general: Vec<String>,
}

// ---------------------------------------------------------------------------
// Version snapshots
// ---------------------------------------------------------------------------

/// Essential state of a report at one point in its edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSnapshot {
    pub version: u32,
    /// "Before Repair" or "After Repair N".
    pub label: String,
    pub readings: ReadingSet,
    pub evaluation: Evaluation,
    pub recorded_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A full maintenance report: identity metadata, the submitted readings,
/// the derived evaluation, and the bounded version history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: EntityId,
    /// Shareable link token customers use to claim the report.
    pub unique_link: EntityId,
    pub technician_id: EntityId,
    pub technician_name: String,
    pub customer: CustomerContact,
    pub evaporator: EquipmentInfo,
    pub condenser: EquipmentInfo,
    pub readings: ReadingSet,
    pub evaluation: Evaluation,
    pub photos: ReportPhotos,
    /// Number of edits applied so far; never exceeds [`MAX_REPORT_EDITS`].
    pub edit_count: u32,
    /// Current version: `edit_count + 1`.
    pub version: u32,
    /// Empty before the first edit; `edit_count + 1` entries afterwards.
    pub versions: Vec<VersionSnapshot>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity and equipment metadata needed to assemble a new report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub technician_id: EntityId,
    pub technician_name: String,
    pub customer: CustomerContact,
    pub evaporator: EquipmentInfo,
    pub condenser: EquipmentInfo,
}

impl Report {
    /// Assemble a new report from a validated reading-set, running the
    /// full evaluation.
    pub fn new(
        meta: ReportMeta,
        readings: ReadingSet,
        photos: ReportPhotos,
        options: &EvalOptions,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        let evaluation = evaluate(&readings, options)?;
        Ok(Self {
            id: Uuid::new_v4(),
            unique_link: Uuid::new_v4(),
            technician_id: meta.technician_id,
            technician_name: meta.technician_name,
            customer: meta.customer,
            evaporator: meta.evaporator,
            condenser: meta.condenser,
            readings,
            evaluation,
            photos,
            edit_count: 0,
            version: 1,
            versions: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Snapshot the report's essential fields (no photos).
    fn snapshot(&self, version: u32, label: String, recorded_at: Timestamp) -> VersionSnapshot {
        VersionSnapshot {
            version,
            label,
            readings: self.readings.clone(),
            evaluation: self.evaluation.clone(),
            recorded_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Edit state machine
// ---------------------------------------------------------------------------

/// Apply one edit to a report, returning the updated report and the
/// snapshot the edit appended.
///
/// Guard rails, checked before any state is derived:
/// 1. `edit_count` must be below [`MAX_REPORT_EDITS`], otherwise
///    `EditLimitExceeded`.
/// 2. The editor must be the report's creator, otherwise `NotAuthorized`.
///
/// On success the new reading-set is fully re-evaluated, the version list
/// gains the pre-edit snapshot (first edit only) plus an
/// "After Repair N" snapshot, and `version` becomes `edit_count + 1`.
/// The input report is untouched; a rejected edit changes nothing.
pub fn apply_edit(
    report: &Report,
    new_readings: ReadingSet,
    editor_id: EntityId,
    options: &EvalOptions,
    now: Timestamp,
) -> Result<(Report, VersionSnapshot), CoreError> {
    if report.edit_count >= MAX_REPORT_EDITS {
        return Err(CoreError::EditLimitExceeded {
            edit_count: report.edit_count,
        });
    }
    if editor_id != report.technician_id {
        return Err(CoreError::NotAuthorized(
            "only the technician who created a report may edit it".to_string(),
        ));
    }

    let evaluation = evaluate(&new_readings, options)?;

    let mut updated = report.clone();
    if updated.versions.is_empty() {
        // First edit: preserve the original submission as version 1.
        let before = updated.snapshot(1, LABEL_BEFORE_REPAIR.to_string(), updated.created_at);
        updated.versions.push(before);
    }

    updated.readings = new_readings;
    updated.evaluation = evaluation;
    updated.edit_count = report.edit_count + 1;
    updated.version = updated.edit_count + 1;
    updated.updated_at = now;

    let label = format!("After Repair {}", updated.edit_count);
    let snapshot = updated.snapshot(updated.version, label, now);
    updated.versions.push(snapshot.clone());

    Ok((updated, snapshot))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
