//! Structured warnings attached to an evaluated report.
//!
//! Each failed check contributes one warning with a stable kind tag, a
//! lowercase severity, a human-readable message embedding the deviation
//! to one decimal place, and an optional replaceable-part hint that the
//! parts catalog can resolve.

use serde::{Deserialize, Serialize};

use crate::airflow::AmpCheck;
use crate::capacitor::{DualCapacitorResult, ToleranceResult};
use crate::readings::{AmpReading, RefrigerantStatus};
use crate::status::HealthStatus;

// ---------------------------------------------------------------------------
// Kind tags
// ---------------------------------------------------------------------------

pub const WARNING_BLOWER_CAPACITOR: &str = "blower_capacitor";
pub const WARNING_CONDENSER_CAPACITOR: &str = "condenser_capacitor";
pub const WARNING_DELTA_T: &str = "delta_t";
pub const WARNING_AMP_DRAW: &str = "amp_draw";
pub const WARNING_REFRIGERANT: &str = "refrigerant";

// ---------------------------------------------------------------------------
// Part hints
// ---------------------------------------------------------------------------

pub const PART_CAPACITOR: &str = "capacitor";
pub const PART_REFRIGERANT: &str = "refrigerant";

// ---------------------------------------------------------------------------
// Warning type
// ---------------------------------------------------------------------------

/// One structured warning produced by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Stable kind tag, one of the `WARNING_*` constants.
    pub kind: String,
    /// Lowercase severity: "warning" or "critical".
    pub severity: String,
    pub message: String,
    /// Replaceable-part hint, when one applies.
    pub part_needed: Option<String>,
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

/// Warning for an out-of-tolerance blower motor capacitor.
pub fn blower_capacitor_warning(result: &ToleranceResult) -> Warning {
    Warning {
        kind: WARNING_BLOWER_CAPACITOR.to_string(),
        severity: result.status.severity().to_string(),
        message: format!(
            "Blower motor capacitor reading is {:.1}% off from rated value",
            result.tolerance_pct
        ),
        part_needed: Some(PART_CAPACITOR.to_string()),
    }
}

/// Warning for an out-of-tolerance dual-run condenser capacitor.
///
/// The message names every terminal whose individual drift left the good
/// band, so a technician knows which leg to test on the replacement.
pub fn condenser_capacitor_warning(result: &DualCapacitorResult) -> Warning {
    let terminals = match result.failing_terminals.as_slice() {
        [single] => format!("on the {single} terminal"),
        many => format!("on the {} terminals", many.join(" and ")),
    };
    Warning {
        kind: WARNING_CONDENSER_CAPACITOR.to_string(),
        severity: result.combined.status.severity().to_string(),
        message: format!(
            "Condenser capacitor reading is {:.1}% off from rated value {terminals}",
            result.combined.tolerance_pct
        ),
        part_needed: Some(PART_CAPACITOR.to_string()),
    }
}

/// Warning for a temperature split outside the good band.
///
/// The quoted ideal range is the tighter 15-22°F comfort range the
/// report form shows, not the wider good band.
pub fn delta_t_warning(delta_f: f64, status: HealthStatus) -> Warning {
    Warning {
        kind: WARNING_DELTA_T.to_string(),
        severity: status.severity().to_string(),
        message: format!("Delta T is {delta_f:.1}°F (ideal range: 15-22°F)"),
        part_needed: None,
    }
}

/// Warning for amp draw outside the normal range.
pub fn amp_draw_warning(amps: &AmpReading, check: &AmpCheck) -> Warning {
    Warning {
        kind: WARNING_AMP_DRAW.to_string(),
        severity: check.status.severity().to_string(),
        message: format!(
            "Amp draw is {:.1}% off from rated value (actual: {}A, rated: {}A)",
            check.tolerance_pct, amps.actual_amps, amps.rated_amps
        ),
        part_needed: None,
    }
}

/// Warning for a refrigerant status other than Good.
///
/// Low charge is a warning; anything else that is not Good is critical.
pub fn refrigerant_warning(status: RefrigerantStatus) -> Warning {
    let severity = match status {
        RefrigerantStatus::Low => "warning",
        _ => "critical",
    };
    Warning {
        kind: WARNING_REFRIGERANT.to_string(),
        severity: severity.to_string(),
        message: format!("Refrigerant status: {}", status.label()),
        part_needed: Some(PART_REFRIGERANT.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
