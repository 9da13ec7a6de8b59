//! Capacitor tolerance checks.
//!
//! A run capacitor is judged by how far its measured microfarad reading
//! drifts from the nameplate rating. Dual-run condenser capacitors have
//! two output terminals (herm and fan) that are checked independently and
//! then combined into a single worst-of status for the report.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::readings::CapacitorReading;
use crate::status::HealthStatus;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Drift at or below this percentage is within manufacturer tolerance.
pub const CAPACITOR_GOOD_MAX_PCT: f64 = 6.0;

/// Drift at or below this percentage (and above the good band) means the
/// capacitor is weakening and should be replaced soon.
pub const CAPACITOR_WARNING_MAX_PCT: f64 = 10.0;

/// Terminal name for the compressor leg of a dual-run capacitor.
pub const TERMINAL_HERM: &str = "herm";

/// Terminal name for the condenser fan leg of a dual-run capacitor.
pub const TERMINAL_FAN: &str = "fan";

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Outcome of a single tolerance check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceResult {
    pub status: HealthStatus,
    pub tolerance_pct: f64,
    pub needs_replacement: bool,
}

/// Combined outcome for a dual-run condenser capacitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualCapacitorResult {
    pub herm: ToleranceResult,
    /// Absent when the fan terminal was not measured separately.
    pub fan: Option<ToleranceResult>,
    /// Worst status across terminals; tolerance is the max drift.
    pub combined: ToleranceResult,
    /// Terminals whose individual drift exceeded the good band, in check
    /// order (herm first).
    pub failing_terminals: Vec<String>,
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Check one capacitor reading against its rating.
///
/// `tolerance = |rating - reading| / rating * 100`. A non-positive rating
/// is a validation error (the caller contract requires `rating > 0`).
pub fn check_capacitor(cap: &CapacitorReading) -> Result<ToleranceResult, CoreError> {
    if !cap.rating_uf.is_finite() || cap.rating_uf <= 0.0 {
        return Err(CoreError::Validation(format!(
            "capacitor rating must be positive, got {}",
            cap.rating_uf
        )));
    }

    let tolerance_pct = (cap.rating_uf - cap.reading_uf).abs() / cap.rating_uf * 100.0;
    let (status, needs_replacement) = if tolerance_pct <= CAPACITOR_GOOD_MAX_PCT {
        (HealthStatus::Good, false)
    } else if tolerance_pct <= CAPACITOR_WARNING_MAX_PCT {
        (HealthStatus::Warning, true)
    } else {
        (HealthStatus::Critical, true)
    };

    Ok(ToleranceResult {
        status,
        tolerance_pct,
        needs_replacement,
    })
}

/// Check a dual-run condenser capacitor: herm terminal always, fan
/// terminal when measured.
///
/// The combined status is the worse of the two terminals (ties resolve
/// toward herm, which is checked first); the combined tolerance is the
/// larger drift.
pub fn check_dual_capacitor(
    herm: &CapacitorReading,
    fan: Option<&CapacitorReading>,
) -> Result<DualCapacitorResult, CoreError> {
    let herm_result = check_capacitor(herm)?;
    let fan_result = fan.map(|cap| check_capacitor(cap)).transpose()?;

    let mut combined = herm_result;
    let mut failing_terminals = Vec::new();
    if herm_result.status != HealthStatus::Good {
        failing_terminals.push(TERMINAL_HERM.to_string());
    }

    if let Some(fan_result) = fan_result {
        combined.status = herm_result.status.worst(fan_result.status);
        if fan_result.tolerance_pct > combined.tolerance_pct {
            combined.tolerance_pct = fan_result.tolerance_pct;
        }
        combined.needs_replacement = herm_result.needs_replacement || fan_result.needs_replacement;
        if fan_result.status != HealthStatus::Good {
            failing_terminals.push(TERMINAL_FAN.to_string());
        }
    }

    Ok(DualCapacitorResult {
        herm: herm_result,
        fan: fan_result,
        combined,
        failing_terminals,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
