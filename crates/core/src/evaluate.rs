//! The diagnostic evaluator: reading-set in, statuses + warnings + score
//! out.
//!
//! `evaluate` is pure and synchronous. It holds no state and touches no
//! I/O, so request handlers may call it concurrently without any
//! coordination.

use serde::{Deserialize, Serialize};

use crate::airflow::{check_amp_draw, check_delta_t, AmpCheck};
use crate::capacitor::{check_capacitor, check_dual_capacitor, DualCapacitorResult, ToleranceResult};
use crate::error::CoreError;
use crate::readings::{BlowerMotorType, ReadingSet, RefrigerantStatus};
use crate::score::{performance_score, AgeSource, ScoreInputs};
use crate::status::HealthStatus;
use crate::warning::{
    amp_draw_warning, blower_capacitor_warning, condenser_capacitor_warning, delta_t_warning,
    refrigerant_warning, Warning,
};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Evaluator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalOptions {
    /// Which component age feeds the score's age deduction.
    pub age_source: AgeSource,
}

// ---------------------------------------------------------------------------
// Evaluation output
// ---------------------------------------------------------------------------

/// Derived diagnostics for one reading-set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub delta_t_f: f64,
    pub delta_t_status: HealthStatus,
    /// Absent for ECM blower motors (no run capacitor to check).
    pub blower_capacitor: Option<ToleranceResult>,
    pub condenser_capacitor: DualCapacitorResult,
    /// Absent when the report variant does not capture amp draw.
    pub amp_draw: Option<AmpCheck>,
    pub warnings: Vec<Warning>,
    pub performance_score: u8,
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Evaluate a reading-set into tolerance statuses, warnings, and a
/// performance score.
///
/// Warnings are appended in a fixed order: blower capacitor, condenser
/// capacitor, delta-T, amp draw, refrigerant.
pub fn evaluate(readings: &ReadingSet, options: &EvalOptions) -> Result<Evaluation, CoreError> {
    readings.validate()?;

    // Blower capacitor is only meaningful on PSC motors.
    let blower_capacitor = match (readings.blower_motor_type, &readings.blower_capacitor) {
        (BlowerMotorType::Psc, Some(cap)) => Some(check_capacitor(cap)?),
        _ => None,
    };

    let condenser_capacitor = check_dual_capacitor(
        &readings.condenser_capacitor_herm,
        readings.condenser_capacitor_fan.as_ref(),
    )?;

    let delta_t_f = readings.delta_t();
    let delta_t_status = check_delta_t(delta_t_f);

    let amp_draw = readings
        .amp_draw
        .as_ref()
        .map(check_amp_draw)
        .transpose()?;

    let mut warnings = Vec::new();
    if let Some(result) = &blower_capacitor {
        if result.needs_replacement {
            warnings.push(blower_capacitor_warning(result));
        }
    }
    if condenser_capacitor.combined.needs_replacement {
        warnings.push(condenser_capacitor_warning(&condenser_capacitor));
    }
    if delta_t_status != HealthStatus::Good {
        warnings.push(delta_t_warning(delta_t_f, delta_t_status));
    }
    if let (Some(check), Some(amps)) = (&amp_draw, &readings.amp_draw) {
        if check.status != HealthStatus::Good {
            warnings.push(amp_draw_warning(amps, check));
        }
    }
    if readings.refrigerant_status != RefrigerantStatus::Good {
        warnings.push(refrigerant_warning(readings.refrigerant_status));
    }

    let worst_capacitor_tolerance_pct = blower_capacitor
        .map(|r| r.tolerance_pct)
        .unwrap_or(0.0)
        .max(condenser_capacitor.combined.tolerance_pct);

    let score_inputs = ScoreInputs {
        worst_capacitor_tolerance_pct,
        delta_t_f,
        amp_tolerance_pct: amp_draw.map(|c| c.tolerance_pct),
        refrigerant_status: readings.refrigerant_status,
        primary_drain: readings.primary_drain,
        drain_pan: readings.drain_pan,
        air_purifier: readings.air_purifier,
        system_age_years: options
            .age_source
            .resolve(readings.evaporator_age_years, readings.condenser_age_years),
    };
    let performance_score = performance_score(&score_inputs);

    Ok(Evaluation {
        delta_t_f,
        delta_t_status,
        blower_capacitor,
        condenser_capacitor,
        amp_draw,
        warnings,
        performance_score,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
