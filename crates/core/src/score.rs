//! Performance score: 100 minus independent per-category deductions.
//!
//! Each category contributes at most one deduction, taken from its worst
//! matching band (bands are checked most severe first). Categories do not
//! interact, so evaluation order never changes the result; the final
//! score is clamped to `[0, 100]`.

use serde::{Deserialize, Serialize};

use crate::readings::{
    AirPurifierCondition, DrainPanCondition, PrimaryDrainCondition, RefrigerantStatus,
};

// ---------------------------------------------------------------------------
// Age source
// ---------------------------------------------------------------------------

/// Which component age feeds the age deduction.
///
/// The report form captures evaporator and condenser ages separately and
/// different report variants have scored different ones, so the choice is
/// configuration rather than a hard-coded field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeSource {
    /// Evaporator age, falling back to condenser age when unknown.
    #[default]
    EvaporatorThenCondenser,
    Evaporator,
    Condenser,
    /// Age never affects the score.
    Ignore,
}

impl AgeSource {
    /// Resolve the age in years that the score should use.
    pub fn resolve(self, evaporator: Option<i32>, condenser: Option<i32>) -> Option<i32> {
        match self {
            Self::EvaporatorThenCondenser => evaporator.or(condenser),
            Self::Evaporator => evaporator,
            Self::Condenser => condenser,
            Self::Ignore => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Score inputs
// ---------------------------------------------------------------------------

/// Everything the score needs, already reduced to the worst reading per
/// category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreInputs {
    /// Worst tolerance across all capacitors checked, percent.
    pub worst_capacitor_tolerance_pct: f64,
    /// Temperature split, degrees Fahrenheit.
    pub delta_t_f: f64,
    /// Amp drift percent, when the report variant captures amp draw.
    pub amp_tolerance_pct: Option<f64>,
    pub refrigerant_status: RefrigerantStatus,
    pub primary_drain: PrimaryDrainCondition,
    pub drain_pan: DrainPanCondition,
    pub air_purifier: AirPurifierCondition,
    /// Resolved component age in years, when known.
    pub system_age_years: Option<i32>,
}

// ---------------------------------------------------------------------------
// Per-category deductions
// ---------------------------------------------------------------------------

/// Capacitor deduction, up to 40 points.
pub fn capacitor_deduction(tolerance_pct: f64) -> u32 {
    if tolerance_pct > 20.0 {
        40
    } else if tolerance_pct > 15.0 {
        30
    } else if tolerance_pct > 10.0 {
        20
    } else if tolerance_pct > 6.0 {
        10
    } else {
        0
    }
}

/// Delta-T deduction, up to 25 points. Bands widen outward from the
/// 15-22°F comfort range; only the worst matching band applies.
pub fn delta_t_deduction(delta_f: f64) -> u32 {
    if !(10.0..=28.0).contains(&delta_f) {
        25
    } else if !(12.0..=25.0).contains(&delta_f) {
        15
    } else if !(15.0..=22.0).contains(&delta_f) {
        8
    } else {
        0
    }
}

/// Amp-draw deduction, up to 20 points.
pub fn amp_deduction(tolerance_pct: f64) -> u32 {
    if tolerance_pct > 25.0 {
        20
    } else if tolerance_pct > 15.0 {
        12
    } else if tolerance_pct > 10.0 {
        6
    } else {
        0
    }
}

/// Refrigerant deduction, up to 20 points.
pub fn refrigerant_deduction(status: RefrigerantStatus) -> u32 {
    match status {
        RefrigerantStatus::Critical => 20,
        RefrigerantStatus::Low => 10,
        RefrigerantStatus::Good => 0,
    }
}

/// Primary drain deduction: 15 points when clogged.
pub fn primary_drain_deduction(condition: PrimaryDrainCondition) -> u32 {
    match condition {
        PrimaryDrainCondition::Clogged => 15,
        _ => 0,
    }
}

/// Drain pan deduction, up to 15 points.
pub fn drain_pan_deduction(condition: DrainPanCondition) -> u32 {
    match condition {
        DrainPanCondition::Rusted => 15,
        DrainPanCondition::PoorCondition => 10,
        DrainPanCondition::FairCondition => 5,
        DrainPanCondition::GoodShape => 0,
    }
}

/// Air purifier deduction, up to 10 points.
pub fn air_purifier_deduction(condition: AirPurifierCondition) -> u32 {
    match condition {
        AirPurifierCondition::NeedsReplacement => 10,
        AirPurifierCondition::UvLightNeedsReplacement => 5,
        AirPurifierCondition::Good => 0,
    }
}

/// Age deduction, up to 10 points. Unknown age deducts nothing.
pub fn age_deduction(age_years: Option<i32>) -> u32 {
    match age_years {
        Some(age) if age > 15 => 10,
        Some(age) if age > 12 => 5,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Aggregate score
// ---------------------------------------------------------------------------

/// Compute the overall system performance score in `[0, 100]`.
pub fn performance_score(inputs: &ScoreInputs) -> u8 {
    let deductions = capacitor_deduction(inputs.worst_capacitor_tolerance_pct)
        + delta_t_deduction(inputs.delta_t_f)
        + inputs.amp_tolerance_pct.map_or(0, amp_deduction)
        + refrigerant_deduction(inputs.refrigerant_status)
        + primary_drain_deduction(inputs.primary_drain)
        + drain_pan_deduction(inputs.drain_pan)
        + air_purifier_deduction(inputs.air_purifier)
        + age_deduction(inputs.system_age_years);

    100u32.saturating_sub(deductions).min(100) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
