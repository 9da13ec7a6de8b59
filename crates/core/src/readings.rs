//! Reading-set types: the validated sensor and condition readings a
//! technician submits for one inspection.
//!
//! A `ReadingSet` is constructed fresh per evaluation request and is
//! immutable once validated. Photos are deliberately not part of the
//! reading-set; they attach to the report and are excluded from version
//! snapshots (see `report.rs`).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Condition enums
// ---------------------------------------------------------------------------

/// Refrigerant circuit status as assessed by the technician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefrigerantStatus {
    Good,
    Low,
    Critical,
}

impl RefrigerantStatus {
    /// Label matching the strings the original report form presents.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Low => "Low - Add Refrigerant",
            Self::Critical => "Critical - Repairs may be needed",
        }
    }
}

/// Blower motor construction. Only PSC motors carry a run capacitor;
/// ECM motors are skipped by the capacitor check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlowerMotorType {
    Psc,
    Ecm,
}

impl BlowerMotorType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Psc => "PSC Motor",
            Self::Ecm => "ECM Motor",
        }
    }
}

/// Primary condensate drain condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryDrainCondition {
    Clear,
    PartiallyBlocked,
    Clogged,
}

impl PrimaryDrainCondition {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear and flowing",
            Self::PartiallyBlocked => "Partially blocked",
            Self::Clogged => "Clogged, needs immediate service",
        }
    }
}

/// Drain pan condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainPanCondition {
    GoodShape,
    FairCondition,
    PoorCondition,
    Rusted,
}

impl DrainPanCondition {
    pub fn label(self) -> &'static str {
        match self {
            Self::GoodShape => "Good shape",
            Self::FairCondition => "Fair condition",
            Self::PoorCondition => "Poor condition",
            Self::Rusted => "Rusted and should be replaced",
        }
    }
}

/// Air purifier / UV light condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirPurifierCondition {
    Good,
    UvLightNeedsReplacement,
    NeedsReplacement,
}

impl AirPurifierCondition {
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::UvLightNeedsReplacement => "UV light needs replacement",
            Self::NeedsReplacement => "Air purifier needs replacement",
        }
    }
}

/// Condenser fan motor operating condition. Carried through to the
/// report; not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CondenserFanMotor {
    NormalOperation,
    MotorVibration,
    BladeVibration,
    Inoperative,
}

impl CondenserFanMotor {
    pub fn label(self) -> &'static str {
        match self {
            Self::NormalOperation => "Normal Operation",
            Self::MotorVibration => "Motor Vibration",
            Self::BladeVibration => "Blade Vibration",
            Self::Inoperative => "Inoperative",
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric reading pairs
// ---------------------------------------------------------------------------

/// A capacitor nameplate rating and the measured reading, in microfarads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacitorReading {
    pub rating_uf: f64,
    pub reading_uf: f64,
}

/// Measured compressor amp draw against the nameplate rated amps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmpReading {
    pub actual_amps: f64,
    pub rated_amps: f64,
}

// ---------------------------------------------------------------------------
// Reading set
// ---------------------------------------------------------------------------

/// All readings captured during one maintenance inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingSet {
    // Electrical
    pub blower_motor_type: BlowerMotorType,
    /// Required for PSC blower motors; absent for ECM.
    pub blower_capacitor: Option<CapacitorReading>,
    /// Herm terminal of the dual-run condenser capacitor.
    pub condenser_capacitor_herm: CapacitorReading,
    /// Fan terminal of the dual-run condenser capacitor, when measured
    /// separately.
    pub condenser_capacitor_fan: Option<CapacitorReading>,
    /// Compressor amp draw; not captured on every report variant.
    pub amp_draw: Option<AmpReading>,

    // Airflow
    pub return_temp_f: f64,
    pub supply_temp_f: f64,

    // Refrigerant circuit
    pub refrigerant_type: String,
    pub refrigerant_status: RefrigerantStatus,
    pub superheat_f: f64,
    pub subcooling_f: f64,

    // Drainage
    pub primary_drain: PrimaryDrainCondition,
    pub primary_drain_notes: Option<String>,
    pub drain_pan: DrainPanCondition,

    // Indoor air quality and visual checks (carried, not scored except
    // for the air purifier)
    pub air_purifier: AirPurifierCondition,
    pub condenser_fan_motor: CondenserFanMotor,
    pub air_filters: String,
    pub evaporator_coil: String,
    pub condenser_coils: String,
    pub plenums: String,
    pub ductwork: String,

    // Equipment age, when known
    pub evaporator_age_years: Option<i32>,
    pub condenser_age_years: Option<i32>,

    pub notes: Option<String>,
    pub other_repair_recommendations: Option<String>,
}

impl ReadingSet {
    /// Return-air minus supply-air temperature. Not clamped; a negative
    /// delta is a legitimate (very bad) reading.
    pub fn delta_t(&self) -> f64 {
        self.return_temp_f - self.supply_temp_f
    }

    /// Validate numeric preconditions for evaluation.
    ///
    /// A zero or negative capacitor rating or rated-amps value would make
    /// the tolerance formulas divide by zero, so it is rejected here
    /// rather than handled downstream.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(cap) = &self.blower_capacitor {
            validate_capacitor(cap, "blower capacitor")?;
        }
        validate_capacitor(&self.condenser_capacitor_herm, "condenser capacitor (herm)")?;
        if let Some(cap) = &self.condenser_capacitor_fan {
            validate_capacitor(cap, "condenser capacitor (fan)")?;
        }
        if let Some(amp) = &self.amp_draw {
            if !amp.rated_amps.is_finite() || amp.rated_amps <= 0.0 {
                return Err(CoreError::Validation(format!(
                    "rated_amps must be positive, got {}",
                    amp.rated_amps
                )));
            }
            if !amp.actual_amps.is_finite() {
                return Err(CoreError::Validation(
                    "amp_draw reading must be a finite number".to_string(),
                ));
            }
        }
        if !self.return_temp_f.is_finite() || !self.supply_temp_f.is_finite() {
            return Err(CoreError::Validation(
                "return and supply temperatures must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_capacitor(cap: &CapacitorReading, name: &str) -> Result<(), CoreError> {
    if !cap.rating_uf.is_finite() || cap.rating_uf <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} rating must be positive, got {}",
            cap.rating_uf
        )));
    }
    if !cap.reading_uf.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} reading must be a finite number"
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    /// A reading set for a healthy system. Tests tweak individual fields.
    pub fn healthy_reading_set() -> ReadingSet {
        ReadingSet {
            blower_motor_type: BlowerMotorType::Psc,
            blower_capacitor: Some(CapacitorReading {
                rating_uf: 10.0,
                reading_uf: 9.9,
            }),
            condenser_capacitor_herm: CapacitorReading {
                rating_uf: 35.0,
                reading_uf: 34.5,
            },
            condenser_capacitor_fan: Some(CapacitorReading {
                rating_uf: 5.0,
                reading_uf: 5.0,
            }),
            amp_draw: Some(AmpReading {
                actual_amps: 18.0,
                rated_amps: 19.0,
            }),
            return_temp_f: 78.0,
            supply_temp_f: 60.0,
            refrigerant_type: "R-410A".to_string(),
            refrigerant_status: RefrigerantStatus::Good,
            superheat_f: 10.0,
            subcooling_f: 12.0,
            primary_drain: PrimaryDrainCondition::Clear,
            primary_drain_notes: None,
            drain_pan: DrainPanCondition::GoodShape,
            air_purifier: AirPurifierCondition::Good,
            condenser_fan_motor: CondenserFanMotor::NormalOperation,
            air_filters: "Clean".to_string(),
            evaporator_coil: "Clean".to_string(),
            condenser_coils: "Clean".to_string(),
            plenums: "Good".to_string(),
            ductwork: "Good".to_string(),
            evaporator_age_years: Some(4),
            condenser_age_years: Some(4),
            notes: None,
            other_repair_recommendations: None,
        }
    }
}
