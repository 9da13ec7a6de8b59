//! Delta-T and amp-draw checks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::readings::AmpReading;
use crate::status::HealthStatus;

// ---------------------------------------------------------------------------
// Delta-T bands
// ---------------------------------------------------------------------------

/// Lower bound of the good delta-T band, inclusive (degrees Fahrenheit).
pub const DELTA_T_GOOD_MIN_F: f64 = 15.0;

/// Upper bound of the good delta-T band, inclusive.
pub const DELTA_T_GOOD_MAX_F: f64 = 24.0;

/// Lower bound of the warning band, inclusive. A delta of exactly 10°F
/// classifies as Warning, not Critical. The original report form's help
/// text says "below 10°F is critical", which contradicts this boundary;
/// the coded behavior is kept deliberately.
pub const DELTA_T_WARNING_MIN_F: f64 = 10.0;

/// Classify a temperature split (return minus supply).
///
/// The delta is not clamped: a negative split (supply warmer than
/// return) falls straight into Critical.
pub fn check_delta_t(delta_f: f64) -> HealthStatus {
    if (DELTA_T_GOOD_MIN_F..=DELTA_T_GOOD_MAX_F).contains(&delta_f) {
        HealthStatus::Good
    } else if (DELTA_T_WARNING_MIN_F..DELTA_T_GOOD_MIN_F).contains(&delta_f) {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    }
}

// ---------------------------------------------------------------------------
// Amp draw
// ---------------------------------------------------------------------------

/// Amp drift at or below this percentage is normal.
pub const AMP_GOOD_MAX_PCT: f64 = 10.0;

/// Amp drift at or below this percentage (and above the good band) is a
/// warning.
pub const AMP_WARNING_MAX_PCT: f64 = 20.0;

/// Outcome of the amp-draw check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmpCheck {
    pub status: HealthStatus,
    pub tolerance_pct: f64,
}

/// Check measured amp draw against the nameplate rated amps.
///
/// `tolerance = |actual - rated| / rated * 100`; `rated <= 0` is a
/// validation error.
pub fn check_amp_draw(amps: &AmpReading) -> Result<AmpCheck, CoreError> {
    if !amps.rated_amps.is_finite() || amps.rated_amps <= 0.0 {
        return Err(CoreError::Validation(format!(
            "rated_amps must be positive, got {}",
            amps.rated_amps
        )));
    }

    let tolerance_pct = (amps.actual_amps - amps.rated_amps).abs() / amps.rated_amps * 100.0;
    let status = if tolerance_pct <= AMP_GOOD_MAX_PCT {
        HealthStatus::Good
    } else if tolerance_pct <= AMP_WARNING_MAX_PCT {
        HealthStatus::Warning
    } else {
        HealthStatus::Critical
    };

    Ok(AmpCheck {
        status,
        tolerance_pct,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // -- check_delta_t --------------------------------------------------------

    #[test]
    fn mid_band_split_is_good() {
        // 78 return / 60 supply -> 18°F split.
        assert_eq!(check_delta_t(18.0), HealthStatus::Good);
    }

    #[test]
    fn good_band_boundaries_inclusive() {
        assert_eq!(check_delta_t(15.0), HealthStatus::Good);
        assert_eq!(check_delta_t(24.0), HealthStatus::Good);
    }

    #[test]
    fn low_split_is_warning() {
        assert_eq!(check_delta_t(12.0), HealthStatus::Warning);
        assert_eq!(check_delta_t(14.9), HealthStatus::Warning);
    }

    #[test]
    fn exactly_ten_is_warning_not_critical() {
        // 78 return / 68 supply -> 10°F split, the bottom of the warning
        // band.
        assert_eq!(check_delta_t(10.0), HealthStatus::Warning);
    }

    #[test]
    fn below_ten_is_critical() {
        assert_eq!(check_delta_t(9.9), HealthStatus::Critical);
        assert_eq!(check_delta_t(0.0), HealthStatus::Critical);
    }

    #[test]
    fn negative_split_is_critical() {
        assert_eq!(check_delta_t(-5.0), HealthStatus::Critical);
    }

    #[test]
    fn excessive_split_is_critical() {
        assert_eq!(check_delta_t(24.1), HealthStatus::Critical);
        assert_eq!(check_delta_t(40.0), HealthStatus::Critical);
    }

    // -- check_amp_draw -------------------------------------------------------

    fn amps(actual: f64, rated: f64) -> AmpReading {
        AmpReading {
            actual_amps: actual,
            rated_amps: rated,
        }
    }

    #[test]
    fn amp_draw_within_ten_percent_is_good() {
        let check = check_amp_draw(&amps(19.0, 20.0)).unwrap();
        assert_eq!(check.status, HealthStatus::Good);
        assert!((check.tolerance_pct - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn amp_draw_boundaries() {
        assert_eq!(
            check_amp_draw(&amps(22.0, 20.0)).unwrap().status,
            HealthStatus::Good
        );
        assert_eq!(
            check_amp_draw(&amps(24.0, 20.0)).unwrap().status,
            HealthStatus::Warning
        );
        assert_eq!(
            check_amp_draw(&amps(24.1, 20.0)).unwrap().status,
            HealthStatus::Critical
        );
    }

    #[test]
    fn amp_draw_under_rated_counts_too() {
        let check = check_amp_draw(&amps(14.0, 20.0)).unwrap();
        assert_eq!(check.status, HealthStatus::Critical);
        assert!((check.tolerance_pct - 30.0).abs() < 1e-9);
    }

    #[test]
    fn zero_rated_amps_is_validation_error() {
        assert_matches!(check_amp_draw(&amps(10.0, 0.0)), Err(CoreError::Validation(_)));
    }
}
