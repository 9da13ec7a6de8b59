//! Component health status with a total severity order.
//!
//! The worst-of-two combination used for dual-run capacitors relies on
//! `Critical > Warning > Good`, so the ordering is part of the contract
//! and is covered by tests. Never compare status label strings.

use serde::{Deserialize, Serialize};

/// Health status of a checked component or subsystem.
///
/// Derived `Ord` gives `Good < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Good,
    Warning,
    Critical,
}

impl HealthStatus {
    /// The worse of two statuses.
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }

    /// Lowercase severity tag used in warning payloads.
    pub fn severity(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}
