//! Work zone enumeration.
//!
//! The terminal operates two independent work zones: the phase-four
//! conventional berths (四期) and the automated berths (自动化). Each
//! zone owns its own crane, vessel, and staff pools and is allocated
//! in isolation; the only coupling is the sequential hand-off of the
//! operator pool between zones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An independently operated work area of the terminal.
///
/// Serializes as the Chinese work-area label so that rows round-trip
/// unchanged through the spreadsheet ingestion and export
/// collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Phase-four conventional terminal (四期).
    #[serde(rename = "四期")]
    PhaseFour,
    /// Automated terminal (自动化).
    #[serde(rename = "自动化")]
    Automated,
}

impl Zone {
    /// All zones in their fixed processing order.
    ///
    /// `PhaseFour` is always allocated first; the operator pool it
    /// leaves behind is handed to `Automated`.
    pub const ALL: [Zone; 2] = [Zone::PhaseFour, Zone::Automated];

    /// The work-area label used in input and output rows.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::PhaseFour => "四期",
            Zone::Automated => "自动化",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "四期" => Ok(Zone::PhaseFour),
            "自动化" => Ok(Zone::Automated),
            other => Err(UnknownZone(other.to_string())),
        }
    }
}

/// A work-area label that names no known zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownZone(pub String);

impl fmt::Display for UnknownZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown work area '{}'", self.0)
    }
}

impl std::error::Error for UnknownZone {}
