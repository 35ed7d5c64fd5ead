//! Vessel model and size classification.
//!
//! A vessel occupies an ordered run of quay cranes; the order is the
//! physical left-to-right berth order and must be preserved through
//! allocation. Size is derived from the crane count and drives the
//! fairness weighting in leader assignment: large vessels are spread
//! before small ones fill the remaining capacity.

use serde::{Deserialize, Serialize};

use super::Zone;

/// Size class of a vessel, derived from its crane count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselSize {
    /// Worked by more cranes than the size threshold (大船).
    #[serde(rename = "大船")]
    Large,
    /// Worked by the threshold count or fewer (小船).
    #[serde(rename = "小船")]
    Small,
}

impl VesselSize {
    /// The label used in status panels and reports.
    pub fn label(&self) -> &'static str {
        match self {
            VesselSize::Large => "大船",
            VesselSize::Small => "小船",
        }
    }
}

impl std::fmt::Display for VesselSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Default crane-count threshold above which a vessel counts as large.
pub const DEFAULT_LARGE_THRESHOLD: usize = 3;

/// Size-classification rules.
///
/// Passed in as configuration rather than hard-coded so a terminal can
/// tune what "large" means without touching the allocation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRules {
    /// A vessel is large iff its crane count exceeds this.
    pub large_threshold: usize,
}

impl Default for SizeRules {
    fn default() -> Self {
        Self {
            large_threshold: DEFAULT_LARGE_THRESHOLD,
        }
    }
}

impl SizeRules {
    /// Classifies a vessel by the number of cranes working it.
    pub fn classify(&self, crane_count: usize) -> VesselSize {
        if crane_count > self.large_threshold {
            VesselSize::Large
        } else {
            VesselSize::Small
        }
    }
}

/// A vessel awaiting tally assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    /// Vessel name, unique within a run.
    pub name: String,
    /// Crane identifiers in physical left-to-right order.
    pub cranes: Vec<String>,
    /// Size class derived from the crane count.
    pub size: VesselSize,
    /// Zone of the first of its cranes found in the berth index.
    pub zone: Zone,
}

impl Vessel {
    /// Creates a vessel, classifying its size from the crane count.
    pub fn new(
        name: impl Into<String>,
        cranes: Vec<String>,
        zone: Zone,
        rules: &SizeRules,
    ) -> Self {
        let size = rules.classify(cranes.len());
        Self {
            name: name.into(),
            cranes,
            size,
            zone,
        }
    }

    /// Number of cranes working this vessel.
    pub fn crane_count(&self) -> usize {
        self.cranes.len()
    }

    /// Whether this vessel is classified as large.
    pub fn is_large(&self) -> bool {
        self.size == VesselSize::Large
    }
}
