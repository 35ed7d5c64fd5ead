//! Assignment output records.
//!
//! `AssignmentRow` is the row shape that must round-trip unchanged
//! through the report and export collaborators; `LeaderSummary` is the
//! per-leader breakdown shown in the allocation detail panel. Both are
//! pure data — rendering and file packaging live outside the core.

use serde::{Deserialize, Serialize};

use super::Zone;

/// One operator's linked assignment for one zone and one run.
///
/// Rows are rebuilt from scratch on every invocation; nothing is
/// persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    /// Zone the row belongs to.
    pub zone: Zone,
    /// Supervising leader, or the sentinel when no leader's cranes
    /// intersect the operator's.
    pub leader_name: String,
    /// The leader's vessels, joined with `", "`.
    pub served_ships_joined: String,
    /// Operator the row is for.
    pub operator_name: String,
    /// The operator's cranes, joined with `", "`.
    pub served_cranes_joined: String,
    /// Number of cranes the operator covers.
    pub crane_count: usize,
}

/// Per-leader allocation breakdown for the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderSummary {
    /// Leader the summary describes.
    pub leader_name: String,
    /// Total vessels assigned.
    pub ship_count: usize,
    /// Large vessels among them.
    pub large_count: usize,
    /// Small vessels among them.
    pub small_count: usize,
    /// De-duplicated cranes the leader's vessels touch.
    pub crane_count: usize,
}
