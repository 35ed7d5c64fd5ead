//! Assignment linker.
//!
//! Joins the two distributions: each operator is linked to the first
//! leader (in vessel-distribution iteration order) whose crane set
//! intersects the operator's cranes, producing one output row per
//! operator. An operator whose cranes intersect no leader's gets the
//! sentinel leader and an empty ship list — one unmatched operator
//! never fails the zone.

use std::collections::HashSet;

use crate::distribution::{CraneDistribution, VesselDistribution};
use crate::error::AssignWarning;
use crate::models::{AssignmentRow, Zone};

/// Sentinel leader name for operators no leader's cranes cover.
pub const UNASSIGNED_LEADER: &str = "未分配组长";

/// Links every operator allotment to its supervising leader.
pub fn link(
    crane_dist: &CraneDistribution,
    vessel_dist: &VesselDistribution,
    zone: Zone,
) -> (Vec<AssignmentRow>, Vec<AssignWarning>) {
    let leaders: Vec<(&str, HashSet<&str>, String)> = vessel_dist
        .iter()
        .map(|a| {
            (
                a.leader.as_str(),
                a.cranes.iter().map(String::as_str).collect(),
                a.ships.join(", "),
            )
        })
        .collect();

    let mut rows = Vec::with_capacity(crane_dist.len());
    let mut warnings = Vec::new();

    for allotment in crane_dist.iter() {
        let matched = leaders.iter().find(|(_, cranes, _)| {
            allotment.cranes.iter().any(|c| cranes.contains(c.as_str()))
        });

        let (leader_name, served_ships_joined) = match matched {
            Some((leader, _, ships)) => (leader.to_string(), ships.clone()),
            None => {
                warnings.push(AssignWarning::UnlinkedOperator {
                    zone,
                    operator_name: allotment.operator.clone(),
                });
                (UNASSIGNED_LEADER.to_string(), String::new())
            }
        };

        rows.push(AssignmentRow {
            zone,
            leader_name,
            served_ships_joined,
            operator_name: allotment.operator.clone(),
            served_cranes_joined: allotment.cranes.join(", "),
            crane_count: allotment.cranes.len(),
        });
    }

    (rows, warnings)
}
