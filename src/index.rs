//! Zone resource index.
//!
//! Builds, per work zone, the ordered crane list, the vessels with
//! their sizes classified, and the crane-to-vessel reverse index, all
//! from the two normalized input relations (berth↔crane rows and
//! ship↔crane rows). Parsing the spreadsheet itself is the ingestion
//! collaborator's job; this module only consumes the row shapes.
//!
//! A vessel is attributed to the zone of the *first* of its cranes
//! found in the berth index. Vessels that match no registered crane
//! are excluded with a warning, never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AssignWarning;
use crate::models::{SizeRules, Vessel, Zone};

/// One row of the berth↔crane relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerthCraneRow {
    /// Work-area label (工作地).
    pub workarea: String,
    /// Free-text crane list, comma separated in left-to-right order.
    pub crane_list_raw: String,
}

/// One row of the ship↔crane relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCraneRow {
    /// Vessel name (船舶名称).
    pub ship_name: String,
    /// Free-text crane list, comma separated.
    pub crane_list_raw: String,
}

/// Normalizes a free-text crane list into independent identifiers.
///
/// Splits on ASCII and full-width commas, trims each token, upper-cases
/// it, and drops empties. Total and deterministic: malformed but
/// non-empty input still yields tokens, and an empty field yields an
/// empty list.
pub fn normalize_crane_list(raw: &str) -> Vec<String> {
    raw.replace('，', ",")
        .split(',')
        .map(|token| token.trim().to_uppercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// The cranes and vessels of one zone.
#[derive(Debug, Clone, Default)]
pub struct ZoneResources {
    /// Cranes to distribute, in first-seen vessel order. This is the
    /// ordered list the crane distributor slices contiguously.
    pub cranes: Vec<String>,
    /// Vessels attributed to this zone, in input order.
    pub vessels: Vec<Vessel>,
    /// Crane identifier → names of the vessels worked on it.
    crane_to_vessels: HashMap<String, Vec<String>>,
}

impl ZoneResources {
    /// Number of cranes awaiting assignment.
    pub fn total_cranes(&self) -> usize {
        self.cranes.len()
    }

    /// Number of vessels awaiting assignment.
    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    /// Number of large vessels.
    pub fn large_count(&self) -> usize {
        self.vessels.iter().filter(|v| v.is_large()).count()
    }

    /// Number of small vessels.
    pub fn small_count(&self) -> usize {
        self.vessel_count() - self.large_count()
    }

    /// Vessels worked on the given crane, in input order.
    pub fn vessels_on_crane(&self, crane: &str) -> &[String] {
        self.crane_to_vessels
            .get(crane)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn add_vessel(&mut self, vessel: Vessel) {
        for crane in &vessel.cranes {
            if !self.cranes.contains(crane) {
                self.cranes.push(crane.clone());
            }
            self.crane_to_vessels
                .entry(crane.clone())
                .or_default()
                .push(vessel.name.clone());
        }
        self.vessels.push(vessel);
    }
}

/// Per-zone view of the crane and vessel relations.
#[derive(Debug, Clone)]
pub struct ZoneIndex {
    resources: HashMap<Zone, ZoneResources>,
    crane_zones: HashMap<String, Zone>,
}

impl ZoneIndex {
    /// Builds the index from the two input relations.
    ///
    /// Returns the index together with the warnings for everything
    /// that had to be excluded: berth rows naming an unknown work
    /// area, and vessels whose cranes resolve to no known zone.
    pub fn build(
        berth_rows: &[BerthCraneRow],
        ship_rows: &[ShipCraneRow],
        rules: &SizeRules,
    ) -> (Self, Vec<AssignWarning>) {
        let mut warnings = Vec::new();
        let mut crane_zones: HashMap<String, Zone> = HashMap::new();
        let mut resources: HashMap<Zone, ZoneResources> = Zone::ALL
            .iter()
            .map(|&z| (z, ZoneResources::default()))
            .collect();

        for row in berth_rows {
            let zone = match row.workarea.parse::<Zone>() {
                Ok(zone) => zone,
                Err(_) => {
                    warnings.push(AssignWarning::UnknownWorkArea {
                        workarea: row.workarea.trim().to_string(),
                    });
                    continue;
                }
            };
            for crane in normalize_crane_list(&row.crane_list_raw) {
                // First registration wins; duplicates are a roster
                // integrity problem surfaced by validation.
                crane_zones.entry(crane).or_insert(zone);
            }
        }

        for row in ship_rows {
            let name = row.ship_name.trim();
            let cranes = normalize_crane_list(&row.crane_list_raw);
            if cranes.is_empty() {
                warnings.push(AssignWarning::UnmatchedVessel {
                    vessel_name: name.to_string(),
                    reason: "empty crane list".into(),
                });
                continue;
            }

            let zone = cranes.iter().find_map(|c| crane_zones.get(c).copied());
            match zone {
                Some(zone) => {
                    let vessel = Vessel::new(name, cranes, zone, rules);
                    resources.entry(zone).or_default().add_vessel(vessel);
                }
                None => {
                    tracing::debug!("excluding vessel '{name}': no crane registered to a zone");
                    warnings.push(AssignWarning::UnmatchedVessel {
                        vessel_name: name.to_string(),
                        reason: "no crane registered to a zone".into(),
                    });
                }
            }
        }

        (
            Self {
                resources,
                crane_zones,
            },
            warnings,
        )
    }

    /// The resources of the given zone.
    pub fn resources(&self, zone: Zone) -> &ZoneResources {
        // Both zones are inserted at build time.
        &self.resources[&zone]
    }

    /// The zone a crane was registered to, if any.
    pub fn zone_of_crane(&self, crane: &str) -> Option<Zone> {
        self.crane_zones.get(crane).copied()
    }
}
