//! Input validation for assignment runs.
//!
//! Checks structural integrity of the roster and the two input
//! relations before the index is built. Detects:
//! - Duplicate staff names
//! - Duplicate vessel names
//! - Berth rows whose crane list normalizes to nothing
//! - A crane registered to more than one zone
//!
//! Validation is advisory: the index builder tolerates all of these
//! (first registration wins, duplicates shadow), but a caller that
//! wants clean data should run this first and surface the findings.

use std::collections::{HashMap, HashSet};

use crate::index::{normalize_crane_list, BerthCraneRow, ShipCraneRow};
use crate::models::{StaffMember, Zone};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two roster rows share the same staff name.
    DuplicateStaffName,
    /// Two ship rows share the same vessel name.
    DuplicateVesselName,
    /// A berth row's crane list normalizes to no identifiers.
    EmptyCraneList,
    /// A crane is registered to more than one zone.
    CraneZoneConflict,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the roster and input relations.
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` with every
/// detected issue otherwise.
pub fn validate_input(
    staff: &[StaffMember],
    berth_rows: &[BerthCraneRow],
    ship_rows: &[ShipCraneRow],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut staff_names = HashSet::new();
    for member in staff {
        if !staff_names.insert(member.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStaffName,
                format!("duplicate staff name: {}", member.name),
            ));
        }
    }

    let mut vessel_names = HashSet::new();
    for row in ship_rows {
        let name = row.ship_name.trim();
        if !vessel_names.insert(name.to_string()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateVesselName,
                format!("duplicate vessel name: {name}"),
            ));
        }
    }

    let mut crane_zones: HashMap<String, Zone> = HashMap::new();
    for row in berth_rows {
        let cranes = normalize_crane_list(&row.crane_list_raw);
        if cranes.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCraneList,
                format!("berth row for '{}' lists no cranes", row.workarea.trim()),
            ));
        }
        // Unknown work areas are the index builder's concern; only
        // cross-zone double registration is flagged here.
        let Ok(zone) = row.workarea.parse::<Zone>() else {
            continue;
        };
        for crane in cranes {
            match crane_zones.get(&crane) {
                Some(&registered) if registered != zone => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::CraneZoneConflict,
                        format!("crane {crane} registered to both {registered} and {zone}"),
                    ));
                }
                Some(_) => {}
                None => {
                    crane_zones.insert(crane, zone);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn berth(workarea: &str, cranes: &str) -> BerthCraneRow {
        BerthCraneRow {
            workarea: workarea.into(),
            crane_list_raw: cranes.into(),
        }
    }

    fn ship(name: &str, cranes: &str) -> ShipCraneRow {
        ShipCraneRow {
            ship_name: name.into(),
            crane_list_raw: cranes.into(),
        }
    }

    #[test]
    fn test_valid_input() {
        let staff = vec![
            StaffMember::new("甲", Role::Leader, Zone::PhaseFour),
            StaffMember::new("乙", Role::Operator, Zone::PhaseFour),
        ];
        let berths = vec![berth("四期", "Q1,Q2"), berth("自动化", "A1")];
        let ships = vec![ship("ALPHA", "Q1"), ship("BETA", "A1")];
        assert!(validate_input(&staff, &berths, &ships).is_ok());
    }

    #[test]
    fn test_duplicate_staff_name() {
        let staff = vec![
            StaffMember::new("甲", Role::Leader, Zone::PhaseFour),
            StaffMember::new("甲", Role::Operator, Zone::Automated),
        ];
        let errors = validate_input(&staff, &[], &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateStaffName));
    }

    #[test]
    fn test_duplicate_vessel_name() {
        let ships = vec![ship("ALPHA", "Q1"), ship(" ALPHA ", "Q2")];
        let errors = validate_input(&[], &[], &ships).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateVesselName));
    }

    #[test]
    fn test_empty_crane_list() {
        let berths = vec![berth("四期", " ，, ")];
        let errors = validate_input(&[], &berths, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCraneList));
    }

    #[test]
    fn test_crane_zone_conflict() {
        let berths = vec![berth("四期", "Q1,Q2"), berth("自动化", "q2")];
        let errors = validate_input(&[], &berths, &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::CraneZoneConflict);
        assert!(errors[0].message.contains("Q2"));
    }

    #[test]
    fn test_same_zone_repeat_is_not_a_conflict() {
        let berths = vec![berth("四期", "Q1"), berth("四期", "Q1")];
        assert!(validate_input(&[], &berths, &[]).is_ok());
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let staff = vec![
            StaffMember::new("甲", Role::Leader, Zone::PhaseFour),
            StaffMember::new("甲", Role::Leader, Zone::PhaseFour),
        ];
        let berths = vec![berth("四期", "")];
        let errors = validate_input(&staff, &berths, &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
