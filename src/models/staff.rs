//! Staff roster model.
//!
//! Staff split into two disjoint supervisory roles: tally leaders, who
//! supervise vessels, and tally operators, who cover cranes. The
//! availability flags are supplied by the roster sheet and are
//! immutable to the core — the engine only reads them when deriving
//! the per-zone pools.

use serde::{Deserialize, Serialize};

use super::Zone;

/// Supervisory role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Supervises a subset of a zone's vessels (理货组长).
    #[serde(rename = "理货组长")]
    Leader,
    /// Covers a subset of a zone's cranes (理货员).
    #[serde(rename = "理货员")]
    Operator,
}

impl Role {
    /// The roster-sheet label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Leader => "理货组长",
            Role::Operator => "理货员",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily availability flags from the roster sheet.
///
/// The first three flags remove a member from the assignable pool.
/// The rest are status-panel information only and never affect
/// allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// On leave today (请假).
    pub on_leave: bool,
    /// Seconded to the company (公司抽调).
    pub seconded: bool,
    /// Covering the gate (负责闸口).
    pub gate_duty: bool,
    /// Rostered as a driver (驾驶员).
    pub driver: bool,
    /// Rostered on equipment duty (设备员).
    pub equipment_duty: bool,
    /// Has requested overtime (申请加班).
    pub overtime_requested: bool,
}

/// A member of the tally workforce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Name, unique within the roster.
    pub name: String,
    /// Supervisory role.
    pub role: Role,
    /// Home work zone.
    pub zone: Zone,
    /// Daily availability flags.
    pub availability: Availability,
}

impl StaffMember {
    /// Creates a staff member with default (fully available) flags.
    pub fn new(name: impl Into<String>, role: Role, zone: Zone) -> Self {
        Self {
            name: name.into(),
            role,
            zone,
            availability: Availability::default(),
        }
    }

    /// Replaces the availability flags.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Marks the member on leave.
    pub fn on_leave(mut self) -> Self {
        self.availability.on_leave = true;
        self
    }

    /// Marks the member seconded to the company.
    pub fn seconded(mut self) -> Self {
        self.availability.seconded = true;
        self
    }

    /// Marks the member as covering the gate.
    pub fn gate_duty(mut self) -> Self {
        self.availability.gate_duty = true;
        self
    }

    /// Whether this member may be assigned tally work today.
    ///
    /// Leave, secondment, and gate duty each remove a member from the
    /// pool; the remaining flags are informational.
    pub fn is_assignable(&self) -> bool {
        let a = &self.availability;
        !a.on_leave && !a.seconded && !a.gate_duty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_assignable() {
        let m = StaffMember::new("张三", Role::Operator, Zone::PhaseFour);
        assert!(m.is_assignable());
    }

    #[test]
    fn test_blocking_flags() {
        assert!(!StaffMember::new("a", Role::Operator, Zone::PhaseFour)
            .on_leave()
            .is_assignable());
        assert!(!StaffMember::new("b", Role::Leader, Zone::PhaseFour)
            .seconded()
            .is_assignable());
        assert!(!StaffMember::new("c", Role::Operator, Zone::Automated)
            .gate_duty()
            .is_assignable());
    }

    #[test]
    fn test_informational_flags_do_not_block() {
        let m = StaffMember::new("李四", Role::Operator, Zone::Automated).with_availability(
            Availability {
                driver: true,
                equipment_duty: true,
                overtime_requested: true,
                ..Availability::default()
            },
        );
        assert!(m.is_assignable());
    }

    #[test]
    fn test_role_serde_label() {
        let json = serde_json::to_string(&Role::Leader).unwrap();
        assert_eq!(json, "\"理货组长\"");
        let back: Role = serde_json::from_str("\"理货员\"").unwrap();
        assert_eq!(back, Role::Operator);
    }
}
