//! Per-zone staff pools and availability summaries.
//!
//! Derives the assignable leader and operator pools from the raw
//! roster, grouped by home zone in roster order. The operator pool is
//! the one piece of state the orchestrator consumes as it works
//! through the zones; it is cloned up front so the roster itself is
//! never mutated.

use std::collections::HashMap;

use crate::models::{Role, StaffMember, Zone};

/// Assignable staff, split by role and grouped by home zone.
#[derive(Debug, Clone, Default)]
pub struct RosterPools {
    leaders: HashMap<Zone, Vec<String>>,
    operators: HashMap<Zone, Vec<String>>,
}

impl RosterPools {
    /// Filters the roster down to assignable members and groups them.
    ///
    /// Roster order is preserved within each pool; the crane
    /// distributor's tie-breaking and the lotted policy's
    /// front-of-pool consumption both depend on it.
    pub fn from_staff(staff: &[StaffMember]) -> Self {
        let mut pools = Self::default();
        for member in staff.iter().filter(|m| m.is_assignable()) {
            let by_zone = match member.role {
                Role::Leader => &mut pools.leaders,
                Role::Operator => &mut pools.operators,
            };
            by_zone
                .entry(member.zone)
                .or_default()
                .push(member.name.clone());
        }
        pools
    }

    /// Assignable leaders of a zone, in roster order.
    pub fn leaders_for(&self, zone: Zone) -> &[String] {
        self.leaders.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Assignable operators of a zone, in roster order.
    pub fn operators_for(&self, zone: Zone) -> &[String] {
        self.operators.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A mutable copy of the per-zone operator pools.
    ///
    /// This is the pool the orchestrator draws down zone by zone.
    pub fn operator_pool(&self) -> HashMap<Zone, Vec<String>> {
        self.operators.clone()
    }
}

/// Name lists per roster flag, for the status panel collaborator.
///
/// Derived data only; the panel renders it, the core never reads it
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySummary {
    /// On leave (请假).
    pub on_leave: Vec<String>,
    /// Seconded to the company (公司抽调).
    pub seconded: Vec<String>,
    /// Covering the gate (负责闸口).
    pub gate_duty: Vec<String>,
    /// Rostered drivers (驾驶员).
    pub drivers: Vec<String>,
    /// On equipment duty (设备员).
    pub equipment_duty: Vec<String>,
    /// Requested overtime (申请加班).
    pub overtime_requested: Vec<String>,
}

impl AvailabilitySummary {
    /// Collects the flagged names from the roster, in roster order.
    pub fn from_staff(staff: &[StaffMember]) -> Self {
        let mut summary = Self::default();
        for member in staff {
            let a = &member.availability;
            let name = &member.name;
            if a.on_leave {
                summary.on_leave.push(name.clone());
            }
            if a.seconded {
                summary.seconded.push(name.clone());
            }
            if a.gate_duty {
                summary.gate_duty.push(name.clone());
            }
            if a.driver {
                summary.drivers.push(name.clone());
            }
            if a.equipment_duty {
                summary.equipment_duty.push(name.clone());
            }
            if a.overtime_requested {
                summary.overtime_requested.push(name.clone());
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn roster() -> Vec<StaffMember> {
        vec![
            StaffMember::new("组长甲", Role::Leader, Zone::PhaseFour),
            StaffMember::new("组长乙", Role::Leader, Zone::PhaseFour).on_leave(),
            StaffMember::new("组长丙", Role::Leader, Zone::Automated),
            StaffMember::new("员工一", Role::Operator, Zone::PhaseFour),
            StaffMember::new("员工二", Role::Operator, Zone::PhaseFour).gate_duty(),
            StaffMember::new("员工三", Role::Operator, Zone::PhaseFour),
            StaffMember::new("员工四", Role::Operator, Zone::Automated).seconded(),
            StaffMember::new("员工五", Role::Operator, Zone::Automated).with_availability(
                Availability {
                    overtime_requested: true,
                    ..Availability::default()
                },
            ),
        ]
    }

    #[test]
    fn test_pools_filter_and_group() {
        let pools = RosterPools::from_staff(&roster());
        assert_eq!(pools.leaders_for(Zone::PhaseFour), ["组长甲"]);
        assert_eq!(pools.leaders_for(Zone::Automated), ["组长丙"]);
        assert_eq!(pools.operators_for(Zone::PhaseFour), ["员工一", "员工三"]);
        // Overtime request does not block assignment.
        assert_eq!(pools.operators_for(Zone::Automated), ["员工五"]);
    }

    #[test]
    fn test_each_blocking_flag_drops_independently() {
        let staff = vec![
            StaffMember::new("a", Role::Operator, Zone::PhaseFour).on_leave(),
            StaffMember::new("b", Role::Operator, Zone::PhaseFour).seconded(),
            StaffMember::new("c", Role::Operator, Zone::PhaseFour).gate_duty(),
            StaffMember::new("d", Role::Operator, Zone::PhaseFour),
        ];
        let pools = RosterPools::from_staff(&staff);
        assert_eq!(pools.operators_for(Zone::PhaseFour), ["d"]);
    }

    #[test]
    fn test_operator_pool_is_a_copy() {
        let pools = RosterPools::from_staff(&roster());
        let mut pool = pools.operator_pool();
        pool.get_mut(&Zone::PhaseFour).unwrap().clear();
        // The roster-derived pools are untouched.
        assert_eq!(pools.operators_for(Zone::PhaseFour).len(), 2);
    }

    #[test]
    fn test_availability_summary() {
        let summary = AvailabilitySummary::from_staff(&roster());
        assert_eq!(summary.on_leave, ["组长乙"]);
        assert_eq!(summary.seconded, ["员工四"]);
        assert_eq!(summary.gate_duty, ["员工二"]);
        assert_eq!(summary.overtime_requested, ["员工五"]);
        assert!(summary.drivers.is_empty());
    }
}
