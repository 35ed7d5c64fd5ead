//! Error and warning types for the assignment engine.
//!
//! Errors abort only the zone being allocated; the orchestrator turns
//! them into a skip reason for that zone and carries on with the next.
//! Warnings are plain data attached to results — an anomaly is always
//! returned to the caller, never just logged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Zone;

/// Errors raised while distributing cranes to operators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignError {
    /// The crane pool cannot satisfy the per-operator capacity band.
    #[error("cannot spread {total} cranes over {operators} operators at {min_per}-{max_per} each")]
    Capacity {
        /// Cranes awaiting assignment.
        total: usize,
        /// Operators available.
        operators: usize,
        /// Minimum cranes per operator.
        min_per: usize,
        /// Maximum cranes per operator.
        max_per: usize,
    },

    /// The crane pool is not a whole number of lots.
    #[error("{total} cranes is not a multiple of the lot size {lot_size}")]
    LotRemainder {
        /// Cranes awaiting assignment.
        total: usize,
        /// Fixed cranes per operator.
        lot_size: usize,
    },

    /// Fewer operators remain in the pool than lots to hand out.
    #[error("need {needed} operators, only {available} remain")]
    InsufficientStaff {
        /// Operators required to cover every lot.
        needed: usize,
        /// Operators left in the pool.
        available: usize,
    },
}

/// Non-fatal anomalies recorded during a run.
///
/// Warnings never change the success status of a run. They ride on the
/// result so that a reporting collaborator can surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignWarning {
    /// A berth row named a work area outside the known zones.
    UnknownWorkArea {
        /// The unrecognized work-area label.
        workarea: String,
    },
    /// A vessel's cranes resolve to no registered berth crane; the
    /// vessel is excluded from allocation.
    UnmatchedVessel {
        /// Vessel name as supplied.
        vessel_name: String,
        /// Why the vessel could not be placed.
        reason: String,
    },
    /// An operator's cranes intersect no leader's crane set; the row
    /// carries the sentinel leader instead.
    UnlinkedOperator {
        /// Zone being allocated.
        zone: Zone,
        /// Operator left without a supervising leader.
        operator_name: String,
    },
    /// Every leader was already at the per-leader ship ceiling, so the
    /// vessel was force-placed on the least-loaded leader.
    CeilingExceeded {
        /// Zone being allocated.
        zone: Zone,
        /// Leader that received the extra vessel.
        leader_name: String,
        /// Vessel placed above the ceiling.
        vessel_name: String,
    },
}

impl std::fmt::Display for AssignWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignWarning::UnknownWorkArea { workarea } => {
                write!(f, "unknown work area '{workarea}'")
            }
            AssignWarning::UnmatchedVessel {
                vessel_name,
                reason,
            } => {
                write!(f, "vessel '{vessel_name}' excluded: {reason}")
            }
            AssignWarning::UnlinkedOperator {
                zone,
                operator_name,
            } => {
                write!(f, "{zone}: operator '{operator_name}' matches no leader's cranes")
            }
            AssignWarning::CeilingExceeded {
                zone,
                leader_name,
                vessel_name,
            } => {
                write!(
                    f,
                    "{zone}: vessel '{vessel_name}' placed on '{leader_name}' above the ship ceiling"
                )
            }
        }
    }
}
