//! Quay-crane tally workforce assignment.
//!
//! Assigns a terminal's quay cranes and vessels across two supervisory
//! roles — tally leaders (per vessel) and tally operators (per crane) —
//! within independently operated work zones, under per-role capacity
//! policies and a fairness objective that balances both workload count
//! and vessel-size mix.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Zone`, `Vessel`, `StaffMember`,
//!   `AssignmentRow`, `LeaderSummary`
//! - **`index`**: Per-zone crane/vessel index built from the two input
//!   relations
//! - **`roster`**: Assignable staff pools and availability summaries
//! - **`distribution`**: Capacity-bounded crane distribution and
//!   size-balanced vessel distribution
//! - **`linker`**: Joins the two distributions into assignment rows
//! - **`orchestrator`**: Per-zone state machine and whole-run driver
//! - **`validation`**: Advisory integrity checks on the raw inputs
//!
//! # Example
//!
//! ```
//! use tally_assign::index::{BerthCraneRow, ShipCraneRow};
//! use tally_assign::models::{Role, StaffMember, Zone};
//! use tally_assign::orchestrator::Assigner;
//!
//! let berths = vec![BerthCraneRow {
//!     workarea: "自动化".into(),
//!     crane_list_raw: "A1，A2, a3,A4".into(),
//! }];
//! let ships = vec![
//!     ShipCraneRow { ship_name: "ALPHA".into(), crane_list_raw: "A1,A2".into() },
//!     ShipCraneRow { ship_name: "BETA".into(), crane_list_raw: "A3,A4".into() },
//! ];
//! let staff = vec![
//!     StaffMember::new("组长", Role::Leader, Zone::Automated),
//!     StaffMember::new("员工一", Role::Operator, Zone::Automated),
//!     StaffMember::new("员工二", Role::Operator, Zone::Automated),
//! ];
//!
//! let plan = Assigner::new().assign(&berths, &ships, &staff);
//! assert_eq!(plan.rows().count(), 2);
//! ```
//!
//! # Design
//!
//! Everything is rebuilt from the input relations on every run; no
//! state crosses runs. Each zone is allocated in isolation and a
//! failed zone becomes a skip reason on its outcome, never an abort of
//! the whole run. Every anomaly is returned as data — a skip reason or
//! a warning — never only logged.

pub mod distribution;
pub mod error;
pub mod index;
pub mod linker;
pub mod models;
pub mod orchestrator;
pub mod roster;
pub mod validation;

pub use error::{AssignError, AssignWarning};
pub use orchestrator::{Assigner, AssignmentPlan, SkipReason, ZoneOutcome};
