//! Tally assignment domain models.
//!
//! Provides the core data types of the assignment problem: zones,
//! vessels, staff, and the output records a run produces. All entities
//! are rebuilt fresh on every invocation from the externally supplied
//! relations — there is no cross-run state.
//!
//! # Domain Mappings
//!
//! | tally-assign | Terminal floor | Roster sheet |
//! |--------------|---------------|--------------|
//! | Zone | Work area (四期 / 自动化) | 工作地 |
//! | Vessel | Ship being worked | 船舶 |
//! | StaffMember | Leader / operator | 理货组长 / 理货员 |
//! | AssignmentRow | One operator's linked duty | 配工结果 row |

mod assignment;
mod staff;
mod vessel;
mod zone;

pub use assignment::{AssignmentRow, LeaderSummary};
pub use staff::{Availability, Role, StaffMember};
pub use vessel::{SizeRules, Vessel, VesselSize, DEFAULT_LARGE_THRESHOLD};
pub use zone::{UnknownZone, Zone};
