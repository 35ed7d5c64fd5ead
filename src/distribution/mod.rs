//! Crane and vessel distribution algorithms.
//!
//! The two halves of the allocation core: cranes are split across
//! operators under a per-operator capacity policy, and vessels are
//! split across leaders balancing both raw count and size mix. The
//! assignment linker joins the two distributions afterwards.

mod cranes;
mod vessels;

pub use cranes::{distribute_counts, CraneDistribution, CranePolicy, OperatorAllotment};
pub use vessels::{LeaderAllocation, ShuffleStrategy, VesselDistribution};
