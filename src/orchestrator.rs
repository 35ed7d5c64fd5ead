//! Zone orchestration.
//!
//! Runs the full allocation for each zone in a fixed order: crane
//! distribution, vessel distribution, then linking. Each step can
//! short-circuit the zone to a terminal skip outcome (no vessels, no
//! leaders, no operators, capacity mismatch) without throwing; the
//! other zone always runs. The operator pool is copied once up front
//! and handed from zone to zone as it is drawn down.

use std::collections::HashMap;
use std::fmt;

use crate::distribution::{CraneDistribution, CranePolicy, ShuffleStrategy, VesselDistribution};
use crate::error::{AssignError, AssignWarning};
use crate::index::{BerthCraneRow, ShipCraneRow, ZoneIndex};
use crate::linker::link;
use crate::models::{AssignmentRow, LeaderSummary, SizeRules, StaffMember, Zone};
use crate::roster::RosterPools;

/// Why a zone produced no assignment rows.
///
/// A skip is data, not an error: it aborts only its own zone and is
/// reported to the caller alongside the other zone's results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The zone has no vessels awaiting assignment.
    NoShips,
    /// The zone has no assignable tally leaders.
    NoLeaders,
    /// The operator pool for the zone is empty.
    NoOperators,
    /// Crane distribution rejected the pool.
    Distribution(AssignError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoShips => f.write_str("no vessels awaiting assignment"),
            SkipReason::NoLeaders => f.write_str("no tally leaders available"),
            SkipReason::NoOperators => f.write_str("no tally operators available"),
            SkipReason::Distribution(err) => write!(f, "{err}"),
        }
    }
}

/// The result of allocating one zone.
#[derive(Debug, Clone, Default)]
pub struct ZoneOutcome {
    /// Linked assignment rows, one per consumed operator. Empty when
    /// the zone was skipped.
    pub rows: Vec<AssignmentRow>,
    /// Per-leader allocation breakdown.
    pub summaries: Vec<LeaderSummary>,
    /// Anomalies recorded while allocating this zone.
    pub warnings: Vec<AssignWarning>,
    /// Why the zone was skipped, if it was.
    pub skip: Option<SkipReason>,
}

impl ZoneOutcome {
    /// Whether the zone short-circuited without producing rows.
    pub fn is_skipped(&self) -> bool {
        self.skip.is_some()
    }

    fn skipped(reason: SkipReason) -> Self {
        Self {
            skip: Some(reason),
            ..Self::default()
        }
    }
}

/// Allocates one zone and returns its outcome together with the
/// operators still unconsumed afterwards.
///
/// The zone walks `NoShips → NoLeaders → NoOperators → capacity check
/// → distributed → linked`; any failed step returns a skip outcome and
/// the operator pool untouched.
pub fn run_zone(
    zone: Zone,
    index: &ZoneIndex,
    leaders: &[String],
    operators: Vec<String>,
    policy: CranePolicy,
    strategy: ShuffleStrategy,
) -> (ZoneOutcome, Vec<String>) {
    let resources = index.resources(zone);

    if resources.vessel_count() == 0 {
        tracing::info!("{zone}: skipped, no vessels awaiting assignment");
        return (ZoneOutcome::skipped(SkipReason::NoShips), operators);
    }
    if leaders.is_empty() {
        tracing::info!("{zone}: skipped, no tally leaders available");
        return (ZoneOutcome::skipped(SkipReason::NoLeaders), operators);
    }
    if operators.is_empty() {
        tracing::info!("{zone}: skipped, no tally operators available");
        return (ZoneOutcome::skipped(SkipReason::NoOperators), operators);
    }

    let distributed = match policy {
        CranePolicy::Banded { min_per, max_per } => {
            CraneDistribution::banded(&resources.cranes, &operators, min_per, max_per)
                .map(|dist| (dist, Vec::new()))
        }
        CranePolicy::Lot { lot_size } => {
            CraneDistribution::lotted(&resources.cranes, &operators, lot_size)
        }
    };
    let (crane_dist, remaining) = match distributed {
        Ok(pair) => pair,
        Err(err) => {
            tracing::warn!("{zone}: skipped, {err}");
            return (
                ZoneOutcome::skipped(SkipReason::Distribution(err)),
                operators,
            );
        }
    };
    tracing::debug!(
        "{zone}: {} cranes across {} operators",
        crane_dist.total_cranes(),
        crane_dist.len()
    );

    let (vessel_dist, mut warnings) =
        VesselDistribution::build(&resources.vessels, leaders, strategy);
    let (rows, link_warnings) = link(&crane_dist, &vessel_dist, zone);
    warnings.extend(link_warnings);

    let outcome = ZoneOutcome {
        rows,
        summaries: vessel_dist.summaries(),
        warnings,
        skip: None,
    };
    (outcome, remaining)
}

/// The result of a whole run: one outcome per zone plus the operators
/// left in the pool.
///
/// There is no silent partial success — every anomaly is in here as
/// data, either a per-zone skip reason or a warning.
#[derive(Debug, Clone, Default)]
pub struct AssignmentPlan {
    /// Outcomes in zone processing order.
    outcomes: Vec<(Zone, ZoneOutcome)>,
    /// Operators still unconsumed per zone after the run.
    pub remaining_operators: HashMap<Zone, Vec<String>>,
    /// Warnings raised while building the zone index (excluded
    /// vessels, unknown work areas). Empty when the caller built the
    /// index itself.
    pub intake_warnings: Vec<AssignWarning>,
}

impl AssignmentPlan {
    /// The outcome for a zone.
    pub fn outcome(&self, zone: Zone) -> Option<&ZoneOutcome> {
        self.outcomes
            .iter()
            .find(|(z, _)| *z == zone)
            .map(|(_, o)| o)
    }

    /// All assignment rows across zones, in processing order.
    pub fn rows(&self) -> impl Iterator<Item = &AssignmentRow> {
        self.outcomes.iter().flat_map(|(_, o)| o.rows.iter())
    }

    /// All warnings across the run: intake first, then per zone.
    pub fn warnings(&self) -> impl Iterator<Item = &AssignWarning> {
        self.intake_warnings
            .iter()
            .chain(self.outcomes.iter().flat_map(|(_, o)| o.warnings.iter()))
    }
}

/// Configuration holder for whole runs.
///
/// Carries the per-zone crane policies, the size-classification rules,
/// and the shuffle strategy; `run` applies them to every zone in the
/// fixed processing order.
#[derive(Debug, Clone)]
pub struct Assigner {
    policies: HashMap<Zone, CranePolicy>,
    size_rules: SizeRules,
    shuffle: ShuffleStrategy,
}

impl Default for Assigner {
    fn default() -> Self {
        Self::new()
    }
}

impl Assigner {
    /// Creates an assigner with each zone's default policy.
    pub fn new() -> Self {
        Self {
            policies: Zone::ALL
                .iter()
                .map(|&z| (z, CranePolicy::default_for(z)))
                .collect(),
            size_rules: SizeRules::default(),
            shuffle: ShuffleStrategy::default(),
        }
    }

    /// Overrides the crane policy for one zone.
    pub fn with_policy(mut self, zone: Zone, policy: CranePolicy) -> Self {
        self.policies.insert(zone, policy);
        self
    }

    /// Overrides the size-classification rules.
    pub fn with_size_rules(mut self, rules: SizeRules) -> Self {
        self.size_rules = rules;
        self
    }

    /// Overrides the shuffle strategy.
    pub fn with_shuffle(mut self, shuffle: ShuffleStrategy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// The crane policy in force for a zone.
    pub fn policy_for(&self, zone: Zone) -> CranePolicy {
        self.policies
            .get(&zone)
            .copied()
            .unwrap_or_else(|| CranePolicy::default_for(zone))
    }

    /// Runs every zone against an already-built index and roster.
    ///
    /// The operator pool is cloned from the roster once, then handed
    /// from zone to zone; one zone's skip never blocks the next.
    pub fn run(&self, index: &ZoneIndex, pools: &RosterPools) -> AssignmentPlan {
        let mut pool = pools.operator_pool();
        let mut outcomes = Vec::with_capacity(Zone::ALL.len());

        for &zone in &Zone::ALL {
            let operators = pool.remove(&zone).unwrap_or_default();
            let (outcome, remaining) = run_zone(
                zone,
                index,
                pools.leaders_for(zone),
                operators,
                self.policy_for(zone),
                self.shuffle,
            );
            pool.insert(zone, remaining);
            outcomes.push((zone, outcome));
        }

        AssignmentPlan {
            outcomes,
            remaining_operators: pool,
            intake_warnings: Vec::new(),
        }
    }

    /// Full pipeline: builds the index and pools from the raw
    /// relations, then runs every zone.
    ///
    /// Index-build warnings (excluded vessels, unknown work areas) are
    /// carried on the plan as intake warnings.
    pub fn assign(
        &self,
        berth_rows: &[BerthCraneRow],
        ship_rows: &[ShipCraneRow],
        staff: &[StaffMember],
    ) -> AssignmentPlan {
        let (index, intake_warnings) = ZoneIndex::build(berth_rows, ship_rows, &self.size_rules);
        let pools = RosterPools::from_staff(staff);
        let mut plan = self.run(&index, &pools);
        plan.intake_warnings = intake_warnings;
        plan
    }
}
