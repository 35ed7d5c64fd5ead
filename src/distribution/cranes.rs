//! Capacity-bounded crane distribution.
//!
//! Partitions a zone's ordered crane list across its operators. Two
//! policies exist: a banded policy that gives every operator between
//! `min_per` and `max_per` cranes, and a lotted policy that gives each
//! operator exactly `lot_size` cranes and leaves surplus operators in
//! the pool. Both reject impossible pools outright — there is no
//! partial or best-effort allocation.

use serde::{Deserialize, Serialize};

use crate::error::AssignError;
use crate::models::Zone;

/// How a zone's cranes are split across operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CranePolicy {
    /// Every operator receives between `min_per` and `max_per` cranes,
    /// spread as evenly as the band allows.
    Banded {
        /// Minimum cranes per operator.
        min_per: usize,
        /// Maximum cranes per operator.
        max_per: usize,
    },
    /// Every consumed operator receives exactly `lot_size` cranes;
    /// unconsumed operators stay in the pool.
    Lot {
        /// Fixed cranes per operator.
        lot_size: usize,
    },
}

impl CranePolicy {
    /// The policy a zone uses unless overridden.
    pub fn default_for(zone: Zone) -> Self {
        match zone {
            Zone::PhaseFour => CranePolicy::Banded {
                min_per: 4,
                max_per: 6,
            },
            Zone::Automated => CranePolicy::Lot { lot_size: 2 },
        }
    }
}

/// One operator's crane allotment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorAllotment {
    /// Operator the cranes belong to.
    pub operator: String,
    /// Contiguous slice of the zone's ordered crane list.
    pub cranes: Vec<String>,
}

/// A complete crane-to-operator distribution for one zone.
///
/// Allotments are kept in operator input order; together they cover
/// the zone's crane list with no gaps and no overlaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CraneDistribution {
    allotments: Vec<OperatorAllotment>,
}

impl CraneDistribution {
    /// Distributes under the banded policy, consuming every operator.
    pub fn banded(
        cranes: &[String],
        operators: &[String],
        min_per: usize,
        max_per: usize,
    ) -> Result<Self, AssignError> {
        let counts = distribute_counts(cranes.len(), operators.len(), min_per, max_per)?;
        Ok(Self::slice(cranes, operators, &counts))
    }

    /// Distributes under the lotted policy.
    ///
    /// Consumes operators from the front of the pool, one lot each,
    /// and returns the distribution together with the unconsumed tail.
    pub fn lotted(
        cranes: &[String],
        operators: &[String],
        lot_size: usize,
    ) -> Result<(Self, Vec<String>), AssignError> {
        let total = cranes.len();
        if lot_size == 0 || total % lot_size != 0 {
            return Err(AssignError::LotRemainder { total, lot_size });
        }
        let needed = total / lot_size;
        if needed > operators.len() {
            return Err(AssignError::InsufficientStaff {
                needed,
                available: operators.len(),
            });
        }

        let counts = vec![lot_size; needed];
        let distribution = Self::slice(cranes, &operators[..needed], &counts);
        let remaining = operators[needed..].to_vec();
        Ok((distribution, remaining))
    }

    /// Hands out contiguous runs of `cranes` in operator position
    /// order, preserving physical left-to-right contiguity.
    fn slice(cranes: &[String], operators: &[String], counts: &[usize]) -> Self {
        let mut allotments = Vec::with_capacity(operators.len());
        let mut offset = 0;
        for (operator, &count) in operators.iter().zip(counts) {
            allotments.push(OperatorAllotment {
                operator: operator.clone(),
                cranes: cranes[offset..offset + count].to_vec(),
            });
            offset += count;
        }
        Self { allotments }
    }

    /// Allotments in operator input order.
    pub fn iter(&self) -> impl Iterator<Item = &OperatorAllotment> {
        self.allotments.iter()
    }

    /// Number of operators given cranes.
    pub fn len(&self) -> usize {
        self.allotments.len()
    }

    /// Whether no operator received cranes.
    pub fn is_empty(&self) -> bool {
        self.allotments.is_empty()
    }

    /// Total cranes handed out.
    pub fn total_cranes(&self) -> usize {
        self.allotments.iter().map(|a| a.cranes.len()).sum()
    }
}

/// Computes per-operator crane counts under a `[min_per, max_per]`
/// band.
///
/// Seeds every operator at `min_per`, then round-robins the remainder
/// one crane at a time in input order, skipping operators already at
/// `max_per`. Ties always break toward the earlier operator, so the
/// spread is deterministic and as even as the band allows.
pub fn distribute_counts(
    total: usize,
    operators: usize,
    min_per: usize,
    max_per: usize,
) -> Result<Vec<usize>, AssignError> {
    if operators == 0 || total < operators * min_per || total > operators * max_per {
        return Err(AssignError::Capacity {
            total,
            operators,
            min_per,
            max_per,
        });
    }

    let mut counts = vec![min_per; operators];
    let mut remaining = total - operators * min_per;
    let mut i = 0;
    while remaining > 0 {
        if counts[i] < max_per {
            counts[i] += 1;
            remaining -= 1;
        }
        i = (i + 1) % operators;
    }
    Ok(counts)
}
