//! Masternode collateral cost schedule
//!
//! The collateral required to run a masternode rises in steps over the life
//! of the chain. A step takes effect strictly after its activation height.
//! For [`MASTERNODE_COST_DELTA`] blocks after a transition the previous tier
//! can still be queried, so that masternodes locked at the old amount are not
//! invalidated at the exact transition block.

use crate::{BlockHeight, Error, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Trailing window, in blocks, during which the previous tier stays queryable
pub const MASTERNODE_COST_DELTA: BlockHeight = 1440;

static SCHEDULE_LOGGED: OnceCell<()> = OnceCell::new();

/// One tier of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostStep {
    /// Height after which this tier applies
    pub activation_height: BlockHeight,
    /// Collateral in whole coins
    pub cost: u64,
}

impl CostStep {
    /// Create a step
    pub const fn new(activation_height: BlockHeight, cost: u64) -> Self {
        Self {
            activation_height,
            cost,
        }
    }
}

/// Which tier a cost query asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostQuery {
    /// The tier in force at the queried height
    Current,
    /// The tier before the current one, only inside the grace window
    Previous,
}

/// Ordered masternode cost tiers of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSchedule {
    steps: Vec<CostStep>,
    grace_window: BlockHeight,
}

impl CostSchedule {
    /// Create a schedule from steps in ascending activation order.
    pub fn new(steps: Vec<CostStep>, grace_window: BlockHeight) -> Result<Self> {
        let schedule = Self {
            steps,
            grace_window,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Mainnet tiers: 1000, then 5000 after block 48961, 25000 after 83521
    pub fn mainnet() -> Self {
        Self::from_table(&[(0, 1_000), (48_961, 5_000), (83_521, 25_000)])
    }

    /// Testnet tiers
    pub fn testnet() -> Self {
        Self::from_table(&[(0, 10), (1_000, 100), (2_000, 200)])
    }

    /// Regtest tiers
    pub fn regtest() -> Self {
        Self::from_table(&[(0, 10), (1_500, 100), (2_000, 200)])
    }

    // Built-in tables are checked when the registry is constructed.
    fn from_table(table: &[(BlockHeight, u64)]) -> Self {
        Self {
            steps: table
                .iter()
                .map(|&(height, cost)| CostStep::new(height, cost))
                .collect(),
            grace_window: MASTERNODE_COST_DELTA,
        }
    }

    /// Check that the schedule is non-empty, ordered, and has a usable window
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(Error::EmptyCostSchedule);
        }
        if let Some(index) = self
            .steps
            .windows(2)
            .position(|pair| pair[0].activation_height > pair[1].activation_height)
        {
            return Err(Error::UnorderedCostSchedule(index + 1));
        }
        if self.grace_window < 0 {
            return Err(Error::InvalidGraceWindow(self.grace_window));
        }
        Ok(())
    }

    /// All tiers in activation order
    pub fn steps(&self) -> &[CostStep] {
        &self.steps
    }

    /// Grace window in blocks
    pub fn grace_window(&self) -> BlockHeight {
        self.grace_window
    }

    /// Index of the tier in force at `height`.
    ///
    /// The tier is the one just before the first step not yet reached. When
    /// every step has been reached the last tier applies; at or below the
    /// first activation height tier 0 applies.
    pub fn current_tier(&self, height: BlockHeight) -> usize {
        match self
            .steps
            .iter()
            .position(|step| step.activation_height >= height)
        {
            Some(index) => index.saturating_sub(1),
            None => self.steps.len().saturating_sub(1),
        }
    }

    /// Collateral cost at `height`.
    ///
    /// Returns `None` for a [`CostQuery::Previous`] query when there is no
    /// lower tier or the height is past the grace window. That is a normal
    /// outcome, not an error.
    pub fn resolve(&self, height: BlockHeight, query: CostQuery) -> Option<u64> {
        self.log_once();

        let tier = self.current_tier(height);
        let step = self.steps.get(tier)?;
        match query {
            CostQuery::Current => Some(step.cost),
            CostQuery::Previous => {
                if tier == 0 {
                    return None;
                }
                if height.saturating_sub(self.grace_window) < step.activation_height {
                    self.steps.get(tier - 1).map(|prev| prev.cost)
                } else {
                    None
                }
            }
        }
    }

    fn log_once(&self) {
        SCHEDULE_LOGGED.get_or_init(|| {
            let table = self
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}: {} after {}", i, step.cost, step.activation_height))
                .collect::<Vec<_>>()
                .join(", ");
            tracing::info!(grace_window = self.grace_window, "MN cost table: {}", table);
        });
    }
}
