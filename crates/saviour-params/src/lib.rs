//! Saviour network parameters and masternode cost schedule
//!
//! This crate provides the per-network chain parameters (mainnet, testnet,
//! regtest, unit test), checkpoint data, and resolution of the
//! height-dependent masternode collateral cost.
//!
//! A [`ChainContext`] is created by selecting a network once at startup and is
//! then handed to every consumer:
//!
//! ```
//! use saviour_params::{ChainContext, CostQuery, NetworkId};
//!
//! let ctx = ChainContext::select(NetworkId::Main).unwrap();
//! let cost = ctx.active_params().masternode_cost(50_000, CostQuery::Current);
//! assert_eq!(cost, Some(5_000));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod base58;
pub mod checkpoints;
pub mod chain;
pub mod context;
pub mod cost;
pub mod genesis;
pub mod network;

pub use base58::{Base58Prefixes, Base58Type};
pub use chain::{ChainParams, DnsSeed, COIN};
pub use checkpoints::{Checkpoint, CheckpointTable};
pub use context::{ChainContext, ChainRegistry, ModifiableParams};
pub use cost::{CostQuery, CostSchedule, CostStep, MASTERNODE_COST_DELTA};
pub use genesis::GenesisInfo;
pub use network::NetworkId;

/// Block height. Signed, since cost queries accept any height.
pub type BlockHeight = i64;

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Both -testnet and -regtest were requested
    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworkFlags,

    /// Malformed 256-bit hash or key
    #[error("Invalid hash for {field}: {value}")]
    InvalidHash {
        /// Which parameter held the value
        field: &'static str,
        /// The offending hex string
        value: String,
    },

    /// Genesis hash does not match the checkpoint at height 0
    #[error("Genesis mismatch on {network}: expected {expected}, checkpoint has {found}")]
    GenesisMismatch {
        /// Network being verified
        network: NetworkId,
        /// Hard-coded genesis hash
        expected: String,
        /// Hash recorded at height 0
        found: String,
    },

    /// Checkpoint table violates its ordering invariants
    #[error("Invalid checkpoint table: {0}")]
    InvalidCheckpoints(String),

    /// Checkpoint not found
    #[error("No checkpoint found for height {0}")]
    CheckpointNotFound(BlockHeight),

    /// Cost schedule has no steps
    #[error("Masternode cost schedule is empty")]
    EmptyCostSchedule,

    /// Cost schedule activation heights go backwards
    #[error("Masternode cost schedule is not ordered at step {0}")]
    UnorderedCostSchedule(usize),

    /// Negative grace window
    #[error("Invalid masternode cost grace window: {0}")]
    InvalidGraceWindow(BlockHeight),

    /// Attempted to modify parameters of a network other than unit test
    #[error("Parameters of {0} are immutable")]
    ImmutableNetwork(NetworkId),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
