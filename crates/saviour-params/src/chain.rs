//! Per-network chain parameters
//!
//! Testnet is built from mainnet, regtest from testnet and unit test from
//! mainnet, each overriding only the values that differ from its base.

use crate::base58::{Base58Prefixes, Base58Type};
use crate::checkpoints::CheckpointTable;
use crate::cost::{CostQuery, CostSchedule};
use crate::genesis::{decode_hash, GenesisInfo};
use crate::{BlockHeight, NetworkId, Result};
use serde::{Deserialize, Serialize};

/// Satoshis per coin
pub const COIN: u64 = 100_000_000;

/// A DNS seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    /// Operator name
    pub name: String,
    /// Seeder hostname
    pub host: String,
}

impl DnsSeed {
    fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// Chain parameters of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Network these parameters belong to
    pub network: NetworkId,
    /// P2P message start bytes
    pub message_start: [u8; 4],
    /// Alert signing public key (hex)
    pub alert_pubkey: String,
    /// P2P port
    pub default_port: u16,
    /// Genesis block
    pub genesis: GenesisInfo,
    /// Proof-of-work limit, as a right shift of the all-ones 256-bit value
    pub pow_limit_shift: u32,
    /// Block subsidy halving interval
    pub subsidy_halving_interval: u32,
    /// Deepest reorganization accepted
    pub max_reorganization_depth: u32,
    /// Blocks out of the last `to_check` required to enforce a new version
    pub enforce_block_upgrade_majority: u32,
    /// Blocks out of the last `to_check` required to reject outdated versions
    pub reject_block_outdated_majority: u32,
    /// Window for the version majority checks
    pub to_check_block_upgrade_majority: u32,
    /// Default miner threads, 0 means one per core
    pub miner_threads: u32,
    /// Difficulty retarget timespan in seconds
    pub target_timespan: i64,
    /// Target block spacing in seconds
    pub target_spacing: i64,
    /// Last proof-of-work block
    pub last_pow_block: BlockHeight,
    /// Coinbase maturity (blocks)
    pub coinbase_maturity: u32,
    /// Tolerated drift in masternode count
    pub masternode_count_drift: u32,
    /// Height at which the stake modifier calculation changed
    pub modifier_update_block: BlockHeight,
    /// Maximum money supply (satoshis)
    pub max_money_out: u64,
    /// DNS seeds
    pub dns_seeds: Vec<DnsSeed>,
    /// Base58 version prefixes
    pub base58_prefixes: Base58Prefixes,
    /// RPC requires a password
    pub require_rpc_password: bool,
    /// Mining requires connected peers
    pub mining_requires_peers: bool,
    /// Minimum difficulty blocks allowed
    pub allow_min_difficulty_blocks: bool,
    /// Run expensive consistency checks by default
    pub default_consistency_checks: bool,
    /// Only relay standard transactions
    pub require_standard: bool,
    /// Blocks are mined on request rather than continuously
    pub mine_blocks_on_demand: bool,
    /// Skip proof-of-work validation
    pub skip_proof_of_work_check: bool,
    /// Report the deprecated `testnet` field over RPC
    pub testnet_to_be_deprecated_field_rpc: bool,
    /// Headers-first sync enabled
    pub headers_first_syncing_active: bool,
    /// Maximum transactions in an obfuscation pool
    pub pool_max_transactions: u32,
    /// Spork signing public key (hex)
    pub spork_key: String,
    /// Dummy address used by the obfuscation pool
    pub obfuscation_pool_dummy_address: String,
    /// Masternode payments start time (Unix epoch)
    pub start_masternode_payments: i64,
    /// Checkpoints
    pub checkpoints: CheckpointTable,
    /// Masternode collateral schedule
    pub masternode_cost: CostSchedule,
}

impl ChainParams {
    /// Parameters for the given network
    pub fn for_network(network: NetworkId) -> Self {
        match network {
            NetworkId::Main => Self::main(),
            NetworkId::Testnet => Self::testnet(),
            NetworkId::Regtest => Self::regtest(),
            NetworkId::UnitTest => Self::unit_test(),
        }
    }

    /// Mainnet parameters
    pub fn main() -> Self {
        Self {
            network: NetworkId::Main,
            // Rarely used upper ASCII, not valid UTF-8
            message_start: [0x80, 0xb6, 0xfc, 0xd9],
            alert_pubkey: "049d9efd9fb7293e5f286e698f0bf440a6c1f13406b492ddcedb1f45e89468eab56fd1d5a1b4c0d513bd18cc514eba84c74c6dedf1079d04d57b5e0b1ce053bf85".to_string(),
            default_port: 31313,
            genesis: GenesisInfo::mainnet(),
            pow_limit_shift: 20,
            subsidy_halving_interval: 210_000,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 30,
            last_pow_block: 479,
            coinbase_maturity: 100,
            masternode_count_drift: 20,
            modifier_update_block: 615_800,
            max_money_out: 21_000_000 * COIN,
            dns_seeds: vec![DnsSeed::new("saviour.in", "seed.saviour.in")],
            base58_prefixes: Base58Prefixes::mainnet(),
            require_rpc_password: true,
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: true,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
            pool_max_transactions: 3,
            spork_key: "04597cb8b4438888e69af0d66d83fdf9b25214aa232099cb2c9a995ac7b8efc72a7b9140584fdd29e6c7cfef7a41ecbd100424bca4eb808123c0db38be96f1c934".to_string(),
            obfuscation_pool_dummy_address: "SN6kxewGqxwWH2m6BDKxYWp9V5LxiiXYdZ".to_string(),
            start_masternode_payments: 1528528200,
            checkpoints: CheckpointTable::mainnet(),
            masternode_cost: CostSchedule::mainnet(),
        }
    }

    /// Testnet parameters
    pub fn testnet() -> Self {
        Self {
            network: NetworkId::Testnet,
            message_start: [0x45, 0x76, 0x65, 0xba],
            alert_pubkey: "0430c0621b44675326a38addbf8e73261aa937a23fe5ba29606dd64c47aa2da8e57364c0ebee8997b887c31a28ec36f80a157e20e856a84a18e566e3f9eab5a24c".to_string(),
            default_port: 31113,
            genesis: GenesisInfo::testnet(),
            enforce_block_upgrade_majority: 51,
            reject_block_outdated_majority: 75,
            to_check_block_upgrade_majority: 100,
            target_timespan: 60,
            target_spacing: 60,
            last_pow_block: 200,
            coinbase_maturity: 15,
            masternode_count_drift: 4,
            modifier_update_block: 51_197,
            max_money_out: 43_199_500 * COIN,
            dns_seeds: vec![DnsSeed::new("saviour.in", "testnet.seed.saviour.in")],
            base58_prefixes: Base58Prefixes::testnet(),
            allow_min_difficulty_blocks: true,
            require_standard: false,
            testnet_to_be_deprecated_field_rpc: true,
            pool_max_transactions: 2,
            spork_key: "049c3996aabfe96ea31fd61e02793d1aecea2d96520b4268c80f81a39555cb2d39a4fa59835d4a7dfd75f206e63c844e33b224fbdb4a69d276abf2b9f7c0a67418".to_string(),
            obfuscation_pool_dummy_address: "sN6kxewGqxwWH2m6BDKxYWp9V5LxiiXYdZ".to_string(),
            start_masternode_payments: 1528528250,
            checkpoints: CheckpointTable::testnet(),
            masternode_cost: CostSchedule::testnet(),
            ..Self::main()
        }
    }

    /// Regression test parameters
    pub fn regtest() -> Self {
        Self {
            network: NetworkId::Regtest,
            message_start: [0xa1, 0xcf, 0x7e, 0xac],
            default_port: 21105,
            genesis: GenesisInfo::regtest(),
            pow_limit_shift: 1,
            subsidy_halving_interval: 150,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 1,
            target_timespan: 24 * 60 * 60,
            target_spacing: 60,
            dns_seeds: Vec::new(),
            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,
            checkpoints: CheckpointTable::regtest(),
            masternode_cost: CostSchedule::regtest(),
            ..Self::testnet()
        }
    }

    /// Unit test parameters: mainnet chain with local-only behaviour
    pub fn unit_test() -> Self {
        Self {
            network: NetworkId::UnitTest,
            default_port: 31107,
            dns_seeds: Vec::new(),
            require_rpc_password: false,
            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..Self::main()
        }
    }

    /// Check genesis, checkpoints, keys and cost schedule
    pub fn verify(&self) -> Result<()> {
        self.checkpoints.validate()?;
        self.genesis.verify(self.network, &self.checkpoints)?;
        self.masternode_cost.validate()?;
        decode_key("alert key", &self.alert_pubkey)?;
        decode_key("spork key", &self.spork_key)?;
        tracing::debug!(network = %self.network, "chain parameters verified");
        Ok(())
    }

    /// Proof-of-work limit as big-endian bytes
    pub fn pow_limit(&self) -> [u8; 32] {
        let mut limit = [0xffu8; 32];
        let shift = self.pow_limit_shift.min(256) as usize;
        let (whole, partial) = (shift / 8, shift % 8);
        for byte in limit.iter_mut().take(whole) {
            *byte = 0;
        }
        if let Some(byte) = limit.get_mut(whole) {
            *byte = 0xff >> partial;
        }
        limit
    }

    /// Proof-of-work limit as hex
    pub fn pow_limit_hex(&self) -> String {
        hex::encode(self.pow_limit())
    }

    /// Blocks between difficulty adjustments
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Base58 prefix bytes for the given kind
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Masternode collateral at `height`, see [`CostSchedule::resolve`]
    pub fn masternode_cost(&self, height: BlockHeight, query: CostQuery) -> Option<u64> {
        self.masternode_cost.resolve(height, query)
    }

    /// Check if amount is valid (within max supply)
    pub fn is_valid_amount(&self, amount: u64) -> bool {
        amount <= self.max_money_out
    }
}

fn decode_key(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|_| crate::Error::InvalidHash {
        field,
        value: value.to_string(),
    })
}
