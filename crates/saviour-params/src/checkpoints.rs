//! Blockchain checkpoints
//!
//! Each network carries a table of hard-coded block hashes. Blocks at a
//! checkpointed height must match the recorded hash.

use crate::{BlockHeight, Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blockchain checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Block height
    pub height: BlockHeight,
    /// Block hash (hex, display order)
    pub hash: String,
}

impl Checkpoint {
    fn new(height: BlockHeight, hash: &str) -> Self {
        Self {
            height,
            hash: hash.to_string(),
        }
    }
}

/// Checkpoints of one network plus sync estimation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointTable {
    checkpoints: Vec<Checkpoint>,
    /// Timestamp of the last checkpoint block (Unix epoch)
    pub last_checkpoint_time: i64,
    /// Total number of transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub transactions_per_day: u64,
}

impl CheckpointTable {
    /// Create a checkpoint table, enforcing strictly increasing heights and a
    /// genesis entry at height 0.
    pub fn new(
        checkpoints: Vec<Checkpoint>,
        last_checkpoint_time: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: u64,
    ) -> Result<Self> {
        let table = Self {
            checkpoints,
            last_checkpoint_time,
            transactions_last_checkpoint,
            transactions_per_day,
        };
        table.validate()?;
        Ok(table)
    }

    /// Mainnet checkpoints
    pub fn mainnet() -> Self {
        Self {
            checkpoints: vec![Checkpoint::new(
                0,
                "00000c6b2241d7e3475bf32fa3b90f5e06667a303bcc06b0d9e677ad5b434d0f",
            )],
            last_checkpoint_time: 1538821283,
            transactions_last_checkpoint: 0,
            transactions_per_day: 2000,
        }
    }

    /// Testnet checkpoints
    pub fn testnet() -> Self {
        Self {
            checkpoints: vec![Checkpoint::new(
                0,
                "000001ac620cfe7defe359601935a01ba8032e38dd30017eb3cc48dc9bcfbb27",
            )],
            last_checkpoint_time: 1538821285,
            transactions_last_checkpoint: 0,
            transactions_per_day: 250,
        }
    }

    /// Regtest checkpoints
    pub fn regtest() -> Self {
        Self {
            checkpoints: vec![Checkpoint::new(
                0,
                "748ee1f3df8f7e01cf8e6f1fb1bebabd9083aa80503b7c8ea7d0929b987d6d9a",
            )],
            last_checkpoint_time: 1538821287,
            transactions_last_checkpoint: 0,
            transactions_per_day: 100,
        }
    }

    /// Check the table invariants
    pub fn validate(&self) -> Result<()> {
        match self.checkpoints.first() {
            Some(first) if first.height == 0 => {}
            _ => {
                return Err(Error::InvalidCheckpoints(
                    "missing genesis checkpoint at height 0".to_string(),
                ))
            }
        }
        if let Some(pair) = self
            .checkpoints
            .windows(2)
            .find(|pair| pair[0].height >= pair[1].height)
        {
            return Err(Error::InvalidCheckpoints(format!(
                "height {} does not increase after {}",
                pair[1].height, pair[0].height
            )));
        }
        for cp in &self.checkpoints {
            crate::genesis::decode_hash("checkpoint", &cp.hash)?;
        }
        Ok(())
    }

    /// Returns false only if a checkpoint exists at `height` and its hash differs
    pub fn check_block(&self, height: BlockHeight, hash: &str) -> bool {
        match self.checkpoints.binary_search_by_key(&height, |cp| cp.height) {
            Ok(index) => hashes_equal(&self.checkpoints[index].hash, hash),
            Err(_) => true,
        }
    }

    /// Get checkpoint at or before given height
    pub fn checkpoint_at_height(&self, height: BlockHeight) -> Result<&Checkpoint> {
        self.checkpoints
            .iter()
            .rev()
            .find(|cp| cp.height <= height)
            .ok_or(Error::CheckpointNotFound(height))
    }

    /// Genesis checkpoint hash
    pub fn genesis_hash(&self) -> Option<&str> {
        self.checkpoints
            .first()
            .filter(|cp| cp.height == 0)
            .map(|cp| cp.hash.as_str())
    }

    /// Height of the last checkpoint, used as a lower bound on chain length
    pub fn total_blocks_estimate(&self) -> BlockHeight {
        self.latest().map(|cp| cp.height).unwrap_or(0)
    }

    /// Last checkpoint time as a UTC timestamp
    pub fn last_checkpoint_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_checkpoint_time, 0)
    }

    /// Get all checkpoints
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Get latest checkpoint
    pub fn latest(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

fn hashes_equal(a: &str, b: &str) -> bool {
    let strip = |s: &str| {
        let s = s.trim();
        s.strip_prefix("0x").unwrap_or(s).to_ascii_lowercase()
    };
    strip(a) == strip(b)
}
