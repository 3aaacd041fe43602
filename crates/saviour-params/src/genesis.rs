//! Genesis block constants
//!
//! The genesis block itself is built elsewhere; each network only records the
//! header fields and the resulting hash and merkle root, which are checked
//! against the network's checkpoint table at startup.

use crate::checkpoints::CheckpointTable;
use crate::{Error, NetworkId, Result};
use serde::{Deserialize, Serialize};

/// Merkle root of the single coinbase transaction shared by every network
const GENESIS_MERKLE_ROOT: &str =
    "ccef03b022e8ec4b2059279cf2cda18ce63859f69c81b2ec0b1234c288133974";

/// The constants uniquely representing the genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisInfo {
    /// Block hash (hex, display order)
    pub hash: String,
    /// Merkle root (hex, display order)
    pub merkle_root: String,
    /// Header version
    pub version: i32,
    /// Header timestamp (Unix epoch)
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Header nonce
    pub nonce: u32,
}

impl GenesisInfo {
    /// Mainnet genesis
    pub fn mainnet() -> Self {
        Self {
            hash: "00000c6b2241d7e3475bf32fa3b90f5e06667a303bcc06b0d9e677ad5b434d0f".to_string(),
            merkle_root: GENESIS_MERKLE_ROOT.to_string(),
            version: 1,
            time: 1528527600,
            bits: 0x1e0ffff0,
            nonce: 0x29372f,
        }
    }

    /// Testnet genesis: mainnet block with a later timestamp
    pub fn testnet() -> Self {
        Self {
            hash: "000001ac620cfe7defe359601935a01ba8032e38dd30017eb3cc48dc9bcfbb27".to_string(),
            time: 1528527601,
            nonce: 0x62e460,
            ..Self::mainnet()
        }
    }

    /// Regtest genesis: testnet block at minimal difficulty
    pub fn regtest() -> Self {
        Self {
            hash: "748ee1f3df8f7e01cf8e6f1fb1bebabd9083aa80503b7c8ea7d0929b987d6d9a".to_string(),
            time: 1528527602,
            bits: 0x207fffff,
            nonce: 0x3039,
            ..Self::testnet()
        }
    }

    /// Check that the hashes are well formed and that the checkpoint table
    /// starts at this genesis block.
    pub fn verify(&self, network: NetworkId, checkpoints: &CheckpointTable) -> Result<()> {
        let hash = decode_hash("genesis hash", &self.hash)?;
        decode_hash("genesis merkle root", &self.merkle_root)?;

        let found = checkpoints.genesis_hash().unwrap_or_default();
        let matches = decode_hash("checkpoint", found)
            .map(|checkpoint| checkpoint == hash)
            .unwrap_or(false);
        if !matches {
            return Err(Error::GenesisMismatch {
                network,
                expected: self.hash.clone(),
                found: found.to_string(),
            });
        }
        Ok(())
    }
}

/// Decode a 256-bit value written in display order into internal byte order.
pub(crate) fn decode_hash(field: &'static str, value: &str) -> Result<[u8; 32]> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let invalid = || Error::InvalidHash {
        field,
        value: value.to_string(),
    };

    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    let mut out: [u8; 32] = bytes.try_into().map_err(|_| invalid())?;
    out.reverse();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_genesis_matches_checkpoints() {
        GenesisInfo::mainnet()
            .verify(NetworkId::Main, &CheckpointTable::mainnet())
            .unwrap();
        GenesisInfo::testnet()
            .verify(NetworkId::Testnet, &CheckpointTable::testnet())
            .unwrap();
        GenesisInfo::regtest()
            .verify(NetworkId::Regtest, &CheckpointTable::regtest())
            .unwrap();
    }

    #[test]
    fn test_derived_genesis_shares_coinbase() {
        let main = GenesisInfo::mainnet();
        let regtest = GenesisInfo::regtest();
        assert_eq!(regtest.merkle_root, main.merkle_root);
        assert_eq!(regtest.version, 1);
        assert_eq!(GenesisInfo::testnet().bits, main.bits);
    }

    #[test]
    fn test_mismatch_is_reported() {
        let err = GenesisInfo::mainnet()
            .verify(NetworkId::Main, &CheckpointTable::testnet())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::GenesisMismatch {
                network: NetworkId::Main,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_merkle_root() {
        let genesis = GenesisInfo {
            merkle_root: "ccef03".to_string(),
            ..GenesisInfo::mainnet()
        };
        let err = genesis
            .verify(NetworkId::Main, &CheckpointTable::mainnet())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHash { field: "genesis merkle root", .. }));
    }

    #[test]
    fn test_decode_hash_byte_order() {
        let decoded = decode_hash(
            "test",
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        )
        .unwrap();
        assert_eq!(decoded[0], 1);
        assert_eq!(decoded[31], 0);
    }
}
