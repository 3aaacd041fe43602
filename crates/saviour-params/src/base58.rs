//! Base58 version prefixes

use serde::{Deserialize, Serialize};

/// Kinds of Base58Check encoded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    /// Pay-to-pubkey-hash address
    PubkeyAddress,
    /// Pay-to-script-hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
    /// BIP44 coin type
    ExtCoinType,
}

/// Version bytes for each [`Base58Type`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// Addresses start with 'S' on mainnet
    pub pubkey_address: Vec<u8>,
    /// Script addresses
    pub script_address: Vec<u8>,
    /// Private keys
    pub secret_key: Vec<u8>,
    /// BIP32 public keys
    pub ext_public_key: Vec<u8>,
    /// BIP32 private keys
    pub ext_secret_key: Vec<u8>,
    /// SLIP-0044 coin type
    pub ext_coin_type: Vec<u8>,
}

impl Base58Prefixes {
    /// Mainnet prefixes
    pub fn mainnet() -> Self {
        Self {
            pubkey_address: vec![63],
            script_address: vec![10],
            secret_key: vec![212],
            ext_public_key: vec![0x02, 0x4D, 0x21, 0x32],
            ext_secret_key: vec![0x02, 0x21, 0x39, 0x5A],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x77],
        }
    }

    /// Testnet prefixes, also used by regtest
    pub fn testnet() -> Self {
        Self {
            pubkey_address: vec![125],
            script_address: vec![12],
            secret_key: vec![239],
            ext_public_key: vec![0x3a, 0x84, 0x65, 0xa0],
            ext_secret_key: vec![0x3a, 0x81, 0x59, 0x37],
            // Testnet coin type is 1 for every coin
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
        }
    }

    /// Prefix bytes for the given kind
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }
}
