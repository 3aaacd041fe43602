//! Saviour network definitions

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Mainnet
    Main,
    /// Public testnet
    Testnet,
    /// Regtest (local development)
    Regtest,
    /// Unit test harness, the only network with mutable parameters
    UnitTest,
}

impl NetworkId {
    /// Every supported network
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Testnet,
        NetworkId::Regtest,
        NetworkId::UnitTest,
    ];

    /// Canonical network name
    pub const fn name(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }

    /// Resolve the network from `-testnet` / `-regtest` style flags.
    ///
    /// Neither flag selects mainnet. Requesting both is rejected rather than
    /// silently preferring one of them.
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Self> {
        match (testnet, regtest) {
            (true, true) => Err(Error::ConflictingNetworkFlags),
            (true, false) => Ok(NetworkId::Testnet),
            (false, true) => Ok(NetworkId::Regtest),
            (false, false) => Ok(NetworkId::Main),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            "unittest" => Ok(NetworkId::UnitTest),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("main".parse::<NetworkId>().unwrap(), NetworkId::Main);
        assert_eq!("Mainnet".parse::<NetworkId>().unwrap(), NetworkId::Main);
        assert_eq!("test".parse::<NetworkId>().unwrap(), NetworkId::Testnet);
        assert_eq!(" regtest ".parse::<NetworkId>().unwrap(), NetworkId::Regtest);
        assert_eq!("unittest".parse::<NetworkId>().unwrap(), NetworkId::UnitTest);
    }

    #[test]
    fn test_unknown_network_rejected() {
        let err = "devnet".parse::<NetworkId>().unwrap_err();
        assert!(matches!(err, Error::InvalidNetwork(ref name) if name == "devnet"));
    }

    #[test]
    fn test_name_round_trips() {
        for id in NetworkId::ALL {
            assert_eq!(id.to_string().parse::<NetworkId>().unwrap(), id);
        }
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(NetworkId::from_flags(false, false).unwrap(), NetworkId::Main);
        assert_eq!(NetworkId::from_flags(true, false).unwrap(), NetworkId::Testnet);
        assert_eq!(NetworkId::from_flags(false, true).unwrap(), NetworkId::Regtest);
        assert!(matches!(
            NetworkId::from_flags(true, true),
            Err(Error::ConflictingNetworkFlags)
        ));
    }
}
