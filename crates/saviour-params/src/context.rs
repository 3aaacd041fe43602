//! Network selection
//!
//! [`ChainRegistry`] holds the parameters of every network. A
//! [`ChainContext`] is created by selecting one of them once at startup and is
//! then passed to everything that needs the active parameters. There is no
//! global "current network": without a context there is nothing to query.

use crate::chain::ChainParams;
use crate::{Error, NetworkId, Result};

/// Verified parameters for all supported networks
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    main: ChainParams,
    testnet: ChainParams,
    regtest: ChainParams,
    unit_test: ChainParams,
}

impl ChainRegistry {
    /// Build and verify the parameters of every network.
    ///
    /// A genesis or checkpoint mismatch means the built-in constants are
    /// broken; callers should treat the error as fatal.
    pub fn new() -> Result<Self> {
        let registry = Self {
            main: ChainParams::main(),
            testnet: ChainParams::testnet(),
            regtest: ChainParams::regtest(),
            unit_test: ChainParams::unit_test(),
        };
        for network in NetworkId::ALL {
            registry.params_for(network).verify()?;
        }
        Ok(registry)
    }

    /// Parameters of an explicit network
    pub fn params_for(&self, network: NetworkId) -> &ChainParams {
        match network {
            NetworkId::Main => &self.main,
            NetworkId::Testnet => &self.testnet,
            NetworkId::Regtest => &self.regtest,
            NetworkId::UnitTest => &self.unit_test,
        }
    }
}

/// The selected network and its parameters
///
/// Share it behind an `Arc` for concurrent readers. Mutation needs
/// `&mut self`, so it cannot overlap with reads.
#[derive(Debug, Clone)]
pub struct ChainContext {
    active: NetworkId,
    registry: ChainRegistry,
}

impl ChainContext {
    /// Select the active network
    pub fn select(network: NetworkId) -> Result<Self> {
        let registry = ChainRegistry::new()?;
        tracing::debug!(network = %network, "selected chain parameters");
        Ok(Self {
            active: network,
            registry,
        })
    }

    /// Select the network from `-testnet` / `-regtest` style flags
    pub fn select_from_flags(testnet: bool, regtest: bool) -> Result<Self> {
        Self::select(NetworkId::from_flags(testnet, regtest)?)
    }

    /// Switch the active network. Intended for test harnesses; selecting the
    /// already active network is a no-op.
    pub fn reselect(&mut self, network: NetworkId) {
        if self.active != network {
            tracing::debug!(from = %self.active, to = %network, "reselected chain parameters");
            self.active = network;
        }
    }

    /// The active network
    pub fn active_network(&self) -> NetworkId {
        self.active
    }

    /// Parameters of the active network
    pub fn active_params(&self) -> &ChainParams {
        self.registry.params_for(self.active)
    }

    /// Parameters of an explicit network, regardless of which is active
    pub fn params_for(&self, network: NetworkId) -> &ChainParams {
        self.registry.params_for(network)
    }

    /// The registry backing this context
    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Mutable view of the unit test parameters.
    ///
    /// # Panics
    ///
    /// Panics unless the unit test network is active.
    pub fn modifiable_params(&mut self) -> ModifiableParams<'_> {
        let active = self.active;
        match self.try_modifiable_params() {
            Ok(params) => params,
            Err(_) => panic!("chain parameters of {} are immutable", active),
        }
    }

    /// Mutable view of the unit test parameters, or
    /// [`Error::ImmutableNetwork`] if another network is active.
    pub fn try_modifiable_params(&mut self) -> Result<ModifiableParams<'_>> {
        if self.active != NetworkId::UnitTest {
            return Err(Error::ImmutableNetwork(self.active));
        }
        Ok(ModifiableParams {
            params: &mut self.registry.unit_test,
        })
    }
}

/// Setters for the unit test network; each replaces exactly one field
#[derive(Debug)]
pub struct ModifiableParams<'a> {
    params: &'a mut ChainParams,
}

impl ModifiableParams<'_> {
    /// Set the subsidy halving interval
    pub fn set_subsidy_halving_interval(&mut self, interval: u32) -> &mut Self {
        self.params.subsidy_halving_interval = interval;
        self
    }

    /// Set the block upgrade enforcement majority
    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) -> &mut Self {
        self.params.enforce_block_upgrade_majority = majority;
        self
    }

    /// Set the outdated block rejection majority
    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) -> &mut Self {
        self.params.reject_block_outdated_majority = majority;
        self
    }

    /// Set the block upgrade majority window
    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) -> &mut Self {
        self.params.to_check_block_upgrade_majority = window;
        self
    }

    /// Set the default consistency checks flag
    pub fn set_default_consistency_checks(&mut self, enabled: bool) -> &mut Self {
        self.params.default_consistency_checks = enabled;
        self
    }

    /// Set the min-difficulty blocks flag
    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) -> &mut Self {
        self.params.allow_min_difficulty_blocks = allowed;
        self
    }

    /// Set the skip proof-of-work flag
    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) -> &mut Self {
        self.params.skip_proof_of_work_check = skip;
        self
    }

    /// Current values
    pub fn params(&self) -> &ChainParams {
        self.params
    }
}
