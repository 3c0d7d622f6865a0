//! Static table of the networks SnedPayment can be deployed to.

use std::collections::BTreeMap;

use alloy::primitives::{address, Address};

use crate::error::DeployError;

/// Deployment parameters for a single chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: &'static str,
    pub chain_id: u64,
    /// Uniswap V3 `SwapRouter`.
    pub swap_router: Address,
    /// Wormhole core bridge.
    pub bridge: Address,
    /// Wormhole's own chain id for `chain_id`, not the EVM chain id.
    pub bridge_chain_code: u16,
}

/// <https://arbiscan.io/address/0xe592427a0aece92de3edee1f18e0157c05861564>
pub const ARBITRUM: NetworkConfig = NetworkConfig {
    name: "arbitrum",
    chain_id: 42161,
    swap_router: address!("e592427a0aece92de3edee1f18e0157c05861564"),
    bridge: address!("0b2402144bb366a632d14b83f244d2e0e21bd39c"),
    bridge_chain_code: 23,
};

pub const SUPPORTED_NETWORKS: &[NetworkConfig] = &[ARBITRUM];

/// Immutable lookup table keyed by chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    networks: BTreeMap<u64, NetworkConfig>,
}

impl NetworkRegistry {
    /// Builds a registry, rejecting a chain id that appears more than once.
    pub fn new(networks: impl IntoIterator<Item = NetworkConfig>) -> Result<Self, DeployError> {
        let mut table = BTreeMap::new();
        for network in networks {
            if table.insert(network.chain_id, network).is_some() {
                return Err(DeployError::DuplicateNetwork {
                    chain_id: network.chain_id,
                });
            }
        }

        Ok(Self { networks: table })
    }

    /// The networks this binary ships with.
    pub fn builtin() -> Self {
        let networks = SUPPORTED_NETWORKS
            .iter()
            .map(|network| (network.chain_id, *network))
            .collect();
        Self { networks }
    }

    pub fn lookup(&self, chain_id: u64) -> Option<NetworkConfig> {
        self.networks.get(&chain_id).copied()
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<NetworkConfig> {
        self.networks
            .values()
            .find(|network| network.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// Networks in ascending chain id order.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkConfig> {
        self.networks.values()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
