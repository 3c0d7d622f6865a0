//! Turns caller-supplied parameters into SnedPayment constructor arguments.

use std::fmt;

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{address, Address, U256},
    sol_types::SolValue,
};

use crate::{error::DeployError, network::NetworkRegistry};

/// Used for any address parameter the caller leaves out.
pub const DEFAULT_ADDRESS: Address = address!("582de465be2e91eb8ec5939fdb94ac770a5a0920");

/// Parameters supplied for one deployment attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentParameters {
    pub network_id: Option<i64>,
    pub owner: Option<Address>,
    pub swap_router: Option<Address>,
    pub wormhole_bridge: Option<Address>,
}

impl DeploymentParameters {
    pub fn for_network(network_id: i64) -> Self {
        Self {
            network_id: Some(network_id),
            ..Default::default()
        }
    }

    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = Some(owner);
        self
    }

    /// The requested chain id, if it is one that can exist.
    pub fn chain_id(&self) -> Option<u64> {
        self.network_id
            .and_then(|id| u64::try_from(id).ok())
            .filter(|id| *id != 0)
    }
}

/// A named module parameter and the value used when it is not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub default: Option<String>,
}

impl Parameter {
    pub fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    pub fn with_default(name: &'static str, default: impl fmt::Display) -> Self {
        Self {
            name,
            default: Some(default.to_string()),
        }
    }
}

/// Constructor arguments in the order the contract declares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorArgs {
    /// `(owner, swapRouter, wormholeBridge)`
    Direct {
        owner: Address,
        swap_router: Address,
        wormhole_bridge: Address,
    },
    /// `(owner, swapRouter, wormholeBridge, wormholeChainId)`
    NetworkDerived {
        owner: Address,
        swap_router: Address,
        bridge: Address,
        bridge_chain_code: u16,
    },
}

impl ConstructorArgs {
    pub fn owner(&self) -> Address {
        match self {
            Self::Direct { owner, .. } | Self::NetworkDerived { owner, .. } => *owner,
        }
    }

    pub fn values(&self) -> Vec<DynSolValue> {
        match *self {
            Self::Direct {
                owner,
                swap_router,
                wormhole_bridge,
            } => vec![
                DynSolValue::Address(owner),
                DynSolValue::Address(swap_router),
                DynSolValue::Address(wormhole_bridge),
            ],
            Self::NetworkDerived {
                owner,
                swap_router,
                bridge,
                bridge_chain_code,
            } => vec![
                DynSolValue::Address(owner),
                DynSolValue::Address(swap_router),
                DynSolValue::Address(bridge),
                DynSolValue::Uint(U256::from(bridge_chain_code), 16),
            ],
        }
    }

    /// ABI encoding appended to the creation bytecode.
    pub fn abi_encode(&self) -> Vec<u8> {
        match *self {
            Self::Direct {
                owner,
                swap_router,
                wormhole_bridge,
            } => (owner, swap_router, wormhole_bridge).abi_encode_params(),
            Self::NetworkDerived {
                owner,
                swap_router,
                bridge,
                bridge_chain_code,
            } => (owner, swap_router, bridge, bridge_chain_code).abi_encode_params(),
        }
    }
}

impl fmt::Display for ConstructorArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct {
                owner,
                swap_router,
                wormhole_bridge,
            } => write!(f, "[{owner}, {swap_router}, {wormhole_bridge}]"),
            Self::NetworkDerived {
                owner,
                swap_router,
                bridge,
                bridge_chain_code,
            } => write!(f, "[{owner}, {swap_router}, {bridge}, {bridge_chain_code}]"),
        }
    }
}

/// One way of producing SnedPayment constructor arguments.
pub trait DeploymentStrategy {
    fn name(&self) -> &'static str;

    /// Module parameters this strategy reads, with their defaults.
    fn parameters(&self) -> Vec<Parameter>;

    fn resolve(&self, params: &DeploymentParameters) -> Result<ConstructorArgs, DeployError>;
}

/// Takes router and bridge addresses as given, without a registry lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectStrategy;

impl DeploymentStrategy for DirectStrategy {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::with_default("owner", DEFAULT_ADDRESS),
            Parameter::with_default("swapRouter", DEFAULT_ADDRESS),
            Parameter::with_default("wormholeBridge", DEFAULT_ADDRESS),
        ]
    }

    fn resolve(&self, params: &DeploymentParameters) -> Result<ConstructorArgs, DeployError> {
        Ok(ConstructorArgs::Direct {
            owner: params.owner.unwrap_or(DEFAULT_ADDRESS),
            swap_router: params.swap_router.unwrap_or(DEFAULT_ADDRESS),
            wormhole_bridge: params.wormhole_bridge.unwrap_or(DEFAULT_ADDRESS),
        })
    }
}

/// Derives router, bridge and bridge chain code from the requested network.
#[derive(Debug, Clone)]
pub struct NetworkStrategy {
    registry: NetworkRegistry,
}

impl NetworkStrategy {
    pub fn new(registry: NetworkRegistry) -> Self {
        Self { registry }
    }
}

impl DeploymentStrategy for NetworkStrategy {
    fn name(&self) -> &'static str {
        "network"
    }

    fn parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::with_default("owner", DEFAULT_ADDRESS),
            Parameter::required("networkId"),
        ]
    }

    fn resolve(&self, params: &DeploymentParameters) -> Result<ConstructorArgs, DeployError> {
        let network = params
            .chain_id()
            .and_then(|chain_id| self.registry.lookup(chain_id))
            .ok_or(DeployError::UnsupportedNetwork {
                network_id: params.network_id,
            })?;

        Ok(ConstructorArgs::NetworkDerived {
            owner: params.owner.unwrap_or(DEFAULT_ADDRESS),
            swap_router: network.swap_router,
            bridge: network.bridge,
            bridge_chain_code: network.bridge_chain_code,
        })
    }
}
