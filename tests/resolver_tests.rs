//! Constructor argument resolution against the network table.

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{address, U256},
};
use sned_deploy::{
    network::ARBITRUM, strategy::DEFAULT_ADDRESS, ConstructorArgs, DeployError,
    DeploymentParameters, DeploymentStrategy, NetworkRegistry, NetworkStrategy,
};

mod helpers;
use helpers::optimism;

fn builtin() -> NetworkStrategy {
    NetworkStrategy::new(NetworkRegistry::builtin())
}

fn assert_unsupported(params: DeploymentParameters) {
    let expected = params.network_id;
    match builtin().resolve(&params) {
        Err(DeployError::UnsupportedNetwork { network_id }) => assert_eq!(network_id, expected),
        other => panic!("expected UnsupportedNetwork, got {other:?}"),
    }
}

#[test]
fn arbitrum_with_default_owner() {
    let args = builtin()
        .resolve(&DeploymentParameters::for_network(42161))
        .unwrap();

    assert_eq!(
        args,
        ConstructorArgs::NetworkDerived {
            owner: address!("582de465be2e91eb8ec5939fdb94ac770a5a0920"),
            swap_router: address!("e592427a0aece92de3edee1f18e0157c05861564"),
            bridge: address!("0b2402144bb366a632d14b83f244d2e0e21bd39c"),
            bridge_chain_code: 23,
        }
    );
}

#[test]
fn explicit_owner_only_changes_the_owner() {
    let owner = address!("abc0000000000000000000000000000000000001");
    let default = builtin()
        .resolve(&DeploymentParameters::for_network(42161))
        .unwrap();
    let custom = builtin()
        .resolve(&DeploymentParameters::for_network(42161).with_owner(owner))
        .unwrap();

    assert_eq!(custom.owner(), owner);
    assert_eq!(custom.values()[0], DynSolValue::Address(owner));
    assert_eq!(custom.values()[1..], default.values()[1..]);
}

#[test]
fn unregistered_chain_is_unsupported() {
    let err = builtin()
        .resolve(&DeploymentParameters::for_network(1))
        .unwrap_err();
    assert!(matches!(
        err,
        DeployError::UnsupportedNetwork {
            network_id: Some(1)
        }
    ));
}

#[test]
fn zero_negative_and_missing_ids_are_unsupported() {
    assert_unsupported(DeploymentParameters::for_network(0));
    assert_unsupported(DeploymentParameters::for_network(-1));
    assert_unsupported(DeploymentParameters::for_network(-42161));
    assert_unsupported(DeploymentParameters::for_network(i64::MAX));
    assert_unsupported(DeploymentParameters::default());
}

#[test]
fn every_registered_network_resolves_to_its_entry() {
    let registry = NetworkRegistry::new([ARBITRUM, optimism()]).unwrap();
    let strategy = NetworkStrategy::new(registry.clone());

    for network in registry.iter() {
        let params = DeploymentParameters::for_network(network.chain_id as i64);
        let args = strategy.resolve(&params).unwrap();
        assert_eq!(
            args.values(),
            vec![
                DynSolValue::Address(DEFAULT_ADDRESS),
                DynSolValue::Address(network.swap_router),
                DynSolValue::Address(network.bridge),
                DynSolValue::Uint(U256::from(network.bridge_chain_code), 16),
            ]
        );
    }
}

#[test]
fn injected_registry_replaces_the_builtin_table() {
    let strategy = NetworkStrategy::new(NetworkRegistry::new([optimism()]).unwrap());

    assert!(strategy
        .resolve(&DeploymentParameters::for_network(10))
        .is_ok());
    assert!(strategy
        .resolve(&DeploymentParameters::for_network(42161))
        .is_err());
}

#[test]
fn argument_order_is_stable() {
    let strategy = builtin();
    let params = DeploymentParameters::for_network(42161);
    let first = strategy.resolve(&params).unwrap();

    for _ in 0..8 {
        let again = strategy.resolve(&params).unwrap();
        assert_eq!(again.values(), first.values());
        assert_eq!(again.abi_encode(), first.abi_encode());
    }
}

#[test]
fn network_strategy_declares_network_id_without_default() {
    let parameters = builtin().parameters();
    let network_id = parameters
        .iter()
        .find(|parameter| parameter.name == "networkId")
        .unwrap();
    assert_eq!(network_id.default, None);
}
