#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use alloy::primitives::{address, Address};
use sned_deploy::{
    module::ModuleDescriptor, network::NetworkConfig, DeploymentEngine, DeploymentResult,
    EngineError,
};

pub const DEPLOYED: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

/// How the fake engine answers.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Deployed,
    NoAddress,
    WrongChain,
}

/// Records the modules it was asked to deploy.
pub struct FakeEngine {
    reply: Reply,
    calls: Cell<usize>,
    last: RefCell<Option<ModuleDescriptor>>,
}

impl FakeEngine {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last: Default::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_module(&self) -> Option<ModuleDescriptor> {
        self.last.borrow().clone()
    }
}

impl DeploymentEngine for FakeEngine {
    async fn deploy(&self, module: &ModuleDescriptor) -> Result<DeploymentResult, EngineError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(module.clone());

        let mut result = DeploymentResult::default();
        match self.reply {
            Reply::Deployed => result.insert(module.export(), DEPLOYED),
            Reply::NoAddress => result.insert("somethingElse", DEPLOYED),
            Reply::WrongChain => {
                return Err(EngineError::ChainMismatch {
                    expected: 42161,
                    actual: 1,
                })
            }
        }

        Ok(result)
    }
}

pub fn optimism() -> NetworkConfig {
    NetworkConfig {
        name: "optimism",
        chain_id: 10,
        swap_router: address!("e592427a0aece92de3edee1f18e0157c05861564"),
        bridge: address!("ee91c335eab126df5fdb3797ea9d6ad93aec9722"),
        bridge_chain_code: 24,
    }
}
