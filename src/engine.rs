use std::{
    collections::BTreeMap,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::Address,
    providers::Provider,
    rpc::types::TransactionRequest,
    transports::Transport,
};
use tracing::{debug, info};

use crate::{
    artifact::load_bytecode,
    error::EngineError,
    module::{ContractStep, ModuleDescriptor},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
}

/// Deployed contracts keyed by the module's export name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentResult {
    contracts: BTreeMap<String, DeployedContract>,
}

impl DeploymentResult {
    pub fn insert(&mut self, export: impl Into<String>, address: Address) {
        self.contracts
            .insert(export.into(), DeployedContract { address });
    }

    pub fn get(&self, export: &str) -> Option<&DeployedContract> {
        self.contracts.get(export)
    }
}

#[allow(async_fn_in_trait)]
pub trait DeploymentEngine {
    async fn deploy(&self, module: &ModuleDescriptor) -> Result<DeploymentResult, EngineError>;
}

/// Sends the creation transaction through an alloy provider that holds the deployer wallet.
pub struct AlloyEngine<P, T> {
    provider: P,
    artifacts: PathBuf,
    expected_chain: Option<u64>,
    _phantom: PhantomData<T>,
}

impl<P, T> AlloyEngine<P, T>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    pub fn new(provider: P, artifacts: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            artifacts: artifacts.into(),
            expected_chain: None,
            _phantom: PhantomData,
        }
    }

    /// Refuse to deploy unless the rpc reports this chain id.
    pub fn expect_chain(mut self, chain_id: Option<u64>) -> Self {
        self.expected_chain = chain_id;
        self
    }
}

impl<P, T> DeploymentEngine for AlloyEngine<P, T>
where
    P: Provider<T, Ethereum>,
    T: Transport + Clone,
{
    async fn deploy(&self, module: &ModuleDescriptor) -> Result<DeploymentResult, EngineError> {
        if let Some(expected) = self.expected_chain {
            ensure_chain(expected, self.provider.get_chain_id().await?)?;
        }

        let step = module.step();
        let code = creation_code(&self.artifacts, step)?;
        debug!(contract = %step.contract, bytes = code.len(), "loaded creation code");

        let tx = TransactionRequest::default().with_deploy_code(code);
        let pending = self.provider.send_transaction(tx).await?;
        info!(module = module.id(), tx_hash = %pending.tx_hash(), "sent creation transaction");

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(EngineError::Reverted {
                tx_hash: receipt.transaction_hash,
            });
        }

        Ok(collect_result(module.export(), receipt.contract_address))
    }
}

/// Artifact bytecode followed by the ABI-encoded constructor arguments.
pub fn creation_code(artifacts: &Path, step: &ContractStep) -> Result<Vec<u8>, EngineError> {
    let mut code = load_bytecode(artifacts, &step.contract)?.to_vec();
    code.extend(step.args.abi_encode());
    Ok(code)
}

pub fn ensure_chain(expected: u64, actual: u64) -> Result<(), EngineError> {
    if actual != expected {
        return Err(EngineError::ChainMismatch { expected, actual });
    }
    Ok(())
}

/// A receipt without a contract address leaves the export unset.
fn collect_result(export: &str, contract_address: Option<Address>) -> DeploymentResult {
    let mut result = DeploymentResult::default();
    if let Some(address) = contract_address {
        result.insert(export, address);
    }
    result
}
