//! Resolve, then deploy. The engine is only reached once resolution has succeeded.

use alloy::primitives::Address;
use tracing::{error, info};

use crate::{
    engine::DeploymentEngine,
    error::DeployError,
    module::{sned_payment_module, ModuleDescriptor},
    strategy::{DeploymentParameters, DeploymentStrategy},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentOutcome {
    Deployed(Address),
    /// The engine returned without an address under the module's export.
    MissingAddress { export: String },
}

impl DeploymentOutcome {
    pub fn is_deployed(&self) -> bool {
        matches!(self, Self::Deployed(_))
    }
}

/// Resolves constructor arguments with `strategy` and wraps them in the SnedPayment module.
pub fn prepare(
    strategy: &dyn DeploymentStrategy,
    params: &DeploymentParameters,
) -> Result<ModuleDescriptor, DeployError> {
    let args = strategy.resolve(params)?;
    info!(strategy = strategy.name(), %args, "resolved constructor arguments");
    sned_payment_module(strategy.parameters(), args)
}

pub async fn execute<E: DeploymentEngine>(
    engine: &E,
    strategy: &dyn DeploymentStrategy,
    params: &DeploymentParameters,
) -> Result<DeploymentOutcome, DeployError> {
    let module = prepare(strategy, params)?;
    deploy_module(engine, &module).await
}

/// Hands an already prepared module to the engine and checks its export.
pub async fn deploy_module<E: DeploymentEngine>(
    engine: &E,
    module: &ModuleDescriptor,
) -> Result<DeploymentOutcome, DeployError> {
    let result = engine.deploy(module).await?;

    match result.get(module.export()) {
        Some(contract) => Ok(DeploymentOutcome::Deployed(contract.address)),
        None => {
            error!(export = module.export(), "deployment finished without a contract address");
            Ok(DeploymentOutcome::MissingAddress {
                export: module.export().to_string(),
            })
        }
    }
}
