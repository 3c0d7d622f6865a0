//! Declarative description of what gets deployed, handed to a [`DeploymentEngine`].
//!
//! [`DeploymentEngine`]: crate::engine::DeploymentEngine

use crate::{
    error::DeployError,
    strategy::{ConstructorArgs, Parameter},
};

pub const MODULE_ID: &str = "SnedPaymentModule";
pub const CONTRACT_NAME: &str = "SnedPayment";
pub const EXPORT_NAME: &str = "snedPayment";

/// A single contract creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractStep {
    pub contract: String,
    pub args: ConstructorArgs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    id: String,
    parameters: Vec<Parameter>,
    step: ContractStep,
    export: String,
}

impl ModuleDescriptor {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn step(&self) -> &ContractStep {
        &self.step
    }

    /// Key under which the engine reports the deployed contract.
    pub fn export(&self) -> &str {
        &self.export
    }
}

#[derive(Debug, Default)]
pub struct ModuleBuilder {
    id: String,
    parameters: Vec<Parameter>,
    step: Option<ContractStep>,
    export: Option<String>,
}

impl ModuleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn contract(mut self, contract: impl Into<String>, args: ConstructorArgs) -> Self {
        self.step = Some(ContractStep {
            contract: contract.into(),
            args,
        });
        self
    }

    pub fn export(mut self, name: impl Into<String>) -> Self {
        self.export = Some(name.into());
        self
    }

    pub fn build(self) -> Result<ModuleDescriptor, DeployError> {
        let step = self
            .step
            .ok_or(DeployError::InvalidModule("no contract step declared"))?;
        let export = self
            .export
            .ok_or(DeployError::InvalidModule("no export declared"))?;

        Ok(ModuleDescriptor {
            id: self.id,
            parameters: self.parameters,
            step,
            export,
        })
    }
}

/// The SnedPayment module wired with already resolved constructor arguments.
pub fn sned_payment_module(
    parameters: Vec<Parameter>,
    args: ConstructorArgs,
) -> Result<ModuleDescriptor, DeployError> {
    ModuleBuilder::new(MODULE_ID)
        .parameters(parameters)
        .contract(CONTRACT_NAME, args)
        .export(EXPORT_NAME)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{DeploymentParameters, DeploymentStrategy, DirectStrategy};

    fn direct_args() -> ConstructorArgs {
        DirectStrategy
            .resolve(&DeploymentParameters::default())
            .unwrap()
    }

    #[test]
    fn builds_sned_payment_module() {
        let module = sned_payment_module(DirectStrategy.parameters(), direct_args()).unwrap();
        assert_eq!(module.id(), "SnedPaymentModule");
        assert_eq!(module.step().contract, "SnedPayment");
        assert_eq!(module.export(), "snedPayment");
        assert_eq!(module.parameters().len(), 3);
    }

    #[test]
    fn missing_step_or_export_is_invalid() {
        let err = ModuleBuilder::new(MODULE_ID)
            .export(EXPORT_NAME)
            .build()
            .unwrap_err();
        assert!(matches!(err, DeployError::InvalidModule(_)));

        let err = ModuleBuilder::new(MODULE_ID)
            .contract(CONTRACT_NAME, direct_args())
            .build()
            .unwrap_err();
        assert!(matches!(err, DeployError::InvalidModule("no export declared")));
    }
}
