pub mod artifact;
pub mod deploy;
pub mod engine;
pub mod error;
pub mod module;
pub mod network;
pub mod strategy;

pub use deploy::{deploy_module, execute, prepare, DeploymentOutcome};
pub use engine::{AlloyEngine, DeploymentEngine, DeploymentResult};
pub use error::{DeployError, EngineError};
pub use module::{ModuleBuilder, ModuleDescriptor};
pub use network::{NetworkConfig, NetworkRegistry};
pub use strategy::{
    ConstructorArgs, DeploymentParameters, DeploymentStrategy, DirectStrategy, NetworkStrategy,
};
