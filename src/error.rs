use std::path::PathBuf;

use alloy::{
    primitives::TxHash, providers::PendingTransactionError, transports::TransportError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    /// The requested network id is missing, non-positive or not in the registry.
    #[error("unsupported network: {}", display_network_id(.network_id))]
    UnsupportedNetwork { network_id: Option<i64> },

    #[error("duplicate registry entry for chain id {chain_id}")]
    DuplicateNetwork { chain_id: u64 },

    #[error("invalid deployment module: {0}")]
    InvalidModule(&'static str),

    #[error("deployment engine failure: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read artifact {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {path} has no creation bytecode")]
    MissingBytecode { path: PathBuf },

    #[error("creation transaction {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },

    #[error("rpc is connected to chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),
}

fn display_network_id(network_id: &Option<i64>) -> String {
    match network_id {
        Some(id) => id.to_string(),
        None => "<missing>".to_string(),
    }
}
