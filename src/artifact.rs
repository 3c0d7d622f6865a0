//! Compiled contract artifacts as emitted by Hardhat or Foundry.

use std::path::{Path, PathBuf};

use alloy::primitives::Bytes;
use serde::Deserialize;

use crate::error::EngineError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Bytecode {
    /// Hardhat: `"bytecode": "0x..."`
    Hex(Bytes),
    /// Foundry: `"bytecode": { "object": "0x...", ... }`
    Object { object: Bytes },
}

#[derive(Debug, Deserialize)]
struct ArtifactFile {
    bytecode: Option<Bytecode>,
}

/// Location of `<Name>.sol/<Name>.json` below an artifacts directory.
pub fn artifact_path(dir: &Path, contract: &str) -> PathBuf {
    dir.join(format!("{contract}.sol")).join(format!("{contract}.json"))
}

/// Creation bytecode for `contract`, without constructor arguments.
pub fn load_bytecode(dir: &Path, contract: &str) -> Result<Bytes, EngineError> {
    let path = artifact_path(dir, contract);
    let raw = std::fs::read_to_string(&path).map_err(|source| EngineError::ArtifactIo {
        path: path.clone(),
        source,
    })?;
    let artifact: ArtifactFile =
        serde_json::from_str(&raw).map_err(|source| EngineError::ArtifactParse {
            path: path.clone(),
            source,
        })?;

    let bytecode = match artifact.bytecode {
        Some(Bytecode::Hex(code)) | Some(Bytecode::Object { object: code }) => code,
        None => Bytes::new(),
    };
    if bytecode.is_empty() {
        return Err(EngineError::MissingBytecode { path });
    }

    Ok(bytecode)
}
