//! Client configuration.
//!
//! The client does not read environment variables. Callers (the CLI, services)
//! build a [`ClientConfig`] explicitly or load one from a JSON file.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

use crate::constants::{default_program_id, DEFAULT_RPC_URL, MAX_CHUNK_BYTES};
use crate::error::{DataProgramError, Result};
use crate::pda::parse_pubkey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub rpc_url: String,
    /// Base58 program id.
    pub program_id: String,
    /// `processed`, `confirmed` or `finalized`.
    pub commitment: String,
    /// Sets the debug flag on every instruction; the program logs extra detail.
    pub debug: bool,
    /// Payload bytes per update instruction.
    pub chunk_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            program_id: default_program_id().to_string(),
            commitment: "confirmed".to_string(),
            debug: false,
            chunk_size: MAX_CHUNK_BYTES,
        }
    }
}

impl ClientConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| DataProgramError::config(format!("read {}: {e}", path.display())))?;
        let cfg: ClientConfig = serde_json::from_str(&raw)
            .map_err(|e| DataProgramError::config(format!("invalid config json: {e}")))?;
        validate_config(&cfg)?;
        Ok(cfg)
    }

    pub fn program_id(&self) -> Result<Pubkey> {
        parse_pubkey(&self.program_id)
    }

    pub fn commitment_config(&self) -> Result<CommitmentConfig> {
        let level = CommitmentLevel::from_str(&self.commitment)
            .map_err(|_| DataProgramError::config(format!("unknown commitment: {}", self.commitment)))?;
        Ok(CommitmentConfig { commitment: level })
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &ClientConfig) -> Result<()> {
    if cfg.rpc_url.trim().is_empty() {
        return Err(DataProgramError::config("rpc_url must not be empty"));
    }

    if cfg.chunk_size == 0 {
        return Err(DataProgramError::config("chunk_size must be greater than zero"));
    }

    if cfg.chunk_size > MAX_CHUNK_BYTES {
        return Err(DataProgramError::config(format!(
            "chunk_size must not exceed {MAX_CHUNK_BYTES}"
        )));
    }

    cfg.program_id()?;
    cfg.commitment_config()?;
    Ok(())
}
