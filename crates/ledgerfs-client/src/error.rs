//! Error types for ledgerfs-client.
//!
//! Local precondition failures get their own variants. Anything the program
//! rejects arrives through the RPC transport and is surfaced as [`DataProgramError::Rpc`]
//! without further interpretation.

use solana_client::client_error::ClientError;
use solana_program::pubkey::Pubkey;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataProgramError>;

#[derive(Debug, Error)]
pub enum DataProgramError {
    #[error("account {0} holds no data")]
    EmptyAccountData(Pubkey),

    #[error("account data is empty")]
    EmptyBuffer,

    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),

    #[error("encode: {0}")]
    Encode(#[source] std::io::Error),

    #[error("decode: {0}")]
    Decode(#[source] std::io::Error),

    #[error("unknown instruction tag: {0}")]
    UnknownInstruction(u8),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("rpc client not configured")]
    RpcNotConfigured,

    #[error("rpc: {0}")]
    Rpc(#[from] Box<ClientError>),

    #[error("config: {0}")]
    Config(String),
}

impl DataProgramError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<ClientError> for DataProgramError {
    fn from(e: ClientError) -> Self {
        Self::Rpc(Box::new(e))
    }
}
