//! Constants shared between the on-chain data program and clients.
//!
//! Keep these stable because they affect PDA derivation and transaction sizing.

use solana_program::pubkey::Pubkey;

/// PDA seed for the metadata account derived from a data account.
pub const METADATA_SEED: &[u8] = b"data_account_metadata";

/// Default program id (placeholder).
///
/// Replace this with the deployed program id when available.
pub const DEFAULT_PROGRAM_ID: Pubkey = solana_program::pubkey!("LedgerFs11111111111111111111111111111111111");

pub fn default_program_id() -> Pubkey {
    DEFAULT_PROGRAM_ID
}

/// Largest payload slice carried by a single update instruction.
///
/// A legacy transaction is capped at 1232 bytes; this leaves room for one
/// signature, the message header, five account keys, the blockhash and the
/// fixed update fields.
pub const MAX_CHUNK_BYTES: usize = 900;

/// Default RPC endpoint for local development.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program_id_is_the_placeholder() {
        assert_eq!(default_program_id().to_string(), "LedgerFs11111111111111111111111111111111111");
        assert_ne!(default_program_id(), Pubkey::default());
    }
}
