//! PDA derivation helpers for the ledgerfs data program.
//!
//! Each data account has exactly one metadata account, derived from the data
//! account's key and [`METADATA_SEED`]. The seed order must match the program.

use solana_program::pubkey::Pubkey;

use crate::constants::METADATA_SEED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataPdas {
    pub data_account: Pubkey,
    pub metadata: (Pubkey, u8),
}

impl MetadataPdas {
    pub fn address(&self) -> Pubkey {
        self.metadata.0
    }

    pub fn bump(&self) -> u8 {
        self.metadata.1
    }
}

/// Derive the metadata PDA for a data account.
pub fn derive_metadata(program_id: &Pubkey, data_account: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[METADATA_SEED, data_account.as_ref()], program_id)
}

pub fn pdas_for_data_account(program_id: &Pubkey, data_account: &Pubkey) -> MetadataPdas {
    MetadataPdas {
        data_account: *data_account,
        metadata: derive_metadata(program_id, data_account),
    }
}

/// Parse a base58 account address, reporting the offending input on failure.
pub fn parse_pubkey(input: &str) -> crate::Result<Pubkey> {
    let s = input.trim();
    let bytes = bs58::decode(s)
        .into_vec()
        .map_err(|_| crate::DataProgramError::invalid_argument(format!("invalid base58 pubkey: {s}")))?;
    Pubkey::try_from(bytes.as_slice())
        .map_err(|_| crate::DataProgramError::invalid_argument(format!("pubkey must be 32 bytes: {s}")))
}
