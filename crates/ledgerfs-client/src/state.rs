//! Metadata account layout.
//!
//! The program owns the metadata account; the client only decodes it.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

use crate::error::{DataProgramError, Result};
use crate::instruction::DataType;

/// Lifecycle status recorded by the program.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataStatus {
    #[default]
    Uninitialized,
    Initialized,
    Finalized,
}

impl DataStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initialized => "initialized",
            Self::Finalized => "finalized",
        }
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DataAccountMetadata {
    pub data_type: DataType,
    pub authority: [u8; 32],
    pub data_status: DataStatus,
    pub bump: u8,
    pub hash: [u8; 32],
    pub is_dynamic: bool,
    pub space: u64,
}

impl DataAccountMetadata {
    /// Encoded size of the record. Accounts may be larger.
    pub const LEN: usize = 1 + 32 + 1 + 1 + 32 + 1 + 8;

    /// Decode from raw account data. Bytes past [`Self::LEN`] are ignored.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(DataProgramError::EmptyBuffer);
        }
        let mut buf = data;
        Self::deserialize(&mut buf).map_err(DataProgramError::Decode)
    }

    pub fn pack(&self) -> Result<Vec<u8>> {
        borsh::to_vec(self).map_err(DataProgramError::Encode)
    }

    pub fn authority(&self) -> Pubkey {
        Pubkey::new_from_array(self.authority)
    }

    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }

    pub fn view(&self, address: Pubkey) -> MetadataView {
        MetadataView {
            address: address.to_string(),
            data_type: self.data_type,
            authority: self.authority().to_string(),
            status: self.data_status,
            bump: self.bump,
            hash: self.hash_hex(),
            is_dynamic: self.is_dynamic,
            space: self.space,
        }
    }
}

/// Display form of [`DataAccountMetadata`] with keys and hashes as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataView {
    pub address: String,
    pub data_type: DataType,
    pub authority: String,
    pub status: DataStatus,
    pub bump: u8,
    pub hash: String,
    pub is_dynamic: bool,
    pub space: u64,
}

/// A data account together with its decoded metadata.
#[derive(Debug, Clone)]
pub struct DataAccountState {
    pub data_account: Pubkey,
    pub metadata_address: Pubkey,
    pub metadata: DataAccountMetadata,
    pub data: Vec<u8>,
}

impl DataAccountState {
    /// True when the stored hash matches the SHA-256 of the account data.
    pub fn hash_matches(&self) -> bool {
        crate::hash::content_hash(&self.data) == self.metadata.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataAccountMetadata {
        DataAccountMetadata {
            data_type: DataType::Directory,
            authority: [3; 32],
            data_status: DataStatus::Initialized,
            bump: 251,
            hash: [0xEE; 32],
            is_dynamic: true,
            space: 4096,
        }
    }

    #[test]
    fn len_matches_encoding() {
        assert_eq!(sample().pack().unwrap().len(), DataAccountMetadata::LEN);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = sample().pack().unwrap();
        bytes.extend_from_slice(&[0xFF; 16]);
        assert_eq!(DataAccountMetadata::unpack(&bytes).unwrap(), sample());
    }

    #[test]
    fn truncated_record_fails() {
        let bytes = sample().pack().unwrap();
        let err = DataAccountMetadata::unpack(&bytes[..DataAccountMetadata::LEN - 1]).unwrap_err();
        assert!(matches!(err, DataProgramError::Decode(_)));
    }

    #[test]
    fn unknown_status_fails() {
        let mut bytes = sample().pack().unwrap();
        bytes[33] = 7;
        assert!(DataAccountMetadata::unpack(&bytes).is_err());
    }

    #[test]
    fn view_renders_keys() {
        let v = sample().view(Pubkey::default());
        assert_eq!(v.authority, Pubkey::new_from_array([3; 32]).to_string());
        assert_eq!(v.hash, "ee".repeat(32));
        assert_eq!(v.status.as_str(), "initialized");
    }

    #[test]
    fn hash_matches_checks_payload() {
        let data = b"hello".to_vec();
        let mut metadata = sample();
        metadata.hash = crate::hash::content_hash(&data);
        let state = DataAccountState {
            data_account: Pubkey::new_unique(),
            metadata_address: Pubkey::new_unique(),
            metadata,
            data,
        };
        assert!(state.hash_matches());
    }
}
