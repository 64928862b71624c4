//! Data program instruction encoding.
//!
//! The layout is fixed and must match the program byte-for-byte:
//! a one-byte instruction tag followed by the argument struct, fields in
//! declaration order. Booleans and `u8` tags are one byte, `u64` values are
//! 8 bytes little-endian, `[u8; 32]` arrays are written raw and `Vec<u8>` is a
//! `u32` little-endian length followed by the bytes (Borsh).

use std::fmt;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::{DataProgramError, Result};

/// Kind of payload a data account holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    File,
    Directory,
}

impl DataType {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::File => 0,
            Self::Directory => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl TryFrom<u8> for DataType {
    type Error = DataProgramError;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::File),
            1 => Ok(Self::Directory),
            _ => Err(DataProgramError::invalid_argument(format!("unknown data type tag: {v}"))),
        }
    }
}

impl FromStr for DataType {
    type Err = DataProgramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "f" => Ok(Self::File),
            "directory" | "dir" | "d" => Ok(Self::Directory),
            other => Err(DataProgramError::invalid_argument(format!("unknown data type: {other}"))),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct InitializeDataAccountArgs {
    pub debug: bool,
    pub data_type: DataType,
    /// Bump of the metadata PDA.
    pub bump: u8,
    /// True when the data account was already created by a system
    /// `create_account` in the same transaction (or earlier).
    pub is_created: bool,
    pub space: u64,
    pub authority: [u8; 32],
    pub is_dynamic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UpdateDataAccountArgs {
    pub debug: bool,
    pub hash: [u8; 32],
    pub data: Vec<u8>,
    pub offset: u64,
    /// Shrink the account to `offset + data.len()` after the write.
    pub realloc_down: bool,
    pub data_type: DataType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct UpdateDataAccountAuthorityArgs {
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct FinalizeDataAccountArgs {
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BorshSerialize, BorshDeserialize)]
pub struct CloseDataAccountArgs {
    pub debug: bool,
}

/// Bytes an update instruction spends outside of its payload slice,
/// including the tag byte.
pub const UPDATE_FIXED_LEN: usize = 1 + 1 + 32 + 4 + 8 + 1 + 1;

/// Number of defined instruction tags.
const INSTRUCTION_COUNT: u8 = 5;

/// Instructions understood by the data program.
///
/// Variant order defines the tag byte; never reorder.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum DataProgramInstruction {
    InitializeDataAccount(InitializeDataAccountArgs),
    UpdateDataAccount(UpdateDataAccountArgs),
    UpdateDataAccountAuthority(UpdateDataAccountAuthorityArgs),
    FinalizeDataAccount(FinalizeDataAccountArgs),
    CloseDataAccount(CloseDataAccountArgs),
}

impl DataProgramInstruction {
    pub fn tag(&self) -> u8 {
        match self {
            Self::InitializeDataAccount(_) => 0,
            Self::UpdateDataAccount(_) => 1,
            Self::UpdateDataAccountAuthority(_) => 2,
            Self::FinalizeDataAccount(_) => 3,
            Self::CloseDataAccount(_) => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InitializeDataAccount(_) => "initialize_data_account",
            Self::UpdateDataAccount(_) => "update_data_account",
            Self::UpdateDataAccountAuthority(_) => "update_data_account_authority",
            Self::FinalizeDataAccount(_) => "finalize_data_account",
            Self::CloseDataAccount(_) => "close_data_account",
        }
    }

    pub fn debug(&self) -> bool {
        match self {
            Self::InitializeDataAccount(a) => a.debug,
            Self::UpdateDataAccount(a) => a.debug,
            Self::UpdateDataAccountAuthority(a) => a.debug,
            Self::FinalizeDataAccount(a) => a.debug,
            Self::CloseDataAccount(a) => a.debug,
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>> {
        borsh::to_vec(self).map_err(DataProgramError::Encode)
    }

    /// Decode a full instruction payload. Trailing bytes are rejected.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let Some(&tag) = data.first() else {
            return Err(DataProgramError::EmptyBuffer);
        };
        if tag >= INSTRUCTION_COUNT {
            return Err(DataProgramError::UnknownInstruction(tag));
        }
        borsh::from_slice(data).map_err(DataProgramError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_encoded_first_byte() {
        let ixs = [
            DataProgramInstruction::UpdateDataAccountAuthority(Default::default()),
            DataProgramInstruction::FinalizeDataAccount(Default::default()),
            DataProgramInstruction::CloseDataAccount(Default::default()),
        ];
        for ix in ixs {
            assert_eq!(ix.pack().unwrap()[0], ix.tag(), "{}", ix.name());
        }
    }

    #[test]
    fn debug_only_payloads_are_two_bytes() {
        let ix = DataProgramInstruction::CloseDataAccount(CloseDataAccountArgs { debug: true });
        assert_eq!(ix.pack().unwrap(), vec![4, 1]);
    }

    #[test]
    fn update_fixed_len_matches_encoding() {
        let args = UpdateDataAccountArgs {
            debug: false,
            hash: [0; 32],
            data: vec![9; 17],
            offset: 0,
            realloc_down: false,
            data_type: DataType::File,
        };
        let bytes = DataProgramInstruction::UpdateDataAccount(args).pack().unwrap();
        assert_eq!(bytes.len(), UPDATE_FIXED_LEN + 17);
    }

    #[test]
    fn unpack_rejects_empty_and_unknown() {
        assert!(matches!(DataProgramInstruction::unpack(&[]), Err(DataProgramError::EmptyBuffer)));
        assert!(matches!(
            DataProgramInstruction::unpack(&[9, 0]),
            Err(DataProgramError::UnknownInstruction(9))
        ));
    }

    #[test]
    fn unpack_rejects_trailing_bytes() {
        assert!(matches!(
            DataProgramInstruction::unpack(&[3, 0, 0]),
            Err(DataProgramError::Decode(_))
        ));
    }

    #[test]
    fn data_type_parsing() {
        assert_eq!("File".parse::<DataType>().unwrap(), DataType::File);
        assert_eq!("dir".parse::<DataType>().unwrap(), DataType::Directory);
        assert!("symlink".parse::<DataType>().is_err());
        assert_eq!(DataType::try_from(1).unwrap(), DataType::Directory);
        assert!(DataType::try_from(2).is_err());
    }
}
