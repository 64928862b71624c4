//! wire_format.rs
//!
//! Golden byte layouts for every instruction and for the metadata record.
//! These bytes are what the on-chain program decodes; a change here is a
//! protocol break.

use assert_matches::assert_matches;
use ledgerfs_client::{
    CloseDataAccountArgs, DataAccountMetadata, DataProgramError, DataProgramInstruction, DataStatus, DataType,
    FinalizeDataAccountArgs, InitializeDataAccountArgs, UpdateDataAccountArgs, UpdateDataAccountAuthorityArgs,
};

fn initialize_args() -> InitializeDataAccountArgs {
    InitializeDataAccountArgs {
        debug: false,
        data_type: DataType::File,
        bump: 254,
        is_created: true,
        space: 1024,
        authority: [7; 32],
        is_dynamic: true,
    }
}

#[test]
fn initialize_layout() {
    let bytes = DataProgramInstruction::InitializeDataAccount(initialize_args()).pack().unwrap();

    let mut expected = vec![
        0,   // tag
        0,   // debug
        0,   // data_type = file
        254, // bump
        1,   // is_created
    ];
    expected.extend_from_slice(&1024u64.to_le_bytes());
    expected.extend_from_slice(&[7; 32]);
    expected.push(1); // is_dynamic

    assert_eq!(bytes, expected);
    assert_eq!(bytes.len(), 46);
}

#[test]
fn update_layout() {
    let args = UpdateDataAccountArgs {
        debug: true,
        hash: [0xAB; 32],
        data: vec![1, 2, 3],
        offset: 5,
        realloc_down: false,
        data_type: DataType::Directory,
    };
    let bytes = DataProgramInstruction::UpdateDataAccount(args).pack().unwrap();

    let mut expected = vec![1, 1];
    expected.extend_from_slice(&[0xAB; 32]);
    expected.extend_from_slice(&[3, 0, 0, 0, 1, 2, 3]);
    expected.extend_from_slice(&[5, 0, 0, 0, 0, 0, 0, 0]);
    expected.push(0); // realloc_down
    expected.push(1); // data_type = directory

    assert_eq!(bytes, expected);
}

#[test]
fn debug_only_layouts() {
    let cases = [
        (DataProgramInstruction::UpdateDataAccountAuthority(UpdateDataAccountAuthorityArgs { debug: false }), vec![2, 0]),
        (DataProgramInstruction::FinalizeDataAccount(FinalizeDataAccountArgs { debug: true }), vec![3, 1]),
        (DataProgramInstruction::CloseDataAccount(CloseDataAccountArgs { debug: false }), vec![4, 0]),
    ];
    for (ix, expected) in cases {
        assert_eq!(ix.pack().unwrap(), expected, "{}", ix.name());
    }
}

#[test]
fn decode_initialize_from_bytes() {
    let mut raw = vec![0, 1, 1, 200, 0];
    raw.extend_from_slice(&42u64.to_le_bytes());
    raw.extend_from_slice(&[9; 32]);
    raw.push(0);

    let ix = DataProgramInstruction::unpack(&raw).unwrap();
    assert_eq!(
        ix,
        DataProgramInstruction::InitializeDataAccount(InitializeDataAccountArgs {
            debug: true,
            data_type: DataType::Directory,
            bump: 200,
            is_created: false,
            space: 42,
            authority: [9; 32],
            is_dynamic: false,
        })
    );
    assert!(ix.debug());
}

#[test]
fn decode_rejects_bad_bool() {
    // debug flag must be 0 or 1
    assert_matches!(DataProgramInstruction::unpack(&[3, 2]), Err(DataProgramError::Decode(_)));
}

#[test]
fn decode_rejects_truncated_vec() {
    let mut raw = vec![1, 0];
    raw.extend_from_slice(&[0; 32]);
    raw.extend_from_slice(&[10, 0, 0, 0, 1, 2]);
    assert_matches!(DataProgramInstruction::unpack(&raw), Err(DataProgramError::Decode(_)));
}

#[test]
fn metadata_layout_decodes_in_field_order() {
    let mut raw = vec![1]; // data_type = directory
    raw.extend_from_slice(&[5; 32]); // authority
    raw.push(2); // status = finalized
    raw.push(253); // bump
    raw.extend_from_slice(&[0xCD; 32]); // hash
    raw.push(1); // is_dynamic
    raw.extend_from_slice(&777u64.to_le_bytes()); // space

    let meta = DataAccountMetadata::unpack(&raw).unwrap();
    assert_eq!(
        meta,
        DataAccountMetadata {
            data_type: DataType::Directory,
            authority: [5; 32],
            data_status: DataStatus::Finalized,
            bump: 253,
            hash: [0xCD; 32],
            is_dynamic: true,
            space: 777,
        }
    );
    assert!(meta.data_status.is_finalized());
    assert_eq!(meta.pack().unwrap(), raw);
}

#[test]
fn metadata_empty_buffer_is_precondition_failure() {
    assert_matches!(DataAccountMetadata::unpack(&[]), Err(DataProgramError::EmptyBuffer));
}
