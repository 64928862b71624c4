use anyhow::Result;
use ledgerfs_client::DataProgramInstruction;
use serde_json::{json, Value};

use crate::io::input;
use crate::output;

pub async fn run(hex_arg: &str) -> Result<()> {
    let bytes = input::decode_hex(hex_arg)?;
    let ix = DataProgramInstruction::unpack(&bytes)?;
    output::print(&describe(&ix))
}

fn describe(ix: &DataProgramInstruction) -> Value {
    let args = match ix {
        DataProgramInstruction::InitializeDataAccount(a) => json!({
            "data_type": a.data_type,
            "bump": a.bump,
            "is_created": a.is_created,
            "space": a.space,
            "authority": solana_sdk::pubkey::Pubkey::new_from_array(a.authority).to_string(),
            "is_dynamic": a.is_dynamic,
        }),
        DataProgramInstruction::UpdateDataAccount(a) => json!({
            "data_type": a.data_type,
            "hash": hex::encode(a.hash),
            "data_len": a.data.len(),
            "offset": a.offset,
            "realloc_down": a.realloc_down,
        }),
        _ => json!({}),
    };
    json!({
        "instruction": ix.name(),
        "tag": ix.tag(),
        "debug": ix.debug(),
        "args": args,
    })
}
