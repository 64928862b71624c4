use anyhow::Result;
use ledgerfs_client::MetadataView;
use serde::Serialize;

use crate::args::Cli;
use crate::io::input;
use crate::output;
use crate::solana::client::{parse_account, Session};

#[derive(Debug, Serialize)]
pub struct ShowOut {
    pub data_account: String,
    pub metadata: MetadataView,
    pub data_len: usize,
    pub hash_matches: bool,
    pub wrote_to: Option<String>,
}

pub async fn run(cli: &Cli, data_account: &str, out: Option<&str>) -> Result<()> {
    let session = Session::open(cli)?;
    let data_account = parse_account(data_account)?;
    let state = session.client.get_data_and_metadata(&data_account)?;

    if let Some(path) = out {
        input::write_payload(path, &state.data)?;
    }

    output::print(&ShowOut {
        data_account: data_account.to_string(),
        metadata: state.metadata.view(state.metadata_address),
        data_len: state.data.len(),
        hash_matches: state.hash_matches(),
        wrote_to: out.map(|s| s.to_string()),
    })?;

    if !output::is_json() && out.is_none() && !state.data.is_empty() {
        let preview = hex::encode(&state.data[..state.data.len().min(64)]);
        println!("preview_hex_64: {preview}");
    }
    Ok(())
}
