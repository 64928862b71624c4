use anyhow::Result;
use serde::Serialize;

use crate::args::Cli;
use crate::output;
use crate::solana::client::{parse_account, resolve_config};

#[derive(Debug, Serialize)]
pub struct PdaOut {
    pub program_id: String,
    pub data_account: String,
    pub metadata: String,
    pub bump: u8,
}

pub async fn run(cli: &Cli, data_account: &str) -> Result<()> {
    let cfg = resolve_config(cli)?;
    let program_id = cfg.program_id()?;
    let data_account = parse_account(data_account)?;
    let pdas = ledgerfs_client::pdas_for_data_account(&program_id, &data_account);

    output::print(&PdaOut {
        program_id: program_id.to_string(),
        data_account: data_account.to_string(),
        metadata: pdas.address().to_string(),
        bump: pdas.bump(),
    })
}
