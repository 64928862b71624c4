use anyhow::Result;
use serde::Serialize;
use solana_sdk::signature::Signer;

use crate::args::Cli;
use crate::output;
use crate::solana::client::{parse_account, Session};
use crate::solana::tx::TxPlan;

#[derive(Debug, Serialize)]
pub struct FinalizeOut {
    pub data_account: String,
    pub authority: String,
    pub signature: Option<String>,
    pub plan: Option<TxPlan>,
}

pub async fn run(cli: &Cli, data_account: &str) -> Result<()> {
    let session = Session::open(cli)?;
    let authority = session.payer()?;
    let data_account = parse_account(data_account)?;

    let (signature, plan) = if cli.dry_run {
        let ix = session.client.ix_finalize(authority.pubkey(), data_account)?;
        (None, Some(TxPlan::from_instructions(&[ix])))
    } else {
        let sig = session.client.finalize(&authority, &data_account)?;
        (Some(sig.to_string()), None)
    };

    output::print(&FinalizeOut {
        data_account: data_account.to_string(),
        authority: authority.pubkey().to_string(),
        signature,
        plan,
    })
}
