use anyhow::Result;
use serde::Serialize;
use solana_sdk::signature::Signer;

use crate::args::Cli;
use crate::output;
use crate::solana::client::{load_keypair, parse_account, Session};
use crate::solana::tx::TxPlan;

#[derive(Debug, Serialize)]
pub struct AuthorityOut {
    pub data_account: String,
    pub previous_authority: String,
    pub new_authority: String,
    pub signature: Option<String>,
    pub plan: Option<TxPlan>,
}

pub async fn run(cli: &Cli, data_account: &str, new_authority_path: &str) -> Result<()> {
    let session = Session::open(cli)?;
    let authority = session.payer()?;
    let new_authority = load_keypair(new_authority_path)?;
    let data_account = parse_account(data_account)?;

    let (signature, plan) = if cli.dry_run {
        let ix = session.client.ix_update_authority(authority.pubkey(), data_account, new_authority.pubkey())?;
        (None, Some(TxPlan::from_instructions(&[ix])))
    } else {
        let sig = session.client.update_authority(&authority, &data_account, &new_authority)?;
        (Some(sig.to_string()), None)
    };

    output::print(&AuthorityOut {
        data_account: data_account.to_string(),
        previous_authority: authority.pubkey().to_string(),
        new_authority: new_authority.pubkey().to_string(),
        signature,
        plan,
    })
}
