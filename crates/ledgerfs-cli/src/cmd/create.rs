use anyhow::{Context, Result};
use ledgerfs_client::{DataType, InitializeParams};
use serde::Serialize;
use solana_sdk::signature::{Keypair, Signer};
use tracing::warn;

use crate::args::Cli;
use crate::output;
use crate::solana::client::{load_keypair, Session};
use crate::solana::tx::TxPlan;

pub struct CreateOpts<'a> {
    pub data_type: DataType,
    pub space: u64,
    pub dynamic: bool,
    pub authority: Option<&'a str>,
    pub precreate: bool,
    pub data_keypair: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CreateOut {
    pub data_account: String,
    pub metadata: String,
    pub authority: String,
    pub data_type: DataType,
    pub space: u64,
    pub dynamic: bool,
    pub signature: Option<String>,
    pub plan: Option<TxPlan>,
}

pub async fn run(cli: &Cli, opts: CreateOpts<'_>) -> Result<()> {
    let session = Session::open(cli)?;
    let payer = session.payer()?;
    let data_account = match opts.data_keypair {
        Some(path) => load_keypair(path)?,
        None => Keypair::new(),
    };
    let authority = match opts.authority {
        Some(a) => ledgerfs_client::parse_pubkey(a).context("authority")?,
        None => payer.pubkey(),
    };

    let params = InitializeParams {
        data_type: opts.data_type,
        authority,
        space: opts.space,
        is_dynamic: opts.dynamic,
        is_created: opts.precreate,
    };
    let client = &session.client;
    let (metadata, _bump) = client.derive_metadata(&data_account.pubkey());

    let (signature, plan) = if cli.dry_run {
        let mut ixs = Vec::with_capacity(2);
        if params.is_created {
            let lamports = client.rent_exempt_minimum(params.space).unwrap_or_else(|e| {
                warn!(error = %e, "rent query failed; planning with 0 lamports");
                0
            });
            ixs.push(client.ix_create_account(payer.pubkey(), data_account.pubkey(), lamports, params.space));
        }
        ixs.push(client.ix_initialize(payer.pubkey(), data_account.pubkey(), params)?);
        (None, Some(TxPlan::from_instructions(&ixs)))
    } else {
        let sig = client.create_and_initialize(&payer, &data_account, params)?;
        (Some(sig.to_string()), None)
    };

    output::print(&CreateOut {
        data_account: data_account.pubkey().to_string(),
        metadata: metadata.to_string(),
        authority: authority.to_string(),
        data_type: opts.data_type,
        space: opts.space,
        dynamic: opts.dynamic,
        signature,
        plan,
    })
}
