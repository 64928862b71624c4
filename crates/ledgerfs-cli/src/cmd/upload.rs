use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use ledgerfs_client::DataType;
use serde::Serialize;
use solana_sdk::signature::Signer;

use crate::args::Cli;
use crate::io::input;
use crate::output;
use crate::solana::client::{parse_account, Session};
use crate::solana::tx::TxPlan;

pub struct UploadOpts {
    pub data_type: DataType,
    pub offset: u64,
    pub realloc_down: bool,
    pub chunk_size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct UploadOut {
    pub data_account: String,
    pub bytes: usize,
    pub offset: u64,
    pub hash: String,
    pub chunks: usize,
    pub signatures: Vec<String>,
    pub plan: Option<TxPlan>,
}

pub async fn run(cli: &Cli, data_account: &str, file: &str, opts: UploadOpts) -> Result<()> {
    let mut session = Session::open(cli)?;
    if let Some(n) = opts.chunk_size {
        session.client = session.client.with_chunk_size(n)?;
    }
    let client = &session.client;
    let payer = session.payer()?;
    let data_account = parse_account(data_account)?;
    let bytes = input::read_payload(file)?;
    let hash = ledgerfs_client::hash::content_hash_hex(&bytes);

    if cli.dry_run {
        let ixs = client.ix_upload_chunks(
            payer.pubkey(),
            data_account,
            opts.data_type,
            &bytes,
            opts.offset,
            opts.realloc_down,
        )?;
        return output::print(&UploadOut {
            data_account: data_account.to_string(),
            bytes: bytes.len(),
            offset: opts.offset,
            hash,
            chunks: ixs.len(),
            signatures: vec![],
            plan: Some(TxPlan::from_instructions(&ixs)),
        });
    }

    let pb = if output::is_json() { ProgressBar::hidden() } else { ProgressBar::new(0) };
    pb.set_style(ProgressStyle::with_template("{spinner} {msg} [{bar:30}] {pos}/{len}")?.progress_chars("=> "));
    pb.set_message("uploading");

    let sigs = client.upload(
        &payer,
        &data_account,
        opts.data_type,
        &bytes,
        opts.offset,
        opts.realloc_down,
        |done, total| {
            pb.set_length(total as u64);
            pb.set_position(done as u64);
        },
    )?;
    pb.finish_and_clear();

    output::print(&UploadOut {
        data_account: data_account.to_string(),
        bytes: bytes.len(),
        offset: opts.offset,
        hash,
        chunks: sigs.len(),
        signatures: sigs.iter().map(|s| s.to_string()).collect(),
        plan: None,
    })
}
