use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use ledgerfs_client::{validate_config, ClientConfig, DataProgramClient};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::args::Cli;

/// Resolved client plus the keypair commands sign with.
pub struct Session {
    pub config: ClientConfig,
    pub client: DataProgramClient,
    keypair_path: PathBuf,
}

impl Session {
    pub fn open(cli: &Cli) -> Result<Self> {
        let config = resolve_config(cli)?;
        let client = DataProgramClient::from_config(&config)?;
        let keypair_path = cli.keypair.as_ref().map(PathBuf::from).unwrap_or_else(default_keypair_path);
        Ok(Self { config, client, keypair_path })
    }

    pub fn payer(&self) -> Result<Keypair> {
        load_keypair(&self.keypair_path)
    }
}

/// Config file first, then flags / env on top.
pub fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut cfg = match &cli.config {
        Some(path) => ClientConfig::from_json_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.url {
        cfg.rpc_url = url.clone();
    }
    if let Some(program_id) = &cli.program_id {
        cfg.program_id = program_id.clone();
    }
    if cli.debug {
        cfg.debug = true;
    }
    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn load_keypair<P: Into<PathBuf>>(path: P) -> Result<Keypair> {
    let path = path.into();
    read_keypair_file(&path).map_err(|e| anyhow!("read keypair {}: {e}", path.display()))
}

pub fn default_keypair_path() -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    home.join(".config").join("solana").join("id.json")
}

pub fn parse_account(input: &str) -> Result<Pubkey> {
    ledgerfs_client::parse_pubkey(input).with_context(|| format!("data account {input}"))
}
