//! cli_offline.rs
//!
//! Black-box checks of the `ledgerfs` binary for commands that never touch
//! the network: `pda`, `decode`, and `--dry-run` planning.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{write_keypair_file, Keypair};

fn ledgerfs() -> Command {
    let mut cmd = Command::cargo_bin("ledgerfs").unwrap();
    for var in ["LEDGERFS_CONFIG", "LEDGERFS_RPC_URL", "LEDGERFS_PROGRAM_ID", "LEDGERFS_KEYPAIR"] {
        cmd.env_remove(var);
    }
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).unwrap()
}

fn keypair_file(dir: &Path) -> (Keypair, String) {
    let kp = Keypair::new();
    let path = dir.join("payer.json");
    write_keypair_file(&kp, &path).unwrap();
    (kp, path.to_str().unwrap().to_string())
}

#[test]
fn pda_matches_library_derivation() {
    let program_id = Pubkey::new_unique();
    let data_account = Pubkey::new_unique();
    let v = json_stdout(
        ledgerfs()
            .args(["--json", "--program-id", &program_id.to_string(), "pda", &data_account.to_string()]),
    );

    let (metadata, bump) = ledgerfs_client::derive_metadata(&program_id, &data_account);
    assert_eq!(v["metadata"], metadata.to_string());
    assert_eq!(v["bump"], bump);
}

#[test]
fn decode_close_payload() {
    let v = json_stdout(ledgerfs().args(["--json", "decode", "0400"]));
    assert_eq!(v["instruction"], "close_data_account");
    assert_eq!(v["tag"], 4);
    assert_eq!(v["debug"], false);
}

#[test]
fn decode_rejects_unknown_tag() {
    ledgerfs().args(["decode", "0900"]).assert().failure();
}

#[test]
fn upload_dry_run_plans_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let (_payer, payer_path) = keypair_file(dir.path());
    let payload = dir.path().join("blob.bin");
    fs::write(&payload, vec![0x5A; 25]).unwrap();

    let v = json_stdout(ledgerfs().args([
        "--json",
        "--dry-run",
        "--keypair",
        &payer_path,
        "--program-id",
        &Pubkey::new_unique().to_string(),
        "upload",
        &Pubkey::new_unique().to_string(),
        payload.to_str().unwrap(),
        "--chunk-size",
        "10",
        "--realloc-down",
    ]));

    assert_eq!(v["chunks"], 3);
    assert_eq!(v["bytes"], 25);
    let plan = v["plan"]["instructions"].as_array().unwrap();
    assert_eq!(plan.len(), 3);
    // tag 1 = update
    assert!(plan.iter().all(|ix| ix["data_hex"].as_str().unwrap().starts_with("01")));
    assert!(v["signatures"].as_array().unwrap().is_empty());
}

#[test]
fn create_dry_run_defaults_authority_to_payer() {
    use solana_sdk::signature::Signer;

    let dir = tempfile::tempdir().unwrap();
    let (payer, payer_path) = keypair_file(dir.path());

    let v = json_stdout(ledgerfs().args([
        "--json",
        "--dry-run",
        "--keypair",
        &payer_path,
        "create",
        "--type",
        "directory",
        "--space",
        "128",
        "--dynamic",
    ]));

    assert_eq!(v["authority"], payer.pubkey().to_string());
    assert_eq!(v["data_type"], "directory");
    assert!(v["signature"].is_null());
    assert_eq!(v["plan"]["instructions"].as_array().unwrap().len(), 1);
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("ledgerfs.json");
    fs::write(&cfg, r#"{"chunk_size":0}"#).unwrap();
    ledgerfs()
        .args(["--config", cfg.to_str().unwrap(), "pda", &Pubkey::new_unique().to_string()])
        .assert()
        .failure();
}
