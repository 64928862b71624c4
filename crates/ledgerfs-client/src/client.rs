//! Client for the ledgerfs data program.
//!
//! This client can:
//! - derive metadata PDAs
//! - build instructions (initialize, update, authority change, finalize, close)
//! - split large payloads into offset-addressed update instructions
//! - optionally submit transactions and read accounts via RPC
//!
//! Nothing here checks lifecycle rules. Writing to a finalized account or
//! signing with the wrong authority is rejected by the program and comes back
//! as an RPC error.

use solana_client::rpc_client::RpcClient;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_program::{system_instruction, system_program};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use crate::config::{validate_config, ClientConfig};
use crate::constants::MAX_CHUNK_BYTES;
use crate::error::{DataProgramError, Result};
use crate::hash::content_hash;
use crate::instruction::{
    CloseDataAccountArgs, DataProgramInstruction, DataType, FinalizeDataAccountArgs, InitializeDataAccountArgs,
    UpdateDataAccountArgs, UpdateDataAccountAuthorityArgs,
};
use crate::pda;
use crate::state::{DataAccountMetadata, DataAccountState};

pub struct DataProgramClient {
    pub program_id: Pubkey,
    pub rpc: Option<RpcClient>,
    pub debug: bool,
    pub chunk_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializeParams {
    pub data_type: DataType,
    pub authority: Pubkey,
    pub space: u64,
    pub is_dynamic: bool,
    /// Emit a system `create_account` ahead of the initialize instruction.
    pub is_created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteParams {
    pub data_type: DataType,
    pub data: Vec<u8>,
    pub offset: u64,
    pub realloc_down: bool,
    /// Hash recorded in metadata. Defaults to the SHA-256 of `data`.
    pub hash: Option<[u8; 32]>,
}

impl DataProgramClient {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id, rpc: None, debug: false, chunk_size: MAX_CHUNK_BYTES }
    }

    pub fn with_rpc(program_id: Pubkey, rpc_url: &str) -> Self {
        Self {
            rpc: Some(RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed())),
            ..Self::new(program_id)
        }
    }

    pub fn from_config(cfg: &ClientConfig) -> Result<Self> {
        validate_config(cfg)?;
        Ok(Self {
            program_id: cfg.program_id()?,
            rpc: Some(RpcClient::new_with_commitment(cfg.rpc_url.clone(), cfg.commitment_config()?)),
            debug: cfg.debug,
            chunk_size: cfg.chunk_size,
        })
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 || chunk_size > MAX_CHUNK_BYTES {
            return Err(DataProgramError::invalid_argument(format!(
                "chunk size must be within 1..={MAX_CHUNK_BYTES}"
            )));
        }
        self.chunk_size = chunk_size;
        Ok(self)
    }

    pub fn derive_metadata(&self, data_account: &Pubkey) -> (Pubkey, u8) {
        pda::derive_metadata(&self.program_id, data_account)
    }

    fn instruction(&self, ix: DataProgramInstruction, accounts: Vec<AccountMeta>) -> Result<Instruction> {
        let data = ix.pack()?;
        debug!(instruction = ix.name(), bytes = data.len(), accounts = accounts.len(), "built instruction");
        Ok(Instruction { program_id: self.program_id, accounts, data })
    }

    /// System instruction creating the data account, owned by the program.
    pub fn ix_create_account(&self, payer: Pubkey, data_account: Pubkey, lamports: u64, space: u64) -> Instruction {
        system_instruction::create_account(&payer, &data_account, lamports, space, &self.program_id)
    }

    /// Build instruction to initialize a data account and its metadata.
    pub fn ix_initialize(&self, payer: Pubkey, data_account: Pubkey, params: InitializeParams) -> Result<Instruction> {
        let (metadata, bump) = self.derive_metadata(&data_account);

        let ix = DataProgramInstruction::InitializeDataAccount(InitializeDataAccountArgs {
            debug: self.debug,
            data_type: params.data_type,
            bump,
            is_created: params.is_created,
            space: params.space,
            authority: params.authority.to_bytes(),
            is_dynamic: params.is_dynamic,
        });

        self.instruction(
            ix,
            vec![
                AccountMeta::new(payer, true),
                AccountMeta::new(data_account, true),
                AccountMeta::new(metadata, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
        )
    }

    /// Build instruction writing `params.data` at `params.offset`.
    pub fn ix_update(&self, payer: Pubkey, data_account: Pubkey, params: WriteParams) -> Result<Instruction> {
        let (metadata, _bump) = self.derive_metadata(&data_account);
        let hash = params.hash.unwrap_or_else(|| content_hash(&params.data));

        let ix = DataProgramInstruction::UpdateDataAccount(UpdateDataAccountArgs {
            debug: self.debug,
            hash,
            data: params.data,
            offset: params.offset,
            realloc_down: params.realloc_down,
            data_type: params.data_type,
        });

        self.instruction(
            ix,
            vec![
                AccountMeta::new(payer, true),
                AccountMeta::new(data_account, false),
                AccountMeta::new(metadata, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
        )
    }

    /// Split `bytes` into update instructions of at most `chunk_size` bytes.
    ///
    /// Every chunk carries the hash of the whole payload. Only the last chunk
    /// requests `realloc_down`. An empty payload yields one empty write, which
    /// is how an account is truncated to `offset`.
    pub fn ix_upload_chunks(
        &self,
        payer: Pubkey,
        data_account: Pubkey,
        data_type: DataType,
        bytes: &[u8],
        offset: u64,
        realloc_down: bool,
    ) -> Result<Vec<Instruction>> {
        let hash = content_hash(bytes);

        if bytes.is_empty() {
            let params = WriteParams { data_type, data: Vec::new(), offset, realloc_down, hash: Some(hash) };
            return Ok(vec![self.ix_update(payer, data_account, params)?]);
        }

        let total = bytes.len().div_ceil(self.chunk_size);
        let mut out = Vec::with_capacity(total);
        for (i, chunk) in bytes.chunks(self.chunk_size).enumerate() {
            let chunk_offset = offset
                .checked_add((i * self.chunk_size) as u64)
                .ok_or_else(|| DataProgramError::invalid_argument("write offset overflows u64"))?;
            let params = WriteParams {
                data_type,
                data: chunk.to_vec(),
                offset: chunk_offset,
                realloc_down: realloc_down && i + 1 == total,
                hash: Some(hash),
            };
            out.push(self.ix_update(payer, data_account, params)?);
        }
        Ok(out)
    }

    /// Build instruction handing the data account to `new_authority`.
    ///
    /// Both the current and the new authority must sign.
    pub fn ix_update_authority(
        &self,
        authority: Pubkey,
        data_account: Pubkey,
        new_authority: Pubkey,
    ) -> Result<Instruction> {
        let (metadata, _bump) = self.derive_metadata(&data_account);
        let ix = DataProgramInstruction::UpdateDataAccountAuthority(UpdateDataAccountAuthorityArgs {
            debug: self.debug,
        });
        self.instruction(
            ix,
            vec![
                AccountMeta::new_readonly(authority, true),
                AccountMeta::new_readonly(data_account, false),
                AccountMeta::new(metadata, false),
                AccountMeta::new_readonly(new_authority, true),
            ],
        )
    }

    pub fn ix_finalize(&self, authority: Pubkey, data_account: Pubkey) -> Result<Instruction> {
        let (metadata, _bump) = self.derive_metadata(&data_account);
        let ix = DataProgramInstruction::FinalizeDataAccount(FinalizeDataAccountArgs { debug: self.debug });
        self.instruction(
            ix,
            vec![
                AccountMeta::new_readonly(authority, true),
                AccountMeta::new(data_account, false),
                AccountMeta::new(metadata, false),
            ],
        )
    }

    /// Build instruction closing both accounts; lamports go to `authority`.
    pub fn ix_close(&self, authority: Pubkey, data_account: Pubkey) -> Result<Instruction> {
        let (metadata, _bump) = self.derive_metadata(&data_account);
        let ix = DataProgramInstruction::CloseDataAccount(CloseDataAccountArgs { debug: self.debug });
        self.instruction(
            ix,
            vec![
                AccountMeta::new(authority, true),
                AccountMeta::new(data_account, false),
                AccountMeta::new(metadata, false),
            ],
        )
    }

    fn rpc(&self) -> Result<&RpcClient> {
        self.rpc.as_ref().ok_or(DataProgramError::RpcNotConfigured)
    }

    /// Submit a transaction. Requires the client to be constructed with RPC.
    pub fn send_transaction(&self, payer: &Keypair, extra_signers: &[&Keypair], ixs: &[Instruction]) -> Result<Signature> {
        let rpc = self.rpc()?;
        let mut signers: Vec<&Keypair> = Vec::with_capacity(extra_signers.len() + 1);
        signers.push(payer);
        signers.extend_from_slice(extra_signers);

        let bh = rpc.get_latest_blockhash()?;
        let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), &signers[..], bh);
        let sig = rpc.send_and_confirm_transaction(&tx)?;
        info!(signature = %sig, instructions = ixs.len(), "transaction confirmed");
        Ok(sig)
    }

    pub fn rent_exempt_minimum(&self, space: u64) -> Result<u64> {
        let space = usize::try_from(space).map_err(|_| DataProgramError::invalid_argument("space exceeds usize"))?;
        Ok(self.rpc()?.get_minimum_balance_for_rent_exemption(space)?)
    }

    pub fn get_metadata(&self, data_account: &Pubkey) -> Result<DataAccountMetadata> {
        let rpc = self.rpc()?;
        let (address, _bump) = self.derive_metadata(data_account);
        let account = rpc
            .get_account_with_commitment(&address, rpc.commitment())?
            .value
            .ok_or(DataProgramError::AccountNotFound(address))?;
        decode_metadata(&address, &account.data)
    }

    pub fn get_data(&self, data_account: &Pubkey) -> Result<Vec<u8>> {
        let rpc = self.rpc()?;
        let account = rpc
            .get_account_with_commitment(data_account, rpc.commitment())?
            .value
            .ok_or(DataProgramError::AccountNotFound(*data_account))?;
        Ok(account.data)
    }

    /// Fetch the data account and its metadata in one `getMultipleAccounts` call.
    pub fn get_data_and_metadata(&self, data_account: &Pubkey) -> Result<DataAccountState> {
        let rpc = self.rpc()?;
        let (metadata_address, _bump) = self.derive_metadata(data_account);
        let mut accounts = rpc
            .get_multiple_accounts_with_commitment(&[*data_account, metadata_address], rpc.commitment())?
            .value
            .into_iter();

        let data = accounts
            .next()
            .flatten()
            .ok_or(DataProgramError::AccountNotFound(*data_account))?;
        let meta = accounts
            .next()
            .flatten()
            .ok_or(DataProgramError::AccountNotFound(metadata_address))?;

        Ok(DataAccountState {
            data_account: *data_account,
            metadata_address,
            metadata: decode_metadata(&metadata_address, &meta.data)?,
            data: data.data,
        })
    }

    /// Create (optionally) and initialize a data account in one transaction.
    pub fn create_and_initialize(
        &self,
        payer: &Keypair,
        data_account: &Keypair,
        params: InitializeParams,
    ) -> Result<Signature> {
        let mut ixs = Vec::with_capacity(2);
        if params.is_created {
            let lamports = self.rent_exempt_minimum(params.space)?;
            ixs.push(self.ix_create_account(payer.pubkey(), data_account.pubkey(), lamports, params.space));
        }
        ixs.push(self.ix_initialize(payer.pubkey(), data_account.pubkey(), params)?);
        self.send_transaction(payer, &[data_account], &ixs)
    }

    /// Write `bytes` in chunks, one transaction per chunk, in offset order.
    ///
    /// `progress` is called after each confirmed chunk with (done, total).
    #[allow(clippy::too_many_arguments)]
    pub fn upload(
        &self,
        payer: &Keypair,
        data_account: &Pubkey,
        data_type: DataType,
        bytes: &[u8],
        offset: u64,
        realloc_down: bool,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<Vec<Signature>> {
        let ixs = self.ix_upload_chunks(payer.pubkey(), *data_account, data_type, bytes, offset, realloc_down)?;
        let total = ixs.len();
        let mut sigs = Vec::with_capacity(total);
        for (i, ix) in ixs.iter().enumerate() {
            sigs.push(self.send_transaction(payer, &[], std::slice::from_ref(ix))?);
            progress(i + 1, total);
        }
        Ok(sigs)
    }

    pub fn update_authority(
        &self,
        authority: &Keypair,
        data_account: &Pubkey,
        new_authority: &Keypair,
    ) -> Result<Signature> {
        let ix = self.ix_update_authority(authority.pubkey(), *data_account, new_authority.pubkey())?;
        self.send_transaction(authority, &[new_authority], &[ix])
    }

    pub fn finalize(&self, authority: &Keypair, data_account: &Pubkey) -> Result<Signature> {
        let ix = self.ix_finalize(authority.pubkey(), *data_account)?;
        self.send_transaction(authority, &[], &[ix])
    }

    pub fn close(&self, authority: &Keypair, data_account: &Pubkey) -> Result<Signature> {
        let ix = self.ix_close(authority.pubkey(), *data_account)?;
        self.send_transaction(authority, &[], &[ix])
    }
}

fn decode_metadata(address: &Pubkey, data: &[u8]) -> Result<DataAccountMetadata> {
    if data.is_empty() {
        return Err(DataProgramError::EmptyAccountData(*address));
    }
    DataAccountMetadata::unpack(data)
}
