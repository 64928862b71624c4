use serde::Serialize;
use solana_sdk::instruction::Instruction;

/// Offline description of the instructions a command would send.
#[derive(Debug, Clone, Serialize)]
pub struct TxPlan {
    pub instructions: Vec<PlannedIx>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedIx {
    pub program_id: String,
    pub accounts: Vec<PlannedAccount>,
    pub data_hex: String,
    pub data_len: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedAccount {
    pub pubkey: String,
    pub signer: bool,
    pub writable: bool,
}

impl TxPlan {
    pub fn from_instructions(ixs: &[Instruction]) -> Self {
        let instructions = ixs
            .iter()
            .map(|ix| PlannedIx {
                program_id: ix.program_id.to_string(),
                accounts: ix
                    .accounts
                    .iter()
                    .map(|a| PlannedAccount { pubkey: a.pubkey.to_string(), signer: a.is_signer, writable: a.is_writable })
                    .collect(),
                data_hex: hex::encode(&ix.data),
                data_len: ix.data.len(),
            })
            .collect();
        Self { instructions }
    }

    pub fn describe(&self) -> String {
        if self.instructions.is_empty() {
            "no instructions".to_string()
        } else {
            format!("{} instruction(s)", self.instructions.len())
        }
    }
}
