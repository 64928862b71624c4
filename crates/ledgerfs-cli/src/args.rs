use clap::{Parser, Subcommand};
use ledgerfs_client::DataType;

#[derive(Parser, Debug, Clone)]
#[command(name = "ledgerfs", version, about = "ledgerfs data program CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// JSON client config file (rpc_url, program_id, commitment, debug, chunk_size).
    #[arg(long, global = true, env = "LEDGERFS_CONFIG")]
    pub config: Option<String>,

    /// RPC endpoint; overrides the config file.
    #[arg(long, global = true, env = "LEDGERFS_RPC_URL")]
    pub url: Option<String>,

    /// Data program id; overrides the config file.
    #[arg(long, global = true, env = "LEDGERFS_PROGRAM_ID")]
    pub program_id: Option<String>,

    /// Fee payer / authority keypair (default: ~/.config/solana/id.json).
    #[arg(long, global = true, env = "LEDGERFS_KEYPAIR")]
    pub keypair: Option<String>,

    /// Set the debug flag on submitted instructions.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print the planned instructions instead of sending them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the metadata PDA of a data account.
    Pda { data_account: String },

    /// Create and initialize a new data account.
    Create {
        /// file|directory
        #[arg(long = "type", default_value = "file", value_parser = parse_data_type)]
        data_type: DataType,

        /// Bytes to allocate up front.
        #[arg(long, default_value_t = 0)]
        space: u64,

        /// Let the program grow the account on writes.
        #[arg(long)]
        dynamic: bool,

        /// Authority pubkey (default: the payer).
        #[arg(long)]
        authority: Option<String>,

        /// Create the account with a system instruction before initializing.
        #[arg(long)]
        precreate: bool,

        /// Keypair file for the data account (default: freshly generated).
        #[arg(long)]
        data_keypair: Option<String>,
    },

    /// Write a file (or `-` for stdin) into a data account.
    Upload {
        data_account: String,
        file: String,

        #[arg(long = "type", default_value = "file", value_parser = parse_data_type)]
        data_type: DataType,

        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Shrink the account to the end of this write.
        #[arg(long)]
        realloc_down: bool,

        /// Payload bytes per transaction.
        #[arg(long)]
        chunk_size: Option<usize>,
    },

    /// Fetch a data account and its metadata.
    Show {
        data_account: String,

        /// Write the account data to this path.
        #[arg(long)]
        out: Option<String>,
    },

    /// Hand a data account to a new authority (both must sign).
    SetAuthority {
        data_account: String,

        /// Keypair file of the new authority.
        #[arg(long)]
        new_authority: String,
    },

    /// Lock a data account against further writes.
    Finalize { data_account: String },

    /// Close a data account and its metadata, reclaiming lamports.
    Close { data_account: String },

    /// Decode a hex instruction payload.
    Decode { hex: String },

    /// Run environment checks.
    Doctor,
}

fn parse_data_type(s: &str) -> Result<DataType, String> {
    s.parse::<DataType>().map_err(|e| e.to_string())
}
