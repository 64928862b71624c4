//! ledgerfs-client
//!
//! A small, focused Rust client for the ledgerfs data program: an on-chain
//! key-value store of "file" and "directory" data accounts, each paired with a
//! program-owned metadata account.
//!
//! It includes:
//! - PDA derivation for metadata accounts
//! - the fixed binary instruction layout and metadata decoding
//! - a client that builds instructions, chunks uploads and submits transactions
//!
//! The client performs no state transitions of its own. Lifecycle rules
//! (authority checks, finalization, reallocation) are enforced by the program
//! and only observed here after the fact.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod hash;
pub mod instruction;
pub mod pda;
pub mod state;

pub use client::*;
pub use config::{validate_config, ClientConfig};
pub use constants::*;
pub use error::{DataProgramError, Result};
pub use hash::content_hash;
pub use instruction::*;
pub use pda::*;
pub use state::*;
