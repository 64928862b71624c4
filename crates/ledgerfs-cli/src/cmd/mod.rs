use anyhow::Result;

use crate::args::{Cli, Command};

mod authority;
mod close;
mod create;
mod decode;
mod doctor;
mod finalize;
mod pda;
mod show;
mod upload;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Pda { data_account } => pda::run(&cli, data_account).await,
        Command::Create { data_type, space, dynamic, authority, precreate, data_keypair } => {
            let opts = create::CreateOpts {
                data_type: *data_type,
                space: *space,
                dynamic: *dynamic,
                authority: authority.as_deref(),
                precreate: *precreate,
                data_keypair: data_keypair.as_deref(),
            };
            create::run(&cli, opts).await
        }
        Command::Upload { data_account, file, data_type, offset, realloc_down, chunk_size } => {
            let opts = upload::UploadOpts {
                data_type: *data_type,
                offset: *offset,
                realloc_down: *realloc_down,
                chunk_size: *chunk_size,
            };
            upload::run(&cli, data_account, file, opts).await
        }
        Command::Show { data_account, out } => show::run(&cli, data_account, out.as_deref()).await,
        Command::SetAuthority { data_account, new_authority } => {
            authority::run(&cli, data_account, new_authority).await
        }
        Command::Finalize { data_account } => finalize::run(&cli, data_account).await,
        Command::Close { data_account } => close::run(&cli, data_account).await,
        Command::Decode { hex } => decode::run(hex).await,
        Command::Doctor => doctor::run(&cli).await,
    }
}
