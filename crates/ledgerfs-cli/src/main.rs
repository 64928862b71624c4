use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod cmd;
mod io;
mod output;
mod solana;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = args::Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerfs=info,ledgerfs_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    output::init(cli.json);

    cmd::dispatch(cli).await
}
