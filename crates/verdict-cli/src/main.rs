//! Verdict CLI entrypoint.

use clap::Parser;
use mimalloc::MiMalloc;

use verdict_cli::Verdict;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Verdict::parse();
    verdict_cli::run(cli).await
}
