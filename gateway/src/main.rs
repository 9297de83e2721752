#![cfg_attr(test, allow(unused_crate_dependencies))]

use clap::crate_version;
use mimalloc::MiMalloc;
use tokio::runtime;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod args;
mod config;
mod error;
mod server;

pub(crate) use error::{Error, Result};

const THREAD_NAME: &str = "speedrun-gateway";

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();
    args.init_logging()?;

    let config = config::Config::load(&args.config)?.apply_args(&args);

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        let crate_version = crate_version!();
        tracing::info!("Speedrun Gateway {crate_version}");

        server::serve(config).await?;

        Ok::<(), anyhow::Error>(())
    })?;

    Ok(())
}
