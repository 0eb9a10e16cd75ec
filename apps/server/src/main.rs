use anyhow::Context;
use ghub::kernel::config::load_config;
use ghub_logger::Logger;
use ghub_server::Server;

#[ghub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("server")).context("Configuration is missing or malformed")?;
    let server = Server::builder().config(cfg).build().await?;

    server.run().await
}
