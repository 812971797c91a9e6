//! Hosting Server Binary
//!
//! Serves rock paper scissors sessions over HTTP.

use roshambo::config::Config;
use roshambo::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    log();
    kys();
    hosting::Server::run(config).await
}
