//! Serves the demo API.
//!
//! Run with:
//!   SIEVE_LOG=sieve=debug cargo run
//!
//! Try:
//!   curl 'http://localhost:8000/items?skip=2&limit=2'
//!   curl 'http://localhost:8000/list?item-query=aaa&item-query=bbb'
//!   curl -X PUT 'http://localhost:8000/item2/1' \
//!        -H 'content-type: application/json' \
//!        -d '{"item":{"name":"foo","price":3.5}}'

use clap::Parser;
use sieve::config::Config;
use sieve::{Error, Server, items};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log))
        .init();

    info!(?config, "starting");

    Server::bind(config.addr).serve(items::router()).await
}
