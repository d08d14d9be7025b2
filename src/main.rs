// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use string_analyzer::config::{load_and_validate_config, Config};
use string_analyzer::observability::init_tracing;
use string_analyzer::server::Server;
use string_analyzer::storage::StoreFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [config.yaml]", args[0]);
        eprintln!("Example: {} configs/local.yaml", args[0]);
        eprintln!("Without a config file the server listens on 0.0.0.0:3000 with an in-memory store.");
        std::process::exit(1);
    }

    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load configuration from '{}'", path))?,
        None => Config::default().resolve()?,
    };

    init_tracing(&config.logging.filter);

    let store = StoreFactory::create_store(&config.storage)
        .await
        .context("Failed to open string store")?;

    let addr = config
        .server
        .socket_addr()
        .with_context(|| format!("Invalid server address '{}:{}'", config.server.host, config.server.port))?;

    let server = Server::start(addr, store).await?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    server.shutdown("ctrl-c");
    server.wait().await?;

    Ok(())
}
