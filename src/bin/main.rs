//! wallet-api CLI
//!
//!   wallet-api serve                        → Start HTTP server
//!   wallet-api wallets [--address] [--chain-id]
//!   wallet-api transactions <address> [--chain-id] [--limit]
//!   wallet-api check <address>              → {"address", "valid"}
//!
//! Offline commands print the same envelopes the HTTP endpoints return.
//! Configuration comes from `WALLET_API_*` variables (a `.env` file is read
//! first when present); flags override them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

use wallet_api::logging::init_logging;
use wallet_api::server::Envelope;
use wallet_api::{create_router_with_name, is_valid_address, shutdown_signal, ServerConfig, WalletQueries};

#[derive(Parser)]
#[command(name = "wallet-api")]
#[command(version, about = "Read-only wallet and transaction views")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset JSON file (env: WALLET_API_DATA)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Pretty-print JSON output (default when stdout is a terminal)
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind host (env: WALLET_API_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (env: WALLET_API_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Service name reported by /health (env: WALLET_API_APP)
        #[arg(short, long)]
        app: Option<String>,
    },

    /// List wallets
    Wallets {
        #[arg(long)]
        address: Option<String>,

        #[arg(long = "chain-id")]
        chain_id: Option<String>,
    },

    /// List transactions involving a wallet
    Transactions {
        address: String,

        #[arg(long = "chain-id")]
        chain_id: Option<String>,

        /// Maximum results (capped at 100)
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Check the shape of an address
    Check { address: String },
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let pretty = cli.pretty || std::io::stdout().is_terminal();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(pretty, json!({"success": false, "error": format!("{:#}", e)})),
    };
    init_logging(config.log_format);
    debug!(log_format = config.log_format.as_str(), data = ?config.data_path, "config loaded");

    let result = match cli.command {
        Commands::Serve { .. } => cmd_serve(&config),
        Commands::Wallets { address, chain_id } => cmd_wallets(&config, address.as_deref(), chain_id.as_deref()),
        Commands::Transactions { address, chain_id, limit } => {
            cmd_transactions(&config, &address, chain_id.as_deref(), limit.as_deref())
        }
        Commands::Check { address } => {
            let valid = is_valid_address(&address);
            Ok(Envelope::Success(json!({"address": address, "valid": valid})))
        }
    };

    match result {
        Ok(Envelope::Success(output)) => println!("{}", render(&output, pretty)),
        Ok(Envelope::Rejected(output)) => fail(pretty, output),
        Err(e) => fail(pretty, json!({"success": false, "error": format!("{:#}", e)})),
    }
}

fn load_config(cli: &Cli) -> Result<ServerConfig> {
    let mut config = ServerConfig::from_env()?;
    if let Some(data) = &cli.data {
        config = config.with_data(data);
    }
    if let Commands::Serve { host, port, app } = &cli.command {
        if let Some(host) = host {
            config = config.with_host(host);
        }
        if let Some(port) = port {
            config = config.with_port(*port);
        }
        if let Some(app) = app {
            config.app = app.clone();
        }
    }
    Ok(config)
}

fn open_queries(config: &ServerConfig) -> Result<WalletQueries> {
    let store = config.open_store().context("Failed to open store")?;
    info!(wallets = store.wallet_count(), transactions = store.transaction_count(), "store ready");
    Ok(WalletQueries::from_store(store))
}

fn cmd_serve(config: &ServerConfig) -> Result<Envelope> {
    let queries = open_queries(config)?;
    let rt = tokio::runtime::Runtime::new().context("Failed to create runtime")?;

    rt.block_on(async {
        let router = create_router_with_name(queries, &config.app);
        let addr = config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("{} listening on http://{}", config.app, addr);
        info!("Endpoints:");
        info!("  GET  /health                                  - Health check");
        info!("  GET  /api/wallets?address=&chainId=           - List wallets");
        info!("  GET  /api/wallets/:address/transactions       - List transactions (chainId, limit)");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;
        info!("Server stopped");
        Ok::<(), anyhow::Error>(())
    })?;

    Ok(Envelope::Success(json!({"status": "stopped"})))
}

fn cmd_wallets(config: &ServerConfig, address: Option<&str>, chain_id: Option<&str>) -> Result<Envelope> {
    let queries = open_queries(config)?;
    Ok(Envelope::from_result(queries.list_wallets(address, chain_id))?)
}

fn cmd_transactions(config: &ServerConfig, address: &str, chain_id: Option<&str>, limit: Option<&str>) -> Result<Envelope> {
    let queries = open_queries(config)?;
    Ok(Envelope::from_result(queries.list_transactions_by_wallet(address, chain_id, limit))?)
}

fn render(value: &Value, pretty: bool) -> String {
    let rendered = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    rendered.unwrap_or_else(|_| value.to_string())
}

fn fail(pretty: bool, output: Value) -> ! {
    eprintln!("{}", render(&output, pretty));
    std::process::exit(1);
}
