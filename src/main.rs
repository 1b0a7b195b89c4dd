//! txledger main entry point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use txledger_api::start_server;
use txledger_config::{Config, ConfigError};
use txledger_core::TransactionStore;

#[derive(Parser, Debug)]
#[command(name = "txledger")]
#[command(version)]
#[command(about = "A minimal in-memory transaction ledger over HTTP", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override server.host from the config file
    #[arg(long)]
    host: Option<String>,

    /// Override server.port from the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let mut config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound { path }) => {
            eprintln!("[WARN] Config file not found: {}, using defaults", path);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = load_config(&args).map_err(|e| {
        eprintln!("{}", e.to_details());
        e
    })?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
    log::info!("Config loaded: bind address={}", config.bind_address());

    let store = Arc::new(TransactionStore::new());

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, store))?;

    Ok(())
}
