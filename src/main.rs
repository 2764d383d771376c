//! Acctweb main entry point

use acctweb_api::start_server;
use acctweb_client::HttpBackend;
use acctweb_config::Config;
use acctweb_core::StaticSession;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "acctweb")]
#[command(author = "Acctweb Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web interface for accounts and transactions", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match Config::load(args.config.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            for suggestion in e.suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            return Err(e).with_context(|| {
                format!("Failed to load configuration from {}", args.config.display())
            });
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
    log::info!(
        "Config loaded from {}: backend={}, user={}",
        args.config.display(),
        config.backend.base_url,
        config.session.user_id
    );

    let backend = Arc::new(HttpBackend::new(config.backend.base_url.clone()));
    let session = Arc::new(StaticSession::new(config.session.user_id));

    let rt = Runtime::new().context("Failed to start the tokio runtime")?;
    rt.block_on(start_server(config, backend, session))
        .context("Server error")
}
