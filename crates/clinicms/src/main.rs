//! clinicms - content backend for the clinic marketing site.
//!
//! This is the main entry point for the clinicms CLI.

use clap::{Parser, Subcommand};
use clinicms_server::{create_router, AppState};
use clinicms_store::ContentStore;
use clinicms_util::log::{LogConfig, LogLevel};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "clinicms")]
#[command(author, version, about = "Content backend for the clinic marketing site", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Data directory for the JSON documents (overrides CLINICMS_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        address: SocketAddr,
    },
    /// Write the default documents to the data directory
    Seed {
        /// Overwrite documents that already exist
        #[arg(long)]
        force: bool,
    },
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    clinicms_util::log::init(LogConfig {
        level,
        include_location: cli.verbose,
    });

    let data_dir = cli
        .data_dir
        .unwrap_or_else(clinicms_util::path::data_dir);
    let store = ContentStore::new(data_dir);

    match cli.command {
        Some(Commands::Serve { address }) => serve(store, address).await,
        Some(Commands::Seed { force }) => seed(store, force).await,
        Some(Commands::Version) => {
            println!("clinicms {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => serve(store, SocketAddr::from(([127, 0, 0, 1], 3000))).await,
    }
}

async fn serve(store: ContentStore, address: SocketAddr) -> anyhow::Result<()> {
    store.ensure_data_dir().await?;
    info!(data_dir = %store.data_dir().display(), "using data directory");

    let app = create_router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(%address, "clinicms listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Write the default documents to disk so editors start from real files
/// instead of the in-memory fallbacks.
async fn seed(store: ContentStore, force: bool) -> anyhow::Result<()> {
    store.ensure_data_dir().await?;

    let data_dir = store.data_dir().to_path_buf();
    let exists = |file: &str| data_dir.join(file).exists();

    if force || !exists(clinicms_store::PAGES_FILE) {
        store
            .save_pages(&clinicms_content::defaults::default_pages())
            .await?;
        info!("seeded {}", clinicms_store::PAGES_FILE);
    }
    if force || !exists(clinicms_store::SETTINGS_FILE) {
        store
            .save_settings(&clinicms_content::SiteSettings::default())
            .await?;
        info!("seeded {}", clinicms_store::SETTINGS_FILE);
    }
    if force || !exists(clinicms_store::REVIEWS_FILE) {
        store.save_reviews(&[]).await?;
        info!("seeded {}", clinicms_store::REVIEWS_FILE);
    }

    Ok(())
}
