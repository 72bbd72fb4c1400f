//! # Grocery Storefront Library
//!
//! The storefront application: configuration, the one catalog fetch, and
//! the commands the presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! grocery_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Line-oriented command driver
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Layered configuration
//! │   ├── catalog.rs  ◄─── Loaded products + failure flag
//! │   └── cart.rs     ◄─── Shopping session
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Browse / lookup / stock
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── checkout.rs ◄─── Checkout summary and offers
//! └── error.rs        ◄─── API and config error types
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use error::ConfigResult;
use shell::{run_shell, Storefront};
use state::ConfigState;

/// Command line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "grocery-storefront", about = "Grocery storefront shell", long_about = None)]
pub struct Cli {
    /// Config file (default: storefront.toml in the platform config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog endpoint; replaces any configured catalog file
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Catalog JSON file; wins over any URL
    #[arg(long)]
    pub catalog_file: Option<PathBuf>,
}

impl Cli {
    /// Applies flag overrides on top of file and environment settings.
    pub fn apply_overrides(&self, config: &mut ConfigState) {
        if let Some(ref url) = self.catalog_url {
            config.catalog.url = Some(url.clone());
            config.catalog.file = None;
        }

        if let Some(ref file) = self.catalog_file {
            config.catalog.file = Some(file.clone());
        }
    }
}

/// Builds the final configuration: defaults → file → env → flags, then
/// validation.
pub fn load_config(cli: &Cli) -> ConfigResult<ConfigState> {
    let mut config = ConfigState::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, stderr                        │
/// │     • Default: info,grocery=debug,reqwest=warn; RUST_LOG overrides      │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → GROCERY_* env → flags               │
/// │                                                                         │
/// │  3. Fetch Catalog (once) ─────────────────────────────────────────────► │
/// │     • failure → empty catalog + "Failed to load products"              │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • stdin commands → JSON on stdout                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    info!("Starting Grocery Storefront");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut storefront = Storefront::start(config).await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    match run_shell(&mut storefront, stdin, tokio::io::stdout()).await {
        Ok(()) => {
            info!(session = %storefront.cart.session_id(), "Storefront closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Shell I/O failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grocery=trace` - Show trace for grocery crates only
/// - Default: INFO, DEBUG for grocery crates
///
/// Logs go to stderr so stdout stays a clean response stream.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_subscriber(filter).init();
}

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,grocery=debug,reqwest=warn";

fn log_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}
