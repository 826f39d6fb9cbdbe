//! # Bistro Storefront
//!
//! The layer the mobile screens call into. Each command validates its input,
//! awaits the store, applies the result to the in-memory context and tells
//! the router where to go next.
//!
//! ## Module Organization
//! ```text
//! bistro_storefront/
//! ├── lib.rs          ◄─── You are here (startup, tracing, db path)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── DataStore handle + repositories
//! │   └── config.rs   ◄─── Store configuration
//! ├── commands/       ◄─── One module per screen flow
//! ├── navigation.rs   ◄─── Route, Router, RecordingRouter
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()            RUST_LOG or "info,bistro=debug,sqlx=warn"│
//! │  2. StoreConfig::from_env()   BISTRO_* overrides                        │
//! │  3. Storefront::open(config)                                            │
//! │       • database_path()       BISTRO_DB_PATH or platform data dir      │
//! │       • Database::new()       WAL, migrations                           │
//! │       • ContextProvider::new() empty cart, no saved items, anonymous   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod navigation;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bistro_core::ContextProvider;
use bistro_db::{Database, DbConfig};

use error::ApiError;
use state::{StoreConfig, StoreState};

/// Everything a running storefront holds.
///
/// Commands borrow the pieces separately, e.g.
/// `commands::cart::get_cart(&storefront.context)`.
#[derive(Debug)]
pub struct Storefront {
    pub store: StoreState,
    pub context: ContextProvider,
    pub config: StoreConfig,
}

impl Storefront {
    /// Wraps an existing store with a fresh context.
    pub fn new(store: StoreState, config: StoreConfig) -> Self {
        Storefront {
            store,
            context: ContextProvider::new(),
            config,
        }
    }

    /// Connects to the SQLite store and applies migrations.
    pub async fn open(config: StoreConfig) -> Result<Self, ApiError> {
        info!(store = %config.store_name, "Starting Bistro storefront");

        let db_path = database_path(&config)?;
        info!(?db_path, "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        info!("Database connected and migrations applied");

        Ok(Storefront::new(StoreState::from(db), config))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bistro=trace` - Show trace for bistro crates only
/// - Default: `info,bistro=debug,sqlx=warn`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bistro=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.bistro.storefront/bistro.db`
/// - **Windows**: `%APPDATA%\bistro\storefront\data\bistro.db`
/// - **Linux**: `~/.local/share/storefront/bistro.db`
///
/// `StoreConfig::database_path` (from `BISTRO_DB_PATH`) wins when set.
pub fn database_path(config: &StoreConfig) -> Result<PathBuf, ApiError> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "bistro", "storefront")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir).map_err(|e| {
        ApiError::internal(format!("Could not create {}: {}", data_dir.display(), e))
    })?;

    Ok(data_dir.join("bistro.db"))
}
