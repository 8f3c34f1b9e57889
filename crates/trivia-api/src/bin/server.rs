//! Trivia API server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the JSON API over HTTP.
//!
//! # Seeding
//!
//! A fresh store has no categories and no endpoint creates them. To load the
//! default category set into an empty store:
//!
//! ```
//! cargo run -p trivia-api --bin server -- --seed
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use trivia_api::{AppState, ServerConfig};
use trivia_core::{quiz::OsPicker, store::TriviaStore as _};
use trivia_store_sqlite::SqliteStore;

/// Display labels inserted by `--seed`, matching the classic trivia frontend.
const SEED_CATEGORIES: [&str; 6] =
  ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

#[derive(Parser)]
#[command(author, version, about = "Trivia API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Insert the default categories into an empty store and exit.
  #[arg(long)]
  seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("TRIVIA"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  // Helper mode: seed the default categories and exit.
  if cli.seed {
    return seed_categories(&store).await;
  }

  // Build application state.
  let state = AppState {
    store:  Arc::new(store),
    picker: Arc::new(OsPicker),
  };

  let app = trivia_api::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Populate an empty store with the default category set.
async fn seed_categories(store: &SqliteStore) -> anyhow::Result<()> {
  if !store.list_categories().await?.is_empty() {
    anyhow::bail!("store already has categories; refusing to seed");
  }
  for label in SEED_CATEGORIES {
    store.add_category(label).await?;
  }
  tracing::info!("seeded {} categories", SEED_CATEGORIES.len());
  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
