//! CLI administration tool for aliaslink.
//!
//! Provides commands for managing stored URLs and checking backends
//! without requiring HTTP API access. URL commands go through the same
//! storage orchestrator as the server, so the cache stays consistent.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a generated alias
//! cargo run --bin admin -- url save https://example.com
//!
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- url save https://example.com --alias docs
//!
//! # Resolve an alias
//! cargo run --bin admin -- url get docs
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete docs
//!
//! # Check backends
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- cache check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` (required): PostgreSQL connection
//! - `REDIS_URL` or `REDIS_*` and `CACHE_*` (optional): cache settings
//!
//! With `CACHE_BACKEND=memory` the cache lives inside the server process, so
//! this tool can neither check it nor invalidate its entries. URL commands then
//! run against the database only.

use aliaslink::application::services::{ShortenService, UrlStorage};
use aliaslink::config::{CacheConfig, Config};
use aliaslink::domain::errors::StorageError;
use aliaslink::domain::repositories::UrlRepository;
use aliaslink::infrastructure::cache::CacheService;
use aliaslink::infrastructure::persistence::PgUrlRepository;
use aliaslink::server::connect_cache;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing aliaslink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage stored URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Cache operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// URL management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a URL
    Save {
        /// URL to store
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Resolve an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

/// Cache operation subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Check cache connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Url { action } => {
            let pool = connect_db().await?;
            let cache_config = CacheConfig::from_env()?;
            let cache = load_cache(&cache_config).await;
            let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
            let storage = Arc::new(UrlStorage::new(repository, cache));
            handle_url_action(action, storage, &cache_config).await?
        }
        Commands::Db { action } => handle_db_action(action).await?,
        Commands::Cache { action } => handle_cache_action(action).await?,
    }

    Ok(())
}

async fn connect_db() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Connects to the server's cache. Returns `None` for a process-local backend,
/// which a separate process cannot reach.
async fn load_cache(cache: &CacheConfig) -> Option<Arc<dyn CacheService>> {
    if cache.enabled && !cache.backend.is_shared() {
        return None;
    }

    let redis_url = Config::load_redis_url();
    connect_cache(cache, redis_url.as_deref()).await
}

fn print_process_local_notice() {
    println!(
        "{}",
        "⚠️  Memory cache is process-local to the server: it cannot be checked or invalidated from here"
            .yellow()
    );
}

/// Dispatches URL management commands.
async fn handle_url_action(
    action: UrlAction,
    storage: Arc<UrlStorage>,
    cache: &CacheConfig,
) -> Result<()> {
    match action {
        UrlAction::Save { url, alias } => save_url(storage, url, alias).await,
        UrlAction::Get { alias } => get_url(storage, alias).await,
        UrlAction::Delete { alias, yes } => {
            delete_url(storage, alias, yes).await?;
            if cache.enabled && !cache.backend.is_shared() {
                println!(
                    "{}",
                    format!(
                        "⚠️  The server may keep serving this alias from its memory cache for up to {}s",
                        cache.ttl_seconds
                    )
                    .yellow()
                );
            }
            Ok(())
        }
    }
}

/// Stores a URL through the same retry path as `POST /api/url`.
async fn save_url(storage: Arc<UrlStorage>, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "🔗 Save URL".bright_blue().bold());
    println!();

    let service = ShortenService::new(storage);

    let alias = match service.shorten(&url, alias.as_deref()).await {
        Ok(alias) => alias,
        Err(StorageError::AliasExists) => {
            println!("{}", "❌ Alias already exists".red());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to save URL: {}", e)),
    };

    println!("{}", "✅ URL saved successfully!".green().bold());
    println!();
    println!("  Alias: {}", alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());
    println!();

    Ok(())
}

/// Resolves an alias, cache first.
async fn get_url(storage: Arc<UrlStorage>, alias: String) -> Result<()> {
    match storage.get_url(&alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
        }
        Err(StorageError::UrlNotFound) => {
            println!("{}", format!("⚠️  Alias '{}' not found", alias).yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to resolve alias: {}", e)),
    }

    Ok(())
}

/// Deletes an alias with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is passed
async fn delete_url(storage: Arc<UrlStorage>, alias: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete URL".bright_blue().bold());
    println!();
    println!("  Alias: {}", alias.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match storage.delete_url(&alias).await {
        Ok(url) => {
            println!("{}", "✅ URL deleted successfully!".green().bold());
            println!("  Was: {}", url.bright_black());
        }
        Err(StorageError::UrlNotFound) => {
            println!("{}", format!("⚠️  Alias '{}' not found", alias).yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to delete alias: {}", e)),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let pool = connect_db().await?;
            let repository = PgUrlRepository::new(Arc::new(pool));

            repository
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;
            let count = repository
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Stored URLs: {}",
                count.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}

/// Handles cache diagnostic commands.
async fn handle_cache_action(action: CacheAction) -> Result<()> {
    match action {
        CacheAction::Check => {
            println!("{}", "🔍 Checking cache...".bright_blue());

            let config = CacheConfig::from_env()?;
            if config.enabled && !config.backend.is_shared() {
                print_process_local_notice();
                return Ok(());
            }

            let Some(cache) = load_cache(&config).await else {
                println!("{}", "⚠️  Cache disabled or unreachable".yellow());
                return Ok(());
            };

            if cache.health_check().await {
                println!("{}", "✅ Cache OK".green().bold());
            } else {
                println!("{}", "❌ Cache ping failed".red().bold());
            }
        }
    }

    Ok(())
}
