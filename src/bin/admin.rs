//! CLI administration tool for qr-shortlink.
//!
//! Provides commands for issuing and inspecting short links and performing
//! database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (returns the existing code if already shortened)
//! cargo run --bin admin -- create https://example.com/some/long/path
//!
//! # Inspect a code without counting a visit
//! cargo run --bin admin -- show aB3dE9
//!
//! # List the most recent links
//! cargo run --bin admin -- list --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same settings as the server and applies the same validation:
//!
//! - `DATABASE_URL` or `DB_*` parts (required): PostgreSQL connection
//! - `BASE_URL` (optional): public origin used to print short URLs
//! - `SHORT_CODE_LENGTH` (optional): generated code length, 4 to 32
//! - `SHORT_CODE_MAX_ATTEMPTS` (optional): generation attempts, 1 to 100

use qr_shortlink::application::services::{ShortLinkCreator, ShortLinkResolver};
use qr_shortlink::config::{self, Config, mask_connection_string};
use qr_shortlink::domain::repositories::LinkRegistry;
use qr_shortlink::infrastructure::persistence::PgLinkRegistry;
use qr_shortlink::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing qr-shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Create {
        /// URL to shorten
        url: String,
    },

    /// Show a short link without counting a visit
    Show {
        /// Short code to look up
        code: String,
    },

    /// List the most recent short links
    List {
        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    let database_url = match config.database_url.clone() {
        Some(url) => url,
        None => Config::load_database_url().context("Failed to load database configuration")?,
    };

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    let registry: Arc<dyn LinkRegistry> = Arc::new(PgLinkRegistry::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Create { url } => create_link(registry, &config, &url).await?,
        Commands::Show { code } => show_link(registry, &code).await?,
        Commands::List { limit } => list_links(registry, limit).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Shortens a URL through the same service the HTTP endpoint uses.
async fn create_link(
    registry: Arc<dyn LinkRegistry>,
    config: &Config,
    url: &str,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let creator = ShortLinkCreator::new(
        registry,
        Arc::new(RandomCodeGenerator::new(config.short_code_length)),
        &config.base_url,
    )
    .with_max_attempts(config.short_code_max_attempts);

    let created = creator
        .create(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short link: {}", e))?;

    if created.existing {
        println!("{}", "ℹ️  URL was already shortened".yellow());
    } else {
        println!("{}", "✅ Short link created".green().bold());
    }

    println!();
    println!("  Code:      {}", created.short_code.bright_yellow().bold());
    println!("  Short URL: {}", created.short_url.cyan());
    println!("  Target:    {}", created.original_url.bright_white());
    println!();

    Ok(())
}

/// Displays a single link with its visit count.
async fn show_link(registry: Arc<dyn LinkRegistry>, code: &str) -> Result<()> {
    let resolver = ShortLinkResolver::new(registry);

    let link = resolver
        .lookup(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "🔎 Short Link".bright_blue().bold());
    println!();
    println!("  ID:      {}", link.id.to_string().bright_black());
    println!("  Code:    {}", link.short_code.bright_yellow().bold());
    println!("  Target:  {}", link.original_url.bright_white());
    println!(
        "  Clicks:  {}",
        link.click_count.to_string().bright_green().bold()
    );
    println!(
        "  Created: {}",
        link.created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Lists recent links, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   Code     Clicks  Created           Target
///   ────────────────────────────────────────────────────────────
///   aB3dE9   12      2026-01-15 10:30  https://example.com/a
/// ```
async fn list_links(registry: Arc<dyn LinkRegistry>, limit: i64) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let links = registry
        .list_recent(limit.max(1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<8} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8} {:<7} {:<17} {}",
            link.short_code.bright_yellow(),
            link.click_count.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url.cyan()
        );
    }

    let total = registry
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!();
    println!(
        "  Showing {} of {}",
        links.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations").run(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
