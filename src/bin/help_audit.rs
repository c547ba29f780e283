//! Help Content Audit
//!
//! Headless diagnostics over the bundled help content tree.
//!
//! # Usage
//! ```sh
//! HELP_CONTENT_DIR=content/help cargo run --bin help-audit -- coverage
//! cargo run --bin help-audit -- show zh-CN bubbles --item stone
//! ```
//!
//! # Environment Variables
//! - `HELP_CONTENT_DIR` - Root of the content tree (default: content/help)
//! - `HELP_FALLBACK_LANGUAGE` - Last language of every chain (default: en)
//! - `HELP_SUPPORTED_LANGUAGES` - Languages checked by `coverage`
//! - `HELP_FALLBACK_CHAINS` - Extra chains, e.g. `zh-CN=zh-TW;ko=ja`

use anyhow::{Context, Result};
use bubblepop_help::application::HelpContentLoader;
use bubblepop_help::config::Config;
use bubblepop_help::infrastructure::i18n::all_categories;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "BubblePop help content audit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which categories exist for every supported language
    Coverage {
        /// Comma-separated categories (default: all help categories)
        #[arg(short, long)]
        categories: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve one document through the fallback chain
    Show {
        /// Requested language
        language: String,

        /// Help category
        category: String,

        /// Print a single item of the document
        #[arg(short, long)]
        item: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load help content config")?;
    info!(
        "Help content root: {:?} (fallback: {})",
        config.content_dir, config.fallback_language
    );

    let loader = HelpContentLoader::from_config(&config);

    match cli.command {
        Commands::Coverage { categories, json } => {
            let owned: Vec<String> = match categories {
                Some(list) => list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                None => all_categories().into_iter().map(String::from).collect(),
            };
            let categories: Vec<&str> = owned.iter().map(String::as_str).collect();

            let reports = loader.analyze_coverage(&categories).await;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&reports).context("Failed to serialize report")?
                );
            } else {
                println!("{}", "=".repeat(60));
                println!("HELP CONTENT COVERAGE ({} categories)", categories.len());
                println!("{}", "=".repeat(60));
                for report in &reports {
                    println!(
                        "{:<8} {:>3}/{:<3} {:>6.1}%  missing: {}",
                        report.language,
                        report.available,
                        report.total,
                        report.coverage_pct,
                        if report.missing.is_empty() {
                            "-".to_string()
                        } else {
                            report.missing.join(", ")
                        }
                    );
                }
            }
        }
        Commands::Show {
            language,
            category,
            item,
        } => {
            if let Some(item_id) = item {
                let item = loader.load_item(&language, &category, &item_id).await?;
                println!(
                    "{}",
                    serde_json::to_string_pretty(&item).context("Failed to serialize item")?
                );
            } else {
                let doc = loader.load_content(&language, &category).await?;
                let served_by = loader
                    .load_attempts()
                    .await
                    .last()
                    .map(|a| a.language.clone())
                    .unwrap_or_else(|| language.clone());

                println!("Requested: {}/{}", language, category);
                println!("Served by: {}", served_by);
                println!("Title:     {}", doc.title.as_deref().unwrap_or("(untitled)"));
                println!("Version:   {}", doc.version.as_deref().unwrap_or("-"));
                println!("Items:     {}", doc.item_count());
            }
        }
    }

    Ok(())
}
