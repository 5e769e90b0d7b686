//! topstory CLI
//!
//! Prints the current Hacker News top story, or serves it over HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use topstory_api::{ApiConfig, ApiServer};
use topstory_client::{CachedTopStoryService, ServiceConfig};
use topstory_core::constants::DEFAULT_BASE_URL;

/// topstory - cached Hacker News top story
#[derive(Parser, Debug)]
#[command(name = "topstory")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch and print the current top story
    Top {
        /// Item API base URL
        #[arg(long, env = "HN_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
        /// Print the story as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "topstory=debug,info"
    } else {
        "topstory=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Top { base_url, json } => cmd_top(&base_url, json).await,
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
    }
}

/// Fetch the top story
async fn cmd_top(base_url: &str, json: bool) -> Result<()> {
    let service = CachedTopStoryService::with_config(ServiceConfig::with_base_url(base_url))
        .context("Failed to create top story client")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Fetching top story from {}", base_url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = service.top_story().await;
    spinner.finish_and_clear();

    let story = result.context("Could not retrieve top story")?;
    debug!(title = %story.title, "Fetched");

    if json {
        println!("{}", serde_json::to_string_pretty(&story)?);
    } else {
        println!("{}", "📰 Top story:".green().bold());
        println!("   {} {}", "Title:".yellow(), story.title);
        println!("   {} {}", "Author:".dimmed(), story.author);
    }

    Ok(())
}

/// Run API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    println!("{}", "🚀 Starting topstory API server...".cyan().bold());
    println!("   {} http://{}:{}", "Listening on:".green(), bind, port);
    println!("   {} http://{}:{}/api/v1/top-story", "Top story:".dimmed(), bind, port);
    println!("   {} http://{}:{}/health", "Health check:".dimmed(), bind, port);
    println!("\n   Press Ctrl+C to stop.\n");

    let config = ApiConfig::from_env();
    let server = ApiServer::new(config).context("Failed to configure API server")?;

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    server.run(addr).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_top_defaults() {
        let cli = Cli::try_parse_from(["topstory", "top"]).unwrap();
        match cli.command {
            Commands::Top { json, .. } => assert!(!json),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_top_with_base_url() {
        let cli = Cli::try_parse_from([
            "topstory",
            "-v",
            "top",
            "--base-url",
            "http://localhost:8080",
            "--json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Top { base_url, json } => {
                assert_eq!(base_url, "http://localhost:8080");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["topstory", "serve", "--port", "8081"]).unwrap();
        match cli.command {
            Commands::Serve { port, bind } => {
                assert_eq!(port, 8081);
                assert_eq!(bind, "0.0.0.0");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
