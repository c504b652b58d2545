// Copyright 2026 Catalog Scraper Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use catalog_scraper::cli;
use catalog_scraper::config::ConfigOverrides;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-scraper",
    about = "Catalog scraper — bulk-export product cards from e-commerce collection pages to CSV",
    version,
    after_help = "Run 'catalog-scraper' with no command to start the server."
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        #[command(flatten)]
        settings: Settings,
    },
    /// Scrape URLs once and write the CSV to a file or stdout
    Scrape {
        /// Catalog page URLs, processed in order
        #[arg(required = true)]
        urls: Vec<String>,
        /// Output file (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Request timeout per page in milliseconds
        #[arg(long)]
        fetch_timeout_ms: Option<u64>,
        /// User-Agent header sent to catalog sites
        #[arg(long)]
        user_agent: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

/// Server settings; unset flags fall back to the environment.
#[derive(Args, Default)]
struct Settings {
    /// Listen host [env: SCRAPER_HOST, default 127.0.0.1]
    #[arg(long)]
    host: Option<String>,
    /// Listen port [env: PORT, default 3000]
    #[arg(long, short)]
    port: Option<u16>,
    /// Directory for transient CSV files [env: SCRAPER_ARTIFACT_DIR]
    #[arg(long)]
    artifact_dir: Option<PathBuf>,
    /// Request timeout per page in milliseconds [env: SCRAPER_FETCH_TIMEOUT_MS]
    #[arg(long)]
    fetch_timeout_ms: Option<u64>,
    /// User-Agent header sent to catalog sites [env: SCRAPER_USER_AGENT]
    #[arg(long)]
    user_agent: Option<String>,
}

impl From<Settings> for ConfigOverrides {
    fn from(s: Settings) -> Self {
        ConfigOverrides {
            host: s.host,
            port: s.port,
            artifact_dir: s.artifact_dir,
            fetch_timeout_ms: s.fetch_timeout_ms,
            user_agent: s.user_agent,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !matches!(cli.command, Some(Commands::Completions { .. })) {
        cli::init_tracing(&cli.log_level, cli.log_json);
    }

    let result = match cli.command {
        None => cli::serve::run(ConfigOverrides::default()).await,
        Some(Commands::Serve { settings }) => cli::serve::run(settings.into()).await,
        Some(Commands::Scrape {
            urls,
            output,
            fetch_timeout_ms,
            user_agent,
        }) => {
            let overrides = ConfigOverrides {
                fetch_timeout_ms,
                user_agent,
                ..Default::default()
            };
            cli::scrape_cmd::run(&urls, output.as_deref(), overrides).await
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "catalog-scraper", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("  Error: {e:#}");
        std::process::exit(1);
    }

    result
}
