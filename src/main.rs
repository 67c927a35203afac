use anyhow::Result;
use arxiv_mcp::arxiv::ArxivSource;
use arxiv_mcp::config::{find_config_file, load_config, Config};
use arxiv_mcp::mcp::McpServer;
use arxiv_mcp::models::SearchRequest;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arXiv MCP - search recent arXiv papers from MCP clients or the terminal
#[derive(Parser, Debug)]
#[command(name = "arxiv-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server exposing an arXiv category search tool", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the MCP server (stdio unless --http is given)
    Serve {
        /// Serve over HTTP/SSE on the given address instead of stdio
        #[arg(long)]
        http: Option<String>,
    },

    /// Search a category directly and print the digest
    #[command(alias = "s")]
    Search {
        /// arXiv category (e.g., cs.AI)
        category: String,

        /// Maximum number of results (1-100, default 5)
        #[arg(long, short)]
        max_results: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity. Logs go to stderr so the
    // stdio transport keeps stdout for JSON-RPC frames.
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("arxiv_mcp={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        Config::default()
    };

    let source = Arc::new(ArxivSource::from_config(&config.arxiv)?);

    match cli.command {
        Some(Commands::Search {
            category,
            max_results,
        }) => {
            let request = SearchRequest::new(category, max_results)?;
            println!("{}", source.search_digest(&request).await);
        }
        Some(Commands::Serve { http: Some(addr) }) => {
            let server = McpServer::new(source)?;
            let (bound_addr, handle) = server.run_http(&addr).await?;
            tracing::info!("MCP server listening on {}", bound_addr);
            handle
                .await
                .map_err(|e| anyhow::anyhow!("Server task failed: {}", e))?;
        }
        Some(Commands::Serve { http: None }) | None => {
            let server = McpServer::new(source)?;
            server.run().await?;
        }
    }

    Ok(())
}
