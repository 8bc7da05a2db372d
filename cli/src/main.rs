//! CLI entrypoint for intent-broker
//!
//! This is the main binary that wires together all layers using
//! dependency injection: load configuration, connect to the MCP server,
//! resolve one intent through the LLM, and optionally dispatch the
//! resolved tool call.

use anyhow::Result;
use clap::Parser;
use intent_application::{ResolveIntentUseCase, ToolInvoker};
use intent_domain::ResolutionResult;
use intent_infrastructure::{ConfigLoader, McpConnection, OpenAiConfig, OpenAiProvider};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "intent-broker", version, about = "Resolve a natural-language intent into an MCP tool call")]
struct Cli {
    /// The intent to resolve (e.g. a network-slice QoS request)
    intent: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip config file discovery and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Dispatch the resolved tool call against the MCP server
    #[arg(long)]
    execute: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Configuration and credential failures are operator errors: report
    // them plainly and exit non-zero, no backtrace.
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                std::process::exit(1);
            }
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    }

    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("Set OPENAI_API_KEY in your environment");
            std::process::exit(1);
        }
    };

    info!("Starting intent-broker");

    // === Dependency Injection ===
    let timeout = Duration::from_secs(config.llm.timeout_secs);
    let provider = Arc::new(OpenAiProvider::new(
        OpenAiConfig::new(api_key, &config.llm.model)
            .with_base_url(&config.llm.base_url)
            .with_timeout(timeout),
    )?);
    let use_case = ResolveIntentUseCase::new(provider);

    let mut connection = McpConnection::new(
        &config.mcp_server.host,
        config.mcp_server.port,
        &config.mcp_server.path,
        timeout,
    );

    // Cleanup must run on every exit path, success or failure.
    let result = run(&cli, &mut connection, &use_case).await;
    connection.cleanup();
    result
}

async fn run(
    cli: &Cli,
    connection: &mut McpConnection,
    use_case: &ResolveIntentUseCase,
) -> Result<()> {
    let tools = connection.connect().await?;

    let result = use_case.execute(&cli.intent, &tools).await?;

    match result {
        ResolutionResult::TextReply { content } => {
            println!("{content}");
        }
        ResolutionResult::ToolInvocation {
            tool_name,
            arguments,
        } => {
            println!("Tool: {tool_name}");
            println!(
                "Arguments: {}",
                serde_json::to_string_pretty(&arguments)?
            );

            if cli.execute {
                let session = connection
                    .session()
                    .ok_or_else(|| anyhow::anyhow!("No live MCP session to dispatch against"))?;
                let output = session.invoke(&tool_name, &arguments).await?;
                println!("Result: {}", serde_json::to_string_pretty(&output)?);
            }
        }
    }

    Ok(())
}
