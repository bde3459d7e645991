use anyhow::Context;
use clap::Parser;
use create_aws_sdk_repro::adapters::operation_source;
use create_aws_sdk_repro::config::toml_config::{JavaScriptConfig, DEFAULT_REGISTRY_URL};
use create_aws_sdk_repro::config::OperationsSourceKind;
use create_aws_sdk_repro::core::operations::filter_operations;
use create_aws_sdk_repro::domain::services::AwsService;
use create_aws_sdk_repro::utils::logger;
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(name = "list-operations")]
#[command(about = "List the operations a JavaScript AWS SDK client package exposes")]
struct Args {
    /// Service name (s3, dynamodb, ...) or package (@aws-sdk/client-s3)
    service: String,

    /// Where to look: npm or registry
    #[arg(short, long, default_value = "npm")]
    source: String,

    /// npm registry base URL for --source registry
    #[arg(long, default_value = DEFAULT_REGISTRY_URL)]
    registry_url: String,

    /// Only show operations containing this text
    #[arg(short, long)]
    filter: Option<String>,

    /// Seconds before the lookup is abandoned
    #[arg(long, default_value = "60")]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let service: AwsService = args.service.parse()?;
    let kind: OperationsSourceKind = args.source.parse()?;
    if kind == OperationsSourceKind::None {
        anyhow::bail!("--source none has nothing to list; use npm or registry");
    }

    let javascript = JavaScriptConfig {
        registry_url: args.registry_url,
        operations_source: kind,
        lookup_timeout_seconds: args.timeout,
        ..JavaScriptConfig::default()
    };
    let source = operation_source(kind, &javascript)?;

    let package = service.js_package();
    let operations: Vec<String> = source
        .fetch_operations(&package)
        .await
        .with_context(|| format!("Failed to list operations for {} via {}", package, kind))?
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let shown: Vec<&str> = match &args.filter {
        Some(filter) => filter_operations(filter, &operations),
        None => operations.iter().map(String::as_str).collect(),
    };

    println!("📦 {} ({} operations)", package, operations.len());
    for operation in &shown {
        println!("  {}", operation);
    }
    if shown.is_empty() {
        println!("  (no matches)");
    }

    Ok(())
}
