use clap::Parser;
use create_aws_sdk_repro::adapters::operation_source;
use create_aws_sdk_repro::config::prompt::{LinePrompter, Prompter};
use create_aws_sdk_repro::config::{OperationsSourceKind, ReproConfig};
use create_aws_sdk_repro::core::regions::{display_name, region_suggestions};
use create_aws_sdk_repro::core::scaffold::success_message;
use create_aws_sdk_repro::utils::{logger, validation::Validate};
use create_aws_sdk_repro::{
    AnswerResolver, AnyGenerator, CliConfig, NpxReactNativeInitializer, ReproError, Result,
    Scaffolder,
};
use std::io::IsTerminal;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        if matches!(e, ReproError::Cancelled) {
            println!("{}", e.user_friendly_message());
        } else {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: CliConfig) -> Result<()> {
    if cli.list_regions {
        for code in region_suggestions("") {
            println!("{:<16} {}", code, display_name(code));
        }
        return Ok(());
    }

    let config = ReproConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let source_kind = match &cli.operations_source {
        Some(kind) => kind.parse::<OperationsSourceKind>()?,
        None => config.javascript.operations_source,
    };
    let source = operation_source(source_kind, &config.javascript)?;

    let interactive = !cli.yes && std::io::stdin().is_terminal();
    let mut line_prompter = LinePrompter::stdio();
    let prompter: Option<&mut dyn Prompter> = if interactive {
        Some(&mut line_prompter)
    } else {
        tracing::debug!("Not prompting; missing answers use defaults");
        None
    };

    let given = cli.overrides().or(config.answer_defaults());
    let answers = AnswerResolver::new(given, prompter, source.as_ref())
        .resolve()
        .await?;

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| config.output_dir())
        .unwrap_or_else(|| PathBuf::from("."));
    let initializer = NpxReactNativeInitializer::new(config.javascript.react_native_version.clone());
    let generator = AnyGenerator::for_answers(&answers, &config.java.aws_sdk_version, initializer)?;
    tracing::debug!("Using {} generator", generator.name());
    let scaffolder = Scaffolder::new(generator, output_dir);

    if cli.dry_run {
        let (project_dir, storage) = scaffolder.plan(&answers).await?;
        println!("Would create {}:", project_dir.display());
        for dir in storage.directories() {
            println!("  {}/", dir);
        }
        for file in storage.file_paths() {
            println!("  {}", file);
        }
        return Ok(());
    }

    let outcome = scaffolder.run(&answers).await?;
    println!("{}", success_message(&answers, &outcome.project_dir));
    Ok(())
}
