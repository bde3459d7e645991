pub mod prompt;
pub mod toml_config;

pub use toml_config::{OperationsSourceKind, ReproConfig};

#[cfg(feature = "cli")]
use crate::domain::model::AnswerOverrides;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "create-aws-sdk-repro")]
#[command(about = "Scaffold a minimal project that reproduces one AWS SDK call")]
#[command(version)]
pub struct CliConfig {
    #[arg(long, help = "SDK language: js or java")]
    pub sdk: Option<String>,

    #[arg(long, help = "JavaScript environment: node, browser or react-native")]
    pub environment: Option<String>,

    #[arg(long, help = "Project (and directory) name")]
    pub project_name: Option<String>,

    #[arg(long, help = "AWS service: s3, dynamodb, ec2, iam or lambda")]
    pub service: Option<String>,

    #[arg(long, help = "Operation, e.g. ListBuckets or list-buckets")]
    pub operation: Option<String>,

    #[arg(long, help = "AWS region, e.g. us-west-1 or US_WEST_1")]
    pub region: Option<String>,

    #[arg(long, help = "Directory the project is created in")]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, help = "TOML configuration file (default: ./repro.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Operation lookup: npm, registry or none")]
    pub operations_source: Option<String>,

    #[arg(short, long, help = "Never prompt; use defaults for missing answers")]
    pub yes: bool,

    #[arg(long, help = "Print the files that would be written and stop")]
    pub dry_run: bool,

    #[arg(long, help = "Print the known AWS regions and exit")]
    pub list_regions: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> AnswerOverrides {
        AnswerOverrides {
            sdk: self.sdk.clone(),
            environment: self.environment.clone(),
            project_name: self.project_name.clone(),
            service: self.service.clone(),
            operation: self.operation.clone(),
            region: self.region.clone(),
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "create-aws-sdk-repro",
            "--sdk",
            "java",
            "--service",
            "dynamodb",
            "--operation",
            "ListTables",
            "--region",
            "EU_WEST_1",
            "-y",
            "--dry-run",
        ]);
        assert!(cli.yes);
        assert!(cli.dry_run);
        assert!(!cli.verbose);

        let overrides = cli.overrides();
        assert_eq!(overrides.sdk.as_deref(), Some("java"));
        assert_eq!(overrides.region.as_deref(), Some("EU_WEST_1"));
        assert!(overrides.environment.is_none());
    }

    #[test]
    fn test_flags_win_over_config_defaults() {
        let cli = CliConfig::parse_from(["create-aws-sdk-repro", "--region", "ap-south-1"]);
        let defaults = AnswerOverrides {
            region: Some("us-east-1".to_string()),
            service: Some("s3".to_string()),
            ..Default::default()
        };
        let merged = cli.overrides().or(defaults);
        assert_eq!(merged.region.as_deref(), Some("ap-south-1"));
        assert_eq!(merged.service.as_deref(), Some("s3"));
    }
}
