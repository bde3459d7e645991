use crate::adapters::initializer::DEFAULT_REACT_NATIVE_VERSION;
use crate::app::generators::java::DEFAULT_AWS_SDK_VERSION;
use crate::domain::model::AnswerOverrides;
use crate::utils::error::{ReproError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_CONFIG_FILE: &str = "repro.toml";
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Where operation names are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OperationsSourceKind {
    Npm,
    Registry,
    #[default]
    None,
}

impl fmt::Display for OperationsSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationsSourceKind::Npm => "npm",
            OperationsSourceKind::Registry => "registry",
            OperationsSourceKind::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for OperationsSourceKind {
    type Err = ReproError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(OperationsSourceKind::Npm),
            "registry" => Ok(OperationsSourceKind::Registry),
            "none" | "off" => Ok(OperationsSourceKind::None),
            other => Err(ReproError::InvalidConfigValueError {
                field: "operations_source".to_string(),
                value: other.to_string(),
                reason: "Valid sources: npm, registry, none".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReproConfig {
    pub defaults: DefaultsConfig,
    pub java: JavaConfig,
    pub javascript: JavaScriptConfig,
}

/// 預設答案，命令列參數會覆蓋這裡的值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub sdk: Option<String>,
    pub environment: Option<String>,
    pub project_name: Option<String>,
    pub service: Option<String>,
    pub operation: Option<String>,
    pub region: Option<String>,
    pub output_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaConfig {
    pub aws_sdk_version: String,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            aws_sdk_version: DEFAULT_AWS_SDK_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaScriptConfig {
    pub registry_url: String,
    pub operations_source: OperationsSourceKind,
    pub react_native_version: String,
    pub lookup_timeout_seconds: u64,
}

impl Default for JavaScriptConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            operations_source: OperationsSourceKind::None,
            react_native_version: DEFAULT_REACT_NATIVE_VERSION.to_string(),
            lookup_timeout_seconds: 60,
        }
    }
}

impl ReproConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReproError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReproError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// An explicit path must exist; otherwise `repro.toml` is read when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Self::from_file(path)
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    tracing::info!("📁 Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::from_file(default_path)
                } else {
                    tracing::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// 替換環境變數 (例如 ${AWS_REGION})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReproError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn answer_defaults(&self) -> AnswerOverrides {
        AnswerOverrides {
            sdk: self.defaults.sdk.clone(),
            environment: self.defaults.environment.clone(),
            project_name: self.defaults.project_name.clone(),
            service: self.defaults.service.clone(),
            operation: self.defaults.operation.clone(),
            region: self.defaults.region.clone(),
        }
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        self.defaults.output_dir.as_ref().map(PathBuf::from)
    }
}

impl Validate for ReproConfig {
    fn validate(&self) -> Result<()> {
        validate_url("javascript.registry_url", &self.javascript.registry_url)?;
        validate_non_empty_string("java.aws_sdk_version", &self.java.aws_sdk_version)?;
        validate_non_empty_string(
            "javascript.react_native_version",
            &self.javascript.react_native_version,
        )?;
        validate_positive_number(
            "javascript.lookup_timeout_seconds",
            self.javascript.lookup_timeout_seconds,
            1,
        )?;
        if let Some(dir) = &self.defaults.output_dir {
            validate_path("defaults.output_dir", dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ReproConfig::from_toml_str("").unwrap();
        assert_eq!(config.java.aws_sdk_version, "2.20.136");
        assert_eq!(config.javascript.registry_url, "https://registry.npmjs.org");
        assert_eq!(config.javascript.operations_source, OperationsSourceKind::None);
        assert_eq!(config.javascript.react_native_version, "0.76.6");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[defaults]
sdk = "java"
service = "dynamodb"
operation = "ListTables"
region = "eu-west-1"
output_dir = "./repros"

[java]
aws_sdk_version = "2.25.0"

[javascript]
operations_source = "registry"
registry_url = "http://localhost:4873"
"#;

        let config = ReproConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.defaults.sdk.as_deref(), Some("java"));
        assert_eq!(config.java.aws_sdk_version, "2.25.0");
        assert_eq!(config.javascript.operations_source, OperationsSourceKind::Registry);
        assert_eq!(config.output_dir(), Some(PathBuf::from("./repros")));
        assert_eq!(config.answer_defaults().region.as_deref(), Some("eu-west-1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("REPRO_TEST_REGION", "ap-northeast-1");

        let config = ReproConfig::from_toml_str(
            r#"
[defaults]
region = "${REPRO_TEST_REGION}"
operation = "${REPRO_TEST_UNSET_OPERATION}"
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(
            config.defaults.operation.as_deref(),
            Some("${REPRO_TEST_UNSET_OPERATION}")
        );

        std::env::remove_var("REPRO_TEST_REGION");
    }

    #[test]
    fn test_config_validation() {
        let config = ReproConfig::from_toml_str(
            r#"
[javascript]
registry_url = "not a url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = ReproConfig::from_toml_str(
            r#"
[javascript]
lookup_timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_and_source() {
        assert!(ReproConfig::from_toml_str("[defaults\nsdk=").is_err());
        assert!(ReproConfig::from_toml_str("[javascript]\noperations_source = \"pip\"").is_err());
        assert_eq!("NPM".parse::<OperationsSourceKind>().unwrap(), OperationsSourceKind::Npm);
        assert!("pip".parse::<OperationsSourceKind>().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\nsdk = \"js\"\nenvironment = \"browser\"\n")
            .unwrap();

        let config = ReproConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.defaults.environment.as_deref(), Some("browser"));

        assert!(ReproConfig::load(Some(Path::new("/definitely/missing/repro.toml"))).is_err());
    }
}
