use crate::core::operations::OperationName;
use crate::core::regions::AwsRegion;
use crate::domain::services::AwsService;
use crate::utils::error::{ReproError, Result};
use crate::utils::text::alphanumeric_only;
use crate::utils::validation::{validate_project_name, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SdkLanguage {
    #[serde(rename = "js")]
    JavaScript,
    #[serde(rename = "java")]
    Java,
}

impl SdkLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SdkLanguage::JavaScript => "js",
            SdkLanguage::Java => "java",
        }
    }
}

impl fmt::Display for SdkLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SdkLanguage {
    type Err = ReproError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "js" | "javascript" => Ok(SdkLanguage::JavaScript),
            "java" => Ok(SdkLanguage::Java),
            other => Err(ReproError::validation(
                "sdk",
                format!("Unsupported SDK: {} (expected js or java)", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsEnvironment {
    Node,
    Browser,
    ReactNative,
}

impl JsEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsEnvironment::Node => "node",
            JsEnvironment::Browser => "browser",
            JsEnvironment::ReactNative => "react-native",
        }
    }
}

impl fmt::Display for JsEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsEnvironment {
    type Err = ReproError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "node" | "nodejs" | "node.js" => Ok(JsEnvironment::Node),
            "browser" => Ok(JsEnvironment::Browser),
            "react-native" | "reactnative" | "rn" => Ok(JsEnvironment::ReactNative),
            other => Err(ReproError::validation(
                "environment",
                format!("Invalid environment: {}", other),
            )),
        }
    }
}

/// 使用者給的原始值，來源可能是命令列或設定檔，尚未驗證
#[derive(Debug, Clone, Default)]
pub struct AnswerOverrides {
    pub sdk: Option<String>,
    pub environment: Option<String>,
    pub project_name: Option<String>,
    pub service: Option<String>,
    pub operation: Option<String>,
    pub region: Option<String>,
}

impl AnswerOverrides {
    /// Fields set on `self` win over `fallback`.
    pub fn or(self, fallback: AnswerOverrides) -> AnswerOverrides {
        AnswerOverrides {
            sdk: self.sdk.or(fallback.sdk),
            environment: self.environment.or(fallback.environment),
            project_name: self.project_name.or(fallback.project_name),
            service: self.service.or(fallback.service),
            operation: self.operation.or(fallback.operation),
            region: self.region.or(fallback.region),
        }
    }
}

/// Everything needed to generate one reproduction project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnswers {
    pub project_name: String,
    pub sdk: SdkLanguage,
    /// Only set for JavaScript projects.
    pub environment: Option<JsEnvironment>,
    pub service: AwsService,
    pub operation: OperationName,
    pub region: AwsRegion,
}

impl ProjectAnswers {
    /// The directory the project lands in. React Native only allows
    /// alphanumeric project names.
    pub fn directory_name(&self) -> String {
        match self.environment {
            Some(JsEnvironment::ReactNative) if self.sdk == SdkLanguage::JavaScript => {
                alphanumeric_only(&self.project_name)
            }
            _ => self.project_name.clone(),
        }
    }

    /// `package.json` name: lower-cased, spaces turned into hyphens.
    pub fn package_name(&self) -> String {
        self.project_name.to_lowercase().replace(' ', "-")
    }
}

impl Validate for ProjectAnswers {
    fn validate(&self) -> Result<()> {
        validate_project_name(&self.project_name)?;

        match (self.sdk, self.environment) {
            (SdkLanguage::JavaScript, None) => {
                return Err(ReproError::validation(
                    "environment",
                    "A JavaScript project needs an environment (node, browser, react-native)",
                ));
            }
            (SdkLanguage::Java, Some(env)) => {
                return Err(ReproError::validation(
                    "environment",
                    format!("Environment '{}' does not apply to Java projects", env),
                ));
            }
            _ => {}
        }

        if self.directory_name().is_empty() {
            return Err(ReproError::validation(
                "project name",
                "React Native project names need at least one letter or digit",
            ));
        }

        Ok(())
    }
}

/// Files a generator wrote, relative to the project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedProject {
    pub files: Vec<String>,
    pub directories: Vec<String>,
}

impl GeneratedProject {
    pub fn add_file(&mut self, path: &str) {
        self.files.push(path.to_string());
    }

    pub fn add_directory(&mut self, path: &str) {
        self.directories.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(sdk: SdkLanguage, environment: Option<JsEnvironment>, name: &str) -> ProjectAnswers {
        ProjectAnswers {
            project_name: name.to_string(),
            sdk,
            environment,
            service: AwsService::S3,
            operation: "ListBuckets".parse().unwrap(),
            region: "us-west-1".parse().unwrap(),
        }
    }

    #[test]
    fn test_parse_sdk_and_environment() {
        assert_eq!("JS".parse::<SdkLanguage>().unwrap(), SdkLanguage::JavaScript);
        assert_eq!("java".parse::<SdkLanguage>().unwrap(), SdkLanguage::Java);
        assert!("go".parse::<SdkLanguage>().is_err());
        assert_eq!(
            "react-native".parse::<JsEnvironment>().unwrap(),
            JsEnvironment::ReactNative
        );
        assert!("deno".parse::<JsEnvironment>().is_err());
    }

    #[test]
    fn test_directory_name_for_react_native() {
        let a = answers(
            SdkLanguage::JavaScript,
            Some(JsEnvironment::ReactNative),
            "my-repro_app",
        );
        assert_eq!(a.directory_name(), "myreproapp");

        let a = answers(SdkLanguage::JavaScript, Some(JsEnvironment::Node), "my-repro_app");
        assert_eq!(a.directory_name(), "my-repro_app");
    }

    #[test]
    fn test_package_name() {
        let a = answers(SdkLanguage::JavaScript, Some(JsEnvironment::Node), "My Repro");
        assert_eq!(a.package_name(), "my-repro");
    }

    #[test]
    fn test_validate_environment_matches_sdk() {
        assert!(answers(SdkLanguage::JavaScript, None, "x").validate().is_err());
        assert!(answers(SdkLanguage::Java, Some(JsEnvironment::Node), "x")
            .validate()
            .is_err());
        assert!(answers(SdkLanguage::Java, None, "x").validate().is_ok());
        assert!(
            answers(SdkLanguage::JavaScript, Some(JsEnvironment::ReactNative), "---")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_overrides_precedence() {
        let flags = AnswerOverrides {
            region: Some("eu-west-1".to_string()),
            ..Default::default()
        };
        let file = AnswerOverrides {
            region: Some("us-east-1".to_string()),
            service: Some("iam".to_string()),
            ..Default::default()
        };
        let merged = flags.or(file);
        assert_eq!(merged.region.as_deref(), Some("eu-west-1"));
        assert_eq!(merged.service.as_deref(), Some("iam"));
        assert!(merged.sdk.is_none());
    }
}
