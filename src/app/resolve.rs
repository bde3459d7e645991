use crate::config::prompt::{Choice, Prompter};
use crate::core::operations::{discover_operations, OperationName};
use crate::core::regions::AwsRegion;
use crate::core::OperationSource;
use crate::domain::model::{AnswerOverrides, JsEnvironment, ProjectAnswers, SdkLanguage};
use crate::domain::services::AwsService;
use crate::utils::error::{ReproError, Result};
use crate::utils::text::alphanumeric_only;
use crate::utils::validation::{validate_project_name, Validate};
use std::str::FromStr;

pub const DEFAULT_OPERATION: &str = "ListBuckets";
pub const DEFAULT_REGION: &str = "us-west-1";

pub fn default_project_name() -> String {
    format!("aws-sdk-repro{}", chrono::Utc::now().timestamp_millis())
}

fn reason(error: ReproError) -> String {
    match error {
        ReproError::ValidationError { message, .. } => message,
        other => other.to_string(),
    }
}

/// Turns flags, config defaults and (optionally) prompts into validated answers.
///
/// Values that were given up front are never prompted for; invalid ones fail
/// immediately. Missing values are asked for when a prompter is present and
/// fall back to the built-in defaults otherwise.
pub struct AnswerResolver<'a> {
    given: AnswerOverrides,
    prompter: Option<&'a mut dyn Prompter>,
    source: &'a dyn OperationSource,
}

impl<'a> AnswerResolver<'a> {
    pub fn new(
        given: AnswerOverrides,
        prompter: Option<&'a mut dyn Prompter>,
        source: &'a dyn OperationSource,
    ) -> Self {
        Self {
            given,
            prompter,
            source,
        }
    }

    pub async fn resolve(mut self) -> Result<ProjectAnswers> {
        let sdk = self.sdk()?;
        let environment = match sdk {
            SdkLanguage::JavaScript => Some(self.environment()?),
            SdkLanguage::Java => {
                if let Some(env) = &self.given.environment {
                    tracing::warn!("Ignoring environment '{}' for a Java project", env);
                }
                None
            }
        };
        let project_name = self.project_name(environment)?;
        let service = self.service(sdk)?;

        let available = discover_operations(self.source, &service.js_package()).await;
        let operation = self.operation(&available)?;
        let region = self.region(sdk)?;

        let answers = ProjectAnswers {
            project_name,
            sdk,
            environment,
            service,
            operation,
            region,
        };
        answers.validate()?;
        tracing::debug!("Resolved answers: {:?}", answers);
        Ok(answers)
    }

    fn choose<T: FromStr<Err = ReproError>>(
        &mut self,
        given: Option<String>,
        message: &str,
        choices: &[Choice],
    ) -> Result<T> {
        if let Some(value) = given {
            return value.parse();
        }
        match self.prompter.as_deref_mut() {
            Some(prompter) => prompter.select(message, choices, 0)?.parse(),
            None => choices
                .first()
                .ok_or_else(|| ReproError::validation(message, "No choices available"))?
                .value
                .parse(),
        }
    }

    fn ask<T>(
        &mut self,
        given: Option<String>,
        message: &str,
        default: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        if let Some(value) = given {
            return parse(&value);
        }
        match self.prompter.as_deref_mut() {
            Some(prompter) => {
                let check = |v: &str| parse(v).map(|_| ()).map_err(reason);
                let answer = prompter.text(message, default, &check)?;
                parse(&answer)
            }
            None => parse(default),
        }
    }

    fn sdk(&mut self) -> Result<SdkLanguage> {
        let given = self.given.sdk.take();
        self.choose(
            given,
            "Select AWS SDK language:",
            &[Choice::new("JavaScript", "js"), Choice::new("Java", "java")],
        )
    }

    fn environment(&mut self) -> Result<JsEnvironment> {
        let given = self.given.environment.take();
        self.choose(
            given,
            "Select JavaScript environment:",
            &[
                Choice::new("Node.js", "node"),
                Choice::new("Browser", "browser"),
                Choice::new("React Native", "react-native"),
            ],
        )
    }

    fn project_name(&mut self, environment: Option<JsEnvironment>) -> Result<String> {
        let given = self.given.project_name.take();
        self.ask(given, "Enter project name:", &default_project_name(), |v| {
            let name = v.trim();
            validate_project_name(name)?;
            // React Native 只保留英數字元，清完不能是空的
            if environment == Some(JsEnvironment::ReactNative) && alphanumeric_only(name).is_empty() {
                return Err(ReproError::validation(
                    "project name",
                    "React Native project names need at least one letter or digit",
                ));
            }
            Ok(name.to_string())
        })
    }

    fn service(&mut self, sdk: SdkLanguage) -> Result<AwsService> {
        let given = self.given.service.take();
        let choices: Vec<Choice> = AwsService::ALL
            .iter()
            .map(|s| Choice::new(s.title(), s.java_package()))
            .collect();
        let message = format!("Select AWS service for {}:", sdk.as_str().to_uppercase());
        self.choose(given, &message, &choices)
    }

    fn operation(&mut self, available: &[String]) -> Result<OperationName> {
        let given = self.given.operation.take();
        self.ask(given, "Enter AWS service operation:", DEFAULT_OPERATION, |v| {
            let operation: OperationName = v.parse()?;
            operation.check_against(available)?;
            Ok(operation)
        })
    }

    fn region(&mut self, sdk: SdkLanguage) -> Result<AwsRegion> {
        let given = self.given.region.take();
        let default = match sdk {
            SdkLanguage::Java => crate::core::regions::standard_region_to_java(DEFAULT_REGION),
            SdkLanguage::JavaScript => DEFAULT_REGION.to_string(),
        };
        self.ask(given, "Enter AWS region:", &default, AwsRegion::from_str)
    }
}
