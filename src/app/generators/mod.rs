pub mod browser;
pub mod java;
pub mod node;
pub mod react_native;

pub use browser::BrowserGenerator;
pub use java::JavaGenerator;
pub use node::NodeGenerator;
pub use react_native::ReactNativeGenerator;

use crate::core::template::TemplateVars;
use crate::core::{GeneratedProject, ProjectAnswers, ProjectGenerator, ProjectInitializer, Storage};
use crate::domain::model::{JsEnvironment, SdkLanguage};
use crate::utils::error::{ReproError, Result};
use async_trait::async_trait;
use std::path::Path;

/// Variables shared by every JavaScript template.
pub fn js_template_vars(answers: &ProjectAnswers) -> TemplateVars {
    TemplateVars::new()
        .set("package", answers.service.js_package())
        .set("serviceClient", answers.service.js_client())
        .set("service", answers.service.iam_prefix())
        .set("operationCommand", answers.operation.command())
        .set("Operation", answers.operation.pascal())
        .set("region", answers.region.code())
        .set("projectName", answers.project_name.as_str())
}

/// The generator picked for a set of answers.
pub enum AnyGenerator<I: ProjectInitializer> {
    Java(JavaGenerator),
    Node(NodeGenerator),
    Browser(BrowserGenerator),
    ReactNative(ReactNativeGenerator<I>),
}

impl<I: ProjectInitializer> AnyGenerator<I> {
    pub fn for_answers(answers: &ProjectAnswers, aws_sdk_version: &str, initializer: I) -> Result<Self> {
        match (answers.sdk, answers.environment) {
            (SdkLanguage::Java, _) => Ok(AnyGenerator::Java(JavaGenerator::new(aws_sdk_version))),
            (SdkLanguage::JavaScript, Some(JsEnvironment::Node)) => Ok(AnyGenerator::Node(NodeGenerator)),
            (SdkLanguage::JavaScript, Some(JsEnvironment::Browser)) => {
                Ok(AnyGenerator::Browser(BrowserGenerator))
            }
            (SdkLanguage::JavaScript, Some(JsEnvironment::ReactNative)) => Ok(
                AnyGenerator::ReactNative(ReactNativeGenerator::new(initializer)),
            ),
            (SdkLanguage::JavaScript, None) => Err(ReproError::validation(
                "environment",
                "Invalid environment: none selected",
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnyGenerator::Java(_) => "java",
            AnyGenerator::Node(_) => "node",
            AnyGenerator::Browser(_) => "browser",
            AnyGenerator::ReactNative(_) => "react-native",
        }
    }
}

#[async_trait]
impl<I: ProjectInitializer> ProjectGenerator for AnyGenerator<I> {
    async fn prepare(&self, answers: &ProjectAnswers, parent_dir: &Path) -> Result<()> {
        match self {
            AnyGenerator::Java(g) => g.prepare(answers, parent_dir).await,
            AnyGenerator::Node(g) => g.prepare(answers, parent_dir).await,
            AnyGenerator::Browser(g) => g.prepare(answers, parent_dir).await,
            AnyGenerator::ReactNative(g) => g.prepare(answers, parent_dir).await,
        }
    }

    fn creates_own_directory(&self) -> bool {
        match self {
            AnyGenerator::Java(g) => g.creates_own_directory(),
            AnyGenerator::Node(g) => g.creates_own_directory(),
            AnyGenerator::Browser(g) => g.creates_own_directory(),
            AnyGenerator::ReactNative(g) => g.creates_own_directory(),
        }
    }

    async fn generate<S: Storage>(
        &self,
        answers: &ProjectAnswers,
        storage: &S,
    ) -> Result<GeneratedProject> {
        match self {
            AnyGenerator::Java(g) => g.generate(answers, storage).await,
            AnyGenerator::Node(g) => g.generate(answers, storage).await,
            AnyGenerator::Browser(g) => g.generate(answers, storage).await,
            AnyGenerator::ReactNative(g) => g.generate(answers, storage).await,
        }
    }
}
