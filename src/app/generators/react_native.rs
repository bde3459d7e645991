use super::js_template_vars;
use crate::core::template::render_strict;
use crate::core::{
    GeneratedProject, ProjectAnswers, ProjectGenerator, ProjectInitializer, Storage,
};
use crate::utils::error::{ReproError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::path::Path;

const APP_JS: &str = include_str!("../../templates/react_native/App.js");
const COGNITO_SETUP: &str = include_str!("../../templates/react_native/COGNITO_SETUP.md");

/// Lets the React Native CLI build the native skeleton, then swaps in an
/// `App.js` that makes the call.
pub struct ReactNativeGenerator<I: ProjectInitializer> {
    initializer: I,
}

impl<I: ProjectInitializer> ReactNativeGenerator<I> {
    pub fn new(initializer: I) -> Self {
        Self { initializer }
    }

    /// Adds the SDK, Cognito and polyfill packages to whatever the CLI wrote.
    pub fn merge_dependencies(
        mut manifest: serde_json::Value,
        answers: &ProjectAnswers,
    ) -> Result<serde_json::Value> {
        let root = manifest
            .as_object_mut()
            .ok_or_else(|| ReproError::ConfigError {
                message: "package.json is not a JSON object".to_string(),
            })?;

        let dependencies = root
            .entry("dependencies")
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .ok_or_else(|| ReproError::ConfigError {
                message: "package.json dependencies is not a JSON object".to_string(),
            })?;

        dependencies.insert(answers.service.js_package(), json!("latest"));
        for (name, version) in [
            ("@aws-sdk/client-cognito-identity", "latest"),
            ("@aws-sdk/credential-provider-cognito-identity", "latest"),
            ("react-native-get-random-values", "^1.11.0"),
            ("react-native-url-polyfill", "^2.0.0"),
            ("web-streams-polyfill", "^4.0.0"),
        ] {
            dependencies.insert(name.to_string(), json!(version));
        }

        Ok(manifest)
    }

    async fn existing_manifest<S: Storage>(storage: &S, answers: &ProjectAnswers) -> Result<serde_json::Value> {
        match storage.read_file("package.json").await {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(ReproError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                // dry-run 時沒有 CLI 產生的 package.json
                tracing::debug!("No package.json from the React Native CLI, starting empty");
                Ok(json!({ "name": answers.directory_name(), "version": "0.0.1", "private": true }))
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<I: ProjectInitializer> ProjectGenerator for ReactNativeGenerator<I> {
    async fn prepare(&self, answers: &ProjectAnswers, parent_dir: &Path) -> Result<()> {
        self.initializer
            .initialize(&answers.directory_name(), parent_dir)
            .await
    }

    fn creates_own_directory(&self) -> bool {
        true
    }

    async fn generate<S: Storage>(
        &self,
        answers: &ProjectAnswers,
        storage: &S,
    ) -> Result<GeneratedProject> {
        let mut project = GeneratedProject::default();
        let vars = js_template_vars(answers).set("projectName", answers.directory_name());

        let manifest = Self::existing_manifest(storage, answers).await?;
        let manifest = Self::merge_dependencies(manifest, answers)?;
        let pkg = serde_json::to_string_pretty(&manifest)?;
        storage.write_file("package.json", pkg.as_bytes()).await?;
        project.add_file("package.json");

        let app = render_strict("App.js", APP_JS, &vars)?;
        storage.write_file("App.js", app.as_bytes()).await?;
        project.add_file("App.js");

        let setup = render_strict("COGNITO_SETUP.md", COGNITO_SETUP, &vars)?;
        storage.write_file("COGNITO_SETUP.md", setup.as_bytes()).await?;
        project.add_file("COGNITO_SETUP.md");

        Ok(project)
    }
}
