use crate::adapters::{LocalStorage, MemoryStorage};
use crate::core::ProjectGenerator;
use crate::domain::model::{GeneratedProject, JsEnvironment, ProjectAnswers, SdkLanguage};
use crate::utils::error::{ReproError, Result};
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub project_dir: PathBuf,
    pub project: GeneratedProject,
}

/// Drives one generator: directory checks, generation, cleanup on failure.
pub struct Scaffolder<G: ProjectGenerator> {
    generator: G,
    output_dir: PathBuf,
}

impl<G: ProjectGenerator> Scaffolder<G> {
    pub fn new(generator: G, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator,
            output_dir: output_dir.into(),
        }
    }

    pub fn project_dir(&self, answers: &ProjectAnswers) -> PathBuf {
        self.output_dir.join(answers.directory_name())
    }

    pub async fn run(&self, answers: &ProjectAnswers) -> Result<ScaffoldOutcome> {
        answers.validate()?;

        let project_dir = self.project_dir(answers);
        if project_dir.exists() {
            return Err(ReproError::DirectoryExistsError {
                path: project_dir.display().to_string(),
            });
        }

        tracing::info!(
            "🚀 Creating {} project '{}' ({} {} in {})",
            answers.sdk,
            answers.project_name,
            answers.service,
            answers.operation,
            answers.region
        );

        match self.build(answers, &project_dir).await {
            Ok(project) => {
                tracing::info!("✅ Wrote {} files", project.files.len());
                Ok(ScaffoldOutcome {
                    project_dir,
                    project,
                })
            }
            Err(e) => {
                tracing::error!("❌ Generation failed, cleaning up: {}", e);
                cleanup_on_error(&project_dir);
                Err(e)
            }
        }
    }

    async fn build(&self, answers: &ProjectAnswers, project_dir: &Path) -> Result<GeneratedProject> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        if !self.generator.creates_own_directory() {
            tokio::fs::create_dir(project_dir).await?;
        }

        self.generator.prepare(answers, &self.output_dir).await?;

        if !project_dir.is_dir() {
            return Err(ReproError::ConfigError {
                message: format!("Project directory {} was not created", project_dir.display()),
            });
        }

        let storage = LocalStorage::new(project_dir);
        self.generator.generate(answers, &storage).await
    }

    /// Renders into memory only. Nothing external runs and nothing is written.
    /// Refuses an existing target the same way `run` does.
    pub async fn plan(&self, answers: &ProjectAnswers) -> Result<(PathBuf, MemoryStorage)> {
        answers.validate()?;
        let project_dir = self.project_dir(answers);
        if project_dir.exists() {
            return Err(ReproError::DirectoryExistsError {
                path: project_dir.display().to_string(),
            });
        }
        let storage = MemoryStorage::new();
        self.generator.generate(answers, &storage).await?;
        Ok((project_dir, storage))
    }
}

fn cleanup_on_error(project_dir: &Path) {
    if project_dir.exists() {
        if let Err(e) = std::fs::remove_dir_all(project_dir) {
            tracing::warn!("Could not remove {}: {}", project_dir.display(), e);
        }
    }
}

/// Shell steps printed after a successful run.
pub fn next_steps(answers: &ProjectAnswers) -> Vec<String> {
    let dir = answers.directory_name();
    let mut steps = vec![format!("cd {}", dir)];

    match (answers.sdk, answers.environment) {
        (SdkLanguage::Java, _) => {
            steps.push("mvn clean package".to_string());
            steps.push("java -jar target/aws-sdk-repro.jar".to_string());
        }
        (SdkLanguage::JavaScript, Some(JsEnvironment::Browser)) => {
            steps.push("npm install".to_string());
            steps.push("echo VITE_COGNITO_IDENTITY_POOL_ID=<pool-id> > .env".to_string());
            steps.push("npm start".to_string());
        }
        (SdkLanguage::JavaScript, Some(JsEnvironment::ReactNative)) => {
            steps.push("npm install".to_string());
            steps.push("# update IDENTITY_POOL_ID in App.js".to_string());
            steps.push("cd ios && pod install && cd ..  # macOS only".to_string());
            steps.push("npm run ios  # or: npm run android".to_string());
        }
        (SdkLanguage::JavaScript, _) => {
            steps.push("npm install".to_string());
            steps.push("npm start".to_string());
        }
    }

    steps
}

pub fn success_message(answers: &ProjectAnswers, project_dir: &Path) -> String {
    let shown = std::fs::canonicalize(project_dir).unwrap_or_else(|_| project_dir.to_path_buf());
    let mut message = format!(
        "✅ Successfully created {} project at:\n{}\n",
        answers.sdk.as_str().to_uppercase(),
        shown.display()
    );

    if answers.directory_name() != answers.project_name {
        message.push_str(&format!(
            "\nNote: Project directory name was sanitized to \"{}\" (alphanumeric only)\n",
            answers.directory_name()
        ));
    }

    message.push_str("\n  Next steps:\n");
    for step in next_steps(answers) {
        message.push_str(&format!("  {}\n", step));
    }
    message
}
