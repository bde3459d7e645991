use crate::domain::ports::ProjectInitializer;
use crate::utils::error::{ReproError, Result};
use async_trait::async_trait;
use std::path::Path;

pub const DEFAULT_REACT_NATIVE_VERSION: &str = "0.76.6";

/// Runs the React Native community CLI to create `ios/` and `android/`.
#[derive(Debug, Clone)]
pub struct NpxReactNativeInitializer {
    npx_program: String,
    react_native_version: String,
}

impl NpxReactNativeInitializer {
    pub fn new(react_native_version: impl Into<String>) -> Self {
        Self {
            npx_program: "npx".to_string(),
            react_native_version: react_native_version.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.npx_program = program.into();
        self
    }

    pub fn args(&self, project_name: &str) -> Vec<String> {
        vec![
            "@react-native-community/cli@latest".to_string(),
            "init".to_string(),
            project_name.to_string(),
            "--version".to_string(),
            self.react_native_version.clone(),
            "--skip-install".to_string(),
        ]
    }
}

impl Default for NpxReactNativeInitializer {
    fn default() -> Self {
        Self::new(DEFAULT_REACT_NATIVE_VERSION)
    }
}

#[async_trait]
impl ProjectInitializer for NpxReactNativeInitializer {
    async fn initialize(&self, project_name: &str, parent_dir: &Path) -> Result<()> {
        println!("\nInitializing React Native project (this may take a few minutes)...");

        let args = self.args(project_name);
        let command_line = format!("{} {}", self.npx_program, args.join(" "));
        tracing::debug!("Running: {}", command_line);

        // 讓使用者看到 CLI 的輸出
        let status = tokio::process::Command::new(&self.npx_program)
            .args(&args)
            .current_dir(parent_dir)
            .status()
            .await
            .map_err(|e| ReproError::CommandError {
                command: command_line.clone(),
                message: format!("Failed to initialize React Native project: {}", e),
            })?;

        if !status.success() {
            return Err(ReproError::CommandError {
                command: command_line,
                message: format!("Failed to initialize React Native project: {}", status),
            });
        }

        println!("\nReact Native project initialized successfully!");
        println!("Customizing project files...\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_arguments() {
        let init = NpxReactNativeInitializer::default();
        assert_eq!(
            init.args("MyRepro").join(" "),
            "@react-native-community/cli@latest init MyRepro --version 0.76.6 --skip-install"
        );
    }

    #[tokio::test]
    async fn test_missing_npx_is_reported() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let init = NpxReactNativeInitializer::default().with_program("definitely-not-npx-binary");
        let err = init.initialize("MyRepro", temp_dir.path()).await.unwrap_err();
        assert!(matches!(err, ReproError::CommandError { .. }));
    }
}
