use crate::core::operations::{operation_from_command_file, operations_from_exports};
use crate::domain::ports::OperationSource;
use crate::utils::error::{ReproError, Result};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;

/// Installs the client package into a scratch directory and inspects it.
#[derive(Debug, Clone)]
pub struct NpmOperationSource {
    npm_program: String,
    timeout: Duration,
}

impl NpmOperationSource {
    pub fn new(timeout: Duration) -> Self {
        Self {
            npm_program: "npm".to_string(),
            timeout,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.npm_program = program.into();
        self
    }

    async fn install(&self, package: &str, dir: &Path) -> Result<()> {
        let manifest = serde_json::json!({
            "name": "temp-inspector",
            "version": "1.0.0",
            "type": "module"
        });
        tokio::fs::write(dir.join("package.json"), serde_json::to_vec(&manifest)?).await?;

        println!("  Installing {}...", package);
        let spec = format!("{}@latest", package);
        let command_line = format!("{} install {}", self.npm_program, spec);

        let child = tokio::process::Command::new(&self.npm_program)
            .args([
                "install",
                spec.as_str(),
                "--no-save",
                "--silent",
                "--no-audit",
                "--no-fund",
                "--loglevel=error",
            ])
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| ReproError::CommandError {
                command: command_line.clone(),
                message: format!("timed out after {}s", self.timeout.as_secs()),
            })?
            .map_err(|e| ReproError::CommandError {
                command: command_line.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ReproError::CommandError {
                command: command_line,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl OperationSource for NpmOperationSource {
    fn name(&self) -> &'static str {
        "npm"
    }

    async fn fetch_operations(&self, package: &str) -> Result<Vec<String>> {
        let workspace = scratch_dir()?;
        self.install(package, workspace.path()).await?;

        let package_dir = package
            .split('/')
            .fold(workspace.path().join("node_modules"), |acc, part| acc.join(part));
        if !package_dir.exists() {
            return Err(ReproError::ConfigError {
                message: format!("Package not found at {}", package_dir.display()),
            });
        }

        let operations = collect_package_operations(&package_dir)?;
        Ok(operations.into_iter().collect())
    }
}

/// Reads command names from an installed client package: the `exports` map
/// of its package.json plus the `dist-cjs` and `dist-es` command folders.
pub fn collect_package_operations(package_dir: &Path) -> Result<BTreeSet<String>> {
    let manifest_path = package_dir.join("package.json");
    let manifest: serde_json::Value = serde_json::from_slice(&std::fs::read(manifest_path)?)?;

    let mut operations = manifest
        .get("exports")
        .map(operations_from_exports)
        .unwrap_or_default();

    for (folder, allow_mjs) in [("dist-cjs", false), ("dist-es", true)] {
        let commands_dir = package_dir.join(folder).join("commands");
        if !commands_dir.is_dir() {
            continue;
        }
        for entry in std::fs::read_dir(&commands_dir)? {
            let entry = entry?;
            if let Some(op) = entry
                .file_name()
                .to_str()
                .and_then(|name| operation_from_command_file(name, allow_mjs))
            {
                operations.insert(op);
            }
        }
    }

    Ok(operations)
}

/// 暫存目錄，不論成功或失敗都會在 drop 時移除
fn scratch_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix("aws-sdk-inspect-").tempdir()?)
}
